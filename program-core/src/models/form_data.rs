use std::fmt;

use serde::{Deserialize, Serialize};

use super::{FieldUpdate, FormField, ProgramLength, ToggleField};

/// All editable values on the program enrollment form.
///
/// Numeric fields are kept as the text the user typed and are only parsed
/// when a derivation needs them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormData {
    // Client information
    pub client_name: String,
    pub client_email: String,
    pub client_phone: String,
    pub client_address: String,

    // Program details
    pub program_length: ProgramLength,
    pub initial_payment_amount: String,
    /// Shown on the form but not used by any derivation.
    pub initial_payment_count: String,
    pub subsequent_payment_amount: String,
    pub subsequent_payment_count: String,

    // Switches
    pub bonus_weeks: bool,
    pub upgrade_option: bool,
}

impl Default for FormData {
    fn default() -> Self {
        Self {
            client_name: String::new(),
            client_email: String::new(),
            client_phone: String::new(),
            client_address: String::new(),
            program_length: ProgramLength::Sixteen,
            initial_payment_amount: "5400".to_string(),
            initial_payment_count: "1".to_string(),
            subsequent_payment_amount: "300".to_string(),
            subsequent_payment_count: "0".to_string(),
            bonus_weeks: false,
            upgrade_option: false,
        }
    }
}

impl FormData {
    /// Returns a copy of this record with one field replaced.
    pub fn with_update(
        &self,
        update: FieldUpdate,
    ) -> Self {
        let mut next = self.clone();
        match update {
            FieldUpdate::ClientName(v) => next.client_name = v,
            FieldUpdate::ClientEmail(v) => next.client_email = v,
            FieldUpdate::ClientPhone(v) => next.client_phone = v,
            FieldUpdate::ClientAddress(v) => next.client_address = v,
            FieldUpdate::ProgramLength(v) => next.program_length = v,
            FieldUpdate::InitialPaymentAmount(v) => next.initial_payment_amount = v,
            FieldUpdate::InitialPaymentCount(v) => next.initial_payment_count = v,
            FieldUpdate::SubsequentPaymentAmount(v) => next.subsequent_payment_amount = v,
            FieldUpdate::SubsequentPaymentCount(v) => next.subsequent_payment_count = v,
        }
        next
    }

    /// Returns a copy of this record with one switch flipped.
    pub fn with_toggle(
        &self,
        toggle: ToggleField,
    ) -> Self {
        let mut next = self.clone();
        match toggle {
            ToggleField::BonusWeeks => next.bonus_weeks = !next.bonus_weeks,
            ToggleField::UpgradeOption => next.upgrade_option = !next.upgrade_option,
        }
        next
    }

    /// The value of `field` as it would appear in its input control.
    ///
    /// Switches read `Yes` or `No`.
    pub fn display_value(
        &self,
        field: FormField,
    ) -> &str {
        match field {
            FormField::ClientName => &self.client_name,
            FormField::ClientEmail => &self.client_email,
            FormField::ClientPhone => &self.client_phone,
            FormField::ClientAddress => &self.client_address,
            FormField::ProgramLength => self.program_length.as_str(),
            FormField::InitialPaymentAmount => &self.initial_payment_amount,
            FormField::InitialPaymentCount => &self.initial_payment_count,
            FormField::SubsequentPaymentAmount => &self.subsequent_payment_amount,
            FormField::SubsequentPaymentCount => &self.subsequent_payment_count,
            FormField::BonusWeeks => yes_no(self.bonus_weeks),
            FormField::UpgradeOption => yes_no(self.upgrade_option),
        }
    }
}

fn yes_no(value: bool) -> &'static str {
    if value { "Yes" } else { "No" }
}

impl fmt::Display for FormData {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        let width = FormField::all()
            .iter()
            .map(|field| field.label().len())
            .max()
            .unwrap_or_default()
            + 1;

        let mut fields = FormField::all().iter().peekable();
        while let Some(field) = fields.next() {
            let label = format!("{}:", field.label());
            let value = self.display_value(*field);
            if fields.peek().is_some() {
                writeln!(f, "{label:<width$} {value}")?;
            } else {
                write!(f, "{label:<width$} {value}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn default_matches_new_enrollment_values() {
        let form = FormData::default();

        assert_eq!(form.client_name, "");
        assert_eq!(form.program_length, ProgramLength::Sixteen);
        assert_eq!(form.initial_payment_amount, "5400");
        assert_eq!(form.initial_payment_count, "1");
        assert_eq!(form.subsequent_payment_amount, "300");
        assert_eq!(form.subsequent_payment_count, "0");
        assert!(!form.bonus_weeks);
        assert!(!form.upgrade_option);
    }

    #[test]
    fn with_update_replaces_only_the_named_field() {
        let form = FormData::default();

        let next = form.with_update(FieldUpdate::ClientName("Jane Roe".to_string()));

        assert_eq!(next.client_name, "Jane Roe");
        assert_eq!(
            FormData {
                client_name: String::new(),
                ..next.clone()
            },
            form
        );
    }

    #[test]
    fn with_update_leaves_source_untouched() {
        let form = FormData::default();

        let _ = form.with_update(FieldUpdate::SubsequentPaymentCount("3".to_string()));

        assert_eq!(form.subsequent_payment_count, "0");
    }

    #[test]
    fn with_toggle_flips_switch() {
        let form = FormData::default();

        let next = form.with_toggle(ToggleField::UpgradeOption);

        assert!(next.upgrade_option);
        assert!(!next.bonus_weeks);
    }

    #[test]
    fn display_value_renders_switches_as_yes_no() {
        let form = FormData {
            bonus_weeks: true,
            ..Default::default()
        };

        assert_eq!(form.display_value(FormField::BonusWeeks), "Yes");
        assert_eq!(form.display_value(FormField::UpgradeOption), "No");
        assert_eq!(form.display_value(FormField::ProgramLength), "16");
    }

    #[test]
    fn display_lists_every_field_with_label() {
        let text = FormData::default().to_string();

        assert_eq!(text.lines().count(), FormField::all().len());
        assert!(text.starts_with("Client Name:"));
        assert!(text.contains("Initial Payment:          5400"));
        assert!(text.ends_with("Upgrade Option:           No"));
    }
}
