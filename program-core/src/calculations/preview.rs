//! Preview derivations for the enrollment form.
//!
//! | Derivation                  | Shown when                                    |
//! |-----------------------------|-----------------------------------------------|
//! | [`remaining_payments_text`] | subsequent count > 0 and amount > 0           |
//! | [`bonus_weeks_text`]        | bonus weeks switch is on                      |
//! | [`upgrade_offer_visible`]   | upgrade switch is on and program is 16 weeks  |
//!
//! # Example
//!
//! ```
//! use program_core::{FormData, ProgramPreview};
//!
//! let form = FormData {
//!     subsequent_payment_count: "2".to_string(),
//!     bonus_weeks: true,
//!     ..Default::default()
//! };
//!
//! let preview = ProgramPreview::from_form(&form);
//!
//! assert_eq!(preview.remaining_payments_text, "2 payments of $300");
//! assert_eq!(
//!     preview.bonus_weeks_text,
//!     "Program includes 16 weeks plus 4 bonus weeks, for a total of 20 weeks."
//! );
//! assert!(!preview.upgrade_offer_visible);
//! ```

use std::fmt;

use serde::Serialize;

use crate::{FormData, FormField, ProgramLength};
use crate::calculations::common::parse_int_or_default;

/// Weeks added on top of the program length when bonus weeks are granted.
pub const BONUS_WEEKS: i64 = 4;

/// Total price of the full-year upgrade.
pub const UPGRADE_DISCOUNTED_RATE: &str = "$5,400";

/// Days after initial enrollment during which the upgrade may be taken.
pub const UPGRADE_WINDOW_DAYS: u32 = 30;

/// Disclosure shown when the upgrade offer is visible.
pub const UPGRADE_OFFER_TEXT: &str = "Client can upgrade to a full-year (52-week) program at a \
     discounted rate of $5,400 total. This option is available within the first 30 days of the \
     initial enrollment in the 16-week program.";

const SEPARATOR: &str = "----------------------------------------";

/// Returns `true` when both the subsequent payment count and amount parse to
/// positive integers.
pub fn has_subsequent_payments(form: &FormData) -> bool {
    parse_int_or_default(&form.subsequent_payment_count) > 0
        && parse_int_or_default(&form.subsequent_payment_amount) > 0
}

/// Describes the remaining payments, e.g. `"3 payments of $300"`.
///
/// The count and amount are echoed as entered. Returns an empty string when
/// there are no subsequent payments.
pub fn remaining_payments_text(form: &FormData) -> String {
    if !has_subsequent_payments(form) {
        return String::new();
    }

    let plural = if parse_int_or_default(&form.subsequent_payment_count) > 1 {
        "s"
    } else {
        ""
    };
    format!(
        "{} payment{} of ${}",
        form.subsequent_payment_count, plural, form.subsequent_payment_amount
    )
}

/// Describes the bonus weeks, or returns an empty string when the switch is off.
pub fn bonus_weeks_text(form: &FormData) -> String {
    if !form.bonus_weeks {
        return String::new();
    }

    let base_weeks = form.program_length.weeks();
    let total_weeks = base_weeks + BONUS_WEEKS;
    format!(
        "Program includes {base_weeks} weeks plus {BONUS_WEEKS} bonus weeks, for a total of {total_weeks} weeks."
    )
}

/// The upgrade offer applies only to 16-week programs.
pub fn upgrade_offer_visible(form: &FormData) -> bool {
    form.upgrade_option && form.program_length == ProgramLength::Sixteen
}

/// A render-ready snapshot: the form plus every derived value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProgramPreview {
    pub form: FormData,
    pub has_subsequent_payments: bool,
    pub remaining_payments_text: String,
    pub bonus_weeks_text: String,
    pub upgrade_offer_visible: bool,
}

impl ProgramPreview {
    pub fn from_form(form: &FormData) -> Self {
        Self {
            form: form.clone(),
            has_subsequent_payments: has_subsequent_payments(form),
            remaining_payments_text: remaining_payments_text(form),
            bonus_weeks_text: bonus_weeks_text(form),
            upgrade_offer_visible: upgrade_offer_visible(form),
        }
    }
}

impl fmt::Display for ProgramPreview {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        let form = &self.form;

        writeln!(f, "Client Information:")?;
        writeln!(f, "Name: {}", form.client_name)?;
        writeln!(f, "Email: {}", form.client_email)?;
        writeln!(f, "Phone: {}", form.client_phone)?;
        writeln!(f, "Address: {}", form.client_address)?;
        writeln!(f, "{SEPARATOR}")?;
        writeln!(f, "Length of Program: {} weeks", form.program_length)?;
        write!(
            f,
            "Payment Received: ${}",
            form.display_value(FormField::InitialPaymentAmount)
        )?;

        if self.has_subsequent_payments {
            write!(f, "\nRemaining Payments: {}", self.remaining_payments_text)?;
        }
        if form.bonus_weeks {
            write!(f, "\nBonus Weeks: {}", self.bonus_weeks_text)?;
        }
        if self.upgrade_offer_visible {
            write!(f, "\nUpgrade Option: {UPGRADE_OFFER_TEXT}")?;
        }
        Ok(())
    }
}
