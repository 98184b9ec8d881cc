//! Identifiers and display metadata for every field on the enrollment form.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use super::FieldError;

/// The kind of control a field is edited with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Text,
    Email,
    Tel,
    Choice,
    Switch,
}

/// Every field held by [`FormData`](super::FormData).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FormField {
    ClientName,
    ClientEmail,
    ClientPhone,
    ClientAddress,
    ProgramLength,
    InitialPaymentAmount,
    InitialPaymentCount,
    SubsequentPaymentAmount,
    SubsequentPaymentCount,
    BonusWeeks,
    UpgradeOption,
}

impl FormField {
    pub fn all() -> &'static [FormField] {
        &[
            FormField::ClientName,
            FormField::ClientEmail,
            FormField::ClientPhone,
            FormField::ClientAddress,
            FormField::ProgramLength,
            FormField::InitialPaymentAmount,
            FormField::InitialPaymentCount,
            FormField::SubsequentPaymentAmount,
            FormField::SubsequentPaymentCount,
            FormField::BonusWeeks,
            FormField::UpgradeOption,
        ]
    }

    /// The camelCase key used by the form (e.g. `clientName`).
    pub fn key(&self) -> &'static str {
        match self {
            Self::ClientName => "clientName",
            Self::ClientEmail => "clientEmail",
            Self::ClientPhone => "clientPhone",
            Self::ClientAddress => "clientAddress",
            Self::ProgramLength => "programLength",
            Self::InitialPaymentAmount => "initialPaymentAmount",
            Self::InitialPaymentCount => "initialPaymentCount",
            Self::SubsequentPaymentAmount => "subsequentPaymentAmount",
            Self::SubsequentPaymentCount => "subsequentPaymentCount",
            Self::BonusWeeks => "bonusWeeks",
            Self::UpgradeOption => "upgradeOption",
        }
    }

    /// The snake_case name used in config files and CSV headers.
    pub fn snake_name(&self) -> &'static str {
        match self {
            Self::ClientName => "client_name",
            Self::ClientEmail => "client_email",
            Self::ClientPhone => "client_phone",
            Self::ClientAddress => "client_address",
            Self::ProgramLength => "program_length",
            Self::InitialPaymentAmount => "initial_payment_amount",
            Self::InitialPaymentCount => "initial_payment_count",
            Self::SubsequentPaymentAmount => "subsequent_payment_amount",
            Self::SubsequentPaymentCount => "subsequent_payment_count",
            Self::BonusWeeks => "bonus_weeks",
            Self::UpgradeOption => "upgrade_option",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::ClientName => "Client Name",
            Self::ClientEmail => "Email",
            Self::ClientPhone => "Phone",
            Self::ClientAddress => "Address",
            Self::ProgramLength => "Program Length",
            Self::InitialPaymentAmount => "Initial Payment",
            Self::InitialPaymentCount => "Initial Payment Count",
            Self::SubsequentPaymentAmount => "Subsequent Payment",
            Self::SubsequentPaymentCount => "Subsequent Payment Count",
            Self::BonusWeeks => "Bonus Weeks",
            Self::UpgradeOption => "Upgrade Option",
        }
    }

    pub fn input_kind(&self) -> InputKind {
        match self {
            Self::ClientEmail => InputKind::Email,
            Self::ClientPhone => InputKind::Tel,
            Self::ProgramLength => InputKind::Choice,
            Self::BonusWeeks | Self::UpgradeOption => InputKind::Switch,
            _ => InputKind::Text,
        }
    }

    /// Example text shown in an empty input, if the field has one.
    pub fn placeholder(&self) -> Option<&'static str> {
        match self {
            Self::ClientName => Some("John Doe"),
            Self::ClientEmail => Some("john@example.com"),
            Self::ClientPhone => Some("(555) 555-5555"),
            Self::ClientAddress => Some("123 Main St, City, State 12345"),
            _ => None,
        }
    }

    pub fn is_switch(&self) -> bool {
        self.input_kind() == InputKind::Switch
    }

    /// Looks a field up by its camelCase key or snake_case name.
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        Self::all()
            .iter()
            .copied()
            .find(|field| field.key() == s || field.snake_name() == s)
    }
}

impl FromStr for FormField {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| FieldError::UnknownField(s.to_string()))
    }
}

impl fmt::Display for FormField {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.key())
    }
}
