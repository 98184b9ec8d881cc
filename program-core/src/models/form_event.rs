//! Typed field-change events.
//!
//! Each settable field has its own [`FieldUpdate`] variant and each switch its
//! own [`ToggleField`] variant, so an event can never name a field that does
//! not exist or carry a value of the wrong shape.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{FieldError, FormField, ProgramLength};

/// Replaces the value of a single non-switch field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldUpdate {
    ClientName(String),
    ClientEmail(String),
    ClientPhone(String),
    ClientAddress(String),
    ProgramLength(ProgramLength),
    InitialPaymentAmount(String),
    InitialPaymentCount(String),
    SubsequentPaymentAmount(String),
    SubsequentPaymentCount(String),
}

impl FieldUpdate {
    /// Builds an update for `field` from raw input text.
    ///
    /// # Errors
    ///
    /// Returns [`FieldError::NotSettable`] for switches and
    /// [`FieldError::InvalidProgramLength`] when the program length is not one
    /// of the offered choices. Every other field accepts any text.
    pub fn new(
        field: FormField,
        value: impl Into<String>,
    ) -> Result<Self, FieldError> {
        let value = value.into();
        let update = match field {
            FormField::ClientName => Self::ClientName(value),
            FormField::ClientEmail => Self::ClientEmail(value),
            FormField::ClientPhone => Self::ClientPhone(value),
            FormField::ClientAddress => Self::ClientAddress(value),
            FormField::ProgramLength => Self::ProgramLength(value.parse()?),
            FormField::InitialPaymentAmount => Self::InitialPaymentAmount(value),
            FormField::InitialPaymentCount => Self::InitialPaymentCount(value),
            FormField::SubsequentPaymentAmount => Self::SubsequentPaymentAmount(value),
            FormField::SubsequentPaymentCount => Self::SubsequentPaymentCount(value),
            FormField::BonusWeeks | FormField::UpgradeOption => {
                return Err(FieldError::NotSettable(field.key()));
            }
        };
        Ok(update)
    }

    pub fn field(&self) -> FormField {
        match self {
            Self::ClientName(_) => FormField::ClientName,
            Self::ClientEmail(_) => FormField::ClientEmail,
            Self::ClientPhone(_) => FormField::ClientPhone,
            Self::ClientAddress(_) => FormField::ClientAddress,
            Self::ProgramLength(_) => FormField::ProgramLength,
            Self::InitialPaymentAmount(_) => FormField::InitialPaymentAmount,
            Self::InitialPaymentCount(_) => FormField::InitialPaymentCount,
            Self::SubsequentPaymentAmount(_) => FormField::SubsequentPaymentAmount,
            Self::SubsequentPaymentCount(_) => FormField::SubsequentPaymentCount,
        }
    }
}

/// A boolean field that flips on each toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ToggleField {
    BonusWeeks,
    UpgradeOption,
}

impl ToggleField {
    pub fn field(&self) -> FormField {
        match self {
            Self::BonusWeeks => FormField::BonusWeeks,
            Self::UpgradeOption => FormField::UpgradeOption,
        }
    }
}

impl TryFrom<FormField> for ToggleField {
    type Error = FieldError;

    fn try_from(field: FormField) -> Result<Self, Self::Error> {
        match field {
            FormField::BonusWeeks => Ok(Self::BonusWeeks),
            FormField::UpgradeOption => Ok(Self::UpgradeOption),
            other => Err(FieldError::NotToggle(other.key())),
        }
    }
}

/// A single user edit delivered to the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FormEvent {
    Set(FieldUpdate),
    Toggle(ToggleField),
}

impl FormEvent {
    pub fn field(&self) -> FormField {
        match self {
            Self::Set(update) => update.field(),
            Self::Toggle(toggle) => toggle.field(),
        }
    }
}

impl From<FieldUpdate> for FormEvent {
    fn from(update: FieldUpdate) -> Self {
        Self::Set(update)
    }
}

impl From<ToggleField> for FormEvent {
    fn from(toggle: ToggleField) -> Self {
        Self::Toggle(toggle)
    }
}

impl fmt::Display for FormEvent {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            Self::Set(update) => write!(f, "set {}", update.field()),
            Self::Toggle(toggle) => write!(f, "toggle {}", toggle.field()),
        }
    }
}
