use thiserror::Error;

/// Errors raised when a form field or its value is named by text.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FieldError {
    /// No form field is known by this name.
    #[error("unknown form field '{0}'")]
    UnknownField(String),

    /// The field exists but holds text, so it cannot be toggled.
    #[error("field '{0}' is not a switch and cannot be toggled")]
    NotToggle(&'static str),

    /// The field is a switch and only accepts a toggle.
    #[error("field '{0}' is a switch; toggle it instead of setting a value")]
    NotSettable(&'static str),

    /// Program length must be one of the offered choices.
    #[error("invalid program length '{0}' (expected 16 or 52)")]
    InvalidProgramLength(String),
}
