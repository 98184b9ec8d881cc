use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use super::FieldError;

/// Length of an enrollment program, chosen from a fixed pair of options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProgramLength {
    #[default]
    #[serde(rename = "16")]
    Sixteen,
    #[serde(rename = "52")]
    FiftyTwo,
}

impl ProgramLength {
    pub fn all() -> &'static [ProgramLength] {
        &[ProgramLength::Sixteen, ProgramLength::FiftyTwo]
    }

    /// The choice value as it appears on the form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sixteen => "16",
            Self::FiftyTwo => "52",
        }
    }

    pub fn weeks(&self) -> i64 {
        match self {
            Self::Sixteen => 16,
            Self::FiftyTwo => 52,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Sixteen => "16 Weeks",
            Self::FiftyTwo => "52 Weeks",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim() {
            "16" => Some(Self::Sixteen),
            "52" => Some(Self::FiftyTwo),
            _ => None,
        }
    }
}

impl FromStr for ProgramLength {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| FieldError::InvalidProgramLength(s.to_string()))
    }
}

impl fmt::Display for ProgramLength {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
