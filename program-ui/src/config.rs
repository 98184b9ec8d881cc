//! TOML configuration for the preview tool.
//!
//! Every section and key is optional:
//!
//! ```toml
//! [logging]
//! level = "debug"
//! file = "preview.log"
//!
//! [form]
//! client_name = "Jane Roe"
//! program_length = "52"
//! subsequent_payment_count = "3"
//! bonus_weeks = true
//! ```
//!
//! `[form]` values are layered over the built-in defaults before any
//! command-line edits are applied.

use std::{
    fs,
    path::{Path, PathBuf},
};

use program_core::{FormData, ProgramLength};
use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur while loading a configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file '{}': {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PreviewConfig {
    pub logging: LoggingConfig,
    pub form: FormOverrides,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    /// Any `EnvFilter` directive, e.g. `"warn"` or `"program_core=debug"`.
    pub level: Option<String>,
    /// File that receives a copy of every log record.
    pub file: Option<PathBuf>,
}

/// Initial form values; unset keys keep the default.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FormOverrides {
    pub client_name: Option<String>,
    pub client_email: Option<String>,
    pub client_phone: Option<String>,
    pub client_address: Option<String>,
    pub program_length: Option<ProgramLength>,
    pub initial_payment_amount: Option<String>,
    pub initial_payment_count: Option<String>,
    pub subsequent_payment_amount: Option<String>,
    pub subsequent_payment_count: Option<String>,
    pub bonus_weeks: Option<bool>,
    pub upgrade_option: Option<bool>,
}

impl FormOverrides {
    /// Layers the set values over `form`.
    pub fn apply_to(
        &self,
        form: FormData,
    ) -> FormData {
        let Self {
            client_name,
            client_email,
            client_phone,
            client_address,
            program_length,
            initial_payment_amount,
            initial_payment_count,
            subsequent_payment_amount,
            subsequent_payment_count,
            bonus_weeks,
            upgrade_option,
        } = self.clone();

        FormData {
            client_name: client_name.unwrap_or(form.client_name),
            client_email: client_email.unwrap_or(form.client_email),
            client_phone: client_phone.unwrap_or(form.client_phone),
            client_address: client_address.unwrap_or(form.client_address),
            program_length: program_length.unwrap_or(form.program_length),
            initial_payment_amount: initial_payment_amount.unwrap_or(form.initial_payment_amount),
            initial_payment_count: initial_payment_count.unwrap_or(form.initial_payment_count),
            subsequent_payment_amount: subsequent_payment_amount
                .unwrap_or(form.subsequent_payment_amount),
            subsequent_payment_count: subsequent_payment_count
                .unwrap_or(form.subsequent_payment_count),
            bonus_weeks: bonus_weeks.unwrap_or(form.bonus_weeks),
            upgrade_option: upgrade_option.unwrap_or(form.upgrade_option),
        }
    }
}

impl PreviewConfig {
    pub fn from_toml_str(input: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(input)
    }

    /// Reads and parses the configuration at `path`.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// The starting form: defaults with `[form]` layered on top.
    pub fn initial_form(&self) -> FormData {
        self.form.apply_to(FormData::default())
    }
}
