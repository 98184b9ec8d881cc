//! CSV loader for batches of enrollment forms.
//!
//! ## CSV Format
//!
//! Headers are matched by name, so column order does **not** matter. Header
//! names are case-sensitive. Every column except `client_name` may be left out
//! entirely, and an empty cell keeps the default value for that field.
//!
//! | Column                      | Required | Notes                           |
//! |-----------------------------|----------|---------------------------------|
//! | `client_name`               | yes      | free text                       |
//! | `client_email`              | no       | free text                       |
//! | `client_phone`              | no       | free text                       |
//! | `client_address`            | no       | free text                       |
//! | `program_length`            | no       | `16` or `52` (default `16`)     |
//! | `initial_payment_amount`    | no       | default `5400`                  |
//! | `initial_payment_count`     | no       | default `1`                     |
//! | `subsequent_payment_amount` | no       | default `300`                   |
//! | `subsequent_payment_count`  | no       | default `0`                     |
//! | `bonus_weeks`               | no       | `true` / `false`                |
//! | `upgrade_option`            | no       | `true` / `false`                |
//!
//! ### Minimal example
//!
//! ```csv
//! client_name
//! Jane Roe
//! ```
//!
//! ### Full example
//!
//! ```csv
//! client_name,client_email,program_length,subsequent_payment_amount,subsequent_payment_count,bonus_weeks,upgrade_option
//! Jane Roe,jane@example.com,16,300,2,true,true
//! Sam Poe,sam@example.com,52,450,1,false,false
//! ```
use std::path::Path;

use program_core::{FormData, ProgramLength};
use serde::Deserialize;

// ---------------------------------------------------------------------------
// Serde-compatible row that mirrors the CSV layout exactly
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct CsvRow {
    client_name: String,
    client_email: Option<String>,
    client_phone: Option<String>,
    client_address: Option<String>,
    program_length: Option<String>,
    initial_payment_amount: Option<String>,
    initial_payment_count: Option<String>,
    subsequent_payment_amount: Option<String>,
    subsequent_payment_count: Option<String>,
    bonus_weeks: Option<bool>,
    upgrade_option: Option<bool>,
}

// ---------------------------------------------------------------------------
// Public error type
// ---------------------------------------------------------------------------

/// Errors that can occur while loading or converting CSV data.
#[derive(Debug, thiserror::Error)]
pub enum CsvLoadError {
    /// The file could not be read.
    #[error("cannot read CSV file: {0}")]
    Io(#[from] std::io::Error),

    /// The underlying CSV deserialisation failed (bad structure, missing
    /// `client_name` column, a switch that is not `true`/`false`, etc.).
    #[error("CSV parse error: {0}")]
    Parse(#[from] csv::Error),

    /// A `program_length` cell held something other than 16 or 52.
    /// `row` is 1-based, not counting the header.
    #[error("invalid program length '{value}' on row {row}")]
    InvalidProgramLength { value: String, row: usize },
}

// ---------------------------------------------------------------------------
// Core loader
// ---------------------------------------------------------------------------

fn convert_row(
    row: CsvRow,
    row_number: usize,
) -> Result<FormData, CsvLoadError> {
    let defaults = FormData::default();

    let program_length = match row.program_length {
        Some(value) => ProgramLength::parse(&value)
            .ok_or(CsvLoadError::InvalidProgramLength {
                value,
                row: row_number,
            })?,
        None => defaults.program_length,
    };

    Ok(FormData {
        client_name: row.client_name,
        client_email: row.client_email.unwrap_or(defaults.client_email),
        client_phone: row.client_phone.unwrap_or(defaults.client_phone),
        client_address: row.client_address.unwrap_or(defaults.client_address),
        program_length,
        initial_payment_amount: row
            .initial_payment_amount
            .unwrap_or(defaults.initial_payment_amount),
        initial_payment_count: row
            .initial_payment_count
            .unwrap_or(defaults.initial_payment_count),
        subsequent_payment_amount: row
            .subsequent_payment_amount
            .unwrap_or(defaults.subsequent_payment_amount),
        subsequent_payment_count: row
            .subsequent_payment_count
            .unwrap_or(defaults.subsequent_payment_count),
        bonus_weeks: row.bonus_weeks.unwrap_or(defaults.bonus_weeks),
        upgrade_option: row.upgrade_option.unwrap_or(defaults.upgrade_option),
    })
}

/// Parse CSV text and return one [`FormData`] per row, in file order.
///
/// # Errors
///
/// * [`CsvLoadError::Parse`] if the CSV is structurally invalid or a cell
///   cannot be deserialised.
/// * [`CsvLoadError::InvalidProgramLength`] if any row names an unsupported
///   program length.
pub fn load_from_str(input: &str) -> Result<Vec<FormData>, CsvLoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .flexible(false)
        .from_reader(input.as_bytes());

    let forms = reader
        .deserialize::<CsvRow>()
        .enumerate()
        .map(|(idx, result)| convert_row(result?, idx + 1))
        .collect::<Result<Vec<_>, _>>()?;

    tracing::debug!(rows = forms.len(), "loaded enrollment batch");
    Ok(forms)
}

/// Read a file from disk and delegate to [`load_from_str`].
pub fn load_from_file(path: &Path) -> Result<Vec<FormData>, CsvLoadError> {
    let contents = std::fs::read_to_string(path)?;
    load_from_str(&contents)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
