//! Text forms of field-change events.
//!
//! ## Event script format
//!
//! One event per line. Blank lines and lines starting with `#` are ignored.
//! Field names may be given as the form key (`clientName`) or in snake_case
//! (`client_name`).
//!
//! | Line                        | Event                                   |
//! |-----------------------------|-----------------------------------------|
//! | `set <field> <value...>`    | replace the field with the rest of line |
//! | `set <field>`               | clear the field                         |
//! | `toggle <field>`            | flip a switch                           |
//!
//! ### Example
//!
//! ```text
//! # new enrollment
//! set clientName Jane Roe
//! set programLength 52
//! set subsequentPaymentCount 3
//! toggle bonusWeeks
//! ```
//!
//! The command line uses the `field=value` form for `--set` and a bare field
//! name for `--toggle`.

use std::io::{self, BufRead};

use program_core::{FieldError, FieldUpdate, FormEvent, FormField, ToggleField};
use thiserror::Error;

/// Errors for a single event written as text.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EventParseError {
    #[error("unknown event '{0}' (expected 'set' or 'toggle')")]
    UnknownVerb(String),

    #[error("'{0}' needs a field name")]
    MissingField(&'static str),

    #[error("'toggle {field}' takes no value but got '{value}'")]
    UnexpectedValue { field: String, value: String },

    #[error("expected field=value but got '{0}'")]
    MissingAssignment(String),

    #[error(transparent)]
    Field(#[from] FieldError),
}

/// Errors while reading a whole event script.
#[derive(Debug, Error)]
pub enum EventScriptError {
    #[error("failed to read events: {0}")]
    Io(#[from] io::Error),

    #[error("line {line}: {source}")]
    Line {
        line: usize,
        #[source]
        source: EventParseError,
    },
}

fn set_event(
    field: &str,
    value: &str,
) -> Result<FormEvent, EventParseError> {
    let field: FormField = field.parse()?;
    Ok(FormEvent::Set(FieldUpdate::new(field, value)?))
}

/// Parses the argument of `--toggle`.
pub fn parse_toggle(field: &str) -> Result<FormEvent, EventParseError> {
    let field: FormField = field.parse()?;
    Ok(FormEvent::Toggle(ToggleField::try_from(field)?))
}

/// Parses the argument of `--set`, e.g. `clientName=Jane Roe`.
///
/// Only the first `=` separates the field from the value.
pub fn parse_assignment(arg: &str) -> Result<FormEvent, EventParseError> {
    let (field, value) = arg
        .split_once('=')
        .ok_or_else(|| EventParseError::MissingAssignment(arg.to_string()))?;
    set_event(field.trim(), value)
}

/// Parses one script line. Returns `Ok(None)` for blank and comment lines.
pub fn parse_event_line(line: &str) -> Result<Option<FormEvent>, EventParseError> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let (verb, rest) = split_word(line);
    let (field, value) = split_word(rest);

    let event = match verb {
        "set" => {
            if field.is_empty() {
                return Err(EventParseError::MissingField("set"));
            }
            set_event(field, value)?
        }
        "toggle" => {
            if field.is_empty() {
                return Err(EventParseError::MissingField("toggle"));
            }
            if !value.is_empty() {
                return Err(EventParseError::UnexpectedValue {
                    field: field.to_string(),
                    value: value.to_string(),
                });
            }
            parse_toggle(field)?
        }
        other => return Err(EventParseError::UnknownVerb(other.to_string())),
    };
    Ok(Some(event))
}

/// Reads an event script, stopping at the first bad line.
pub fn read_events<R: BufRead>(reader: R) -> Result<Vec<FormEvent>, EventScriptError> {
    let mut events = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let parsed = parse_event_line(&line).map_err(|source| EventScriptError::Line {
            line: idx + 1,
            source,
        })?;
        events.extend(parsed);
    }
    tracing::debug!(count = events.len(), "read event script");
    Ok(events)
}

/// Splits off the first whitespace-delimited word; the remainder is trimmed.
fn split_word(s: &str) -> (&str, &str) {
    match s.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (s, ""),
    }
}
