//! Integration tests that exercise the loader against an on-disk fixture file.
//!
//! The unit tests inside csv_loader.rs use inline string literals; these
//! check the read-from-disk path end to end, through to rendered previews.

use std::path::PathBuf;

use pretty_assertions::assert_eq;
use program_core::{ProgramLength, ProgramPreview};
use program_ui::{app, csv_loader};

fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("sample_enrollments.csv")
}

#[test]
fn test_load_fixture_file_succeeds() {
    let forms =
        csv_loader::load_from_file(&fixture_path()).expect("fixture file should load without error");

    // The fixture has exactly 3 rows.
    assert_eq!(forms.len(), 3);
}

#[test]
fn test_load_fixture_first_row() {
    let forms = csv_loader::load_from_file(&fixture_path()).unwrap();
    let form = &forms[0];

    assert_eq!(form.client_name, "Jane Roe");
    assert_eq!(form.client_phone, "(555) 555-0100");
    assert_eq!(form.program_length, ProgramLength::Sixteen);
    assert!(form.bonus_weeks);
    assert!(form.upgrade_option);

    let preview = ProgramPreview::from_form(form);
    assert!(!preview.has_subsequent_payments);
    assert!(preview.upgrade_offer_visible);
}

#[test]
fn test_load_fixture_second_row_full_year() {
    let forms = csv_loader::load_from_file(&fixture_path()).unwrap();
    let preview = ProgramPreview::from_form(&forms[1]);

    assert_eq!(preview.form.program_length, ProgramLength::FiftyTwo);
    assert_eq!(preview.form.client_address, "");
    assert_eq!(preview.remaining_payments_text, "3 payments of $450");
    // Upgrade switch is on, but the offer only applies to 16-week programs.
    assert!(!preview.upgrade_offer_visible);
}

#[test]
fn test_load_fixture_third_row_defaults_switches() {
    let forms = csv_loader::load_from_file(&fixture_path()).unwrap();
    let preview = ProgramPreview::from_form(&forms[2]);

    assert!(!preview.form.bonus_weeks);
    assert!(!preview.form.upgrade_option);
    assert_eq!(preview.remaining_payments_text, "1 payment of $300");
}

#[test]
fn test_render_fixture_batch() {
    let forms = csv_loader::load_from_file(&fixture_path()).unwrap();

    let text = app::render_batch(&forms, false);

    assert!(text.contains("### Enrollment 1 of 3: Jane Roe"));
    assert!(text.contains("### Enrollment 3 of 3: Alex Doe"));
    assert_eq!(text.matches("=== Preview ===").count(), 3);
    assert_eq!(text.matches("Upgrade Option:").count(), 1);
}

#[test]
fn test_load_missing_file_fails() {
    let result = csv_loader::load_from_file(&fixture_path().with_file_name("missing.csv"));

    assert!(matches!(result, Err(csv_loader::CsvLoadError::Io(_))));
}
