//! Behavioural checks of the preview engine through its public API only.

use pretty_assertions::assert_eq;
use program_core::{
    FieldUpdate, FormData, FormEvent, FormField, ProgramLength, ProgramPreviewEngine, ToggleField,
};

fn engine_with_payments(
    count: &str,
    amount: &str,
) -> ProgramPreviewEngine {
    let mut engine = ProgramPreviewEngine::new();
    engine.update_field(FieldUpdate::SubsequentPaymentCount(count.to_string()));
    engine.update_field(FieldUpdate::SubsequentPaymentAmount(amount.to_string()));
    engine
}

#[test]
fn zero_or_non_numeric_payments_hide_remaining_payments() {
    let cases = [
        ("0", "300"),
        ("2", "0"),
        ("0", "0"),
        ("many", "300"),
        ("2", "lots"),
        ("", ""),
    ];

    for (count, amount) in cases {
        let engine = engine_with_payments(count, amount);

        assert!(
            !engine.has_subsequent_payments(),
            "count={count:?} amount={amount:?}"
        );
        assert_eq!(engine.remaining_payments_text(), "");
    }
}

#[test]
fn single_remaining_payment_is_singular() {
    let engine = engine_with_payments("1", "300");

    assert_eq!(engine.remaining_payments_text(), "1 payment of $300");
}

#[test]
fn several_remaining_payments_are_plural() {
    let engine = engine_with_payments("2", "300");

    assert_eq!(engine.remaining_payments_text(), "2 payments of $300");
}

#[test]
fn bonus_weeks_add_four_to_sixteen_week_program() {
    let mut engine = ProgramPreviewEngine::new();

    engine.toggle_field(ToggleField::BonusWeeks);

    assert_eq!(
        engine.bonus_weeks_text(),
        "Program includes 16 weeks plus 4 bonus weeks, for a total of 20 weeks."
    );
}

#[test]
fn bonus_weeks_text_empty_when_off_for_any_length() {
    for length in ProgramLength::all() {
        let mut engine = ProgramPreviewEngine::new();
        engine.update_field(FieldUpdate::ProgramLength(*length));

        assert_eq!(engine.bonus_weeks_text(), "");
    }
}

#[test]
fn upgrade_offer_requires_switch_and_sixteen_weeks() {
    let mut engine = ProgramPreviewEngine::new();
    assert!(!engine.upgrade_offer_visible());

    engine.toggle_field(ToggleField::UpgradeOption);
    assert!(engine.upgrade_offer_visible());

    engine.update_field(FieldUpdate::ProgramLength(ProgramLength::FiftyTwo));
    assert!(!engine.upgrade_offer_visible());

    engine.update_field(FieldUpdate::ProgramLength(ProgramLength::Sixteen));
    engine.toggle_field(ToggleField::UpgradeOption);
    assert!(!engine.upgrade_offer_visible());
}

#[test]
fn update_field_is_idempotent() {
    for field in FormField::all().iter().filter(|field| !field.is_switch()) {
        let value = if *field == FormField::ProgramLength {
            "52"
        } else {
            "42"
        };
        let update = FieldUpdate::new(*field, value).unwrap();
        let mut engine = ProgramPreviewEngine::new();

        let once = engine.update_field(update.clone()).clone();
        let twice = engine.update_field(update).clone();

        assert_eq!(once, twice, "{field}");
    }
}

#[test]
fn toggling_twice_restores_original_value() {
    for toggle in [ToggleField::BonusWeeks, ToggleField::UpgradeOption] {
        let mut engine = ProgramPreviewEngine::new();
        let original = engine.form().clone();

        engine.toggle_field(toggle);
        assert_ne!(engine.form(), &original);
        engine.toggle_field(toggle);

        assert_eq!(engine.form(), &original);
    }
}

#[test]
fn initial_payment_count_never_affects_derivations() {
    let mut engine = ProgramPreviewEngine::with_form(FormData {
        bonus_weeks: true,
        upgrade_option: true,
        subsequent_payment_count: "2".to_string(),
        ..Default::default()
    });
    let before = engine.preview();

    engine.apply(FormEvent::Set(FieldUpdate::InitialPaymentCount(
        "12".to_string(),
    )));
    let after = engine.preview();

    assert_eq!(after.remaining_payments_text, before.remaining_payments_text);
    assert_eq!(after.bonus_weeks_text, before.bonus_weeks_text);
    assert_eq!(after.upgrade_offer_visible, before.upgrade_offer_visible);
    assert_eq!(after.to_string(), before.to_string());
}
