//! The program preview engine.
//!
//! Owns the single [`FormData`] record for an editing session. Every edit
//! swaps in a fresh snapshot built from the previous one; derived values are
//! recomputed from the current snapshot on demand.

use tracing::debug;

use crate::calculations::{self, ProgramPreview};
use crate::{FieldUpdate, FormData, FormEvent, ToggleField};

#[derive(Debug, Clone, Default)]
pub struct ProgramPreviewEngine {
    state: FormData,
}

impl ProgramPreviewEngine {
    /// Creates an engine holding the default enrollment values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an engine starting from an existing record.
    pub fn with_form(form: FormData) -> Self {
        Self { state: form }
    }

    /// The current snapshot.
    pub fn form(&self) -> &FormData {
        &self.state
    }

    /// Replaces one field and returns the new snapshot.
    pub fn update_field(
        &mut self,
        update: FieldUpdate,
    ) -> &FormData {
        debug!(field = %update.field(), "updating field");
        self.state = self.state.with_update(update);
        &self.state
    }

    /// Flips one switch and returns the new snapshot.
    pub fn toggle_field(
        &mut self,
        toggle: ToggleField,
    ) -> &FormData {
        self.state = self.state.with_toggle(toggle);
        debug!(
            field = %toggle.field(),
            value = self.state.display_value(toggle.field()),
            "toggled field"
        );
        &self.state
    }

    /// Applies a single field-change event.
    pub fn apply(
        &mut self,
        event: FormEvent,
    ) -> &FormData {
        match event {
            FormEvent::Set(update) => self.update_field(update),
            FormEvent::Toggle(toggle) => self.toggle_field(toggle),
        }
    }

    /// Applies events in order and returns the final snapshot.
    pub fn apply_all<I>(
        &mut self,
        events: I,
    ) -> &FormData
    where
        I: IntoIterator<Item = FormEvent>,
    {
        for event in events {
            self.apply(event);
        }
        &self.state
    }

    pub fn has_subsequent_payments(&self) -> bool {
        calculations::has_subsequent_payments(&self.state)
    }

    pub fn remaining_payments_text(&self) -> String {
        calculations::remaining_payments_text(&self.state)
    }

    pub fn bonus_weeks_text(&self) -> String {
        calculations::bonus_weeks_text(&self.state)
    }

    pub fn upgrade_offer_visible(&self) -> bool {
        calculations::upgrade_offer_visible(&self.state)
    }

    /// Snapshot plus every derived value, ready for rendering.
    pub fn preview(&self) -> ProgramPreview {
        ProgramPreview::from_form(&self.state)
    }
}
