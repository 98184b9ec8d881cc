//! Wiring between the command line and the preview engine.

use std::fmt::Write;

use program_core::{FormData, FormEvent, ProgramPreview, ProgramPreviewEngine};
use tracing::info;

/// Starts an engine from `initial` and applies `events` in order.
pub fn build_engine<I>(
    initial: FormData,
    events: I,
) -> ProgramPreviewEngine
where
    I: IntoIterator<Item = FormEvent>,
{
    let mut engine = ProgramPreviewEngine::with_form(initial);
    engine.apply_all(events);
    engine
}

/// Renders one preview, optionally preceded by the form values.
pub fn render(
    preview: &ProgramPreview,
    show_form: bool,
) -> String {
    let mut out = String::new();
    if show_form {
        // Writing into a String cannot fail.
        let _ = writeln!(out, "=== Program Details ===\n{}\n", preview.form);
    }
    let _ = write!(out, "=== Preview ===\n{preview}");
    out
}

/// Renders a preview for every form in a batch, separated by blank lines.
pub fn render_batch(
    forms: &[FormData],
    show_form: bool,
) -> String {
    info!(count = forms.len(), "rendering batch");

    forms
        .iter()
        .enumerate()
        .map(|(idx, form)| {
            let preview = ProgramPreview::from_form(form);
            format!(
                "### Enrollment {} of {}: {}\n{}",
                idx + 1,
                forms.len(),
                display_name(form),
                render(&preview, show_form)
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn display_name(form: &FormData) -> &str {
    let name = form.client_name.trim();
    if name.is_empty() { "(unnamed)" } else { name }
}
