use std::{
    fs::File,
    io::{self, BufReader},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;

use program_core::FormEvent;
use program_ui::{app, config::PreviewConfig, csv_loader, events, logging};

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Live preview for program enrollment forms.
///
/// Starts from the default enrollment values, applies the config file's
/// `[form]` section, then `--set` edits, then `--toggle` edits, then any
/// event script, and prints the resulting preview.
#[derive(Debug, Parser)]
#[command(name = "program-preview", version, about, long_about = None)]
struct Cli {
    /// TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Set a field, e.g. `--set clientName="Jane Roe"`. Repeatable.
    #[arg(long = "set", value_name = "FIELD=VALUE", value_parser = events::parse_assignment)]
    sets: Vec<FormEvent>,

    /// Flip a switch (`bonusWeeks` or `upgradeOption`). Repeatable.
    #[arg(long = "toggle", value_name = "FIELD", value_parser = events::parse_toggle)]
    toggles: Vec<FormEvent>,

    /// Event script to apply; `-` reads from stdin.
    #[arg(short, long, value_name = "FILE")]
    events: Option<PathBuf>,

    /// Render one preview per row of this CSV file instead of a single form.
    #[arg(short, long, value_name = "CSV", conflicts_with_all = ["sets", "toggles", "events"])]
    batch: Option<PathBuf>,

    /// Print the form values before the preview.
    #[arg(long, default_value_t = false)]
    show_form: bool,

    /// Log filter (overrides RUST_LOG and the config file).
    #[arg(long)]
    log_level: Option<String>,

    /// Append log records to this file.
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn read_event_script(path: &Path) -> Result<Vec<FormEvent>> {
    if path.as_os_str() == "-" {
        return events::read_events(io::stdin().lock()).context("failed to read events from stdin");
    }

    let file =
        File::open(path).with_context(|| format!("failed to open: {}", path.display()))?;
    events::read_events(BufReader::new(file))
        .with_context(|| format!("failed to read events from: {}", path.display()))
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = cli
        .config
        .as_deref()
        .map(PreviewConfig::load)
        .transpose()?
        .unwrap_or_default();

    let env_level = std::env::var("RUST_LOG").ok();
    let directive = logging::filter_directive(
        cli.log_level.as_deref(),
        env_level.as_deref(),
        config.logging.level.as_deref(),
    );
    let log_file = cli.log_file.as_deref().or(config.logging.file.as_deref());
    logging::init_logging(&directive, log_file)?;
    debug!(%directive, "logging initialized");

    if let Some(batch) = &cli.batch {
        let forms = csv_loader::load_from_file(batch)
            .with_context(|| format!("failed to load batch: {}", batch.display()))?;
        println!("{}", app::render_batch(&forms, cli.show_form));
        return Ok(());
    }

    let mut edits = cli.sets;
    edits.extend(cli.toggles);
    if let Some(path) = cli.events.as_deref() {
        edits.extend(read_event_script(path)?);
    }
    debug!(count = edits.len(), "applying edits");

    let engine = app::build_engine(config.initial_form(), edits);
    println!("{}", app::render(&engine.preview(), cli.show_form));

    Ok(())
}
