use anyhow::{Context, Result};
use chrono::Local;
use std::{
    fs::File,
    io::{self, IsTerminal, Write},
    path::Path,
    sync::{Arc, Mutex, MutexGuard, PoisonError},
};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::{
    EnvFilter,
    fmt::{
        FmtContext, MakeWriter,
        format::{FormatEvent, FormatFields, Writer},
    },
    layer::SubscriberExt,
    registry::LookupSpan,
    util::SubscriberInitExt,
};

/// Filter used when nothing else selects one.
pub const DEFAULT_FILTER: &str = "info";

// --- Formatter ---

struct LocalFmt;

impl<S, N> FormatEvent<S, N> for LocalFmt
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        let meta = event.metadata();
        let ansi = writer.has_ansi_escapes();

        let timestamp = Local::now().format("%Y-%m-%dT%H:%M:%S%.3f%:z");
        if ansi {
            write!(writer, "\x1b[2m{timestamp}\x1b[0m ")?;
        } else {
            write!(writer, "{timestamp} ")?;
        }

        let color = match *meta.level() {
            Level::ERROR => "\x1b[1;31m",
            Level::WARN => "\x1b[1;33m",
            Level::INFO => "\x1b[1;32m",
            Level::DEBUG => "\x1b[1;34m",
            Level::TRACE => "\x1b[1;35m",
        };
        if ansi {
            write!(writer, "{color}{:>5}\x1b[0m ", meta.level())?;
        } else {
            write!(writer, "{:>5} ", meta.level())?;
        }

        let target = meta.target().split("::").next().unwrap_or_default();
        write!(writer, "{target}: ")?;

        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

// --- Log file writer ---

/// Shares one append-mode file between all writers handed out by the layer.
#[derive(Clone)]
struct SharedFile(Arc<Mutex<File>>);

struct SharedFileWriter<'a>(MutexGuard<'a, File>);

impl Write for SharedFileWriter<'_> {
    fn write(
        &mut self,
        buf: &[u8],
    ) -> io::Result<usize> {
        self.0.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.0.flush()
    }
}

impl<'a> MakeWriter<'a> for SharedFile {
    type Writer = SharedFileWriter<'a>;

    fn make_writer(&'a self) -> Self::Writer {
        // A panic mid-write only risks a torn log line.
        SharedFileWriter(self.0.lock().unwrap_or_else(PoisonError::into_inner))
    }
}

fn open_log_file(path: &Path) -> Result<File> {
    File::options()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("cannot open log file '{}'", path.display()))
}

// --- Public API ---

/// Picks the filter directive from the available sources.
///
/// Precedence: command line, then `RUST_LOG`, then the config file, then
/// [`DEFAULT_FILTER`]. Blank values are skipped.
pub fn filter_directive(
    cli_level: Option<&str>,
    env_level: Option<&str>,
    config_level: Option<&str>,
) -> String {
    [cli_level, env_level, config_level]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|level| !level.is_empty())
        .unwrap_or(DEFAULT_FILTER)
        .to_string()
}

/// Initializes logging. Call once at startup.
///
/// - Stderr: colored when attached to a terminal, plain when piped. Stdout is
///   left for the rendered preview.
/// - File: when `log_file` is given, every record is appended there without
///   ANSI codes.
/// - Level: `directive` is any `EnvFilter` directive, usually the result of
///   [`filter_directive`].
pub fn init_logging(
    directive: &str,
    log_file: Option<&Path>,
) -> Result<()> {
    let filter = EnvFilter::try_new(directive)
        .with_context(|| format!("invalid log level '{directive}'"))?;

    let stderr_layer = tracing_subscriber::fmt::layer()
        .event_format(LocalFmt)
        .with_ansi(io::stderr().is_terminal())
        .with_writer(io::stderr);

    let file_layer = log_file
        .map(open_log_file)
        .transpose()?
        .map(|file| {
            tracing_subscriber::fmt::layer()
                .event_format(LocalFmt)
                .with_ansi(false)
                .with_writer(SharedFile(Arc::new(Mutex::new(file))))
        });

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
        .context("logging already initialized")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn filter_directive_prefers_command_line() {
        let directive = filter_directive(Some("debug"), Some("warn"), Some("error"));

        assert_eq!(directive, "debug");
    }

    #[test]
    fn filter_directive_falls_back_to_environment_then_config() {
        assert_eq!(filter_directive(None, Some("warn"), Some("error")), "warn");
        assert_eq!(filter_directive(None, None, Some("error")), "error");
    }

    #[test]
    fn filter_directive_skips_blank_values() {
        assert_eq!(filter_directive(Some("  "), Some(""), None), DEFAULT_FILTER);
    }

    #[test]
    fn init_logging_rejects_invalid_directive() {
        let err = init_logging("program_core=loud", None).unwrap_err();

        assert!(err.to_string().contains("invalid log level"));
    }
}
