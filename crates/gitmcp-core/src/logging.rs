//! Tracing setup for the `gitmcp` binary.

use anyhow::{anyhow, Result};
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::PathBuf;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info,gitmcp=debug,gitmcp_core=debug";

/// Append-only handle on `gitmcp.log`; each event gets its own clone of it.
struct LogFile(File);

/// Per-event sink. Falls back to stderr if the log handle could not be cloned.
enum LogSink {
    File(File),
    Stderr(io::Stderr),
}

impl Write for LogSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            LogSink::File(f) => f.write(buf),
            LogSink::Stderr(e) => e.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            LogSink::File(f) => f.flush(),
            LogSink::Stderr(e) => e.flush(),
        }
    }
}

impl<'a> MakeWriter<'a> for LogFile {
    type Writer = LogSink;

    fn make_writer(&'a self) -> Self::Writer {
        match self.0.try_clone() {
            Ok(f) => LogSink::File(f),
            Err(_) => LogSink::Stderr(io::stderr()),
        }
    }
}

fn filter_or(default: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

/// Logs to `$XDG_STATE_HOME/gitmcp/gitmcp.log`, honouring `RUST_LOG`.
///
/// Returns an error if the state directory or log file is unusable; call
/// [`init_logging_stderr`] in that case.
pub fn init_logging() -> Result<()> {
    let log_path: PathBuf = xdg::BaseDirectories::with_prefix("gitmcp")?
        .place_state_file("gitmcp.log")?;
    let file = OpenOptions::new().create(true).append(true).open(&log_path)?;

    tracing_subscriber::fmt()
        .with_env_filter(filter_or(DEFAULT_FILTER))
        .with_writer(LogFile(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow!("install tracing subscriber: {e}"))?;

    tracing::debug!("logging to {}", log_path.display());
    Ok(())
}

/// Stderr-only logging at `warn` unless `RUST_LOG` is set; stdout carries only results.
pub fn init_logging_stderr() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter_or("warn"))
        .with_writer(io::stderr)
        .with_ansi(false)
        .try_init();
}
