//! Diagnostic log setup.
//!
//! Every operation records what it is attempting and when it finished.
//! Lines are appended to a plain text log file; nothing is written to
//! the terminal so command output stays clean.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::error::{Error, Result};
use crate::paths;

/// Environment variable holding an EnvFilter directive, e.g. `snippets=info`
pub const FILTER_ENV: &str = "SNIPPETS_LOG";

const DEFAULT_FILTER: &str = "snippets=debug";

fn filter() -> EnvFilter {
    EnvFilter::try_from_env(FILTER_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the global subscriber writing to `log_file`.
///
/// Returns an error if the file cannot be opened. Calling it a second
/// time in one process is a no-op.
pub fn init(log_file: &Path) -> Result<()> {
    paths::ensure_parent(log_file)?;

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file)
        .map_err(|source| Error::LogFile {
            path: log_file.to_path_buf(),
            source,
        })?;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter())
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .try_init();

    Ok(())
}
