//! File logging.
//!
//! The TUI owns stdout, so all `tracing` output goes to
//! `<data_dir>/folio.log`. `RUST_LOG` takes precedence over the configured
//! filter.

use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use crate::error::{classify_io_error, FolioResult, SystemError};

pub const LOG_FILE: &str = "folio.log";

/// Filter from `RUST_LOG`, else `fallback`, else `info`.
pub fn env_filter(fallback: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(fallback))
        .unwrap_or_else(|_| EnvFilter::new(crate::config::DEFAULT_LOG_FILTER))
}

/// Subscriber writing to `log_file`, shared by `init` and tests.
pub fn build_subscriber(log_file: File, filter: EnvFilter) -> impl tracing::Subscriber + Send + Sync {
    let fmt_layer = fmt::layer().with_ansi(false).with_writer(Arc::new(log_file));

    tracing_subscriber::registry().with(fmt_layer).with(filter)
}

/// Install the global subscriber. Returns the log file path.
pub fn init(data_dir: &Path, filter: &str) -> FolioResult<PathBuf> {
    fs::create_dir_all(data_dir).map_err(|e| SystemError::DirectoryCreationFailed {
        path: data_dir.to_path_buf(),
        message: e.to_string(),
    })?;

    let path = data_dir.join(LOG_FILE);
    let file = File::create(&path)
        .map_err(|e| classify_io_error(e, Some(path.clone()), "create log file"))?;

    // A subscriber may already be installed (tests, embedding); keep it.
    let _ = build_subscriber(file, env_filter(filter)).try_init();
    Ok(path)
}
