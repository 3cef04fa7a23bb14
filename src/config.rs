//! Runtime configuration.
//!
//! Defaults can be overridden with the builder methods or from the
//! environment:
//!
//! | Variable | Effect |
//! |----------|--------|
//! | `FOLIO_DATA_DIR` | Directory for settings, log file and resume |
//! | `FOLIO_EFFECT_DELAY_MS` | Hold time before navigation / external opens |
//! | `FOLIO_NO_PERSIST` | Keep the theme in memory only |
//! | `FOLIO_LOG` | Log filter when `RUST_LOG` is unset |

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::console::DEFAULT_EFFECT_DELAY;
use crate::error::{FolioResult, SystemError};

pub const DATA_DIR_ENV: &str = "FOLIO_DATA_DIR";
pub const EFFECT_DELAY_ENV: &str = "FOLIO_EFFECT_DELAY_MS";
pub const NO_PERSIST_ENV: &str = "FOLIO_NO_PERSIST";
pub const LOG_ENV: &str = "FOLIO_LOG";

/// Data directory name under the home directory.
const DATA_DIR_NAME: &str = ".folio";

/// Default log filter.
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Configuration for one run.
///
/// # Example
///
/// ```
/// use folio::config::FolioConfig;
/// use std::time::Duration;
///
/// let config = FolioConfig::new()
///     .with_effect_delay(Duration::ZERO)
///     .with_persist_theme(false);
/// assert!(!config.persist_theme);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct FolioConfig {
    /// Where settings and the log file live. `None` means `~/.folio`.
    pub data_dir: Option<PathBuf>,
    /// Hold time for deferred console effects (default: 500ms)
    pub effect_delay: Duration,
    /// Whether the theme is written to `settings.json` (default: true)
    pub persist_theme: bool,
    /// Log filter used when `RUST_LOG` is unset
    pub log_filter: String,
}

impl Default for FolioConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            effect_delay: DEFAULT_EFFECT_DELAY,
            persist_theme: true,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl FolioConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.data_dir = Some(dir.into());
        self
    }

    pub fn with_effect_delay(mut self, delay: Duration) -> Self {
        self.effect_delay = delay;
        self
    }

    pub fn with_persist_theme(mut self, persist: bool) -> Self {
        self.persist_theme = persist;
        self
    }

    pub fn with_log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = filter.into();
        self
    }

    /// Build from `FOLIO_*` environment variables on top of the defaults.
    ///
    /// Unparseable values are ignored.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(dir) = env::var_os(DATA_DIR_ENV).filter(|v| !v.is_empty()) {
            config = config.with_data_dir(dir);
        }

        if let Some(ms) = env::var(EFFECT_DELAY_ENV)
            .ok()
            .and_then(|v| v.trim().parse::<u64>().ok())
        {
            config = config.with_effect_delay(Duration::from_millis(ms));
        }

        if let Ok(value) = env::var(NO_PERSIST_ENV) {
            if is_truthy(&value) {
                config = config.with_persist_theme(false);
            }
        }

        if let Ok(filter) = env::var(LOG_ENV) {
            if !filter.trim().is_empty() {
                config = config.with_log_filter(filter.trim());
            }
        }

        config
    }

    /// The data directory, resolving the default against `$HOME`.
    pub fn data_dir(&self) -> FolioResult<PathBuf> {
        match &self.data_dir {
            Some(dir) => Ok(dir.clone()),
            None => dirs::home_dir()
                .map(|home| home.join(DATA_DIR_NAME))
                .ok_or_else(|| SystemError::NoHomeDirectory.into()),
        }
    }
}

fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = FolioConfig::default();
        assert_eq!(config.effect_delay, Duration::from_millis(500));
        assert!(config.persist_theme);
        assert_eq!(config.log_filter, "info");
        assert!(config.data_dir.is_none());
    }

    #[test]
    fn test_builder() {
        let config = FolioConfig::new()
            .with_data_dir("/tmp/folio")
            .with_effect_delay(Duration::ZERO)
            .with_persist_theme(false)
            .with_log_filter("debug");

        assert_eq!(config.data_dir().unwrap(), PathBuf::from("/tmp/folio"));
        assert_eq!(config.effect_delay, Duration::ZERO);
        assert!(!config.persist_theme);
        assert_eq!(config.log_filter, "debug");
    }

    #[test]
    fn test_is_truthy() {
        assert!(is_truthy("1"));
        assert!(is_truthy(" TRUE "));
        assert!(!is_truthy("0"));
        assert!(!is_truthy(""));
    }
}
