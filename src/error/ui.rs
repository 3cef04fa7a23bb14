//! UI-related error types.
//!
//! Terminal setup, rendering and the external opener.

use thiserror::Error;

/// UI-specific error variants.
#[derive(Debug, Clone, Error)]
pub enum UiError {
    /// Terminal initialization failed.
    #[error("terminal initialization failed: {message}")]
    TerminalInitFailed { message: String },

    /// Failed to get terminal size.
    #[error("failed to query terminal size: {message}")]
    TerminalSizeFailed { message: String },

    /// Browser or external handler launch failed.
    #[error("failed to open {target}: {message}")]
    OpenFailed { target: String, message: String },
}

impl UiError {
    /// Whether the application can keep running after this error.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            UiError::TerminalSizeFailed { .. } | UiError::OpenFailed { .. }
        )
    }

    /// Get a user-friendly error message.
    pub fn user_message(&self) -> String {
        match self {
            UiError::TerminalInitFailed { .. } => {
                "Could not initialize the terminal. Is this an interactive terminal?".to_string()
            }
            UiError::TerminalSizeFailed { .. } => {
                "Could not determine the terminal size; using defaults.".to_string()
            }
            UiError::OpenFailed { target, .. } => {
                format!("Could not open '{}'. Open it manually instead.", target)
            }
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            UiError::TerminalInitFailed { .. } => "E_UI_TERM_INIT",
            UiError::TerminalSizeFailed { .. } => "E_UI_TERM_SIZE",
            UiError::OpenFailed { .. } => "E_UI_OPEN",
        }
    }
}
