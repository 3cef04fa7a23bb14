//! Unified error type for folio.
//!
//! `FolioError` consolidates the domain-specific error enums so callers get
//! consistent categorization, codes and user messaging.

use std::fmt;

use super::category::ErrorCategory;
use super::content::{ContentError, RegistryError};
use super::context::ErrorContext;
use super::system::SystemError;
use super::ui::UiError;

/// Unified error type.
#[derive(Debug)]
pub enum FolioError {
    /// System/filesystem errors.
    System(SystemError),

    /// Embedded content errors.
    Content(ContentError),

    /// Command registry construction errors.
    Registry(RegistryError),

    /// UI/terminal errors.
    Ui(UiError),

    /// Wrapped error with additional context.
    WithContext {
        error: Box<FolioError>,
        context: ErrorContext,
    },
}

impl FolioError {
    /// Get the category of this error.
    pub fn category(&self) -> ErrorCategory {
        match self {
            FolioError::System(err) => {
                if err.is_configuration() {
                    ErrorCategory::Configuration
                } else {
                    ErrorCategory::System
                }
            }
            FolioError::Content(ContentError::InvalidRoute(_)) => ErrorCategory::User,
            FolioError::Content(_) | FolioError::Registry(_) => ErrorCategory::Client,
            FolioError::Ui(err) => {
                if err.is_recoverable() {
                    ErrorCategory::User
                } else {
                    ErrorCategory::System
                }
            }
            FolioError::WithContext { error, .. } => error.category(),
        }
    }

    /// Get a user-friendly error message.
    pub fn user_message(&self) -> String {
        match self {
            FolioError::System(err) => err.user_message(),
            FolioError::Content(err) => err.to_string(),
            FolioError::Registry(err) => err.to_string(),
            FolioError::Ui(err) => err.user_message(),
            FolioError::WithContext { error, context } => {
                format!("{}\n\nContext: {}", error.user_message(), context)
            }
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            FolioError::System(err) => err.error_code(),
            FolioError::Content(err) => err.error_code(),
            FolioError::Registry(err) => err.error_code(),
            FolioError::Ui(err) => err.error_code(),
            FolioError::WithContext { error, .. } => error.error_code(),
        }
    }

    /// Attach context to this error.
    pub fn with_context(self, ctx: ErrorContext) -> Self {
        FolioError::WithContext {
            error: Box::new(self),
            context: ctx,
        }
    }

    /// Get the context if this error has one attached.
    pub fn context(&self) -> Option<&ErrorContext> {
        match self {
            FolioError::WithContext { context, .. } => Some(context),
            _ => None,
        }
    }

    /// Get the inner error without context.
    pub fn inner(&self) -> &FolioError {
        match self {
            FolioError::WithContext { error, .. } => error.inner(),
            _ => self,
        }
    }

    /// Get the recovery hint for this error.
    pub fn recovery_hint(&self) -> &'static str {
        self.category().recovery_hint()
    }

    /// Report printed when startup fails: category, code, message and hint.
    pub fn report(&self) -> String {
        format!(
            "{} [{}]: {}\nHint: {}",
            self.category().description(),
            self.error_code(),
            self.user_message(),
            self.recovery_hint()
        )
    }
}

impl fmt::Display for FolioError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FolioError::System(err) => write!(f, "{}", err),
            FolioError::Content(err) => write!(f, "{}", err),
            FolioError::Registry(err) => write!(f, "{}", err),
            FolioError::Ui(err) => write!(f, "{}", err),
            FolioError::WithContext { error, context } => {
                write!(f, "{} ({})", error, context)
            }
        }
    }
}

impl std::error::Error for FolioError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FolioError::System(err) => Some(err),
            FolioError::Content(err) => Some(err),
            FolioError::Registry(err) => Some(err),
            FolioError::Ui(err) => Some(err),
            FolioError::WithContext { error, .. } => error.source(),
        }
    }
}

// ============================================================================
// From implementations for automatic error conversion
// ============================================================================

impl From<SystemError> for FolioError {
    fn from(err: SystemError) -> Self {
        FolioError::System(err)
    }
}

impl From<ContentError> for FolioError {
    fn from(err: ContentError) -> Self {
        FolioError::Content(err)
    }
}

impl From<RegistryError> for FolioError {
    fn from(err: RegistryError) -> Self {
        FolioError::Registry(err)
    }
}

impl From<UiError> for FolioError {
    fn from(err: UiError) -> Self {
        FolioError::Ui(err)
    }
}

impl From<std::io::Error> for FolioError {
    fn from(err: std::io::Error) -> Self {
        use super::system::classify_io_error;
        FolioError::System(classify_io_error(err, None, "I/O operation"))
    }
}
