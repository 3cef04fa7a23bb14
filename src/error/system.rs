//! System-related error types.
//!
//! Filesystem access for the settings file and log file, and the
//! environment lookups done by configuration.

use std::path::PathBuf;

use thiserror::Error;

/// System-specific error variants.
#[derive(Debug, Clone, Error)]
pub enum SystemError {
    /// File not found.
    #[error("file not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    /// Permission denied for file/directory operation.
    #[error("permission denied: cannot {operation} {}", path.display())]
    PermissionDenied { path: PathBuf, operation: String },

    /// Failed to create directory.
    #[error("failed to create directory {}: {message}", path.display())]
    DirectoryCreationFailed { path: PathBuf, message: String },

    /// Generic I/O error.
    #[error("I/O error during {operation}: {message}")]
    IoError {
        operation: String,
        path: Option<PathBuf>,
        message: String,
    },

    /// Could not determine home directory.
    #[error("could not determine home directory")]
    NoHomeDirectory,

    /// Environment variable set but invalid.
    #[error("environment variable {variable}: {message}")]
    EnvironmentError { variable: String, message: String },
}

impl SystemError {
    /// Get a user-friendly error message.
    pub fn user_message(&self) -> String {
        match self {
            SystemError::FileNotFound { path } => {
                format!("File not found: '{}'", path.display())
            }
            SystemError::PermissionDenied { path, operation } => {
                format!(
                    "Permission denied: Cannot {} '{}'.\nTry checking file permissions.",
                    operation,
                    path.display()
                )
            }
            SystemError::DirectoryCreationFailed { path, .. } => {
                format!(
                    "Failed to create directory: '{}'.\nPlease check permissions and try again.",
                    path.display()
                )
            }
            SystemError::IoError { operation, path, .. } => match path {
                Some(p) => format!("Failed to {} '{}'", operation, p.display()),
                None => format!("Failed to {}", operation),
            },
            SystemError::NoHomeDirectory => {
                "Could not determine your home directory. Set FOLIO_DATA_DIR instead."
                    .to_string()
            }
            SystemError::EnvironmentError { variable, message } => {
                format!("Environment variable '{}' error: {}", variable, message)
            }
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            SystemError::FileNotFound { .. } => "E_SYS_FILE_NOT_FOUND",
            SystemError::PermissionDenied { .. } => "E_SYS_PERM",
            SystemError::DirectoryCreationFailed { .. } => "E_SYS_DIR_CREATE",
            SystemError::IoError { .. } => "E_SYS_IO",
            SystemError::NoHomeDirectory => "E_SYS_NO_HOME",
            SystemError::EnvironmentError { .. } => "E_SYS_ENV",
        }
    }

    /// Whether the error comes from configuration rather than the OS.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            SystemError::NoHomeDirectory | SystemError::EnvironmentError { .. }
        )
    }
}

/// Classify an `std::io::Error` into a [`SystemError`].
pub fn classify_io_error(
    err: std::io::Error,
    path: Option<PathBuf>,
    operation: &str,
) -> SystemError {
    use std::io::ErrorKind;

    match (err.kind(), path) {
        (ErrorKind::NotFound, Some(path)) => SystemError::FileNotFound { path },
        (ErrorKind::PermissionDenied, Some(path)) => SystemError::PermissionDenied {
            path,
            operation: operation.to_string(),
        },
        (_, path) => SystemError::IoError {
            operation: operation.to_string(),
            path,
            message: err.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_classify_not_found_with_path() {
        let err = io::Error::new(io::ErrorKind::NotFound, "gone");
        let classified = classify_io_error(err, Some(PathBuf::from("/a/b")), "read");
        assert!(matches!(classified, SystemError::FileNotFound { .. }));
        assert_eq!(classified.error_code(), "E_SYS_FILE_NOT_FOUND");
    }

    #[test]
    fn test_classify_permission_denied() {
        let err = io::Error::new(io::ErrorKind::PermissionDenied, "nope");
        let classified = classify_io_error(err, Some(PathBuf::from("/etc/x")), "write");
        match classified {
            SystemError::PermissionDenied { operation, .. } => assert_eq!(operation, "write"),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_classify_without_path_is_generic() {
        let err = io::Error::new(io::ErrorKind::NotFound, "gone");
        let classified = classify_io_error(err, None, "read");
        assert!(matches!(classified, SystemError::IoError { path: None, .. }));
    }

    #[test]
    fn test_user_messages_not_empty() {
        let errors = vec![
            SystemError::NoHomeDirectory,
            SystemError::EnvironmentError {
                variable: "FOLIO_EFFECT_DELAY_MS".to_string(),
                message: "not a number".to_string(),
            },
            SystemError::DirectoryCreationFailed {
                path: PathBuf::from("/x"),
                message: "denied".to_string(),
            },
        ];
        for err in errors {
            assert!(!err.user_message().is_empty());
            assert!(!err.to_string().is_empty());
        }
    }

    #[test]
    fn test_is_configuration() {
        assert!(SystemError::NoHomeDirectory.is_configuration());
        assert!(!SystemError::FileNotFound {
            path: PathBuf::from("/x")
        }
        .is_configuration());
    }
}
