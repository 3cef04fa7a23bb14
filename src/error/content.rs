//! Errors raised while loading the embedded content catalog and while
//! building command registries.

use thiserror::Error;

/// Content catalog errors.
#[derive(Debug, Error)]
pub enum ContentError {
    /// An embedded JSON document failed to deserialize.
    #[error("failed to parse {file}: {source}")]
    Parse {
        file: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// Two posts or two projects share a slug.
    #[error("duplicate slug '{slug}' in {file}")]
    DuplicateSlug { file: &'static str, slug: String },

    /// A route string could not be understood.
    #[error("unrecognized route '{0}'")]
    InvalidRoute(String),
}

impl ContentError {
    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            ContentError::Parse { .. } => "E_CONTENT_PARSE",
            ContentError::DuplicateSlug { .. } => "E_CONTENT_DUP_SLUG",
            ContentError::InvalidRoute(_) => "E_CONTENT_ROUTE",
        }
    }
}

/// Command registry construction errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// A command with the same (lowercased) name is already registered.
    #[error("command '{0}' is already registered")]
    Duplicate(String),

    /// Command names must be a single lowercase token.
    #[error("invalid command name '{0}'")]
    InvalidName(String),
}

impl RegistryError {
    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            RegistryError::Duplicate(_) => "E_REG_DUPLICATE",
            RegistryError::InvalidName(_) => "E_REG_NAME",
        }
    }
}
