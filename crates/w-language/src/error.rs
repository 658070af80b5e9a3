//! Error handling for the w language export layer

use crate::tag::TypeTag;
use thiserror::Error;

/// Errors raised at the language export boundary
///
/// Nothing here is recovered locally: each variant is either a consumer
/// usage error (a wrong opaque value crossing the boundary) or a failure
/// handed up verbatim from the host runtime.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum LanguageError {
    #[error("Type tag mismatch: expected {expected}, found {}", describe_found(.found))]
    TagMismatch {
        expected: TypeTag,
        found: Option<TypeTag>,
    },

    #[error("Accessor {symbol} returned a null language table")]
    NullTable { symbol: &'static str },

    #[error("External value is already tagged with {existing}")]
    AlreadyTagged { existing: TypeTag },

    #[error("Export {key} is already defined on this module")]
    AlreadyInitialized { key: String },

    #[error("The w grammar was not generated for this build")]
    GrammarUnavailable,

    #[error("Export {key} is not defined")]
    MissingExport { key: String },

    #[error("Module not found: {name}")]
    ModuleNotFound { name: String },

    #[error("Host runtime error: {message}")]
    Host { message: String },
}

impl LanguageError {
    /// Create a new tag mismatch error
    pub fn tag_mismatch(expected: TypeTag, found: Option<TypeTag>) -> Self {
        Self::TagMismatch { expected, found }
    }

    /// Create a new already initialized error
    pub fn already_initialized(key: impl Into<String>) -> Self {
        Self::AlreadyInitialized { key: key.into() }
    }

    /// Create a new module not found error
    pub fn module_not_found(name: impl Into<String>) -> Self {
        Self::ModuleNotFound { name: name.into() }
    }

    /// Wrap a failure reported by the host runtime's own primitives
    pub fn host(message: impl Into<String>) -> Self {
        Self::Host {
            message: message.into(),
        }
    }

    /// Whether this error means a value of the wrong opaque kind was passed
    pub fn is_tag_mismatch(&self) -> bool {
        matches!(self, Self::TagMismatch { .. })
    }
}

fn describe_found(found: &Option<TypeTag>) -> String {
    match found {
        Some(tag) => tag.to_string(),
        None => "untagged value".to_string(),
    }
}

/// Result type alias for convenience
pub type LanguageResult<T> = Result<T, LanguageError>;
