//! Error handling for the utility crate

use thiserror::Error;

/// Utility errors
#[derive(Debug, Error)]
pub enum UtilError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("No value for attribute `{attribute}`")]
    MissingAttributeValue { attribute: String },

    #[error("Malformed value for attribute `{attribute}`: {reason}")]
    MalformedAttributeValue { attribute: String, reason: String },
}

impl UtilError {
    /// Create a missing value error
    #[must_use]
    pub fn missing_value(attribute: impl Into<String>) -> Self {
        Self::MissingAttributeValue {
            attribute: attribute.into(),
        }
    }

    /// Create a malformed value error
    #[must_use]
    pub fn malformed_value(attribute: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedAttributeValue {
            attribute: attribute.into(),
            reason: reason.into(),
        }
    }
}

/// Result type for utility operations
pub type Result<T> = std::result::Result<T, UtilError>;
