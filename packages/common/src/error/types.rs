//! Core error types and definitions

use std::fmt;
use std::sync::Arc;
use thiserror::Error;

/// Core error type with context propagation support
#[derive(Debug, Clone)]
pub struct Error {
    pub(super) inner: Arc<ErrorInner>,
}

#[derive(Debug)]
pub(super) struct ErrorInner {
    pub kind: ErrorKind,
    pub context: Option<String>,
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

/// Different kinds of errors that can occur
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ErrorKind {
    /// Invalid or unreadable configuration value
    #[error("Configuration error")]
    Configuration,
}

/// Result type alias using our Error
pub type Result<T> = std::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.inner.context {
            Some(context) => write!(f, "{}: {context}", self.inner.kind)?,
            None => write!(f, "{}", self.inner.kind)?,
        }
        // Nested `Error` sources print their own chain.
        if let Some(source) = std::error::Error::source(self) {
            write!(f, "\nCaused by: {source}")?;
        }
        Ok(())
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.inner
            .source
            .as_deref()
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}
