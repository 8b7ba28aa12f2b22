//! Common infrastructure shared by the droidscope crates
//!
//! This crate provides:
//! - Error handling with context propagation
//! - Diagnostic logging with a process-wide level filter

pub mod error;
pub mod logging;

pub use error::{Error, ErrorKind, Result};
pub use logging::{init_logging, set_log, LogLevel, LoggingConfig, LoggingTransformer};
