//! Error handling with context propagation
//!
//! Provides the shared error type used across droidscope crates:
//! - Structured error kinds with thiserror
//! - Context attachment for debugging
//! - Source chaining that keeps earlier context

pub mod constructors;
pub mod macros;
pub mod types;

pub use types::{Error, ErrorKind, Result};
