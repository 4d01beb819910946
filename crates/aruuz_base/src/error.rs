//! The engine error type.
//!
//! Scansion itself never fails on verse input: empty lines produce empty
//! results and unmatched lines produce an "unmatched" result. [`EngineError`]
//! covers the startup surface — catalogue self-checks and lexicon loading.
//!
//! # Example
//!
//! ```
//! use aruuz_base::{EngineError, Result};
//!
//! fn check(count: usize) -> Result<()> {
//!     if count == 0 {
//!         return Err(EngineError::new("meter catalogue is empty"));
//!     }
//!     Ok(())
//! }
//!
//! assert!(check(0).unwrap_err().to_string().contains("empty"));
//! ```

use std::fmt;

/// An error from engine construction or catalogue validation.
#[derive(Debug, Clone)]
pub struct EngineError {
    /// Human-readable error description.
    pub message: String,
}

impl EngineError {
    /// Creates an error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for EngineError {}

/// Alias for `std::result::Result<T, EngineError>`.
pub type Result<T> = std::result::Result<T, EngineError>;
