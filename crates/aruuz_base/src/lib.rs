//! # aruuz-base
//!
//! Pure structural atoms for the aruuz ecosystem.
//!
//! This crate provides the foundational types used throughout aruuz:
//!
//! - [`Weight`] — the three-symbol syllable-weight alphabet
//! - [`code`] — helpers for weight-code strings and meter templates
//! - [`EngineError`]/[`Result`] — the engine error type
//!
//! # Design Principles
//!
//! This crate has **no knowledge of Urdu orthography or I/O**. It provides
//! only the symbolic vocabulary that higher-level crates build upon.
//!
//! # Example
//!
//! ```
//! use aruuz_base::{code, Weight};
//!
//! assert_eq!(Weight::Long.symbol(), '=');
//! assert!(code::is_code("=-x"));
//! assert_eq!(code::min_morae("=-x"), 4);
//! ```

pub mod code;
pub mod error;

pub use code::Weight;
pub use error::{EngineError, Result};
