#![warn(missing_docs)]

//! Urdu scansion lexicon - entry types and embedded four-table lookup.
//!
//! This crate provides the lexicon infrastructure for the aruuz meter
//! detection engine. A lexicon maps a written word to one or more known
//! syllabifications ("scans"), each encoding per-syllable weights.
//!
//! # Tables
//!
//! Lookups consult four tables, in order:
//!
//! 1. **exceptions** — hand-curated scans that override everything
//! 2. **master** — the main vocabulary
//! 3. **plurals** — broken plurals and other derived forms
//! 4. **variations** — additional readings attached to master entries
//!
//! The first non-empty table wins, except that variations *extend* master
//! hits rather than replacing them.
//!
//! # Scan language
//!
//! A scan string is a space-separated list of syllables, each written as the
//! syllable text followed by a weight digit: `2` long, `1` short, `0`
//! flexible. For example `فر2 یا2 دی2` is a three-syllable all-long word.
//! Converting scans to the engine's `{=, -, x}` alphabet is the caller's
//! concern; this crate only stores and serves them.
//!
//! # Stores
//!
//! [`LookupSource`] and [`LexiconHit`] define the contract; [`LexiconStore`]
//! is the seam for alternative backends. The default backend,
//! [`runtime::LexiconIndex`], parses a JSON snapshot embedded at compile
//! time and answers lookups from in-memory maps.
//!
//! # Example
//!
//! ```
//! use aruuz_lexicon::{runtime::LexiconIndex, LexiconStore};
//!
//! let lexicon = LexiconIndex::new().unwrap();
//! let hits = lexicon.lookup("کا", "کا");
//! assert!(!hits.is_empty());
//! ```

pub mod types;
pub use types::{LexiconHit, LexiconStore, LookupSource};

/// Embedded-JSON lexicon backend.
pub mod runtime;
