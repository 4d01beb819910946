//! # aruuz-scan
//!
//! Urdu prosodic meter (bahr) detection.
//!
//! Given the lines of a couplet, the engine produces per-line candidate
//! scansions — sequences of symbolic syllable weights aligned to classical
//! meter templates — and elects one dominant meter across the couplet.
//!
//! ## Pipeline
//!
//! 1. [`normalize`] — punctuation/zero-width cleanup, orthographic folds,
//!    diacritic stripping
//! 2. [`assign`] — per-word candidate codes from the lexicon or the
//!    length-indexed heuristics
//! 3. [`prosody`] — inter-word rules (article absorption, izafat,
//!    conjunction fusion, grafting) adding further alternatives
//! 4. `tree` — the per-line code tree, pruned against the
//!    [`catalogue`] in lock-step
//! 5. `matcher`/`dominant` — per-line results and the couplet-level
//!    dominant meter
//!
//! The engine is single-threaded, synchronous, and deterministic: the same
//! input always produces byte-identical results. Scansion never fails on
//! verse input — empty lines scan to nothing and unknown meters come back
//! as [`result::UNMATCHED`] results.
//!
//! ## Example
//!
//! ```
//! use aruuz_scan::{ScanOptions, Scanner};
//!
//! let scanner = Scanner::new(ScanOptions::default()).unwrap();
//! let results = scanner.scan(&["نقش فریادی ہے کس کی شوخیِ تحریر کا"]);
//! assert!(results.iter().any(|r| r.is_dominant));
//! ```

pub mod assign;
pub mod catalogue;
mod dominant;
mod matcher;
mod meters;
pub mod normalize;
pub mod prosody;
pub mod result;
mod tree;
pub mod word;

pub use aruuz_base::{EngineError, Result};
pub use catalogue::Catalogue;
pub use result::{LineResult, UNMATCHED};

use aruuz_lexicon::runtime::LexiconIndex;
use aruuz_lexicon::LexiconStore;

use word::{Line, Word};

/// Engine options.
///
/// `fuzzy` and `free_verse` are recognized for interface stability but
/// currently change nothing; scans run identically with either set.
#[derive(Debug, Clone)]
pub struct ScanOptions {
    /// Reserved for approximate matching.
    pub fuzzy: bool,
    /// Reserved for disabling dominant-meter resolution.
    pub free_verse: bool,
    /// Per-line node budget for the code tree.
    pub node_budget: usize,
}

impl Default for ScanOptions {
    fn default() -> Self {
        ScanOptions {
            fuzzy: false,
            free_verse: false,
            node_budget: tree::DEFAULT_NODE_BUDGET,
        }
    }
}

/// A configured scansion engine.
///
/// Construction loads and self-checks the meter catalogue (process-wide,
/// shared) and opens the lexicon store. A failing lexicon is downgraded to
/// heuristics-only scansion with per-word notes; a failing catalogue is a
/// construction error.
pub struct Scanner {
    catalogue: &'static Catalogue,
    lexicon: Option<Box<dyn LexiconStore>>,
    options: ScanOptions,
}

impl Scanner {
    /// Creates a scanner backed by the embedded lexicon.
    pub fn new(options: ScanOptions) -> Result<Self> {
        let lexicon = match LexiconIndex::new() {
            Ok(index) => Some(Box::new(index) as Box<dyn LexiconStore>),
            Err(e) => {
                log::warn!("lexicon unavailable, falling back to heuristics: {e}");
                None
            }
        };
        Ok(Scanner {
            catalogue: Catalogue::get()?,
            lexicon,
            options,
        })
    }

    /// Creates a scanner over a caller-provided lexicon store.
    pub fn with_store(options: ScanOptions, store: Box<dyn LexiconStore>) -> Result<Self> {
        Ok(Scanner {
            catalogue: Catalogue::get()?,
            lexicon: Some(store),
            options,
        })
    }

    /// Creates a scanner that never consults a lexicon.
    pub fn without_lexicon(options: ScanOptions) -> Result<Self> {
        Ok(Scanner {
            catalogue: Catalogue::get()?,
            lexicon: None,
            options,
        })
    }

    /// The catalogue this scanner matches against.
    pub fn catalogue(&self) -> &'static Catalogue {
        self.catalogue
    }

    /// Normalizes, tokenizes, and annotates one line up to the point where
    /// the code tree would take over: every word carries its candidate
    /// codes and prosodic alternatives.
    pub fn prepare_line(&self, text: &str) -> Line {
        let cleaned = normalize::clean_line(text);
        let words: Vec<Word> = normalize::tokenize(&cleaned)
            .into_iter()
            .map(|tok| {
                let raw = normalize::clean_word(&tok);
                let surface = normalize::remove_diacritics(&raw);
                Word::new(surface, raw)
            })
            .collect();

        let mut line = Line {
            original: text.to_string(),
            words,
        };
        assign::assign_line(&mut line, self.lexicon.as_deref(), self.catalogue);
        prosody::apply(&mut line);
        line
    }

    /// Scans the lines of one couplet (or stanza) and resolves the
    /// dominant meter across them. Results come back flattened in line
    /// order; lines that are empty after cleaning contribute nothing.
    pub fn scan(&self, lines: &[&str]) -> Vec<LineResult> {
        let mut groups: Vec<Vec<LineResult>> = Vec::with_capacity(lines.len());
        for text in lines {
            let line = self.prepare_line(text);
            if line.words.is_empty() {
                groups.push(Vec::new());
                continue;
            }
            let outcome = tree::scan_line(&line, self.catalogue, self.options.node_budget);
            groups.push(matcher::line_results(&line, &outcome, self.catalogue));
        }
        dominant::resolve(&mut groups, self.catalogue);
        groups.into_iter().flatten().collect()
    }
}

/// One-shot convenience wrapper over [`Scanner`].
pub fn scan(lines: &[&str], options: &ScanOptions) -> Result<Vec<LineResult>> {
    Ok(Scanner::new(options.clone())?.scan(lines))
}
