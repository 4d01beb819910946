//! Scan results as handed to callers and serializers.

use serde::Serialize;

/// Meter name reported when a line matches nothing in the catalogue.
pub const UNMATCHED: &str = "unmatched";

/// One identified (or failed) scansion of one line.
///
/// Serialization uses the stable field set `line`, `meter_name`, `feet`,
/// `word_taqti`, `full_code`, `is_dominant`, `partial`, `explain`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineResult {
    /// The line as given to the scanner.
    pub line: String,
    /// Urdu display name of the matched bahr, or [`UNMATCHED`].
    pub meter_name: String,
    /// Rukn rendering of the matched template variant, caesura markers
    /// retained. Empty for unmatched lines.
    pub feet: String,
    /// Chosen syllabification per input word, aligned to the line's words.
    pub word_taqti: Vec<String>,
    /// Concatenated weight code of the chosen scansion.
    pub full_code: String,
    /// True on every result of the couplet's winning meter.
    pub is_dominant: bool,
    /// True when the node budget cut the line's search short.
    pub partial: bool,
    /// Flattened per-word notes: generation first, prosody after.
    pub explain: Vec<String>,
}
