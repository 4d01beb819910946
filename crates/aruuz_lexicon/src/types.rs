//! Lexicon lookup contract: hit records, source tags, and the store seam.

/// Which table produced a lexicon hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LookupSource {
    /// Hand-curated override table.
    Exception,
    /// Main vocabulary table.
    Master,
    /// Broken plurals and derived forms.
    Plural,
    /// Additional readings attached to a master entry.
    Variation,
}

impl LookupSource {
    /// Short label used in explain notes.
    pub fn label(&self) -> &'static str {
        match self {
            LookupSource::Exception => "exception",
            LookupSource::Master => "master",
            LookupSource::Plural => "plural",
            LookupSource::Variation => "variation",
        }
    }
}

/// One known syllabification of a word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexiconHit {
    /// Scan string in the per-syllable `text digit` language.
    pub scan: String,
    /// True when the entry admits multiple readings.
    pub is_varied: bool,
    /// Table that produced this hit.
    pub source: LookupSource,
}

/// A queryable lexicon backend.
///
/// `surface` is the normalized, diacritic-free form; `raw` keeps the
/// diacritics as written. Implementations should try the raw form first so
/// that author-supplied diacritics disambiguate, then fall back to the
/// surface form. An empty result means "unknown word" and is not an error.
pub trait LexiconStore {
    /// Returns every known scan for the word, in table order.
    fn lookup(&self, surface: &str, raw: &str) -> Vec<LexiconHit>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn source_labels_are_stable() {
        assert_eq!(LookupSource::Exception.label(), "exception");
        assert_eq!(LookupSource::Master.label(), "master");
        assert_eq!(LookupSource::Plural.label(), "plural");
        assert_eq!(LookupSource::Variation.label(), "variation");
    }
}
