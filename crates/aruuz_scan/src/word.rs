//! Words and lines: the mutable state the scansion pipeline works on.
//!
//! A [`Word`] starts as a pair of text forms (raw with diacritics, surface
//! without) and accumulates candidate weight codes during code assignment
//! and prosodic rewriting. After rewriting, the alternatives are frozen and
//! the code tree branches over `codes ∪ graft_codes` per word.

/// Explanation notes attached to a word: how its base codes were produced,
/// and what the prosodic rules did to them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Explain {
    /// Notes from code assignment (lookup source or heuristic rule).
    pub base: Vec<String>,
    /// Notes from the prosodic rewriter.
    pub prosody: Vec<String>,
}

/// One lexical token on a line, with its candidate scansions.
#[derive(Debug, Clone)]
pub struct Word {
    /// Normalized text, diacritics removed. Used for rule predicates.
    pub surface: String,
    /// Folded text with diacritics kept. Used for lexicon lookup and the
    /// izafat predicate.
    pub raw: String,
    /// Candidate weight codes, ordered and de-duplicated. Every element is
    /// a non-empty string over `{=, -, x}`.
    pub codes: Vec<String>,
    /// Syllabified rendering behind each code, parallel to `codes`.
    pub taqti: Vec<String>,
    /// Annotated source form behind each code, parallel to `codes`.
    pub muarrab: Vec<String>,
    /// Alternatives introduced by vowel grafting, kept apart from `codes`
    /// so the tree can branch on grafted-vs-not independently.
    pub graft_codes: Vec<String>,
    /// Renderings parallel to `graft_codes`.
    pub graft_taqti: Vec<String>,
    /// True when the lexicon flagged this entry as admitting multiple
    /// readings.
    pub is_varied: bool,
    /// True when a prosodic rule merged this word into its predecessor;
    /// elided words are skipped by the code tree.
    pub elided: bool,
    /// Human-readable notes.
    pub explain: Explain,
}

impl Word {
    /// Creates a word with no candidate codes yet.
    pub fn new(surface: impl Into<String>, raw: impl Into<String>) -> Self {
        Word {
            surface: surface.into(),
            raw: raw.into(),
            codes: Vec::new(),
            taqti: Vec::new(),
            muarrab: Vec::new(),
            graft_codes: Vec::new(),
            graft_taqti: Vec::new(),
            is_varied: false,
            elided: false,
            explain: Explain::default(),
        }
    }

    /// Adds a candidate code with its renderings. Returns false when the
    /// code was already present; first-seen order is preserved.
    pub fn push_code(
        &mut self,
        code: impl Into<String>,
        taqti: impl Into<String>,
        muarrab: impl Into<String>,
    ) -> bool {
        let code = code.into();
        debug_assert!(aruuz_base::code::is_code(&code));
        if self.codes.iter().any(|c| *c == code) {
            return false;
        }
        self.codes.push(code);
        self.taqti.push(taqti.into());
        self.muarrab.push(muarrab.into());
        true
    }

    /// Adds a grafted alternative. Returns false on duplicates, checking
    /// both the graft list and the base codes.
    pub fn push_graft(&mut self, code: impl Into<String>, taqti: impl Into<String>) -> bool {
        let code = code.into();
        debug_assert!(aruuz_base::code::is_code(&code));
        if self.codes.iter().any(|c| *c == code) || self.graft_codes.iter().any(|c| *c == code) {
            return false;
        }
        self.graft_codes.push(code);
        self.graft_taqti.push(taqti.into());
        true
    }

    /// Total number of branchable alternatives: base codes then grafts.
    pub fn choice_count(&self) -> usize {
        self.codes.len() + self.graft_codes.len()
    }

    /// The `i`-th alternative as `(code, taqti)`, indexing base codes first
    /// and graft codes after them.
    pub fn choice(&self, i: usize) -> (&str, &str) {
        if i < self.codes.len() {
            (&self.codes[i], &self.taqti[i])
        } else {
            let j = i - self.codes.len();
            (&self.graft_codes[j], &self.graft_taqti[j])
        }
    }

    /// Appends a base-generation note.
    pub fn note_base(&mut self, note: impl Into<String>) {
        self.explain.base.push(note.into());
    }

    /// Appends a prosodic-adjustment note.
    pub fn note_prosody(&mut self, note: impl Into<String>) {
        self.explain.prosody.push(note.into());
    }
}

/// A line of verse: the original text plus its words in reading order.
#[derive(Debug, Clone)]
pub struct Line {
    /// The text as given, before normalization.
    pub original: String,
    /// Words in reading order. Order is load-bearing.
    pub words: Vec<Word>,
}

impl Line {
    /// Indices of the words that take part in scansion (elided words are
    /// skipped but stay in the list for output alignment).
    pub fn scannable(&self) -> Vec<usize> {
        self.words
            .iter()
            .enumerate()
            .filter(|(_, w)| !w.elided)
            .map(|(i, _)| i)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_code_dedupes_and_keeps_order() {
        let mut w = Word::new("دل", "دل");
        assert!(w.push_code("=", "دل", "دل2"));
        assert!(w.push_code("=-", "د ل", "د1 ل1"));
        assert!(!w.push_code("=", "دل", "دل2"));
        assert_eq!(w.codes, vec!["=", "=-"]);
        assert_eq!(w.taqti.len(), 2);
    }

    #[test]
    fn choices_cover_grafts_after_codes() {
        let mut w = Word::new("اگر", "اگر");
        w.push_code("-=", "ا گر", "ا1 گر2");
        w.push_graft("=", "گر");
        assert_eq!(w.choice_count(), 2);
        assert_eq!(w.choice(0).0, "-=");
        assert_eq!(w.choice(1).0, "=");
    }

    #[test]
    fn graft_duplicates_of_base_codes_are_rejected() {
        let mut w = Word::new("اگر", "اگر");
        w.push_code("=", "گر", "");
        assert!(!w.push_graft("=", "گر"));
    }

    #[test]
    fn elided_words_drop_out_of_scansion() {
        let mut line = Line {
            original: "دل و جاں".to_string(),
            words: vec![
                Word::new("دل", "دل"),
                Word::new("و", "و"),
                Word::new("جاں", "جاں"),
            ],
        };
        line.words[1].elided = true;
        assert_eq!(line.scannable(), vec![0, 2]);
    }
}
