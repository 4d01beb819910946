//! Embedded-JSON lexicon backend.
//!
//! The reference lexicon ships as a JSON snapshot embedded at compile time
//! and parsed once when [`LexiconIndex::new`] is called. The snapshot holds
//! the four tables of the lookup contract as flat row arrays; the index
//! builds one hash map per table keyed by written form.
//!
//! The physical store is deliberately replaceable: anything implementing
//! [`LexiconStore`](crate::LexiconStore) can back the engine, and a scanner
//! constructed without a store falls back to heuristics for every word.
//!
//! # JSON format
//!
//! Four top-level arrays: `exceptions`, `master`, `plurals`, `variations`.
//! Every row has `word` and `scan`; master rows may set `varied` when extra
//! readings exist in the variations table under the same word.

use rustc_hash::FxHashMap;
use serde::Deserialize;

use aruuz_base::{EngineError, Result};

use crate::types::{LexiconHit, LexiconStore, LookupSource};

const LEXICON_JSON: &str = include_str!("../assets/lexicon.json");

/// Deserialized lexicon snapshot.
#[derive(Deserialize, Debug)]
pub struct LexiconData {
    /// Hand-curated override rows.
    pub exceptions: Vec<Row>,
    /// Main vocabulary rows.
    pub master: Vec<MasterRow>,
    /// Broken plurals and derived forms.
    pub plurals: Vec<Row>,
    /// Extra readings keyed by master word.
    pub variations: Vec<Row>,
}

/// A plain table row: written form plus one scan.
#[derive(Deserialize, Debug, Clone)]
pub struct Row {
    /// Written form as it appears in verse (no diacritics).
    pub word: String,
    /// Scan in the per-syllable `text digit` language.
    pub scan: String,
}

/// A master-table row; `varied` marks entries with attached variations.
#[derive(Deserialize, Debug, Clone)]
pub struct MasterRow {
    /// Written form as it appears in verse (no diacritics).
    pub word: String,
    /// Scan in the per-syllable `text digit` language.
    pub scan: String,
    /// True when the variations table holds extra readings for this word.
    #[serde(default)]
    pub varied: bool,
}

/// In-memory index over the embedded snapshot.
pub struct LexiconIndex {
    exceptions: FxHashMap<String, Vec<String>>,
    master: FxHashMap<String, (Vec<String>, bool)>,
    plurals: FxHashMap<String, Vec<String>>,
    variations: FxHashMap<String, Vec<String>>,
}

impl LexiconIndex {
    /// Parses the embedded snapshot and builds the per-table maps.
    pub fn new() -> Result<Self> {
        Self::from_json(LEXICON_JSON)
    }

    /// Builds an index from a JSON snapshot string.
    pub fn from_json(json: &str) -> Result<Self> {
        let data: LexiconData = serde_json::from_str(json)
            .map_err(|e| EngineError::new(format!("lexicon snapshot did not parse: {e}")))?;

        let mut index = LexiconIndex {
            exceptions: FxHashMap::default(),
            master: FxHashMap::default(),
            plurals: FxHashMap::default(),
            variations: FxHashMap::default(),
        };

        for row in &data.exceptions {
            index
                .exceptions
                .entry(row.word.clone())
                .or_default()
                .push(row.scan.clone());
        }
        for row in &data.master {
            let entry = index
                .master
                .entry(row.word.clone())
                .or_insert_with(|| (Vec::new(), false));
            entry.0.push(row.scan.clone());
            entry.1 |= row.varied;
        }
        for row in &data.plurals {
            index
                .plurals
                .entry(row.word.clone())
                .or_default()
                .push(row.scan.clone());
        }
        for row in &data.variations {
            index
                .variations
                .entry(row.word.clone())
                .or_default()
                .push(row.scan.clone());
        }

        Ok(index)
    }

    /// Number of distinct words across all tables.
    pub fn word_count(&self) -> usize {
        self.exceptions.len() + self.master.len() + self.plurals.len() + self.variations.len()
    }

    fn lookup_form(&self, form: &str) -> Vec<LexiconHit> {
        let mut hits = Vec::new();

        if let Some(scans) = self.exceptions.get(form) {
            for scan in scans {
                hits.push(LexiconHit {
                    scan: scan.clone(),
                    is_varied: false,
                    source: LookupSource::Exception,
                });
            }
            return hits;
        }

        if let Some((scans, varied)) = self.master.get(form) {
            for scan in scans {
                hits.push(LexiconHit {
                    scan: scan.clone(),
                    is_varied: *varied,
                    source: LookupSource::Master,
                });
            }
            // Variations extend master hits rather than replacing them.
            if *varied {
                if let Some(extra) = self.variations.get(form) {
                    for scan in extra {
                        hits.push(LexiconHit {
                            scan: scan.clone(),
                            is_varied: true,
                            source: LookupSource::Variation,
                        });
                    }
                }
            }
            return hits;
        }

        if let Some(scans) = self.plurals.get(form) {
            for scan in scans {
                hits.push(LexiconHit {
                    scan: scan.clone(),
                    is_varied: false,
                    source: LookupSource::Plural,
                });
            }
            return hits;
        }

        if let Some(scans) = self.variations.get(form) {
            for scan in scans {
                hits.push(LexiconHit {
                    scan: scan.clone(),
                    is_varied: true,
                    source: LookupSource::Variation,
                });
            }
        }

        hits
    }
}

impl LexiconStore for LexiconIndex {
    fn lookup(&self, surface: &str, raw: &str) -> Vec<LexiconHit> {
        // The raw form keeps author-supplied diacritics and wins when the
        // snapshot records it; most rows are keyed by the bare surface.
        if raw != surface {
            let hits = self.lookup_form(raw);
            if !hits.is_empty() {
                return hits;
            }
        }
        self.lookup_form(surface)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_snapshot_parses() {
        let index = LexiconIndex::new().unwrap();
        assert!(index.word_count() > 50);
    }

    #[test]
    fn exceptions_shadow_master() {
        let json = r#"{
            "exceptions": [{"word": "کی", "scan": "کی0"}],
            "master": [{"word": "کی", "scan": "کی2"}],
            "plurals": [],
            "variations": []
        }"#;
        let index = LexiconIndex::from_json(json).unwrap();
        let hits = index.lookup("کی", "کی");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].scan, "کی0");
        assert_eq!(hits[0].source, LookupSource::Exception);
    }

    #[test]
    fn variations_extend_varied_master_rows() {
        let json = r#"{
            "exceptions": [],
            "master": [{"word": "فریادی", "scan": "فر2 یا2 دی2", "varied": true}],
            "plurals": [],
            "variations": [{"word": "فریادی", "scan": "ف1 ریا2 دی2"}]
        }"#;
        let index = LexiconIndex::from_json(json).unwrap();
        let hits = index.lookup("فریادی", "فریادی");
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].source, LookupSource::Master);
        assert!(hits[0].is_varied);
        assert_eq!(hits[1].source, LookupSource::Variation);
    }

    #[test]
    fn unknown_word_returns_empty() {
        let index = LexiconIndex::new().unwrap();
        assert!(index.lookup("قژفتk", "قژفتk").is_empty());
    }

    #[test]
    fn malformed_snapshot_is_an_error() {
        assert!(LexiconIndex::from_json("{").is_err());
    }
}
