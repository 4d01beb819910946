//! Engine-wide properties, checked over a fixed corpus of inputs.

mod common;

use common::scan_lines;

use aruuz_lexicon::runtime::LexiconIndex;
use aruuz_scan::catalogue::{is_exact, Catalogue};
use aruuz_scan::word::{Line, Word};
use aruuz_scan::{assign, normalize, prosody, UNMATCHED};

const CORPUS: &[&[&str]] = &[
    &["نقش فریادی ہے کس کی شوخیِ تحریر کا"],
    &["سہانی جوانی کہانی سہانی", "سہانی جوانی کہانی گیا"],
    &["سہانی جوانی کہانی بہار"],
    &["آ"],
    &["دل و جاں", "شام و سحر"],
    &["عبد الکریم", "کیونکہ دل اگر"],
    &[""],
];

/// Names matched by mora count; their templates are canonical faces, not
/// symbol-for-symbol matches.
const MORA_METERS: &[&str] = &["بحر متقارب مثمن ہندی", "بحر متدارک مثمن زمزمہ"];

#[test]
fn determinism_byte_for_byte() {
    for couplet in CORPUS {
        let first = scan_lines(couplet);
        let second = scan_lines(couplet);
        assert_eq!(first, second, "couplet {couplet:?} scanned differently");
        let first_json = serde_json::to_string(&first).unwrap();
        let second_json = serde_json::to_string(&second).unwrap();
        assert_eq!(first_json, second_json);
    }
}

#[test]
fn symbol_closure_of_codes() {
    for couplet in CORPUS {
        for result in scan_lines(couplet) {
            assert!(!result.full_code.is_empty() || result.meter_name == UNMATCHED);
            for c in result.full_code.chars() {
                assert!(
                    matches!(c, '=' | '-' | 'x' | '+' | '~'),
                    "stray symbol {c:?} in {}",
                    result.full_code
                );
            }
        }
    }
}

#[test]
fn variant_completeness_of_matches() {
    let catalogue = Catalogue::get().unwrap();
    for couplet in CORPUS {
        for result in scan_lines(couplet) {
            if result.meter_name == UNMATCHED
                || MORA_METERS.contains(&result.meter_name.as_str())
            {
                continue;
            }
            let all_positions: Vec<usize> = (0..=result.full_code.len()).collect();
            let indices = catalogue.index_by_name(&result.meter_name);
            assert!(!indices.is_empty());
            let holds = indices.iter().any(|&i| {
                catalogue
                    .variants(i)
                    .iter()
                    .any(|v| is_exact(&result.full_code, &all_positions, v))
            });
            assert!(
                holds,
                "{} claims {} but no variant matches",
                result.full_code, result.meter_name
            );
        }
    }
}

#[test]
fn dominance_is_unique_per_couplet() {
    for couplet in CORPUS {
        let results = scan_lines(couplet);
        let mut dominant_names: Vec<&str> = results
            .iter()
            .filter(|r| r.is_dominant)
            .map(|r| r.meter_name.as_str())
            .collect();
        dominant_names.sort();
        dominant_names.dedup();
        assert!(
            dominant_names.len() <= 1,
            "couplet {couplet:?} elected {dominant_names:?}"
        );
        // When anything matched at all, something must win.
        if results.iter().any(|r| r.meter_name != UNMATCHED) {
            assert_eq!(dominant_names.len(), 1);
        }
    }
}

#[test]
fn normalization_is_idempotent() {
    let samples = [
        "نقش فریادی ہے کس کی شوخیِ تحریر کا",
        "دل، و ۔ جاں!",
        "  \u{200C}آ \u{FEFF} ",
        "عبد الکریم؟",
        "",
    ];
    for s in samples {
        let once = normalize::clean_line(s);
        assert_eq!(normalize::clean_line(&once), once);
    }
}

#[test]
fn prosodic_rules_only_add_codes() {
    let store = LexiconIndex::new().unwrap();
    let catalogue = Catalogue::get().unwrap();
    let lines = [
        "نقش فریادی ہے کس کی شوخیِ تحریر کا",
        "عبد الکریم و شوخیِ اگر",
        "دل و جاں",
    ];
    for text in lines {
        // Build the line up to (but not including) the prosodic pass.
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
        assign::assign_line(&mut line, Some(&store), catalogue);

        let before: Vec<Vec<String>> = line.words.iter().map(|w| w.codes.clone()).collect();
        prosody::apply(&mut line);
        for (word, old) in line.words.iter().zip(before) {
            for code in old {
                assert!(
                    word.codes.contains(&code),
                    "{} lost code {code}",
                    word.surface
                );
            }
        }
    }
}
