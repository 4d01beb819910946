//! Turning surviving scan paths into per-line results.

use rustc_hash::FxHashSet;

use crate::catalogue::{self, Catalogue};
use crate::result::{LineResult, UNMATCHED};
use crate::tree::ScanOutcome;
use crate::word::Line;

/// Builds the line's results from its surviving paths.
///
/// Every `(path, meter)` pair becomes one result, deduplicated by
/// `(meter_name, full_code)` so catalogue variants sharing a display name
/// collapse unless they scan differently. A line with no surviving path
/// yields a single [`UNMATCHED`] result instead of an error.
pub fn line_results(line: &Line, outcome: &ScanOutcome, catalogue: &Catalogue) -> Vec<LineResult> {
    let mut results = Vec::new();
    let mut seen: FxHashSet<(String, String)> = FxHashSet::default();

    for path in &outcome.paths {
        let mut word_taqti: Vec<String> = line
            .words
            .iter()
            .map(|w| if w.elided { w.surface.clone() } else { String::new() })
            .collect();
        for &(word_index, choice) in &path.choices {
            let (_, taqti) = line.words[word_index].choice(choice);
            word_taqti[word_index] = taqti.to_string();
        }

        for &m in &path.meters {
            let name = catalogue.name(m);
            if !seen.insert((name.to_string(), path.code.clone())) {
                continue;
            }
            let feet = if catalogue.morae(m).is_some() {
                catalogue.feet(m).to_string()
            } else {
                let k = matched_variant(catalogue, m, &path.code, &path.boundaries);
                catalogue.variant_feet(m, k).to_string()
            };
            results.push(LineResult {
                line: line.original.clone(),
                meter_name: name.to_string(),
                feet,
                word_taqti: word_taqti.clone(),
                full_code: path.code.clone(),
                is_dominant: false,
                partial: outcome.partial,
                explain: flatten_explain(line),
            });
        }
    }

    if results.is_empty() && !line.words.is_empty() {
        results.push(unmatched_result(line, outcome));
    }
    results
}

fn matched_variant(catalogue: &Catalogue, m: usize, code: &str, boundaries: &[usize]) -> usize {
    (0..4)
        .find(|&k| catalogue::is_exact(code, boundaries, &catalogue.variants(m)[k]))
        .unwrap_or(0)
}

fn unmatched_result(line: &Line, outcome: &ScanOutcome) -> LineResult {
    let mut full_code = String::new();
    let mut word_taqti = Vec::with_capacity(line.words.len());
    for word in &line.words {
        if word.elided {
            word_taqti.push(word.surface.clone());
            continue;
        }
        if let Some(code) = word.codes.first() {
            full_code.push_str(code);
        }
        word_taqti.push(word.taqti.first().cloned().unwrap_or_default());
    }
    LineResult {
        line: line.original.clone(),
        meter_name: UNMATCHED.to_string(),
        feet: String::new(),
        word_taqti,
        full_code,
        is_dominant: false,
        partial: outcome.partial,
        explain: flatten_explain(line),
    }
}

fn flatten_explain(line: &Line) -> Vec<String> {
    let mut notes = Vec::new();
    for word in &line.words {
        for note in &word.explain.base {
            notes.push(format!("{}: {}", word.surface, note));
        }
        for note in &word.explain.prosody {
            notes.push(format!("{}: {}", word.surface, note));
        }
    }
    notes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::{self, DEFAULT_NODE_BUDGET};
    use crate::word::Word;

    fn cat() -> &'static Catalogue {
        Catalogue::get().unwrap()
    }

    fn word_with(surface: &str, codes: &[&str]) -> Word {
        let mut w = Word::new(surface, surface);
        for c in codes {
            w.push_code(*c, surface, "");
        }
        w
    }

    #[test]
    fn results_carry_feet_and_taqti() {
        let line = Line {
            original: "test".to_string(),
            words: vec![
                word_with("a", &["-==="]),
                word_with("b", &["-==="]),
                word_with("c", &["-==="]),
                word_with("d", &["-==="]),
            ],
        };
        let outcome = tree::scan_line(&line, cat(), DEFAULT_NODE_BUDGET);
        let results = line_results(&line, &outcome, cat());

        let salim = results
            .iter()
            .find(|r| r.meter_name == "بحر ہزج مثمن سالم")
            .expect("salim result");
        assert_eq!(salim.feet, "مفاعیلن مفاعیلن مفاعیلن مفاعیلن");
        assert_eq!(salim.full_code, "-===-===-===-===");
        assert_eq!(salim.word_taqti, vec!["a", "b", "c", "d"]);
        assert!(!salim.is_dominant);
    }

    #[test]
    fn no_path_means_one_unmatched_result() {
        let line = Line {
            original: "آ".to_string(),
            words: vec![word_with("آ", &["="])],
        };
        let outcome = tree::scan_line(&line, cat(), DEFAULT_NODE_BUDGET);
        let results = line_results(&line, &outcome, cat());
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].meter_name, UNMATCHED);
        assert_eq!(results[0].full_code, "=");
        assert_eq!(results[0].feet, "");
    }

    #[test]
    fn duplicate_name_and_code_pairs_collapse() {
        // Both Hindi variants admit this flexible code; one name, one code,
        // so a single result must come out.
        let line = Line {
            original: "hindi".to_string(),
            words: vec![
                word_with("a", &["====x"]),
                word_with("b", &["====x"]),
                word_with("c", &["====x"]),
            ],
        };
        let outcome = tree::scan_line(&line, cat(), DEFAULT_NODE_BUDGET);
        let results = line_results(&line, &outcome, cat());
        let hindi: Vec<_> = results
            .iter()
            .filter(|r| r.meter_name == "بحر متقارب مثمن ہندی")
            .collect();
        assert_eq!(hindi.len(), 1);
    }
}
