//! Inter-word prosodic rewriting.
//!
//! Four rules run over the line after every word has codes, each as its own
//! left-to-right pass so later rules see the earlier rules' output:
//!
//! 1. **Article absorption** — a consonant-final word swallows the alif of
//!    a following `ال` article.
//! 2. **Izafat** — a word marked with the linking kasra (or hamza) gains
//!    alternatives carrying the extra linking vowel.
//! 3. **Conjunction fusion** — the one-letter `و` merges into the previous
//!    word and drops out of scansion.
//! 4. **Grafting** — a vowel-initial word after a consonant-final word
//!    gains alternatives with the initial vowel absorbed backwards.
//!
//! Rules only ever add alternatives; pre-existing codes are never removed.
//! Every mutation leaves a note in the affected word's explain list.

use crate::normalize::{ends_in_consonant, ALIF, ALIF_MADD, BARI_YEH, HAMZA_ABOVE, HEH, YEH, ZER};
use crate::word::Line;

/// Runs all four rules over the line, in order.
pub fn apply(line: &mut Line) {
    article_pass(line);
    izafat_pass(line);
    conjunction_pass(line);
    graft_pass(line);
}

/// Adjacent pairs of scansion-relevant words.
fn pairs(line: &Line) -> Vec<(usize, usize)> {
    let idx = line.scannable();
    idx.windows(2).map(|w| (w[0], w[1])).collect()
}

fn article_pass(line: &mut Line) {
    for (i, j) in pairs(line) {
        let next_surface = line.words[j].surface.clone();
        if !next_surface.starts_with("ال") || next_surface.chars().count() <= 2 {
            continue;
        }
        if !ends_in_consonant(&line.words[i].surface) {
            continue;
        }

        {
            let cur = &mut line.words[i];
            let base: Vec<(String, String, String)> = cur
                .codes
                .iter()
                .cloned()
                .zip(cur.taqti.iter().cloned().zip(cur.muarrab.iter().cloned()))
                .map(|(c, (t, m))| (c, t, m))
                .collect();
            let mut touched = false;
            for (code, taqti, muarrab) in base {
                let absorbed = if code.ends_with('-') {
                    format!("{}=", &code[..code.len() - 1])
                } else {
                    format!("{code}-")
                };
                touched |= cur.push_code(absorbed, taqti, muarrab);
            }
            if touched {
                cur.note_prosody("article: final syllable extended over the article alif");
            }
        }

        {
            let next = &mut line.words[j];
            let base: Vec<(String, String, String)> = next
                .codes
                .iter()
                .cloned()
                .zip(next.taqti.iter().cloned().zip(next.muarrab.iter().cloned()))
                .map(|(c, (t, m))| (c, t, m))
                .collect();
            let mut touched = false;
            for (code, taqti, muarrab) in base {
                if let Some(rest) = code.strip_prefix('-') {
                    if !rest.is_empty() {
                        touched |= next.push_code(rest.to_string(), taqti, muarrab);
                    }
                }
            }
            if touched {
                next.note_prosody("article: alif elided after a consonant-final word");
            }
        }
    }
}

fn izafat_pass(line: &mut Line) {
    for i in line.scannable() {
        let word = &mut line.words[i];
        let marked = matches!(word.raw.chars().last(), Some(ZER) | Some(HAMZA_ABOVE));
        if !marked {
            continue;
        }

        let base: Vec<(String, String, String)> = word
            .codes
            .iter()
            .cloned()
            .zip(word.taqti.iter().cloned().zip(word.muarrab.iter().cloned()))
            .map(|(c, (t, m))| (c, t, m))
            .collect();

        let mut appended = false;
        for (code, taqti, muarrab) in &base {
            appended |= word.push_code(format!("{code}-"), taqti.clone(), muarrab.clone());
        }
        if appended {
            word.note_prosody("izafat: linking vowel appended");
        }

        // After a final yeh or heh the izafat re-syllabifies: the last long
        // shortens and the linking vowel carries the length.
        let vowel_final = matches!(
            word.surface.chars().last(),
            Some(YEH) | Some(BARI_YEH) | Some(HEH)
        );
        if vowel_final {
            let mut split = false;
            for (code, taqti, muarrab) in &base {
                if code.ends_with('=') || code.ends_with('x') {
                    let alt = format!("{}-=", &code[..code.len() - 1]);
                    split |= word.push_code(alt, taqti.clone(), muarrab.clone());
                }
            }
            if split {
                word.note_prosody("izafat: final syllable split for the linking vowel");
            }
        }
    }
}

fn conjunction_pass(line: &mut Line) {
    for (i, j) in pairs(line) {
        if line.words[j].surface != "و" {
            continue;
        }

        {
            let cur = &mut line.words[i];
            let base: Vec<(String, String, String)> = cur
                .codes
                .iter()
                .cloned()
                .zip(cur.taqti.iter().cloned().zip(cur.muarrab.iter().cloned()))
                .map(|(c, (t, m))| (c, t, m))
                .collect();
            let mut touched = false;
            for (code, taqti, muarrab) in base {
                touched |= cur.push_code(format!("{code}-"), format!("{taqti} و"), muarrab);
            }
            if touched {
                cur.note_prosody("conjunction: و absorbed into the word");
            }
        }

        let next = &mut line.words[j];
        next.elided = true;
        next.note_prosody("conjunction: merged into the previous word for scansion");
    }
}

fn graft_pass(line: &mut Line) {
    for (i, j) in pairs(line) {
        if !ends_in_consonant(&line.words[i].surface) {
            continue;
        }
        let starts_vowel = matches!(
            line.words[j].surface.chars().next(),
            Some(ALIF) | Some(ALIF_MADD)
        );
        if !starts_vowel {
            continue;
        }

        let next = &mut line.words[j];
        let base: Vec<(String, String)> = next
            .codes
            .iter()
            .cloned()
            .zip(next.taqti.iter().cloned())
            .collect();
        let mut touched = false;
        for (code, taqti) in base {
            let grafted = match code.chars().next() {
                Some('-') | Some('x') => code[1..].to_string(),
                Some(_) => format!("-{}", &code[1..]),
                None => continue,
            };
            if grafted.is_empty() {
                continue;
            }
            touched |= next.push_graft(grafted, taqti);
        }
        if touched {
            next.note_prosody("grafting: initial vowel absorbed into the previous word");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assign;
    use crate::catalogue::Catalogue;
    use crate::normalize;
    use crate::word::{Line, Word};
    use aruuz_lexicon::runtime::LexiconIndex;

    fn make_line(text: &str) -> Line {
        let store = LexiconIndex::new().unwrap();
        let cat = Catalogue::get().unwrap();
        let cleaned = normalize::clean_line(text);
        let words = normalize::tokenize(&cleaned)
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
        assign::assign_line(&mut line, Some(&store), cat);
        line
    }

    #[test]
    fn article_rule_extends_and_elides() {
        let mut line = make_line("عبد الکریم");
        apply(&mut line);

        let abd = &line.words[0];
        assert!(abd.codes.contains(&"==".to_string()));
        assert_eq!(
            abd.explain
                .prosody
                .iter()
                .filter(|n| n.contains("article"))
                .count(),
            1
        );

        let karim = &line.words[1];
        assert!(karim.codes.contains(&"==-".to_string()));
    }

    #[test]
    fn article_rule_needs_a_consonant_final_predecessor() {
        let mut line = make_line("کی الکریم");
        apply(&mut line);
        assert!(!line.words[0]
            .explain
            .prosody
            .iter()
            .any(|n| n.contains("article")));
    }

    #[test]
    fn izafat_adds_both_alternatives_after_yeh() {
        let mut line = make_line("شوخیِ تحریر");
        apply(&mut line);

        let shokhi = &line.words[0];
        assert!(shokhi.codes.contains(&"==".to_string()));
        assert!(shokhi.codes.contains(&"==-".to_string()));
        assert!(shokhi.codes.contains(&"=-=".to_string()));
    }

    #[test]
    fn izafat_ignores_unmarked_words() {
        let mut line = make_line("شوخی تحریر");
        apply(&mut line);
        assert_eq!(line.words[0].codes, vec!["==".to_string()]);
    }

    #[test]
    fn conjunction_merges_and_elides() {
        let mut line = make_line("شام و سحر");
        apply(&mut line);

        assert!(line.words[1].elided);
        assert_eq!(line.scannable(), vec![0, 2]);
        // شام is "=-"; the fused alternative carries the conjunction mora.
        assert!(line.words[0].codes.contains(&"=--".to_string()));
        assert!(line.words[0]
            .explain
            .prosody
            .iter()
            .any(|n| n.contains("conjunction")));
    }

    #[test]
    fn grafting_branches_separately_from_codes() {
        let mut line = make_line("دل اگر");
        apply(&mut line);

        let agar = &line.words[1];
        // Base reading stays in codes, the grafted one in graft_codes.
        assert_eq!(agar.codes, vec!["-=".to_string()]);
        assert_eq!(agar.graft_codes, vec!["=".to_string()]);
        assert!(agar
            .explain
            .prosody
            .iter()
            .any(|n| n.contains("grafting")));
    }

    #[test]
    fn rules_never_remove_existing_codes() {
        let mut line = make_line("عبد الکریم و شوخیِ اگر");
        let before: Vec<Vec<String>> = line.words.iter().map(|w| w.codes.clone()).collect();
        apply(&mut line);
        for (word, old) in line.words.iter().zip(before) {
            for code in old {
                assert!(word.codes.contains(&code));
            }
        }
    }
}
