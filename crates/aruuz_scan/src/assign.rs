//! Word code assignment: lexicon conversion and length-indexed heuristics.
//!
//! Per word, the assigner prefers lexicon scans and converts them to weight
//! codes (digit `2` → `=`, `1` → `-`, `0` → `x`). Unknown words fall back
//! to a closed switch over the bare letter count. Silent letters (the
//! aspiration marker `ھ` and the nasal `ں`) are removed before counting and
//! re-attached to the preceding syllable in the taqti rendering.
//!
//! Fused compounds that neither path can scan to a plausible length are
//! additionally split in two and scanned half by half; the Cartesian
//! products of the halves' codes join the word's alternatives.

use aruuz_lexicon::LexiconStore;

use crate::catalogue::Catalogue;
use crate::normalize::{
    is_diacritic, is_vowel_or_heh, ALIF, ALIF_MADD, BARI_YEH, DO_CHASHMI_HEH, HAMZA_ABOVE,
    NOON_GHUNNA, VAO, YEH,
};
use crate::word::{Line, Word};

/// Assigns candidate codes to every word of the line.
pub fn assign_line(line: &mut Line, lexicon: Option<&dyn LexiconStore>, catalogue: &Catalogue) {
    for word in &mut line.words {
        assign_codes(word, lexicon, catalogue);
    }
}

/// Populates one word's `codes`, `taqti`, and `muarrab` lists.
pub fn assign_codes(word: &mut Word, lexicon: Option<&dyn LexiconStore>, catalogue: &Catalogue) {
    let mut had_lookup = false;

    match lexicon {
        Some(store) => {
            for hit in store.lookup(&word.surface, &word.raw) {
                match convert_scan(&hit.scan) {
                    Some((code, taqti)) => {
                        had_lookup = true;
                        if word.push_code(code, taqti, hit.scan.clone()) {
                            word.note_base(format!("{}: {}", hit.source.label(), hit.scan));
                        }
                        word.is_varied |= hit.is_varied;
                    }
                    None => {
                        log::warn!("unparseable lexicon scan for {}: {}", word.surface, hit.scan)
                    }
                }
            }
        }
        None => word.note_base("lexicon unavailable, heuristics only"),
    }

    if word.codes.is_empty() {
        for (code, taqti, rule) in heuristic_codes(&word.surface, &word.raw) {
            if word.push_code(code, taqti, String::new()) {
                word.note_base(rule);
            }
        }
    }

    let plausible = word
        .codes
        .iter()
        .any(|c| c.len() <= catalogue.max_symbol_len());
    let long_unknown = !had_lookup && word.surface.chars().count() >= 6;
    if !plausible || long_unknown {
        compound_codes(word, lexicon);
    }
}

/// Converts a lexicon scan to `(code, taqti)`. Every chunk is syllable text
/// followed by a weight digit.
pub fn convert_scan(scan: &str) -> Option<(String, String)> {
    let mut code = String::new();
    let mut taqti: Vec<&str> = Vec::new();

    for chunk in scan.split_whitespace() {
        let digit = chunk.chars().last()?;
        let text = &chunk[..chunk.len() - digit.len_utf8()];
        if text.is_empty() {
            return None;
        }
        code.push(match digit {
            '2' => '=',
            '1' => '-',
            '0' => 'x',
            _ => return None,
        });
        taqti.push(text);
    }

    if code.is_empty() {
        return None;
    }
    Some((code, taqti.join(" ")))
}

/// Length-indexed heuristic scansion of an unknown word.
///
/// `raw` is the muarrab form with any author-supplied diacritics; the
/// length-3 rule reads vowel marks off it. Returns `(code, taqti, rule
/// label)` triples; the current rules yield a single reading per word,
/// flexible endings included in the code itself.
pub fn heuristic_codes(surface: &str, raw: &str) -> Vec<(String, String, String)> {
    let surf: Vec<char> = surface.chars().collect();

    // Silent letters drop out of the length count but stay in the taqti.
    let mut bare: Vec<char> = Vec::with_capacity(surf.len());
    let mut origin: Vec<usize> = Vec::with_capacity(surf.len());
    for (i, &c) in surf.iter().enumerate() {
        if c != DO_CHASHMI_HEH && c != NOON_GHUNNA {
            bare.push(c);
            origin.push(i);
        }
    }

    if bare.is_empty() {
        return vec![(
            "-".to_string(),
            surface.to_string(),
            "heuristic-len-1".to_string(),
        )];
    }

    let marked = vowel_marks(raw, bare.len());
    let (code, spans) = scan_bare(&bare, &marked);
    let taqti = render_spans(&surf, &bare, &origin, &spans);
    let rule = format!("heuristic-len-{}", bare.len());
    vec![(code, taqti, rule)]
}

/// Which bare letters carry a vowel mark in the muarrab form. The raw text
/// is the surface plus combining marks, so the two align letter by letter;
/// the orthographic hamza does not count as a vowel mark.
fn vowel_marks(raw: &str, bare_len: usize) -> Vec<bool> {
    let mut marked = vec![false; bare_len];
    let mut bare_index: Option<usize> = None;
    let mut next_bare = 0;

    for c in raw.chars() {
        if is_diacritic(c) {
            if c == HAMZA_ABOVE {
                continue;
            }
            if let Some(i) = bare_index {
                marked[i] = true;
            }
        } else if c == DO_CHASHMI_HEH || c == NOON_GHUNNA {
            bare_index = None;
        } else if next_bare < bare_len {
            bare_index = Some(next_bare);
            next_bare += 1;
        }
    }
    marked
}

/// Scans a bare-letter word, returning the code and syllable spans over the
/// bare indices.
fn scan_bare(bare: &[char], marked: &[bool]) -> (String, Vec<(usize, usize)>) {
    match bare.len() {
        1 => {
            let code = if bare[0] == ALIF_MADD { "=" } else { "-" };
            (code.to_string(), vec![(0, 1)])
        }
        2 => pair_code(bare, 0, true),
        3 => triple_code(bare, marked, 0),
        4 => {
            let (mut code, mut spans) = pair_code(bare, 0, false);
            let (tail_code, tail_spans) = pair_code(&bare[2..], 2, true);
            code.push_str(&tail_code);
            spans.extend(tail_spans);
            (code, spans)
        }
        _ => {
            // Peel leading pairs; stop at three letters so no lone
            // consonant is stranded at the end.
            let mut code = String::new();
            let mut spans = Vec::new();
            let mut start = 0;
            while bare.len() - start > 3 {
                let (c, s) = pair_code(&bare[start..start + 2], start, false);
                code.push_str(&c);
                spans.extend(s);
                start += 2;
            }
            let rest = &bare[start..];
            let (c, s) = if rest.len() == 2 {
                pair_code(rest, start, true)
            } else {
                triple_code(rest, &marked[start..], start)
            };
            code.push_str(&c);
            spans.extend(s);
            (code, spans)
        }
    }
}

/// The length-2 rule. Word-final vowels and heh are flexible; inside a
/// longer word the pair is plainly long.
fn pair_code(pair: &[char], offset: usize, is_final: bool) -> (String, Vec<(usize, usize)>) {
    if pair[0] == ALIF_MADD {
        return (
            "=-".to_string(),
            vec![(offset, offset + 1), (offset + 1, offset + 2)],
        );
    }
    let code = if is_final && is_vowel_or_heh(pair[1]) {
        "x"
    } else {
        "="
    };
    (code.to_string(), vec![(offset, offset + 2)])
}

/// The length-3 rule. Only applied to word-final pieces.
fn triple_code(piece: &[char], marked: &[bool], offset: usize) -> (String, Vec<(usize, usize)>) {
    // A vowel mark on the middle letter splits the word there: the first
    // letter is an open short syllable, the rest a closed long one.
    if marked.get(1).copied().unwrap_or(false) {
        return (
            "-=".to_string(),
            vec![(offset, offset + 1), (offset + 1, offset + 3)],
        );
    }
    if is_vowel_or_heh(piece[2]) {
        return (
            "=x".to_string(),
            vec![(offset, offset + 2), (offset + 2, offset + 3)],
        );
    }
    let second_is_vowel = matches!(piece[1], c if c == ALIF || c == ALIF_MADD || c == YEH || c == BARI_YEH || c == VAO);
    let code = if second_is_vowel { "==" } else { "=-" };
    (
        code.to_string(),
        vec![(offset, offset + 2), (offset + 2, offset + 3)],
    )
}

/// Expands bare-index spans back over the original letters, so silent
/// letters reappear attached to the syllable they follow.
fn render_spans(
    surf: &[char],
    bare: &[char],
    origin: &[usize],
    spans: &[(usize, usize)],
) -> String {
    let mut parts: Vec<String> = Vec::with_capacity(spans.len());
    for &(s, e) in spans {
        let from = origin[s];
        let to = if e < bare.len() {
            origin[e]
        } else {
            surf.len()
        };
        parts.push(surf[from..to].iter().collect());
    }
    parts.join(" ")
}

/// Two-way compound split: every cut of the surface where at least one half
/// is lexicon-known contributes the product of the halves' codes.
fn compound_codes(word: &mut Word, lexicon: Option<&dyn LexiconStore>) {
    let chars: Vec<char> = word.surface.chars().collect();
    if chars.len() < 4 {
        return;
    }

    let mut additions: Vec<(String, String, String)> = Vec::new();
    for cut in 2..=chars.len() - 2 {
        let head: String = chars[..cut].iter().collect();
        let tail: String = chars[cut..].iter().collect();
        let (head_alts, head_known) = half_codes(&head, lexicon);
        let (tail_alts, tail_known) = half_codes(&tail, lexicon);
        if !head_known && !tail_known {
            continue;
        }
        for (hc, ht) in &head_alts {
            for (tc, tt) in &tail_alts {
                additions.push((
                    format!("{hc}{tc}"),
                    format!("{ht} {tt}"),
                    format!("compound: {head} + {tail}"),
                ));
            }
        }
    }

    for (code, taqti, note) in additions {
        if word.push_code(code, taqti, String::new()) {
            word.note_base(note);
        }
    }
}

fn half_codes(
    text: &str,
    lexicon: Option<&dyn LexiconStore>,
) -> (Vec<(String, String)>, bool) {
    if let Some(store) = lexicon {
        let hits = store.lookup(text, text);
        let converted: Vec<(String, String)> =
            hits.iter().filter_map(|h| convert_scan(&h.scan)).collect();
        if !converted.is_empty() {
            return (converted, true);
        }
    }
    let alts = heuristic_codes(text, text)
        .into_iter()
        .map(|(c, t, _)| (c, t))
        .collect();
    (alts, false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalogue::Catalogue;
    use aruuz_lexicon::runtime::LexiconIndex;

    fn cat() -> &'static Catalogue {
        Catalogue::get().unwrap()
    }

    #[test]
    fn scan_conversion_maps_digits() {
        let (code, taqti) = convert_scan("فر2 یا2 دی2").unwrap();
        assert_eq!(code, "===");
        assert_eq!(taqti, "فر یا دی");
        assert_eq!(convert_scan("ہے0").unwrap().0, "x");
        assert!(convert_scan("").is_none());
        assert!(convert_scan("فر3").is_none());
    }

    fn heuristic(surface: &str) -> Vec<(String, String, String)> {
        heuristic_codes(surface, surface)
    }

    #[test]
    fn single_letter_heuristics() {
        assert_eq!(heuristic("آ")[0].0, "=");
        assert_eq!(heuristic("و")[0].0, "-");
    }

    #[test]
    fn pair_heuristics_flex_on_final_vowels() {
        assert_eq!(heuristic("می")[0].0, "x");
        assert_eq!(heuristic("جب")[0].0, "=");
        assert_eq!(heuristic("آب")[0].0, "=-");
    }

    #[test]
    fn triple_heuristics() {
        // Closed second syllable.
        assert_eq!(heuristic("نقش")[0].0, "=-");
        // Long middle vowel.
        assert_eq!(heuristic("کام")[0].0, "==");
        // Final vowel flexes.
        assert_eq!(heuristic("بلا")[0].0, "=x");
    }

    #[test]
    fn triple_with_marked_middle_splits_at_the_mark() {
        // A vowel mark on the middle letter: قَلَم reads qa-lam.
        let (code, taqti, _) = heuristic_codes("قلم", "قَلَم").remove(0);
        assert_eq!(code, "-=");
        assert_eq!(taqti, "ق لم");
        // The mark only matters in the muarrab form.
        assert_eq!(heuristic("قلم")[0].0, "=-");
        // A mark on the first letter alone does not split.
        assert_eq!(heuristic_codes("نقش", "نَقش")[0].0, "=-");
    }

    #[test]
    fn four_letter_words_split_into_pairs() {
        let (code, taqti, rule) = heuristic("گلشن").remove(0);
        assert_eq!(code, "==");
        assert_eq!(taqti, "گل شن");
        assert_eq!(rule, "heuristic-len-4");
        // A non-final vowel pair stays long; the final pair flexes.
        assert_eq!(heuristic("دیکھی")[0].0, "=x");
    }

    #[test]
    fn long_words_peel_pairs_then_a_triple() {
        let (code, taqti, rule) = heuristic("فریادی").remove(0);
        assert_eq!(rule, "heuristic-len-6");
        assert_eq!(code, "==x");
        assert_eq!(taqti, "فر یا دی");
        // Five letters peel one pair and keep a triple.
        assert_eq!(heuristic("سرکار")[0].0, "===");
    }

    #[test]
    fn silent_letters_do_not_count_but_render() {
        // The aspiration marker rides along with its syllable.
        let (code, taqti, rule) = heuristic("تجھ").remove(0);
        assert_eq!(code, "=");
        assert_eq!(rule, "heuristic-len-2");
        assert_eq!(taqti, "تجھ");
        // Nasal ghunna likewise.
        assert_eq!(heuristic("میں")[0].0, "x");
    }

    #[test]
    fn lookup_wins_over_heuristics() {
        let store = LexiconIndex::new().unwrap();
        let mut word = Word::new("فریادی", "فریادی");
        assign_codes(&mut word, Some(&store), cat());
        assert_eq!(word.codes, vec!["===", "-=="]);
        assert!(word.is_varied);
        assert!(word.explain.base[0].starts_with("master:"));
    }

    #[test]
    fn unknown_words_get_heuristics_and_a_note() {
        let store = LexiconIndex::new().unwrap();
        let mut word = Word::new("گلشن", "گلشن");
        assign_codes(&mut word, Some(&store), cat());
        assert_eq!(word.codes, vec!["=="]);
        assert!(word.explain.base.iter().any(|n| n.contains("heuristic")));
    }

    #[test]
    fn missing_lexicon_is_recorded() {
        let mut word = Word::new("دل", "دل");
        assign_codes(&mut word, None, cat());
        assert!(!word.codes.is_empty());
        assert!(word
            .explain
            .base
            .iter()
            .any(|n| n.contains("lexicon unavailable")));
    }

    #[test]
    fn fused_compounds_gain_split_readings() {
        let store = LexiconIndex::new().unwrap();
        // Unknown fused token whose tail is the known word بہار.
        let mut word = Word::new("نوبہار", "نوبہار");
        assign_codes(&mut word, Some(&store), cat());
        assert!(word
            .explain
            .base
            .iter()
            .any(|n| n.starts_with("compound:")));
        assert!(word.codes.iter().any(|c| c == "x-=-"));
    }
}
