//! Text normalization for Urdu verse.
//!
//! Cleaning happens in three layers:
//!
//! 1. [`clean_line`] strips punctuation and invisible control characters
//!    and collapses separators, leaving only letters, diacritics, and
//!    single spaces.
//! 2. [`tokenize`] splits the cleaned line into word tokens, including the
//!    nasal split that separates fused compounds like `کیونکہ`.
//! 3. [`clean_word`] folds orthographic variants deterministically, and
//!    [`remove_diacritics`] derives the bare surface used for scansion.
//!
//! The raw (diacritic-bearing) form is kept alongside the surface: lexicon
//! lookup and the izafat predicate both need it.

/// Urdu/Arabic letters the normalizer cares about.
pub const ALIF: char = 'ا';
/// Alif with madd, the long initial vowel.
pub const ALIF_MADD: char = 'آ';
/// Urdu yeh.
pub const YEH: char = 'ی';
/// Urdu bari yeh.
pub const BARI_YEH: char = 'ے';
/// Vao.
pub const VAO: char = 'و';
/// Gol heh.
pub const HEH: char = 'ہ';
/// Do-chashmi heh, the aspiration marker.
pub const DO_CHASHMI_HEH: char = 'ھ';
/// Noon.
pub const NOON: char = 'ن';
/// Noon ghunna, the silent nasal.
pub const NOON_GHUNNA: char = 'ں';
/// Yeh with hamza above.
pub const YEH_HAMZA: char = 'ئ';
/// Gol heh with hamza above (single code point).
pub const HEH_HAMZA: char = 'ۂ';
/// Combining hamza above.
pub const HAMZA_ABOVE: char = '\u{0654}';
/// Combining madd above.
pub const MADD_ABOVE: char = '\u{0653}';
/// Zer (kasra), also the izafat marker.
pub const ZER: char = '\u{0650}';
/// Urdu full stop.
pub const URDU_FULL_STOP: char = '۔';
/// Urdu comma.
pub const URDU_COMMA: char = '،';

/// The canonical vowel-or-heh set used by the flexible-ending rules.
pub const VOWELS_AND_HEH: [char; 5] = [ALIF, YEH, BARI_YEH, VAO, HEH];

/// True for the combining marks removed before scansion: tanween, the short
/// vowels, jazm and shadda (`U+064B..U+0652`), hamza above, subscript marks,
/// and the dagger alif.
pub fn is_diacritic(c: char) -> bool {
    ('\u{064B}'..='\u{0652}').contains(&c)
        || c == HAMZA_ABOVE
        || c == '\u{0656}'
        || c == '\u{0658}'
        || c == '\u{0670}'
}

fn is_zero_width(c: char) -> bool {
    ('\u{200B}'..='\u{200F}').contains(&c)
        || ('\u{202A}'..='\u{202E}').contains(&c)
        || ('\u{2060}'..='\u{2064}').contains(&c)
        || c == '\u{FEFF}'
        || c == '\u{061C}'
}

fn is_stripped_punct(c: char) -> bool {
    matches!(
        c,
        ',' | '"' | '*' | '\'' | '-' | '?' | '!' | ';' | ':' | '(' | ')' | '[' | ']'
    ) || c == URDU_FULL_STOP
        || c == '؟'
        || c == '؛'
}

/// True when `c` is in the vowel-or-heh set.
pub fn is_vowel_or_heh(c: char) -> bool {
    VOWELS_AND_HEH.contains(&c)
}

/// True when the word's final letter is a consonant for the purposes of
/// the article, grafting, and izafat predicates. Vowels, both alifs, and
/// the nasal ghunna do not count.
pub fn ends_in_consonant(word: &str) -> bool {
    match word.chars().last() {
        Some(c) => !is_vowel_or_heh(c) && c != ALIF_MADD && c != NOON_GHUNNA && !is_diacritic(c),
        None => false,
    }
}

/// Strips punctuation and invisible controls, turns Urdu commas into plain
/// separators, and collapses separator runs. Idempotent.
pub fn clean_line(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut pending_space = false;

    for c in text.chars() {
        if is_zero_width(c) || is_stripped_punct(c) {
            continue;
        }
        if c.is_whitespace() || c == URDU_COMMA {
            pending_space = true;
            continue;
        }
        if pending_space && !out.is_empty() {
            out.push(' ');
        }
        pending_space = false;
        out.push(c);
    }

    out
}

/// Splits a cleaned line into tokens.
///
/// Besides the separator split, any token carrying a nasal letter directly
/// before a final `کہ` cluster is cut at that boundary, so fused compounds
/// like `کیونکہ` become the two words they are read as (`کیوں کہ`).
pub fn tokenize(cleaned: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    for tok in cleaned.split_whitespace() {
        match split_nasal_compound(tok) {
            Some((head, tail)) => {
                tokens.push(head);
                tokens.push(tail);
            }
            None => tokens.push(tok.to_string()),
        }
    }
    tokens
}

fn split_nasal_compound(tok: &str) -> Option<(String, String)> {
    let chars: Vec<char> = tok.chars().collect();
    if chars.len() < 4 {
        return None;
    }
    let tail_start = chars.len() - 2;
    if chars[tail_start] != 'ک' || chars[tail_start + 1] != HEH {
        return None;
    }
    let nasal = chars[tail_start - 1];
    if nasal != NOON && nasal != NOON_GHUNNA {
        return None;
    }
    // The written noon is read as ghunna once the cluster is detached.
    let mut head: String = chars[..tail_start - 1].iter().collect();
    head.push(NOON_GHUNNA);
    Some((head, "کہ".to_string()))
}

/// Folds orthographic variants into their canonical spellings. Diacritics
/// are kept; [`remove_diacritics`] strips them afterwards.
pub fn clean_word(tok: &str) -> String {
    let mut out: Vec<char> = Vec::with_capacity(tok.chars().count());

    for c in tok.chars() {
        match c {
            // Alif followed by a madd sign collapses into madd-alif.
            MADD_ABOVE if out.last() == Some(&ALIF) => {
                out.pop();
                out.push(ALIF_MADD);
            }
            // Heh-with-hamza decomposes into heh plus combining hamza.
            HEH_HAMZA => {
                out.push(HEH);
                out.push(HAMZA_ABOVE);
            }
            _ => out.push(c),
        }
    }

    // A trailing hamza-on-yeh is written yeh plus combining hamza.
    if out.last() == Some(&YEH_HAMZA) {
        out.pop();
        out.push(YEH);
        out.push(HAMZA_ABOVE);
    }

    out.into_iter().collect()
}

/// Removes the combining marks, leaving the bare letters used for scansion.
pub fn remove_diacritics(word: &str) -> String {
    word.chars().filter(|&c| !is_diacritic(c)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_line_strips_punctuation_and_collapses_spaces() {
        assert_eq!(clean_line("دل،  غم!"), "دل غم");
        assert_eq!(clean_line("؟ \"نقش\" ۔"), "نقش");
        assert_eq!(clean_line(""), "");
    }

    #[test]
    fn clean_line_removes_zero_width_characters() {
        assert_eq!(clean_line("دل\u{200C}غم"), "دلغم");
        assert_eq!(clean_line("\u{FEFF}دل"), "دل");
    }

    #[test]
    fn clean_line_is_idempotent() {
        for input in ["نقش، فریادی ۔ ہے!", "  a  b  ", "دل\u{200B} و جاں"] {
            let once = clean_line(input);
            assert_eq!(clean_line(&once), once);
        }
    }

    #[test]
    fn tokenize_splits_on_spaces() {
        assert_eq!(tokenize("دل غم"), vec!["دل", "غم"]);
        assert!(tokenize("").is_empty());
    }

    #[test]
    fn tokenize_cuts_fused_nasal_compounds() {
        assert_eq!(tokenize("کیونکہ"), vec!["کیوں", "کہ"]);
        assert_eq!(tokenize("چونکہ"), vec!["چوں", "کہ"]);
        // A bare کہ or a short token stays whole.
        assert_eq!(tokenize("کہ"), vec!["کہ"]);
    }

    #[test]
    fn clean_word_folds_variants() {
        // Trailing hamza-on-yeh becomes yeh + combining hamza.
        assert_eq!(clean_word("شوخئ"), format!("شوخ{}{}", YEH, HAMZA_ABOVE));
        // Alif + madd sign becomes madd-alif.
        assert_eq!(clean_word(&format!("ا{}مد", MADD_ABOVE)), "آمد");
        // Heh-with-hamza decomposes.
        assert_eq!(clean_word("ۂ"), format!("{}{}", HEH, HAMZA_ABOVE));
    }

    #[test]
    fn remove_diacritics_leaves_bare_letters() {
        assert_eq!(remove_diacritics("شوخیِ"), "شوخی");
        assert_eq!(remove_diacritics(&format!("ی{}", HAMZA_ABOVE)), "ی");
    }

    #[test]
    fn consonant_finality() {
        assert!(ends_in_consonant("عبد"));
        assert!(ends_in_consonant("نقش"));
        assert!(!ends_in_consonant("کی"));
        assert!(!ends_in_consonant("جاں"));
        assert!(!ends_in_consonant("آ"));
        assert!(!ends_in_consonant(""));
    }
}
