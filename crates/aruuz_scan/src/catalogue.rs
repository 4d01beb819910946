//! The meter catalogue and template matching.
//!
//! Loaded once per process from the static tables in [`crate::meters`] and
//! shared read-only afterwards. Besides the name/template columns, every
//! entry precomputes:
//!
//! - the four **variant forms** tried during matching, modelling the
//!   classical zihāf/ʿillat end modifications:
//!   - v0: the template itself,
//!   - v1: the final caesura segment replaced by its marker-free form,
//!   - v2: the template with a trailing `-` appended,
//!   - v3: the template without its trailing symbol;
//! - the rukn rendering of each variant, derived from the stored
//!   segmentation by adjusting the final foot.
//!
//! [`is_match`]/[`is_match_at`] implement prefix compatibility between a
//! line's partial code and a template; [`is_exact`] is the final
//! whole-length check.

use std::sync::OnceLock;

use rustc_hash::FxHashMap;

use aruuz_base::code::{self, Weight, BOUNDARY, CAESURA};
use aruuz_base::{EngineError, Result};

use crate::meters::{FEET, METERS, SPECIAL_METERS};

/// One catalogue entry with its precomputed matching forms.
#[derive(Debug, Clone)]
pub struct Entry {
    /// Urdu display name of the bahr.
    pub name: &'static str,
    /// Weight template over `{=, -, x, +, ~}`.
    pub pattern: &'static str,
    /// Canonical rukn rendering of the template.
    pub feet: &'static str,
    /// Mora total for the specially matched meters, `None` otherwise.
    pub morae: Option<u32>,
    variants: [String; 4],
    variant_feet: [String; 4],
}

/// The immutable meter catalogue.
pub struct Catalogue {
    entries: Vec<Entry>,
    by_name: FxHashMap<&'static str, Vec<usize>>,
    min_symbols: usize,
    max_symbols: usize,
}

static CATALOGUE: OnceLock<Result<Catalogue>> = OnceLock::new();

impl Catalogue {
    /// The process-wide catalogue, built and self-checked on first use.
    pub fn get() -> Result<&'static Catalogue> {
        match CATALOGUE.get_or_init(Catalogue::build) {
            Ok(cat) => Ok(cat),
            Err(e) => Err(e.clone()),
        }
    }

    fn build() -> Result<Catalogue> {
        let foot_codes: FxHashMap<&str, &str> = FEET.iter().copied().collect();

        let mut entries = Vec::with_capacity(METERS.len());
        let mut by_name: FxHashMap<&'static str, Vec<usize>> = FxHashMap::default();
        let mut min_symbols = usize::MAX;
        let mut max_symbols = 0usize;

        for (i, &(name, pattern, feet)) in METERS.iter().enumerate() {
            if name.is_empty() {
                return Err(EngineError::new(format!("meter {i} has an empty name")));
            }
            if !code::is_pattern(pattern) {
                return Err(EngineError::new(format!(
                    "meter {i} ({name}) has an invalid template: {pattern}"
                )));
            }
            if pattern.contains(char::is_whitespace) {
                return Err(EngineError::new(format!(
                    "meter {i} ({name}) has whitespace in its template"
                )));
            }

            // The stored segmentation must concatenate back to the template.
            let mut rebuilt = String::new();
            for tok in feet.split_whitespace() {
                if tok == "+" {
                    rebuilt.push(CAESURA);
                } else if tok == "~" {
                    rebuilt.push(BOUNDARY);
                } else {
                    let tpl = foot_codes.get(tok).ok_or_else(|| {
                        EngineError::new(format!("meter {i} ({name}) names unknown foot {tok}"))
                    })?;
                    rebuilt.push_str(tpl);
                }
            }
            if rebuilt != pattern {
                return Err(EngineError::new(format!(
                    "meter {i} ({name}): feet {feet} do not tile template {pattern}"
                )));
            }

            let morae = if SPECIAL_METERS.contains(&name) {
                Some(code::min_morae(pattern))
            } else {
                None
            };

            let variants = make_variants(pattern);
            let variant_feet = [
                feet.to_string(),
                strip_final_segment_markers(feet),
                adjust_last_foot(feet, &foot_codes, FootAdjust::AppendShort),
                adjust_last_foot(feet, &foot_codes, FootAdjust::DropSymbol),
            ];

            let symbols = code::symbol_len(pattern);
            min_symbols = min_symbols.min(symbols);
            max_symbols = max_symbols.max(symbols);

            by_name.entry(name).or_default().push(i);
            entries.push(Entry {
                name,
                pattern,
                feet,
                morae,
                variants,
                variant_feet,
            });
        }

        if entries.is_empty() {
            return Err(EngineError::new("meter catalogue is empty"));
        }

        Ok(Catalogue {
            entries,
            by_name,
            min_symbols,
            max_symbols,
        })
    }

    /// Number of catalogue entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the catalogue holds no entries. Never the case after a
    /// successful load.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Display name of entry `i`.
    pub fn name(&self, i: usize) -> &'static str {
        self.entries[i].name
    }

    /// Template of entry `i`.
    pub fn pattern(&self, i: usize) -> &'static str {
        self.entries[i].pattern
    }

    /// Canonical rukn rendering of entry `i`.
    pub fn feet(&self, i: usize) -> &'static str {
        self.entries[i].feet
    }

    /// Mora total when entry `i` is matched by mora count.
    pub fn morae(&self, i: usize) -> Option<u32> {
        self.entries[i].morae
    }

    /// The four variant forms of entry `i`.
    pub fn variants(&self, i: usize) -> &[String; 4] {
        &self.entries[i].variants
    }

    /// Rukn rendering of variant `k` of entry `i`.
    pub fn variant_feet(&self, i: usize, k: usize) -> &str {
        &self.entries[i].variant_feet[k]
    }

    /// Every catalogue index carrying the given display name.
    pub fn index_by_name(&self, name: &str) -> &[usize] {
        self.by_name.get(name).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Smallest template length in weight symbols.
    pub fn min_symbol_len(&self) -> usize {
        self.min_symbols
    }

    /// Largest template length in weight symbols.
    pub fn max_symbol_len(&self) -> usize {
        self.max_symbols
    }

    /// Decomposes a weight string into named feet.
    ///
    /// Strings that are a variant of a catalogue entry render through that
    /// entry's stored segmentation (first entry in catalogue order wins).
    /// Anything else falls back to a greedy left-to-right tiling against
    /// the foot table, longest match first, ties by table order; `+` and
    /// `~` are passed through as separator tokens.
    pub fn afail(&self, s: &str) -> String {
        for entry in &self.entries {
            for (k, v) in entry.variants.iter().enumerate() {
                if v == s {
                    return entry.variant_feet[k].clone();
                }
            }
        }
        greedy_afail(s)
    }
}

enum FootAdjust {
    AppendShort,
    DropSymbol,
}

/// Computes the four matching variants of a template.
fn make_variants(pattern: &str) -> [String; 4] {
    let v1 = match pattern.rfind(CAESURA) {
        Some(pos) => {
            let (head, tail) = pattern.split_at(pos + CAESURA.len_utf8());
            let mut out = head.to_string();
            out.extend(tail.chars().filter(|&c| c != BOUNDARY));
            out
        }
        None => pattern.chars().filter(|&c| c != BOUNDARY).collect(),
    };

    let mut v2 = pattern.to_string();
    v2.push('-');

    let mut v3 = pattern.to_string();
    v3.pop();

    [pattern.to_string(), v1, v2, v3]
}

fn strip_final_segment_markers(feet: &str) -> String {
    let tokens: Vec<&str> = feet.split_whitespace().collect();
    let last_caesura = tokens.iter().rposition(|t| *t == "+");
    let cut = last_caesura.map(|p| p + 1).unwrap_or(0);
    let mut out: Vec<&str> = tokens[..cut].to_vec();
    out.extend(tokens[cut..].iter().filter(|t| **t != "~"));
    out.join(" ")
}

/// Rewrites the final foot of a rendering after an end modification. The
/// replacement name is the foot whose template equals the adjusted code,
/// preferring the name sharing the longest prefix with the original foot
/// (so `فعولن` extends to `فعولان`, not `مفاعیل`).
fn adjust_last_foot(feet: &str, foot_codes: &FxHashMap<&str, &str>, adjust: FootAdjust) -> String {
    let mut tokens: Vec<String> = feet.split_whitespace().map(str::to_string).collect();
    let last = match tokens.iter().rposition(|t| t != "+" && t != "~") {
        Some(p) => p,
        None => return feet.to_string(),
    };

    let base_name = tokens[last].clone();
    let base_code = match foot_codes.get(base_name.as_str()) {
        Some(c) => (*c).to_string(),
        None => return feet.to_string(),
    };

    let target = match adjust {
        FootAdjust::AppendShort => {
            let mut c = base_code;
            c.push('-');
            c
        }
        FootAdjust::DropSymbol => {
            let mut c = base_code;
            c.pop();
            c
        }
    };

    if target.is_empty() {
        tokens.remove(last);
        return tokens.join(" ");
    }

    match best_foot_name(&target, &base_name) {
        Some(name) => tokens[last] = name.to_string(),
        None => match adjust {
            // No named foot carries the extended code; keep the base foot
            // and show the overhang as its own unit.
            FootAdjust::AppendShort => tokens.insert(last + 1, "فَع".to_string()),
            FootAdjust::DropSymbol => tokens[last] = greedy_afail(&target),
        },
    }

    tokens.join(" ")
}

fn best_foot_name(target_code: &str, base_name: &str) -> Option<&'static str> {
    let mut best: Option<(&'static str, usize)> = None;
    for &(name, tpl) in FEET {
        if tpl != target_code {
            continue;
        }
        let lcp = name
            .chars()
            .zip(base_name.chars())
            .take_while(|(a, b)| a == b)
            .count();
        if best.map(|(_, b)| lcp > b).unwrap_or(true) {
            best = Some((name, lcp));
        }
    }
    best.map(|(name, _)| name)
}

/// Greedy foot tiling for strings outside the catalogue.
fn greedy_afail(s: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    let mut out: Vec<String> = Vec::new();
    let mut pos = 0;

    while pos < chars.len() {
        let c = chars[pos];
        if c == CAESURA || c == BOUNDARY {
            out.push(c.to_string());
            pos += 1;
            continue;
        }
        let rest: String = chars[pos..]
            .iter()
            .take_while(|&&c| c != CAESURA && c != BOUNDARY)
            .collect();
        let mut chosen: Option<(&str, usize)> = None;
        for &(name, tpl) in FEET {
            let len = tpl.chars().count();
            if rest.starts_with(tpl) && chosen.map(|(_, l)| len > l).unwrap_or(true) {
                chosen = Some((name, len));
            }
        }
        match chosen {
            Some((name, len)) => {
                out.push(name.to_string());
                pos += len;
            }
            None => {
                // Unreachable with the shipped foot table (single symbols
                // are feet), but stay total on arbitrary input.
                out.push(chars[pos].to_string());
                pos += 1;
            }
        }
    }

    out.join(" ")
}

/// Prefix compatibility between a partial line code and a template, with
/// every position treated as a word boundary.
pub fn is_match(partial: &str, pattern: &str) -> bool {
    match_impl(partial, None, pattern, false)
}

/// Prefix compatibility with explicit word-contribution boundaries. A `+`
/// or `~` in the template is skipped for symbol comparison but must land
/// on one of `boundaries` (or at the end of the partial).
pub fn is_match_at(partial: &str, boundaries: &[usize], pattern: &str) -> bool {
    match_impl(partial, Some(boundaries), pattern, false)
}

/// Whole-template equality: the partial must cover every template symbol,
/// with `x` substituting at symbol level but never at length level.
pub fn is_exact(partial: &str, boundaries: &[usize], pattern: &str) -> bool {
    match_impl(partial, Some(boundaries), pattern, true)
}

fn match_impl(partial: &str, boundaries: Option<&[usize]>, pattern: &str, exact: bool) -> bool {
    let symbols: Vec<Weight> = match partial.chars().map(Weight::from_symbol).collect() {
        Some(v) => v,
        None => return false,
    };
    let mut consumed = 0usize;

    for pc in pattern.chars() {
        if pc == CAESURA || pc == BOUNDARY {
            if consumed < symbols.len() {
                if let Some(bounds) = boundaries {
                    if !bounds.contains(&consumed) {
                        return false;
                    }
                }
            }
            continue;
        }
        let pw = match Weight::from_symbol(pc) {
            Some(w) => w,
            None => return false,
        };
        if consumed == symbols.len() {
            // The partial is a proper prefix of the template.
            return !exact;
        }
        if !symbols[consumed].matches(pw) {
            return false;
        }
        consumed += 1;
    }

    consumed == symbols.len()
}
