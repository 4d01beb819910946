//! Dominant meter election across the lines of a couplet.
//!
//! Every meter name seen in any line is scored by foot alignment: per line,
//! the best catalogue variant of that name is credited with the number of
//! its feet appearing, in order and without reuse, in the line's
//! best-matching result. The name with the highest total wins; ties go to
//! the name matching in more lines, then to catalogue order. Losing results
//! are kept, only the flag differs.

use crate::catalogue::Catalogue;
use crate::result::{LineResult, UNMATCHED};

/// Scores the couplet and sets `is_dominant` on the winning name's results.
pub fn resolve(groups: &mut [Vec<LineResult>], catalogue: &Catalogue) {
    let mut names: Vec<String> = Vec::new();
    for group in groups.iter() {
        for result in group {
            if result.meter_name != UNMATCHED && !names.contains(&result.meter_name) {
                names.push(result.meter_name.clone());
            }
        }
    }
    if names.is_empty() {
        return;
    }

    let mut winner: Option<(&str, usize, usize, usize)> = None;
    for name in &names {
        let mut total = 0;
        let mut lines_hit = 0;
        for group in groups.iter() {
            total += calculate_score(group, name, catalogue);
            if group.iter().any(|r| r.meter_name == *name) {
                lines_hit += 1;
            }
        }
        let first_index = catalogue
            .index_by_name(name)
            .first()
            .copied()
            .unwrap_or(usize::MAX);

        let better = match winner {
            None => true,
            Some((_, best_total, best_lines, best_index)) => {
                (total, lines_hit) > (best_total, best_lines)
                    || ((total, lines_hit) == (best_total, best_lines) && first_index < best_index)
            }
        };
        if better {
            winner = Some((name.as_str(), total, lines_hit, first_index));
        }
    }

    if let Some((winner_name, ..)) = winner {
        let winner_name = winner_name.to_string();
        for group in groups.iter_mut() {
            for result in group.iter_mut() {
                if result.meter_name == winner_name {
                    result.is_dominant = true;
                }
            }
        }
    }
}

/// Best foot-alignment count of any catalogue variant named `name` against
/// any of the line's results.
fn calculate_score(results: &[LineResult], name: &str, catalogue: &Catalogue) -> usize {
    catalogue
        .index_by_name(name)
        .iter()
        .map(|&i| {
            let candidate = feet_tokens(catalogue.feet(i));
            results
                .iter()
                .map(|r| aligned_feet(&candidate, &feet_tokens(&r.feet)))
                .max()
                .unwrap_or(0)
        })
        .max()
        .unwrap_or(0)
}

fn feet_tokens(feet: &str) -> Vec<&str> {
    feet.split_whitespace()
        .filter(|t| *t != "+" && *t != "~")
        .collect()
}

/// Length of the longest common subsequence: feet of `candidate` found in
/// `have` in order, each matched foot used once.
fn aligned_feet(candidate: &[&str], have: &[&str]) -> usize {
    let mut row = vec![0usize; have.len() + 1];
    for c in candidate {
        let mut prev_diag = 0;
        for (j, h) in have.iter().enumerate() {
            let cur = row[j + 1];
            row[j + 1] = if c == h {
                prev_diag + 1
            } else {
                row[j + 1].max(row[j])
            };
            prev_diag = cur;
        }
    }
    row[have.len()]
}
