//! The per-line code tree: building and pruning the space of scansions.
//!
//! The tree encodes the Cartesian product of per-word alternatives: every
//! node at depth `d` chooses one element of `codes ∪ graft_codes` for the
//! `d`-th scansion-relevant word. Nodes live in a flat arena (records with
//! parent indices), created during the depth-first walk and discarded with
//! the arena when the line is done.
//!
//! Pruning happens in lock-step with the meter catalogue: each branch
//! carries the set of catalogue indices whose variant templates are still
//! prefix-compatible with the branch's partial code, and dies when that set
//! empties. The specially matched meters (Hindi and Zamzama families) stay
//! alive while the partial's achievable mora range can still reach their
//! total, and accept when the final range covers it exactly.
//!
//! A configurable node budget bounds pathological lines; on overrun the
//! paths found so far are returned flagged partial.

use aruuz_base::code;

use crate::catalogue::{self, Catalogue};
use crate::word::Line;

/// Default per-line node budget.
pub const DEFAULT_NODE_BUDGET: usize = 100_000;

/// One surviving root-to-leaf scansion.
#[derive(Debug, Clone)]
pub struct ScanPath {
    /// `(word index, choice index)` per scansion-relevant word, in order.
    pub choices: Vec<(usize, usize)>,
    /// Concatenated weight code of the whole line.
    pub code: String,
    /// Symbol offsets of word-contribution boundaries, starting at 0.
    pub boundaries: Vec<usize>,
    /// Catalogue indices that survived pruning and the final length check.
    pub meters: Vec<usize>,
}

/// Everything the traversal produced for one line.
#[derive(Debug, Default)]
pub struct ScanOutcome {
    /// Surviving scansions in deterministic traversal order.
    pub paths: Vec<ScanPath>,
    /// True when the node budget cut the walk short.
    pub partial: bool,
    /// Arena size at the end of the walk.
    pub nodes: usize,
}

/// Arena node record. The synthetic root carries no word or choice.
struct Node {
    parent: usize,
    word: usize,
    choice: usize,
}

struct Frame {
    node: usize,
    depth: usize,
    code: String,
    boundaries: Vec<usize>,
    alive: Vec<usize>,
}

/// Walks the line's alternative space against the catalogue.
pub fn scan_line(line: &Line, catalogue: &Catalogue, budget: usize) -> ScanOutcome {
    let order = line.scannable();
    let mut outcome = ScanOutcome::default();
    if order.is_empty() {
        return outcome;
    }

    let mut nodes: Vec<Node> = vec![Node {
        parent: usize::MAX,
        word: usize::MAX,
        choice: 0,
    }];

    let mut stack = vec![Frame {
        node: 0,
        depth: 0,
        code: String::new(),
        boundaries: vec![0],
        alive: (0..catalogue.len()).collect(),
    }];

    'walk: while let Some(frame) = stack.pop() {
        let word_index = order[frame.depth];
        let word = &line.words[word_index];
        let is_last = frame.depth + 1 == order.len();

        // Children are pushed in reverse so the first alternative is
        // explored first; traversal order stays deterministic.
        for choice in (0..word.choice_count()).rev() {
            if nodes.len() >= budget {
                log::debug!(
                    "node budget of {budget} exhausted on line: {}",
                    line.original
                );
                outcome.partial = true;
                break 'walk;
            }

            let (choice_code, _) = word.choice(choice);
            nodes.push(Node {
                parent: frame.node,
                word: word_index,
                choice,
            });
            let node = nodes.len() - 1;

            let mut partial_code = frame.code.clone();
            partial_code.push_str(choice_code);
            let mut boundaries = frame.boundaries.clone();
            boundaries.push(partial_code.len());

            let alive: Vec<usize> = frame
                .alive
                .iter()
                .copied()
                .filter(|&m| meter_allows(catalogue, m, &partial_code, &boundaries, is_last))
                .collect();
            if alive.is_empty() {
                continue;
            }

            if is_last {
                let mut choices = Vec::with_capacity(order.len());
                let mut n = node;
                while n != 0 {
                    choices.push((nodes[n].word, nodes[n].choice));
                    n = nodes[n].parent;
                }
                choices.reverse();
                outcome.paths.push(ScanPath {
                    choices,
                    code: partial_code,
                    boundaries,
                    meters: alive,
                });
            } else {
                stack.push(Frame {
                    node,
                    depth: frame.depth + 1,
                    code: partial_code,
                    boundaries,
                    alive,
                });
            }
        }
    }

    outcome.nodes = nodes.len();
    outcome
}

fn meter_allows(
    catalogue: &Catalogue,
    meter: usize,
    partial: &str,
    boundaries: &[usize],
    is_last: bool,
) -> bool {
    if let Some(total) = catalogue.morae(meter) {
        let min = code::min_morae(partial);
        if is_last {
            min <= total && total <= code::max_morae(partial)
        } else {
            min <= total
        }
    } else if is_last {
        catalogue
            .variants(meter)
            .iter()
            .any(|v| catalogue::is_exact(partial, boundaries, v))
    } else {
        catalogue
            .variants(meter)
            .iter()
            .any(|v| catalogue::is_match_at(partial, boundaries, v))
    }
}
