//! Character-level gestalt pattern matching (Ratcliff/Obershelp).
//!
//! The longest common contiguous block of two ranges is located, then the
//! ranges to its left and to its right are matched the same way. The ratio
//! is `2 * M / (len(a) + len(b))` where `M` is the total size of all blocks.
//!
//! Work is bounded by a step budget threaded through the whole comparison.
//! A [`StepBudget`] can also be shared across many comparisons to bound
//! their total cost. Ranges are processed from an explicit stack, so input
//! length never translates into call-stack depth.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::config::DetectorConfig;

/// A run of `size` characters equal in both inputs, starting at `a` in the
/// first and `b` in the second. Offsets count chars of the lowercased input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MatchingBlock {
    pub a: usize,
    pub b: usize,
    pub size: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SequenceOutcome {
    pub ratio: f64,
    pub matched_chars: usize,
    pub total_chars: usize,
    /// Sorted by position. Only complete when `budget_exhausted` is false.
    pub blocks: Vec<MatchingBlock>,
    pub budget_exhausted: bool,
    /// Steps this comparison took from its budget.
    pub steps_used: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SequenceMatcher {
    step_budget: u64,
}

impl Default for SequenceMatcher {
    fn default() -> Self {
        Self::from_config(&DetectorConfig::v0())
    }
}

/// Inner-loop steps available to one or more comparisons.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepBudget {
    limit: u64,
    remaining: u64,
}

impl StepBudget {
    pub fn new(limit: u64) -> Self {
        Self {
            limit,
            remaining: limit,
        }
    }

    pub fn limit(&self) -> u64 {
        self.limit
    }

    pub fn remaining(&self) -> u64 {
        self.remaining
    }

    pub fn used(&self) -> u64 {
        self.limit - self.remaining
    }

    pub fn is_spent(&self) -> bool {
        self.remaining == 0
    }

    pub(crate) fn spend(&mut self) -> bool {
        if self.remaining == 0 {
            return false;
        }
        self.remaining -= 1;
        true
    }
}

struct LongestMatch {
    i: usize,
    j: usize,
    size: usize,
    complete: bool,
}

impl SequenceMatcher {
    pub fn new(step_budget: u64) -> Self {
        Self { step_budget }
    }

    pub fn from_config(config: &DetectorConfig) -> Self {
        Self::new(config.sequence_step_budget)
    }

    pub fn step_budget(&self) -> u64 {
        self.step_budget
    }

    pub fn ratio(&self, a: &str, b: &str) -> f64 {
        self.compare(a, b).ratio
    }

    /// Compare with a fresh budget of `step_budget` steps.
    pub fn compare(&self, a: &str, b: &str) -> SequenceOutcome {
        let mut budget = StepBudget::new(self.step_budget);
        self.compare_within(a, b, &mut budget)
    }

    /// Compare drawing steps from a caller-owned budget, so that a series of
    /// comparisons is bounded as a whole. The matcher's own `step_budget`
    /// is not consulted.
    pub fn compare_within(&self, a: &str, b: &str, budget: &mut StepBudget) -> SequenceOutcome {
        let a: Vec<char> = a.to_lowercase().chars().collect();
        let b: Vec<char> = b.to_lowercase().chars().collect();
        let total_chars = a.len() + b.len();

        if total_chars == 0 {
            return SequenceOutcome {
                ratio: 0.0,
                matched_chars: 0,
                total_chars,
                blocks: Vec::new(),
                budget_exhausted: false,
                steps_used: 0,
            };
        }

        if a == b {
            return SequenceOutcome {
                ratio: 1.0,
                matched_chars: a.len(),
                total_chars,
                blocks: vec![MatchingBlock {
                    a: 0,
                    b: 0,
                    size: a.len(),
                }],
                budget_exhausted: false,
                steps_used: 0,
            };
        }

        // Always match in one canonical orientation so that tie-breaks, and
        // therefore the ratio, do not depend on argument order.
        let swapped = (b.len(), &b) < (a.len(), &a);
        let (x, y) = if swapped { (&b, &a) } else { (&a, &b) };

        let used_before = budget.used();
        let (mut blocks, exhausted) = matching_blocks(x, y, budget);

        if swapped {
            for block in &mut blocks {
                std::mem::swap(&mut block.a, &mut block.b);
            }
        }
        blocks.sort();

        let matched_chars: usize = blocks.iter().map(|blk| blk.size).sum();
        let ratio = (2.0 * matched_chars as f64 / total_chars as f64).clamp(0.0, 1.0);

        if exhausted {
            tracing::warn!(
                budget = budget.limit(),
                matched = matched_chars,
                total = total_chars,
                "sequence comparison step budget exhausted"
            );
        }

        SequenceOutcome {
            ratio,
            matched_chars,
            total_chars,
            blocks,
            budget_exhausted: exhausted,
            steps_used: budget.used() - used_before,
        }
    }
}

/// Ratio with the default step budget.
pub fn sequence_ratio(a: &str, b: &str) -> f64 {
    SequenceMatcher::default().ratio(a, b)
}

fn matching_blocks(a: &[char], b: &[char], budget: &mut StepBudget) -> (Vec<MatchingBlock>, bool) {
    // Positions of every char of `b`, ascending.
    let mut b2j: HashMap<char, Vec<usize>> = HashMap::new();
    for (j, c) in b.iter().enumerate() {
        b2j.entry(*c).or_default().push(j);
    }

    let mut blocks = Vec::new();
    let mut stack = vec![(0, a.len(), 0, b.len())];

    while let Some((alo, ahi, blo, bhi)) = stack.pop() {
        let found = longest_match(a, &b2j, alo, ahi, blo, bhi, budget);

        if found.size > 0 {
            blocks.push(MatchingBlock {
                a: found.i,
                b: found.j,
                size: found.size,
            });
        }

        if !found.complete {
            return (blocks, true);
        }
        if found.size == 0 {
            continue;
        }

        // Right pushed first so the left remainder is processed first.
        let (i, j, k) = (found.i, found.j, found.size);
        if i + k < ahi && j + k < bhi {
            stack.push((i + k, ahi, j + k, bhi));
        }
        if alo < i && blo < j {
            stack.push((alo, i, blo, j));
        }
    }

    (blocks, false)
}

/// Longest block in `a[alo..ahi]` x `b[blo..bhi]`.
///
/// Among equally long blocks the one starting earliest in `a` wins, then the
/// one starting earliest in `b`. When the budget runs out mid-scan the best
/// block seen so far is returned with `complete == false`.
fn longest_match(
    a: &[char],
    b2j: &HashMap<char, Vec<usize>>,
    alo: usize,
    ahi: usize,
    blo: usize,
    bhi: usize,
    budget: &mut StepBudget,
) -> LongestMatch {
    let mut best = LongestMatch {
        i: alo,
        j: blo,
        size: 0,
        complete: true,
    };

    // j2len[j] = length of the block ending at a[i - 1], b[j]
    let mut j2len: HashMap<usize, usize> = HashMap::new();

    for i in alo..ahi {
        if !budget.spend() {
            best.complete = false;
            return best;
        }

        let mut next_j2len = HashMap::new();
        if let Some(positions) = b2j.get(&a[i]) {
            let start = positions.partition_point(|&j| j < blo);
            for &j in &positions[start..] {
                if j >= bhi {
                    break;
                }
                if !budget.spend() {
                    best.complete = false;
                    return best;
                }

                let k = j
                    .checked_sub(1)
                    .and_then(|prev| j2len.get(&prev))
                    .copied()
                    .unwrap_or(0)
                    + 1;
                next_j2len.insert(j, k);

                if k > best.size {
                    best.i = i + 1 - k;
                    best.j = j + 1 - k;
                    best.size = k;
                }
            }
        }
        j2len = next_j2len;
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blocks(a: &str, b: &str) -> Vec<(usize, usize, usize)> {
        SequenceMatcher::default()
            .compare(a, b)
            .blocks
            .into_iter()
            .map(|blk| (blk.a, blk.b, blk.size))
            .collect()
    }

    #[test]
    fn classic_gestalt_example() {
        // "abcd" vs "bcde": one block "bcd"
        assert_eq!(blocks("abcd", "bcde"), vec![(1, 0, 3)]);
        let ratio = sequence_ratio("abcd", "bcde");
        assert!((ratio - 0.75).abs() < 1e-12);
    }

    #[test]
    fn recursion_collects_left_and_right_blocks() {
        // longest block "cd" splits into "ab"/"a" on the left and "ef"/"f" on the right
        let found = blocks("abxcdyef", "azcdwf");
        assert_eq!(found, vec![(0, 0, 1), (3, 2, 2), (7, 5, 1)]);
    }

    #[test]
    fn leftmost_tie_break() {
        // two single-char candidates: prefer earliest in the first input
        assert_eq!(blocks("ab", "ba"), vec![(0, 1, 1)]);
    }

    #[test]
    fn case_insensitive() {
        assert_eq!(sequence_ratio("HeLLo", "hello"), 1.0);
    }

    #[test]
    fn both_empty_is_zero() {
        assert_eq!(sequence_ratio("", ""), 0.0);
        assert_eq!(sequence_ratio("abc", ""), 0.0);
    }

    #[test]
    fn exhausted_budget_returns_partial_lower_bound() {
        let a = "ab".repeat(200);
        let b = "ba".repeat(200);
        let full = SequenceMatcher::default().compare(&a, &b);
        let tiny = SequenceMatcher::new(50).compare(&a, &b);

        assert!(!full.budget_exhausted);
        assert!(tiny.budget_exhausted);
        assert!(tiny.steps_used <= 50);
        assert!(tiny.ratio <= full.ratio);
        assert!((0.0..=1.0).contains(&tiny.ratio));
    }

    #[test]
    fn shared_budget_spans_comparisons() {
        let matcher = SequenceMatcher::default();
        let mut budget = StepBudget::new(30);

        let first = matcher.compare_within("abcdefgh", "hgfedcba", &mut budget);
        assert!(!first.budget_exhausted);
        assert_eq!(first.steps_used, budget.used());

        let second = matcher.compare_within("abcdefgh", "hgfedcba", &mut budget);
        assert!(second.budget_exhausted);
        assert!(budget.is_spent());
        assert_eq!(first.steps_used + second.steps_used, 30);
    }

    #[test]
    fn identical_input_skips_budget() {
        let text = "repeat ".repeat(1000);
        let outcome = SequenceMatcher::new(1).compare(&text, &text);
        assert_eq!(outcome.ratio, 1.0);
        assert!(!outcome.budget_exhausted);
    }
}
