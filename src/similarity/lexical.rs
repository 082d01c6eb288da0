use crate::config::DetectorConfig;
use crate::similarity::round_to;
use crate::similarity::sequence::{SequenceMatcher, StepBudget};
use crate::text::{split_sentences, word_count, WordSet};
use crate::types::report::{CountPair, LexicalDiff, SentencePair};

/// Lexical diff with word sets computed from the raw texts.
pub fn lexical_diff(first: &str, second: &str, config: &DetectorConfig) -> LexicalDiff {
    let first_words = WordSet::from_text(first);
    let second_words = WordSet::from_text(second);
    let matcher = SequenceMatcher::from_config(config);

    build_lexical_diff(first, second, &first_words, &second_words, config, &matcher)
}

pub(crate) fn build_lexical_diff(
    first: &str,
    second: &str,
    first_words: &WordSet,
    second_words: &WordSet,
    config: &DetectorConfig,
    matcher: &SequenceMatcher,
) -> LexicalDiff {
    let limit = config.max_listed_words;
    let scan = similar_sentences(first, second, config, matcher);

    LexicalDiff {
        common_words: first_words.common_with(second_words, limit),
        unique_to_first: first_words.difference_from(second_words, limit),
        unique_to_second: second_words.difference_from(first_words, limit),
        similar_sentence_pairs: scan.pairs,
        sentence_scan_exhausted: scan.budget_exhausted,
        word_counts: CountPair {
            first: word_count(first),
            second: word_count(second),
        },
        char_counts: CountPair {
            first: first.chars().count(),
            second: second.chars().count(),
        },
    }
}

/// Outcome of one sentence scan.
#[derive(Debug, Clone, PartialEq)]
pub struct SentenceScan {
    pub pairs: Vec<SentencePair>,
    /// The scan ran out of steps before every sentence pair was compared.
    pub budget_exhausted: bool,
    pub steps_used: u64,
}

/// Pairs of long sentences whose sequence ratio exceeds the threshold.
///
/// Pairs are reported in the order they are found (each sentence of `first`
/// against every sentence of `second`) and the scan stops once
/// `max_sentence_pairs` pairs are collected. The result is therefore the
/// first matches found, not the best ones.
///
/// All comparisons draw from one budget of `sequence_step_budget` steps.
/// Once it is spent the scan stops and reports what it found so far.
pub fn similar_sentences(
    first: &str,
    second: &str,
    config: &DetectorConfig,
    matcher: &SequenceMatcher,
) -> SentenceScan {
    let long_enough = |s: &&str| s.chars().count() > config.min_sentence_chars;

    let sentences_a: Vec<&str> = split_sentences(first).into_iter().filter(long_enough).collect();
    let sentences_b: Vec<&str> = split_sentences(second).into_iter().filter(long_enough).collect();

    let mut budget = StepBudget::new(config.sequence_step_budget);
    let mut pairs = Vec::new();
    let mut exhausted = false;

    'scan: for s1 in &sentences_a {
        for s2 in &sentences_b {
            // One step per pair, so even pairs that short-circuit are paid for
            if !budget.spend() {
                exhausted = true;
                break 'scan;
            }

            let outcome = matcher.compare_within(s1, s2, &mut budget);
            // A cut-short ratio is a lower bound, so passing the threshold still counts
            if outcome.ratio > config.sentence_similarity_threshold {
                pairs.push(SentencePair {
                    sentence_a: s1.to_string(),
                    sentence_b: s2.to_string(),
                    similarity_percentage: round_to(outcome.ratio * 100.0, 2),
                    budget_exhausted: outcome.budget_exhausted,
                });
                if pairs.len() >= config.max_sentence_pairs {
                    break 'scan;
                }
            }
            if outcome.budget_exhausted {
                exhausted = true;
                break 'scan;
            }
        }
    }

    if exhausted {
        tracing::warn!(
            budget = budget.limit(),
            pairs = pairs.len(),
            "sentence scan step budget exhausted"
        );
    }

    SentenceScan {
        pairs,
        budget_exhausted: exhausted,
        steps_used: budget.used(),
    }
}
