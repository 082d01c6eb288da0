pub mod batch;
pub mod cosine;
pub mod lexical;
pub mod risk;
pub mod sequence;

use crate::config::{ConfigError, DetectorConfig};
use crate::document::Document;
use crate::text::WordSet;
use crate::types::report::SimilarityResult;

pub use batch::{BatchPair, BatchReport, PairSummary};
pub use cosine::{cosine_similarity, word_set_cosine};
pub use lexical::{lexical_diff, similar_sentences, SentenceScan};
pub use risk::{classify, recommendations, RiskBracket, RISK_BRACKETS};
pub use sequence::{
    sequence_ratio, MatchingBlock, SequenceMatcher, SequenceOutcome, StepBudget,
};

pub const DEFAULT_FIRST_NAME: &str = "Document 1";
pub const DEFAULT_SECOND_NAME: &str = "Document 2";

/// Two-document similarity engine.
///
/// Stateless apart from its validated config; one detector can serve any
/// number of concurrent calls.
#[derive(Debug, Clone)]
pub struct SimilarityDetector {
    config: DetectorConfig,
    matcher: SequenceMatcher,
}

impl Default for SimilarityDetector {
    fn default() -> Self {
        let config = DetectorConfig::v0();
        let matcher = SequenceMatcher::from_config(&config);
        Self { config, matcher }
    }
}

impl SimilarityDetector {
    pub fn with_config(config: DetectorConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let matcher = SequenceMatcher::from_config(&config);
        Ok(Self { config, matcher })
    }

    pub fn config(&self) -> &DetectorConfig {
        &self.config
    }

    pub fn detect(
        &self,
        first: &str,
        second: &str,
        first_name: &str,
        second_name: &str,
    ) -> SimilarityResult {
        // 1. Vocabulary phase
        let first_words = WordSet::from_text(first);
        let second_words = WordSet::from_text(second);
        let cosine_score = word_set_cosine(&first_words, &second_words);

        // 2. Sequence phase
        let sequence = self.matcher.compare(first, second);

        // 3. Combination phase
        let combined_score = (self.config.cosine_weight * cosine_score
            + self.config.sequence_weight * sequence.ratio)
            .clamp(0.0, 1.0);
        let percentage = round_to(combined_score * 100.0, 2).clamp(0.0, 100.0);
        let bracket = classify(percentage);

        debug_assert!((0.0..=1.0).contains(&combined_score));

        let analysis = lexical::build_lexical_diff(
            first,
            second,
            &first_words,
            &second_words,
            &self.config,
            &self.matcher,
        );

        tracing::debug!(
            cosine = cosine_score,
            sequence = sequence.ratio,
            percentage,
            risk = bracket.risk_level.as_str(),
            "similarity computed"
        );

        SimilarityResult {
            cosine_score,
            sequence_score: sequence.ratio,
            combined_score,
            percentage,
            status: bracket.status,
            color_tag: bracket.color_tag,
            risk_level: bracket.risk_level,
            recommendations: recommendations(percentage),
            details: format!("Similarity between {first_name} and {second_name}"),
            sequence_budget_exhausted: sequence.budget_exhausted,
            analysis,
        }
    }

    pub fn detect_default(&self, first: &str, second: &str) -> SimilarityResult {
        self.detect(first, second, DEFAULT_FIRST_NAME, DEFAULT_SECOND_NAME)
    }

    pub fn detect_documents(&self, first: &Document, second: &Document) -> SimilarityResult {
        self.detect(&first.content, &second.content, &first.name, &second.name)
    }
}

/// Compare two texts with the default configuration.
pub fn detect_similarity(
    first: &str,
    second: &str,
    first_name: &str,
    second_name: &str,
) -> SimilarityResult {
    SimilarityDetector::default().detect(first, second, first_name, second_name)
}

/// Scale, round half away from zero, scale back.
///
/// Not a correctly rounded decimal: a binary value just below a `.xx5`
/// boundary after scaling (or just above it) can land 0.01 away from what
/// decimal half-to-even rounding gives. Thresholds compare the rounded value,
/// so a score is classified exactly as it is reported.
pub(crate) fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_to_two_places() {
        assert_eq!(round_to(66.666_666, 2), 66.67);
        assert_eq!(round_to(80.000_000_000_01, 2), 80.0);
        assert_eq!(round_to(0.0, 2), 0.0);
    }

    #[test]
    fn round_to_is_half_away_from_zero() {
        // 0.125 and 0.375 are exact in binary, so the tie is real
        assert_eq!(round_to(0.125, 2), 0.13);
        assert_eq!(round_to(0.375, 2), 0.38);
        assert_eq!(round_to(-0.125, 2), -0.13);
    }
}
