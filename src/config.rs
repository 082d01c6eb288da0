use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid weight {name}: {value}")]
    InvalidWeight { name: &'static str, value: f64 },
    #[error("Weights must sum to 1.0, got {0}")]
    WeightSum(f64),
    #[error("Sentence similarity threshold out of range [0, 1]: {0}")]
    InvalidThreshold(f64),
    #[error("{0} must be at least 1")]
    ZeroLimit(&'static str),
    #[error("Config parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

// Key point:
// Serializable
// Comparable
// Explicit defaults
//
// The weights and the sentence threshold are empirically chosen tuning
// values. They are defaults, not derived constants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectorConfig {
    pub cosine_weight: f64,
    pub sequence_weight: f64,
    pub sentence_similarity_threshold: f64,
    /// Sentences must be strictly longer than this (in chars) to be paired.
    pub min_sentence_chars: usize,
    pub max_listed_words: usize,
    pub max_sentence_pairs: usize,
    /// Inner-loop steps one sequence comparison may spend.
    pub sequence_step_budget: u64,
}

impl DetectorConfig {
    pub fn v0() -> Self {
        Self {
            cosine_weight: 0.6,
            sequence_weight: 0.4,
            sentence_similarity_threshold: 0.5,
            min_sentence_chars: 20,
            max_listed_words: 20,
            max_sentence_pairs: 10,
            sequence_step_budget: 20_000_000,
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: DetectorConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn with_weights(mut self, cosine_weight: f64, sequence_weight: f64) -> Self {
        self.cosine_weight = cosine_weight;
        self.sequence_weight = sequence_weight;
        self
    }

    pub fn with_sentence_similarity_threshold(mut self, threshold: f64) -> Self {
        self.sentence_similarity_threshold = threshold;
        self
    }

    pub fn with_min_sentence_chars(mut self, chars: usize) -> Self {
        self.min_sentence_chars = chars;
        self
    }

    pub fn with_max_listed_words(mut self, limit: usize) -> Self {
        self.max_listed_words = limit;
        self
    }

    pub fn with_max_sentence_pairs(mut self, limit: usize) -> Self {
        self.max_sentence_pairs = limit;
        self
    }

    pub fn with_sequence_step_budget(mut self, budget: u64) -> Self {
        self.sequence_step_budget = budget;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("cosine_weight", self.cosine_weight),
            ("sequence_weight", self.sequence_weight),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidWeight { name, value });
            }
        }

        let sum = self.cosine_weight + self.sequence_weight;
        if (sum - 1.0).abs() > 1e-9 {
            return Err(ConfigError::WeightSum(sum));
        }

        let threshold = self.sentence_similarity_threshold;
        if !(0.0..=1.0).contains(&threshold) {
            return Err(ConfigError::InvalidThreshold(threshold));
        }

        if self.max_listed_words == 0 {
            return Err(ConfigError::ZeroLimit("max_listed_words"));
        }
        if self.max_sentence_pairs == 0 {
            return Err(ConfigError::ZeroLimit("max_sentence_pairs"));
        }
        if self.sequence_step_budget == 0 {
            return Err(ConfigError::ZeroLimit("sequence_step_budget"));
        }

        Ok(())
    }
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self::v0()
    }
}
