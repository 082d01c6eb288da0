use serde::{Deserialize, Serialize};

/// Ordinal risk classification derived from the combined percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    Critical,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "LOW",
            RiskLevel::Medium => "MEDIUM",
            RiskLevel::High => "HIGH",
            RiskLevel::Critical => "CRITICAL",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SimilarityStatus {
    #[serde(rename = "High Plagiarism Risk")]
    HighRisk,
    #[serde(rename = "Moderate Plagiarism Risk")]
    ModerateRisk,
    #[serde(rename = "Low Plagiarism Risk")]
    LowRisk,
    #[serde(rename = "Original Content")]
    Original,
}

impl SimilarityStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SimilarityStatus::HighRisk => "High Plagiarism Risk",
            SimilarityStatus::ModerateRisk => "Moderate Plagiarism Risk",
            SimilarityStatus::LowRisk => "Low Plagiarism Risk",
            SimilarityStatus::Original => "Original Content",
        }
    }
}

/// Presentation hint consumed by report renderers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorTag {
    Danger,
    Warning,
    Info,
    Success,
}

impl ColorTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            ColorTag::Danger => "danger",
            ColorTag::Warning => "warning",
            ColorTag::Info => "info",
            ColorTag::Success => "success",
        }
    }
}

/// A value measured once per compared document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountPair {
    pub first: usize,
    pub second: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SentencePair {
    pub sentence_a: String,
    pub sentence_b: String,
    pub similarity_percentage: f64,
    /// The step budget ran out during this comparison; the percentage is a lower bound.
    pub budget_exhausted: bool,
}

/// Vocabulary and sentence level comparison of two documents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LexicalDiff {
    pub common_words: Vec<String>,
    pub unique_to_first: Vec<String>,
    pub unique_to_second: Vec<String>,
    /// In discovery order (outer loop over the first document), not by score.
    pub similar_sentence_pairs: Vec<SentencePair>,
    /// The sentence scan stopped early on its step budget.
    pub sentence_scan_exhausted: bool,
    pub word_counts: CountPair,
    pub char_counts: CountPair,
}

/// The final result of comparing two documents.
/// Fully self-contained and serializable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimilarityResult {
    pub cosine_score: f64,
    pub sequence_score: f64,
    pub combined_score: f64,
    /// `combined_score * 100` rounded to 2 decimal places.
    pub percentage: f64,
    pub status: SimilarityStatus,
    pub color_tag: ColorTag,
    pub risk_level: RiskLevel,
    pub recommendations: Vec<String>,
    pub details: String,
    /// True when the sequence score is a lower bound cut short by the step budget.
    pub sequence_budget_exhausted: bool,
    pub analysis: LexicalDiff,
}
