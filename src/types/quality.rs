use serde::{Deserialize, Serialize};

/// A single grammar or style finding.
///
/// `offset` and `length` address the offending span in chars;
/// `suggested_replacements` are candidate texts for that span.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GrammarIssue {
    pub message: String,
    pub context_snippet: String,
    pub offset: usize,
    pub length: usize,
    pub rule_id: String,
    pub suggested_replacements: Vec<String>,
}

impl GrammarIssue {
    pub const MAX_REPLACEMENTS: usize = 3;

    pub fn truncate_replacements(mut self) -> Self {
        self.suggested_replacements.truncate(Self::MAX_REPLACEMENTS);
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReadingLevel {
    Easy,
    Medium,
    Difficult,
}

/// Heuristic readability profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadabilityProfile {
    pub reading_level: ReadingLevel,
    /// Rounded to 1 decimal place.
    pub avg_words_per_sentence: f64,
    /// Rounded to 1 decimal place.
    pub avg_chars_per_word: f64,
    /// Always within 1..=12.
    pub estimated_grade_level: u32,
}

/// Standard readability formulas, rounded to 2 decimal places.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormulaScores {
    pub flesch_reading_ease: f64,
    pub flesch_kincaid_grade: f64,
    pub gunning_fog: f64,
    pub smog_index: f64,
    pub automated_readability_index: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Readability {
    Heuristic(ReadabilityProfile),
    Formula(FormulaScores),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextStatistics {
    pub word_count: usize,
    pub sentence_count: usize,
    pub syllable_count: usize,
    pub character_count: usize,
}

/// Which implementation produced a part of a quality report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnalysisSource {
    External,
    Heuristic,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QualityReport {
    pub grammar_issues: Vec<GrammarIssue>,
    pub total_issues: usize,
    pub grammar_source: AnalysisSource,
    /// `None` when the text has no words or no sentences.
    pub readability: Option<Readability>,
    pub readability_source: AnalysisSource,
    pub text_stats: TextStatistics,
}
