pub mod grammar;
pub mod readability;
pub mod stats;
pub mod syllables;

use thiserror::Error;

use crate::types::quality::{AnalysisSource, GrammarIssue, QualityReport, Readability};
pub use grammar::{heuristic_grammar_check, GrammarService, COMMON_MISSPELLINGS};
pub use readability::{heuristic_readability, FormulaReadability, ReadabilityService};
pub use stats::text_statistics;
pub use syllables::{estimate_syllables, word_syllables};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ServiceError {
    #[error("Service not configured")]
    Unavailable,
    #[error("Service failed: {0}")]
    Failed(String),
    #[error("Not enough text to analyze")]
    InsufficientText,
}

/// Placeholder capability: always reports `Unavailable`, so the analyzer
/// goes straight to its heuristics.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoService;

impl GrammarService for NoService {
    fn check(&self, _text: &str) -> Result<Vec<GrammarIssue>, ServiceError> {
        Err(ServiceError::Unavailable)
    }
}

impl ReadabilityService for NoService {
    fn score(&self, _text: &str) -> Result<Readability, ServiceError> {
        Err(ServiceError::Unavailable)
    }
}

/// Single-document quality review.
///
/// The grammar and readability capabilities are fixed at construction.
/// Whenever a capability fails, its heuristic counterpart is used and the
/// report records the source.
pub struct QualityAnalyzer<G, R> {
    grammar: G,
    readability: R,
}

impl Default for QualityAnalyzer<NoService, NoService> {
    fn default() -> Self {
        Self {
            grammar: NoService,
            readability: NoService,
        }
    }
}

impl QualityAnalyzer<NoService, NoService> {
    pub fn heuristic_only() -> Self {
        Self::default()
    }
}

impl<G, R> QualityAnalyzer<G, R>
where
    G: GrammarService,
    R: ReadabilityService,
{
    pub fn new(grammar: G, readability: R) -> Self {
        Self {
            grammar,
            readability,
        }
    }

    pub fn with_grammar<G2: GrammarService>(self, grammar: G2) -> QualityAnalyzer<G2, R> {
        QualityAnalyzer {
            grammar,
            readability: self.readability,
        }
    }

    pub fn with_readability<R2: ReadabilityService>(
        self,
        readability: R2,
    ) -> QualityAnalyzer<G, R2> {
        QualityAnalyzer {
            grammar: self.grammar,
            readability,
        }
    }

    pub fn analyze(&self, text: &str) -> QualityReport {
        let (grammar_issues, grammar_source) = self.grammar_issues(text);
        let (readability, readability_source) = self.readability(text);

        QualityReport {
            total_issues: grammar_issues.len(),
            grammar_issues,
            grammar_source,
            readability,
            readability_source,
            text_stats: text_statistics(text),
        }
    }

    pub fn grammar_issues(&self, text: &str) -> (Vec<GrammarIssue>, AnalysisSource) {
        match self.grammar.check(text) {
            Ok(issues) => {
                let issues = issues
                    .into_iter()
                    .map(GrammarIssue::truncate_replacements)
                    .collect();
                (issues, AnalysisSource::External)
            }
            Err(err) => {
                log_fallback("grammar", &err);
                (heuristic_grammar_check(text), AnalysisSource::Heuristic)
            }
        }
    }

    pub fn readability(&self, text: &str) -> (Option<Readability>, AnalysisSource) {
        match self.readability.score(text) {
            Ok(scores) => (Some(scores), AnalysisSource::External),
            Err(err) => {
                log_fallback("readability", &err);
                let profile = heuristic_readability(text).map(Readability::Heuristic);
                (profile, AnalysisSource::Heuristic)
            }
        }
    }
}

fn log_fallback(capability: &str, err: &ServiceError) {
    match err {
        ServiceError::Unavailable | ServiceError::InsufficientText => {
            tracing::debug!(capability, error = %err, "using heuristic fallback");
        }
        ServiceError::Failed(_) => {
            tracing::warn!(capability, error = %err, "service failed, using heuristic fallback");
        }
    }
}
