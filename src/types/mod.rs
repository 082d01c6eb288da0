pub mod identifiers;
pub mod quality;
pub mod report;

pub use identifiers::TextFingerprint;
pub use quality::{
    AnalysisSource, FormulaScores, GrammarIssue, QualityReport, Readability, ReadabilityProfile,
    ReadingLevel, TextStatistics,
};
pub use report::{
    ColorTag, CountPair, LexicalDiff, RiskLevel, SentencePair, SimilarityResult, SimilarityStatus,
};
