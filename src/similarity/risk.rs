use crate::types::report::{ColorTag, RiskLevel, SimilarityStatus};

/// One row of the threshold table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RiskBracket {
    /// Inclusive lower bound on the percentage.
    pub min_percentage: f64,
    pub status: SimilarityStatus,
    pub color_tag: ColorTag,
    pub risk_level: RiskLevel,
    /// Rendered verbatim by downstream reports.
    pub recommendations: [&'static str; 3],
}

/// Evaluated top to bottom; the first bracket whose bound is met applies.
pub const RISK_BRACKETS: [RiskBracket; 4] = [
    RiskBracket {
        min_percentage: 80.0,
        status: SimilarityStatus::HighRisk,
        color_tag: ColorTag::Danger,
        risk_level: RiskLevel::Critical,
        recommendations: [
            "This content shows very high similarity. Consider complete rewriting.",
            "Review and cite sources properly if this is research work.",
            "Ensure proper attribution for any quoted material.",
        ],
    },
    RiskBracket {
        min_percentage: 60.0,
        status: SimilarityStatus::ModerateRisk,
        color_tag: ColorTag::Warning,
        risk_level: RiskLevel::High,
        recommendations: [
            "Moderate similarity detected. Review similar sections.",
            "Consider paraphrasing similar content.",
            "Add proper citations where needed.",
        ],
    },
    RiskBracket {
        min_percentage: 30.0,
        status: SimilarityStatus::LowRisk,
        color_tag: ColorTag::Info,
        risk_level: RiskLevel::Medium,
        recommendations: [
            "Low similarity detected. This is generally acceptable.",
            "Review highlighted similar sections if needed.",
            "Ensure proper citation practices.",
        ],
    },
    RiskBracket {
        min_percentage: f64::NEG_INFINITY,
        status: SimilarityStatus::Original,
        color_tag: ColorTag::Success,
        risk_level: RiskLevel::Low,
        recommendations: [
            "Content appears to be original.",
            "Continue with good writing practices.",
            "Always cite sources when using external material.",
        ],
    },
];

pub fn classify(percentage: f64) -> &'static RiskBracket {
    RISK_BRACKETS
        .iter()
        .find(|bracket| percentage >= bracket.min_percentage)
        // NaN never meets a bound; treat it as the lowest bracket
        .unwrap_or(&RISK_BRACKETS[RISK_BRACKETS.len() - 1])
}

pub fn recommendations(percentage: f64) -> Vec<String> {
    classify(percentage)
        .recommendations
        .iter()
        .map(|r| r.to_string())
        .collect()
}
