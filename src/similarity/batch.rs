use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::document::Document;
use crate::similarity::{round_to, SimilarityDetector};
use crate::types::identifiers::TextFingerprint;
use crate::types::report::{RiskLevel, SimilarityResult};

/// One compared pair. Indices refer to the input slice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchPair {
    pub first_index: usize,
    pub second_index: usize,
    pub first_name: String,
    pub second_name: String,
    pub result: SimilarityResult,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PairSummary {
    pub first_name: String,
    pub second_name: String,
    pub percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchReport {
    pub document_count: usize,
    /// Every unordered pair `(i, j)` with `i < j`, in index order.
    pub pairs: Vec<BatchPair>,
    /// First pair with the maximum percentage.
    pub highest_pair: Option<PairSummary>,
    pub mean_percentage: f64,
    /// Every level is present, zero counts included.
    pub risk_counts: BTreeMap<RiskLevel, usize>,
    /// Names of documents sharing a fingerprint, groups ordered by first member.
    pub exact_duplicates: Vec<Vec<String>>,
}

impl SimilarityDetector {
    pub fn compare_batch(&self, documents: &[Document]) -> BatchReport {
        let mut pairs = Vec::new();
        for (i, first) in documents.iter().enumerate() {
            for (offset, second) in documents[i + 1..].iter().enumerate() {
                pairs.push(BatchPair {
                    first_index: i,
                    second_index: i + 1 + offset,
                    first_name: first.name.clone(),
                    second_name: second.name.clone(),
                    result: self.detect_documents(first, second),
                });
            }
        }

        let mut highest: Option<&BatchPair> = None;
        for pair in &pairs {
            // Strict comparison keeps the first pair on ties
            if highest.map_or(true, |h| pair.result.percentage > h.result.percentage) {
                highest = Some(pair);
            }
        }
        let highest_pair = highest.map(|pair| PairSummary {
            first_name: pair.first_name.clone(),
            second_name: pair.second_name.clone(),
            percentage: pair.result.percentage,
        });

        let mean_percentage = if pairs.is_empty() {
            0.0
        } else {
            let sum: f64 = pairs.iter().map(|p| p.result.percentage).sum();
            round_to(sum / pairs.len() as f64, 2)
        };

        let mut risk_counts: BTreeMap<RiskLevel, usize> = [
            RiskLevel::Low,
            RiskLevel::Medium,
            RiskLevel::High,
            RiskLevel::Critical,
        ]
        .into_iter()
        .map(|level| (level, 0))
        .collect();
        for pair in &pairs {
            *risk_counts.entry(pair.result.risk_level).or_insert(0) += 1;
        }

        tracing::debug!(
            documents = documents.len(),
            pairs = pairs.len(),
            mean_percentage,
            "batch comparison complete"
        );

        BatchReport {
            document_count: documents.len(),
            pairs,
            highest_pair,
            mean_percentage,
            risk_counts,
            exact_duplicates: exact_duplicates(documents),
        }
    }
}

fn exact_duplicates(documents: &[Document]) -> Vec<Vec<String>> {
    // fingerprint -> (first index, names in input order)
    let mut groups: BTreeMap<&TextFingerprint, (usize, Vec<String>)> = BTreeMap::new();
    for (index, doc) in documents.iter().enumerate() {
        groups
            .entry(&doc.fingerprint)
            .or_insert_with(|| (index, Vec::new()))
            .1
            .push(doc.name.clone());
    }

    let mut duplicates: Vec<(usize, Vec<String>)> = groups
        .into_values()
        .filter(|(_, names)| names.len() > 1)
        .collect();
    duplicates.sort_by_key(|(first_index, _)| *first_index);

    duplicates.into_iter().map(|(_, names)| names).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_groups_follow_input_order() {
        let docs = vec![
            Document::new("c", "zeta"),
            Document::new("a", "alpha"),
            Document::new("b", "zeta"),
            Document::new("d", "alpha"),
            Document::new("e", "unique"),
        ];
        assert_eq!(
            exact_duplicates(&docs),
            vec![
                vec!["c".to_string(), "b".to_string()],
                vec!["a".to_string(), "d".to_string()],
            ]
        );
    }
}
