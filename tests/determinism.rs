use similarity_core::document::Document;
use similarity_core::quality::{FormulaReadability, QualityAnalyzer};
use similarity_core::similarity::SimilarityDetector;

const ESSAY_A: &str = "Rivers shape the land over long periods of time. \
    Water erodes rock and carries sediment downstream. \
    Over centuries a river can carve a deep canyon. \
    Teh process is slow but relentless.";

const ESSAY_B: &str = "Over long periods of time rivers shape the land. \
    Sediment is carried downstream as water erodes the rock. \
    A river can carve a deep canyon over many centuries. \
    the process is  slow and relentless.";

#[test]
fn similarity_output_is_byte_identical_across_runs() {
    let detector1 = SimilarityDetector::default();
    let detector2 = SimilarityDetector::default();

    let result1 = detector1.detect(ESSAY_A, ESSAY_B, "a.txt", "b.txt");
    let result2 = detector2.detect(ESSAY_A, ESSAY_B, "a.txt", "b.txt");

    let json1 = serde_json::to_string_pretty(&result1).unwrap();
    let json2 = serde_json::to_string_pretty(&result2).unwrap();

    assert_eq!(json1, json2, "Similarity output is not deterministic");
}

#[test]
fn argument_order_only_mirrors_the_report() {
    let detector = SimilarityDetector::default();
    let forward = detector.detect_default(ESSAY_A, ESSAY_B);
    let backward = detector.detect_default(ESSAY_B, ESSAY_A);

    assert_eq!(forward.cosine_score, backward.cosine_score);
    assert_eq!(forward.sequence_score, backward.sequence_score);
    assert_eq!(forward.percentage, backward.percentage);
    assert_eq!(forward.risk_level, backward.risk_level);
    assert_eq!(forward.analysis.common_words, backward.analysis.common_words);
    assert_eq!(forward.analysis.unique_to_first, backward.analysis.unique_to_second);
    assert_eq!(forward.analysis.unique_to_second, backward.analysis.unique_to_first);
}

#[test]
fn quality_output_is_byte_identical_across_runs() {
    let heuristic = QualityAnalyzer::heuristic_only();
    let formula = QualityAnalyzer::heuristic_only().with_readability(FormulaReadability);

    for analyzer_json in [
        (
            serde_json::to_string(&heuristic.analyze(ESSAY_B)).unwrap(),
            serde_json::to_string(&heuristic.analyze(ESSAY_B)).unwrap(),
        ),
        (
            serde_json::to_string(&formula.analyze(ESSAY_B)).unwrap(),
            serde_json::to_string(&formula.analyze(ESSAY_B)).unwrap(),
        ),
    ] {
        assert_eq!(analyzer_json.0, analyzer_json.1);
    }
}

#[test]
fn batch_output_is_byte_identical_across_runs() {
    let docs = vec![
        Document::new("a.txt", ESSAY_A),
        Document::new("b.txt", ESSAY_B),
        Document::new("c.txt", ESSAY_A),
    ];

    let detector = SimilarityDetector::default();
    let json1 = serde_json::to_string(&detector.compare_batch(&docs)).unwrap();
    let json2 = serde_json::to_string(&detector.compare_batch(&docs)).unwrap();

    assert_eq!(json1, json2, "Batch output is not deterministic");
}
