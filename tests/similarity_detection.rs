use similarity_core::similarity::{cosine_similarity, sequence_ratio, SimilarityDetector};
use similarity_core::types::{ColorTag, RiskLevel, SimilarityStatus};

#[test]
fn identical_texts_are_high_risk() {
    let text = "The quick brown fox jumps";
    let result = SimilarityDetector::default().detect_default(text, text);

    assert_eq!(result.cosine_score, 1.0);
    assert_eq!(result.sequence_score, 1.0);
    assert_eq!(result.combined_score, 1.0);
    assert_eq!(result.percentage, 100.0);
    assert_eq!(result.status, SimilarityStatus::HighRisk);
    assert_eq!(result.color_tag, ColorTag::Danger);
    assert_eq!(result.risk_level, RiskLevel::Critical);
    assert_eq!(result.details, "Similarity between Document 1 and Document 2");
}

#[test]
fn partial_overlap_is_moderate_risk() {
    let result = SimilarityDetector::default().detect_default("cat dog bird", "cat dog fish");

    // {cat, dog} shared out of 3 words each
    assert!((result.cosine_score - 2.0 / 3.0).abs() < 1e-12);
    // "cat dog " plus the "i" of bird/fish: 2 * 9 / 24
    assert!((result.sequence_score - 0.75).abs() < 1e-12);
    assert_eq!(result.percentage, 70.0);
    assert_eq!(result.status, SimilarityStatus::ModerateRisk);
    assert_eq!(result.color_tag, ColorTag::Warning);
    assert_eq!(result.risk_level, RiskLevel::High);
}

#[test]
fn disjoint_vocabulary_is_original() {
    let result = SimilarityDetector::default().detect_default("alpha beta", "gamma delta");

    assert_eq!(result.cosine_score, 0.0);
    assert!(result.sequence_score > 0.0, "shared characters still count");
    assert!(result.percentage < 30.0);
    assert_eq!(result.status, SimilarityStatus::Original);
    assert_eq!(result.risk_level, RiskLevel::Low);
    assert_eq!(
        result.recommendations,
        vec![
            "Content appears to be original.".to_string(),
            "Continue with good writing practices.".to_string(),
            "Always cite sources when using external material.".to_string(),
        ]
    );
}

#[test]
fn named_documents_appear_in_details() {
    let result = SimilarityDetector::default().detect("a", "b", "essay.pdf", "draft.docx");
    assert_eq!(result.details, "Similarity between essay.pdf and draft.docx");
}

#[test]
fn lexical_diff_lists_are_sorted_and_truncated() {
    let first: String = (0..30).map(|i| format!("shared{i:02} only_a{i:02} ")).collect();
    let second: String = (0..30).map(|i| format!("shared{i:02} only_b{i:02} ")).collect();

    let result = SimilarityDetector::default().detect_default(&first, &second);
    let diff = &result.analysis;

    assert_eq!(diff.common_words.len(), 20);
    assert_eq!(diff.common_words[0], "shared00");
    assert_eq!(diff.common_words[19], "shared19");
    assert_eq!(diff.unique_to_first.len(), 20);
    assert_eq!(diff.unique_to_first[0], "only_a00");
    assert_eq!(diff.unique_to_second[0], "only_b00");
    assert!(diff.common_words.windows(2).all(|w| w[0] < w[1]));

    assert_eq!(diff.word_counts.first, 60);
    assert_eq!(diff.word_counts.second, 60);
    assert_eq!(diff.char_counts.first, first.chars().count());
}

#[test]
fn similar_sentences_are_first_found_not_best() {
    let first = "The committee approved the annual budget yesterday. \
                 Students gathered in the library to study for exams.";
    let second = "The committee approved the annual budget on Monday. \
                  Students gathered in the library to study for finals.";

    let result = SimilarityDetector::default().detect_default(first, second);
    let pairs = &result.analysis.similar_sentence_pairs;

    assert_eq!(pairs.len(), 2);
    assert_eq!(pairs[0].sentence_a, "The committee approved the annual budget yesterday");
    assert_eq!(pairs[0].sentence_b, "The committee approved the annual budget on Monday");
    assert_eq!(pairs[1].sentence_a, "Students gathered in the library to study for exams");
    for pair in pairs {
        assert!(pair.similarity_percentage > 50.0);
        assert!(pair.similarity_percentage <= 100.0);
    }
}

#[test]
fn sentence_pairs_are_capped_at_ten() {
    let sentence = "this sentence is repeated over and over again";
    let text: String = (0..6).map(|_| format!("{sentence}. ")).collect();

    let result = SimilarityDetector::default().detect_default(&text, &text);
    // 36 candidate pairs, only the first 10 are kept
    assert_eq!(result.analysis.similar_sentence_pairs.len(), 10);
}

#[test]
fn extraction_error_text_is_ordinary_input() {
    let sentinel = "Error extracting text: file is encrypted";
    let result = SimilarityDetector::default().detect_default(sentinel, sentinel);
    assert_eq!(result.percentage, 100.0);

    let other = SimilarityDetector::default().detect_default(sentinel, "An essay about rivers.");
    assert!(other.percentage < 100.0);
}

#[test]
fn non_latin_scripts_are_opaque_streams() {
    let a = "Быстрая коричневая лиса прыгает";
    let b = "Быстрая серая лиса спит";
    let result = SimilarityDetector::default().detect_default(a, b);

    assert!((0.0..=1.0).contains(&result.combined_score));
    assert!(result.analysis.common_words.contains(&"лиса".to_string()));
    assert!(cosine_similarity(a, b) > 0.0);
    assert!(sequence_ratio(a, b) > 0.0);
}
