use crate::text::WordSet;

/// Cosine similarity of binary bag-of-words vectors over the union vocabulary.
///
/// With 0/1 incidence vectors the dot product is the size of the
/// intersection and each magnitude is the square root of the set size, so
/// the vectors are never materialized. An empty side yields 0.0.
pub fn cosine_similarity(a: &str, b: &str) -> f64 {
    word_set_cosine(&WordSet::from_text(a), &WordSet::from_text(b))
}

pub fn word_set_cosine(a: &WordSet, b: &WordSet) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    let dot = a.intersection_len(b) as f64;
    // sqrt(|a| * |b|) keeps identical sets at exactly 1.0
    let magnitude = ((a.len() * b.len()) as f64).sqrt();
    let score = (dot / magnitude).clamp(0.0, 1.0);

    debug_assert!((0.0..=1.0).contains(&score), "cosine {score} out of range [0.0, 1.0]");
    score
}
