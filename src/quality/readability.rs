use crate::quality::syllables::word_syllables;
use crate::quality::ServiceError;
use crate::similarity::round_to;
use crate::text::{split_sentences, word_count};
use crate::types::quality::{FormulaScores, Readability, ReadabilityProfile, ReadingLevel};

/// An external readability metrics provider.
pub trait ReadabilityService {
    fn score(&self, text: &str) -> Result<Readability, ServiceError>;
}

/// Words-per-sentence and chars-per-word heuristic.
///
/// Returns `None` when the text has no words or no sentences.
pub fn heuristic_readability(text: &str) -> Option<ReadabilityProfile> {
    let words = word_count(text);
    let sentences = split_sentences(text).len();
    if words == 0 || sentences == 0 {
        return None;
    }

    let avg_words_per_sentence = words as f64 / sentences as f64;
    // Only the ASCII space is excluded; other whitespace counts as a char.
    let non_space_chars = text.chars().filter(|c| *c != ' ').count();
    let avg_chars_per_word = non_space_chars as f64 / words as f64;

    let reading_level = if avg_words_per_sentence <= 10.0 && avg_chars_per_word <= 4.0 {
        ReadingLevel::Easy
    } else if avg_words_per_sentence <= 15.0 && avg_chars_per_word <= 5.0 {
        ReadingLevel::Medium
    } else {
        ReadingLevel::Difficult
    };

    let grade = (avg_words_per_sentence / 2.0 + avg_chars_per_word).floor();
    let estimated_grade_level = grade.clamp(1.0, 12.0) as u32;

    Some(ReadabilityProfile {
        reading_level,
        avg_words_per_sentence: round_to(avg_words_per_sentence, 1),
        avg_chars_per_word: round_to(avg_chars_per_word, 1),
        estimated_grade_level,
    })
}

/// Standard readability formulas over this crate's word, sentence and
/// syllable counts.
///
/// - Flesch reading ease: `206.835 - 1.015 * wps - 84.6 * spw`
/// - Flesch-Kincaid grade: `0.39 * wps + 11.8 * spw - 15.59`
/// - Gunning fog: `0.4 * (wps + 100 * complex / words)`
/// - SMOG: `1.043 * sqrt(complex * 30 / sentences) + 3.1291`
/// - ARI: `4.71 * letters / words + 0.5 * wps - 21.43`
///
/// where `complex` counts words of three or more syllables.
#[derive(Debug, Clone, Copy, Default)]
pub struct FormulaReadability;

impl FormulaReadability {
    pub fn scores(&self, text: &str) -> Result<FormulaScores, ServiceError> {
        let words: Vec<&str> = text.split_whitespace().collect();
        let sentences = split_sentences(text).len();
        if words.is_empty() || sentences == 0 {
            return Err(ServiceError::InsufficientText);
        }

        let word_total = words.len() as f64;
        let sentence_total = sentences as f64;

        let mut syllables = 0usize;
        let mut complex = 0usize;
        for word in &words {
            let count = word_syllables(word);
            syllables += count;
            if count >= 3 {
                complex += 1;
            }
        }
        let letters = text.chars().filter(|c| c.is_alphanumeric()).count() as f64;

        let wps = word_total / sentence_total;
        let spw = syllables as f64 / word_total;

        let flesch_reading_ease = 206.835 - 1.015 * wps - 84.6 * spw;
        let flesch_kincaid_grade = 0.39 * wps + 11.8 * spw - 15.59;
        let gunning_fog = 0.4 * (wps + 100.0 * complex as f64 / word_total);
        let smog_index = 1.043 * (complex as f64 * 30.0 / sentence_total).sqrt() + 3.1291;
        let automated_readability_index = 4.71 * letters / word_total + 0.5 * wps - 21.43;

        Ok(FormulaScores {
            flesch_reading_ease: round_to(flesch_reading_ease, 2),
            flesch_kincaid_grade: round_to(flesch_kincaid_grade, 2),
            gunning_fog: round_to(gunning_fog, 2),
            smog_index: round_to(smog_index, 2),
            automated_readability_index: round_to(automated_readability_index, 2),
        })
    }
}

impl ReadabilityService for FormulaReadability {
    fn score(&self, text: &str) -> Result<Readability, ServiceError> {
        self.scores(text).map(Readability::Formula)
    }
}
