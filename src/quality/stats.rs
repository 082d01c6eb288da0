use crate::quality::syllables::estimate_syllables;
use crate::text::{split_sentences, word_count};
use crate::types::quality::TextStatistics;

pub fn text_statistics(text: &str) -> TextStatistics {
    TextStatistics {
        word_count: word_count(text),
        sentence_count: split_sentences(text).len(),
        syllable_count: estimate_syllables(text),
        character_count: text.chars().count(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_simple_text() {
        let stats = text_statistics("The cat sat. The dog ran.");
        assert_eq!(stats.word_count, 6);
        assert_eq!(stats.sentence_count, 2);
        assert_eq!(stats.syllable_count, 6);
        assert_eq!(stats.character_count, 25);
    }

    #[test]
    fn empty_text_is_all_zero() {
        let stats = text_statistics("");
        assert_eq!(stats.word_count, 0);
        assert_eq!(stats.sentence_count, 0);
        assert_eq!(stats.syllable_count, 0);
        assert_eq!(stats.character_count, 0);
    }
}
