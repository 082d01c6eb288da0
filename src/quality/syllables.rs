const VOWELS: [char; 6] = ['a', 'e', 'i', 'o', 'u', 'y'];

/// Syllables of a single whitespace-free word.
///
/// Counts entries into a vowel group, drops one for a trailing `e` when
/// more than one group was seen, and never returns less than 1.
pub fn word_syllables(word: &str) -> usize {
    let word = word.to_lowercase();
    let mut count = 0;
    let mut prev_was_vowel = false;

    for c in word.chars() {
        let is_vowel = VOWELS.contains(&c);
        if is_vowel && !prev_was_vowel {
            count += 1;
        }
        prev_was_vowel = is_vowel;
    }

    if word.ends_with('e') && count > 1 {
        count -= 1;
    }

    count.max(1)
}

/// Total syllables over the whitespace-delimited words of `text`.
pub fn estimate_syllables(text: &str) -> usize {
    text.split_whitespace().map(word_syllables).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vowel_groups() {
        assert_eq!(word_syllables("hello"), 2);
        assert_eq!(word_syllables("beautiful"), 3);
        assert_eq!(word_syllables("rhythm"), 1);
    }

    #[test]
    fn trailing_e_reduction() {
        assert_eq!(word_syllables("code"), 1);
        assert_eq!(word_syllables("the"), 1);
        assert_eq!(word_syllables("be"), 1);
    }

    #[test]
    fn floor_of_one() {
        assert_eq!(word_syllables("hmm"), 1);
        assert_eq!(word_syllables("42"), 1);
    }

    #[test]
    fn sums_over_words() {
        assert_eq!(estimate_syllables("hello code"), 3);
        assert_eq!(estimate_syllables(""), 0);
    }
}
