use std::collections::BTreeSet;

/// Canonical text form used for every vocabulary comparison.
///
/// Normalization rules:
/// - Lowercase
/// - Every character that is neither a word character nor whitespace becomes a space
/// - Runs of whitespace collapse to a single space
/// - Leading and trailing whitespace is trimmed
///
/// Normalizing an already normalized text returns it unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NormalizedText(String);

impl NormalizedText {
    pub fn new(raw: &str) -> Self {
        let replaced: String = raw
            .to_lowercase()
            .chars()
            .map(|c| if is_word_char(c) { c } else { ' ' })
            .collect();

        let collapsed = replaced.split_whitespace().collect::<Vec<_>>().join(" ");

        NormalizedText(collapsed)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.0.split(' ').filter(|t| !t.is_empty())
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

/// Letters, digits and underscore. Whitespace is handled by the caller.
pub(crate) fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Convenience wrapper returning the normalized text as an owned string.
pub fn normalize(raw: &str) -> String {
    NormalizedText::new(raw).into_string()
}

/// The set of distinct normalized tokens of a text.
///
/// Backed by an ordered set so that enumeration is lexicographic and
/// reports built from it are reproducible.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordSet {
    words: BTreeSet<String>,
}

impl WordSet {
    pub fn from_text(raw: &str) -> Self {
        let normalized = NormalizedText::new(raw);
        let words = normalized.tokens().map(str::to_string).collect();
        WordSet { words }
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    pub fn intersection_len(&self, other: &WordSet) -> usize {
        // Walk the smaller set, probe the larger one.
        let (small, large) = if self.len() <= other.len() {
            (self, other)
        } else {
            (other, self)
        };
        small.iter().filter(|w| large.contains(w)).count()
    }

    /// Words present in both sets, sorted, at most `limit` of them.
    pub fn common_with(&self, other: &WordSet, limit: usize) -> Vec<String> {
        self.words
            .intersection(&other.words)
            .take(limit)
            .cloned()
            .collect()
    }

    /// Words present in `self` but not in `other`, sorted, at most `limit` of them.
    pub fn difference_from(&self, other: &WordSet, limit: usize) -> Vec<String> {
        self.words
            .difference(&other.words)
            .take(limit)
            .cloned()
            .collect()
    }
}
