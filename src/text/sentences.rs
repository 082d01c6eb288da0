/// A raw slice of the input between two period characters.
///
/// `index` counts every segment, including empty ones, so the first
/// segment of the text is always index 0. `char_offset` is the offset of
/// the segment's first character in the full text, counted in chars.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SentenceSegment<'a> {
    pub index: usize,
    pub raw: &'a str,
    pub char_offset: usize,
}

impl<'a> SentenceSegment<'a> {
    pub fn trimmed(&self) -> &'a str {
        self.raw.trim()
    }

    pub fn is_blank(&self) -> bool {
        self.trimmed().is_empty()
    }

    /// Char offset of the first non-whitespace character of the segment.
    pub fn trimmed_offset(&self) -> usize {
        let leading = self
            .raw
            .chars()
            .take_while(|c| c.is_whitespace())
            .count();
        self.char_offset + leading
    }
}

/// Split on the literal period, keeping blank segments and their positions.
pub fn segments(text: &str) -> Vec<SentenceSegment<'_>> {
    let mut out = Vec::new();
    let mut char_offset = 0;

    for (index, raw) in text.split('.').enumerate() {
        out.push(SentenceSegment {
            index,
            raw,
            char_offset,
        });
        // +1 for the period consumed by the split
        char_offset += raw.chars().count() + 1;
    }

    out
}

/// Sentences as used by the similarity and statistics passes:
/// split on '.', trimmed, empties dropped.
pub fn split_sentences(text: &str) -> Vec<&str> {
    text.split('.')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

/// Whitespace-delimited word count of the raw text.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_drops_blank_sentences() {
        let sentences = split_sentences("One. Two.. . Three");
        assert_eq!(sentences, vec!["One", "Two", "Three"]);
    }

    #[test]
    fn segments_track_char_offsets() {
        let segs = segments("ab. ünï. c");
        assert_eq!(segs.len(), 3);
        assert_eq!(segs[0].char_offset, 0);
        assert_eq!(segs[1].char_offset, 3);
        assert_eq!(segs[1].trimmed(), "ünï");
        assert_eq!(segs[1].trimmed_offset(), 4);
        assert_eq!(segs[2].char_offset, 8);
        assert_eq!(segs[2].trimmed_offset(), 9);
    }

    #[test]
    fn trailing_period_yields_blank_segment() {
        let segs = segments("Done.");
        assert_eq!(segs.len(), 2);
        assert!(segs[1].is_blank());
    }
}
