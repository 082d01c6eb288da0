pub mod normalize;
pub mod sentences;

pub use normalize::{normalize, NormalizedText, WordSet};
pub use sentences::{segments, split_sentences, word_count, SentenceSegment};
