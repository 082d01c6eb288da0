//! Deterministic document similarity and linguistic quality engine.
//!
//! `similarity-core` compares extracted plain text: binary bag-of-words
//! cosine similarity, character-level gestalt sequence matching, a
//! weighted risk classification, and a lexical diff of shared vocabulary
//! and similar sentences. Single documents can be reviewed for grammar,
//! readability and basic statistics.
//!
//! All operations are pure functions of their inputs. They never perform
//! I/O and never fail on textual input: empty, punctuation-only or
//! non-Latin text yields defined results. Identical inputs always produce
//! identical, serializable outputs.

pub mod config;
pub mod document;
pub mod quality;
pub mod similarity;
pub mod text;
pub mod types;

pub use config::{ConfigError, DetectorConfig};
pub use document::Document;
pub use quality::{QualityAnalyzer, ServiceError};
pub use similarity::{detect_similarity, SimilarityDetector};
