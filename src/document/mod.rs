pub mod document;

pub use crate::types::identifiers::TextFingerprint;
pub use document::Document;
