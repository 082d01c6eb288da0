use serde::{Deserialize, Serialize};

use crate::types::identifiers::TextFingerprint;

/// A named block of extracted plain text submitted for analysis.
///
/// Content is taken as-is. Upstream extraction failures that arrive as
/// sentinel text are analyzed like any other text.
///
/// The fingerprint always matches the content: deserialization ignores any
/// stored fingerprint and hashes the content again.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "DocumentFields")]
pub struct Document {
    pub name: String,
    pub fingerprint: TextFingerprint,
    pub content: String,
}

impl Document {
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        let content = content.into();
        // Fingerprint computed on the exact content analyzed
        let fingerprint = TextFingerprint::from_content(content.as_bytes());

        Document {
            name: name.into(),
            fingerprint,
            content,
        }
    }

    /// Invalid UTF-8 sequences become U+FFFD instead of failing.
    pub fn from_utf8_lossy(name: impl Into<String>, raw_content: &[u8]) -> Self {
        Self::new(name, String::from_utf8_lossy(raw_content).into_owned())
    }
}

#[derive(Deserialize)]
struct DocumentFields {
    name: String,
    content: String,
}

impl From<DocumentFields> for Document {
    fn from(fields: DocumentFields) -> Self {
        Document::new(fields.name, fields.content)
    }
}
