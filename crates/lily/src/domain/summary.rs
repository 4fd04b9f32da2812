//! Summary entity.

use serde::{Deserialize, Serialize};

/// Result of a successful summarization run.
///
/// `original_length` counts characters of the submitted document, not bytes,
/// so multibyte input reports the length the caller sees.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    /// Text produced by the provider.
    pub summary: String,
    /// Character count of the submitted document.
    pub original_length: usize,
}

impl Summary {
    pub fn new(summary: impl Into<String>, document_text: &str) -> Self {
        Self {
            summary: summary.into(),
            original_length: document_text.chars().count(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn original_length_counts_characters() {
        let summary = Summary::new("A short greeting.", "Hello world.");
        assert_eq!(summary.original_length, 12);
    }

    #[test]
    fn original_length_counts_characters_not_bytes() {
        // 5 Hangul syllables, 15 bytes in UTF-8
        let summary = Summary::new("greeting", "안녕하세요");
        assert_eq!(summary.original_length, 5);
    }

    #[test]
    fn empty_document_has_zero_length() {
        let summary = Summary::new("nothing to say", "");
        assert_eq!(summary.original_length, 0);
    }
}
