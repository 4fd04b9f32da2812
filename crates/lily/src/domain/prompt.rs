//! Summarization prompt.
//!
//! The instructional wrapper is fixed; only the document text varies per call.

/// Builds the summarization prompt by embedding the caller's document into
/// the fixed instructional template.
pub fn build_summary_prompt(document_text: &str) -> String {
    format!(
        "You are an expert summarizer. Based on the document provided below, \
         accurately and concisely summarize the core content. The summary should be \
         written in three paragraphs or less.\n\n\
         --- Document ---\n\
         {document_text}"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_embeds_the_document() {
        let prompt = build_summary_prompt("The quick brown fox.");
        assert!(prompt.ends_with("--- Document ---\nThe quick brown fox."));
    }

    #[test]
    fn prompt_requests_three_paragraphs_or_less() {
        let prompt = build_summary_prompt("anything");
        assert!(prompt.contains("three paragraphs or less"));
    }

    #[test]
    fn empty_document_is_forwarded_as_is() {
        let prompt = build_summary_prompt("");
        assert!(prompt.ends_with("--- Document ---\n"));
    }
}
