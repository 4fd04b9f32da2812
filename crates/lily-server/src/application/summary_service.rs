//! Summarization use case.
//!
//! Checks the credential, builds the prompt, invokes the provider, and shapes
//! the result. Holds no mutable state, so concurrent calls need no
//! coordination.

use std::sync::Arc;

use lily::{build_summary_prompt, SummarizeError, Summary, SummaryProvider};

/// Application service for document summarization.
pub struct SummaryService {
    /// Absent when the provider credential was not configured at startup.
    provider: Option<Arc<dyn SummaryProvider>>,
}

impl SummaryService {
    pub fn new(provider: Option<Arc<dyn SummaryProvider>>) -> Self {
        Self { provider }
    }

    /// Summarizes `document_text` through the configured provider.
    ///
    /// With no provider configured this fails immediately with
    /// [`SummarizeError::ApiKeyMissing`]; no network call is ever attempted.
    pub async fn summarize(&self, document_text: &str) -> Result<Summary, SummarizeError> {
        let provider = self
            .provider
            .as_deref()
            .ok_or(SummarizeError::ApiKeyMissing)?;

        let prompt = build_summary_prompt(document_text);
        let summary_text = provider.summarize(&prompt).await?;

        tracing::debug!(
            provider = provider.provider_name(),
            chars = document_text.chars().count(),
            "document summarized"
        );

        Ok(Summary::new(summary_text, document_text))
    }
}
