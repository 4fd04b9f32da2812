//! Summarization Provider Port
//!
//! Abstract interface for the external model that performs the actual
//! summarization. The service only ever sees this trait, so a test stub with
//! no network dependency can stand in for the real provider.

use async_trait::async_trait;

use crate::domain::errors::ProviderError;

/// External summarization capability.
///
/// One outbound call per invocation; implementations hold no per-request
/// state and must be shareable across concurrent requests.
#[async_trait]
pub trait SummaryProvider: Send + Sync {
    /// Sends the fully-built prompt to the model and returns its output text.
    async fn summarize(&self, prompt: &str) -> Result<String, ProviderError>;

    /// Provider name (e.g., "openai").
    fn provider_name(&self) -> &str;

    /// Model identifier the provider invokes.
    fn model_id(&self) -> &str;
}
