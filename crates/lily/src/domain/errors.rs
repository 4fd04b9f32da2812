//! Domain Errors
//!
//! Error types for summarization operations.

use thiserror::Error;

/// Failures raised by the external summarization provider.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProviderError {
    #[error("Request failed: {0}")]
    Request(String),

    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("Rate limited by the provider")]
    RateLimited,

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Provider returned an empty completion")]
    EmptyCompletion,
}

/// Errors surfaced to the HTTP caller.
///
/// The display strings are part of the API contract: clients match on them,
/// so they must stay byte-for-byte stable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SummarizeError {
    #[error("OpenAI API Key is not configured in the environment.")]
    ApiKeyMissing,

    #[error("An error occurred during summarization: {0}")]
    Provider(#[from] ProviderError),
}
