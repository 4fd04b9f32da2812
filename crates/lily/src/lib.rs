//! Lily Domain Library
//!
//! Core domain types and interfaces for the Lily summarization backend.
//!
//! - **Domain Layer** (`domain/`): the summarization contract
//!   - `summary`: result of a successful summarization run
//!   - `prompt`: the fixed instructional prompt wrapping the caller's document
//!   - `errors`: domain error types
//!
//! - **Ports** (`ports/`): abstract interfaces (traits)
//!   - `provider`: the external summarization capability

pub mod domain;
pub mod ports;

// Re-export commonly used types
pub use domain::{build_summary_prompt, ProviderError, SummarizeError, Summary};
pub use ports::SummaryProvider;
