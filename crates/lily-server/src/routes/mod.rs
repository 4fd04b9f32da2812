//! Lily API Routes
//!
//! - `/` - liveness check
//! - `/summarize` - document summarization
//! - `/api-docs/openapi.json` - OpenAPI document

pub mod health;
pub mod summarize;
pub mod swagger;
