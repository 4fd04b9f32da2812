//! Domain Layer
//!
//! Pure domain logic without infrastructure dependencies.

pub mod errors;
pub mod prompt;
pub mod summary;

// Re-exports for convenience
pub use errors::*;
pub use prompt::*;
pub use summary::*;
