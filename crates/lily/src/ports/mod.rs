//! Ports (Interfaces)
//!
//! Abstract interfaces that define how the domain layer interacts with
//! external systems. Implementations live in the infrastructure layer.

pub mod provider;

// Re-exports
pub use provider::*;
