//! Ports (Interfaces)
//!
//! Abstract interfaces that define how the domain layer
//! interacts with external systems.
//!
//! File-backed implementations live in `adapters`.

mod knowledge_source;

// Re-exports
pub use knowledge_source::*;
