//! Domain Entities
//!
//! Pure domain models without infrastructure dependencies.
//! - KnowledgeBase: profile facts answers are rendered from
//! - Query: one incoming chat message

mod builtin;
mod knowledge;
mod query;

pub use knowledge::*;
pub use query::*;
