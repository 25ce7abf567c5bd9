//! Value Objects
//!
//! Immutable objects defined by their attributes rather than identity.

mod skill_category;
mod topic;

pub use skill_category::*;
pub use topic::*;
