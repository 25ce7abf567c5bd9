//! Knowledge Source Port
//!
//! Where the knowledge base comes from at startup.

use crate::domain::entities::KnowledgeBase;
use crate::domain::errors::DomainError;

/// Loads a validated knowledge base. Errors here are `Configuration` errors
/// and should abort startup.
pub trait KnowledgeSource: Send + Sync {
    fn load(&self) -> Result<KnowledgeBase, DomainError>;

    /// Human readable origin, for startup logs
    fn describe(&self) -> String;
}

/// The profile compiled into the library
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinKnowledge;

impl KnowledgeSource for BuiltinKnowledge {
    fn load(&self) -> Result<KnowledgeBase, DomainError> {
        KnowledgeBase::builtin()
    }

    fn describe(&self) -> String {
        "built-in profile".to_string()
    }
}
