//! Folio Domain Library
//!
//! Rule-based FAQ responder behind the portfolio chat widget.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain/`): Pure business entities and logic
//!   - `entities/`: KnowledgeBase and Query
//!   - `value_objects/`: Topic, TopicMatch, SkillCategory
//!   - `services/`: Matcher, Renderer and the `FaqResponder` dispatcher
//!   - `errors/`: Domain-specific error types
//!
//! - **Ports** (`ports/`): Abstract interfaces (traits)
//!   - `KnowledgeSource`: where the knowledge base is loaded from
//!
//! - **Adapters** (`adapters/`): Port implementations
//!   - `TomlKnowledgeFile`: knowledge base read from a TOML file
//!
//! # Usage
//!
//! ```rust
//! use std::sync::Arc;
//! use folio::{FaqResponder, KnowledgeBase};
//!
//! let kb = KnowledgeBase::builtin().expect("built-in profile is valid");
//! let responder = FaqResponder::new(Arc::new(kb));
//! let answer = responder.respond("what frontend skills do you know").unwrap();
//! assert!(answer.contains("React"));
//! ```

pub mod adapters;
pub mod domain;
pub mod ports;

// Re-export commonly used types
pub use domain::{
    ContactChannel, DomainError, Education, Experience, FaqResponder, KnowledgeBase,
    KnowledgeBaseData, Profile, Project, Query, SkillCategory, Topic, TopicMatch,
};
pub use adapters::{knowledge_source, TomlKnowledgeFile};
pub use ports::{BuiltinKnowledge, KnowledgeSource};
