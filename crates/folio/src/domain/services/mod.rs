//! Domain Services
//!
//! The FAQ engine: matcher picks a topic, renderer fills its template,
//! dispatcher ties them together.

mod dispatcher;
pub mod matcher;
pub mod renderer;

pub use dispatcher::FaqResponder;
pub use matcher::{match_topic, topics};
pub use renderer::{render, DEFAULT_RESPONSE};
