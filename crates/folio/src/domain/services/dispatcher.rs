//! FaqResponder - Query in, answer out
//!
//! Stateless: each call matches and renders independently. Safe to share
//! across request handlers since the knowledge base is never mutated.

use std::sync::Arc;

use serde_json::Value;

use crate::domain::entities::{KnowledgeBase, Query};
use crate::domain::errors::DomainError;
use crate::domain::value_objects::{Topic, TopicMatch};

use super::{matcher, renderer};

#[derive(Debug, Clone)]
pub struct FaqResponder {
    knowledge: Arc<KnowledgeBase>,
}

impl FaqResponder {
    pub fn new(knowledge: Arc<KnowledgeBase>) -> Self {
        Self { knowledge }
    }

    /// Topic a text would be answered with
    pub fn classify(&self, text: &str) -> TopicMatch {
        matcher::match_topic(text)
    }

    /// Topics in precedence order
    pub fn topics(&self) -> Vec<Topic> {
        matcher::topics()
    }

    pub fn respond(&self, text: &str) -> Result<String, DomainError> {
        renderer::render(self.classify(text), &self.knowledge)
    }

    pub fn respond_to(&self, query: &Query) -> Result<String, DomainError> {
        self.respond(query.text())
    }

    /// Validate a `{ "message": string }` payload, then answer it
    pub fn respond_json(&self, payload: &Value) -> Result<String, DomainError> {
        let query = Query::from_json(payload)?;
        self.respond_to(&query)
    }
}
