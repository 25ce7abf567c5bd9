//! Folio API Routes
//!
//! - /api/chat - FAQ answers for the chat widget
//! - /api/topics - Topics in matching order

pub mod chat;
pub mod swagger;
