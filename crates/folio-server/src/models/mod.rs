//! Folio API Models
//!
//! - Chat: widget request/response bodies

mod chat;

pub use chat::*;
