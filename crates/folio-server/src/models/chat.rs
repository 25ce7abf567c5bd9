//! Chat - request/response bodies for the widget endpoint

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Chat request. The handler validates the raw JSON itself so that a
/// non-string `message` is reported as a 400 rather than a 422.
#[derive(Debug, Deserialize, ToSchema)]
pub struct ChatRequest {
    /// Free text typed into the chat widget
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ChatResponse {
    /// Plain text answer; line breaks are literal `\n`
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// Topics in the order the responder tries them
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct TopicsResponse {
    pub topics: Vec<String>,
}
