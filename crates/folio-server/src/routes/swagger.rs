//! OpenAPI Documentation
//!
//! Centralized API documentation using utoipa.

use utoipa::OpenApi;

use crate::models::{ChatRequest, ChatResponse, ErrorResponse, TopicsResponse};

#[derive(OpenApi)]
#[openapi(
    paths(
        super::chat::chat,
        super::chat::list_topics,
    ),
    info(
        title = "Folio API",
        version = "0.1.0",
        description = "Rule-based FAQ responder behind the portfolio chat widget.",
        license(name = "MIT"),
    ),
    servers(
        (url = "/", description = "Current server"),
    ),
    tags(
        (name = "Chat", description = "Chat - keyword-matched answers about the portfolio owner"),
    ),
    components(
        schemas(
            ChatRequest,
            ChatResponse,
            ErrorResponse,
            TopicsResponse,
        )
    )
)]
pub struct ApiDoc;
