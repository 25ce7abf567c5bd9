use anyhow::Context;
use axum::{routing::get, Json, Router};
use serde::Serialize;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use folio::FaqResponder;

mod error;
mod models;
mod routes;

/// Application state shared across all routes
#[derive(Clone)]
pub struct AppState {
    pub responder: Arc<FaqResponder>,
}

#[derive(Serialize)]
struct HealthCheck {
    status: String,
    message: String,
    version: String,
}

async fn health_check() -> Json<HealthCheck> {
    Json(HealthCheck {
        status: "ok".to_string(),
        message: "Folio API is running - ask away".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Build the router with all routes and layers
pub fn app(state: AppState) -> Router {
    let openapi = routes::swagger::ApiDoc::openapi();

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
        .route("/health", get(health_check))
        .merge(routes::chat::router())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[shuttle_runtime::main]
async fn main(
    #[shuttle_runtime::Secrets] secrets: shuttle_runtime::SecretStore,
) -> shuttle_axum::ShuttleAxum {
    tracing::info!("💬 Folio API initializing...");

    let source = folio::knowledge_source(secrets.get("FOLIO_KNOWLEDGE_PATH"));
    let knowledge = source
        .load()
        .with_context(|| format!("Failed to load knowledge base from {}", source.describe()))?;

    tracing::info!(
        "📚 Knowledge base loaded from {} ({} projects, {} roles)",
        source.describe(),
        knowledge.projects().len(),
        knowledge.experience().len()
    );

    let state = AppState {
        responder: Arc::new(FaqResponder::new(Arc::new(knowledge))),
    };

    tracing::info!("📖 Swagger UI: /swagger-ui");
    tracing::info!("✅ Folio API ready");

    Ok(app(state).into())
}
