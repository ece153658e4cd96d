//! `api` crate — HTTP REST layer over the store and the engine.
//!
//! Routes:
//!   GET    /api/workflows              — list by owner (`?userId=`)
//!   POST   /api/workflows              — create
//!   GET    /api/workflows/{id}         — fetch
//!   PUT    /api/workflows/{id}         — update
//!   DELETE /api/workflows/{id}         — delete
//!   POST   /api/workflows/{id}/execute — run and return the report
//!   GET    /api/strategies             — legacy export
//!   POST   /api/strategies             — legacy import
//!
//! The engine stays transport-agnostic: handlers fetch an owned workflow
//! snapshot from the store, invoke `execute`, and serialize the report.

pub mod handlers;

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use engine::WorkflowExecutor;
use store::WorkflowStore;

/// Shared application state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<WorkflowStore>,
    pub executor: Arc<WorkflowExecutor>,
}

/// Build the full application router.
pub fn router(state: AppState) -> Router {
    // The builder UI may be served from any origin.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route(
            "/api/workflows",
            get(handlers::workflows::list).post(handlers::workflows::create),
        )
        .route(
            "/api/workflows/:id",
            get(handlers::workflows::get)
                .put(handlers::workflows::update)
                .delete(handlers::workflows::delete),
        )
        .route(
            "/api/workflows/:id/execute",
            post(handlers::executions::execute),
        )
        .route(
            "/api/strategies",
            get(handlers::legacy::export).post(handlers::legacy::import),
        )
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Bind and serve until the process is stopped.
pub async fn serve(bind: &str, state: AppState) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind(bind).await?;
    info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, router(state)).await
}
