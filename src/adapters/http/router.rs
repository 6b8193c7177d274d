//! Top-level API router assembly.
//!
//! Every route under `/api` sits behind the bearer-token middleware, so
//! an invalid credential is rejected before any business logic runs.

use axum::{middleware, routing::get, Json, Router};

use super::middleware::{auth_middleware, AuthState};
use super::set::{set_routes, tag_routes, SetHandlers};

/// Builds the full application router.
pub fn api_router(handlers: SetHandlers, verifier: AuthState) -> Router {
    Router::new()
        .nest("/api/sets", set_routes(handlers.clone()))
        .nest("/api/tags", tag_routes(handlers))
        .route("/health", get(health))
        .layer(middleware::from_fn_with_state(verifier, auth_middleware))
}

/// GET /health - liveness probe, no auth required.
async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}
