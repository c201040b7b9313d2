//! HTTP API route definitions.

use axum::{routing::any, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use super::handlers::{health, not_found, users, AppState};

/// Create the API router.
///
/// Paths match exactly and every method is accepted; anything else falls
/// through to the 404 payload. CORS is permissive.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health endpoints
        .route("/api/health", any(health))
        .route("/health", any(health))
        // Users endpoints
        .route("/api/users", any(users))
        .route("/users", any(users))
        .fallback(not_found)
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
