//! HTTP API handlers.

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, http::Uri, response::IntoResponse, Json};
use serde::{Deserialize, Serialize};
use tracing::debug;
use utoipa::ToSchema;

use crate::metrics;
use crate::users::{mock_users, User, UsersResponse};
use crate::utils::iso_timestamp;

/// Endpoints advertised by the 404 payload.
pub const AVAILABLE_ENDPOINTS: [&str; 2] = ["/api/users", "/api/health"];

/// Tag grouping the directory endpoints in the OpenAPI document.
pub const DIRECTORY_API_GROUP: &str = "DIRECTORY";

/// Application state shared with handlers.
///
/// Holds only immutable data, so any number of requests can read it in
/// parallel without coordination.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Users served by the users endpoint.
    pub users: Arc<[User]>,
}

impl AppState {
    /// Create app state backed by the static fixture list.
    pub fn new() -> Self {
        Self::with_users(mock_users().to_vec())
    }

    /// Create app state serving the given users.
    pub fn with_users(users: Vec<User>) -> Self {
        Self {
            users: users.into(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Always true.
    pub success: bool,
    /// "API is running".
    pub message: String,
    /// ISO-8601 time the response was built.
    pub timestamp: String,
}

/// Body returned for any unmatched path.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NotFoundResponse {
    /// Always false.
    pub success: bool,
    /// "Endpoint not found: <path>".
    pub message: String,
    /// Paths that do exist.
    pub available_endpoints: Vec<String>,
}

impl NotFoundResponse {
    /// Build the payload for a path nothing matched.
    pub fn for_path(path: &str) -> Self {
        Self {
            success: false,
            message: format!("Endpoint not found: {}", path),
            available_endpoints: AVAILABLE_ENDPOINTS.iter().map(|e| e.to_string()).collect(),
        }
    }
}

/// Health check handler - always returns 200.
#[utoipa::path(
    get,
    path = "/api/health",
    tag = DIRECTORY_API_GROUP,
    responses(
        (status = 200, description = "API is up", body = HealthResponse),
    )
)]
pub async fn health() -> impl IntoResponse {
    metrics::inc_http_requests(metrics::ROUTE_HEALTH);

    Json(HealthResponse {
        success: true,
        message: "API is running".to_string(),
        timestamp: iso_timestamp(),
    })
}

/// Users handler - returns the full user list.
#[utoipa::path(
    get,
    path = "/api/users",
    tag = DIRECTORY_API_GROUP,
    responses(
        (status = 200, description = "Users fetched successfully", body = UsersResponse),
    )
)]
pub async fn users(State(state): State<AppState>) -> impl IntoResponse {
    metrics::inc_http_requests(metrics::ROUTE_USERS);
    debug!(count = state.users.len(), "Serving users");

    Json(UsersResponse {
        success: true,
        message: "Users fetched successfully".to_string(),
        data: state.users.to_vec(),
        timestamp: iso_timestamp(),
    })
}

/// Fallback handler - 404 with the list of real endpoints.
pub async fn not_found(uri: Uri) -> impl IntoResponse {
    metrics::inc_http_requests(metrics::ROUTE_NOT_FOUND);
    debug!(path = %uri.path(), "No route matched");

    (
        StatusCode::NOT_FOUND,
        Json(NotFoundResponse::for_path(uri.path())),
    )
}
