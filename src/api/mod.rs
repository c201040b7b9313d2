//! HTTP API module for the health and users endpoints.

pub mod handlers;
pub mod routes;

pub use handlers::{AppState, HealthResponse, NotFoundResponse, AVAILABLE_ENDPOINTS};
pub use routes::create_router;

use utoipa::OpenApi;

use crate::users::{User, UsersResponse};

/// OpenAPI document for the directory API.
#[derive(OpenApi)]
#[openapi(
    paths(handlers::health, handlers::users),
    components(schemas(HealthResponse, UsersResponse, NotFoundResponse, User)),
    tags((name = "DIRECTORY", description = "Mock user directory"))
)]
pub struct ApiDoc;
