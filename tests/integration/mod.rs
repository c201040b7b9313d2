//! Integration tests for the user directory.
//!
//! Each test binds the router on an ephemeral loopback port and talks to it
//! over real HTTP, either with reqwest directly or through the presenter.

use std::net::SocketAddr;

use pretty_assertions::assert_eq;
use serde_json::Value;
use tokio::net::TcpListener;

use user_directory::api::{create_router, AppState};
use user_directory::ui::{render_html, Presenter, UsersClient, UsersSource, FETCH_ERROR_MESSAGE};
use user_directory::users::{mock_users, UsersResponse};

/// Start the API on a random port and return its base URL.
async fn spawn_server() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr: SocketAddr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, create_router(AppState::new()))
            .await
            .unwrap();
    });

    format!("http://{}", addr)
}

/// A base URL nothing is listening on.
async fn dead_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}

#[tokio::test]
async fn test_health_over_http() {
    let base = spawn_server().await;

    let response = reqwest::get(format!("{}/api/health", base)).await.unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::OK);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "API is running");
    let ts = body["timestamp"].as_str().unwrap();
    assert!(chrono::DateTime::parse_from_rfc3339(ts).is_ok());
}

#[tokio::test]
async fn test_users_are_stable_across_requests() {
    let base = spawn_server().await;

    for path in ["/api/users", "/users", "/api/users"] {
        let body: UsersResponse = reqwest::get(format!("{}{}", base, path))
            .await
            .unwrap()
            .json()
            .await
            .unwrap();

        assert!(body.success);
        assert_eq!(body.message, "Users fetched successfully");
        assert_eq!(body.data, mock_users().to_vec());
    }
}

#[tokio::test]
async fn test_unknown_path_over_http() {
    let base = spawn_server().await;

    let response = reqwest::get(format!("{}/api/admins", base)).await.unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::NOT_FOUND);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Endpoint not found: /api/admins");
}

#[tokio::test]
async fn test_client_fetches_users() {
    let base = spawn_server().await;
    let client = UsersClient::with_base_url(&base).unwrap();

    let body = client.fetch_users().await.unwrap();
    assert_eq!(body.data.len(), 6);
}

#[tokio::test]
async fn test_presenter_end_to_end() {
    let base = spawn_server().await;
    let mut presenter = Presenter::new(UsersClient::with_base_url(&base).unwrap());

    presenter.init().await;

    let state = presenter.state();
    assert!(!state.loading);
    assert_eq!(state.error, None);
    assert_eq!(state.users, mock_users().to_vec());
    assert!(state.last_updated_at().is_some());

    let html = render_html(&state);
    assert_eq!(html.matches("<tr data-id=").count(), 6);
}

#[tokio::test]
async fn test_presenter_network_failure() {
    let base = dead_base_url().await;
    let mut presenter = Presenter::new(UsersClient::with_base_url(&base).unwrap());

    presenter.init().await;

    let state = presenter.state();
    assert!(!state.loading);
    assert_eq!(state.error.as_deref(), Some(FETCH_ERROR_MESSAGE));
    assert!(state.users.is_empty());
    assert_eq!(state.last_updated, None);
}

#[tokio::test]
async fn test_presenter_rejects_wrong_endpoint() {
    // The 404 body is not a users payload, so the presenter reports failure.
    let base = spawn_server().await;
    let mut presenter =
        Presenter::new(UsersClient::with_base_url(&format!("{}/v2", base)).unwrap());

    presenter.init().await;

    let state = presenter.state();
    assert!(!state.loading);
    assert!(state.error.is_some());
}
