//! UI presenter module.
//!
//! This module handles:
//! - Presenter state and fetch lifecycle
//! - Users sources (HTTP client and in-memory mock)
//! - Status/role display classes
//! - Rendering of the users table

pub mod classes;
pub mod client;
pub mod mock;
pub mod presenter;
pub mod state;
pub mod view;

pub use classes::{role_class, status_class};
pub use client::{UsersClient, UsersSource};
pub use mock::{MockConfig, MockUsersClient};
pub use presenter::Presenter;
pub use state::{UiState, FETCH_ERROR_MESSAGE};
pub use view::{render_html, render_text};
