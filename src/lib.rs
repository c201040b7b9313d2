//! Mock user directory.
//!
//! Two components connected only by HTTP:
//!
//! ```text
//! GET /api/users  ──►  Router  ──►  {success, message, data: [User], timestamp}
//!                                          │
//! Presenter  ◄─────────────────────────────┘
//!   loading → users | error
//! ```
//!
//! # Modules
//!
//! - [`config`]: Configuration loading from environment
//! - [`error`]: Unified error types
//! - [`users`]: User types and the static fixture list
//! - [`api`]: HTTP router for health and users
//! - [`ui`]: Presenter, users sources and table rendering
//! - [`metrics`]: Prometheus metrics
//! - [`utils`]: Utility functions

pub mod api;
pub mod config;
pub mod error;
pub mod metrics;
pub mod ui;
pub mod users;
pub mod utils;

pub use config::Config;
pub use error::{AppError, ClientError, Result};
