//! User records module.
//!
//! This module handles:
//! - User, role and status types
//! - The static fixture list served by the API

pub mod fixtures;
pub mod types;

pub use fixtures::mock_users;
pub use types::{Role, Status, User, UsersResponse};
