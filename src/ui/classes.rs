//! Display class mapping for status and role labels.
//!
//! Both functions are total and case-insensitive: any input yields a class,
//! unknown labels yield the fallback.

use crate::users::{Role, Status};

/// CSS class for a status label. Unknown statuses map to `""`.
pub fn status_class(status: &str) -> &'static str {
    Status::from_label(status).css_class()
}

/// CSS class for a role badge. Unknown roles map to `"role-default"`.
pub fn role_class(role: &str) -> &'static str {
    Role::from_label(role).css_class()
}
