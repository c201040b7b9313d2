//! User directory types shared by the API and the presenter.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use utoipa::ToSchema;

/// Role a user holds in the directory.
///
/// Users carry the raw label; this is parsed from it for display classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum Role {
    /// Administrator.
    Admin,
    /// Software developer.
    Developer,
    /// Product or visual designer.
    Designer,
    /// People manager.
    Manager,
    /// Any role this build does not know about.
    Other,
}

impl Role {
    /// Parse a role label case-insensitively, falling back to [`Role::Other`].
    pub fn from_label(label: &str) -> Self {
        label.parse().unwrap_or(Role::Other)
    }

    /// CSS class used for the role badge.
    pub fn css_class(&self) -> &'static str {
        match self {
            Role::Admin => "role-admin",
            Role::Developer => "role-developer",
            Role::Designer => "role-designer",
            Role::Manager => "role-manager",
            Role::Other => "role-default",
        }
    }
}

/// Account status of a user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum Status {
    /// Account in use.
    Active,
    /// Account disabled.
    Inactive,
    /// Invitation not yet accepted.
    Pending,
    /// Any status this build does not know about.
    Unknown,
}

impl Status {
    /// Parse a status label case-insensitively, falling back to [`Status::Unknown`].
    pub fn from_label(label: &str) -> Self {
        label.parse().unwrap_or(Status::Unknown)
    }

    /// CSS class used for the status cell. Unknown statuses get no class.
    pub fn css_class(&self) -> &'static str {
        match self {
            Status::Active => "status-active",
            Status::Inactive => "status-inactive",
            Status::Pending => "status-pending",
            Status::Unknown => "",
        }
    }
}

/// A single directory entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct User {
    /// Stable unique identifier.
    pub id: u32,
    /// Display name.
    pub name: String,
    /// Contact email.
    pub email: String,
    /// Role label as sent on the wire, e.g. "Admin". Open-ended.
    #[schema(example = "Admin")]
    pub role: String,
    /// Status label as sent on the wire, e.g. "Active".
    #[schema(example = "Active")]
    pub status: String,
    /// Avatar image URL.
    pub avatar: String,
}

impl User {
    /// Parsed role; unrecognised labels become [`Role::Other`].
    pub fn role_kind(&self) -> Role {
        Role::from_label(&self.role)
    }

    /// Parsed status; unrecognised labels become [`Status::Unknown`].
    pub fn status_kind(&self) -> Status {
        Status::from_label(&self.status)
    }
}

/// Body of a successful users request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UsersResponse {
    /// Always true for this payload.
    pub success: bool,
    /// Human readable summary.
    pub message: String,
    /// The user list. Missing in the body means no users.
    #[serde(default)]
    pub data: Vec<User>,
    /// ISO-8601 time the response was built.
    pub timestamp: String,
}
