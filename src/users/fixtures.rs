//! Static mock users served by the directory API.

use once_cell::sync::Lazy;

use super::types::{Role, Status, User};

const AVATAR_BASE: &str = "https://api.dicebear.com/7.x/avataaars/svg?seed=";

static MOCK_USERS: Lazy<Vec<User>> = Lazy::new(|| {
    vec![
        user(1, "Sarah Chen", "sarah.chen@example.com", Role::Admin, Status::Active, "Sarah"),
        user(2, "Marcus Johnson", "marcus.j@example.com", Role::Developer, Status::Active, "Marcus"),
        user(3, "Emily Rodriguez", "emily.r@example.com", Role::Designer, Status::Active, "Emily"),
        user(4, "David Kim", "david.kim@example.com", Role::Developer, Status::Pending, "David"),
        user(5, "Lisa Thompson", "lisa.t@example.com", Role::Manager, Status::Active, "Lisa"),
        user(6, "James Wilson", "james.w@example.com", Role::Developer, Status::Inactive, "James"),
    ]
});

fn user(id: u32, name: &str, email: &str, role: Role, status: Status, seed: &str) -> User {
    User {
        id,
        name: name.to_string(),
        email: email.to_string(),
        role: role.to_string(),
        status: status.to_string(),
        avatar: format!("{AVATAR_BASE}{seed}"),
    }
}

/// The fixed user list, in id order.
pub fn mock_users() -> &'static [User] {
    &MOCK_USERS
}
