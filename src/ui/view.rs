//! Rendering of the users table from [`UiState`].

use super::classes::{role_class, status_class};
use super::state::UiState;
use crate::users::User;

/// Render the single-page users table as an HTML fragment.
pub fn render_html(state: &UiState) -> String {
    let mut out = String::from("<div class=\"user-directory\">\n");
    out.push_str("  <header><h1>User Directory</h1></header>\n");

    if state.loading {
        out.push_str("  <div class=\"loading\">Loading users...</div>\n");
    }

    if let Some(error) = &state.error {
        out.push_str(&format!(
            "  <div class=\"error\" role=\"alert\">{}</div>\n",
            escape(error)
        ));
    }

    if state.users.is_empty() {
        if !state.loading && state.error.is_none() {
            out.push_str("  <p class=\"empty\">No users found.</p>\n");
        }
    } else {
        out.push_str("  <table class=\"users-table\">\n");
        out.push_str("    <thead><tr><th></th><th>Name</th><th>Email</th><th>Role</th><th>Status</th></tr></thead>\n");
        out.push_str("    <tbody>\n");
        for user in &state.users {
            out.push_str(&render_row(user));
        }
        out.push_str("    </tbody>\n");
        out.push_str("  </table>\n");
    }

    if let Some(ts) = &state.last_updated {
        out.push_str(&format!(
            "  <footer class=\"last-updated\">Last updated: {}</footer>\n",
            escape(ts)
        ));
    }

    out.push_str("</div>\n");
    out
}

fn render_row(user: &User) -> String {
    let status_cell = match status_class(&user.status) {
        "" => "<span>".to_string(),
        class => format!("<span class=\"{}\">", class),
    };

    format!(
        "      <tr data-id=\"{id}\"><td><img class=\"avatar\" src=\"{avatar}\" alt=\"{name}\"></td>\
         <td>{name}</td><td>{email}</td>\
         <td><span class=\"role-badge {role_class}\">{role}</span></td>\
         <td>{status_cell}{status}</span></td></tr>\n",
        id = user.id,
        avatar = escape(&user.avatar),
        name = escape(&user.name),
        email = escape(&user.email),
        role_class = role_class(&user.role),
        role = escape(&user.role),
        status_cell = status_cell,
        status = escape(&user.status),
    )
}

/// Plain-text summary of the state, one user per line.
pub fn render_text(state: &UiState) -> String {
    let mut out = String::new();

    if state.loading {
        out.push_str("Loading users...\n");
    }
    if let Some(error) = &state.error {
        out.push_str(&format!("Error: {}\n", error));
    }

    for user in &state.users {
        out.push_str(&format!(
            "{:>3}  {:<20} {:<28} {:<10} {}\n",
            user.id, user.name, user.email, user.role, user.status
        ));
    }

    if let Some(ts) = &state.last_updated {
        out.push_str(&format!("Last updated: {}\n", ts));
    }

    out
}

fn escape(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
