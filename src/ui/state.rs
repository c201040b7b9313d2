//! Presenter state and its fetch lifecycle transitions.

use chrono::{DateTime, Utc};

use crate::users::{User, UsersResponse};

/// Message shown to the user when a fetch fails, whatever the cause.
pub const FETCH_ERROR_MESSAGE: &str = "Failed to fetch data from API. Please try again.";

/// Everything the table view needs to render.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UiState {
    /// Users from the last successful fetch.
    pub users: Vec<User>,
    /// A fetch is in flight.
    pub loading: bool,
    /// User-facing error from the last failed fetch.
    pub error: Option<String>,
    /// Server timestamp of the last successful fetch.
    pub last_updated: Option<String>,
}

impl UiState {
    /// Fetch started: mark loading and clear any previous error.
    pub fn begin_fetch(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Fetch succeeded: replace users and record the server timestamp.
    pub fn apply_success(&mut self, response: UsersResponse) {
        self.users = response.data;
        self.last_updated = Some(response.timestamp);
        self.loading = false;
    }

    /// Fetch failed: keep the current users and surface the generic message.
    pub fn apply_failure(&mut self) {
        self.error = Some(FETCH_ERROR_MESSAGE.to_string());
        self.loading = false;
    }

    /// `last_updated` parsed as a UTC instant, if it is valid RFC 3339.
    pub fn last_updated_at(&self) -> Option<DateTime<Utc>> {
        let raw = self.last_updated.as_deref()?;
        DateTime::parse_from_rfc3339(raw)
            .ok()
            .map(|ts| ts.with_timezone(&Utc))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::users::mock_users;
    use pretty_assertions::assert_eq;

    fn response(users: Vec<User>) -> UsersResponse {
        UsersResponse {
            success: true,
            message: "Users fetched successfully".to_string(),
            data: users,
            timestamp: "2026-10-18T09:01:02.345Z".to_string(),
        }
    }

    #[test]
    fn begin_fetch_sets_loading_and_clears_error() {
        let mut state = UiState {
            error: Some("old".to_string()),
            ..UiState::default()
        };
        state.begin_fetch();
        assert!(state.loading);
        assert_eq!(state.error, None);
    }

    #[test]
    fn success_stores_users_and_timestamp() {
        let mut state = UiState::default();
        state.begin_fetch();
        state.apply_success(response(mock_users().to_vec()));

        assert!(!state.loading);
        assert_eq!(state.users.len(), 6);
        assert_eq!(state.last_updated.as_deref(), Some("2026-10-18T09:01:02.345Z"));
        assert_eq!(state.error, None);
    }

    #[test]
    fn failure_keeps_previous_users() {
        let mut state = UiState::default();
        state.apply_success(response(mock_users()[..3].to_vec()));
        let before = state.users.clone();

        state.begin_fetch();
        state.apply_failure();

        assert!(!state.loading);
        assert_eq!(state.error.as_deref(), Some(FETCH_ERROR_MESSAGE));
        assert_eq!(state.users, before);
        assert_eq!(state.last_updated.as_deref(), Some("2026-10-18T09:01:02.345Z"));
    }

    #[test]
    fn last_updated_at_parses_iso_timestamp() {
        let mut state = UiState::default();
        assert_eq!(state.last_updated_at(), None);

        state.apply_success(response(Vec::new()));
        let ts = state.last_updated_at().unwrap();
        assert_eq!(ts.timestamp_subsec_millis(), 345);

        state.last_updated = Some("yesterday".to_string());
        assert_eq!(state.last_updated_at(), None);
    }
}
