//! Presenter owning the users fetch lifecycle.
//!
//! State is published through a [`tokio::sync::watch`] channel, so observers
//! see every transition (start, success, failure). `fetch_data` takes
//! `&mut self`, which keeps at most one request in flight per presenter.

use std::time::Instant;

use tokio::sync::watch;
use tracing::{error, info};

use crate::metrics;

use super::client::UsersSource;
use super::state::UiState;

/// Fetches users from a [`UsersSource`] and exposes the result as [`UiState`].
#[derive(Debug)]
pub struct Presenter<S> {
    source: S,
    state: watch::Sender<UiState>,
}

impl<S: UsersSource> Presenter<S> {
    /// Create an idle presenter with empty state.
    pub fn new(source: S) -> Self {
        let (state, _) = watch::channel(UiState::default());
        Self { source, state }
    }

    /// Initial load. Issues exactly one fetch.
    pub async fn init(&mut self) {
        self.fetch_data().await;
    }

    /// Fetch users once. Also the manual recovery path after a failure.
    pub async fn fetch_data(&mut self) {
        self.state.send_modify(UiState::begin_fetch);
        let start = Instant::now();

        match self.source.fetch_users().await {
            Ok(response) => {
                metrics::record_users_fetch_latency(start);
                info!(count = response.data.len(), "Users loaded");
                self.state.send_modify(|state| state.apply_success(response));
            }
            Err(e) => {
                metrics::inc_users_fetch_failures();
                error!(error = %e, "API Error");
                self.state.send_modify(UiState::apply_failure);
            }
        }
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> UiState {
        self.state.borrow().clone()
    }

    /// Observe state transitions.
    pub fn subscribe(&self) -> watch::Receiver<UiState> {
        self.state.subscribe()
    }

    /// The underlying users source.
    pub fn source(&self) -> &S {
        &self.source
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::mock::{MockConfig, MockUsersClient, MOCK_TIMESTAMP};
    use crate::ui::state::FETCH_ERROR_MESSAGE;
    use crate::users::mock_users;
    use pretty_assertions::assert_eq;

    #[test]
    fn new_presenter_is_idle() {
        let presenter = Presenter::new(MockUsersClient::new());
        assert_eq!(presenter.state(), UiState::default());
        assert_eq!(presenter.source().call_count(), 0);
    }

    #[tokio::test]
    async fn init_loads_users() {
        let mut presenter = Presenter::new(MockUsersClient::new());
        presenter.init().await;

        let state = presenter.state();
        assert!(!state.loading);
        assert_eq!(state.error, None);
        assert_eq!(state.users, mock_users().to_vec());
        assert_eq!(state.last_updated.as_deref(), Some(MOCK_TIMESTAMP));
        assert_eq!(presenter.source().call_count(), 1);
    }

    #[tokio::test]
    async fn failure_sets_error_and_keeps_empty_users() {
        let source = MockUsersClient::with_config(MockConfig {
            fail: true,
            ..Default::default()
        });
        let mut presenter = Presenter::new(source);
        presenter.init().await;

        let state = presenter.state();
        assert!(!state.loading);
        assert_eq!(state.error.as_deref(), Some(FETCH_ERROR_MESSAGE));
        assert!(state.users.is_empty());
        assert_eq!(state.last_updated, None);
    }

    #[tokio::test]
    async fn failure_after_success_keeps_previous_users() {
        let mut presenter = Presenter::new(MockUsersClient::new());
        presenter.init().await;
        let before = presenter.state();

        presenter.source().set_failing(true);
        presenter.fetch_data().await;

        let after = presenter.state();
        assert!(!after.loading);
        assert!(after.error.as_deref().is_some_and(|e| !e.is_empty()));
        assert_eq!(after.users, before.users);
        assert_eq!(after.last_updated, before.last_updated);
    }

    #[tokio::test]
    async fn refetch_recovers_and_clears_error() {
        let source = MockUsersClient::with_config(MockConfig {
            fail: true,
            ..Default::default()
        });
        let mut presenter = Presenter::new(source);
        presenter.init().await;
        assert!(presenter.state().error.is_some());

        presenter.source().set_failing(false);
        presenter.fetch_data().await;

        let state = presenter.state();
        assert_eq!(state.error, None);
        assert_eq!(state.users.len(), 6);
        assert_eq!(presenter.source().call_count(), 2);
    }

    #[tokio::test]
    async fn observers_see_loading_while_in_flight() {
        let source = MockUsersClient::with_config(MockConfig {
            latency_ms: 20,
            ..Default::default()
        });
        let mut presenter = Presenter::new(source);
        let mut rx = presenter.subscribe();

        let watcher = async {
            rx.changed().await.unwrap();
            let loading = rx.borrow_and_update().loading;
            rx.changed().await.unwrap();
            let done = rx.borrow_and_update().clone();
            (loading, done)
        };

        let ((), (saw_loading, done)) = tokio::join!(presenter.fetch_data(), watcher);

        assert!(saw_loading);
        assert!(!done.loading);
        assert_eq!(done.users.len(), 6);
    }
}
