//! Mock users source for unit testing.
//!
//! Serves users from memory without making network requests, with
//! switchable failure and optional latency.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;

use crate::error::ClientError;
use crate::users::{mock_users, User, UsersResponse};

use super::client::UsersSource;

/// Timestamp reported by every mock response.
pub const MOCK_TIMESTAMP: &str = "2026-10-18T09:01:02.345Z";

/// Configuration for mock source behavior.
#[derive(Debug, Clone, Default)]
pub struct MockConfig {
    /// Whether requests fail from the start.
    pub fail: bool,
    /// Simulated latency in milliseconds.
    pub latency_ms: u64,
}

/// In-memory users source.
#[derive(Debug, Clone)]
pub struct MockUsersClient {
    /// Simulated latency in milliseconds.
    latency_ms: u64,
    /// Whether requests currently fail.
    fail: Arc<AtomicBool>,
    /// Users returned on success.
    users: Arc<Mutex<Vec<User>>>,
    /// Number of fetches attempted.
    calls: Arc<AtomicUsize>,
}

impl MockUsersClient {
    /// Create a mock serving the fixture users.
    pub fn new() -> Self {
        Self::with_config(MockConfig::default())
    }

    /// Create a mock with custom configuration.
    pub fn with_config(config: MockConfig) -> Self {
        Self {
            latency_ms: config.latency_ms,
            fail: Arc::new(AtomicBool::new(config.fail)),
            users: Arc::new(Mutex::new(mock_users().to_vec())),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Replace the users returned on success.
    pub fn set_users(&self, users: Vec<User>) {
        *self.users.lock().unwrap_or_else(|e| e.into_inner()) = users;
    }

    /// Switch failure mode on or off.
    pub fn set_failing(&self, fail: bool) {
        self.fail.store(fail, Ordering::SeqCst);
    }

    /// Number of fetches attempted so far.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Default for MockUsersClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UsersSource for MockUsersClient {
    async fn fetch_users(&self) -> Result<UsersResponse, ClientError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if self.latency_ms > 0 {
            tokio::time::sleep(Duration::from_millis(self.latency_ms)).await;
        }

        if self.fail.load(Ordering::SeqCst) {
            return Err(ClientError::Status {
                status: 503,
                url: "mock://api/users".to_string(),
            });
        }

        let data = self.users.lock().unwrap_or_else(|e| e.into_inner()).clone();
        Ok(UsersResponse {
            success: true,
            message: "Users fetched successfully".to_string(),
            data,
            timestamp: MOCK_TIMESTAMP.to_string(),
        })
    }
}
