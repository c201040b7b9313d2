//! Users sources: the trait the presenter fetches through and its HTTP client.

use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, instrument};

use crate::config::Config;
use crate::error::ClientError;
use crate::users::UsersResponse;

/// Anything the presenter can fetch the user list from.
#[async_trait]
pub trait UsersSource: Send + Sync {
    /// Fetch the current user list.
    async fn fetch_users(&self) -> Result<UsersResponse, ClientError>;
}

/// HTTP client for the directory API.
#[derive(Debug, Clone)]
pub struct UsersClient {
    /// HTTP client for API requests.
    http: reqwest::Client,
    /// Fully qualified users endpoint.
    users_url: String,
}

impl UsersClient {
    /// Create a client from config. No timeout unless `HTTP_TIMEOUT_MS` is set.
    pub fn new(config: &Config) -> Result<Self, ClientError> {
        let mut builder = reqwest::Client::builder();
        if let Some(ms) = config.http_timeout_ms {
            builder = builder.timeout(Duration::from_millis(ms));
        }

        Ok(Self {
            http: builder.build()?,
            users_url: config.users_url(),
        })
    }

    /// Create a client for the given base URL with default settings.
    pub fn with_base_url(base_url: &str) -> Result<Self, ClientError> {
        let config = Config {
            api_base_url: base_url.to_string(),
            ..Config::default()
        };
        Self::new(&config)
    }

    /// Get the users endpoint URL.
    pub fn users_url(&self) -> &str {
        &self.users_url
    }
}

#[async_trait]
impl UsersSource for UsersClient {
    #[instrument(skip(self), fields(url = %self.users_url))]
    async fn fetch_users(&self) -> Result<UsersResponse, ClientError> {
        let response = self.http.get(&self.users_url).send().await?;

        if !response.status().is_success() {
            return Err(ClientError::Status {
                status: response.status().as_u16(),
                url: self.users_url.clone(),
            });
        }

        let body: UsersResponse = response
            .json()
            .await
            .map_err(|e| ClientError::Decode(e.to_string()))?;

        if !body.success {
            return Err(ClientError::Rejected(body.message));
        }

        debug!(count = body.data.len(), "Fetched users");

        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_targets_users_endpoint() {
        let client = UsersClient::with_base_url("http://localhost:3000").unwrap();
        assert_eq!(client.users_url(), "http://localhost:3000/api/users");
    }

    #[test]
    fn client_accepts_timeout() {
        let config = Config {
            http_timeout_ms: Some(250),
            ..Config::default()
        };
        let client = UsersClient::new(&config).unwrap();
        assert_eq!(client.users_url(), "http://127.0.0.1:8080/api/users");
    }

    #[tokio::test]
    async fn unreachable_server_is_transport_error() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = UsersClient::with_base_url(&format!("http://{}", addr)).unwrap();
        let err = client.fetch_users().await.unwrap_err();
        assert!(matches!(err, ClientError::Transport(_)));
    }
}
