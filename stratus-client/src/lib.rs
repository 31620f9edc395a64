//! Stratus HTTP Client
//!
//! A simple, type-safe HTTP client for the Stratus asynchronous-task API.
//!
//! Long-running operations on the platform are exposed as tasks: the server
//! hands back a task id immediately and the client checks on the task until
//! it reaches a terminal state.
//!
//! # Example
//!
//! ```no_run
//! use std::time::Duration;
//! use stratus_client::StratusClient;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = StratusClient::new("http://localhost:8080");
//!
//!     // Block until the task completes, then keep its raw payload.
//!     let payload = client
//!         .poll_task("0e12f8a4", Duration::from_millis(500))
//!         .await?;
//!
//!     if let Some(payload) = payload {
//!         println!("task result: {}", payload);
//!     }
//!     Ok(())
//! }
//! ```

pub mod error;
mod tasks;

// Re-export commonly used types
pub use error::{ClientError, ErrorResponse, Result};
pub use stratus_core::domain::task::{Task, TaskStatus};
pub use stratus_core::dto::response::ApiError;
pub use tasks::TaskService;

use reqwest::Client;
use serde::de::DeserializeOwned;
use stratus_core::dto::response::ResponseEnvelope;

/// HTTP client for the Stratus task API
///
/// The client holds a base URL and a reqwest client, and exposes the task
/// operations: a single lookup and a blocking poll. Each call is independent;
/// the client is cheap to clone and safe to share between tasks.
#[derive(Debug, Clone)]
pub struct StratusClient {
    /// Base URL of the API (e.g., "http://localhost:8080")
    base_url: String,
    /// HTTP client instance
    client: Client,
}

impl StratusClient {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - The base URL of the API (e.g., "http://localhost:8080")
    ///
    /// # Example
    /// ```
    /// use stratus_client::StratusClient;
    ///
    /// let client = StratusClient::new("http://localhost:8080");
    /// ```
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    /// Create a new client with a custom HTTP client
    ///
    /// This allows you to configure timeouts, proxies, TLS settings, etc.
    ///
    /// # Arguments
    /// * `base_url` - The base URL of the API
    /// * `client` - A configured reqwest Client
    ///
    /// # Example
    /// ```
    /// use stratus_client::StratusClient;
    /// use reqwest::Client;
    /// use std::time::Duration;
    ///
    /// let http_client = Client::builder()
    ///     .timeout(Duration::from_secs(30))
    ///     .build()
    ///     .unwrap();
    ///
    /// let client = StratusClient::with_client("http://localhost:8080", http_client);
    /// ```
    pub fn with_client(base_url: impl Into<String>, client: Client) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        }
    }

    /// Get the base URL of the API
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // =============================================================================
    // Response Handling
    // =============================================================================

    /// Handle an API response and decode the envelope's payload
    ///
    /// Application error entries take priority over any payload the envelope
    /// also carries; a failure status without a decodable envelope is
    /// reported with the raw body.
    async fn handle_envelope<T: DeserializeOwned>(&self, response: reqwest::Response) -> Result<T> {
        let status = response.status();
        let body = response.bytes().await?;

        let envelope = match serde_json::from_slice::<ResponseEnvelope>(&body) {
            Ok(envelope) => envelope,
            Err(_) if !status.is_success() => {
                return Err(ClientError::UnexpectedResponse {
                    status: status.as_u16(),
                    body: String::from_utf8_lossy(&body).into_owned(),
                });
            }
            Err(e) => {
                return Err(ClientError::ParseError(format!(
                    "failed to parse response envelope: {}",
                    e
                )));
            }
        };

        if !envelope.errors.is_empty() {
            return Err(ClientError::Api(ErrorResponse {
                status: status.as_u16(),
                errors: envelope.errors,
            }));
        }

        if !status.is_success() {
            return Err(ClientError::UnexpectedResponse {
                status: status.as_u16(),
                body: String::from_utf8_lossy(&body).into_owned(),
            });
        }

        let data = envelope.data.ok_or_else(|| {
            ClientError::ParseError("response envelope carries no data".to_string())
        })?;

        serde_json::from_str(data.get())
            .map_err(|e| ClientError::ParseError(format!("failed to decode payload: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = StratusClient::new("http://localhost:8080");
        assert_eq!(client.base_url(), "http://localhost:8080");
    }

    #[test]
    fn test_client_trims_trailing_slash() {
        let client = StratusClient::new("http://localhost:8080/");
        assert_eq!(client.base_url(), "http://localhost:8080");
    }

    #[test]
    fn test_client_with_custom_client() {
        let http_client = Client::new();
        let client = StratusClient::with_client("http://localhost:8080", http_client);
        assert_eq!(client.base_url(), "http://localhost:8080");
    }
}
