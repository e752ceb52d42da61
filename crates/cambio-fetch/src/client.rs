//! HTTP transport for the Frankfurter API.

use std::time::Duration;

use cambio_types::Currencies;
use log::{debug, warn};
use reqwest::Client;
use serde_json::Value;
use thiserror::Error;

use crate::url::{BASE_URL, CURRENCIES_PATH};

/// Configuration for the API client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Request timeout.
    pub timeout: Duration,
    /// User agent string.
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            user_agent: format!("cambio/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

/// Errors that can occur while querying the API.
#[derive(Error, Debug)]
pub enum FetchError {
    /// Request could not be sent or the response could not be read.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-success status.
    #[error("API unavailable: HTTP {status}")]
    Unavailable {
        /// HTTP status code.
        status: u16,
    },
}

/// Thin client over the fixed API endpoint.
///
/// One instance performs at most two requests per invocation: the
/// supported-currency listing, then the rates query itself, serially.
/// Requests are never retried.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    config: ClientConfig,
}

impl ApiClient {
    /// Creates a new API client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(config: ClientConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(Duration::from_secs(10))
            .user_agent(&config.user_agent)
            .gzip(true)
            .build()?;
        Ok(Self { client, config })
    }

    /// Creates a client with default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn with_defaults() -> Result<Self, reqwest::Error> {
        Self::new(ClientConfig::default())
    }

    /// Returns the client configuration.
    #[must_use]
    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Fetches a query path, returning the parsed JSON body.
    ///
    /// Returns `Ok(None)` when the API aborts the response body instead
    /// of answering 404. It does that for dates whose data is not
    /// published yet, so an aborted body means "no data", not a failure.
    ///
    /// # Errors
    ///
    /// Returns an error on a non-success status or a failed request.
    pub async fn fetch(&self, path: &str) -> Result<Option<Value>, FetchError> {
        debug!("GET {BASE_URL}/{path}");
        let response = self.client.get(format!("{BASE_URL}/{path}")).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Unavailable {
                status: status.as_u16(),
            });
        }
        match response.json::<Value>().await {
            Ok(value) => Ok(Some(value)),
            Err(err) if err.is_decode() => {
                warn!("Response body aborted for {path}, treating as no data: {err}");
                Ok(None)
            }
            Err(err) => Err(err.into()),
        }
    }

    /// Fetches the supported-currency listing.
    ///
    /// # Errors
    ///
    /// Returns an error on a non-success status or a failed request.
    pub async fn currencies(&self) -> Result<Currencies, FetchError> {
        debug!("GET {BASE_URL}/{CURRENCIES_PATH}");
        let response = self
            .client
            .get(format!("{BASE_URL}/{CURRENCIES_PATH}"))
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Unavailable {
                status: status.as_u16(),
            });
        }
        Ok(response.json::<Currencies>().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_config_default() {
        let config = ClientConfig::default();
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert!(config.user_agent.starts_with("cambio/"));
    }

    #[tokio::test]
    async fn test_client_creation() {
        let client = ApiClient::with_defaults();
        assert!(client.is_ok());
    }
}
