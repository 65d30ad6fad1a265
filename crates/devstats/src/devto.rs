//! DEV API client
//!
//! One authenticated GET populates the in-memory record store for the
//! whole run. A non-success response is fatal; there are no retries.

use crate::prelude::*;
use devstats_core::article::Article;

/// Default DEV API base URL
const DEVTO_API_BASE: &str = "https://dev.to/api";

/// DEV API configuration
#[derive(Debug, Clone)]
pub struct DevtoConfig {
    pub base_url: String,
    pub api_key: String,
}

impl DevtoConfig {
    /// Build the configuration from the CLI credential
    ///
    /// The base URL defaults to the public API and can be overridden via
    /// the DEVTO_BASE_URL environment variable.
    pub fn from_env(api_key: String) -> Self {
        Self {
            base_url: std::env::var("DEVTO_BASE_URL")
                .unwrap_or_else(|_| DEVTO_API_BASE.to_string()),
            api_key,
        }
    }
}

/// Create an HTTP client with the static `api-key` header attached
pub fn create_authenticated_client(config: &DevtoConfig) -> Result<reqwest::Client> {
    use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};

    let mut api_key = HeaderValue::from_str(&config.api_key)
        .map_err(|e| eyre!("Invalid API key value: {}", e))?;
    api_key.set_sensitive(true);

    let mut headers = HeaderMap::new();
    headers.insert("api-key", api_key);
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

    reqwest::Client::builder()
        .default_headers(headers)
        .build()
        .map_err(|e| eyre!("Failed to build HTTP client: {}", e))
}

/// Fetch every published article of the authenticated user
pub async fn fetch_articles(
    client: &reqwest::Client,
    config: &DevtoConfig,
) -> Result<Vec<Article>, Error> {
    let url = format!("{}/articles/me/all", config.base_url);

    let response = client
        .get(&url)
        .send()
        .await
        .map_err(|e| Error::Network(e.to_string()))?;

    if !response.status().is_success() {
        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        return Err(Error::Api { status, body });
    }

    response
        .json()
        .await
        .map_err(|e| Error::Payload(e.to_string()))
}
