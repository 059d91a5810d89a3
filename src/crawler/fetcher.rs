//! HTTP fetcher implementation
//!
//! One GET per resource, no retries. A non-success status is an error that
//! the caller propagates; the response body is decoded as UTF-8 with any
//! undecodable bytes dropped.

use crate::config::HttpConfig;
use crate::HarvestError;
use reqwest::{redirect::Policy, Client};
use std::time::Duration;

/// Builds an HTTP client with proper configuration
///
/// # Arguments
///
/// * `config` - The HTTP configuration
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
///
/// # Example
///
/// ```no_run
/// use course_harvest::config::HttpConfig;
/// use course_harvest::crawler::build_http_client;
///
/// let client = build_http_client(&HttpConfig::default()).unwrap();
/// ```
pub fn build_http_client(config: &HttpConfig) -> Result<Client, reqwest::Error> {
    let mut builder = Client::builder()
        .user_agent(config.user_agent.clone())
        .redirect(Policy::limited(10))
        .gzip(true)
        .brotli(true);

    if let Some(secs) = config.timeout_secs {
        builder = builder.timeout(Duration::from_secs(secs));
    }

    builder.build()
}

/// Fetches a URL and returns its body as text
///
/// # Arguments
///
/// * `client` - The HTTP client to use
/// * `url` - The URL to fetch
///
/// # Returns
///
/// * `Ok(String)` - The decoded body
/// * `Err(HarvestError::Fetch)` - The server answered with a non-success status
/// * `Err(HarvestError::Http)` - The request could not be completed
pub async fn fetch_text(client: &Client, url: &str) -> crate::Result<String> {
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|source| HarvestError::Http {
            url: url.to_string(),
            source,
        })?;

    let status = response.status();
    tracing::debug!("GET {} -> {}", url, status);

    if !status.is_success() {
        return Err(HarvestError::Fetch {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    let bytes = response.bytes().await.map_err(|source| HarvestError::Http {
        url: url.to_string(),
        source,
    })?;

    Ok(decode_lossy(&bytes))
}

/// Decodes bytes as UTF-8, silently dropping invalid sequences
pub fn decode_lossy(bytes: &[u8]) -> String {
    bytes.utf8_chunks().map(|chunk| chunk.valid()).collect()
}
