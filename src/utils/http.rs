use std::time::Duration;

use log::{debug, error};
use reqwest::header::ACCEPT;
use reqwest::{Client, StatusCode};
use url::Url;

/// Timeout for SIP008 document requests in seconds
const DEFAULT_TIMEOUT: u64 = 10;

/// Request settings for retrieving a SIP008 document.
///
/// Certificate and hostname verification are always enabled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchPolicy {
    pub accept: String,
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for FetchPolicy {
    fn default() -> Self {
        FetchPolicy {
            accept: "application/json".to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT),
            user_agent: concat!("ssconf/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

/// Retrieves the body of a validated HTTPS URL.
///
/// Errors are plain messages; callers wrap them into their own error type.
pub trait DocumentFetcher {
    fn fetch(&self, url: &Url, policy: &FetchPolicy) -> Result<String, String>;
}

/// Fetcher backed by `reqwest` with rustls certificate verification.
#[derive(Debug, Clone, Copy, Default)]
pub struct HttpFetcher;

impl HttpFetcher {
    /// Makes a GET request to the specified URL
    ///
    /// # Returns
    /// * `Ok(String)` - The response body as a string
    /// * `Err(String)` - Error message if the request failed
    pub async fn fetch_async(&self, url: &Url, policy: &FetchPolicy) -> Result<String, String> {
        let client = match Client::builder()
            .timeout(policy.timeout)
            .user_agent(policy.user_agent.as_str())
            .https_only(true)
            .build()
        {
            Ok(client) => client,
            Err(e) => {
                return Err(format!("Failed to build HTTP client: {}", e));
            }
        };

        debug!("GET {} (timeout {:?})", url, policy.timeout);
        let response = match client
            .get(url.clone())
            .header(ACCEPT, policy.accept.as_str())
            .send()
            .await
        {
            Ok(resp) => resp,
            Err(e) => {
                return Err(format!("Failed to send request: {}", e));
            }
        };

        if response.status() != StatusCode::OK {
            return Err(format!("HTTP error: {}", response.status()));
        }

        match response.text().await {
            Ok(body) => Ok(body),
            Err(e) => Err(format!("Failed to read response body: {}", e)),
        }
    }
}

impl DocumentFetcher for HttpFetcher {
    /// Runs [`HttpFetcher::fetch_async`] on a current-thread tokio runtime.
    fn fetch(&self, url: &Url, policy: &FetchPolicy) -> Result<String, String> {
        let rt = match tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
        {
            Ok(rt) => rt,
            Err(e) => {
                error!("Failed to create tokio runtime: {}", e);
                return Err(format!("Failed to create tokio runtime: {}", e));
            }
        };

        rt.block_on(self.fetch_async(url, policy))
    }
}
