//! Target page HTTP client.

use reqwest::Client;
use url::Url;

use crate::error::{Error, Result};

/// Fetches the HTML of the target page.
///
/// The client carries no request timeout; a slow server blocks the run.
pub struct PageFetcher {
    client: Client,
}

impl PageFetcher {
    /// Create a new page fetcher.
    pub fn new(user_agent: &str) -> Result<Self> {
        let client = Client::builder()
            .user_agent(user_agent)
            .build()
            .map_err(|e| Error::Fetch(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client })
    }

    /// Fetch the page body as text.
    pub async fn fetch(&self, url: &Url) -> Result<String> {
        tracing::debug!("GET {}", url);

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| {
                if e.is_connect() {
                    Error::Fetch(format!("{}: connection failed: {}", url, e))
                } else {
                    Error::Fetch(format!("{}: {}", url, e))
                }
            })?;

        let status = response.status();
        tracing::debug!("Response status: {}", status);

        if !status.is_success() {
            return Err(Error::Fetch(format!("{}: HTTP {}", url, status)));
        }

        let body = response
            .text()
            .await
            .map_err(|e| Error::Parse(format!("Failed to read body of {}: {}", url, e)))?;
        tracing::debug!("Page body length: {} bytes", body.len());

        Ok(body)
    }
}
