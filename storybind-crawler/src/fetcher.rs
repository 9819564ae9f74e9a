use crate::error::Result;
use reqwest::Client;
use tracing::debug;
use url::Url;

pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Blocking-style HTTP access for the crawl: one request at a time, a
/// bounded wait per call, no retries. Non-2xx statuses are errors.
pub struct Fetcher {
    client: Client,
}

impl Fetcher {
    pub fn new() -> Self {
        Self::with_timeout(DEFAULT_TIMEOUT_SECS)
    }

    pub fn with_timeout(timeout_secs: u64) -> Self {
        let client = Client::builder()
            .user_agent("storybind/0.1 (https://github.com/storybind/storybind)")
            .timeout(std::time::Duration::from_secs(timeout_secs))
            .connect_timeout(std::time::Duration::from_secs(timeout_secs.div_ceil(2)))
            .redirect(reqwest::redirect::Policy::limited(5))
            .build()
            .expect("Failed to create HTTP client");

        Self { client }
    }

    /// Fetch a markup page as text.
    pub async fn fetch_text(&self, url: &Url) -> Result<String> {
        debug!("Fetching page {}", url);
        let response = self.client.get(url.as_str()).send().await?;
        let response = response.error_for_status()?;
        Ok(response.text().await?)
    }

    /// Fetch raw bytes, e.g. an image asset.
    pub async fn fetch_bytes(&self, url: &Url) -> Result<Vec<u8>> {
        debug!("Fetching bytes {}", url);
        let response = self.client.get(url.as_str()).send().await?;
        let response = response.error_for_status()?;
        Ok(response.bytes().await?.to_vec())
    }
}

impl Default for Fetcher {
    fn default() -> Self {
        Self::new()
    }
}
