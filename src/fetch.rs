use std::time::Duration;

use log::debug;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, USER_AGENT};
use reqwest::Client;

use crate::config::AppConfig;
use crate::error::ImportError;

/// Fetches the raw HTML of a target page. One attempt, no retries; the
/// timeout is always bounded because the target host is untrusted.
pub struct PageFetcher {
    client: Client,
}

impl PageFetcher {
    pub fn new(config: &AppConfig) -> Result<Self, reqwest::Error> {
        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8"),
        );
        if let Ok(ua) = HeaderValue::from_str(&config.user_agent) {
            headers.insert(USER_AGENT, ua);
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(config.fetch_timeout))
            .default_headers(headers)
            .build()?;

        Ok(Self { client })
    }

    /// Fetch the page body as text. A URL without a scheme is assumed https.
    /// Returns the resolved URL alongside the body.
    pub async fn fetch(&self, url: &str) -> Result<(String, String), ImportError> {
        let fetch_url = resolve_url(url);
        debug!("Fetching {}", fetch_url);

        let response = self.client.get(&fetch_url).send().await?;
        let body = response.text().await?;

        Ok((fetch_url, body))
    }
}

/// Default the scheme to https when the caller left it out.
pub fn resolve_url(url: &str) -> String {
    if url.starts_with("http") {
        url.to_string()
    } else {
        format!("https://{url}")
    }
}
