use std::time::Duration;

use anyhow::{Context, Result};
use tracing::info;

use crate::config::ScraperConfig;

/// Fetches the prediction site's front page. One blocking GET, no retries;
/// a non-success status is fatal and surfaces to the caller.
pub struct FixtureScraper {
    client: reqwest::blocking::Client,
    url: String,
}

impl FixtureScraper {
    pub fn new(config: &ScraperConfig) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(&config.user_agent)
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            url: config.url.clone(),
        })
    }

    pub fn fetch_front_page(&self) -> Result<String> {
        info!("Fetching fixtures from {}", self.url);
        let response = self
            .client
            .get(&self.url)
            .send()
            .with_context(|| format!("Request to {} failed", self.url))?
            .error_for_status()
            .context("Fixture page returned an error status")?;
        response.text().context("Failed to read fixture page body")
    }
}
