use serde::{Deserialize, Serialize};
use std::env;

pub const DEFAULT_URL: &str = "http://www.progsport.com/";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScraperConfig {
    pub url: String,
    pub user_agent: String,
    pub request_timeout_secs: u64,
    pub top_n: usize,
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_URL.to_string(),
            user_agent: "Mozilla/5.0 (compatible; ProgsportScraper/1.0)".to_string(),
            request_timeout_secs: 30,
            top_n: 5,
        }
    }
}

impl ScraperConfig {
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(url) = env::var("PROGSPORT_URL") {
            config.url = url;
        }
        if let Ok(user_agent) = env::var("SCRAPER_USER_AGENT") {
            config.user_agent = user_agent;
        }
        if let Ok(timeout) = env::var("SCRAPER_TIMEOUT_SECS").map_or(Ok(None), |t| t.parse::<u64>().map(Some)) {
            if let Some(timeout) = timeout {
                config.request_timeout_secs = timeout;
            }
        }
        if let Ok(top_n) = env::var("SCRAPER_TOP_N").map_or(Ok(None), |n| n.parse::<usize>().map(Some)) {
            if let Some(top_n) = top_n {
                config.top_n = top_n;
            }
        }

        config
    }
}
