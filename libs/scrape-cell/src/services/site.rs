use std::time::Duration;

use anyhow::{anyhow, Result};
use reqwest::Client;
use tracing::{debug, error};

use shared_config::AppConfig;

// Browser-like identity; the profile page refuses plain bot requests.
const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

const ACCEPT_HTML: &str = "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8";

/// Client for the stats site's public profile pages.
pub struct SiteClient {
    client: Client,
    base_url: String,
}

impl SiteClient {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            client: Client::builder()
                .user_agent(BROWSER_USER_AGENT)
                .timeout(Duration::from_secs(10))
                .build()
                .unwrap_or_else(|_| Client::new()),
            base_url: config.stats_site_base_url.clone(),
        }
    }

    /// Fetches a profile page as raw HTML.
    pub async fn fetch_profile_page(&self, platform: &str, username: &str) -> Result<String> {
        let url = format!("{}/profile/{}/{}", self.base_url, platform, username);
        debug!("Fetching profile page {}", url);

        let response = self
            .client
            .get(&url)
            .header("Accept", ACCEPT_HTML)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            error!("Profile page error ({}): {}", status, url);
            return Err(anyhow!("profile page returned {}", status));
        }

        Ok(response.text().await?)
    }
}
