use anyhow::{anyhow, Result};
use reqwest::Client;
use tracing::{debug, error};

use shared_config::AppConfig;

use crate::models::{PlatformMapping, RawStatsResponse};

/// Thin client for the R6Data statistics API.
pub struct R6DataClient {
    client: Client,
    base_url: String,
}

impl R6DataClient {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            client: Client::new(),
            base_url: config.r6data_base_url.clone(),
        }
    }

    /// Fetches the raw stats payload for a player.
    ///
    /// The username travels as a query parameter and is URL-encoded by
    /// reqwest's query serializer.
    pub async fn fetch_player_stats(
        &self,
        username: &str,
        mapping: &PlatformMapping,
    ) -> Result<RawStatsResponse> {
        let url = format!("{}/api/stats", self.base_url);
        debug!("Fetching R6Data stats for {} from {}", username, url);

        let response = self
            .client
            .get(&url)
            .query(&[
                ("type", "stats"),
                ("nameOnPlatform", username),
                ("platformType", mapping.platform_type),
                ("platform_families", mapping.platform_family),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            error!("R6Data API error ({}): {}", status, error_text);
            return Err(anyhow!("R6Data API error ({})", status));
        }

        let data = response.json::<RawStatsResponse>().await?;
        Ok(data)
    }
}
