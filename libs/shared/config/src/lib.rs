use std::env;
use tracing::warn;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub r6data_base_url: String,
    pub stats_site_base_url: String,
    pub port: u16,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            r6data_base_url: env::var("R6DATA_BASE_URL")
                .unwrap_or_else(|_| {
                    warn!("R6DATA_BASE_URL not set, using default");
                    "https://api.r6data.eu".to_string()
                }),
            stats_site_base_url: env::var("STATS_SITE_BASE_URL")
                .unwrap_or_else(|_| {
                    warn!("STATS_SITE_BASE_URL not set, using default");
                    "https://r6.tracker.network".to_string()
                }),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or_else(|| {
                    warn!("PORT not set or invalid, using 3000");
                    3000
                }),
        }
    }
}
