use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use tracing::error;

use shared_cache::{cache_key, ResponseCache};
use shared_config::AppConfig;

use crate::models::{ScrapeError, ScrapedStats};
use crate::services::extract::extract_stats;
use crate::services::site::SiteClient;

/// Per-cell state: the page client and the response cache, constructed once
/// at startup and shared by every request.
pub struct ScrapeHandlers {
    client: SiteClient,
    cache: ResponseCache<ScrapedStats>,
}

impl ScrapeHandlers {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            client: SiteClient::new(config),
            cache: ResponseCache::new(),
        }
    }
}

/// `GET /r6stats/{platform}/{username}`
///
/// No platform validation here — the token goes into the profile URL as
/// supplied, and an unknown platform simply renders as a page with no stat
/// values.
pub async fn get_scraped_stats(
    State(handlers): State<Arc<ScrapeHandlers>>,
    Path((platform, username)): Path<(String, String)>,
) -> Result<Json<ScrapedStats>, ScrapeError> {
    let key = cache_key(&platform, &username);

    if let Some(cached) = handlers.cache.get(&key).await {
        return Ok(Json(cached));
    }

    let html = handlers
        .client
        .fetch_profile_page(&platform, &username)
        .await
        .map_err(|e| {
            error!(
                "Error scraping stats for {} on {}: {}",
                username, platform, e
            );
            ScrapeError::FetchFailed
        })?;

    let stats = extract_stats(&html, &platform, &username)?;

    handlers.cache.put(key, stats.clone()).await;

    Ok(Json(stats))
}

// Error response implementation
use axum::{http::StatusCode, response::IntoResponse};

impl IntoResponse for ScrapeError {
    fn into_response(self) -> axum::response::Response {
        let status = match self {
            ScrapeError::PlayerNotFound => StatusCode::NOT_FOUND,
            ScrapeError::FetchFailed => StatusCode::BAD_GATEWAY,
        };

        (
            status,
            Json(serde_json::json!({ "error": self.to_string() })),
        )
            .into_response()
    }
}
