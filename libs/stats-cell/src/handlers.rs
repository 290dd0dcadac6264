use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use tracing::error;

use shared_cache::{cache_key, ResponseCache};
use shared_config::AppConfig;

use crate::models::{PlayerStats, StatsError};
use crate::services::normalize::normalize_stats;
use crate::services::platform::map_platform;
use crate::services::r6data::R6DataClient;

/// Per-cell state: the upstream client and the response cache, constructed
/// once at startup and shared by every request.
pub struct StatsHandlers {
    client: R6DataClient,
    cache: ResponseCache<PlayerStats>,
}

impl StatsHandlers {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            client: R6DataClient::new(config),
            cache: ResponseCache::new(),
        }
    }
}

/// `GET /r6/{platform}/{username}`
///
/// Cache hit short-circuits everything, including platform validation.
/// On a miss the platform is mapped before any network call, the upstream
/// payload is normalized, and the result is stored under the caller's
/// original (platform, username) spelling.
pub async fn get_player_stats(
    State(handlers): State<Arc<StatsHandlers>>,
    Path((platform, username)): Path<(String, String)>,
) -> Result<Json<PlayerStats>, StatsError> {
    let key = cache_key(&platform, &username);

    if let Some(cached) = handlers.cache.get(&key).await {
        return Ok(Json(cached));
    }

    let mapping = map_platform(&platform).ok_or(StatsError::InvalidPlatform)?;

    let raw = handlers
        .client
        .fetch_player_stats(&username, &mapping)
        .await
        .map_err(|e| {
            error!(
                "Error fetching R6Data stats for {} on {}: {}",
                username, platform, e
            );
            StatsError::FetchFailed
        })?;

    let stats = normalize_stats(&raw, &platform, &username)?;

    handlers.cache.put(key, stats.clone()).await;

    Ok(Json(stats))
}

// Error response implementation
use axum::{http::StatusCode, response::IntoResponse};

impl IntoResponse for StatsError {
    fn into_response(self) -> axum::response::Response {
        let status = match self {
            StatsError::InvalidPlatform => StatusCode::BAD_REQUEST,
            StatsError::StatsNotFound | StatsError::PlatformStatsNotFound => {
                StatusCode::NOT_FOUND
            }
            StatsError::FetchFailed => StatusCode::BAD_GATEWAY,
        };

        (
            status,
            Json(serde_json::json!({ "error": self.to_string() })),
        )
            .into_response()
    }
}
