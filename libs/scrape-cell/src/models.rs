use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Response body for `GET /r6stats/{platform}/{username}`.
///
/// Every value is the raw trimmed display text lifted from the profile
/// page, bound by position — no numeric coercion, so `winPercent` keeps
/// its `%` sign and large counts keep whatever separators the site renders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScrapedStats {
    pub username: String,
    pub platform: String,
    pub level: String,
    pub kd: String,
    pub wins: String,
    pub losses: String,
    pub win_percent: String,
    pub matches_played: String,
}

#[derive(Error, Debug)]
pub enum ScrapeError {
    #[error("Player not found or stats not available")]
    PlayerNotFound,

    #[error("Failed to fetch stats")]
    FetchFailed,
}
