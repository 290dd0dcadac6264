use serde::{Deserialize, Serialize};
use thiserror::Error;

// ----------------------------------------------------------------------------
// Raw upstream shapes (R6Data API, not owned by us)
// ----------------------------------------------------------------------------

/// Root payload of the R6Data stats endpoint.
///
/// Every field down this tree may be absent or null; normalization turns
/// missing numerics into zero rather than failing.
#[derive(Debug, Clone, Deserialize)]
pub struct RawStatsResponse {
    #[serde(default)]
    pub platform_families_full_profiles: Vec<PlatformFamilyProfiles>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlatformFamilyProfiles {
    #[serde(default)]
    pub platform_family: String,
    #[serde(default)]
    pub board_ids_full_profiles: Vec<BoardProfiles>,
}

/// One statistics board (e.g. "ranked", "standard") within a platform family.
#[derive(Debug, Clone, Deserialize)]
pub struct BoardProfiles {
    #[serde(default)]
    pub board_id: String,
    #[serde(default)]
    pub full_profiles: Vec<FullProfile>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct FullProfile {
    #[serde(default)]
    pub profile: Option<ProfileInfo>,
    #[serde(default)]
    pub season_statistics: Option<SeasonStatistics>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProfileInfo {
    #[serde(default)]
    pub rank: Option<u32>,
    #[serde(default)]
    pub rank_points: Option<u32>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SeasonStatistics {
    #[serde(default)]
    pub kills: Option<u32>,
    #[serde(default)]
    pub deaths: Option<u32>,
    #[serde(default)]
    pub match_outcomes: Option<MatchOutcomes>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MatchOutcomes {
    #[serde(default)]
    pub wins: Option<u32>,
    #[serde(default)]
    pub losses: Option<u32>,
    #[serde(default)]
    pub abandons: Option<u32>,
}

// ----------------------------------------------------------------------------
// Normalized output contract
// ----------------------------------------------------------------------------

/// Simplified per-board statistics served to consumers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardStats {
    pub rank: u32,
    pub rank_points: u32,
    pub kills: u32,
    pub deaths: u32,
    pub wins: u32,
    pub losses: u32,
    pub abandons: u32,
    /// Kills/deaths formatted to 2 decimal places, or "N/A" when deaths is
    /// zero. A present-but-zero upstream value and an absent one are
    /// indistinguishable here; downstream consumers rely on that.
    pub kd: String,
    /// Always wins + losses + abandons, never read from upstream.
    pub matches_played: u32,
}

/// Response body for `GET /r6/{platform}/{username}`.
///
/// A board the player never touched serializes as `null` rather than being
/// omitted or treated as an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerStats {
    pub username: String,
    pub platform: String,
    pub ranked: Option<BoardStats>,
    pub standard: Option<BoardStats>,
}

/// Public platform token translated into R6Data API vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlatformMapping {
    pub platform_type: &'static str,
    pub platform_family: &'static str,
}

// ----------------------------------------------------------------------------
// Errors
// ----------------------------------------------------------------------------

#[derive(Error, Debug)]
pub enum StatsError {
    #[error("Invalid platform. Use pc, xbox, or psn.")]
    InvalidPlatform,

    #[error("Stats not found for this player.")]
    StatsNotFound,

    #[error("Platform stats not found.")]
    PlatformStatsNotFound,

    #[error("Failed to fetch stats from API.")]
    FetchFailed,
}
