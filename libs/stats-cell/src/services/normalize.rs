use crate::models::{
    BoardStats, FullProfile, PlatformFamilyProfiles, PlayerStats, RawStatsResponse, StatsError,
};

/// Reduces the raw R6Data payload to the simplified output contract.
///
/// `platform` and `username` are attached verbatim as the caller supplied
/// them; only the platform-family lookup is case-insensitive.
pub fn normalize_stats(
    raw: &RawStatsResponse,
    platform: &str,
    username: &str,
) -> Result<PlayerStats, StatsError> {
    if raw.platform_families_full_profiles.is_empty() {
        return Err(StatsError::StatsNotFound);
    }

    let family = raw
        .platform_families_full_profiles
        .iter()
        .find(|pf| pf.platform_family.eq_ignore_ascii_case(platform))
        .ok_or(StatsError::PlatformStatsNotFound)?;

    Ok(PlayerStats {
        username: username.to_string(),
        platform: platform.to_string(),
        ranked: board_stats(family, "ranked"),
        standard: board_stats(family, "standard"),
    })
}

/// First full profile of the named board, if the board exists and has one.
fn board_stats(family: &PlatformFamilyProfiles, board_id: &str) -> Option<BoardStats> {
    family
        .board_ids_full_profiles
        .iter()
        .find(|board| board.board_id == board_id)?
        .full_profiles
        .first()
        .map(parse_profile)
}

/// Flattens one full profile into a stat block.
///
/// Missing or null numerics become zero. kd divides only when deaths is
/// non-zero; matchesPlayed is always derived, never read from upstream.
fn parse_profile(full: &FullProfile) -> BoardStats {
    let profile = full.profile.clone().unwrap_or_default();
    let stats = full.season_statistics.clone().unwrap_or_default();
    let outcomes = stats.match_outcomes.unwrap_or_default();

    let kills = stats.kills.unwrap_or(0);
    let deaths = stats.deaths.unwrap_or(0);
    let wins = outcomes.wins.unwrap_or(0);
    let losses = outcomes.losses.unwrap_or(0);
    let abandons = outcomes.abandons.unwrap_or(0);

    let kd = if deaths == 0 {
        "N/A".to_string()
    } else {
        format!("{:.2}", f64::from(kills) / f64::from(deaths))
    };

    BoardStats {
        rank: profile.rank.unwrap_or(0),
        rank_points: profile.rank_points.unwrap_or(0),
        kills,
        deaths,
        wins,
        losses,
        abandons,
        kd,
        matches_played: wins + losses + abandons,
    }
}
