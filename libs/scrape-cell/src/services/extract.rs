use scraper::{Html, Selector};

use crate::models::{ScrapeError, ScrapedStats};

/// Marker class on the profile page's stat-value elements.
///
/// The markup carries no semantic labels; values are identified purely by
/// their order in the document. Index → field binding below is an accepted
/// coupling to the upstream markup: if the site reorders its stat tiles,
/// every field shifts meaning.
const STAT_VALUE_SELECTOR: &str = ".trn-defstat__value";

/// Reads the six positional stat values out of a profile page.
///
/// An empty selection means the page rendered without a stats block
/// (unknown player, private profile); any present value is kept as its
/// trimmed display text. Missing trailing positions come back empty rather
/// than failing, matching how the page degrades.
pub fn extract_stats(
    html: &str,
    platform: &str,
    username: &str,
) -> Result<ScrapedStats, ScrapeError> {
    let document = Html::parse_document(html);
    let selector = Selector::parse(STAT_VALUE_SELECTOR).unwrap();

    let values: Vec<String> = document
        .select(&selector)
        .map(|element| element.text().collect::<String>().trim().to_string())
        .collect();

    if values.is_empty() {
        return Err(ScrapeError::PlayerNotFound);
    }

    let value = |index: usize| values.get(index).cloned().unwrap_or_default();

    Ok(ScrapedStats {
        username: username.to_string(),
        platform: platform.to_string(),
        level: value(0),
        kd: value(1),
        wins: value(2),
        losses: value(3),
        win_percent: value(4),
        matches_played: value(5),
    })
}
