use crate::models::PlatformMapping;

/// Translates a public platform token into R6Data API vocabulary.
///
/// Comparison is case-insensitive; anything outside the closed set
/// (pc, xbox, psn) is rejected — no fuzzy matching.
pub fn map_platform(platform: &str) -> Option<PlatformMapping> {
    match platform.to_lowercase().as_str() {
        "pc" => Some(PlatformMapping {
            platform_type: "uplay",
            platform_family: "pc",
        }),
        "xbox" => Some(PlatformMapping {
            platform_type: "xbl",
            platform_family: "xbox",
        }),
        "psn" => Some(PlatformMapping {
            platform_type: "psn",
            platform_family: "psn",
        }),
        _ => None,
    }
}
