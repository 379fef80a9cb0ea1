//! Map condition labels to icon asset names.

/// Icon used when a condition label has no matching asset.
pub const DEFAULT_ICON: &str = "default";

/// Condition groups the service reports in `weather[].main`, lower-cased.
const KNOWN_ICONS: &[&str] = &[
    "thunderstorm",
    "drizzle",
    "rain",
    "snow",
    "mist",
    "smoke",
    "haze",
    "dust",
    "fog",
    "sand",
    "ash",
    "squall",
    "tornado",
    "clear",
    "clouds",
];

/// Icon name for a condition label: the lower-cased label when an asset exists
/// for it, [`DEFAULT_ICON`] otherwise.
pub fn icon_for(condition: &str) -> &'static str {
    let key = condition.to_lowercase();
    KNOWN_ICONS
        .iter()
        .copied()
        .find(|icon| *icon == key)
        .unwrap_or(DEFAULT_ICON)
}
