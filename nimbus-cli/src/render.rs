//! Plain-text rendering of the display state.

use chrono::{DateTime, Utc};
use nimbus_core::{CurrentSnapshot, DailyForecast, WeatherReport, icon::icon_for};

pub const EMPTY_STATE: &str = "heading out? let's do a quick rain check.";

/// Render whatever the display state currently holds.
pub fn render(report: Option<&WeatherReport>) -> String {
    match report {
        Some(report) => {
            let mut out = render_current(&report.current);
            out.push('\n');
            out.push_str(&render_daily(&report.daily));
            out
        }
        None => format!("{EMPTY_STATE}\n"),
    }
}

pub fn render_current(current: &CurrentSnapshot) -> String {
    [
        format!(
            "{}, {}  [{}]",
            current.location_name.to_lowercase(),
            current.country.to_lowercase(),
            icon_for(&current.condition),
        ),
        format!("last updated — {}", last_updated(current.observed_at())),
        format!("{}°C", current.temperature_c.ceil() as i64),
        format!(
            "{:.1} km/h — {}",
            one_decimal(current.wind_speed_kmh),
            current.condition.to_lowercase()
        ),
    ]
    .into_iter()
    .map(|line| line + "\n")
    .collect()
}

pub fn render_daily(daily: &[DailyForecast]) -> String {
    let mut out = String::from("5—day forecast\n");
    for day in daily {
        out.push_str(&format!(
            "{:<14} [{}]  {:.1} km/h — {:<14} {:.1}°C\n",
            day.day.to_lowercase(),
            icon_for(&day.entry.condition),
            one_decimal(day.entry.wind_speed_kmh),
            day.entry.condition.to_lowercase(),
            one_decimal(day.entry.temperature_c),
        ));
    }
    out
}

/// Round to one decimal with ties away from zero, so `{:.1}` of the result
/// never hits its ties-to-even case: 2.25 shows as "2.3", -0.25 as "-0.3".
fn one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

fn last_updated(at: Option<DateTime<Utc>>) -> String {
    at.map(|dt| dt.format("%B %-d, %Y").to_string().to_lowercase())
        .unwrap_or_else(|| "unknown".to_string())
}
