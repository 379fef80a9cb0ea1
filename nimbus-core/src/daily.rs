//! Collapse the 3-hourly forecast feed into one entry per calendar day.

use std::collections::HashSet;

use chrono::NaiveDateTime;

use crate::{
    error::{FetchError, FetchResult},
    model::{DailyForecast, ForecastEntry},
};

const TIMESTAMP_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];

/// Calendar-day label for a raw forecast timestamp, e.g. "Jan 5, 2024".
///
/// The timestamp is taken as wall-clock time; no timezone shift is applied.
pub fn day_label(timestamp: &str) -> Option<String> {
    TIMESTAMP_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(timestamp, fmt).ok())
        .map(|dt| dt.format("%b %-d, %Y").to_string())
}

/// Keep the first entry seen for each calendar day, in order of first appearance.
///
/// An entry whose timestamp cannot be read makes the whole payload malformed.
pub fn normalize_daily(entries: Vec<ForecastEntry>) -> FetchResult<Vec<DailyForecast>> {
    let mut seen = HashSet::new();
    let mut daily = Vec::new();

    for entry in entries {
        let day = day_label(&entry.timestamp).ok_or_else(|| {
            FetchError::malformed("forecast", format!("unreadable dt_txt '{}'", entry.timestamp))
        })?;

        if seen.insert(day.clone()) {
            daily.push(DailyForecast { day, entry });
        }
    }

    Ok(daily)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(timestamp: &str, temperature_c: f64) -> ForecastEntry {
        ForecastEntry {
            timestamp: timestamp.to_string(),
            temperature_c,
            wind_speed_kmh: 3.0,
            condition: "Clouds".to_string(),
        }
    }

    #[test]
    fn label_uses_short_month_day_year() {
        assert_eq!(day_label("2024-01-05 03:00:00").as_deref(), Some("Jan 5, 2024"));
        assert_eq!(day_label("2024-12-31T21:00:00").as_deref(), Some("Dec 31, 2024"));
        assert_eq!(day_label("yesterday"), None);
    }

    #[test]
    fn two_days_of_three_hour_samples_collapse_to_two_entries() {
        let input = vec![
            entry("2024-03-10 00:00:00", 1.0),
            entry("2024-03-10 03:00:00", 2.0),
            entry("2024-03-10 06:00:00", 3.0),
            entry("2024-03-11 00:00:00", 4.0),
            entry("2024-03-11 03:00:00", 5.0),
            entry("2024-03-11 06:00:00", 6.0),
        ];

        let daily = normalize_daily(input).unwrap();

        assert_eq!(daily.len(), 2);
        assert_eq!(daily[0].day, "Mar 10, 2024");
        assert_eq!(daily[0].entry.timestamp, "2024-03-10 00:00:00");
        assert_eq!(daily[1].day, "Mar 11, 2024");
        assert_eq!(daily[1].entry.timestamp, "2024-03-11 00:00:00");
    }

    #[test]
    fn empty_feed_gives_empty_list() {
        assert!(normalize_daily(Vec::new()).unwrap().is_empty());
    }

    #[test]
    fn first_sample_of_a_day_wins_even_when_not_midnight() {
        let input = vec![
            entry("2024-03-10 15:00:00", 10.0),
            entry("2024-03-10 18:00:00", 8.0),
            entry("2024-03-11 00:00:00", 4.0),
        ];

        let daily = normalize_daily(input).unwrap();

        assert_eq!(daily.len(), 2);
        assert_eq!(daily[0].entry.temperature_c, 10.0);
        assert_eq!(daily[1].entry.temperature_c, 4.0);
    }

    #[test]
    fn order_of_first_appearance_is_kept_for_unsorted_input() {
        let input = vec![
            entry("2024-03-12 00:00:00", 1.0),
            entry("2024-03-10 00:00:00", 2.0),
            entry("2024-03-12 03:00:00", 3.0),
            entry("2024-03-11 00:00:00", 4.0),
            entry("2024-03-10 09:00:00", 5.0),
        ];

        let days: Vec<_> = normalize_daily(input)
            .unwrap()
            .into_iter()
            .map(|d| (d.day, d.entry.temperature_c))
            .collect();

        assert_eq!(
            days,
            vec![
                ("Mar 12, 2024".to_string(), 1.0),
                ("Mar 10, 2024".to_string(), 2.0),
                ("Mar 11, 2024".to_string(), 4.0),
            ]
        );
    }

    #[test]
    fn labels_are_unique_across_a_full_five_day_feed() {
        let input: Vec<_> = (0..40)
            .map(|i| {
                let day = 1 + i / 8;
                let hour = (i % 8) * 3;
                entry(&format!("2024-05-{day:02} {hour:02}:00:00"), i as f64)
            })
            .collect();

        let daily = normalize_daily(input).unwrap();

        assert_eq!(daily.len(), 5);
        let mut labels: Vec<_> = daily.iter().map(|d| d.day.as_str()).collect();
        labels.dedup();
        assert_eq!(labels.len(), 5);
        assert!(daily.iter().all(|d| d.entry.timestamp.ends_with("00:00:00")));
    }

    #[test]
    fn unreadable_timestamp_is_malformed() {
        let err = normalize_daily(vec![entry("not a date", 1.0)]).unwrap_err();
        assert!(matches!(err, FetchError::Malformed { endpoint: "forecast", .. }));
    }
}
