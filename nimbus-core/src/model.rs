use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Free-text location as typed by the user. Never trimmed or validated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LocationQuery(String);

impl LocationQuery {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for LocationQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for LocationQuery {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Latest observation for a location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentSnapshot {
    pub location_name: String,
    pub country: String,
    /// Observation time, epoch seconds.
    pub timestamp: i64,
    pub temperature_c: f64,
    pub wind_speed_kmh: f64,
    /// Primary condition label, e.g. "Clouds".
    pub condition: String,
}

impl CurrentSnapshot {
    pub fn observed_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.timestamp, 0)
    }
}

/// One sample from the forecast feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastEntry {
    /// Raw `dt_txt` as sent by the service, e.g. "2024-01-05 03:00:00".
    pub timestamp: String,
    pub temperature_c: f64,
    pub wind_speed_kmh: f64,
    pub condition: String,
}

/// First forecast sample of a calendar day, tagged with its day label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyForecast {
    /// Calendar-day label, e.g. "Jan 5, 2024".
    pub day: String,
    pub entry: ForecastEntry,
}

/// Result of one successful fetch cycle.
///
/// Snapshot and daily list always travel together; a failed cycle produces
/// no report at all.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherReport {
    pub query: LocationQuery,
    pub current: CurrentSnapshot,
    pub daily: Vec<DailyForecast>,
}
