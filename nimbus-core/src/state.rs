//! Single holder for what the screen shows.
//!
//! Every search takes a ticket from [`DisplayState::begin`]. Only the
//! completion holding the newest ticket may replace the report, so a slow,
//! superseded search can never overwrite a newer one.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::{error::FetchResult, model::WeatherReport};

/// Sequence number handed out when a search starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RequestTicket(u64);

#[derive(Debug, Default)]
struct Inner {
    latest: u64,
    report: Option<Arc<WeatherReport>>,
}

#[derive(Debug, Default)]
pub struct DisplayState {
    inner: Mutex<Inner>,
}

impl DisplayState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a search. Any ticket issued earlier becomes stale.
    pub fn begin(&self) -> RequestTicket {
        let mut inner = self.inner.lock();
        inner.latest += 1;
        RequestTicket(inner.latest)
    }

    /// Apply the outcome of a search.
    ///
    /// A success replaces the report wholesale; a failure clears it. Returns
    /// `false` without touching anything when `ticket` has been superseded.
    pub fn complete(&self, ticket: RequestTicket, result: FetchResult<WeatherReport>) -> bool {
        let mut inner = self.inner.lock();

        if ticket.0 != inner.latest {
            tracing::warn!(
                ticket = ticket.0,
                latest = inner.latest,
                "Discarding result of superseded search"
            );
            return false;
        }

        inner.report = match result {
            Ok(report) => Some(Arc::new(report)),
            Err(err) => {
                tracing::error!(error = %err, "Error fetching weather data");
                None
            }
        };
        true
    }

    pub fn report(&self) -> Option<Arc<WeatherReport>> {
        self.inner.lock().report.clone()
    }

    pub fn has_data(&self) -> bool {
        self.inner.lock().report.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        error::FetchError,
        model::{CurrentSnapshot, LocationQuery},
    };

    fn report(place: &str) -> WeatherReport {
        WeatherReport {
            query: LocationQuery::new(place),
            current: CurrentSnapshot {
                location_name: place.into(),
                country: "XX".into(),
                timestamp: 0,
                temperature_c: 20.0,
                wind_speed_kmh: 1.0,
                condition: "Clear".into(),
            },
            daily: Vec::new(),
        }
    }

    fn failure() -> FetchError {
        FetchError::malformed("weather", "boom")
    }

    #[test]
    fn starts_empty() {
        let state = DisplayState::new();
        assert!(!state.has_data());
        assert!(state.report().is_none());
    }

    #[test]
    fn success_populates_and_failure_clears() {
        let state = DisplayState::new();

        let t = state.begin();
        assert!(state.complete(t, Ok(report("Oslo"))));
        assert_eq!(state.report().unwrap().current.location_name, "Oslo");

        let t = state.begin();
        assert!(state.complete(t, Err(failure())));
        assert!(state.report().is_none());
    }

    #[test]
    fn stale_completion_is_ignored() {
        let state = DisplayState::new();

        let old = state.begin();
        let new = state.begin();
        assert!(old < new);

        assert!(state.complete(new, Ok(report("Lima"))));
        assert!(!state.complete(old, Ok(report("Quito"))));
        assert_eq!(state.report().unwrap().current.location_name, "Lima");

        assert!(!state.complete(old, Err(failure())));
        assert!(state.has_data());
    }

    #[test]
    fn report_is_shared_not_copied() {
        let state = DisplayState::new();
        let t = state.begin();
        state.complete(t, Ok(report("Rome")));

        let a = state.report().unwrap();
        let b = state.report().unwrap();
        assert!(Arc::ptr_eq(&a, &b));
    }
}
