use std::sync::Arc;

use crate::{
    fetcher::fetch_report,
    model::{LocationQuery, WeatherReport},
    provider::WeatherProvider,
    state::DisplayState,
};

/// Ties a provider to the display state. Cheap to clone, so searches can be
/// spawned while an earlier one is still running.
#[derive(Debug, Clone)]
pub struct Session {
    provider: Arc<dyn WeatherProvider>,
    state: Arc<DisplayState>,
}

impl Session {
    pub fn new(provider: Arc<dyn WeatherProvider>) -> Self {
        Self { provider, state: Arc::new(DisplayState::new()) }
    }

    /// Run one search and return what the display shows afterwards.
    ///
    /// If a newer search was started meanwhile, this one's outcome is dropped
    /// and the returned value is simply whatever the state holds at that
    /// point. That may come from an older search if the newer one has not
    /// finished yet.
    pub async fn search(&self, query: LocationQuery) -> Option<Arc<WeatherReport>> {
        let ticket = self.state.begin();
        let result = fetch_report(self.provider.as_ref(), &query).await;
        self.state.complete(ticket, result);
        self.state.report()
    }

    pub fn state(&self) -> &DisplayState {
        &self.state
    }
}
