use crate::{
    Config,
    error::FetchResult,
    model::{CurrentSnapshot, ForecastEntry, LocationQuery},
    provider::openweather::OpenWeatherProvider,
};
use async_trait::async_trait;
use std::{fmt::Debug, sync::Arc};

pub mod openweather;

/// Source of the two raw feeds a fetch cycle needs.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    async fn current(&self, query: &LocationQuery) -> FetchResult<CurrentSnapshot>;

    /// Forecast samples in the order the service sent them.
    async fn forecast(&self, query: &LocationQuery) -> FetchResult<Vec<ForecastEntry>>;
}

/// Construct the OpenWeather provider from config.
///
/// A missing API key is deliberately not an error here.
pub fn provider_from_config(config: &Config) -> Arc<dyn WeatherProvider> {
    if config.api_key.is_none() {
        tracing::debug!("No API key configured; requests will be sent without one");
    }

    Arc::new(OpenWeatherProvider::with_base_url(
        config.api_key_or_empty().to_owned(),
        config.base_url(),
    ))
}
