use crate::{
    daily::normalize_daily,
    error::FetchResult,
    model::{LocationQuery, WeatherReport},
    provider::WeatherProvider,
};

/// Run one fetch cycle: current conditions and forecast, then normalize.
///
/// Both requests are in flight at once. The cycle is all-or-nothing: if either
/// fails, the other's result is dropped and the error is returned.
pub async fn fetch_report(
    provider: &dyn WeatherProvider,
    query: &LocationQuery,
) -> FetchResult<WeatherReport> {
    let (current, forecast) = tokio::try_join!(provider.current(query), provider.forecast(query))?;

    let daily = normalize_daily(forecast)?;
    tracing::debug!(
        location = query.as_str(),
        days = daily.len(),
        "Fetched weather report"
    );

    Ok(WeatherReport { query: query.clone(), current, daily })
}
