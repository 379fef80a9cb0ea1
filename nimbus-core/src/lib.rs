//! Core library for the `nimbus` weather lookup client.
//!
//! This crate defines:
//! - Configuration & credentials handling
//! - The weather provider abstraction and its OpenWeather implementation
//! - Forecast normalization (one entry per calendar day)
//! - The fetch cycle and the display state it feeds
//!
//! It is used by `nimbus-cli`, but can also be reused by other front ends.

pub mod config;
pub mod daily;
pub mod error;
pub mod fetcher;
pub mod icon;
pub mod model;
pub mod provider;
pub mod query;
pub mod session;
pub mod state;

pub use config::Config;
pub use error::{FetchError, FetchResult};
pub use fetcher::fetch_report;
pub use model::{CurrentSnapshot, DailyForecast, ForecastEntry, LocationQuery, WeatherReport};
pub use provider::{WeatherProvider, provider_from_config};
pub use query::QueryInput;
pub use session::Session;
pub use state::{DisplayState, RequestTicket};
