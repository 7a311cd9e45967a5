use crate::config::ConfigError;
use crate::sink::error::SinkError;
use crate::weather_data::error::WeatherDataError;
use thiserror::Error;

/// Errors that abort a whole run. Per-day problems are reported as
/// [`crate::SkipReason`] instead.
#[derive(Debug, Error)]
pub enum Et0Error {
    #[error(transparent)]
    WeatherData(#[from] WeatherDataError),

    #[error(transparent)]
    Sink(#[from] SinkError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Requested period does not describe a valid date range")]
    InvalidPeriod,
}
