use super::constants::W_M2_TO_MJ_M2_DAY;
use super::error::ComputationError;
use crate::types::hourly::HourlySample;

/// Daily statistics derived from one day of hourly samples.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DailyAggregate {
    /// [°C]
    pub max_temperature: f64,
    /// [°C]
    pub min_temperature: f64,
    /// midpoint of the extremes [°C]
    pub mean_temperature: f64,
    /// [%]
    pub max_relative_humidity: f64,
    /// [%]
    pub min_relative_humidity: f64,
    /// mean wind speed [m s^-1]
    pub wind_speed: f64,
    /// mean shortwave radiation [MJ m^-2 day^-1]
    pub solar_radiation: f64,
}

/// Reduces a day of samples to its FAO-56 daily statistics.
///
/// The mean temperature is the midpoint of the extremes, not the mean of the
/// samples. Wind and radiation are true means, converted from km/h to m/s and
/// from W/m² to MJ/m²/day.
pub fn aggregate_day(samples: &[HourlySample]) -> Result<DailyAggregate, ComputationError> {
    if samples.is_empty() {
        return Err(ComputationError::NoSamples);
    }
    let n = samples.len() as f64;

    let max_temperature = max_of(samples.iter().map(|s| s.temperature));
    let min_temperature = min_of(samples.iter().map(|s| s.temperature));
    let mean_wind_kmh = samples.iter().map(|s| s.wind_speed).sum::<f64>() / n;
    let mean_radiation = samples.iter().map(|s| s.shortwave_radiation).sum::<f64>() / n;

    Ok(DailyAggregate {
        max_temperature,
        min_temperature,
        mean_temperature: (max_temperature + min_temperature) / 2.0,
        max_relative_humidity: max_of(samples.iter().map(|s| s.relative_humidity)),
        min_relative_humidity: min_of(samples.iter().map(|s| s.relative_humidity)),
        wind_speed: mean_wind_kmh * 1000.0 / 3600.0,
        solar_radiation: mean_radiation * W_M2_TO_MJ_M2_DAY,
    })
}

fn max_of(values: impl Iterator<Item = f64>) -> f64 {
    values.fold(f64::NEG_INFINITY, f64::max)
}

fn min_of(values: impl Iterator<Item = f64>) -> f64 {
    values.fold(f64::INFINITY, f64::min)
}
