//! FAO-56 Penman-Monteith reference evapotranspiration for daily time steps.
//!
//! Allen, R. G., Pereira, L. S., Raes, D., Smith, M. (1998). Crop
//! evapotranspiration: guidelines for computing crop water requirements.
//! FAO Irrigation and Drainage Paper 56.
//!
//! Every function here is pure; a day is computed from its hourly samples and
//! the site constants only.

pub mod aggregate;
pub mod constants;
pub mod error;
pub mod penman_monteith;
pub mod radiation;
pub mod solar;

use crate::types::hourly::HourlySample;
use crate::types::site::SiteMetadata;
use aggregate::{aggregate_day, DailyAggregate};
use chrono::NaiveDate;
use error::ComputationError;
use penman_monteith::{PenmanMonteith, Psychrometrics};
use radiation::RadiationBalance;
use solar::SolarGeometry;

/// All intermediate quantities of one computed day.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DayComputation {
    pub aggregate: DailyAggregate,
    pub geometry: SolarGeometry,
    pub psychrometrics: Psychrometrics,
    pub radiation: RadiationBalance,
    pub penman_monteith: PenmanMonteith,
}

impl DayComputation {
    /// reference evapotranspiration [mm day^-1]
    pub fn et0(&self) -> f64 {
        self.penman_monteith.et0
    }
}

/// Runs aggregation, solar geometry, radiation balance and the combination
/// equation for one day.
///
/// ```
/// use chrono::NaiveDate;
/// use et0::{compute_day, EncodedLatitude, HourlySample, SiteMetadata, DEFAULT_ALBEDO};
///
/// let samples = [
///     HourlySample { temperature: 18.0, relative_humidity: 82.0, wind_speed: 7.2, shortwave_radiation: 0.0 },
///     HourlySample { temperature: 31.0, relative_humidity: 30.0, wind_speed: 18.0, shortwave_radiation: 850.0 },
/// ];
/// let site = SiteMetadata { latitude: EncodedLatitude(38.25), altitude: 8.0, sensor_height: 2.0 };
/// let date = NaiveDate::from_ymd_opt(2022, 7, 1).unwrap();
/// let day = compute_day(date, &samples, &site, DEFAULT_ALBEDO)?;
/// assert!(day.et0() > 0.0);
/// # Ok::<(), et0::ComputationError>(())
/// ```
pub fn compute_day(
    date: NaiveDate,
    samples: &[HourlySample],
    site: &SiteMetadata,
    albedo: f64,
) -> Result<DayComputation, ComputationError> {
    let aggregate = aggregate_day(samples)?;
    let psychrometrics = Psychrometrics::compute(&aggregate, site.altitude);
    let geometry = SolarGeometry::compute(date, site.latitude.radians())?;
    let radiation = RadiationBalance::compute(
        &aggregate,
        geometry.extraterrestrial_radiation,
        site.altitude,
        albedo,
        psychrometrics.actual_vapour_pressure,
    )?;
    let penman_monteith = PenmanMonteith::compute(&aggregate, &psychrometrics, &radiation)?;

    Ok(DayComputation {
        aggregate,
        geometry,
        psychrometrics,
        radiation,
        penman_monteith,
    })
}

#[cfg(test)]
mod tests {
    use super::constants::DEFAULT_ALBEDO;
    use super::*;
    use crate::types::site::EncodedLatitude;

    fn site() -> SiteMetadata {
        SiteMetadata {
            latitude: EncodedLatitude(38.25),
            altitude: 8.0,
            sensor_height: 2.0,
        }
    }

    fn samples(
        temperature: &[f64],
        humidity: &[f64],
        wind: &[f64],
        radiation: &[f64],
    ) -> Vec<HourlySample> {
        (0..temperature.len())
            .map(|i| HourlySample {
                temperature: temperature[i],
                relative_humidity: humidity[i],
                wind_speed: wind[i],
                shortwave_radiation: radiation[i],
            })
            .collect()
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_partly_cloudy_summer_day() -> Result<(), ComputationError> {
        let day = compute_day(
            NaiveDate::from_ymd_opt(2022, 7, 2).unwrap(),
            &samples(
                &[18.0, 24.5, 31.0, 27.5],
                &[82.0, 55.0, 30.0, 48.0],
                &[7.2, 10.8, 18.0, 14.4],
                &[0.0, 150.0, 400.0, 190.0],
            ),
            &site(),
            DEFAULT_ALBEDO,
        )?;

        assert_close(day.aggregate.solar_radiation, 15.984);
        assert_eq!(day.geometry.day_of_year, 183);
        assert_close(day.radiation.clear_sky_ratio, 0.512_415_838_566_352);
        assert_close(day.radiation.net_radiation, 10.086_427_994_504_026);
        assert_close(day.et0(), 6.066_585_701_802_469);
        Ok(())
    }

    #[test]
    fn test_overcast_day() -> Result<(), ComputationError> {
        let day = compute_day(
            NaiveDate::from_ymd_opt(2022, 7, 2).unwrap(),
            &samples(&[18.0, 24.5], &[82.0, 55.0], &[7.2, 10.8], &[0.0, 100.0]),
            &site(),
            DEFAULT_ALBEDO,
        )?;

        assert_eq!(day.radiation.clear_sky_ratio, 0.3);
        assert_close(day.radiation.net_longwave, 0.322_063_551_384_487_67);
        assert_close(day.et0(), 2.296_182_206_918_796_7);
        Ok(())
    }

    #[test]
    fn test_winter_day() -> Result<(), ComputationError> {
        let day = compute_day(
            NaiveDate::from_ymd_opt(2023, 1, 15).unwrap(),
            &samples(&[4.0, 11.0], &[90.0, 60.0], &[5.0, 8.0], &[0.0, 300.0]),
            &site(),
            DEFAULT_ALBEDO,
        )?;
        assert_close(day.et0(), 1.190_343_268_364_876);
        Ok(())
    }

    #[test]
    fn test_deterministic() -> Result<(), ComputationError> {
        let date = NaiveDate::from_ymd_opt(2022, 7, 2).unwrap();
        let day = samples(&[18.0, 31.0], &[82.0, 30.0], &[7.2, 18.0], &[0.0, 850.0]);
        let first = compute_day(date, &day, &site(), DEFAULT_ALBEDO)?;
        let second = compute_day(date, &day, &site(), DEFAULT_ALBEDO)?;
        assert_eq!(first.et0().to_bits(), second.et0().to_bits());
        Ok(())
    }

    #[test]
    fn test_polar_site() {
        let polar = SiteMetadata {
            latitude: EncodedLatitude(78.13),
            ..site()
        };
        let result = compute_day(
            NaiveDate::from_ymd_opt(2022, 6, 21).unwrap(),
            &samples(&[2.0, 6.0], &[90.0, 70.0], &[10.0, 20.0], &[200.0, 400.0]),
            &polar,
            DEFAULT_ALBEDO,
        );
        assert!(matches!(result, Err(ComputationError::SunsetHourAngle { .. })));
    }
}
