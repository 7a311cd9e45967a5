//! FAO-56 Penman-Monteith combination equation and the psychrometric
//! quantities it depends on.

use super::aggregate::DailyAggregate;
use super::error::{ensure_finite, ComputationError};
use super::radiation::RadiationBalance;

/// Saturation vapour pressure at air temperature `t` [°C], in kPa.
pub fn saturation_vapour_pressure(t: f64) -> f64 {
    0.6108 * ((17.27 * t) / (t + 237.3)).exp()
}

/// Mean atmospheric pressure at `altitude` [m], in kPa.
pub fn atmospheric_pressure(altitude: f64) -> f64 {
    101.3 * ((293.0 - 0.0065 * altitude) / 293.0).powf(5.26)
}

/// Vapour pressure and psychrometric terms of one day.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Psychrometrics {
    /// slope of the saturation vapour pressure curve at Tmean [kPa °C^-1]
    pub slope: f64,
    /// atmospheric pressure [kPa]
    pub atmospheric_pressure: f64,
    /// psychrometric constant [kPa °C^-1]
    pub psychrometric_constant: f64,
    /// mean saturation vapour pressure of Tmin and Tmax [kPa]
    pub saturation_vapour_pressure: f64,
    /// actual vapour pressure from RHmax and RHmin [kPa]
    pub actual_vapour_pressure: f64,
    /// vapour pressure deficit [kPa]
    pub vapour_pressure_deficit: f64,
}

impl Psychrometrics {
    pub fn compute(aggregate: &DailyAggregate, altitude: f64) -> Self {
        let t_mean = aggregate.mean_temperature;
        let slope = 4098.0 * saturation_vapour_pressure(t_mean) / (t_mean + 237.3).powf(2.0);
        let pressure = atmospheric_pressure(altitude);

        let es_max = saturation_vapour_pressure(aggregate.max_temperature);
        let es_min = saturation_vapour_pressure(aggregate.min_temperature);
        let es = (es_min + es_max) / 2.0;
        let ea = (es_min * (aggregate.max_relative_humidity / 100.0)
            + es_max * (aggregate.min_relative_humidity / 100.0))
            / 2.0;

        Self {
            slope,
            atmospheric_pressure: pressure,
            psychrometric_constant: 0.000665 * pressure,
            saturation_vapour_pressure: es,
            actual_vapour_pressure: ea,
            vapour_pressure_deficit: es - ea,
        }
    }
}

/// The two terms of the combination equation and their sum [mm day^-1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PenmanMonteith {
    pub radiation_term: f64,
    pub aerodynamic_term: f64,
    pub et0: f64,
}

impl PenmanMonteith {
    /// Combines net radiation and vapour pressure deficit into ET0.
    ///
    /// The result is not bounded: days with a net radiation deficit may give a
    /// negative value.
    pub fn compute(
        aggregate: &DailyAggregate,
        psychrometrics: &Psychrometrics,
        radiation: &RadiationBalance,
    ) -> Result<Self, ComputationError> {
        let wind = aggregate.wind_speed;
        let slope = psychrometrics.slope;
        let gamma = psychrometrics.psychrometric_constant;

        let wind_factor = 1.0 + 0.34 * wind;
        let radiation_weight = slope / (slope + gamma * wind_factor);
        let aerodynamic_weight = gamma / (slope + gamma * wind_factor);
        let transfer = 900.0 / (aggregate.mean_temperature + 273.0) * wind;

        let radiation_term =
            0.408 * (radiation.net_radiation - radiation.soil_heat_flux) * radiation_weight;
        let aerodynamic_term =
            transfer * psychrometrics.vapour_pressure_deficit * aerodynamic_weight;

        Ok(Self {
            radiation_term,
            aerodynamic_term,
            et0: ensure_finite(radiation_term + aerodynamic_term, "ET0")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn aggregate() -> DailyAggregate {
        DailyAggregate {
            max_temperature: 31.0,
            min_temperature: 18.0,
            mean_temperature: 24.5,
            max_relative_humidity: 82.0,
            min_relative_humidity: 30.0,
            wind_speed: 3.5,
            solar_radiation: 15.984,
        }
    }

    fn radiation(net_radiation: f64) -> RadiationBalance {
        RadiationBalance {
            clear_sky_radiation: 31.19,
            clear_sky_ratio: 0.5,
            net_shortwave: net_radiation,
            net_longwave: 0.0,
            net_radiation,
            soil_heat_flux: 0.0,
        }
    }

    fn evaluate(
        aggregate: &DailyAggregate,
        radiation: &RadiationBalance,
        altitude: f64,
    ) -> Result<f64, ComputationError> {
        let psychrometrics = Psychrometrics::compute(aggregate, altitude);
        PenmanMonteith::compute(aggregate, &psychrometrics, radiation).map(|pm| pm.et0)
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_saturation_vapour_pressure() {
        assert_close(saturation_vapour_pressure(0.0), 0.6108);
        // FAO-56 Annex 2, table 2.3: 2.338 kPa at 20 °C
        assert!((saturation_vapour_pressure(20.0) - 2.338).abs() < 1e-3);
    }

    #[test]
    fn test_atmospheric_pressure() {
        assert_close(atmospheric_pressure(0.0), 101.3);
        assert_close(atmospheric_pressure(8.0), 101.205_470_634_850_98);
        assert!(atmospheric_pressure(1800.0) < 82.0);
    }

    #[test]
    fn test_psychrometrics() {
        let psy = Psychrometrics::compute(&aggregate(), 8.0);
        assert_close(psy.slope, 0.183_835_009_120_509);
        assert_close(psy.psychrometric_constant, 0.067_301_637_972_175_9);
        assert_close(psy.actual_vapour_pressure, 1.520_124_410_758_586_3);
        assert_close(psy.vapour_pressure_deficit, 1.758_166_316_130_947_8);
    }

    #[test]
    fn test_reference_et0() -> Result<(), ComputationError> {
        assert_close(
            evaluate(&aggregate(), &radiation(10.086_427_994_504_026), 8.0)?,
            6.066_585_701_802_469,
        );
        assert_close(
            evaluate(&aggregate(), &radiation(19.779_136_360_976_12), 8.0)?,
            8.261_459_931_314_384,
        );
        Ok(())
    }

    #[test]
    fn test_et0_increases_with_net_radiation() -> Result<(), ComputationError> {
        let mut previous = f64::NEG_INFINITY;
        for rn in [-2.0, 0.0, 5.0, 10.0, 20.0] {
            let et0 = evaluate(&aggregate(), &radiation(rn), 8.0)?;
            assert!(et0 > previous);
            previous = et0;
        }
        Ok(())
    }

    #[test]
    fn test_et0_increases_with_vapour_pressure_deficit() -> Result<(), ComputationError> {
        let humid = DailyAggregate {
            min_relative_humidity: 70.0,
            ..aggregate()
        };
        let dry = DailyAggregate {
            min_relative_humidity: 20.0,
            ..aggregate()
        };
        assert!(
            Psychrometrics::compute(&dry, 8.0).vapour_pressure_deficit
                > Psychrometrics::compute(&humid, 8.0).vapour_pressure_deficit
        );
        assert!(evaluate(&dry, &radiation(10.0), 8.0)? > evaluate(&humid, &radiation(10.0), 8.0)?);
        Ok(())
    }

    #[test]
    fn test_aerodynamic_term_increases_with_wind() -> Result<(), ComputationError> {
        let mut previous = f64::NEG_INFINITY;
        for wind_speed in [0.5, 1.0, 2.0, 4.0, 8.0] {
            let day = DailyAggregate {
                wind_speed,
                ..aggregate()
            };
            let psy = Psychrometrics::compute(&day, 8.0);
            let pm = PenmanMonteith::compute(&day, &psy, &radiation(10.0))?;
            assert!(pm.aerodynamic_term > previous);
            previous = pm.aerodynamic_term;
        }
        Ok(())
    }

    #[test]
    fn test_negative_et0_is_not_an_error() -> Result<(), ComputationError> {
        let saturated = DailyAggregate {
            max_relative_humidity: 100.0,
            min_relative_humidity: 100.0,
            max_temperature: 10.0,
            min_temperature: 10.0,
            mean_temperature: 10.0,
            ..aggregate()
        };
        assert!(evaluate(&saturated, &radiation(-3.0), 8.0)? < 0.0);
        Ok(())
    }

    #[test]
    fn test_non_finite_et0() {
        let frozen = DailyAggregate {
            mean_temperature: -273.0,
            ..aggregate()
        };
        assert_eq!(
            evaluate(&frozen, &radiation(10.0), 8.0),
            Err(ComputationError::NonFinite { quantity: "ET0" })
        );
    }
}
