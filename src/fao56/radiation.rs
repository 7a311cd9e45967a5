use super::aggregate::DailyAggregate;
use super::constants::{MAX_CLEAR_SKY_RATIO, MIN_CLEAR_SKY_RATIO, SOIL_HEAT_FLUX, STEFAN_BOLTZMANN};
use super::error::ComputationError;

/// Net radiation budget at the crop surface [MJ m^-2 day^-1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadiationBalance {
    /// clear-sky radiation Rso
    pub clear_sky_radiation: f64,
    /// Rs / Rso, clamped to [0.3, 1]
    pub clear_sky_ratio: f64,
    /// net shortwave radiation Rns
    pub net_shortwave: f64,
    /// net outgoing longwave radiation Rnl
    pub net_longwave: f64,
    /// net radiation Rn = Rns - Rnl
    pub net_radiation: f64,
    /// soil heat flux G, zero for daily steps
    pub soil_heat_flux: f64,
}

/// Clamps the measured-to-clear-sky ratio to [0.3, 1]. Sensors reading above
/// the clear-sky ceiling count as clear sky.
pub fn clamp_clear_sky_ratio(ratio: f64) -> f64 {
    ratio.clamp(MIN_CLEAR_SKY_RATIO, MAX_CLEAR_SKY_RATIO)
}

impl RadiationBalance {
    pub fn compute(
        aggregate: &DailyAggregate,
        extraterrestrial_radiation: f64, // Ra [MJ m^-2 day^-1]
        altitude: f64,                   // [m]
        albedo: f64,                     // [-]
        actual_vapour_pressure: f64,     // ea [kPa]
    ) -> Result<Self, ComputationError> {
        let clear_sky_radiation = (0.75 + 2e-5 * altitude) * extraterrestrial_radiation;
        if clear_sky_radiation.is_nan() || clear_sky_radiation <= 0.0 {
            return Err(ComputationError::ClearSkyRadiation(clear_sky_radiation));
        }
        if actual_vapour_pressure < 0.0 {
            return Err(ComputationError::NegativeVapourPressure(actual_vapour_pressure));
        }

        let solar_radiation = aggregate.solar_radiation;
        let clear_sky_ratio = clamp_clear_sky_ratio(solar_radiation / clear_sky_radiation);

        let net_shortwave = (1.0 - albedo) * solar_radiation;
        let kelvin_max = (aggregate.max_temperature + 273.6).powf(4.0);
        let kelvin_min = (aggregate.min_temperature + 273.6).powf(4.0);
        let net_longwave = STEFAN_BOLTZMANN
            * ((kelvin_max + kelvin_min) / 2.0)
            * (0.34 - 0.14 * actual_vapour_pressure.sqrt())
            * (1.35 * clear_sky_ratio - 0.35);

        Ok(Self {
            clear_sky_radiation,
            clear_sky_ratio,
            net_shortwave,
            net_longwave,
            net_radiation: net_shortwave - net_longwave,
            soil_heat_flux: SOIL_HEAT_FLUX,
        })
    }
}
