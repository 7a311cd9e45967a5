use thiserror::Error;

/// Numeric failures of the per-day FAO-56 computation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ComputationError {
    #[error("No hourly samples to aggregate")]
    NoSamples,

    #[error("Sunset hour angle undefined at latitude {latitude}° (declination {declination} rad): acos argument {argument} outside [-1, 1]")]
    SunsetHourAngle {
        latitude: f64,
        declination: f64,
        argument: f64,
    },

    #[error("Clear-sky radiation must be positive, got {0} MJ/m²/day")]
    ClearSkyRadiation(f64),

    #[error("Actual vapour pressure is negative ({0} kPa)")]
    NegativeVapourPressure(f64),

    #[error("Computed {quantity} is not finite")]
    NonFinite { quantity: &'static str },
}

pub(crate) fn ensure_finite(value: f64, quantity: &'static str) -> Result<f64, ComputationError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ComputationError::NonFinite { quantity })
    }
}
