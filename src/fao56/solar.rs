use super::constants::SOLAR_CONSTANT;
use super::error::ComputationError;
use chrono::{Datelike, NaiveDate};
use std::f64::consts::PI;

/// Day-of-year index used by the station network's ET0 series.
///
/// This is the month/day approximation `trunc(275 m / 9 - 30 + d) - 2`, with
/// +2 for January and February and +1 from March on in years divisible by 4.
/// It is not the exact ordinal (century years are treated as leap years) and
/// must stay as is to reproduce published series.
///
/// ```
/// use et0::day_of_year;
///
/// assert_eq!(day_of_year(2022, 7, 1), 182);
/// assert_eq!(day_of_year(2024, 7, 1), 183);
/// ```
pub fn day_of_year(year: i32, month: u32, day: u32) -> i32 {
    let mut j = (275.0 * month as f64 / 9.0 - 30.0 + day as f64) as i32 - 2;
    if month < 3 {
        j += 2;
    } else if year % 4 == 0 {
        j += 1;
    }
    j
}

/// Sun-Earth geometry for one day at one latitude.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarGeometry {
    pub day_of_year: i32,
    /// inverse relative Earth-Sun distance
    pub inverse_distance: f64,
    /// solar declination [rad]
    pub declination: f64,
    /// sunset hour angle [rad]
    pub sunset_hour_angle: f64,
    /// extraterrestrial radiation Ra [MJ m^-2 day^-1]
    pub extraterrestrial_radiation: f64,
    /// maximum possible sunshine duration N [h]
    pub daylight_hours: f64,
}

impl SolarGeometry {
    /// Computes the geometry for `date` at `latitude` (radians).
    ///
    /// Fails when the sun never rises or never sets at that latitude, i.e. when
    /// `-tan(lat) tan(decl)` falls outside the domain of `acos`.
    pub fn compute(date: NaiveDate, latitude: f64) -> Result<Self, ComputationError> {
        let j = day_of_year(date.year(), date.month(), date.day());
        let jf = j as f64;

        let inverse_distance = 1.0 + 0.033 * ((2.0 * PI * jf) / 365.0).cos();
        let declination = 0.409 * ((2.0 * PI * jf / 365.0) - 1.39).sin();

        let argument = -latitude.tan() * declination.tan();
        if !(-1.0..=1.0).contains(&argument) {
            return Err(ComputationError::SunsetHourAngle {
                latitude: latitude.to_degrees(),
                declination,
                argument,
            });
        }
        let sunset_hour_angle = argument.acos();

        let extraterrestrial_radiation = (24.0 * 60.0 / PI)
            * SOLAR_CONSTANT
            * inverse_distance
            * (sunset_hour_angle * latitude.sin() * declination.sin()
                + latitude.cos() * declination.cos() * sunset_hour_angle.sin());

        Ok(Self {
            day_of_year: j,
            inverse_distance,
            declination,
            sunset_hour_angle,
            extraterrestrial_radiation,
            daylight_hours: 24.0 * sunset_hour_angle / PI,
        })
    }
}
