use std::f64::consts::PI;

/// Latitude as stored by the station loggers: the integer part holds degrees
/// and the fractional part holds minutes divided by 100, so `38.25` is 38°25'.
///
/// # Examples
///
/// ```
/// use et0::EncodedLatitude;
///
/// let lat = EncodedLatitude(38.25);
/// assert!((lat.decimal_degrees() - 38.416_666).abs() < 1e-6);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EncodedLatitude(pub f64);

impl EncodedLatitude {
    /// Decodes to decimal degrees. Negative (southern) latitudes keep their sign
    /// on both the degree and the minute part.
    pub fn decimal_degrees(self) -> f64 {
        let degrees = self.0.trunc();
        let minutes = self.0 - degrees;
        degrees + (minutes / 60.0 * 100.0)
    }

    pub fn radians(self) -> f64 {
        PI / 180.0 * self.decimal_degrees()
    }
}

/// Per-site constants needed by the FAO-56 equations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SiteMetadata {
    pub latitude: EncodedLatitude,
    /// elevation above sea level [m]
    pub altitude: f64,
    /// wind sensor height [m]
    pub sensor_height: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_latitude() {
        assert!((EncodedLatitude(38.25).decimal_degrees() - 38.416_666_666_666_664).abs() < 1e-12);
        assert_eq!(EncodedLatitude(40.0).decimal_degrees(), 40.0);
        assert!((EncodedLatitude(12.30).decimal_degrees() - 12.5).abs() < 1e-12);
    }

    #[test]
    fn test_decode_southern_latitude() {
        assert!((EncodedLatitude(-33.45).decimal_degrees() + 33.75).abs() < 1e-12);
    }

    #[test]
    fn test_radians() {
        assert!((EncodedLatitude(90.0).radians() - PI / 2.0).abs() < 1e-15);
    }
}
