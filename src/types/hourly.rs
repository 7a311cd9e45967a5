//! Positional hourly rows as delivered by a weather source, and their conversion
//! into numeric samples plus per-site metadata.

use crate::types::site::{EncodedLatitude, SiteMetadata};
use std::fmt;
use thiserror::Error;

/// Fixed column layout of a row returned by an [`crate::HourlySource`].
///
/// The position of each variant is its column index in the row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HourlyColumn {
    /// Observation timestamp, `YYYY-MM-DD HH:MM[:SS]`.
    RecordedAt,
    /// Height of the wind sensor [m]. Read but not used by FAO-56.
    SensorHeight,
    /// Site latitude in degrees + minutes encoding (see [`EncodedLatitude`]).
    Latitude,
    Longitude,
    WindDirection,
    /// Wind speed [km/h].
    WindSpeed,
    /// Relative humidity [%].
    RelativeHumidity,
    /// Global shortwave radiation [W/m²].
    ShortwaveRadiation,
    /// Air temperature [°C].
    Temperature,
}

impl HourlyColumn {
    pub const ALL: [HourlyColumn; 9] = [
        HourlyColumn::RecordedAt,
        HourlyColumn::SensorHeight,
        HourlyColumn::Latitude,
        HourlyColumn::Longitude,
        HourlyColumn::WindDirection,
        HourlyColumn::WindSpeed,
        HourlyColumn::RelativeHumidity,
        HourlyColumn::ShortwaveRadiation,
        HourlyColumn::Temperature,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            HourlyColumn::RecordedAt => "recorded_at",
            HourlyColumn::SensorHeight => "sensor_height",
            HourlyColumn::Latitude => "latitude",
            HourlyColumn::Longitude => "longitude",
            HourlyColumn::WindDirection => "wind_direction",
            HourlyColumn::WindSpeed => "wind_speed",
            HourlyColumn::RelativeHumidity => "relative_humidity",
            HourlyColumn::ShortwaveRadiation => "shortwave_radiation",
            HourlyColumn::Temperature => "temperature",
        }
    }

    pub(crate) fn schema_column_names() -> Vec<&'static str> {
        Self::ALL.iter().map(|c| c.name()).collect()
    }
}

impl fmt::Display for HourlyColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Reasons a day's rows cannot be turned into samples.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum IncompleteData {
    #[error("No hourly rows returned for the day")]
    NoRows,

    #[error("Row {row} has {found} columns, expected at least {expected}")]
    ShortRow {
        row: usize,
        found: usize,
        expected: usize,
    },

    #[error("Row {row} is missing a value for '{column}'")]
    MissingValue { row: usize, column: HourlyColumn },

    #[error("Row {row} has a non-numeric value for '{column}': {value:?}")]
    NonNumeric {
        row: usize,
        column: HourlyColumn,
        value: String,
    },
}

/// One raw row from a weather source. Cells are kept as text so that parsing
/// failures surface as [`IncompleteData`] instead of being lost upstream.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct HourlyRow {
    cells: Vec<Option<String>>,
}

impl HourlyRow {
    pub fn new(cells: Vec<Option<String>>) -> Self {
        Self { cells }
    }

    /// Builds a row where every cell is present.
    ///
    /// ```
    /// use et0::{HourlyColumn, HourlyRow};
    ///
    /// let row = HourlyRow::from_values(["2022-07-01 12:00", "2", "38.25", "27.1", "180", "10.8", "55", "420", "24.5"]);
    /// assert_eq!(row.cell(HourlyColumn::Temperature), Some("24.5"));
    /// ```
    pub fn from_values<I, T>(values: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: ToString,
    {
        Self {
            cells: values.into_iter().map(|v| Some(v.to_string())).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn cell(&self, column: HourlyColumn) -> Option<&str> {
        self.cells.get(column.index()).and_then(|c| c.as_deref())
    }

    fn number(&self, row: usize, column: HourlyColumn) -> Result<f64, IncompleteData> {
        let raw = self
            .cell(column)
            .ok_or(IncompleteData::MissingValue { row, column })?;
        raw.trim()
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| IncompleteData::NonNumeric {
                row,
                column,
                value: raw.to_string(),
            })
    }
}

/// A single parsed hourly observation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HourlySample {
    /// air temperature [°C]
    pub temperature: f64,
    /// relative humidity [%]
    pub relative_humidity: f64,
    /// wind speed as reported by the station [km/h]
    pub wind_speed: f64,
    /// shortwave radiation [W/m²]
    pub shortwave_radiation: f64,
}

/// The numeric content of one day of rows.
#[derive(Debug, Clone, PartialEq)]
pub struct DayObservations {
    pub samples: Vec<HourlySample>,
    pub site: SiteMetadata,
}

impl DayObservations {
    /// Parses every row of a day. Sensor height and latitude are taken from the
    /// first row; the altitude is a site constant and is not read from the data.
    pub fn parse(rows: &[HourlyRow], altitude: f64) -> Result<Self, IncompleteData> {
        let first = rows.first().ok_or(IncompleteData::NoRows)?;

        let mut samples = Vec::with_capacity(rows.len());
        for (idx, row) in rows.iter().enumerate() {
            if row.len() < HourlyColumn::ALL.len() {
                return Err(IncompleteData::ShortRow {
                    row: idx,
                    found: row.len(),
                    expected: HourlyColumn::ALL.len(),
                });
            }
            samples.push(HourlySample {
                temperature: row.number(idx, HourlyColumn::Temperature)?,
                relative_humidity: row.number(idx, HourlyColumn::RelativeHumidity)?,
                wind_speed: row.number(idx, HourlyColumn::WindSpeed)?,
                shortwave_radiation: row.number(idx, HourlyColumn::ShortwaveRadiation)?,
            });
        }

        let site = SiteMetadata {
            latitude: EncodedLatitude(first.number(0, HourlyColumn::Latitude)?),
            altitude,
            sensor_height: first.number(0, HourlyColumn::SensorHeight)?,
        };

        Ok(Self { samples, site })
    }
}
