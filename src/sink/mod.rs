//! Destinations for a finished ET0 series.

pub mod csv_sink;
pub mod error;

use crate::sink::error::SinkError;
use crate::types::series::Et0Series;

/// Persists a completed series. Entries arrive in ascending date order.
pub trait SeriesSink {
    fn write(&mut self, series: &Et0Series) -> Result<(), SinkError>;
}

/// Collects the `(DD/MM/YYYY, value)` rows in memory.
impl SeriesSink for Vec<(String, String)> {
    fn write(&mut self, series: &Et0Series) -> Result<(), SinkError> {
        self.extend(series.to_rows());
        Ok(())
    }
}
