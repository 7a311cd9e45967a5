use crate::types::hourly::HourlyRow;
use crate::weather_data::error::WeatherDataError;
use crate::weather_data::source::HourlySource;
use chrono::NaiveDate;
use std::collections::HashMap;

/// Rows held in memory, keyed by site and date.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use et0::{HourlyRow, InMemorySource};
///
/// let mut source = InMemorySource::new();
/// let day = NaiveDate::from_ymd_opt(2022, 7, 1).unwrap();
/// let row = HourlyRow::from_values([
///     "2022-07-01 12:00", "2", "38.25", "27.1", "180", "10.8", "55", "420", "24.5",
/// ]);
/// source.insert("789", day, vec![row]);
/// assert_eq!(source.len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    rows: HashMap<(String, NaiveDate), Vec<HourlyRow>>,
}

impl InMemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores the rows of one day, replacing any rows previously stored for it.
    pub fn insert(&mut self, site_id: impl Into<String>, date: NaiveDate, rows: Vec<HourlyRow>) {
        self.rows.insert((site_id.into(), date), rows);
    }

    /// Number of stored days.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl HourlySource for InMemorySource {
    async fn fetch(
        &self,
        site_id: &str,
        date: NaiveDate,
    ) -> Result<Vec<HourlyRow>, WeatherDataError> {
        Ok(self
            .rows
            .get(&(site_id.to_string(), date))
            .cloned()
            .unwrap_or_default())
    }
}
