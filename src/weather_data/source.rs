use crate::types::hourly::HourlyRow;
use crate::weather_data::error::WeatherDataError;
use chrono::NaiveDate;
use std::future::Future;

/// A provider of hourly observation rows for a site.
///
/// Implementations return the rows recorded on `date` in the column layout of
/// [`crate::HourlyColumn`]. An empty vector means "no data for that day" and is
/// not an error; `Err` is reserved for failures of the source itself
/// (unreachable server, unreadable file) and aborts a pipeline run.
///
/// Resources are acquired when the source is constructed and released when it
/// is dropped. Site-level loading belongs in [`HourlySource::prepare`], which a
/// run awaits once before the first day and without the per-day timeout.
pub trait HourlySource {
    /// Makes `site_id` ready to serve days. Failures abort the run.
    fn prepare(
        &self,
        site_id: &str,
    ) -> impl Future<Output = Result<(), WeatherDataError>> + Send {
        let _ = site_id;
        async { Ok(()) }
    }

    fn fetch(
        &self,
        site_id: &str,
        date: NaiveDate,
    ) -> impl Future<Output = Result<Vec<HourlyRow>, WeatherDataError>> + Send;
}
