//! Turns a period of hourly observations into a daily ET0 series.

use crate::config::SiteConfig;
use crate::error::Et0Error;
use crate::fao56::constants::{DEFAULT_ALBEDO, DEFAULT_ALTITUDE};
use crate::fao56::error::ComputationError;
use crate::fao56::{compute_day, DayComputation};
use crate::types::hourly::{DayObservations, HourlyRow, IncompleteData};
use crate::types::period::DatePeriod;
use crate::types::series::{Et0Entry, Et0Series};
use crate::weather_data::error::WeatherDataError;
use crate::weather_data::source::HourlySource;
use bon::bon;
use chrono::NaiveDate;
use futures_util::{stream, StreamExt};
use log::{debug, info, warn};
use std::pin::pin;
use std::time::Duration;
use thiserror::Error;

const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(30);
const DEFAULT_CONCURRENCY: usize = 1;

/// Why a day has no entry in the series.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SkipReason {
    #[error("incomplete data: {0}")]
    IncompleteData(#[from] IncompleteData),

    #[error("computation failed: {0}")]
    Computation(#[from] ComputationError),

    #[error("fetching rows timed out after {0:?}")]
    FetchTimeout(Duration),
}

#[derive(Debug, Clone, PartialEq)]
pub struct SkippedDay {
    pub date: NaiveDate,
    pub reason: SkipReason,
}

/// Result of a run: the computed series plus one record per skipped day.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DailyRun {
    pub series: Et0Series,
    pub skipped: Vec<SkippedDay>,
}

/// Computes daily ET0 for one site.
///
/// Each day of the requested period is fetched from an [`HourlySource`],
/// aggregated and evaluated independently. Days with missing or malformed
/// rows, out-of-domain geometry or a fetch timeout are skipped and reported in
/// [`DailyRun::skipped`]; a failing source aborts the whole run.
///
/// # Examples
///
/// ```rust
/// use et0::{Et0Pipeline, InMemorySource, Month, Et0Error};
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), Et0Error> {
/// let pipeline = Et0Pipeline::builder()
///     .site_id("789")
///     .altitude(8.0)
///     .build();
///
/// let source = InMemorySource::new();
/// let run = pipeline
///     .run()
///     .source(&source)
///     .period(Month::new(7, 2022))
///     .call()
///     .await?;
///
/// // No rows were stored, so every day is skipped.
/// assert!(run.series.is_empty());
/// assert_eq!(run.skipped.len(), 31);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Et0Pipeline {
    site_id: String,
    altitude: f64,
    albedo: f64,
    fetch_timeout: Duration,
    concurrency: usize,
}

#[bon]
impl Et0Pipeline {
    /// Creates a pipeline for `site_id`.
    ///
    /// # Arguments
    ///
    /// * `.site_id(..)`: **Required.** Identifier passed to the source.
    /// * `.altitude(f64)`: Optional. Site altitude in metres, default 8.
    /// * `.albedo(f64)`: Optional. Default 0.23 (grass reference).
    /// * `.fetch_timeout(Duration)`: Optional. Bound on one day's fetch, default 30 s.
    /// * `.concurrency(usize)`: Optional. Days processed at once, default 1.
    #[builder]
    pub fn new(
        #[builder(into)] site_id: String,
        altitude: Option<f64>,
        albedo: Option<f64>,
        fetch_timeout: Option<Duration>,
        concurrency: Option<usize>,
    ) -> Self {
        Self {
            site_id,
            altitude: altitude.unwrap_or(DEFAULT_ALTITUDE),
            albedo: albedo.unwrap_or(DEFAULT_ALBEDO),
            fetch_timeout: fetch_timeout.unwrap_or(DEFAULT_FETCH_TIMEOUT),
            // Zero would never poll a day
            concurrency: concurrency.unwrap_or(DEFAULT_CONCURRENCY).max(1),
        }
    }

    pub fn from_config(config: &SiteConfig) -> Self {
        Self::builder()
            .site_id(config.site_id.clone())
            .altitude(config.altitude)
            .albedo(config.albedo)
            .maybe_fetch_timeout(config.fetch_timeout())
            .maybe_concurrency(config.concurrency)
            .build()
    }

    pub fn site_id(&self) -> &str {
        &self.site_id
    }

    /// Runs every day of `period` through the pipeline.
    ///
    /// # Arguments
    ///
    /// * `.source(&S)`: **Required.** Where hourly rows come from.
    /// * `.period(P)`: **Required.** A [`NaiveDate`], `(NaiveDate, NaiveDate)`,
    ///   [`crate::Year`] or [`crate::Month`].
    ///
    /// # Errors
    ///
    /// Returns [`Et0Error::InvalidPeriod`] if the period cannot be resolved or
    /// starts after it ends, and [`Et0Error::WeatherData`] if the source cannot
    /// prepare the site or fails for any day.
    #[builder]
    pub async fn run<S, P>(&self, source: &S, period: P) -> Result<DailyRun, Et0Error>
    where
        S: HourlySource + Sync,
        P: DatePeriod,
    {
        let range = period.get_date_period().ok_or(Et0Error::InvalidPeriod)?;
        if range.start > range.end {
            return Err(Et0Error::InvalidPeriod);
        }
        info!(
            "Computing ET0 for site {} from {} to {} ({} days)",
            self.site_id,
            range.start,
            range.end,
            range.num_days()
        );

        // Site-level loading is not bounded by the per-day timeout.
        source.prepare(&self.site_id).await?;

        // `buffered` yields in input order regardless of completion order.
        let mut days = pin!(stream::iter(range.days())
            .map(|date| async move { (date, self.process_day(source, date).await) })
            .buffered(self.concurrency));

        let mut run = DailyRun::default();
        while let Some((date, outcome)) = days.next().await {
            match outcome? {
                Ok(et0) => {
                    debug!("ET0 for site {} on {}: {}", self.site_id, date, et0);
                    run.series.insert(Et0Entry { date, et0 });
                }
                Err(reason) => {
                    warn!("Skipping {} for site {}: {}", date, self.site_id, reason);
                    run.skipped.push(SkippedDay { date, reason });
                }
            }
        }

        info!(
            "Finished site {}: {} days computed, {} skipped",
            self.site_id,
            run.series.len(),
            run.skipped.len()
        );
        Ok(run)
    }

    async fn process_day<S>(
        &self,
        source: &S,
        date: NaiveDate,
    ) -> Result<Result<f64, SkipReason>, WeatherDataError>
    where
        S: HourlySource + Sync,
    {
        let fetch = source.fetch(&self.site_id, date);
        let rows = match tokio::time::timeout(self.fetch_timeout, fetch).await {
            Ok(rows) => rows?,
            Err(_) => return Ok(Err(SkipReason::FetchTimeout(self.fetch_timeout))),
        };
        Ok(self.compute_rows(date, &rows).map(|day| day.et0()))
    }

    /// Parses and evaluates one day of rows without touching a source.
    pub fn compute_rows(
        &self,
        date: NaiveDate,
        rows: &[HourlyRow],
    ) -> Result<DayComputation, SkipReason> {
        let observations = DayObservations::parse(rows, self.altitude)?;
        Ok(compute_day(
            date,
            &observations.samples,
            &observations.site,
            self.albedo,
        )?)
    }
}
