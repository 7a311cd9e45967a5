//! Hourly rows from per-site CSV files, local or downloaded in bulk.

use crate::types::hourly::HourlyRow;
use crate::utils::{ensure_cache_dir_exists, get_cache_dir};
use crate::weather_data::data_extractor::extract_day_rows;
use crate::weather_data::data_loader::DataLocation;
use crate::weather_data::error::WeatherDataError;
use crate::weather_data::frame_fetcher::FrameFetcher;
use crate::weather_data::source::HourlySource;
use chrono::NaiveDate;
use std::path::PathBuf;

/// A [`HourlySource`] backed by headerless CSV files, one per site, with the
/// columns of [`crate::HourlyColumn`] in order.
///
/// A site's file is loaded on first use and kept in memory for the lifetime of
/// the source. Remote files are additionally cached on disk as Parquet.
///
/// # Examples
///
/// ```no_run
/// # use et0::{CsvHourlySource, HourlySource, WeatherDataError};
/// # use chrono::NaiveDate;
/// # #[tokio::main]
/// # async fn main() -> Result<(), WeatherDataError> {
/// let source = CsvHourlySource::local("data/stations");
/// let rows = source
///     .fetch("789", NaiveDate::from_ymd_opt(2022, 7, 1).unwrap())
///     .await?;
/// println!("{} hourly rows", rows.len());
/// # Ok(())
/// # }
/// ```
pub struct CsvHourlySource {
    fetcher: FrameFetcher,
}

impl CsvHourlySource {
    /// Reads `{directory}/{site}.csv` (or `.csv.gz`).
    pub fn local(directory: impl Into<PathBuf>) -> Self {
        Self {
            fetcher: FrameFetcher::new(DataLocation::Local {
                directory: directory.into(),
            }),
        }
    }

    /// Downloads `{base_url}/{site}.csv.gz`, caching under the default cache
    /// directory of the platform.
    pub async fn remote(base_url: impl Into<String>) -> Result<Self, WeatherDataError> {
        let cache_folder = get_cache_dir().ok_or(WeatherDataError::CacheDirResolution)?;
        Self::remote_with_cache_folder(base_url, cache_folder).await
    }

    pub async fn remote_with_cache_folder(
        base_url: impl Into<String>,
        cache_folder: PathBuf,
    ) -> Result<Self, WeatherDataError> {
        ensure_cache_dir_exists(&cache_folder)
            .await
            .map_err(|e| WeatherDataError::CacheDirCreation(cache_folder.clone(), e))?;
        Ok(Self {
            fetcher: FrameFetcher::new(DataLocation::Remote {
                base_url: base_url.into(),
                cache_dir: cache_folder,
            }),
        })
    }
}

impl HourlySource for CsvHourlySource {
    /// Reads, downloads or scans the site's whole file.
    async fn prepare(&self, site_id: &str) -> Result<(), WeatherDataError> {
        self.fetcher.get_cache_lazyframe(site_id).await.map(|_| ())
    }

    async fn fetch(
        &self,
        site_id: &str,
        date: NaiveDate,
    ) -> Result<Vec<HourlyRow>, WeatherDataError> {
        let frame = self.fetcher.get_cache_lazyframe(site_id).await?;
        extract_day_rows(frame, date)
    }
}
