use polars::error::PolarsError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WeatherDataError {
    #[error("Failed to resolve cache directory")]
    CacheDirResolution,

    #[error("Failed to create cache directory '{0}'")]
    CacheDirCreation(PathBuf, #[source] std::io::Error),

    // Errors during parquet writing (inside blocking task)
    #[error("I/O error writing parquet cache file '{0}'")]
    ParquetWriteIo(PathBuf, #[source] std::io::Error),
    #[error("Encoding error writing parquet cache file '{0}'")]
    ParquetWritePolars(PathBuf, #[source] PolarsError),

    #[error("Failed to scan parquet cache file '{0}'")]
    ParquetScan(PathBuf, #[source] PolarsError),

    #[error("Network request failed for {0}")]
    NetworkRequest(String, #[source] reqwest::Error),

    #[error("HTTP request failed for {url} with status {status}")]
    HttpStatus {
        url: String,
        status: reqwest::StatusCode,
        #[source]
        source: reqwest::Error,
    },

    #[error("Data download or decompression failed")]
    DownloadIo(#[from] std::io::Error),

    #[error("Failed to read local data file '{0}'")]
    LocalRead(PathBuf, #[source] std::io::Error),

    #[error("No data file for site '{site}' in '{directory}'")]
    SiteFileNotFound { site: String, directory: PathBuf },

    // Errors during CSV reading (inside blocking task)
    #[error("I/O error processing CSV data for site '{site}'")]
    CsvReadIo {
        site: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Parsing error processing CSV data for site '{site}'")]
    CsvReadPolars {
        site: String,
        #[source]
        source: PolarsError,
    },

    #[error("CSV column count ({found}) does not match schema length ({expected}) for site {site}")]
    SchemaMismatch {
        site: String,
        expected: usize,
        found: usize,
    },

    #[error("Failed to rename columns for site {site}: {source}")]
    ColumnRenameError { site: String, source: PolarsError },

    #[error("Background task failed to complete")]
    TaskJoin(#[from] tokio::task::JoinError),

    #[error("Failed processing DataFrame: {0}")]
    DataFrameProcessing(#[from] PolarsError),

    #[error("Required column '{0}' not found in DataFrame")]
    ColumnNotFound(String, #[source] PolarsError),

    /// For [`crate::HourlySource`] implementations outside this crate whose
    /// backend (database, service) cannot serve the site. Aborts the run like
    /// any other source failure.
    #[error("Weather source unavailable for site '{site}': {message}")]
    Unavailable { site: String, message: String },
}
