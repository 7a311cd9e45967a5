use crate::types::hourly::HourlyColumn;
use crate::weather_data::error::WeatherDataError;
use async_compression::tokio::bufread::GzipDecoder;
use futures_util::TryStreamExt;
use log::{info, warn};
use polars::frame::DataFrame;
use polars::prelude::*;
use reqwest::Client;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tokio::io::{AsyncBufRead, AsyncReadExt, BufReader};
use tokio::{fs, task};
use tokio_util::io::StreamReader;

/// Where per-site hourly CSV files live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataLocation {
    /// `{base_url}/{site}.csv.gz`, downloaded once and cached as Parquet in `cache_dir`.
    Remote { base_url: String, cache_dir: PathBuf },
    /// `{directory}/{site}.csv` or `{directory}/{site}.csv.gz`, read on first use.
    Local { directory: PathBuf },
}

pub struct WeatherDataLoader {
    location: DataLocation,
    download_client: Client,
}

impl WeatherDataLoader {
    pub fn new(location: DataLocation) -> WeatherDataLoader {
        let download_client = Client::new();
        WeatherDataLoader {
            location,
            download_client,
        }
    }

    /// Loads the full hourly table of a site as a LazyFrame with the
    /// [`HourlyColumn`] names. Every column is text.
    pub async fn get_frame(&self, site: &str) -> Result<LazyFrame, WeatherDataError> {
        match &self.location {
            DataLocation::Local { directory } => {
                let raw_bytes = Self::read_local(directory, site).await?;
                let df = Self::csv_to_dataframe(raw_bytes, site).await?;
                Ok(df.lazy())
            }
            DataLocation::Remote {
                base_url,
                cache_dir,
            } => {
                let parquet_path = cache_dir.join(format!("hourly-{}.parquet", site));

                if fs::metadata(&parquet_path).await.is_ok() {
                    info!("Cache hit for site {} at {:?}", site, parquet_path);
                } else {
                    warn!(
                        "Cache miss for site {}. Downloading and processing.",
                        site
                    );
                    let raw_bytes = self.download(base_url, site).await?;
                    let df = Self::csv_to_dataframe(raw_bytes, site).await?;

                    fs::create_dir_all(cache_dir)
                        .await
                        .map_err(|e| WeatherDataError::CacheDirCreation(cache_dir.clone(), e))?;

                    Self::cache_dataframe(df, &parquet_path).await?;
                    info!("Cached hourly data for site {} to {:?}", site, parquet_path);
                }

                LazyFrame::scan_parquet(&parquet_path, Default::default())
                    .map_err(|e| WeatherDataError::ParquetScan(parquet_path.clone(), e))
            }
        }
    }

    /// Downloads and decompresses the hourly file of a site.
    async fn download(&self, base_url: &str, site: &str) -> Result<Vec<u8>, WeatherDataError> {
        let url = format!("{}/{}.csv.gz", base_url.trim_end_matches('/'), site);
        info!("Downloading data from {}", url);

        let response = self
            .download_client
            .get(&url)
            .send()
            .await
            .map_err(|e| WeatherDataError::NetworkRequest(url.clone(), e))?;

        let response = match response.error_for_status() {
            Ok(resp) => resp,
            Err(e) => {
                warn!("HTTP error for {}: {:?}", url, e);
                return Err(if let Some(status) = e.status() {
                    WeatherDataError::HttpStatus {
                        url,
                        status,
                        source: e,
                    }
                } else {
                    WeatherDataError::NetworkRequest(url, e)
                });
            }
        };

        let stream = response
            .bytes_stream()
            .map_err(std::io::Error::other);
        let decompressed = Self::decompress(StreamReader::new(stream)).await?;
        info!(
            "Downloaded and decompressed {} bytes for site {}",
            decompressed.len(),
            site
        );
        Ok(decompressed)
    }

    async fn read_local(directory: &Path, site: &str) -> Result<Vec<u8>, WeatherDataError> {
        let plain = directory.join(format!("{}.csv", site));
        if fs::metadata(&plain).await.is_ok() {
            info!("Reading hourly data for site {} from {:?}", site, plain);
            return fs::read(&plain)
                .await
                .map_err(|e| WeatherDataError::LocalRead(plain, e));
        }

        let gzipped = directory.join(format!("{}.csv.gz", site));
        if fs::metadata(&gzipped).await.is_ok() {
            info!("Reading compressed hourly data for site {} from {:?}", site, gzipped);
            let file = fs::File::open(&gzipped)
                .await
                .map_err(|e| WeatherDataError::LocalRead(gzipped.clone(), e))?;
            return Self::decompress(BufReader::new(file)).await;
        }

        Err(WeatherDataError::SiteFileNotFound {
            site: site.to_string(),
            directory: directory.to_path_buf(),
        })
    }

    async fn decompress<R>(reader: R) -> Result<Vec<u8>, WeatherDataError>
    where
        R: AsyncBufRead + Unpin,
    {
        let mut decoder = GzipDecoder::new(reader);
        let mut decompressed = Vec::new();
        decoder
            .read_to_end(&mut decompressed)
            .await
            .map_err(WeatherDataError::DownloadIo)?;
        Ok(decompressed)
    }

    /// Parses raw CSV bytes (without header) into a DataFrame using a blocking task.
    /// All columns are read as text; numeric parsing happens per day.
    async fn csv_to_dataframe(bytes: Vec<u8>, site: &str) -> Result<DataFrame, WeatherDataError> {
        let site_owned = site.to_string();
        let schema_names = HourlyColumn::schema_column_names();

        task::spawn_blocking(move || {
            let mut temp_file = NamedTempFile::new().map_err(|e| WeatherDataError::CsvReadIo {
                site: site_owned.clone(),
                source: e,
            })?;
            temp_file
                .write_all(&bytes)
                .map_err(|e| WeatherDataError::CsvReadIo {
                    site: site_owned.clone(),
                    source: e,
                })?;
            temp_file.flush().map_err(|e| WeatherDataError::CsvReadIo {
                site: site_owned.clone(),
                source: e,
            })?;

            let mut df = CsvReadOptions::default()
                .with_has_header(false)
                .with_infer_schema_length(Some(0))
                .try_into_reader_with_file_path(Some(temp_file.path().to_path_buf()))
                .map_err(|e| WeatherDataError::CsvReadPolars {
                    site: site_owned.clone(),
                    source: e,
                })?
                .finish()
                .map_err(|e| WeatherDataError::CsvReadPolars {
                    site: site_owned.clone(),
                    source: e,
                })?;

            if df.width() != schema_names.len() {
                warn!(
                    "CSV column count ({}) does not match schema length ({}) for site {}",
                    df.width(),
                    schema_names.len(),
                    site_owned
                );
                return Err(WeatherDataError::SchemaMismatch {
                    site: site_owned,
                    expected: schema_names.len(),
                    found: df.width(),
                });
            }

            df.set_column_names(schema_names.iter().copied())
                .map_err(|e| WeatherDataError::ColumnRenameError {
                    site: site_owned,
                    source: e,
                })?;

            Ok(df)
        })
        .await?
    }

    /// Writes a DataFrame to a Parquet file using spawn_blocking.
    async fn cache_dataframe(mut df: DataFrame, path: &Path) -> Result<(), WeatherDataError> {
        let path_buf = path.to_path_buf();
        task::spawn_blocking(move || {
            let file = std::fs::File::create(&path_buf)
                .map_err(|e| WeatherDataError::ParquetWriteIo(path_buf.clone(), e))?;
            ParquetWriter::new(file)
                .with_compression(ParquetCompression::Snappy)
                .finish(&mut df)
                .map_err(|e| WeatherDataError::ParquetWritePolars(path_buf, e))?;
            Ok::<(), WeatherDataError>(())
        })
        .await??;
        Ok(())
    }
}
