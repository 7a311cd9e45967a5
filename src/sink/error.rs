use polars::error::PolarsError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SinkError {
    #[error("Failed to create output file '{0}'")]
    Create(PathBuf, #[source] std::io::Error),

    #[error("Failed to write series to '{0}'")]
    Write(PathBuf, #[source] PolarsError),

    #[error("Failed to build output table")]
    Table(#[source] PolarsError),
}
