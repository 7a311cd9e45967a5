use crate::sink::error::SinkError;
use crate::sink::SeriesSink;
use crate::types::series::Et0Series;
use log::info;
use polars::prelude::*;
use std::path::PathBuf;

/// Writes `DD/MM/YYYY,value` lines without a header, replacing the file.
pub struct CsvSink {
    path: PathBuf,
}

impl CsvSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn to_dataframe(series: &Et0Series) -> Result<DataFrame, SinkError> {
        let (dates, values): (Vec<String>, Vec<String>) = series.to_rows().into_iter().unzip();
        DataFrame::new(vec![
            Column::new("date".into(), dates),
            Column::new("et0".into(), values),
        ])
        .map_err(SinkError::Table)
    }
}

impl SeriesSink for CsvSink {
    fn write(&mut self, series: &Et0Series) -> Result<(), SinkError> {
        let mut df = Self::to_dataframe(series)?;
        let mut file = std::fs::File::create(&self.path)
            .map_err(|e| SinkError::Create(self.path.clone(), e))?;
        CsvWriter::new(&mut file)
            .include_header(false)
            .finish(&mut df)
            .map_err(|e| SinkError::Write(self.path.clone(), e))?;
        info!("Wrote {} ET0 rows to {:?}", series.len(), self.path);
        Ok(())
    }
}
