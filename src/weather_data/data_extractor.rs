use crate::types::hourly::{HourlyColumn, HourlyRow};
use crate::weather_data::error::WeatherDataError;
use chrono::NaiveDate;
use polars::prelude::*;

/// Collects the rows of `frame` whose timestamp falls on `date`, preserving
/// their order in the file.
pub fn extract_day_rows(
    frame: LazyFrame,
    date: NaiveDate,
) -> Result<Vec<HourlyRow>, WeatherDataError> {
    let date_prefix = date.format("%Y-%m-%d").to_string();

    let day = frame
        .filter(
            col(HourlyColumn::RecordedAt.name())
                .str()
                .starts_with(lit(date_prefix)),
        )
        .collect()?;

    let columns = HourlyColumn::ALL
        .iter()
        .map(|column| {
            day.column(column.name())
                .and_then(|c| c.str())
                .map_err(|e| WeatherDataError::ColumnNotFound(column.name().to_string(), e))
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok((0..day.height())
        .map(|idx| {
            HourlyRow::new(
                columns
                    .iter()
                    .map(|values| values.get(idx).map(str::to_owned))
                    .collect(),
            )
        })
        .collect())
}
