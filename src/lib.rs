mod config;
mod error;
mod fao56;
mod pipeline;
mod sink;
mod types;
mod utils;
mod weather_data;

pub use config::{ConfigError, SiteConfig};
pub use error::Et0Error;
pub use pipeline::{DailyRun, Et0Pipeline, SkipReason, SkippedDay};

pub use fao56::aggregate::{aggregate_day, DailyAggregate};
pub use fao56::constants::{DEFAULT_ALBEDO, DEFAULT_ALTITUDE};
pub use fao56::error::ComputationError;
pub use fao56::penman_monteith::{PenmanMonteith, Psychrometrics};
pub use fao56::radiation::RadiationBalance;
pub use fao56::solar::{day_of_year, SolarGeometry};
pub use fao56::{compute_day, DayComputation};

pub use types::hourly::{DayObservations, HourlyColumn, HourlyRow, HourlySample, IncompleteData};
pub use types::period::{DatePeriod, DateRange, Month, Year};
pub use types::series::{Et0Entry, Et0Series};
pub use types::site::{EncodedLatitude, SiteMetadata};

pub use sink::csv_sink::CsvSink;
pub use sink::error::SinkError;
pub use sink::SeriesSink;

pub use weather_data::csv_source::CsvHourlySource;
pub use weather_data::data_loader::DataLocation;
pub use weather_data::error::WeatherDataError;
pub use weather_data::memory::InMemorySource;
pub use weather_data::source::HourlySource;
