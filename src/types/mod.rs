pub mod hourly;
pub mod period;
pub mod series;
pub mod site;
