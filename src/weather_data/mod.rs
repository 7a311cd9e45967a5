pub mod csv_source;
pub mod data_extractor;
pub mod data_loader;
pub mod error;
pub mod frame_fetcher;
pub mod memory;
pub mod source;
