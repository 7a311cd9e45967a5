use crate::weather_data::data_loader::{DataLocation, WeatherDataLoader};
use crate::weather_data::error::WeatherDataError;
use polars::prelude::LazyFrame;
use std::collections::{hash_map::Entry, HashMap};
use tokio::sync::Mutex;

/// Keeps one loaded LazyFrame per site so consecutive days of a run do not
/// reload the site's file.
pub struct FrameFetcher {
    loader: WeatherDataLoader,
    lazyframe_cache: Mutex<HashMap<String, LazyFrame>>,
}

impl FrameFetcher {
    pub fn new(location: DataLocation) -> Self {
        Self {
            loader: WeatherDataLoader::new(location),
            lazyframe_cache: Mutex::new(HashMap::new()),
        }
    }

    pub async fn get_cache_lazyframe(&self, site: &str) -> Result<LazyFrame, WeatherDataError> {
        {
            let cache = self.lazyframe_cache.lock().await;
            if let Some(cached) = cache.get(site) {
                return Ok(cached.clone());
            }
        }

        // Loading happens outside the lock
        let loaded_frame = self.loader.get_frame(site).await?;

        let mut cache = self.lazyframe_cache.lock().await;
        match cache.entry(site.to_string()) {
            // Another day of the run loaded it first
            Entry::Occupied(entry) => Ok(entry.get().clone()),
            Entry::Vacant(entry) => {
                entry.insert(loaded_frame.clone());
                Ok(loaded_frame)
            }
        }
    }
}
