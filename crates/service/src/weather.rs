//! Weather readings: the city name is the key, writes are wholesale upserts.

use std::sync::Arc;

use models::weather::WeatherReading;

use crate::storage::{CallerKeys, EntityStore};

pub type WeatherStore = EntityStore<WeatherReading, CallerKeys>;

pub fn new_store() -> Arc<WeatherStore> {
    Arc::new(WeatherStore::new())
}
