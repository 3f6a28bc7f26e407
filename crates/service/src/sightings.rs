//! Sighting reports: store-assigned UUID keys, partial-merge updates.

use std::sync::Arc;

use models::sighting::SightingInfo;

use crate::storage::{EntityStore, GeneratedKeys};

pub type SightingStore = EntityStore<SightingInfo, GeneratedKeys>;

pub fn new_store() -> Arc<SightingStore> {
    Arc::new(SightingStore::new())
}
