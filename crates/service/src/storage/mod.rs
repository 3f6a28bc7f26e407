//! Storage abstractions for the service layer
//!
//! One generic concurrent store, instantiated per entity type and key policy,
//! so locking and merge rules live in a single place.

pub mod entity_store;
pub mod keys;

pub use entity_store::EntityStore;
pub use keys::{CallerKeys, GeneratedKeys, KeyGenerator, KeyPolicy};
