//! Service layer: in-process keyed stores behind the transport adapters.
//! - `storage` holds the generic concurrent entity store and its key policies.
//! - `sightings` and `weather` bind it to the concrete payloads.
//! - Every failure surfaces as a typed `StoreError`; nothing is retried.

pub mod errors;
pub mod metrics;
pub mod storage;
pub mod sightings;
pub mod weather;
