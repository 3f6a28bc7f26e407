//! Stored entities, their payloads and the wire messages exchanged with clients.
//! - `record` holds the generic lifecycle wrapper shared by every store.
//! - `sighting` and `weather` define the concrete payloads and partial updates.
//! - `ufo_v1` and `weather_v1` are the request/response messages of each service.

pub mod record;
pub mod sighting;
pub mod weather;
pub mod ufo_v1;
pub mod weather_v1;

pub use record::{Patch, Payload, Record};
