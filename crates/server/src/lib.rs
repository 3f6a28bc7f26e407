pub mod errors;
pub mod middleware;
pub mod openapi;
pub mod routes;
pub mod startup;

pub use startup::{launch, run};
