//! Typed HTTP clients for both services plus synthetic sample data.

use thiserror::Error;

pub mod fake;
pub mod ufo;
pub mod weather;

pub use ufo::UfoClient;
pub use weather::WeatherClient;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("invalid base url: {0}")]
    BaseUrl(String),
    #[error("{code} ({status}): {message}")]
    Status { status: u16, code: String, message: String },
}

impl ClientError {
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Transport(e) => e.status().map(|s| s.as_u16()),
            Self::BaseUrl(_) => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}
