//! Messages of the weather HTTP API (`/api/v1/weather/{city}`).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::weather::WeatherRecord;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Weather {
    pub city: String,
    pub temperature: f64,
    pub updated_at: DateTime<Utc>,
}

impl From<&WeatherRecord> for Weather {
    fn from(rec: &WeatherRecord) -> Self {
        Self {
            city: rec.key.clone(),
            temperature: rec.payload.temperature,
            updated_at: rec.last_modified(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct UpdateWeatherRequest {
    pub temperature: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NotFoundError {
    pub code: u16,
    pub message: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GenericError {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

pub fn not_found_message(city: &str) -> String {
    format!("Weather for city '{}' not found", city)
}
