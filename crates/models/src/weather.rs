use serde::{Deserialize, Serialize};

use crate::record::{Payload, Record};

/// Latest reading for one city. The city itself is the record key.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct WeatherReading {
    pub temperature: f64,
}

impl Payload for WeatherReading {
    const KIND: &'static str = "weather";
}

pub type WeatherRecord = Record<WeatherReading>;
