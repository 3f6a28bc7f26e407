use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::record::{Patch, Payload, Record};

/// A UFO sighting report.
///
/// `location` and `description` are always carried (empty when not supplied);
/// the remaining fields are independently present or absent.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SightingInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub observed_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sound: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_seconds: Option<i32>,
}

impl Payload for SightingInfo {
    const KIND: &'static str = "sighting";
}

/// Partial update of a sighting: `None` leaves a field unchanged, `Some` overwrites it.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SightingUpdateInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub observed_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sound: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_seconds: Option<i32>,
}

impl SightingUpdateInfo {
    /// True when no field is set; applying it still refreshes `updated_at`.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

impl Patch<SightingInfo> for SightingUpdateInfo {
    fn apply_to(self, target: &mut SightingInfo) {
        if let Some(observed_at) = self.observed_at {
            target.observed_at = Some(observed_at);
        }
        if let Some(location) = self.location {
            target.location = location;
        }
        if let Some(description) = self.description {
            target.description = description;
        }
        if let Some(color) = self.color {
            target.color = Some(color);
        }
        if let Some(sound) = self.sound {
            target.sound = Some(sound);
        }
        if let Some(duration) = self.duration_seconds {
            target.duration_seconds = Some(duration);
        }
    }
}

pub type Sighting = Record<SightingInfo>;
