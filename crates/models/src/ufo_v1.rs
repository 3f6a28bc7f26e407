//! Messages of the `ufo.v1.UFOService` RPC service.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::sighting::{Sighting as SightingRecord, SightingInfo, SightingUpdateInfo};

pub const SERVICE_NAME: &str = "ufo.v1.UFOService";
pub const METHODS: [&str; 4] = ["Create", "Get", "Update", "Delete"];

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateRequest {
    #[serde(default)]
    pub info: SightingInfo,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CreateResponse {
    pub uuid: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GetRequest {
    pub uuid: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GetResponse {
    pub sighting: Sighting,
}

/// `update_info` absent (or `null`) is rejected as an invalid argument;
/// an empty object is a legal no-op update.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UpdateRequest {
    pub uuid: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub update_info: Option<SightingUpdateInfo>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DeleteRequest {
    pub uuid: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Empty {}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Sighting {
    pub uuid: String,
    pub info: SightingInfo,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<DateTime<Utc>>,
}

impl From<SightingRecord> for Sighting {
    fn from(rec: SightingRecord) -> Self {
        Self {
            uuid: rec.key,
            info: rec.payload,
            created_at: rec.created_at,
            updated_at: rec.updated_at,
            deleted_at: rec.deleted_at,
        }
    }
}

/// Reflection-style description of the service.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ServiceDescriptor {
    pub service: String,
    pub methods: Vec<String>,
}

impl ServiceDescriptor {
    pub fn ufo() -> Self {
        Self {
            service: SERVICE_NAME.to_string(),
            methods: METHODS.iter().map(|m| m.to_string()).collect(),
        }
    }
}

/// Error body returned with every non-OK status.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RpcErrorBody {
    pub code: String,
    pub message: String,
}
