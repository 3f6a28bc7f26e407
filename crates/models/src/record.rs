use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Marker for types that can be stored as a record payload.
///
/// `KIND` names the entity in logs, metrics and not-found messages.
pub trait Payload: Clone + Send + Sync + 'static {
    const KIND: &'static str;
}

/// A sparse set of field changes merged into a payload in place.
///
/// Implementations overwrite only the fields they carry a value for.
pub trait Patch<P> {
    fn apply_to(self, target: &mut P);
}

/// One stored entity: identity, payload and lifecycle timestamps.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Record<P> {
    pub key: String,
    pub payload: P,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<DateTime<Utc>>,
}

impl<P> Record<P> {
    pub fn new(key: String, payload: P, now: DateTime<Utc>) -> Self {
        Self { key, payload, created_at: now, updated_at: None, deleted_at: None }
    }

    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }

    /// Latest lifecycle timestamp that changed the payload.
    pub fn last_modified(&self) -> DateTime<Utc> {
        self.updated_at.unwrap_or(self.created_at)
    }

    /// Stamp `updated_at`, never earlier than the previous modification.
    pub fn touch(&mut self, now: DateTime<Utc>) {
        self.updated_at = Some(now.max(self.last_modified()));
    }

    /// Stamp `deleted_at`; payload fields are left as they are.
    pub fn mark_deleted(&mut self, now: DateTime<Utc>) {
        let floor = self.deleted_at.map_or(self.last_modified(), |d| d.max(self.last_modified()));
        self.deleted_at = Some(now.max(floor));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn new_record_has_no_update_or_delete_stamp() {
        let now = Utc::now();
        let rec = Record::new("k".to_string(), 1u8, now);
        assert_eq!(rec.created_at, now);
        assert!(rec.updated_at.is_none());
        assert!(!rec.is_deleted());
        assert_eq!(rec.last_modified(), now);
    }

    #[test]
    fn touch_never_goes_before_creation() {
        let now = Utc::now();
        let mut rec = Record::new("k".to_string(), 1u8, now);
        rec.touch(now - Duration::seconds(30));
        assert_eq!(rec.updated_at, Some(now));
    }

    #[test]
    fn mark_deleted_keeps_payload_and_restamps() {
        let t0 = Utc::now();
        let mut rec = Record::new("k".to_string(), "payload", t0);
        rec.mark_deleted(t0 + Duration::seconds(1));
        let first = rec.deleted_at;
        rec.mark_deleted(t0 + Duration::seconds(2));
        assert!(rec.deleted_at > first);
        assert_eq!(rec.payload, "payload");
    }

    #[test]
    fn serialized_record_omits_absent_stamps() {
        let rec = Record::new("k".to_string(), 7u32, Utc::now());
        let json = serde_json::to_value(&rec).unwrap();
        assert!(json.get("updated_at").is_none());
        assert!(json.get("deleted_at").is_none());
        assert_eq!(json["payload"], 7);
    }
}
