use chrono::Utc;
use dashmap::{mapref::entry::Entry, DashMap};
use models::{Patch, Payload, Record};
use tracing::{debug, info, warn};

use crate::errors::StoreError;
use crate::metrics;
use crate::storage::keys::{CallerKeys, GeneratedKeys, KeyGenerator, KeyPolicy};

/// Thread-safe keyed store of [`Record`]s.
///
/// Records live in a sharded map; every mutation holds the write guard of
/// its entry for the whole read-modify-write, so readers observe either the
/// state before or after it. Records are never removed: delete only stamps
/// `deleted_at`. Callers always receive clones.
pub struct EntityStore<P, K = GeneratedKeys> {
    records: DashMap<String, Record<P>>,
    keys: K,
}

impl<P: Payload, K: KeyPolicy + Default> Default for EntityStore<P, K> {
    fn default() -> Self {
        Self::with_key_policy(K::default())
    }
}

impl<P: Payload, K: KeyPolicy> EntityStore<P, K> {
    pub fn new() -> Self
    where
        K: Default,
    {
        Self::default()
    }

    pub fn with_key_policy(keys: K) -> Self {
        Self { records: DashMap::new(), keys }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Current state of a record, soft-deleted ones included.
    pub fn get(&self, key: &str) -> Result<Record<P>, StoreError> {
        let res = self
            .records
            .get(key)
            .map(|r| r.value().clone())
            .ok_or_else(|| StoreError::not_found(P::KIND, key));
        debug!(store = P::KIND, %key, found = res.is_ok(), "get record");
        metrics::observe(P::KIND, "get", &res);
        res
    }

    /// Merge a partial payload into an existing record and stamp `updated_at`.
    ///
    /// An unknown key wins over a missing patch. An empty patch is legal and
    /// still refreshes `updated_at`.
    pub fn update<Q: Patch<P>>(&self, key: &str, patch: Option<Q>) -> Result<(), StoreError> {
        let res = self.merge(key, patch);
        metrics::observe(P::KIND, "update", &res);
        res
    }

    fn merge<Q: Patch<P>>(&self, key: &str, patch: Option<Q>) -> Result<(), StoreError> {
        let mut rec = self.records.get_mut(key).ok_or_else(|| StoreError::not_found(P::KIND, key))?;
        let patch = patch.ok_or_else(|| StoreError::InvalidArgument("update payload is missing".into()))?;
        if rec.is_deleted() {
            warn!(store = P::KIND, %key, "updating a soft-deleted record");
        }
        patch.apply_to(&mut rec.payload);
        rec.touch(Utc::now());
        info!(store = P::KIND, %key, "record updated");
        Ok(())
    }

    /// Soft delete: stamp `deleted_at`, keep the record and its payload.
    pub fn delete(&self, key: &str) -> Result<(), StoreError> {
        let res = match self.records.get_mut(key) {
            Some(mut rec) => {
                if rec.is_deleted() {
                    warn!(store = P::KIND, %key, "re-deleting a soft-deleted record");
                }
                rec.mark_deleted(Utc::now());
                info!(store = P::KIND, %key, "record soft-deleted");
                Ok(())
            }
            None => Err(StoreError::not_found(P::KIND, key)),
        };
        metrics::observe(P::KIND, "delete", &res);
        res
    }
}

impl<P: Payload, K: KeyGenerator> EntityStore<P, K> {
    /// Insert a new record under a freshly generated key and return the key.
    ///
    /// A generated key that already exists is an internal fault; it is not retried.
    pub fn create(&self, payload: P) -> Result<String, StoreError> {
        let key = self.keys.generate();
        let res = match self.records.entry(key.clone()) {
            Entry::Occupied(_) => Err(StoreError::Internal(format!("generated key '{}' already exists", key))),
            Entry::Vacant(slot) => {
                slot.insert(Record::new(key.clone(), payload, Utc::now()));
                info!(store = P::KIND, %key, "record created");
                Ok(key)
            }
        };
        metrics::observe(P::KIND, "create", &res);
        res
    }
}

impl<P: Payload> EntityStore<P, CallerKeys> {
    /// Create the record for `key`, or replace its payload wholesale.
    ///
    /// Replacement stamps `updated_at`; `created_at` and `deleted_at` are kept.
    pub fn upsert(&self, key: &str, payload: P) -> Result<Record<P>, StoreError> {
        let res = self.replace(key, payload);
        metrics::observe(P::KIND, "upsert", &res);
        res
    }

    fn replace(&self, key: &str, payload: P) -> Result<Record<P>, StoreError> {
        let key = self.keys.validate(key)?;
        let rec = match self.records.entry(key.to_string()) {
            Entry::Occupied(mut slot) => {
                let rec = slot.get_mut();
                rec.payload = payload;
                rec.touch(Utc::now());
                info!(store = P::KIND, %key, "record replaced");
                rec.clone()
            }
            Entry::Vacant(slot) => {
                let rec = slot.insert(Record::new(key.to_string(), payload, Utc::now()));
                info!(store = P::KIND, %key, "record created");
                rec.value().clone()
            }
        };
        Ok(rec)
    }
}
