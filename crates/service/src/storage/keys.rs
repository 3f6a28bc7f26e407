use uuid::Uuid;

use crate::errors::StoreError;

/// How a store obtains the keys of new records.
pub trait KeyPolicy: Send + Sync + 'static {}

/// Policies where the store assigns keys itself.
pub trait KeyGenerator: KeyPolicy {
    fn generate(&self) -> String;
}

/// Random UUID v4 keys, assigned on create.
#[derive(Clone, Copy, Debug, Default)]
pub struct GeneratedKeys;

impl KeyPolicy for GeneratedKeys {}

impl KeyGenerator for GeneratedKeys {
    fn generate(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// Keys supplied by the caller (e.g. a city name).
#[derive(Clone, Copy, Debug, Default)]
pub struct CallerKeys;

impl KeyPolicy for CallerKeys {}

impl CallerKeys {
    /// Blank keys are rejected; anything else is used verbatim.
    pub fn validate<'a>(&self, key: &'a str) -> Result<&'a str, StoreError> {
        if key.trim().is_empty() {
            return Err(StoreError::InvalidArgument("key must not be blank".into()));
        }
        Ok(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_keys_are_uuids() {
        let key = GeneratedKeys.generate();
        assert!(Uuid::parse_str(&key).is_ok());
        assert_ne!(key, GeneratedKeys.generate());
    }

    #[test]
    fn caller_keys_reject_blank() {
        assert!(matches!(CallerKeys.validate("  "), Err(StoreError::InvalidArgument(_))));
        assert_eq!(CallerKeys.validate("New York").unwrap(), "New York");
    }
}
