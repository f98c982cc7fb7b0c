//! Key-value persistence.
//!
//! [`BrowserStorage`] wraps `window.localStorage`; [`MemoryStore`] keeps
//! the same contract in memory for tests and non-browser hosts. Values are
//! JSON documents read and written through [`load_json`] / [`save_json`].

use std::cell::RefCell;
use std::collections::HashMap;

use serde::{Serialize, de::DeserializeOwned};

use crate::core::error::StorageError;
use crate::utils::dom;

/// String key-value store.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// localStorage. Every call re-resolves the storage object, so a blocked
/// or missing storage surfaces as [`StorageError::Unavailable`].
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        dom::local_storage()?.get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let storage = dom::local_storage().ok_or(StorageError::Unavailable)?;
        storage
            .set_item(key, value)
            .map_err(|_| StorageError::WriteFailed(key.to_string()))
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let storage = dom::local_storage().ok_or(StorageError::Unavailable)?;
        storage
            .remove_item(key)
            .map_err(|_| StorageError::RemoveFailed(key.to_string()))
    }
}

/// In-memory store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.values.borrow_mut().remove(key);
        Ok(())
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        (**self).remove(key)
    }
}

/// Read a JSON value, telling a missing key apart from unreadable data.
///
/// Callers that write the key back use this so they never overwrite
/// data they could not read.
pub fn try_load_json<T: DeserializeOwned>(
    store: &impl KeyValueStore,
    key: &str,
) -> Result<Option<T>, StorageError> {
    let Some(json) = store.get(key) else {
        return Ok(None);
    };
    serde_json::from_str(&json)
        .map(Some)
        .map_err(|err| StorageError::Corrupted {
            key: key.to_string(),
            reason: err.to_string(),
        })
}

/// Read a JSON value.
///
/// Returns `None` if the key doesn't exist. Corrupted JSON is logged and
/// treated as absent.
pub fn load_json<T: DeserializeOwned>(store: &impl KeyValueStore, key: &str) -> Option<T> {
    match try_load_json(store, key) {
        Ok(value) => value,
        Err(err) => {
            log::warn!("{}; treating as absent", err);
            None
        }
    }
}

/// Write a JSON value.
pub fn save_json<T: Serialize>(
    store: &impl KeyValueStore,
    key: &str,
    value: &T,
) -> Result<(), StorageError> {
    let json = serde_json::to_string(value).map_err(|err| StorageError::Serialize {
        key: key.to_string(),
        reason: err.to_string(),
    })?;
    store.set(key, &json)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_roundtrip() {
        let store = MemoryStore::new();
        assert_eq!(store.get("k"), None);
        store.set("k", "v").unwrap();
        assert_eq!(store.get("k").as_deref(), Some("v"));
        store.remove("k").unwrap();
        assert_eq!(store.get("k"), None);
    }

    #[test]
    fn test_json_helpers() {
        let store = MemoryStore::new();
        save_json(&store, "list", &vec![1, 2, 3]).unwrap();
        let list: Option<Vec<u32>> = load_json(&store, "list");
        assert_eq!(list, Some(vec![1, 2, 3]));
    }

    #[test]
    fn test_corrupted_json_is_absent() {
        let store = MemoryStore::new();
        store.set("list", "[1, 2,").unwrap();
        let list: Option<Vec<u32>> = load_json(&store, "list");
        assert_eq!(list, None);

        store.set("list", r#"{"not":"a list"}"#).unwrap();
        let list: Option<Vec<u32>> = load_json(&store, "list");
        assert_eq!(list, None);
    }

    #[test]
    fn test_try_load_distinguishes_missing_from_corrupted() {
        let store = MemoryStore::new();
        let missing: Result<Option<Vec<u32>>, _> = try_load_json(&store, "list");
        assert_eq!(missing, Ok(None));

        store.set("list", "[1, 2,").unwrap();
        let corrupted: Result<Option<Vec<u32>>, _> = try_load_json(&store, "list");
        assert!(matches!(
            corrupted,
            Err(StorageError::Corrupted { ref key, .. }) if key == "list"
        ));
    }
}
