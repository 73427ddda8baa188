//! Browser-side persistence for the dashboard.
//!
//! Three independent slots live in the key-value storage: the API key, the
//! playlists and the automation rules. Collections are always written back in
//! full; there is no patching and no versioning.

use crate::models::{AutomationRule, Playlist};
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;
use web_sys::window;

pub const CREDENTIAL_KEY: &str = "youtube_api_key";
pub const PLAYLISTS_KEY: &str = "playlists";
pub const AUTOMATIONS_KEY: &str = "automations";

#[derive(Error, Debug, Clone, PartialEq)]
pub enum StoreError {
    #[error("Stored '{slot}' value is malformed: {reason}")]
    Corrupt { slot: &'static str, reason: String },

    #[error("Failed to serialize '{slot}': {reason}")]
    Serialize { slot: &'static str, reason: String },

    #[error("Storage unavailable while writing '{0}'")]
    Unavailable(String),
}

pub trait KeyValueStorage {
    fn get_item(&self, key: &str) -> Option<String>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError>;
    fn remove_item(&self, key: &str) -> Result<(), StoreError>;
}

/// `window.localStorage`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn storage() -> Option<web_sys::Storage> {
        window().and_then(|w| w.local_storage().ok()).flatten()
    }
}

impl KeyValueStorage for BrowserStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        Self::storage().and_then(|storage| storage.get_item(key).ok().flatten())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let storage = Self::storage().ok_or_else(|| StoreError::Unavailable(key.to_string()))?;
        storage
            .set_item(key, value)
            .map_err(|_| StoreError::Unavailable(key.to_string()))
    }

    fn remove_item(&self, key: &str) -> Result<(), StoreError> {
        let storage = Self::storage().ok_or_else(|| StoreError::Unavailable(key.to_string()))?;
        storage
            .remove_item(key)
            .map_err(|_| StoreError::Unavailable(key.to_string()))
    }
}

#[cfg(test)]
pub use memory::MemoryStorage;


#[derive(Debug, Clone)]
pub struct LocalStateStore<S> {
    storage: S,
}

impl<S: KeyValueStorage> LocalStateStore<S> {
    pub fn new(storage: S) -> Self {
        LocalStateStore { storage }
    }

    /// An empty stored key counts as no key at all.
    pub fn load_credential(&self) -> Option<String> {
        self.storage
            .get_item(CREDENTIAL_KEY)
            .filter(|key| !key.is_empty())
    }

    pub fn save_credential(&self, api_key: &str) -> Result<(), StoreError> {
        self.storage.set_item(CREDENTIAL_KEY, api_key)
    }

    pub fn clear_credential(&self) -> Result<(), StoreError> {
        self.storage.remove_item(CREDENTIAL_KEY)
    }

    pub fn load_playlists(&self) -> Result<Vec<Playlist>, StoreError> {
        self.load_collection(PLAYLISTS_KEY)
    }

    pub fn save_playlists(&self, playlists: &[Playlist]) -> Result<(), StoreError> {
        self.save_collection(PLAYLISTS_KEY, playlists)
    }

    pub fn load_automations(&self) -> Result<Vec<AutomationRule>, StoreError> {
        self.load_collection(AUTOMATIONS_KEY)
    }

    pub fn save_automations(&self, automations: &[AutomationRule]) -> Result<(), StoreError> {
        self.save_collection(AUTOMATIONS_KEY, automations)
    }

    fn load_collection<T: DeserializeOwned>(&self, slot: &'static str) -> Result<Vec<T>, StoreError> {
        match self.storage.get_item(slot) {
            Some(raw) => serde_json::from_str(&raw).map_err(|e| StoreError::Corrupt {
                slot,
                reason: e.to_string(),
            }),
            None => Ok(Vec::new()),
        }
    }

    fn save_collection<T: Serialize>(&self, slot: &'static str, items: &[T]) -> Result<(), StoreError> {
        let raw = serde_json::to_string(items).map_err(|e| StoreError::Serialize {
            slot,
            reason: e.to_string(),
        })?;
        self.storage.set_item(slot, &raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{RuleAction, RuleType};

    fn playlist(id: &str) -> Playlist {
        Playlist {
            id: id.to_string(),
            name: format!("List {id}"),
            videos: vec![],
            created_at: "2024-01-01T00:00:00Z".to_string(),
        }
    }

    #[test]
    fn test_empty_storage_loads_defaults() {
        let store = LocalStateStore::new(MemoryStorage::default());

        assert_eq!(store.load_credential(), None);
        assert_eq!(store.load_playlists(), Ok(vec![]));
        assert_eq!(store.load_automations(), Ok(vec![]));
    }

    #[test]
    fn test_empty_credential_counts_as_absent() {
        let storage = MemoryStorage::default();
        storage.set_item(CREDENTIAL_KEY, "").unwrap();

        let store = LocalStateStore::new(storage);
        assert_eq!(store.load_credential(), None);
    }

    #[test]
    fn test_credential_is_stored_raw() {
        let storage = MemoryStorage::default();
        let store = LocalStateStore::new(storage.clone());

        store.save_credential("AIzaSy-key").unwrap();
        assert_eq!(storage.get_item(CREDENTIAL_KEY).as_deref(), Some("AIzaSy-key"));
        assert_eq!(store.load_credential().as_deref(), Some("AIzaSy-key"));

        store.clear_credential().unwrap();
        assert_eq!(store.load_credential(), None);
    }

    #[test]
    fn test_save_overwrites_whole_slot() {
        let storage = MemoryStorage::default();
        let store = LocalStateStore::new(storage.clone());

        store
            .save_playlists(&[playlist("playlist-1"), playlist("playlist-2")])
            .unwrap();
        store.save_playlists(&[playlist("playlist-3")]).unwrap();

        let loaded = store.load_playlists().unwrap();
        assert_eq!(loaded, vec![playlist("playlist-3")]);
        assert!(storage.get_item(PLAYLISTS_KEY).unwrap().starts_with('['));
    }

    #[test]
    fn test_automations_roundtrip_through_slot() {
        let store = LocalStateStore::new(MemoryStorage::default());
        let rule = AutomationRule {
            id: "automation-1".to_string(),
            rule_type: RuleType::Channel,
            query: "rust".to_string(),
            action: RuleAction::Download,
            target_playlist: None,
            frequency: "hourly".to_string(),
            last_run: Some("2024-02-02T00:00:00Z".to_string()),
            enabled: false,
        };

        store.save_automations(std::slice::from_ref(&rule)).unwrap();
        assert_eq!(store.load_automations(), Ok(vec![rule]));
    }

    #[test]
    fn test_malformed_slot_is_reported() {
        let storage = MemoryStorage::default();
        storage.set_item(PLAYLISTS_KEY, "{not json").unwrap();
        storage.set_item(AUTOMATIONS_KEY, "[]").unwrap();

        let store = LocalStateStore::new(storage);
        assert!(matches!(
            store.load_playlists(),
            Err(StoreError::Corrupt {
                slot: PLAYLISTS_KEY,
                ..
            })
        ));
        assert_eq!(store.load_automations(), Ok(vec![]));
    }
}
