//! Browser Storage
//!
//! `KeyValueStore` over `window.localStorage`. When storage is disabled
//! (private mode, sandboxed iframe) reads return nothing and writes fail.

use crate::sync::KeyValueStore;

#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|w| w.local_storage().ok().flatten())
    }
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), String> {
        let storage = Self::storage().ok_or_else(|| "localStorage is unavailable".to_string())?;
        storage
            .set_item(key, value)
            .map_err(|_| format!("failed to write {} to localStorage", key))
    }
}
