//! Key-value storage seam and JSON helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser exposes `localStorage` as a string-to-string map. Session sync
//! talks to it through [`KeyValueStore`] so the same code runs against the
//! real browser storage in `hydrate` builds and against [`MemoryStorage`]
//! during SSR and in tests.


#[cfg(feature = "hydrate")]
pub mod browser;
pub mod memory;

#[cfg(feature = "hydrate")]
pub use browser::BrowserStorage;
pub use memory::MemoryStorage;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::StoreError;

/// String key-value storage with `localStorage` semantics.
pub trait KeyValueStore {
    /// Read the raw value for `key`, or `None` when nothing is stored.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Read`] when the backend rejects the read.
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Write`] when the backend rejects the write.
    fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Remove `key`. Removing a missing key is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Remove`] when the backend rejects the removal.
    fn remove_item(&self, key: &str) -> Result<(), StoreError>;
}

/// Load and parse the JSON value stored under `key`.
///
/// Returns `Ok(None)` when nothing is stored or the stored string is empty.
///
/// # Errors
///
/// Returns [`StoreError::Malformed`] when the stored string does not parse as
/// `T`, or the backend's error when the read itself fails.
pub fn load_json<T: DeserializeOwned>(
    store: &impl KeyValueStore,
    key: &str,
) -> Result<Option<T>, StoreError> {
    let Some(raw) = store.get_item(key)? else {
        return Ok(None);
    };
    if raw.is_empty() {
        return Ok(None);
    }
    serde_json::from_str(&raw)
        .map(Some)
        .map_err(|source| StoreError::Malformed { key: key.to_owned(), source })
}

/// Serialize `value` to JSON and store it under `key`.
///
/// # Errors
///
/// Returns [`StoreError::Encode`] if serialization fails, or the backend's
/// error when the write is rejected.
pub fn save_json<T: Serialize>(
    store: &impl KeyValueStore,
    key: &str,
    value: &T,
) -> Result<(), StoreError> {
    let raw = serde_json::to_string(value)?;
    store.set_item(key, &raw)
}
