//! Browser `localStorage` backend. Requires a browser environment.

use wasm_bindgen::JsValue;

use super::KeyValueStore;
use crate::error::StoreError;

/// Handle to `window.localStorage`.
#[derive(Clone, Debug)]
pub struct BrowserStorage {
    inner: web_sys::Storage,
}

impl BrowserStorage {
    /// Obtain the page's `localStorage`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Unavailable`] when there is no window, or the
    /// browser refuses storage access (disabled cookies, sandboxed iframe).
    pub fn local() -> Result<Self, StoreError> {
        let window =
            web_sys::window().ok_or_else(|| StoreError::Unavailable("no window".to_owned()))?;
        match window.local_storage() {
            Ok(Some(inner)) => Ok(Self { inner }),
            Ok(None) => Err(StoreError::Unavailable("localStorage is disabled".to_owned())),
            Err(e) => Err(StoreError::Unavailable(js_reason(&e))),
        }
    }
}

impl KeyValueStore for BrowserStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.inner
            .get_item(key)
            .map_err(|e| StoreError::Read { key: key.to_owned(), reason: js_reason(&e) })
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.inner
            .set_item(key, value)
            .map_err(|e| StoreError::Write { key: key.to_owned(), reason: js_reason(&e) })
    }

    fn remove_item(&self, key: &str) -> Result<(), StoreError> {
        self.inner
            .remove_item(key)
            .map_err(|e| StoreError::Remove { key: key.to_owned(), reason: js_reason(&e) })
    }
}

fn js_reason(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}
