//! Load, save, and share the persisted session state.
//!
//! SYSTEM CONTEXT
//! ==============
//! At startup the session blob is read from storage under [`STORAGE_KEY`] and
//! parsed. Missing or unreadable blobs fall back to the logged-out defaults.
//! The result is placed in an `RwSignal` context so every component reads and
//! writes the same record, and changes are written back to storage.
//!
//! STORAGE LAYOUT
//! ==============
//! ```json
//! {
//!   "auth": { "isLoggedIn": false, "accessToken": null, "refreshToken": null },
//!   "user": { "name": null }
//! }
//! ```

#[cfg(test)]
#[path = "sync_test.rs"]
mod sync_test;

use leptos::prelude::*;

use super::session::SessionState;
use crate::error::StoreError;
#[cfg(feature = "hydrate")]
use crate::storage::BrowserStorage;
use crate::storage::{self, KeyValueStore, MemoryStorage};

/// Storage key holding the session blob.
pub const STORAGE_KEY: &str = "microservice-app-example-frontend";

/// Read the persisted session, if any.
///
/// # Errors
///
/// Returns [`StoreError::Malformed`] if the stored blob does not match the
/// session layout, or the backend's error if the read fails.
pub fn load(store: &impl KeyValueStore) -> Result<Option<SessionState>, StoreError> {
    storage::load_json(store, STORAGE_KEY)
}

/// Read the persisted session, falling back to the logged-out defaults.
///
/// A malformed blob is left in storage; it is replaced on the next save.
pub fn load_or_default(store: &impl KeyValueStore) -> SessionState {
    match load(store) {
        Ok(Some(state)) => {
            log::debug!("session restored (logged_in={})", state.auth.is_logged_in);
            state
        }
        Ok(None) => {
            log::debug!("no persisted session, starting logged out");
            SessionState::default()
        }
        Err(e) => {
            log::warn!("ignoring persisted session: {e}");
            SessionState::default()
        }
    }
}

/// Persist `state` under [`STORAGE_KEY`].
///
/// # Errors
///
/// Returns the backend's error when the write is rejected.
pub fn save(store: &impl KeyValueStore, state: &SessionState) -> Result<(), StoreError> {
    storage::save_json(store, STORAGE_KEY, state)
}

/// Remove the persisted session. The next load yields the defaults.
///
/// # Errors
///
/// Returns the backend's error when the removal is rejected.
pub fn clear(store: &impl KeyValueStore) -> Result<(), StoreError> {
    store.remove_item(STORAGE_KEY)
}

/// Load the session from `store` and provide it as an `RwSignal` context.
///
/// Every later change to the signal is written back to `store`. The write
/// runs from a Leptos effect, so it only happens in builds with effects
/// enabled (`hydrate`). In SSR and test builds changes stay in the signal and
/// callers persist explicitly with [`save`].
pub fn provide_session_state<S>(store: S) -> RwSignal<SessionState>
where
    S: KeyValueStore + 'static,
{
    let session = RwSignal::new(load_or_default(&store));
    provide_context(session);
    persist_changes(session, store);
    session
}

/// Write `session` to `store` whenever it changes.
///
/// The initial value is not rewritten, so a malformed blob survives until the
/// first change.
fn persist_changes<S>(session: RwSignal<SessionState>, store: S)
where
    S: KeyValueStore + 'static,
{
    Effect::new(move |prev: Option<()>| {
        let state = session.get();
        if prev.is_none() {
            return;
        }
        if let Err(e) = save(&store, &state) {
            log::warn!("failed to persist session: {e}");
        }
    });
}

/// Provide the session backed by the page's `localStorage`.
///
/// Outside the browser, or when storage is disabled, the session lives in
/// memory and is lost on reload.
pub fn provide_local_session_state() -> RwSignal<SessionState> {
    #[cfg(feature = "hydrate")]
    {
        match BrowserStorage::local() {
            Ok(store) => return provide_session_state(store),
            Err(e) => log::warn!("session will not persist: {e}"),
        }
    }
    provide_session_state(MemoryStorage::new())
}

/// The session signal provided by an ancestor, if any.
pub fn use_session_state() -> Option<RwSignal<SessionState>> {
    use_context::<RwSignal<SessionState>>()
}
