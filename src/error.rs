//! Error type shared by the storage seam and session sync.
//!
//! ERROR HANDLING
//! ==============
//! Every fallible operation returns [`StoreError`]. Only
//! [`load_or_default`](crate::state::sync::load_or_default) swallows errors,
//! logging them and falling back to the logged-out defaults.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Error returned by storage backends and session load/save.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Browser storage could not be obtained (no window, or storage disabled).
    #[error("storage unavailable: {0}")]
    Unavailable(String),
    /// The backend rejected a read.
    #[error("failed to read `{key}`: {reason}")]
    Read { key: String, reason: String },
    /// The backend rejected a write (quota exceeded, private mode, etc.).
    #[error("failed to write `{key}`: {reason}")]
    Write { key: String, reason: String },
    /// The backend rejected a removal.
    #[error("failed to remove `{key}`: {reason}")]
    Remove { key: String, reason: String },
    /// The stored value does not match the expected JSON shape.
    #[error("malformed value under `{key}`: {source}")]
    Malformed {
        key: String,
        #[source]
        source: serde_json::Error,
    },
    /// The value could not be serialized to JSON.
    #[error("failed to encode value: {0}")]
    Encode(#[from] serde_json::Error),
}
