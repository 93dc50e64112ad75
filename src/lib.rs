//! # frontend-store
//!
//! Session state for the microservice example frontend: the auth tokens and
//! user name, synchronized with the browser's `localStorage` so a login
//! survives page reloads.
//!
//! The `hydrate` feature builds the WASM client, backed by the real browser
//! storage. Without it (SSR, tests) the session lives in memory. Logging goes
//! through the `log` facade; the consuming app installs the console logger.

pub mod error;
pub mod state;
pub mod storage;

pub use error::StoreError;
pub use state::{STORAGE_KEY, SessionState};

