//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `session` owns the typed record; `sync` owns its persistence and the
//! Leptos context that shares it across components.

pub mod session;
pub mod sync;

pub use session::{AuthTokens, SessionState, UserInfo};
pub use sync::{
    STORAGE_KEY, clear, load, load_or_default, provide_local_session_state, provide_session_state,
    save, use_session_state,
};
