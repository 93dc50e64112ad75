//! Session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Holds the auth tokens and display name that API calls and user-aware
//! components read. The whole record is persisted as one JSON blob; see
//! [`crate::state::sync`] for the storage layout.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use serde::{Deserialize, Serialize};

/// Persisted session record. `Default` is the logged-out state.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    pub auth: AuthTokens,
    pub user: UserInfo,
}

/// Login flag and bearer tokens issued by the auth service.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthTokens {
    pub is_logged_in: bool,
    pub access_token: Option<String>,
    pub refresh_token: Option<String>,
}

/// Identity of the logged-in user.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInfo {
    pub name: Option<String>,
}

impl SessionState {
    /// Record a successful login.
    pub fn log_in(&mut self, access_token: impl Into<String>, refresh_token: impl Into<String>) {
        self.auth.is_logged_in = true;
        self.set_tokens(access_token, refresh_token);
    }

    /// Replace both tokens after a refresh. Login flag and user are untouched.
    pub fn set_tokens(&mut self, access_token: impl Into<String>, refresh_token: impl Into<String>) {
        self.auth.access_token = Some(access_token.into());
        self.auth.refresh_token = Some(refresh_token.into());
    }

    pub fn set_user_name(&mut self, name: impl Into<String>) {
        self.user.name = Some(name.into());
    }

    /// Drop tokens and user, returning to the logged-out defaults.
    pub fn log_out(&mut self) {
        *self = Self::default();
    }

    /// Logged in and holding an access token to send.
    pub fn is_authenticated(&self) -> bool {
        self.auth.is_logged_in && self.auth.access_token.is_some()
    }
}
