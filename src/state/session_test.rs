use super::*;
use serde_json::json;

// =============================================================
// Defaults
// =============================================================

#[test]
fn session_state_default_is_logged_out() {
    let state = SessionState::default();
    assert!(!state.auth.is_logged_in);
    assert!(state.auth.access_token.is_none());
    assert!(state.auth.refresh_token.is_none());
    assert!(state.user.name.is_none());
    assert!(!state.is_authenticated());
}

// =============================================================
// Mutators
// =============================================================

#[test]
fn log_in_sets_flag_and_tokens() {
    let mut state = SessionState::default();
    state.log_in("access-1", "refresh-1");
    assert!(state.auth.is_logged_in);
    assert_eq!(state.auth.access_token.as_deref(), Some("access-1"));
    assert_eq!(state.auth.refresh_token.as_deref(), Some("refresh-1"));
    assert!(state.is_authenticated());
}

#[test]
fn set_tokens_keeps_login_flag_and_user() {
    let mut state = SessionState::default();
    state.log_in("access-1", "refresh-1");
    state.set_user_name("alice");
    state.set_tokens("access-2", "refresh-2");
    assert!(state.auth.is_logged_in);
    assert_eq!(state.auth.access_token.as_deref(), Some("access-2"));
    assert_eq!(state.auth.refresh_token.as_deref(), Some("refresh-2"));
    assert_eq!(state.user.name.as_deref(), Some("alice"));
}

#[test]
fn set_tokens_does_not_log_in() {
    let mut state = SessionState::default();
    state.set_tokens("access", "refresh");
    assert!(!state.auth.is_logged_in);
    assert!(!state.is_authenticated());
}

#[test]
fn log_out_resets_to_defaults() {
    let mut state = SessionState::default();
    state.log_in("access", "refresh");
    state.set_user_name("alice");
    state.log_out();
    assert_eq!(state, SessionState::default());
}

#[test]
fn logged_in_without_access_token_is_not_authenticated() {
    let mut state = SessionState::default();
    state.auth.is_logged_in = true;
    assert!(!state.is_authenticated());
}

// =============================================================
// Serde layout
// =============================================================

#[test]
fn default_serializes_with_nulls() {
    let value = serde_json::to_value(SessionState::default()).unwrap();
    assert_eq!(
        value,
        json!({
            "auth": { "isLoggedIn": false, "accessToken": null, "refreshToken": null },
            "user": { "name": null }
        })
    );
}

#[test]
fn logged_in_serializes_camel_case() {
    let mut state = SessionState::default();
    state.log_in("a", "r");
    state.set_user_name("alice");
    let value = serde_json::to_value(&state).unwrap();
    assert_eq!(value["auth"]["isLoggedIn"], json!(true));
    assert_eq!(value["auth"]["accessToken"], json!("a"));
    assert_eq!(value["auth"]["refreshToken"], json!("r"));
    assert_eq!(value["user"]["name"], json!("alice"));
}

#[test]
fn deserialize_ignores_unknown_fields() {
    let state: SessionState = serde_json::from_value(json!({
        "auth": { "isLoggedIn": false, "accessToken": null, "refreshToken": null, "expiresAt": 1 },
        "user": { "name": null, "avatar": "x" },
        "theme": "dark"
    }))
    .unwrap();
    assert_eq!(state, SessionState::default());
}

#[test]
fn deserialize_missing_nullable_fields_as_none() {
    let state: SessionState = serde_json::from_value(json!({
        "auth": { "isLoggedIn": true },
        "user": {}
    }))
    .unwrap();
    assert!(state.auth.is_logged_in);
    assert!(state.auth.access_token.is_none());
    assert!(state.user.name.is_none());
}

#[test]
fn deserialize_rejects_missing_login_flag() {
    let result = serde_json::from_value::<SessionState>(json!({
        "auth": { "accessToken": "a" },
        "user": { "name": null }
    }));
    assert!(result.is_err());
}

#[test]
fn deserialize_rejects_missing_user() {
    let result = serde_json::from_value::<SessionState>(json!({
        "auth": { "isLoggedIn": false }
    }));
    assert!(result.is_err());
}

#[test]
fn deserialize_rejects_wrong_field_type() {
    let result = serde_json::from_value::<SessionState>(json!({
        "auth": { "isLoggedIn": "yes" },
        "user": { "name": null }
    }));
    assert!(result.is_err());
}
