//! Browser-local session: the JWT and a snapshot of the logged-in user.

use web_sys::window;

use crate::auth::api::{AuthSession, AuthUser};

const TOKEN_KEY: &str = "auth_token";
const USER_KEY: &str = "user";

fn local_storage() -> Option<web_sys::Storage> {
    window().and_then(|w| w.local_storage().ok()).flatten()
}

pub fn store(session: &AuthSession) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(TOKEN_KEY, &session.jwt);
        if let Ok(user) = serde_json::to_string(&session.user) {
            let _ = storage.set_item(USER_KEY, &user);
        }
    }
}

/// The stored user snapshot; a missing or corrupt entry reads as logged out.
pub fn current_user() -> Option<AuthUser> {
    let raw = local_storage()?.get_item(USER_KEY).ok().flatten()?;
    serde_json::from_str(&raw).ok()
}

pub fn is_logged_in() -> bool {
    local_storage()
        .and_then(|storage| storage.get_item(TOKEN_KEY).ok())
        .flatten()
        .is_some()
}

pub fn clear() {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(TOKEN_KEY);
        let _ = storage.remove_item(USER_KEY);
    }
}
