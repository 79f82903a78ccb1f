//! Explicit session object with a defined lifecycle: established on login,
//! torn down on logout. Only the opaque token is persisted (so a reload can
//! restore the session); the role is always re-resolved by the backend, and
//! no other session state lives in browser storage.

use common::requests::SessionInfo;
use gloo_console::warn;

use crate::api;

const TOKEN_KEY: &str = "matson_session_token";

fn storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

/// Persists the session after a successful login.
pub fn establish(session: &SessionInfo) {
    if let Some(storage) = storage() {
        if storage.set_item(TOKEN_KEY, &session.token).is_err() {
            warn!("session token could not be persisted; login will not survive a reload");
        }
    }
}

fn stored_token() -> Option<String> {
    storage().and_then(|s| s.get_item(TOKEN_KEY).ok().flatten())
}

/// Restores the session behind the stored token, if any. A dead token is
/// discarded so the next restore starts clean.
pub async fn restore() -> Option<SessionInfo> {
    let token = stored_token()?;
    match api::fetch_session(&token).await {
        Ok(session) => Some(session),
        Err(e) => {
            warn!(format!("stored session is no longer valid: {}", e));
            clear();
            None
        }
    }
}

/// Tears the session down: revokes it server-side (fire-and-forget) and
/// forgets the token.
pub fn teardown() {
    if let Some(token) = stored_token() {
        wasm_bindgen_futures::spawn_local(async move {
            let _ = api::logout(&token).await;
        });
    }
    clear();
}

fn clear() {
    if let Some(storage) = storage() {
        let _ = storage.remove_item(TOKEN_KEY);
    }
}
