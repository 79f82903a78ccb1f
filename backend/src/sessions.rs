//! In-memory session registry.
//!
//! Sessions are explicit objects with a defined lifecycle: created on login,
//! dropped on logout. The map is the single source of truth for who a token
//! belongs to and is shared across the Actix workers as `web::Data`.

use std::{collections::HashMap, sync::Arc};

use common::requests::{SessionInfo, SessionRole};
use tokio::sync::RwLock;
use uuid::Uuid;

#[derive(Clone, Default)]
pub struct SessionsState {
    sessions: Arc<RwLock<HashMap<String, SessionRole>>>,
}

impl SessionsState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Establishes a session for `role` and returns it with a fresh token.
    pub async fn create(&self, role: SessionRole) -> SessionInfo {
        let token = Uuid::new_v4().to_string();
        let mut sessions = self.sessions.write().await;
        sessions.insert(token.clone(), role.clone());
        SessionInfo { token, role }
    }

    /// Resolves a bearer token to its role, if the session is still alive.
    pub async fn resolve(&self, token: &str) -> Option<SessionRole> {
        let sessions = self.sessions.read().await;
        sessions.get(token).cloned()
    }

    /// Tears the session down. Returns whether a session existed.
    pub async fn revoke(&self, token: &str) -> bool {
        let mut sessions = self.sessions.write().await;
        sessions.remove(token).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[actix_web::test]
    async fn sessions_live_from_login_to_logout() {
        let state = SessionsState::new();
        let session = state.create(SessionRole::Company).await;

        assert_eq!(
            state.resolve(&session.token).await,
            Some(SessionRole::Company)
        );

        assert!(state.revoke(&session.token).await);
        assert_eq!(state.resolve(&session.token).await, None);
        assert!(!state.revoke(&session.token).await);
    }
}
