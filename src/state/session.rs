#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::api::AuthApi;
use crate::storage::{ACCESS_TOKEN_KEY, StorageBackend, USER_ID_KEY};

/// Session credentials mirror, rendered from signals.
///
/// The two fields are set and cleared together; the session counts as
/// active iff the access token is present and non-empty.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    pub access_token: Option<String>,
    pub user_id: Option<String>,
}

impl SessionState {
    pub fn is_logged_in(&self) -> bool {
        self.access_token.as_deref().is_some_and(|t| !t.is_empty())
    }
}

/// Session holder over durable storage.
///
/// Storage is the source of truth: construction and [`SessionStore::refresh`]
/// re-read both keys, so state mutated outside this instance (another tab)
/// is picked up on (re)initialization.
#[derive(Clone, Debug)]
pub struct SessionStore<S> {
    storage: S,
    state: SessionState,
}

impl<S: StorageBackend> SessionStore<S> {
    pub fn new(storage: S) -> Self {
        let mut store = Self {
            storage,
            state: SessionState::default(),
        };
        store.refresh();
        store
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn is_logged_in(&self) -> bool {
        self.state.is_logged_in()
    }

    /// Re-read both session keys from storage.
    pub fn refresh(&mut self) {
        self.state = SessionState {
            access_token: self.storage.get(ACCESS_TOKEN_KEY),
            user_id: self.storage.get(USER_ID_KEY),
        };
    }

    /// Record a successful login: persist both credentials, then update the
    /// in-memory mirror. The token is opaque; no format validation.
    pub fn login(&mut self, token: &str, user_id: &str) {
        self.storage.set(ACCESS_TOKEN_KEY, token);
        self.storage.set(USER_ID_KEY, user_id);
        self.state = SessionState {
            access_token: Some(token.to_owned()),
            user_id: Some(user_id.to_owned()),
        };
    }

    /// End the session.
    ///
    /// Notifies the backend with the current token first; that call is
    /// best-effort and a failure is only logged. Clearing both storage keys
    /// and the in-memory mirror always happens.
    pub async fn logout<B: AuthApi>(&mut self, backend: &B) {
        if let Some(token) = self.state.access_token.clone() {
            if !token.is_empty() {
                if let Err(err) = backend.logout(&token).await {
                    log::warn!("logout notification failed: {err}");
                }
            }
        }
        self.storage.remove(ACCESS_TOKEN_KEY);
        self.storage.remove(USER_ID_KEY);
        self.state = SessionState::default();
    }
}
