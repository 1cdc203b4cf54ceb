//! `sessionStorage`-backed session store. Two independent keys form one logical
//! session; the storage dies with the tab.

use crate::features::auth::session::{
    IDENTITY_KEY, Session, SessionStore, TOKEN_KEY, remove_keys,
};
use tracing::error;
use web_sys::Storage;

pub struct BrowserSessionStore {
    storage: Option<Storage>,
}

impl BrowserSessionStore {
    /// Binds to `window.sessionStorage`; without one, the store is always empty.
    #[must_use]
    pub fn new() -> Self {
        let storage = web_sys::window().and_then(|window| window.session_storage().ok().flatten());
        if storage.is_none() {
            error!("sessionStorage is unavailable; every page will redirect to login");
        }
        Self { storage }
    }

    fn read(&self, key: &str) -> Option<String> {
        self.storage
            .as_ref()?
            .get_item(key)
            .ok()
            .flatten()
            .filter(|value| !value.trim().is_empty())
    }
}

impl Default for BrowserSessionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionStore for BrowserSessionStore {
    fn get(&self) -> Option<Session> {
        let identity = self.read(IDENTITY_KEY)?;
        let token = self.read(TOKEN_KEY)?;
        Some(Session::new(identity, token))
    }

    fn set(&self, session: Session) {
        let Some(storage) = &self.storage else {
            return;
        };
        if storage.set_item(IDENTITY_KEY, &session.identity).is_err()
            || storage.set_item(TOKEN_KEY, &session.token).is_err()
        {
            error!("failed to persist session to sessionStorage");
        }
    }

    fn clear(&self) {
        let Some(storage) = &self.storage else {
            return;
        };
        let failed = remove_keys(|key| storage.remove_item(key));
        if !failed.is_empty() {
            error!(keys = ?failed, "failed to remove session from sessionStorage");
        }
    }
}
