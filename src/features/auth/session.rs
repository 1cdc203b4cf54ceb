//! Session Store: the `(identity, token)` pair for the current tab.
//!
//! Both halves are required together. A store that holds only one of them
//! reports no session at all, so guards and clients never see a half-valid
//! state. Tokens are opaque strings; no shape validation happens here.

use std::{cell::RefCell, fmt};

/// Authenticated user for the current tab.
#[derive(Clone, PartialEq, Eq)]
pub struct Session {
    pub identity: String,
    pub token: String,
}

impl Session {
    pub fn new(identity: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            identity: identity.into(),
            token: token.into(),
        }
    }

    /// True when both identity and token are non-blank.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.identity.trim().is_empty() && !self.token.trim().is_empty()
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("identity", &self.identity)
            .field("token", &"***")
            .finish()
    }
}

/// Storage key holding the identity.
pub const IDENTITY_KEY: &str = "user";
/// Storage key holding the bearer token.
pub const TOKEN_KEY: &str = "token";

/// Removes both session keys, attempting each even when one fails, and returns
/// the keys that could not be removed.
pub fn remove_keys<E>(mut remove: impl FnMut(&str) -> Result<(), E>) -> Vec<&'static str> {
    [IDENTITY_KEY, TOKEN_KEY]
        .into_iter()
        .filter(|key| remove(key).is_err())
        .collect()
}

/// Per-tab session storage shared by the guard, the API client, and logout.
pub trait SessionStore {
    /// Returns the session only when both identity and token are present.
    fn get(&self) -> Option<Session>;
    fn set(&self, session: Session);
    fn clear(&self);

    fn token(&self) -> Option<String> {
        self.get().map(|session| session.token)
    }
}

/// In-process store used by the command-line bootstrap and tests.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    current: RefCell<Option<Session>>,
}

impl MemorySessionStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_session(session: Session) -> Self {
        Self {
            current: RefCell::new(Some(session)),
        }
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self) -> Option<Session> {
        self.current.borrow().clone().filter(Session::is_complete)
    }

    fn set(&self, session: Session) {
        self.current.replace(Some(session));
    }

    fn clear(&self) {
        self.current.replace(None);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_store_has_no_session() {
        let store = MemorySessionStore::new();
        assert_eq!(store.get(), None);
        assert_eq!(store.token(), None);
    }

    #[test]
    fn set_then_get_returns_session() {
        let store = MemorySessionStore::new();
        store.set(Session::new("alice", "abc123"));

        assert_eq!(store.get(), Some(Session::new("alice", "abc123")));
        assert_eq!(store.token().as_deref(), Some("abc123"));
    }

    #[test]
    fn missing_half_invalidates_whole_session() {
        let store = MemorySessionStore::with_session(Session::new("alice", ""));
        assert_eq!(store.get(), None);

        store.set(Session::new("  ", "abc123"));
        assert_eq!(store.get(), None);
        assert_eq!(store.token(), None);
    }

    #[test]
    fn clear_is_idempotent() {
        let store = MemorySessionStore::with_session(Session::new("alice", "abc123"));
        store.clear();
        assert_eq!(store.get(), None);
        store.clear();
        assert_eq!(store.get(), None);
    }

    #[test]
    fn remove_keys_reports_failures_and_keeps_going() {
        let mut attempted = Vec::new();
        let failed = remove_keys(|key| {
            attempted.push(key.to_string());
            if key == IDENTITY_KEY {
                Err(())
            } else {
                Ok(())
            }
        });

        assert_eq!(attempted, vec!["user", "token"]);
        assert_eq!(failed, vec![IDENTITY_KEY]);
        assert!(remove_keys(|_| Ok::<(), ()>(())).is_empty());
    }

    #[test]
    fn debug_redacts_token() {
        let rendered = format!("{:?}", Session::new("alice", "abc123"));
        assert!(rendered.contains("alice"));
        assert!(!rendered.contains("abc123"));
    }
}
