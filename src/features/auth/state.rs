//! Wiring for one page (or one CLI invocation): a single session store shared by
//! the guard, the logout action, and any API client built from this context.

use super::{
    guards::AuthGuard,
    logout::Logout,
    navigation::{Navigator, PageChrome},
    session::SessionStore,
};
use crate::app_lib::{ApiClient, AppConfig, Transport};
use std::rc::Rc;

/// Auth collaborators sharing one session store.
#[derive(Clone)]
pub struct AuthContext {
    pub session: Rc<dyn SessionStore>,
    pub guard: AuthGuard,
    pub logout: Logout,
}

impl AuthContext {
    pub fn new(
        config: &AppConfig,
        session: Rc<dyn SessionStore>,
        navigator: Rc<dyn Navigator>,
        chrome: Rc<dyn PageChrome>,
    ) -> Self {
        let logout = Logout::new(session.clone(), navigator.clone(), config.landing_path.clone());
        let guard = AuthGuard::new(session.clone(), navigator, chrome, config.landing_path.clone());
        Self {
            session,
            guard,
            logout,
        }
    }

    /// Builds an API client that expires this context's session on `401`.
    pub fn api_client<T: Transport>(&self, config: &AppConfig, transport: T) -> ApiClient<T> {
        ApiClient::new(config, transport, self.session.clone(), self.logout.clone())
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.session.get().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::auth::{
        navigation::{MemoryChrome, MemoryNavigator},
        session::{MemorySessionStore, Session},
    };

    #[test]
    fn guard_and_logout_share_the_store() {
        let config = AppConfig::default();
        let store = Rc::new(MemorySessionStore::with_session(Session::new(
            "alice", "abc123",
        )));
        let navigator = Rc::new(MemoryNavigator::new("/dashboard.html"));
        let context = AuthContext::new(
            &config,
            store.clone(),
            navigator.clone(),
            Rc::new(MemoryChrome::with_slot()),
        );

        assert!(context.is_authenticated());
        assert!(context.guard.enforce("/dashboard.html"));

        context.logout.perform();

        assert!(!context.is_authenticated());
        assert!(!context.guard.enforce("/dashboard.html"));
        assert_eq!(navigator.redirects(), vec!["/index.html", "/index.html"]);
    }
}
