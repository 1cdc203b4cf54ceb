use super::{
    navigation::{Navigator, PageChrome},
    session::SessionStore,
};
use std::rc::Rc;
use tracing::debug;

/// Gates protected pages on the presence of a session.
///
/// UX-only guard; real access control must live on the API.
#[derive(Clone)]
pub struct AuthGuard {
    session: Rc<dyn SessionStore>,
    navigator: Rc<dyn Navigator>,
    chrome: Rc<dyn PageChrome>,
    landing_path: String,
}

impl AuthGuard {
    pub fn new(
        session: Rc<dyn SessionStore>,
        navigator: Rc<dyn Navigator>,
        chrome: Rc<dyn PageChrome>,
        landing_path: impl Into<String>,
    ) -> Self {
        Self {
            session,
            navigator,
            chrome,
            landing_path: landing_path.into(),
        }
    }

    /// Whether `path` needs a session. The landing page never does.
    #[must_use]
    pub fn protects(&self, path: &str) -> bool {
        !is_landing_page(path, &self.landing_path)
    }

    /// Returns true only when a session exists. Otherwise redirects to the
    /// landing page and leaves the chrome untouched; the caller must not render.
    pub fn enforce(&self, current_path: &str) -> bool {
        let Some(session) = self.session.get() else {
            debug!(path = current_path, "no session; redirecting to landing page");
            self.navigator.redirect(&self.landing_path);
            return false;
        };

        self.chrome.show_identity(&session.identity);
        true
    }
}

/// `/`, the configured landing path, and any path ending in its file name are
/// the landing page.
fn is_landing_page(path: &str, landing_path: &str) -> bool {
    let path = path.trim();
    if path.is_empty() || path == "/" || path == landing_path {
        return true;
    }

    file_name(landing_path).is_some_and(|landing| file_name(path) == Some(landing))
}

fn file_name(path: &str) -> Option<&str> {
    path.rsplit('/').next().filter(|file| !file.is_empty())
}
