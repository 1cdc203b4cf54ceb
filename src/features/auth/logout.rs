use super::{navigation::Navigator, session::SessionStore};
use std::rc::Rc;
use tracing::{info, warn};

/// Why the session ended; only used for logging.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogoutReason {
    UserRequested,
    SessionExpired,
}

/// Clears the session, then sends the user to the landing page.
#[derive(Clone)]
pub struct Logout {
    session: Rc<dyn SessionStore>,
    navigator: Rc<dyn Navigator>,
    landing_path: String,
}

impl Logout {
    pub fn new(
        session: Rc<dyn SessionStore>,
        navigator: Rc<dyn Navigator>,
        landing_path: impl Into<String>,
    ) -> Self {
        Self {
            session,
            navigator,
            landing_path: landing_path.into(),
        }
    }

    /// Explicit logout from the page chrome control.
    pub fn perform(&self) {
        self.perform_for(LogoutReason::UserRequested);
    }

    /// The store is fully cleared before the redirect is issued.
    pub fn perform_for(&self, reason: LogoutReason) {
        self.session.clear();

        match reason {
            LogoutReason::UserRequested => info!("session cleared on user request"),
            LogoutReason::SessionExpired => warn!("session rejected by the server; cleared"),
        }

        self.navigator.redirect(&self.landing_path);
    }

    #[must_use]
    pub fn landing_path(&self) -> &str {
        &self.landing_path
    }
}
