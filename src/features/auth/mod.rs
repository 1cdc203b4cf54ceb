//! Auth feature module: the per-tab session, the page guard, the logout action,
//! and the login call that creates a session. This module touches security
//! boundaries and must avoid logging tokens or passwords.
//!
//! Flow Overview: login stores `(identity, token)`; every protected page runs the
//! guard once on load; the API client reads the token per request and runs the
//! logout action when the server answers `401`.

pub mod client;
pub mod guards;
pub mod logout;
pub mod navigation;
pub mod session;
pub mod state;
pub mod types;

pub use guards::AuthGuard;
pub use logout::{Logout, LogoutReason};
pub use navigation::{MemoryChrome, MemoryNavigator, Navigator, PageChrome};
pub use session::{MemorySessionStore, Session, SessionStore};
pub use state::AuthContext;
