//! # Stockroom (stock-management front-end core)
//!
//! `stockroom` is the client-side core of the stock-management web application.
//! The server owns every business rule (stock thresholds, KPI aggregation, order
//! status); this crate owns the contract the pages depend on:
//!
//! - **Session Store:** the `(identity, token)` pair for the current tab, behind the
//!   [`SessionStore`](features::auth::session::SessionStore) trait.
//! - **Auth Guard:** redirects protected pages to the landing page when no session
//!   exists and writes the identity into the page chrome when one does.
//! - **API Client:** JSON over HTTP with bearer-token injection. A `401` clears the
//!   session, redirects, and surfaces as `SessionExpired`; every failure is logged
//!   before it is returned.
//! - **Logout Action:** clears the session, then redirects.
//!
//! ## Bootstraps
//!
//! The core never reaches for ambient state. Two thin layers wire it to a host:
//! the browser bootstrap (`wasm32`, `sessionStorage` + DOM) and the `stockroom`
//! command-line binary (in-memory session, `reqwest` transport).

#[path = "lib/mod.rs"]
pub mod app_lib;
#[cfg(not(target_arch = "wasm32"))]
pub mod cli;
pub mod features;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use app_lib::{ApiClient, ApiError, AppConfig, ErrorKind, Method, RequestOptions};

pub const GIT_COMMIT_HASH: &str = app_lib::build_info::git_commit_hash();

pub const APP_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"),);
