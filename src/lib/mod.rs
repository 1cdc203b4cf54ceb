//! Shared utilities for API access, configuration, errors, and build metadata.
//!
//! ## Request Flow
//!
//! 1. **Prepare:** `ApiClient` joins the configured base URL and the path, merges the
//!    caller's headers over `Content-Type: application/json`, and adds
//!    `Authorization: Bearer <token>` when the session store holds one.
//! 2. **Send:** a [`Transport`] performs exactly one HTTP exchange. Native builds use
//!    `reqwest`; `wasm32` builds use `gloo-net` with an abort timeout.
//! 3. **Translate:** `2xx` bodies are parsed as JSON. A `401` runs the Logout Action
//!    before `SessionExpired` is returned. Other statuses become `ApiError::Http`
//!    with a sanitized message.
//!
//! Every failure leaves `ApiClient::request` through one logging site, so callers
//! always receive an error that has already been reported. Helpers never log
//! bearer tokens or request bodies.

pub mod api;
pub mod build_info;
pub mod config;
pub mod errors;
pub mod transport;

pub use api::{ApiClient, RequestOptions};
pub use config::AppConfig;
pub use errors::{ApiError, ErrorKind};
pub use transport::{Method, PreparedRequest, RawResponse, Transport};

#[cfg(not(target_arch = "wasm32"))]
pub use transport::ReqwestTransport;

#[cfg(target_arch = "wasm32")]
pub use transport::FetchTransport;
