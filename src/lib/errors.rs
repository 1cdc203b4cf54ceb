use thiserror::Error;

/// Failures surfaced by the API client and feature clients.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    /// The server rejected the bearer token; the session was already cleared.
    #[error("Session expired. Please sign in again.")]
    SessionExpired,
    #[error("Request failed ({status}): {message}")]
    Http { status: u16, message: String },
    #[error("Network error: {0}")]
    Network(String),
    #[error("Timeout: {0}")]
    Timeout(String),
    #[error("Response error: {0}")]
    Parse(String),
    #[error("Request error: {0}")]
    Serialization(String),
    #[error("Config error: {0}")]
    Config(String),
}

/// Coarse classification used by views to pick a message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    SessionExpired,
    HttpStatus,
    NetworkFailure,
    /// Raised before or after the exchange (bad input, undecodable body).
    Local,
}

impl ApiError {
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::SessionExpired => ErrorKind::SessionExpired,
            Self::Http { .. } => ErrorKind::HttpStatus,
            Self::Network(_) | Self::Timeout(_) => ErrorKind::NetworkFailure,
            Self::Parse(_) | Self::Serialization(_) | Self::Config(_) => ErrorKind::Local,
        }
    }

    /// HTTP status carried by the error; `SessionExpired` carries none.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}
