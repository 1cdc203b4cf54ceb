//! The single seam that performs one HTTP exchange.
//!
//! `ApiClient` prepares a fully-resolved [`PreparedRequest`] (URL, merged headers,
//! serialized body) and hands it to a [`Transport`]. A transport reports the raw
//! status and body; it never interprets status codes, so session expiry and error
//! translation stay in one place. Network failures and deadlines are the only
//! errors a transport produces.

use super::errors::ApiError;
use std::fmt;
use tracing::debug;

#[cfg(not(target_arch = "wasm32"))]
use std::time::Duration;

/// HTTP verbs used by the stock API.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// A request ready to go on the wire.
#[derive(Clone, PartialEq, Eq)]
pub struct PreparedRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl PreparedRequest {
    /// Returns the first header value matching `name`, ignoring ASCII case.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

impl fmt::Debug for PreparedRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let headers: Vec<(&str, &str)> = self
            .headers
            .iter()
            .map(|(name, value)| {
                if name.eq_ignore_ascii_case("authorization") {
                    (name.as_str(), "***")
                } else {
                    (name.as_str(), value.as_str())
                }
            })
            .collect();
        f.debug_struct("PreparedRequest")
            .field("method", &self.method)
            .field("url", &self.url)
            .field("headers", &headers)
            .field("body", &self.body.as_ref().map(|_| "***"))
            .finish()
    }
}

/// Status and body of a completed exchange.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }
}

/// Performs exactly one HTTP exchange; no retries.
///
/// Futures are not required to be `Send`: the browser transport holds JS handles
/// and the whole core runs on a single-threaded executor.
#[allow(async_fn_in_trait)]
pub trait Transport {
    /// # Errors
    /// Returns `ApiError::Network` or `ApiError::Timeout` when no response was received,
    /// and `ApiError::Serialization` when the request could not be built.
    async fn send(&self, request: PreparedRequest) -> Result<RawResponse, ApiError>;
}

/// Native transport backed by `reqwest`.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Clone, Debug)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

#[cfg(not(target_arch = "wasm32"))]
impl ReqwestTransport {
    /// # Errors
    /// Returns `ApiError::Config` if the HTTP client cannot be initialized.
    pub fn new(timeout: Duration) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .user_agent(crate::APP_USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(|err| ApiError::Config(format!("Failed to build HTTP client: {err}")))?;
        Ok(Self { client })
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl Transport for ReqwestTransport {
    async fn send(&self, request: PreparedRequest) -> Result<RawResponse, ApiError> {
        let method = match request.method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Delete => reqwest::Method::DELETE,
        };

        let mut builder = self.client.request(method, &request.url);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await.map_err(map_reqwest_error)?;
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .unwrap_or_else(|err| unreadable_body(status, &err));

        Ok(RawResponse { status, body })
    }
}

/// Maps `reqwest` failures into `ApiError` variants with timeout detection.
#[cfg(not(target_arch = "wasm32"))]
fn map_reqwest_error(err: reqwest::Error) -> ApiError {
    if err.is_timeout() {
        ApiError::Timeout("Request timed out. Please try again.".to_string())
    } else if err.is_builder() {
        ApiError::Serialization(format!("Failed to build request: {err}"))
    } else {
        ApiError::Network(format!("Unable to reach the server: {err}"))
    }
}

/// Once the status line has arrived the exchange counts as completed; a body that
/// cannot be read is treated as empty so the status is still interpreted.
fn unreadable_body(status: u16, err: &dyn fmt::Display) -> String {
    debug!(status, "failed to read response body: {err}");
    String::new()
}

/// Browser transport backed by `fetch` (via `gloo-net`) with an abort timeout.
#[cfg(target_arch = "wasm32")]
#[derive(Clone, Copy, Debug)]
pub struct FetchTransport {
    timeout_ms: u32,
}

#[cfg(target_arch = "wasm32")]
impl FetchTransport {
    #[must_use]
    pub const fn new(timeout_ms: u32) -> Self {
        Self { timeout_ms }
    }
}

#[cfg(target_arch = "wasm32")]
impl Transport for FetchTransport {
    async fn send(&self, request: PreparedRequest) -> Result<RawResponse, ApiError> {
        use gloo_net::http::Request;
        use gloo_timers::callback::Timeout;
        use web_sys::AbortController;

        let controller = AbortController::new()
            .map_err(|_| ApiError::Config("Failed to initialize request timeout.".to_string()))?;
        let signal = controller.signal();
        let timeout_controller = controller.clone();
        let _timeout = Timeout::new(self.timeout_ms, move || timeout_controller.abort());

        let mut builder = match request.method {
            Method::Get => Request::get(&request.url),
            Method::Post => Request::post(&request.url),
            Method::Put => Request::put(&request.url),
            Method::Delete => Request::delete(&request.url),
        }
        .abort_signal(Some(&signal));

        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        let built = match request.body {
            Some(body) => builder.body(body),
            None => builder.build(),
        }
        .map_err(|err| ApiError::Serialization(format!("Failed to build request: {err}")))?;

        let response = built.send().await.map_err(map_fetch_error)?;
        let status = response.status();
        let body = response
            .text()
            .await
            .unwrap_or_else(|err| unreadable_body(status, &err));

        Ok(RawResponse { status, body })
    }
}

/// Maps `fetch` failures into `ApiError` variants; an aborted request is a timeout.
#[cfg(target_arch = "wasm32")]
fn map_fetch_error(err: gloo_net::Error) -> ApiError {
    let message = err.to_string();
    let lowered = message.to_lowercase();

    if lowered.contains("timeout") || lowered.contains("abort") {
        ApiError::Timeout("Request timed out. Please try again.".to_string())
    } else {
        ApiError::Network(format!("Unable to reach the server: {message}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_response_success_range() {
        let ok = |status| RawResponse {
            status,
            body: String::new(),
        };
        assert!(ok(200).is_success());
        assert!(ok(204).is_success());
        assert!(!ok(199).is_success());
        assert!(!ok(301).is_success());
        assert!(!ok(401).is_success());
    }

    #[test]
    fn unreadable_body_is_empty() {
        assert_eq!(unreadable_body(401, &"connection reset"), "");
    }

    #[test]
    fn prepared_request_debug_redacts_credentials() {
        let request = PreparedRequest {
            method: Method::Post,
            url: "http://localhost:8000/api/auth/login".to_string(),
            headers: vec![
                ("Content-Type".to_string(), "application/json".to_string()),
                ("Authorization".to_string(), "Bearer abc123".to_string()),
            ],
            body: Some(r#"{"password":"1234"}"#.to_string()),
        };

        let rendered = format!("{request:?}");
        assert!(!rendered.contains("abc123"));
        assert!(!rendered.contains("1234"));
        assert!(rendered.contains("application/json"));
        assert_eq!(request.header("authorization"), Some("Bearer abc123"));
    }
}
