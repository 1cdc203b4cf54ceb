//! Authenticated JSON client for the stock API.
//!
//! Feature clients go through [`ApiClient`] so header merging, bearer-token
//! injection, session expiry, and error translation happen in one place. The
//! client reads the token from the injected session store on every call and never
//! caches it. A `401` on a session-guarded call runs the Logout Action before
//! `SessionExpired` is returned, so a caller's failure handler never races with
//! an in-flight logout.

use super::{
    config::AppConfig,
    errors::ApiError,
    transport::{Method, PreparedRequest, RawResponse, Transport},
};
use crate::features::auth::{
    logout::{Logout, LogoutReason},
    session::SessionStore,
};
use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;
use std::rc::Rc;
use tracing::{debug, error};

/// Maximum number of error body characters surfaced to the UI.
const MAX_ERROR_CHARS: usize = 200;

/// Per-call options: verb, extra headers, serialized body, and 401 handling.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RequestOptions {
    pub method: Method,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
    /// When false, a `401` is an ordinary `Http` error and the session is kept.
    pub expire_on_unauthorized: bool,
}

impl Default for RequestOptions {
    fn default() -> Self {
        Self::new(Method::Get)
    }
}

impl RequestOptions {
    #[must_use]
    pub const fn new(method: Method) -> Self {
        Self {
            method,
            headers: Vec::new(),
            body: None,
            expire_on_unauthorized: true,
        }
    }

    /// Marks the call as public: a `401` means bad credentials, not an expired session.
    #[must_use]
    pub fn public(mut self) -> Self {
        self.expire_on_unauthorized = false;
        self
    }

    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Serializes `body` as the JSON request body.
    ///
    /// # Errors
    /// Returns `ApiError::Serialization` if the value cannot be encoded.
    pub fn json<B: Serialize + ?Sized>(mut self, body: &B) -> Result<Self, ApiError> {
        let payload = serde_json::to_string(body)
            .map_err(|err| ApiError::Serialization(format!("Failed to encode request: {err}")))?;
        self.body = Some(payload);
        Ok(self)
    }
}

/// JSON API client bound to a session store and a transport.
pub struct ApiClient<T> {
    base_url: String,
    transport: T,
    session: Rc<dyn SessionStore>,
    logout: Logout,
}

impl<T: Transport> ApiClient<T> {
    pub fn new(
        config: &AppConfig,
        transport: T,
        session: Rc<dyn SessionStore>,
        logout: Logout,
    ) -> Self {
        Self {
            base_url: config.api_base_url.clone(),
            transport,
            session,
            logout,
        }
    }

    /// The store this client reads tokens from.
    #[must_use]
    pub fn session(&self) -> &Rc<dyn SessionStore> {
        &self.session
    }

    /// Sends one request and returns the parsed JSON body.
    ///
    /// # Errors
    /// `SessionExpired` after a `401` (the session is already cleared), `Http` for
    /// any other non-success status, `Network`/`Timeout` when no response arrived,
    /// and `Parse` when a success body is not JSON. Every error is logged first.
    pub async fn request(&self, path: &str, options: RequestOptions) -> Result<Value, ApiError> {
        let method = options.method;
        self.execute(path, options)
            .await
            .inspect_err(|err| log_failure(method, path, err))
    }

    /// Like `request`, decoding the whole body into `D`.
    ///
    /// # Errors
    /// Same as `request`, plus `Parse` when the body does not match `D`.
    pub async fn request_as<D: DeserializeOwned>(
        &self,
        path: &str,
        options: RequestOptions,
    ) -> Result<D, ApiError> {
        let method = options.method;
        let body = self.request(path, options).await?;
        serde_json::from_value(body)
            .map_err(|err| ApiError::Parse(format!("Failed to decode response: {err}")))
            .inspect_err(|err| log_failure(method, path, err))
    }

    /// Like `request`, decoding the envelope's `data` field into `D`.
    ///
    /// # Errors
    /// Same as `request`, plus `Parse` when `data` is missing or does not match `D`.
    pub async fn request_data<D: DeserializeOwned>(
        &self,
        path: &str,
        options: RequestOptions,
    ) -> Result<D, ApiError> {
        let method = options.method;
        let body = self.request(path, options).await?;
        decode_data(body).inspect_err(|err| log_failure(method, path, err))
    }

    /// # Errors
    /// See [`ApiClient::request`].
    pub async fn get(&self, path: &str) -> Result<Value, ApiError> {
        self.request(path, RequestOptions::new(Method::Get))
            .await
            .map(unwrap_data)
    }

    /// # Errors
    /// See [`ApiClient::request`]; also `Serialization` if `body` cannot be encoded.
    pub async fn post<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<Value, ApiError> {
        let options = self.with_body(Method::Post, path, body)?;
        self.request(path, options).await.map(unwrap_data)
    }

    /// # Errors
    /// See [`ApiClient::request`]; also `Serialization` if `body` cannot be encoded.
    pub async fn put<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<Value, ApiError> {
        let options = self.with_body(Method::Put, path, body)?;
        self.request(path, options).await.map(unwrap_data)
    }

    /// # Errors
    /// See [`ApiClient::request`].
    pub async fn delete(&self, path: &str) -> Result<Value, ApiError> {
        self.request(path, RequestOptions::new(Method::Delete))
            .await
            .map(unwrap_data)
    }

    /// # Errors
    /// See [`ApiClient::request_data`].
    pub async fn get_data<D: DeserializeOwned>(&self, path: &str) -> Result<D, ApiError> {
        self.request_data(path, RequestOptions::new(Method::Get))
            .await
    }

    /// Like `get_data`, but a missing or `null` `data` yields `D::default()`.
    ///
    /// # Errors
    /// See [`ApiClient::request`]; also `Parse` when `data` does not match `D`.
    pub async fn get_data_or_default<D: DeserializeOwned + Default>(
        &self,
        path: &str,
    ) -> Result<D, ApiError> {
        let body = self.request(path, RequestOptions::new(Method::Get)).await?;
        match body.get("data") {
            None | Some(Value::Null) => Ok(D::default()),
            Some(_) => decode_data(body).inspect_err(|err| log_failure(Method::Get, path, err)),
        }
    }

    /// # Errors
    /// See [`ApiClient::request_data`]; also `Serialization` if `body` cannot be encoded.
    pub async fn post_data<B: Serialize + ?Sized, D: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<D, ApiError> {
        let options = self.with_body(Method::Post, path, body)?;
        self.request_data(path, options).await
    }

    /// # Errors
    /// See [`ApiClient::request_data`]; also `Serialization` if `body` cannot be encoded.
    pub async fn put_data<B: Serialize + ?Sized, D: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<D, ApiError> {
        let options = self.with_body(Method::Put, path, body)?;
        self.request_data(path, options).await
    }

    /// Builds the wire request: base URL, default and caller headers, bearer token.
    #[must_use]
    pub fn prepare(&self, path: &str, options: &RequestOptions) -> PreparedRequest {
        let token = self.session.token();
        PreparedRequest {
            method: options.method,
            url: build_url_with_base(&self.base_url, path),
            headers: merge_headers(&options.headers, token.as_deref()),
            body: options.body.clone(),
        }
    }

    async fn execute(&self, path: &str, options: RequestOptions) -> Result<Value, ApiError> {
        let request = self.prepare(path, &options);
        debug!(method = %request.method, url = %request.url, "API request");

        let response = self.transport.send(request).await?;
        if response.is_success() {
            return parse_json(&response);
        }

        if response.status == 401 && options.expire_on_unauthorized {
            self.logout.perform_for(LogoutReason::SessionExpired);
            return Err(ApiError::SessionExpired);
        }

        Err(ApiError::Http {
            status: response.status,
            message: sanitize_body(&response.body),
        })
    }

    fn with_body<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> Result<RequestOptions, ApiError> {
        RequestOptions::new(method)
            .json(body)
            .inspect_err(|err| log_failure(method, path, err))
    }
}

fn log_failure(method: Method, path: &str, err: &ApiError) {
    error!(%method, path, kind = ?err.kind(), "API error: {err}");
}

/// Builds a URL from an explicit base URL and the provided path.
fn build_url_with_base(base_url: &str, path: &str) -> String {
    let base = base_url.trim().trim_end_matches('/');
    let path = path.trim();

    if base.is_empty() {
        path.to_string()
    } else {
        format!("{}/{}", base, path.trim_start_matches('/'))
    }
}

/// Default `Content-Type`, then caller headers (replacing by name), then the token.
fn merge_headers(custom: &[(String, String)], token: Option<&str>) -> Vec<(String, String)> {
    let mut headers = vec![("Content-Type".to_string(), "application/json".to_string())];

    for (name, value) in custom {
        set_header(&mut headers, name, value.clone());
    }

    if let Some(token) = token {
        set_header(&mut headers, "Authorization", format!("Bearer {token}"));
    }

    headers
}

fn set_header(headers: &mut Vec<(String, String)>, name: &str, value: String) {
    match headers
        .iter_mut()
        .find(|(existing, _)| existing.eq_ignore_ascii_case(name))
    {
        Some(entry) => *entry = (name.to_string(), value),
        None => headers.push((name.to_string(), value)),
    }
}

/// Empty success bodies (e.g. `204`) parse as `null`.
fn parse_json(response: &RawResponse) -> Result<Value, ApiError> {
    if response.body.trim().is_empty() {
        return Ok(Value::Null);
    }
    serde_json::from_str(&response.body)
        .map_err(|err| ApiError::Parse(format!("Failed to decode response: {err}")))
}

/// Returns the envelope's `data` when present, otherwise the whole body.
fn unwrap_data(body: Value) -> Value {
    match body {
        Value::Object(mut map) if map.contains_key("data") => {
            map.remove("data").unwrap_or(Value::Null)
        }
        other => other,
    }
}

fn decode_data<D: DeserializeOwned>(body: Value) -> Result<D, ApiError> {
    let Value::Object(mut map) = body else {
        return Err(ApiError::Parse("Response is not a JSON object.".to_string()));
    };
    let data = map
        .remove("data")
        .ok_or_else(|| ApiError::Parse("Response has no data field.".to_string()))?;
    serde_json::from_value(data)
        .map_err(|err| ApiError::Parse(format!("Failed to decode response: {err}")))
}

/// Sanitizes HTTP error bodies for user-facing messages.
///
/// Prefers the server's `{"detail": "..."}` message; otherwise trims and truncates.
fn sanitize_body(body: &str) -> String {
    let detail = serde_json::from_str::<Value>(body).ok().and_then(|value| {
        value
            .get("detail")
            .and_then(Value::as_str)
            .map(str::to_string)
    });

    let text = detail.as_deref().unwrap_or(body);
    let trimmed = text.trim();
    if trimmed.is_empty() {
        "Request failed.".to_string()
    } else {
        trimmed.chars().take(MAX_ERROR_CHARS).collect()
    }
}
