//! Client wrapper for the login endpoint. A successful login is the only place a
//! session is created.

use crate::{
    app_lib::{ApiClient, ApiError, Method, RequestOptions, Transport},
    features::auth::{
        session::Session,
        types::{LoginRequest, LoginResponse},
    },
};

pub const LOGIN_PATH: &str = "/api/auth/login";

/// Authenticates and stores the resulting session in the client's store.
///
/// The call is public: a `401` means invalid credentials and is returned as
/// `ApiError::Http` without touching any existing session.
///
/// # Errors
/// `Config` for blank credentials, `Http` for rejected credentials, `Parse` when
/// the response lacks a user or token, plus any transport failure.
pub async fn login<T: Transport>(
    api: &ApiClient<T>,
    request: &LoginRequest,
) -> Result<Session, ApiError> {
    if request.username.trim().is_empty() || request.password.is_empty() {
        return Err(ApiError::Config(
            "Username and password are required.".to_string(),
        ));
    }

    let options = RequestOptions::new(Method::Post).public().json(request)?;
    let response: LoginResponse = api.request_as(LOGIN_PATH, options).await?;

    let session = Session::new(response.user, response.token);
    if !session.is_complete() {
        return Err(ApiError::Parse(
            "Login response is missing the user or token.".to_string(),
        ));
    }

    api.session().set(session.clone());
    Ok(session)
}
