//! Request and response types for the login endpoint. The request carries a
//! password and the response a bearer token; neither may be logged.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

impl fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginRequest")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

#[derive(Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub success: bool,
    pub user: String,
    pub token: String,
}

impl fmt::Debug for LoginResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginResponse")
            .field("success", &self.success)
            .field("user", &self.user)
            .field("token", &"***")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_response_deserializes_server_payload() {
        let response: LoginResponse = serde_json::from_str(
            r#"{"success": true, "user": "Admin", "token": "mock-token-12345"}"#,
        )
        .expect("Failed to deserialize");

        assert!(response.success);
        assert_eq!(response.user, "Admin");
        assert_eq!(response.token, "mock-token-12345");
        assert!(!format!("{response:?}").contains("mock-token"));
    }

    #[test]
    fn login_request_debug_hides_password() {
        let request = LoginRequest {
            username: "Admin".to_string(),
            password: "1234".to_string(),
        };
        let json = serde_json::to_string(&request).expect("Failed to serialize");
        assert_eq!(json, r#"{"username":"Admin","password":"1234"}"#);
        assert!(!format!("{request:?}").contains("1234"));
    }
}
