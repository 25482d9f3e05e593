//! Login Endpoint
//!
//! `POST /login` exchanges credentials for a session token.

use serde::Deserialize;
use serde_json::{json, Value};

use super::{message_text, ApiClient, ApiError, ApiRequest};

#[derive(Deserialize)]
struct LoginResponse {
    status: String,
    #[serde(default)]
    token: Option<String>,
    #[serde(default)]
    message: Value,
}

pub fn login_request(username: &str, password: &str) -> ApiRequest {
    let body = json!({ "username": username, "password": password });
    ApiRequest::post("/login", Some(body)).anonymous()
}

/// Extract the token from a login reply
pub fn decode_login(body: &str) -> Result<String, ApiError> {
    let response: LoginResponse = serde_json::from_str(body)?;
    if response.status != "success" {
        let text = message_text(&response.message);
        return Err(ApiError::Rejected(if text.is_empty() { body.to_string() } else { text }));
    }
    match response.token {
        Some(token) if !token.is_empty() => Ok(token),
        _ => Err(ApiError::Decode("login response has no token".to_string())),
    }
}

pub async fn login(client: &ApiClient, username: &str, password: &str) -> Result<String, ApiError> {
    let body = client.execute(&login_request(username, password)).await?;
    decode_login(&body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::HttpMethod;

    #[test]
    fn test_login_request() {
        let req = login_request("ops@example.com", "hunter2");
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.path, "/login");
        assert!(!req.authenticated);
        assert_eq!(req.body, Some(json!({"username": "ops@example.com", "password": "hunter2"})));
    }

    #[test]
    fn test_decode_login_success() {
        let body = r#"{"status":"success","message":"Authentication successful","token":"t-1"}"#;
        assert_eq!(decode_login(body), Ok("t-1".to_string()));
    }

    #[test]
    fn test_decode_login_rejected() {
        let body = r#"{"status":"error","message":"Invalid credentials"}"#;
        assert_eq!(decode_login(body), Err(ApiError::Rejected("Invalid credentials".into())));
    }

    #[test]
    fn test_decode_login_missing_token() {
        assert!(matches!(decode_login(r#"{"status":"success"}"#), Err(ApiError::Decode(_))));
    }

    #[test]
    fn test_decode_login_garbage() {
        assert!(matches!(decode_login("<html>"), Err(ApiError::Decode(_))));
    }
}
