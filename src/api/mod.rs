//! check42 API Client
//!
//! HTTP bindings to the remote REST API, organized by domain.
//! Every call is raced against the configured timeout.

mod error;
mod auth;
mod checks;
mod run;
mod schedule;
mod settings;

use std::fmt;
use std::future::Future;

use futures::future::{select, Either};
use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;
use serde_json::Value;

use crate::config::Config;
use crate::session::Session;

// Re-export all public items
pub use error::ApiError;
pub use auth::*;
pub use checks::*;
pub use run::*;
pub use schedule::*;
pub use settings::*;

// ========================
// Request Description
// ========================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
        })
    }
}

/// A single API call, built by the domain modules and sent by `ApiClient`
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: HttpMethod,
    pub path: &'static str,
    pub body: Option<Value>,
    pub authenticated: bool,
}

impl ApiRequest {
    pub fn get(path: &'static str) -> Self {
        Self { method: HttpMethod::Get, path, body: None, authenticated: true }
    }

    pub fn post(path: &'static str, body: Option<Value>) -> Self {
        Self { method: HttpMethod::Post, path, body, authenticated: true }
    }

    pub fn put(path: &'static str, body: Value) -> Self {
        Self { method: HttpMethod::Put, path, body: Some(body), authenticated: true }
    }

    /// Send without the `Authorization` header
    pub fn anonymous(mut self) -> Self {
        self.authenticated = false;
        self
    }
}

// ========================
// Client
// ========================

/// API client bound to one base URL and session token
#[derive(Debug, Clone, PartialEq)]
pub struct ApiClient {
    base_url: String,
    token: Option<String>,
    timeout_ms: u32,
}

impl ApiClient {
    pub fn new(config: &Config, session: &Session) -> Self {
        Self {
            base_url: config.api_url.clone(),
            token: session.token().map(str::to_string),
            timeout_ms: config.request_timeout_ms,
        }
    }

    pub fn url(&self, path: &str) -> String {
        join_url(&self.base_url, path)
    }

    /// Headers attached to `request`
    pub fn headers(&self, request: &ApiRequest) -> Vec<(&'static str, String)> {
        let mut headers = vec![("Accept", "application/json".to_string())];
        if request.body.is_some() {
            headers.push(("Content-Type", "application/json".to_string()));
        }
        if request.authenticated {
            if let Some(token) = &self.token {
                headers.push(("Authorization", token.clone()));
            }
        }
        headers
    }

    /// Send `request`, returning the raw body of a 2xx response
    pub async fn execute(&self, request: &ApiRequest) -> Result<String, ApiError> {
        let result = with_timeout(self.send(request), self.timeout_ms).await;
        if let Err(e) = &result {
            web_sys::console::error_1(
                &format!("[API] {} {} failed: {}", request.method, request.path, e).into(),
            );
        }
        result
    }

    async fn send(&self, request: &ApiRequest) -> Result<String, ApiError> {
        let url = self.url(request.path);
        web_sys::console::log_1(&format!("[API] {} {}", request.method, url).into());

        let mut builder = match request.method {
            HttpMethod::Get => Request::get(&url),
            HttpMethod::Post => Request::post(&url),
            HttpMethod::Put => Request::put(&url),
        };
        for (name, value) in self.headers(request) {
            builder = builder.header(name, &value);
        }

        let response = match &request.body {
            Some(body) => builder.body(serde_json::to_string(body)?)?.send().await?,
            None => builder.send().await?,
        };
        let status = response.status();
        let text = response.text().await?;
        check_status(status, text)
    }
}

async fn with_timeout<T>(
    request: impl Future<Output = Result<T, ApiError>>,
    timeout_ms: u32,
) -> Result<T, ApiError> {
    let request = Box::pin(request);
    let timer = Box::pin(TimeoutFuture::new(timeout_ms));
    match select(request, timer).await {
        Either::Left((result, _)) => result,
        Either::Right(_) => Err(ApiError::Timeout(timeout_ms)),
    }
}

// ========================
// Helpers
// ========================

/// Join base URL and path with exactly one slash
pub fn join_url(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}

pub fn check_status(status: u16, body: String) -> Result<String, ApiError> {
    if (200..=299).contains(&status) {
        Ok(body)
    } else {
        Err(ApiError::Status { status, body })
    }
}

/// Flatten an envelope `message` (string, list or anything else) to text
pub fn message_text(message: &Value) -> String {
    match message {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Array(parts) => parts.iter().map(message_text).collect::<Vec<_>>().join("; "),
        other => other.to_string(),
    }
}

/// Accept a write acknowledgment unless it is an explicit error envelope
pub fn decode_ack(body: &str) -> Result<(), ApiError> {
    let Ok(Value::Object(map)) = serde_json::from_str::<Value>(body) else {
        return Ok(());
    };
    match map.get("status").and_then(Value::as_str) {
        Some("error") => {
            let text = map.get("message").map(message_text).unwrap_or_default();
            Err(ApiError::Rejected(if text.is_empty() { body.to_string() } else { text }))
        }
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn client(token: Option<&str>) -> ApiClient {
        ApiClient {
            base_url: "https://api.example.com/prod/".to_string(),
            token: token.map(str::to_string),
            timeout_ms: 1000,
        }
    }

    #[test]
    fn test_join_url() {
        assert_eq!(join_url("https://x/prod/", "/checks"), "https://x/prod/checks");
        assert_eq!(join_url("https://x/prod", "settings"), "https://x/prod/settings");
        assert_eq!(join_url("/api", "/run"), "/api/run");
    }

    #[test]
    fn test_headers_with_token() {
        let c = client(Some("abc-123"));
        let headers = c.headers(&ApiRequest::put("/checks", json!({})));
        assert!(headers.contains(&("Authorization", "abc-123".to_string())));
        assert!(headers.contains(&("Content-Type", "application/json".to_string())));
        assert!(headers.contains(&("Accept", "application/json".to_string())));
    }

    #[test]
    fn test_headers_anonymous() {
        let c = client(Some("abc-123"));
        let headers = c.headers(&ApiRequest::post("/login", Some(json!({}))).anonymous());
        assert!(headers.iter().all(|(name, _)| *name != "Authorization"));
    }

    #[test]
    fn test_headers_without_token_or_body() {
        let headers = client(None).headers(&ApiRequest::get("/checks"));
        assert_eq!(headers, vec![("Accept", "application/json".to_string())]);
    }

    #[test]
    fn test_check_status() {
        assert_eq!(check_status(204, String::new()), Ok(String::new()));
        assert_eq!(
            check_status(500, "boom".into()),
            Err(ApiError::Status { status: 500, body: "boom".into() })
        );
    }

    #[test]
    fn test_message_text() {
        assert_eq!(message_text(&json!("done")), "done");
        assert_eq!(message_text(&json!(["a", "b"])), "a; b");
        assert_eq!(message_text(&Value::Null), "");
    }

    #[test]
    fn test_decode_ack() {
        assert!(decode_ack("").is_ok());
        assert!(decode_ack("not json").is_ok());
        assert!(decode_ack(r#"{"status":"success","message":"Update completed successfully"}"#).is_ok());
        assert_eq!(
            decode_ack(r#"{"status":"error","message":["bad id"]}"#),
            Err(ApiError::Rejected("bad id".into()))
        );
    }
}
