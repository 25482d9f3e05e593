//! Settings Endpoints
//!
//! `GET /settings` has been served both as a JSON object and as a
//! JSON-encoded string; both are normalized to `Settings` here.

use serde_json::{Map, Value};

use super::{decode_ack, ApiClient, ApiError, ApiRequest};
use crate::models::Settings;

/// Alert shown when an update is attempted with an empty input
pub const EMPTY_VALUE_ALERT: &str = "Please enter a value before updating.";

pub fn settings_request() -> ApiRequest {
    ApiRequest::get("/settings")
}

/// Decode a settings reply of any known shape
pub fn normalize_settings(body: &str) -> Result<Settings, ApiError> {
    let value: Value = serde_json::from_str(body)?;
    Ok(serde_json::from_value(unwrap_settings(value, 0)?)?)
}

fn unwrap_settings(value: Value, depth: u8) -> Result<Value, ApiError> {
    if depth > 2 {
        return Err(ApiError::Decode("settings nested too deeply".to_string()));
    }
    match value {
        Value::String(encoded) => unwrap_settings(serde_json::from_str(&encoded)?, depth + 1),
        Value::Object(mut map) if is_envelope(&map) => {
            if map.get("status").and_then(Value::as_str) == Some("error") {
                let text = map.get("message").map(super::message_text).unwrap_or_default();
                return Err(ApiError::Rejected(text));
            }
            let message = map.remove("message").unwrap_or(Value::Null);
            unwrap_settings(message, depth + 1)
        }
        Value::Object(map) => Ok(Value::Object(map)),
        other => Err(ApiError::Decode(format!("unexpected settings payload: {}", other))),
    }
}

/// `{status, message}` with nothing else that looks like a settings field
fn is_envelope(map: &Map<String, Value>) -> bool {
    map.contains_key("status")
        && map.contains_key("message")
        && !map.contains_key("subscriber")
        && !map.contains_key("schedule")
}

/// Build `{[field]: value}`; empty values are refused before any request
pub fn field_update_request(field: &str, value: &str) -> Result<ApiRequest, String> {
    if value.is_empty() {
        return Err(EMPTY_VALUE_ALERT.to_string());
    }
    let mut body = Map::new();
    body.insert(field.to_string(), Value::String(value.to_string()));
    Ok(ApiRequest::put("/settings", Value::Object(body)))
}

pub async fn get_settings(client: &ApiClient) -> Result<Settings, ApiError> {
    let body = client.execute(&settings_request()).await?;
    normalize_settings(&body)
}

pub async fn send_field_update(client: &ApiClient, request: &ApiRequest) -> Result<(), ApiError> {
    let body = client.execute(request).await?;
    decode_ack(&body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Frequency, Schedule};
    use serde_json::json;

    const OBJECT_BODY: &str =
        r#"{"id":"1b4e","subscriber":"ops@example.com","schedule":{"frequency":"weekly","hour":6,"minute":30}}"#;

    #[test]
    fn test_normalize_object() {
        let settings = normalize_settings(OBJECT_BODY).unwrap();
        assert_eq!(settings.subscriber.as_deref(), Some("ops@example.com"));
        assert_eq!(
            settings.schedule(),
            Some(Schedule { frequency: Frequency::Weekly, hour: 6, minute: 30 })
        );
    }

    #[test]
    fn test_normalize_encoded_string_matches_object() {
        let encoded = serde_json::to_string(OBJECT_BODY).unwrap();
        assert_eq!(normalize_settings(&encoded).unwrap(), normalize_settings(OBJECT_BODY).unwrap());
    }

    #[test]
    fn test_normalize_envelope() {
        let body = json!({"status": "success", "message": OBJECT_BODY}).to_string();
        let settings = normalize_settings(&body).unwrap();
        assert_eq!(settings.subscriber.as_deref(), Some("ops@example.com"));
    }

    #[test]
    fn test_normalize_error_envelope() {
        let body = r#"{"status":"error","message":"Settings not found"}"#;
        assert_eq!(normalize_settings(body), Err(ApiError::Rejected("Settings not found".into())));
    }

    #[test]
    fn test_normalize_capitalized_frequency() {
        let body = r#"{"subscriber":"ops@example.com","schedule":{"frequency":"Daily","hour":"08","minute":0}}"#;
        let settings = normalize_settings(body).unwrap();
        assert_eq!(
            settings.schedule(),
            Some(Schedule { frequency: Frequency::Daily, hour: 8, minute: 0 })
        );
    }

    #[test]
    fn test_normalize_unknown_frequency_keeps_settings() {
        let body = json!({
            "status": "success",
            "message": r#"{"subscriber":"ops@example.com","password":"x","schedule":{"frequency":"monthly"}}"#
        })
        .to_string();
        let settings = normalize_settings(&body).unwrap();
        assert_eq!(settings.subscriber.as_deref(), Some("ops@example.com"));
        assert!(settings.has_password());
        assert_eq!(settings.schedule(), None);
    }

    #[test]
    fn test_normalize_rejects_scalars() {
        assert!(matches!(normalize_settings("42"), Err(ApiError::Decode(_))));
    }

    #[test]
    fn test_empty_field_refused() {
        assert_eq!(field_update_request("subscriber", ""), Err(EMPTY_VALUE_ALERT.to_string()));
    }

    #[test]
    fn test_field_update_body() {
        let req = field_update_request("sender", "alerts@example.com").unwrap();
        assert_eq!(req.path, "/settings");
        assert_eq!(req.body, Some(json!({"sender": "alerts@example.com"})));
    }
}
