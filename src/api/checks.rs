//! Check Item Endpoints
//!
//! `GET /checks` lists items, `PUT /checks` toggles them.

use serde::Deserialize;
use serde_json::json;

use super::{decode_ack, ApiClient, ApiError, ApiRequest};
use crate::models::{CheckId, CheckItem};

#[derive(Deserialize)]
struct ChecksResponse {
    message: Vec<CheckItem>,
}

pub fn list_checks_request() -> ApiRequest {
    ApiRequest::get("/checks")
}

pub fn decode_checks(body: &str) -> Result<Vec<CheckItem>, ApiError> {
    let response: ChecksResponse = serde_json::from_str(body)?;
    Ok(response.message)
}

/// Single-item toggle: `{checks: [{id, enabled}]}`
pub fn toggle_request(id: &CheckId, enabled: bool) -> ApiRequest {
    ApiRequest::put("/checks", json!({ "checks": [{ "id": id, "enabled": enabled }] }))
}

pub async fn list_checks(client: &ApiClient) -> Result<Vec<CheckItem>, ApiError> {
    let body = client.execute(&list_checks_request()).await?;
    decode_checks(&body)
}

pub async fn toggle_check(client: &ApiClient, id: &CheckId, enabled: bool) -> Result<(), ApiError> {
    let body = client.execute(&toggle_request(id, enabled)).await?;
    decode_ack(&body)
}
