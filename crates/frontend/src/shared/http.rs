//! Authenticated HTTP plumbing shared by every domain API module.
//!
//! Wraps `gloo_net` requests so the bearer token and error normalization
//! live in one place. Domain modules never touch headers or status codes.

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::shared::api_utils::api_url;
use crate::system::auth::storage;

/// Normalized request failure carrying the backend-provided message when
/// one exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    pub status: Option<u16>,
    pub message: String,
}

impl ApiError {
    fn transport(err: impl std::fmt::Display) -> Self {
        Self {
            status: None,
            message: format!("Failed to send request: {}", err),
        }
    }

    fn parse(err: impl std::fmt::Display) -> Self {
        Self {
            status: None,
            message: format!("Failed to parse response: {}", err),
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl From<ApiError> for String {
    fn from(err: ApiError) -> Self {
        err.message
    }
}

/// Pulls the operator-facing message out of an error body: `{"error"}`
/// first, then `{"message"}`, then the raw text, then the bare status.
pub fn error_message(status: u16, body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<Value>(body) {
        for key in ["error", "message"] {
            if let Some(msg) = value.get(key).and_then(Value::as_str) {
                return msg.to_string();
            }
        }
    }
    let body = body.trim();
    if body.is_empty() {
        format!("HTTP {}", status)
    } else {
        body.to_string()
    }
}

fn with_auth(builder: RequestBuilder) -> RequestBuilder {
    match storage::get_token() {
        Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
        None => builder,
    }
}

async fn reject(response: Response) -> ApiError {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    if status == 401 {
        // Session expired: drop the token and land back on the login page.
        storage::clear_token();
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href("/");
        }
    }
    ApiError {
        status: Some(status),
        message: error_message(status, &body),
    }
}

pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let response = with_auth(Request::get(&api_url(path)))
        .send()
        .await
        .map_err(ApiError::transport)?;
    if !response.ok() {
        return Err(reject(response).await);
    }
    response.json::<T>().await.map_err(ApiError::parse)
}

/// GET for endpoints with duck-typed bodies (inventory rows, stat counters).
pub async fn get_value(path: &str) -> Result<Value, ApiError> {
    get_json(path).await
}

pub async fn post_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
) -> Result<T, ApiError> {
    let response = with_auth(Request::post(&api_url(path)))
        .json(body)
        .map_err(ApiError::parse)?
        .send()
        .await
        .map_err(ApiError::transport)?;
    if !response.ok() {
        return Err(reject(response).await);
    }
    response.json::<T>().await.map_err(ApiError::parse)
}

/// POST for endpoints that may answer with an empty body.
pub async fn post_value<B: Serialize>(path: &str, body: &B) -> Result<Value, ApiError> {
    let response = with_auth(Request::post(&api_url(path)))
        .json(body)
        .map_err(ApiError::parse)?
        .send()
        .await
        .map_err(ApiError::transport)?;
    if !response.ok() {
        return Err(reject(response).await);
    }
    let text = response.text().await.unwrap_or_default();
    Ok(serde_json::from_str(&text).unwrap_or(Value::Null))
}

pub async fn put_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
) -> Result<T, ApiError> {
    let response = with_auth(Request::put(&api_url(path)))
        .json(body)
        .map_err(ApiError::parse)?
        .send()
        .await
        .map_err(ApiError::transport)?;
    if !response.ok() {
        return Err(reject(response).await);
    }
    response.json::<T>().await.map_err(ApiError::parse)
}

/// PATCH where the caller refetches afterwards instead of reading the body.
pub async fn patch<B: Serialize>(path: &str, body: &B) -> Result<(), ApiError> {
    let response = with_auth(Request::patch(&api_url(path)))
        .json(body)
        .map_err(ApiError::parse)?
        .send()
        .await
        .map_err(ApiError::transport)?;
    if !response.ok() {
        return Err(reject(response).await);
    }
    Ok(())
}

pub async fn delete(path: &str) -> Result<(), ApiError> {
    let response = with_auth(Request::delete(&api_url(path)))
        .send()
        .await
        .map_err(ApiError::transport)?;
    if !response.ok() {
        return Err(reject(response).await);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_message_prefers_error_key() {
        assert_eq!(
            error_message(409, r#"{"error": "UNIQUE constraint failed: customers.email"}"#),
            "UNIQUE constraint failed: customers.email"
        );
        assert_eq!(error_message(500, r#"{"message": "boom"}"#), "boom");
    }

    #[test]
    fn test_error_message_falls_back_to_body_then_status() {
        assert_eq!(error_message(502, "bad gateway"), "bad gateway");
        assert_eq!(error_message(502, "   "), "HTTP 502");
    }
}
