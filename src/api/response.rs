use serde_json::Value;
use tracing::error;

use crate::models::{ChatConfig, PromptResponse};

const DEFAULT_ERROR_MESSAGE: &str = "The request was invalid.";

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Unexpected response format: {0}")]
    UnexpectedFormat(String),

    #[error("Invalid JSON in response: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("Response is missing {0}")]
    MissingField(&'static str),

    #[error("{title}: {message}")]
    Status { status: u16, title: String, message: String },
}

/// Decode the prompt endpoint's HTTP response
///
/// The endpoint wraps its payload as `{"data": {"body": "<json text>"}}`. Non-2xx
/// responses become [`ApiError::Status`] with a title and message suitable for
/// an error dialog.
pub fn interpret_prompt_response(
    status: u16,
    status_text: &str,
    content_type: Option<&str>,
    body: &str,
) -> Result<PromptResponse, ApiError> {
    if !content_type.is_some_and(|ct| ct.contains("application/json")) {
        return Err(ApiError::UnexpectedFormat(body.to_string()));
    }

    let envelope: Value = serde_json::from_str(body)?;
    let inner = envelope.get("data").and_then(|data| data.get("body"));

    if (200..300).contains(&status) {
        let inner = inner.ok_or(ApiError::MissingField("data.body"))?;
        return Ok(match inner {
            Value::String(text) => serde_json::from_str(text)?,
            other => serde_json::from_value(other.clone())?,
        });
    }

    let message = Some(status_text)
        .filter(|text| !text.is_empty())
        .map(str::to_string)
        .or_else(|| inner.and_then(body_message))
        .unwrap_or_else(|| DEFAULT_ERROR_MESSAGE.to_string());
    let title = format!("Error {}", status);
    error!("interpret_prompt_response() {}: {}", title, message);

    Err(ApiError::Status { status, title, message })
}

/// Decode the config endpoint's response body (`{"data": {...}}`)
pub fn parse_config_response(body: &str) -> Result<ChatConfig, ApiError> {
    let mut envelope: Value = serde_json::from_str(body)?;
    let data = envelope
        .get_mut("data")
        .map(Value::take)
        .filter(Value::is_object)
        .ok_or(ApiError::MissingField("data"))?;
    Ok(serde_json::from_value(data)?)
}

fn body_message(body: &Value) -> Option<String> {
    let message = match body {
        Value::String(text) => serde_json::from_str::<Value>(text).ok()?.get("message").cloned(),
        other => other.get("message").cloned(),
    };
    message.and_then(|m| m.as_str().map(str::to_string)).filter(|m| !m.is_empty())
}
