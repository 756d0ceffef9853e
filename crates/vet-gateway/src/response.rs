//! Status mapping and body decoding for backend responses.
//!
//! 2xx passes through, 404 on a record path becomes
//! [`ReviewError::NotFound`], anything else is a [`ReviewError::Network`].

use serde::de::DeserializeOwned;
use vet_core::enums::RecordKind;
use vet_core::errors::ReviewError;
use vet_core::ids::RecordId;

use crate::transport::ApiResponse;

/// Map a raw response to its body, or to the matching review error.
///
/// `target` is the record the request addressed, if any. A 404 without a
/// target means the collection route itself is missing, which is a network
/// failure rather than an unknown record.
pub fn check_response(
    operation: &str,
    kind: RecordKind,
    target: Option<&RecordId>,
    response: ApiResponse,
) -> Result<String, ReviewError> {
    if response.is_success() {
        return Ok(response.body);
    }
    if response.status == 404 {
        if let Some(id) = target {
            return Err(ReviewError::NotFound {
                kind,
                id: id.clone(),
            });
        }
    }
    Err(ReviewError::Network {
        operation: operation.to_string(),
        status: Some(response.status),
        message: error_message(response.status, &response.body),
    })
}

/// Decode a success body, treating malformed JSON as a network failure.
pub fn decode<T: DeserializeOwned>(operation: &str, body: &str) -> Result<T, ReviewError> {
    serde_json::from_str(body)
        .map_err(|e| ReviewError::network(operation, format!("invalid response body: {e}")))
}

/// Pull a readable message out of an error body.
///
/// Accepts `{"error": ".."}` or `{"message": ".."}`, falls back to the raw
/// text, then to the bare status code.
fn error_message(status: u16, body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        for key in ["error", "message"] {
            if let Some(text) = value.get(key).and_then(serde_json::Value::as_str) {
                return format!("HTTP {status}: {text}");
            }
        }
    }
    let trimmed = body.trim();
    if trimmed.is_empty() {
        format!("HTTP {status}")
    } else {
        format!("HTTP {status}: {trimmed}")
    }
}
