//! Transport-level error types.
//!
//! Every failure raised by [`ApiClient`](crate::clients::ApiClient) is an
//! [`ApiError`]. Two kinds are distinguished by the status code:
//!
//! - **HTTP errors**: the server responded with a non-2xx status. The error
//!   carries the real status code and, when the body was a JSON object, the
//!   parsed error payload in [`ApiError::data`].
//! - **Network errors**: no response was obtained at all (timeout, connection
//!   refused, DNS failure). The status code is the sentinel `0` and the
//!   message describes the underlying transport failure.
//!
//! # Example
//!
//! ```rust,ignore
//! match client.get(&path, None).await {
//!     Ok(body) => println!("ok: {body}"),
//!     Err(e) if e.is_network() => println!("no response: {e}"),
//!     Err(e) => println!("server said {}: {}", e.status_code, e),
//! }
//! ```

use reqwest::StatusCode;
use serde_json::{Map, Value};
use thiserror::Error;

/// Error returned when a request fails at the transport boundary.
///
/// The `Display` implementation renders only the message; callers branch on
/// [`ApiError::status_code`] (or [`ApiError::is_network`]) to distinguish
/// server errors from transport failures.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct ApiError {
    /// Human-readable description. For HTTP errors this is the body's
    /// `message` field when present, otherwise the HTTP reason phrase.
    pub message: String,
    /// The HTTP status code, or `0` when no response was received.
    pub status_code: u16,
    /// Structured error payload from the response body, when it parsed as a
    /// JSON object. Empty otherwise.
    pub data: Map<String, Value>,
}

impl ApiError {
    /// Builds an error from a non-success HTTP response.
    ///
    /// The body is parsed as JSON: an object body supplies `data` and its
    /// `message` field (when a string) becomes the error message. Anything
    /// else yields an empty `data` map and the reason-phrase message.
    pub(crate) fn from_response(status: StatusCode, body: &str) -> Self {
        match serde_json::from_str::<Value>(body) {
            Ok(Value::Object(data)) => {
                let message = data
                    .get("message")
                    .and_then(Value::as_str)
                    .map_or_else(|| reason_phrase(status), ToString::to_string);
                Self {
                    message,
                    status_code: status.as_u16(),
                    data,
                }
            }
            _ => Self {
                message: reason_phrase(status),
                status_code: status.as_u16(),
                data: Map::new(),
            },
        }
    }

    /// Builds an error for a request that never produced a response.
    pub(crate) fn transport(err: &reqwest::Error) -> Self {
        Self {
            message: format!("network request failed: {err}"),
            status_code: 0,
            data: Map::new(),
        }
    }

    /// Builds an error for a 2xx response whose body did not have the shape
    /// the operation requires (e.g. a list response missing `total`).
    pub(crate) fn invalid_body(detail: &str) -> Self {
        Self {
            message: format!("unexpected response body: {detail}"),
            status_code: 0,
            data: Map::new(),
        }
    }

    /// Returns `true` when no HTTP response was obtained (status sentinel `0`).
    #[must_use]
    pub const fn is_network(&self) -> bool {
        self.status_code == 0
    }
}

/// Returns a non-empty description for a status code.
fn reason_phrase(status: StatusCode) -> String {
    status
        .canonical_reason()
        .map_or_else(|| format!("HTTP status {}", status.as_u16()), ToString::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_response_uses_message_field() {
        let err = ApiError::from_response(
            StatusCode::NOT_FOUND,
            r#"{"message":"record not found","code":"RECORD_MISSING"}"#,
        );
        assert_eq!(err.message, "record not found");
        assert_eq!(err.status_code, 404);
        assert_eq!(
            err.data.get("code").and_then(Value::as_str),
            Some("RECORD_MISSING")
        );
    }

    #[test]
    fn test_from_response_falls_back_to_reason_phrase() {
        let err = ApiError::from_response(StatusCode::BAD_REQUEST, r#"{"detail":"oops"}"#);
        assert_eq!(err.message, "Bad Request");
        assert_eq!(err.status_code, 400);
        assert!(err.data.contains_key("detail"));
    }

    #[test]
    fn test_from_response_with_non_json_body() {
        let err = ApiError::from_response(StatusCode::BAD_GATEWAY, "<html>bad gateway</html>");
        assert_eq!(err.status_code, 502);
        assert!(!err.message.is_empty());
        assert!(err.data.is_empty());
    }

    #[test]
    fn test_from_response_with_non_object_json_body() {
        let err = ApiError::from_response(StatusCode::UNPROCESSABLE_ENTITY, r#"["a","b"]"#);
        assert_eq!(err.status_code, 422);
        assert!(err.data.is_empty());
        assert!(!err.message.is_empty());
    }

    #[test]
    fn test_network_error_uses_zero_sentinel() {
        let err = ApiError::invalid_body("missing total");
        assert!(err.is_network());

        let http = ApiError::from_response(StatusCode::INTERNAL_SERVER_ERROR, "");
        assert!(!http.is_network());
    }

    #[test]
    fn test_display_renders_message_only() {
        let err = ApiError::from_response(StatusCode::FORBIDDEN, r#"{"message":"denied"}"#);
        assert_eq!(err.to_string(), "denied");
    }
}
