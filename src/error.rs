use http::StatusCode;
use log::warn;
use serde::de::IgnoredAny;
use thiserror::Error;

use crate::models::{Envelope, FieldErrors};

/// Error types for the Robin API client.
#[derive(Error, Debug)]
pub enum RobinError {
    /// The API answered with a non-success status and a well-formed envelope.
    ///
    /// `details` maps field names to the problems the server found with them,
    /// e.g. `"email" => ["has already been taken"]`.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status of the response. Not necessarily equal to `meta.status_code`.
        status: StatusCode,
        message: String,
        details: FieldErrors,
    },

    /// The response body did not have the expected shape.
    #[error("Malformed response ({status}): {reason}")]
    MalformedResponse {
        status: StatusCode,
        reason: String,
        /// Raw body as received, for diagnostics.
        body: String,
    },

    /// The request did not produce a response: connection failure, timeout or
    /// an interrupted body.
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Invalid client configuration.
    #[error("Invalid configuration: {0}")]
    Configuration(String),

    /// The API endpoint/path could not be built.
    #[error("Invalid endpoint: {0}")]
    InvalidEndpoint(String),

    /// A request body could not be serialized.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for Robin API operations.
pub type RobinResult<T> = Result<T, RobinError>;

impl RobinError {
    /// Translates a non-success response into an error.
    ///
    /// The body is read as an envelope and its `meta` block supplies the message
    /// and field details. Bodies that are not envelopes, including JSON objects
    /// without `meta`, become [`RobinError::MalformedResponse`] with the raw
    /// body kept.
    pub fn from_response(status: StatusCode, body: &str) -> Self {
        match serde_json::from_str::<Envelope<IgnoredAny>>(body) {
            Ok(envelope) => RobinError::Api {
                status,
                message: envelope.meta.message,
                details: envelope.meta.more_info,
            },
            Err(e) => {
                warn!("unparseable error body for status {status}: {e}");
                RobinError::MalformedResponse {
                    status,
                    reason: format!("error body is not an API envelope: {e}"),
                    body: body.to_string(),
                }
            }
        }
    }

    /// HTTP status of the response, if one was received.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            RobinError::Api { status, .. } | RobinError::MalformedResponse { status, .. } => {
                Some(*status)
            }
            RobinError::Transport(e) => e.status(),
            _ => None,
        }
    }

    /// Field-level validation details. `None` for anything but [`RobinError::Api`].
    pub fn details(&self) -> Option<&FieldErrors> {
        match self {
            RobinError::Api { details, .. } => Some(details),
            _ => None,
        }
    }

    /// Problems reported for one field.
    pub fn field_errors(&self, field: &str) -> &[String] {
        self.details()
            .and_then(|details| details.get(field))
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// True when no response was received.
    pub fn is_transport(&self) -> bool {
        matches!(self, RobinError::Transport(_))
    }

    /// True for 404 responses.
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(StatusCode::NOT_FOUND)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn test_translates_validation_envelope() {
        let body = json!({
            "meta": {
                "status_code": 422,
                "status": "error",
                "message": "Invalid",
                "more_info": { "name": ["is required"], "email": ["is invalid", "is taken"] }
            }
        })
        .to_string();

        let err = RobinError::from_response(StatusCode::UNPROCESSABLE_ENTITY, &body);

        match &err {
            RobinError::Api { status, message, details } => {
                assert_eq!(*status, StatusCode::UNPROCESSABLE_ENTITY);
                assert_eq!(message, "Invalid");
                assert_eq!(details.len(), 2);
                assert_eq!(details["name"], vec!["is required"]);
                assert_eq!(details["email"], vec!["is invalid", "is taken"]);
            }
            other => panic!("expected Api error, got {other:?}"),
        }
        assert_eq!(err.field_errors("email"), ["is invalid", "is taken"]);
        assert!(err.field_errors("phone").is_empty());
        assert_eq!(err.to_string(), "API error (422 Unprocessable Entity): Invalid");
    }

    #[test]
    fn test_http_status_wins_over_meta_status() {
        let body = r#"{"meta":{"status_code":400,"message":"Nope"},"data":null}"#;
        let err = RobinError::from_response(StatusCode::FORBIDDEN, body);

        assert_eq!(err.status(), Some(StatusCode::FORBIDDEN));
        assert!(err.details().unwrap().is_empty());
    }

    #[test]
    fn test_non_envelope_body_is_malformed() {
        for body in ["<html>Bad Gateway</html>", "", "[1,2,3]", r#"{"meta":"broken"}"#] {
            let err = RobinError::from_response(StatusCode::BAD_GATEWAY, body);
            match err {
                RobinError::MalformedResponse { status, body: raw, .. } => {
                    assert_eq!(status, StatusCode::BAD_GATEWAY);
                    assert_eq!(raw, body);
                }
                other => panic!("expected MalformedResponse for {body:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_json_without_meta_is_malformed() {
        for body in ["{}", r#"{"error":"upstream timed out"}"#] {
            match RobinError::from_response(StatusCode::SERVICE_UNAVAILABLE, body) {
                RobinError::MalformedResponse { status, body: raw, reason } => {
                    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
                    assert_eq!(raw, body);
                    assert!(reason.contains("meta"), "{reason}");
                }
                other => panic!("expected MalformedResponse for {body:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_not_found_helper() {
        let body = r#"{"meta":{"message":"Not found"}}"#;
        let err = RobinError::from_response(StatusCode::NOT_FOUND, body);
        assert!(err.is_not_found());
        assert!(!err.is_transport());
    }
}
