//! Error types for the Property Validation API client.
//!
//! Every fallible operation in this crate returns [`Result`]. The variants
//! split into three families: failures talking to the service
//! ([`Error::Http`], [`Error::Api`], [`Error::NotFound`],
//! [`Error::Unauthorized`]), responses that do not have the expected shape
//! ([`Error::Protocol`]), and problems detected locally before anything is
//! sent ([`Error::AuthenticationRequired`], [`Error::InvalidInput`],
//! [`Error::Config`]).

use serde_json::Value;
use thiserror::Error;

/// A specialized `Result` type for Property Validation operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for all Property Validation API operations.
#[derive(Error, Debug)]
pub enum Error {
    /// HTTP request failed before a response was received
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// API returned a non-success status
    #[error("API error: status={status}, code={code:?}, message={message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Optional error code from the API
        code: Option<String>,
        /// Human-readable error message
        message: String,
        /// Raw response body for debugging
        body: Value,
    },

    /// The service rejected the credential (401)
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Resource not found (404)
    #[error("Not found: {0}")]
    NotFound(String),

    /// Neither an access token nor an access token callback was supplied
    #[error("Access token or callback is required")]
    AuthenticationRequired,

    /// A successful response did not match the expected shape
    #[error("Protocol error: {0}")]
    Protocol(String),

    /// Invalid input provided to a function
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// URL parsing error
    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),
}

impl Error {
    /// Returns `true` if the error came from the transport: the request
    /// failed on the wire or the service answered with a non-success status.
    pub fn is_transport_error(&self) -> bool {
        matches!(
            self,
            Error::Http(_) | Error::Api { .. } | Error::NotFound(_) | Error::Unauthorized(_)
        )
    }

    /// Returns `true` if this is an authentication-related error.
    pub fn is_auth_error(&self) -> bool {
        matches!(self, Error::AuthenticationRequired | Error::Unauthorized(_))
    }

    /// Returns `true` if this error indicates a client-side issue
    /// (invalid input, bad request, etc.).
    pub fn is_client_error(&self) -> bool {
        match self {
            Error::Api { status, .. } => *status >= 400 && *status < 500,
            Error::NotFound(_)
            | Error::Unauthorized(_)
            | Error::AuthenticationRequired
            | Error::InvalidInput(_)
            | Error::Config(_) => true,
            _ => false,
        }
    }

    /// Returns `true` if this error indicates a server-side issue.
    pub fn is_server_error(&self) -> bool {
        match self {
            Error::Api { status, .. } => *status >= 500,
            _ => false,
        }
    }

    /// Create an API error from a response body of the form
    /// `{ "error": { "code": ..., "message": ... } }`.
    pub(crate) fn from_api_response(status: u16, body: Value) -> Self {
        let code = body
            .get("error")
            .and_then(|e| e.get("code"))
            .and_then(|c| c.as_str())
            .map(String::from);

        let message = api_message(&body).unwrap_or("Unknown API error").to_string();

        Error::Api {
            status,
            code,
            message,
            body,
        }
    }
}

/// Extract `error.message` from an API error body.
pub(crate) fn api_message(body: &Value) -> Option<&str> {
    body.get("error")
        .and_then(|e| e.get("message"))
        .and_then(|m| m.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_auth() {
        assert!(Error::AuthenticationRequired.is_auth_error());
        assert!(Error::Unauthorized("expired".into()).is_auth_error());
        assert!(!Error::Protocol("bad".into()).is_auth_error());
    }

    #[test]
    fn test_transport_classification() {
        assert!(Error::NotFound("rule".into()).is_transport_error());
        assert!(Error::from_api_response(503, Value::Null).is_transport_error());
        assert!(!Error::AuthenticationRequired.is_transport_error());
        assert!(!Error::Protocol("missing _links".into()).is_transport_error());
    }

    #[test]
    fn test_client_and_server_errors() {
        assert!(Error::from_api_response(422, Value::Null).is_client_error());
        assert!(Error::from_api_response(500, Value::Null).is_server_error());
        assert!(!Error::from_api_response(500, Value::Null).is_client_error());
        assert!(Error::InvalidInput("empty id".into()).is_client_error());
    }

    #[test]
    fn test_from_api_response() {
        let body = serde_json::json!({
            "error": {
                "code": "InvalidPropertyValidationRequest",
                "message": "Rule display name is required."
            }
        });

        let err = Error::from_api_response(400, body);
        match err {
            Error::Api {
                status,
                code,
                message,
                ..
            } => {
                assert_eq!(status, 400);
                assert_eq!(code, Some("InvalidPropertyValidationRequest".to_string()));
                assert_eq!(message, "Rule display name is required.");
            }
            _ => panic!("Expected Api error"),
        }
    }

    #[test]
    fn test_from_api_response_without_error_object() {
        let err = Error::from_api_response(502, serde_json::json!("Bad Gateway"));
        match err {
            Error::Api { code, message, .. } => {
                assert_eq!(code, None);
                assert_eq!(message, "Unknown API error");
            }
            _ => panic!("Expected Api error"),
        }
    }
}
