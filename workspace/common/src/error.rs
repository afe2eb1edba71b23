use serde::Deserialize;
use thiserror::Error;

/// Failure of a single REST call, whatever the cause.
///
/// Network errors, non-success HTTP statuses and undecodable bodies all
/// collapse into `RequestFailed`; callers never need to tell them apart.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    #[error("{0}")]
    RequestFailed(String),
}

pub type ApiResult<T> = Result<T, ApiError>;

/// Error body returned by the backend, e.g. `{"error": "Invalid site"}`.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ErrorBody {
    pub error: Option<String>,
}

impl ApiError {
    /// Builds the error for a non-success response.
    ///
    /// Uses the body's `error` field when the body is JSON and carries one,
    /// otherwise falls back to `HTTP {status}: {status_text}`.
    pub fn from_status(status: u16, status_text: &str, body: Option<&str>) -> Self {
        let from_body = body
            .and_then(|text| serde_json::from_str::<ErrorBody>(text).ok())
            .and_then(|parsed| parsed.error)
            .filter(|message| !message.trim().is_empty());

        match from_body {
            Some(message) => Self::RequestFailed(message),
            None => Self::RequestFailed(format!("HTTP {}: {}", status, status_text)),
        }
    }

    pub fn network(cause: impl std::fmt::Display) -> Self {
        Self::RequestFailed(format!("Request failed: {}", cause))
    }

    pub fn decode(cause: impl std::fmt::Display) -> Self {
        Self::RequestFailed(format!("Failed to parse response: {}", cause))
    }

    pub fn encode(cause: impl std::fmt::Display) -> Self {
        Self::RequestFailed(format!("Failed to serialize request: {}", cause))
    }

    pub fn message(&self) -> &str {
        match self {
            Self::RequestFailed(message) => message,
        }
    }

    /// Text shown to the user in the error notification.
    pub fn notification_text(&self) -> String {
        format!("API Error: {}", self.message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_status_prefers_error_field() {
        let err = ApiError::from_status(400, "Bad Request", Some(r#"{"error": "Invalid site"}"#));
        assert_eq!(err, ApiError::RequestFailed("Invalid site".to_string()));
        assert_eq!(err.notification_text(), "API Error: Invalid site");
    }

    #[test]
    fn test_from_status_falls_back_to_status_line() {
        let err = ApiError::from_status(502, "Bad Gateway", Some("<html>upstream down</html>"));
        assert_eq!(err.message(), "HTTP 502: Bad Gateway");

        let err = ApiError::from_status(404, "NOT FOUND", Some(r#"{"message": "gone"}"#));
        assert_eq!(err.message(), "HTTP 404: NOT FOUND");

        let err = ApiError::from_status(500, "Internal Server Error", None);
        assert_eq!(err.to_string(), "HTTP 500: Internal Server Error");
    }

    #[test]
    fn test_network_failure_message() {
        let err = ApiError::network("connection refused");
        assert_eq!(err.message(), "Request failed: connection refused");
    }
}
