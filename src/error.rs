//! Unified SDK error types.

use serde_json::Value;
use std::fmt;
use thiserror::Error;

/// Top-level SDK error.
#[derive(Error, Debug)]
pub enum SdkError {
    #[error("HTTP error: {0}")]
    Http(#[from] HttpError),

    #[error("Auth error: {0}")]
    Auth(#[from] AuthError),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Cancelled")]
    Cancelled,
}

impl SdkError {
    /// The structured rejection kind, if the backend answered with one.
    pub fn rejection(&self) -> Option<&ApiErrorKind> {
        match self {
            SdkError::Auth(AuthError::Rejected { kind, .. }) => Some(kind),
            _ => None,
        }
    }
}

/// HTTP-layer errors.
#[derive(Error, Debug)]
pub enum HttpError {
    #[cfg(feature = "http")]
    #[error("Request failed: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Server error {status}: {body}")]
    ServerError { status: u16, body: String },

    #[error("Rate limited (retry after {retry_after_ms:?}ms)")]
    RateLimited { retry_after_ms: Option<u64> },

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Timeout")]
    Timeout,

    #[error("Max retries exceeded after {attempts} attempts: {last_error}")]
    MaxRetriesExceeded { attempts: u32, last_error: String },
}

impl HttpError {
    /// Whether the failure says nothing about the session itself
    /// (transport trouble or a 5xx), as opposed to an auth/4xx answer.
    pub fn is_transient(&self) -> bool {
        match self {
            #[cfg(feature = "http")]
            HttpError::Reqwest(e) => !e.is_decode() && !e.is_status(),
            HttpError::ServerError { .. }
            | HttpError::RateLimited { .. }
            | HttpError::Timeout
            | HttpError::MaxRetriesExceeded { .. } => true,
            HttpError::Unauthorized | HttpError::NotFound(_) | HttpError::BadRequest(_) => false,
        }
    }
}

/// Authentication errors.
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Not authenticated")]
    NotAuthenticated,

    #[error("Rejected ({kind}): {detail}")]
    Rejected { kind: ApiErrorKind, detail: String },

    #[error("Unexpected reply: {0}")]
    UnexpectedReply(String),
}

impl AuthError {
    /// Build a rejection from the backend's `{"error": ..., "details": ...}` pair.
    pub(crate) fn rejected(error: &str, details: Option<&Value>) -> Self {
        let detail = match details {
            Some(Value::Null) | None => error.to_string(),
            Some(d) => format!("{error}: {d}"),
        };
        AuthError::Rejected {
            kind: ApiErrorKind::from_message(error),
            detail,
        }
    }
}

/// Failure kinds the backend reports in the `error` field of a reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiErrorKind {
    Validation,
    InvalidCredentials,
    EmailTaken,
    UsernameTaken,
    UserNotFound,
    Other(String),
}

impl ApiErrorKind {
    pub fn from_message(message: &str) -> Self {
        match message {
            "Validation failed" => ApiErrorKind::Validation,
            "Invalid email or password" => ApiErrorKind::InvalidCredentials,
            "User with this email already exists" => ApiErrorKind::EmailTaken,
            "Username already taken" => ApiErrorKind::UsernameTaken,
            "User not found" => ApiErrorKind::UserNotFound,
            other => ApiErrorKind::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            ApiErrorKind::Validation => "validation",
            ApiErrorKind::InvalidCredentials => "invalid_credentials",
            ApiErrorKind::EmailTaken => "email_taken",
            ApiErrorKind::UsernameTaken => "username_taken",
            ApiErrorKind::UserNotFound => "user_not_found",
            ApiErrorKind::Other(_) => "other",
        }
    }
}

impl fmt::Display for ApiErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_api_error_kind_from_backend_messages() {
        assert_eq!(
            ApiErrorKind::from_message("Invalid email or password"),
            ApiErrorKind::InvalidCredentials
        );
        assert_eq!(
            ApiErrorKind::from_message("Username already taken"),
            ApiErrorKind::UsernameTaken
        );
        assert_eq!(
            ApiErrorKind::from_message("Database is on fire"),
            ApiErrorKind::Other("Database is on fire".to_string())
        );
    }

    #[test]
    fn test_rejected_includes_details() {
        let details = json!({"email": [{"code": "email"}]});
        let err = AuthError::rejected("Validation failed", Some(&details));
        match err {
            AuthError::Rejected { kind, detail } => {
                assert_eq!(kind, ApiErrorKind::Validation);
                assert!(detail.starts_with("Validation failed: "));
                assert!(detail.contains("email"));
            }
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn test_rejection_accessor() {
        let err: SdkError = AuthError::rejected("User not found", None).into();
        assert_eq!(err.rejection(), Some(&ApiErrorKind::UserNotFound));
        assert!(SdkError::Cancelled.rejection().is_none());
    }

    #[test]
    fn test_sdk_error_messages() {
        let errors = [
            SdkError::Http(HttpError::Timeout),
            SdkError::Auth(AuthError::NotAuthenticated),
            SdkError::Validation("bad amount".to_string()),
            SdkError::Cancelled,
        ];
        for err in &errors {
            let expected = match err {
                SdkError::Http(_) => "HTTP error: Timeout",
                SdkError::Auth(_) => "Auth error: Not authenticated",
                SdkError::Validation(_) => "Validation error: bad amount",
                SdkError::Cancelled => "Cancelled",
            };
            assert_eq!(err.to_string(), expected);
        }
    }

    #[test]
    fn test_transient_classification() {
        assert!(HttpError::Timeout.is_transient());
        assert!(HttpError::ServerError {
            status: 503,
            body: String::new()
        }
        .is_transient());
        assert!(!HttpError::Unauthorized.is_transient());
        assert!(!HttpError::BadRequest("nope".into()).is_transient());
    }
}
