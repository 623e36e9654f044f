//! Typed order submission failures
//!
//! Every way the order backend can fail is mapped onto one of four variants
//! so the checkout screen can tell the customer what went wrong and whether
//! retrying makes sense.

use thiserror::Error;

/// Longest backend message kept for display
const MAX_MESSAGE_LEN: usize = 200;

/// Why an order submission did not succeed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    /// The request never got a response (DNS, refused connection, reset, TLS)
    #[error("Could not reach the order service: {message}")]
    Network { message: String },

    /// The backend refused the order (HTTP 4xx)
    #[error("Order was rejected ({status}): {message}")]
    Rejected { status: u16, message: String },

    /// The backend failed while handling the order (HTTP 5xx and anything else non-2xx)
    #[error("Order service error ({status}): {message}")]
    Server { status: u16, message: String },

    /// A 2xx response whose body could not be understood
    #[error("Unexpected response from the order service: {message}")]
    InvalidResponse { message: String },
}

impl SubmitError {
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    pub fn invalid_response(message: impl Into<String>) -> Self {
        Self::InvalidResponse {
            message: message.into(),
        }
    }

    /// Classify a non-2xx response.
    ///
    /// The message is the body's `message` or `error` string when the body is
    /// JSON, otherwise the body text, otherwise the status reason phrase.
    pub fn from_status(status: u16, body: &str) -> Self {
        let message = extract_message(status, body);
        if (400..500).contains(&status) {
            Self::Rejected { status, message }
        } else {
            Self::Server { status, message }
        }
    }

    /// Whether sending the same payload again might succeed
    pub fn is_retryable(&self) -> bool {
        matches!(self, SubmitError::Network { .. } | SubmitError::Server { .. })
    }

    /// Short tag for logs and the failure banner
    pub fn kind(&self) -> &'static str {
        match self {
            SubmitError::Network { .. } => "network",
            SubmitError::Rejected { .. } => "rejected",
            SubmitError::Server { .. } => "server",
            SubmitError::InvalidResponse { .. } => "invalid-response",
        }
    }
}

impl From<reqwest::Error> for SubmitError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::invalid_response(err.to_string())
        } else if let Some(status) = err.status() {
            Self::from_status(status.as_u16(), "")
        } else {
            Self::network(err.to_string())
        }
    }
}

fn extract_message(status: u16, body: &str) -> String {
    let body = body.trim();

    if let Ok(serde_json::Value::Object(map)) = serde_json::from_str::<serde_json::Value>(body) {
        for key in ["message", "error"] {
            if let Some(serde_json::Value::String(text)) = map.get(key) {
                return truncate(text);
            }
        }
    }

    if !body.is_empty() {
        return truncate(body);
    }

    reqwest::StatusCode::from_u16(status)
        .ok()
        .and_then(|s| s.canonical_reason())
        .unwrap_or("Unknown error")
        .to_string()
}

fn truncate(text: &str) -> String {
    if text.chars().count() <= MAX_MESSAGE_LEN {
        text.to_string()
    } else {
        let cut: String = text.chars().take(MAX_MESSAGE_LEN - 3).collect();
        format!("{cut}...")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_4xx_is_rejected() {
        let err = SubmitError::from_status(422, r#"{"message":"Email already used"}"#);
        assert_eq!(
            err,
            SubmitError::Rejected {
                status: 422,
                message: "Email already used".to_string()
            }
        );
        assert!(!err.is_retryable());
    }

    #[test]
    fn test_5xx_is_server_error() {
        let err = SubmitError::from_status(503, r#"{"error":"maintenance"}"#);
        assert!(matches!(err, SubmitError::Server { status: 503, .. }));
        assert!(err.to_string().contains("maintenance"));
        assert!(err.is_retryable());
    }

    #[test]
    fn test_plain_text_body_becomes_message() {
        let err = SubmitError::from_status(500, "boom");
        assert_eq!(err.to_string(), "Order service error (500): boom");
    }

    #[test]
    fn test_empty_body_uses_reason_phrase() {
        let err = SubmitError::from_status(404, "");
        assert_eq!(err.to_string(), "Order was rejected (404): Not Found");
    }

    #[test]
    fn test_long_body_is_truncated() {
        let body = "x".repeat(500);
        let SubmitError::Server { message, .. } = SubmitError::from_status(500, &body) else {
            panic!("expected server error");
        };
        assert_eq!(message.chars().count(), MAX_MESSAGE_LEN);
        assert!(message.ends_with("..."));
    }

    #[test]
    fn test_kind_tags() {
        assert_eq!(SubmitError::network("refused").kind(), "network");
        assert_eq!(SubmitError::invalid_response("bad").kind(), "invalid-response");
    }
}
