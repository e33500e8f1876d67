//! Error types for the Sentinel client.

use thiserror::Error;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur during Sentinel client operations.
#[derive(Error, Debug)]
pub enum ClientError {
    /// HTTP transport error (connection, TLS, timeout, body read).
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Non-success response from the engine.
    #[error("API error ({status}) at {url}: {message}")]
    ApiError {
        status: u16,
        url: String,
        message: String,
    },

    /// The session cookie is missing, expired or rejected.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Response body did not match the expected shape.
    #[error("Invalid response format: {0}")]
    InvalidResponse(String),

    /// Invalid URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

impl ClientError {
    /// Check if this error indicates authentication failure.
    pub fn is_auth_error(&self) -> bool {
        matches!(
            self,
            Self::Unauthorized(_) | Self::ApiError { status: 401, .. }
        )
    }

    /// HTTP status code if the engine answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::ApiError { status, .. } => Some(*status),
            Self::Unauthorized(_) => Some(401),
            Self::HttpError(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Short message suitable for a toast.
    ///
    /// Prefers the engine's own `message`/`error` text over the full
    /// diagnostic string.
    pub fn user_message(&self) -> String {
        match self {
            Self::ApiError { message, .. } if !message.is_empty() => message.clone(),
            Self::Unauthorized(message) if !message.is_empty() => message.clone(),
            Self::HttpError(e) if e.is_timeout() => "Request timed out".to_string(),
            Self::HttpError(e) if e.is_connect() => "Could not reach the server".to_string(),
            other => other.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_is_auth_error() {
        assert!(ClientError::Unauthorized("invalid authentication token".into()).is_auth_error());
        assert!(
            ClientError::ApiError {
                status: 401,
                url: "http://localhost/auth/me".into(),
                message: String::new(),
            }
            .is_auth_error()
        );
        assert!(!ClientError::InvalidResponse("bad".into()).is_auth_error());
    }

    #[test]
    fn test_user_message_prefers_server_text() {
        let err = ClientError::ApiError {
            status: 400,
            url: "http://localhost/monitors".into(),
            message: "at least one integration is required".into(),
        };
        assert_eq!(err.user_message(), "at least one integration is required");
        assert_eq!(err.status(), Some(400));
    }

    #[test]
    fn test_user_message_falls_back_to_display() {
        let err = ClientError::ApiError {
            status: 500,
            url: "http://localhost/monitors".into(),
            message: String::new(),
        };
        assert!(err.user_message().contains("500"));
    }
}
