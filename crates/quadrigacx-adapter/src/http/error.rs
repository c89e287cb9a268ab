/*
[INPUT]:  Error sources (HTTP transport, exchange API, serialization, response parsing)
[OUTPUT]: Structured error types with retry and auth hints
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new error sources or improving error messages
*/

use reqwest::StatusCode;
use thiserror::Error;

/// Exchange error codes reported for a bad API key or signature.
const AUTH_ERROR_CODES: [i32; 2] = [101, 103];

/// Main error type for the QuadrigaCX adapter
#[derive(Error, Debug)]
pub enum QuadrigaError {
    /// HTTP request failed (connect, TLS, timeout, body read)
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Exchange returned an error status or an error envelope
    #[error("API error (code {code}): {message}")]
    Api { code: i32, message: String },

    /// Serialization/deserialization failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Response body could not be interpreted
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Order lookup returned no matching order
    #[error("Order not found: {order_id}")]
    OrderNotFound { order_id: String },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl QuadrigaError {
    /// Check if the error is retryable
    pub fn is_retryable(&self) -> bool {
        match self {
            QuadrigaError::Http(_) => true,
            QuadrigaError::Api { code, .. } => {
                *code == i32::from(StatusCode::TOO_MANY_REQUESTS.as_u16())
                    || (500..600).contains(code)
            }
            _ => false,
        }
    }

    /// Check if error indicates authentication failure
    pub fn is_auth_error(&self) -> bool {
        match self {
            QuadrigaError::Api { code, .. } => {
                AUTH_ERROR_CODES.contains(code)
                    || *code == i32::from(StatusCode::UNAUTHORIZED.as_u16())
                    || *code == i32::from(StatusCode::FORBIDDEN.as_u16())
            }
            _ => false,
        }
    }

    /// Create an API error from status code and message
    pub fn api_error(status: StatusCode, message: impl Into<String>) -> Self {
        QuadrigaError::Api {
            code: i32::from(status.as_u16()),
            message: message.into(),
        }
    }
}

/// Result type alias for QuadrigaCX operations
pub type Result<T> = std::result::Result<T, QuadrigaError>;
