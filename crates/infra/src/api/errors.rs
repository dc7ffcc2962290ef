//! API-specific error types and the display-message normalizer
//!
//! Every failure the client can produce falls into exactly one of three
//! shapes: the server answered with a non-2xx status, the request left but
//! nothing came back, or the call failed on this side before or after the
//! exchange. [`error_message`] turns any of them into the single line the UI
//! shows.

use std::error::Error as StdError;
use std::fmt;

use jobboard_domain::constants::{
    GENERIC_SERVER_ERROR_MESSAGE, NETWORK_ERROR_MESSAGE, UNEXPECTED_ERROR_MESSAGE,
};
use jobboard_domain::JobBoardError;
use reqwest::StatusCode;
use thiserror::Error;

/// Categories of API errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorCategory {
    /// 401/403 - session missing, expired or insufficient
    Authentication,
    /// 429
    RateLimit,
    /// 5xx
    Server,
    /// Other 4xx, plus local request/response handling failures
    Client,
    /// No response received (connection, DNS, timeout)
    Network,
    /// Client construction or session storage failures
    Config,
}

/// Non-2xx response as received from the server
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorResponse {
    pub status: StatusCode,
    pub url: String,
    /// Parsed JSON body; a non-JSON body is kept as a JSON string
    pub data: Option<serde_json::Value>,
}

impl ErrorResponse {
    /// Build from the raw response body
    pub fn from_body(status: StatusCode, url: impl Into<String>, body: &str) -> Self {
        let data = if body.trim().is_empty() {
            None
        } else {
            Some(
                serde_json::from_str(body)
                    .unwrap_or_else(|_| serde_json::Value::String(body.to_string())),
            )
        };
        Self { status, url: url.into(), data }
    }

    /// `message` field of the JSON body, when it is a string
    pub fn server_message(&self) -> Option<&str> {
        self.data.as_ref()?.get("message")?.as_str()
    }
}

impl fmt::Display for ErrorResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} returned status {}", self.url, self.status)?;
        if let Some(message) = self.server_message() {
            write!(f, ": {message}")?;
        }
        Ok(())
    }
}

/// API operation errors
#[derive(Debug, Error)]
pub enum ApiError {
    /// 401. The session has already been cleared when this is returned.
    #[error("Unauthorized: {0}")]
    Unauthorized(ErrorResponse),

    #[error("Forbidden: {0}")]
    Forbidden(ErrorResponse),

    #[error("Rate limit exceeded: {0}")]
    RateLimit(ErrorResponse),

    #[error("Server error: {0}")]
    Server(ErrorResponse),

    #[error("Client error: {0}")]
    Client(ErrorResponse),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Timeout: {0}")]
    Timeout(String),

    /// Request could not be built (bad URL, unserializable body)
    #[error("Request error: {0}")]
    Request(String),

    /// 2xx response whose body does not match the expected shape
    #[error("Failed to parse response: {0}")]
    Decode(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl ApiError {
    /// Classify a non-2xx status
    pub fn from_status(status: StatusCode, url: &str, body: &str) -> Self {
        let response = ErrorResponse::from_body(status, url, body);

        if status == StatusCode::UNAUTHORIZED {
            Self::Unauthorized(response)
        } else if status == StatusCode::FORBIDDEN {
            Self::Forbidden(response)
        } else if status == StatusCode::TOO_MANY_REQUESTS {
            Self::RateLimit(response)
        } else if status.is_server_error() {
            Self::Server(response)
        } else {
            Self::Client(response)
        }
    }

    /// Get the error category for this error
    pub const fn category(&self) -> ApiErrorCategory {
        match self {
            Self::Unauthorized(_) | Self::Forbidden(_) => ApiErrorCategory::Authentication,
            Self::RateLimit(_) => ApiErrorCategory::RateLimit,
            Self::Server(_) => ApiErrorCategory::Server,
            Self::Client(_) | Self::Request(_) | Self::Decode(_) => ApiErrorCategory::Client,
            Self::Network(_) | Self::Timeout(_) => ApiErrorCategory::Network,
            Self::Storage(_) | Self::Config(_) => ApiErrorCategory::Config,
        }
    }

    /// Server response carried by this error, if one was received
    pub const fn response(&self) -> Option<&ErrorResponse> {
        match self {
            Self::Unauthorized(response)
            | Self::Forbidden(response)
            | Self::RateLimit(response)
            | Self::Server(response)
            | Self::Client(response) => Some(response),
            _ => None,
        }
    }

    /// HTTP status, if a response was received
    pub fn status(&self) -> Option<StatusCode> {
        self.response().map(|response| response.status)
    }

    /// Request was sent but no response came back
    pub const fn is_network(&self) -> bool {
        matches!(self, Self::Network(_) | Self::Timeout(_))
    }

    /// Raw message of a local failure, without the variant prefix
    fn detail(&self) -> &str {
        match self {
            Self::Network(message)
            | Self::Timeout(message)
            | Self::Request(message)
            | Self::Decode(message)
            | Self::Storage(message)
            | Self::Config(message) => message,
            Self::Unauthorized(_)
            | Self::Forbidden(_)
            | Self::RateLimit(_)
            | Self::Server(_)
            | Self::Client(_) => "",
        }
    }

    /// Display text for this error, see [`error_message`]
    pub fn user_message(&self) -> String {
        error_message(self)
    }
}

impl From<JobBoardError> for ApiError {
    fn from(err: JobBoardError) -> Self {
        match err {
            JobBoardError::Network(message) => Self::Network(message),
            JobBoardError::Timeout(message) => Self::Timeout(message),
            JobBoardError::InvalidInput(message) => Self::Request(message),
            JobBoardError::Storage(message) => Self::Storage(message),
            JobBoardError::Config(message) => Self::Config(message),
            JobBoardError::Internal(message) => Self::Decode(message),
        }
    }
}

/// Turn an API failure into the message shown to the user
///
/// Checked in order:
/// 1. a server response was received: its `message` field, else
///    "An error occurred"
/// 2. the request went out with no response: the fixed network message
/// 3. anything else: the failure's own message, else
///    "An unexpected error occurred"
pub fn error_message(err: &ApiError) -> String {
    if let Some(response) = err.response() {
        return non_empty_or(response.server_message(), GENERIC_SERVER_ERROR_MESSAGE);
    }

    if err.is_network() {
        return NETWORK_ERROR_MESSAGE.to_string();
    }

    non_empty_or(Some(err.detail()), UNEXPECTED_ERROR_MESSAGE)
}

/// [`error_message`] for any error type
///
/// Recognises [`ApiError`] and [`JobBoardError`]; every other error falls
/// into the third case and contributes its `Display` text.
pub fn normalize_error(err: &(dyn StdError + 'static)) -> String {
    if let Some(api_error) = err.downcast_ref::<ApiError>() {
        return error_message(api_error);
    }

    if let Some(domain_error) = err.downcast_ref::<JobBoardError>() {
        return match domain_error {
            JobBoardError::Network(_) | JobBoardError::Timeout(_) => {
                NETWORK_ERROR_MESSAGE.to_string()
            }
            other => non_empty_or(Some(other.message()), UNEXPECTED_ERROR_MESSAGE),
        };
    }

    non_empty_or(Some(err.to_string().as_str()), UNEXPECTED_ERROR_MESSAGE)
}

fn non_empty_or(message: Option<&str>, fallback: &str) -> String {
    match message {
        Some(text) if !text.is_empty() => text.to_string(),
        _ => fallback.to_string(),
    }
}
