/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use reqwest::StatusCode;
use std::fmt;

/// Result alias used across the crate
pub type V20Result<T> = Result<T, AppError>;

/// Main error type for the library
#[derive(Debug)]
pub enum AppError {
    /// Transport level failure reported by reqwest
    Network(reqwest::Error),
    /// IO failure
    Io(std::io::Error),
    /// JSON encoding or decoding failure
    Json(serde_json::Error),
    /// A value could not be decoded into the expected shape
    Deserialization(String),
    /// The caller broke the contract of an operation (missing path parameter, empty argument...)
    InvalidInput(String),
    /// A stream record could not be parsed and the stream policy is to abort
    MalformedRecord {
        /// Zero based index of the record in the stream
        index: u64,
        /// Parser message
        message: String,
    },
    /// The API kept answering 429 after all retries
    RateLimitExceeded,
    /// The API rejected the access token
    Unauthorized,
    /// Unexpected HTTP status from the transport
    Unexpected(StatusCode),
    /// A typed response with a non-success status, converted on request
    Api {
        /// HTTP status code
        status: u16,
        /// `errorCode` field of the response, if any
        error_code: Option<String>,
        /// `errorMessage` field of the response, if any
        error_message: Option<String>,
    },
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Network(e) => write!(f, "network error: {e}"),
            AppError::Io(e) => write!(f, "io error: {e}"),
            AppError::Json(e) => write!(f, "json error: {e}"),
            AppError::Deserialization(msg) => write!(f, "deserialization error: {msg}"),
            AppError::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
            AppError::MalformedRecord { index, message } => {
                write!(f, "malformed stream record {index}: {message}")
            }
            AppError::RateLimitExceeded => write!(f, "rate limit exceeded"),
            AppError::Unauthorized => write!(f, "unauthorized"),
            AppError::Unexpected(status) => write!(f, "unexpected status code: {status}"),
            AppError::Api {
                status,
                error_code,
                error_message,
            } => write!(
                f,
                "api error {status}: {} ({})",
                error_message.as_deref().unwrap_or("no message"),
                error_code.as_deref().unwrap_or("no code")
            ),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Network(e) => Some(e),
            AppError::Io(e) => Some(e),
            AppError::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(error: reqwest::Error) -> Self {
        AppError::Network(error)
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        AppError::Io(error)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        AppError::Json(error)
    }
}
