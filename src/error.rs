/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 9/11/25
******************************************************************************/

//! Error types for the Gencove client
//!
//! The taxonomy mirrors how callers are expected to react:
//! - [`AppError::Timeout`] is the only retryable kind
//! - [`AppError::Client`] is terminal per call, except that a 401 on a JWT
//!   session triggers one transparent refresh (see the transport layer)
//! - [`AppError::Maintenance`] is terminal and user-facing, carrying the ETA
//!   the server advertised

use reqwest::StatusCode;
use std::fmt;

/// Main error type for the library
#[derive(Debug)]
pub enum AppError {
    /// The request timed out at connect or read stage; the only error kind
    /// the backoff policy will retry
    Timeout,
    /// The server answered 429
    TooManyRequests,
    /// A 4xx response; `message` is built from the body's `detail` field or
    /// its validation-error map
    Client {
        /// HTTP status code of the response
        status: StatusCode,
        /// Human-readable message extracted from the response body
        message: String,
    },
    /// A 5xx response without a maintenance flag
    Server {
        /// HTTP status code of the response
        status: StatusCode,
    },
    /// A 503 response carrying a maintenance flag in the body
    Maintenance {
        /// Message advertised by the server
        message: String,
        /// Estimated time the maintenance window ends, if advertised
        eta: Option<String>,
    },
    /// Authentication failed and cannot be recovered by a token refresh
    Unauthorized,
    /// The access token was rejected but a refresh token is held; internal
    /// trigger for the single refresh-and-retry
    AccessTokenExpired,
    /// Local input validation failed; nothing was sent to the server
    InvalidInput(String),
    /// A non-timeout transport failure from reqwest
    Network(reqwest::Error),
    /// JSON (de)serialization failure
    Json(serde_json::Error),
    /// I/O failure
    Io(std::io::Error),
}

impl AppError {
    /// Whether the backoff policy may retry this error
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(self, AppError::Timeout)
    }

    /// HTTP status code attached to this error, if any
    #[must_use]
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            AppError::TooManyRequests => Some(StatusCode::TOO_MANY_REQUESTS),
            AppError::Client { status, .. } | AppError::Server { status } => Some(*status),
            AppError::Maintenance { .. } => Some(StatusCode::SERVICE_UNAVAILABLE),
            AppError::Unauthorized | AppError::AccessTokenExpired => {
                Some(StatusCode::UNAUTHORIZED)
            }
            _ => None,
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Timeout => write!(f, "request timed out"),
            AppError::TooManyRequests => write!(f, "too many requests"),
            AppError::Client { status, message } => {
                write!(f, "client error {}: {}", status.as_u16(), message)
            }
            AppError::Server { status } => write!(f, "server error {}", status.as_u16()),
            AppError::Maintenance { message, eta } => match eta {
                Some(eta) => write!(f, "maintenance: {message} (eta: {eta})"),
                None => write!(f, "maintenance: {message}"),
            },
            AppError::Unauthorized => write!(f, "unauthorized"),
            AppError::AccessTokenExpired => write!(f, "access token expired"),
            AppError::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
            AppError::Network(e) => write!(f, "network error: {e}"),
            AppError::Json(e) => write!(f, "json error: {e}"),
            AppError::Io(e) => write!(f, "io error: {e}"),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Network(e) => Some(e),
            AppError::Json(e) => Some(e),
            AppError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            AppError::Timeout
        } else {
            AppError::Network(err)
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Json(err)
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Io(err)
    }
}
