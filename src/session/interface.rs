/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 12/11/25
******************************************************************************/

//! Session types for Gencove API authentication
//!
//! A session is either backed by a static API key or by a JWT pair obtained
//! from the `jwt-create` endpoint. Tokens live only in memory for the
//! lifetime of the process; nothing is ever persisted to disk.

use crate::error::AppError;
use async_trait::async_trait;
use chrono::Utc;

/// JWT pair held by an email/password session
#[derive(Debug, Clone)]
pub struct JwtTokens {
    /// Short-lived access token sent as `Authorization: Bearer <access>`
    pub access: String,
    /// Longer-lived refresh token exchanged for new access tokens
    pub refresh: String,
    /// Timestamp when the access token was obtained (seconds since epoch)
    pub created_at: i64,
}

impl JwtTokens {
    /// Creates a token pair stamped with the current time
    pub fn new(access: String, refresh: String) -> Self {
        Self {
            access,
            refresh,
            created_at: Utc::now().timestamp(),
        }
    }
}

/// Session information for authenticated requests
///
/// Exactly one of `api_key` and `tokens` is set. The API key form never
/// refreshes: there is no refresh token to exchange.
#[derive(Debug, Clone)]
pub struct Session {
    /// Static API key, when authenticating with one
    pub api_key: Option<String>,
    /// JWT pair, when authenticating with email/password
    pub tokens: Option<JwtTokens>,
}

impl Session {
    /// Creates a session backed by a static API key
    #[must_use]
    pub fn from_api_key(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Some(api_key.into()),
            tokens: None,
        }
    }

    /// Creates a session backed by a JWT pair
    #[must_use]
    pub fn from_tokens(tokens: JwtTokens) -> Self {
        Self {
            api_key: None,
            tokens: Some(tokens),
        }
    }

    /// Value of the `Authorization` header for this session
    ///
    /// The API key takes precedence when present.
    #[must_use]
    pub fn authorization_header(&self) -> String {
        if let Some(key) = &self.api_key {
            format!("Api-Key {key}")
        } else if let Some(tokens) = &self.tokens {
            format!("Bearer {}", tokens.access)
        } else {
            String::new()
        }
    }

    /// Whether this session holds a refresh token and may attempt a refresh
    #[must_use]
    pub fn can_refresh(&self) -> bool {
        self.api_key.is_none() && self.tokens.is_some()
    }

    /// Whether this session uses a static API key
    #[must_use]
    pub fn is_api_key(&self) -> bool {
        self.api_key.is_some()
    }
}

/// Authentication operations against the Gencove API
#[async_trait]
pub trait Authenticator: Send + Sync {
    /// Performs the initial authentication and stores the resulting session
    async fn login(&self) -> Result<Session, AppError>;

    /// Exchanges the held refresh token for a new access token, mutating the
    /// stored session in place
    async fn refresh_access_token(&self) -> Result<Session, AppError>;

    /// Returns the current session, logging in first if none exists
    async fn get_session(&self) -> Result<Session, AppError>;

    /// Clears the current session
    async fn logout(&self) -> Result<(), AppError>;
}
