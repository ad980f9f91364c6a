// Authentication manager for the Gencove API

use crate::config::{Config, Credentials};
use crate::constants::{JWT_CREATE_PATH, JWT_REFRESH_PATH, USER_AGENT};
use crate::error::AppError;
use crate::model::requests::{LoginRequest, RefreshRequest};
use crate::model::responses::{AccessToken, TokenPair};
use crate::session::interface::{Authenticator, JwtTokens, Session};
use crate::transport::http_client::map_failure;
use async_trait::async_trait;
use reqwest::Client;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tracing::{debug, error, info, warn};

/// Authentication manager for the Gencove API
///
/// Handles:
/// - Login with email/password (plus optional OTP), exchanged for a JWT pair
/// - API-key sessions, which require no network round trip
/// - Access-token refresh via the refresh token
/// - In-memory session storage for the process lifetime
pub struct Auth {
    config: Arc<Config>,
    http: Client,
    session: Arc<RwLock<Option<Session>>>,
}

impl Auth {
    /// Creates a new Auth instance
    ///
    /// # Arguments
    /// * `config` - Configuration containing credentials and API settings
    pub fn new(config: Arc<Config>) -> Self {
        let http = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            config,
            http,
            session: Arc::new(RwLock::new(None)),
        }
    }

    /// Seeds the session with previously obtained tokens, skipping login
    pub async fn set_session(&self, session: Session) {
        let mut slot = self.session.write().await;
        *slot = Some(session);
    }

    /// Joins the configured base URL with an endpoint path
    fn rest_url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.config.rest_api.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.config.rest_api.timeout)
    }
}

#[async_trait]
impl Authenticator for Auth {
    /// Performs initial authentication
    ///
    /// API-key credentials produce a session without any network call.
    /// Email/password credentials are exchanged for a JWT pair via the
    /// `jwt-create` endpoint.
    ///
    /// # Returns
    /// * `Ok(Session)` - Authenticated session, also stored internally
    /// * `Err(AppError)` - If login fails
    async fn login(&self) -> Result<Session, AppError> {
        let session = match &self.config.credentials {
            Credentials::ApiKey(key) => {
                debug!("using API key authentication");
                Session::from_api_key(key.clone())
            }
            Credentials::Login {
                email,
                password,
                otp_token,
            } => {
                info!("logging in as {}", email);

                let url = self.rest_url(JWT_CREATE_PATH);
                let body = LoginRequest {
                    email: email.clone(),
                    password: password.clone(),
                    otp_token: otp_token.clone(),
                };

                debug!("sending login request to: {}", url);

                let response = self
                    .http
                    .post(&url)
                    .header("Content-Type", "application/json")
                    .timeout(self.request_timeout())
                    .json(&body)
                    .send()
                    .await?;

                let status = response.status();
                if !status.is_success() {
                    let text = response.text().await.unwrap_or_default();
                    error!("login failed with status {}: {}", status, text);
                    return Err(map_failure(status, &text));
                }

                let pair: TokenPair = response.json().await?;
                Session::from_tokens(JwtTokens::new(pair.access, pair.refresh))
            }
        };

        let mut slot = self.session.write().await;
        *slot = Some(session.clone());

        info!("login successful");
        Ok(session)
    }

    /// Exchanges the refresh token for a new access token
    ///
    /// The refresh token itself is kept; only the access token is replaced.
    /// A rejected refresh surfaces as `Unauthorized`: with email/password
    /// plus OTP a silent re-login cannot supply a fresh one-time password,
    /// so the caller has to re-authenticate explicitly.
    ///
    /// # Returns
    /// * `Ok(Session)` - Session with the new access token
    /// * `Err(AppError)` - If the refresh was rejected
    async fn refresh_access_token(&self) -> Result<Session, AppError> {
        let current = { self.session.read().await.clone() };

        let Some(session) = current else {
            warn!("no session to refresh, performing login");
            return self.login().await;
        };

        let Some(tokens) = &session.tokens else {
            warn!("API key session, nothing to refresh");
            return Ok(session);
        };

        info!("refreshing access token");

        let url = self.rest_url(JWT_REFRESH_PATH);
        let body = RefreshRequest {
            refresh: tokens.refresh.clone(),
        };

        let response = self
            .http
            .post(&url)
            .header("Content-Type", "application/json")
            .timeout(self.request_timeout())
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            warn!("token refresh failed with status {}: {}", status, text);
            return Err(AppError::Unauthorized);
        }

        let refreshed: AccessToken = response.json().await?;

        let new_session = Session::from_tokens(JwtTokens::new(
            refreshed.access,
            tokens.refresh.clone(),
        ));

        let mut slot = self.session.write().await;
        *slot = Some(new_session.clone());

        info!("access token refreshed");
        Ok(new_session)
    }

    /// Gets the current session, logging in first if none exists
    async fn get_session(&self) -> Result<Session, AppError> {
        let session = self.session.read().await;

        if let Some(sess) = session.as_ref() {
            return Ok(sess.clone());
        }
        drop(session);

        info!("no active session, logging in");
        self.login().await
    }

    /// Clears the current session
    async fn logout(&self) -> Result<(), AppError> {
        info!("logging out");

        let mut session = self.session.write().await;
        *session = None;

        Ok(())
    }
}
