/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/11/25
******************************************************************************/

//! HTTP transport for the Gencove API
//!
//! One call of [`GencoveHttpClient::request`] performs one HTTP round trip,
//! maps the outcome onto [`AppError`], and (for JWT sessions only) retries
//! exactly once after a transparent token refresh when the server answers
//! 401. Status mapping:
//! - connect/read timeout → `Timeout`
//! - 2xx → parsed JSON body, empty body parsed as `{}`
//! - 401 → one refresh-and-retry, then `Unauthorized`
//! - 429 → `TooManyRequests`
//! - other 4xx → `Client` with a message built from the body
//! - 503 with a maintenance flag → `Maintenance` carrying the advertised ETA
//! - other 5xx → `Server`

use crate::config::Config;
use crate::constants::USER_AGENT;
use crate::error::AppError;
use crate::session::auth::Auth;
use crate::session::interface::Authenticator;
use async_trait::async_trait;
use reqwest::{Client, Method, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, warn};

/// HTTP client trait for the Gencove API
///
/// Services and the paginator are generic over this trait so they can be
/// exercised against a mock transport in tests.
#[async_trait]
pub trait GencoveHttpClient: Send + Sync {
    /// Makes a request and deserializes the JSON response
    ///
    /// # Arguments
    /// * `method` - HTTP method
    /// * `path` - Endpoint path relative to the base URL, or a full URL
    /// * `query` - Optional query parameters
    /// * `body` - Optional JSON body
    ///
    /// # Returns
    /// * `Ok(T)` - Deserialized response; an empty 2xx body deserializes as `{}`
    /// * `Err(AppError)` - Mapped transport or API error
    async fn request<B, T>(
        &self,
        method: Method,
        path: &str,
        query: Option<&[(String, String)]>,
        body: Option<&B>,
    ) -> Result<T, AppError>
    where
        B: Serialize + Sync,
        T: DeserializeOwned + Send;

    /// Makes a request and returns the raw response body as text
    async fn request_raw(
        &self,
        method: Method,
        path: &str,
        query: Option<&[(String, String)]>,
    ) -> Result<String, AppError>;
}

/// HTTP client for the Gencove API with automatic authentication
///
/// Wraps a `reqwest::Client` together with an [`Auth`] manager. The first
/// request triggers a lazy login; a 401 on a JWT session triggers one
/// transparent refresh-and-retry.
pub struct GencoveHttpClientImpl {
    config: Arc<Config>,
    auth: Arc<Auth>,
    http: Client,
}

impl GencoveHttpClientImpl {
    /// Creates a new client; authentication happens lazily on the first request
    ///
    /// # Arguments
    /// * `config` - Configuration containing credentials and API settings
    pub fn new(config: Arc<Config>) -> Self {
        let auth = Arc::new(Auth::new(config.clone()));
        Self::with_auth(config, auth)
    }

    /// Creates a new client sharing an existing [`Auth`] instance
    pub fn with_auth(config: Arc<Config>, auth: Arc<Auth>) -> Self {
        let http = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .expect("Failed to create HTTP client");

        Self { config, auth, http }
    }

    /// Gets a reference to the underlying Auth instance
    pub fn auth(&self) -> &Auth {
        &self.auth
    }

    /// Runs one request, refreshing the access token and retrying once when
    /// the server rejects it
    async fn execute_with_refresh<B: Serialize + Sync>(
        &self,
        method: Method,
        path: &str,
        query: Option<&[(String, String)]>,
        body: Option<&B>,
    ) -> Result<String, AppError> {
        match self.execute(method.clone(), path, query, body).await {
            Ok(text) => Ok(text),
            Err(AppError::AccessTokenExpired) => {
                warn!("access token rejected, refreshing and retrying once");
                self.auth.refresh_access_token().await?;

                // A second rejection is terminal
                self.execute(method, path, query, body)
                    .await
                    .map_err(|e| match e {
                        AppError::AccessTokenExpired => AppError::Unauthorized,
                        other => other,
                    })
            }
            Err(e) => Err(e),
        }
    }

    /// Performs exactly one HTTP round trip
    async fn execute<B: Serialize + Sync>(
        &self,
        method: Method,
        path: &str,
        query: Option<&[(String, String)]>,
        body: Option<&B>,
    ) -> Result<String, AppError> {
        let session = self.auth.get_session().await?;

        let url = if path.starts_with("http") {
            path.to_string()
        } else {
            format!(
                "{}/{}",
                self.config.rest_api.base_url.trim_end_matches('/'),
                path.trim_start_matches('/')
            )
        };

        debug!("{} {}", method, url);

        let mut request = self
            .http
            .request(method, &url)
            .header("Authorization", session.authorization_header())
            .header("Content-Type", "application/json")
            .header("Accept", "application/json")
            .timeout(Duration::from_secs(self.config.rest_api.timeout));

        if let Some(pairs) = query {
            request = request.query(pairs);
        }
        if let Some(b) = body {
            request = request.json(b);
        }

        // Timeouts map to AppError::Timeout through the From impl
        let response = request.send().await?;

        let status = response.status();
        debug!("response status: {}", status);

        if status.is_success() {
            return Ok(response.text().await.unwrap_or_default());
        }

        let text = response.text().await.unwrap_or_default();

        if status == StatusCode::UNAUTHORIZED && session.can_refresh() {
            return Err(AppError::AccessTokenExpired);
        }

        error!("request failed with status {}: {}", status, text);
        Err(map_failure(status, &text))
    }
}

#[async_trait]
impl GencoveHttpClient for GencoveHttpClientImpl {
    async fn request<B, T>(
        &self,
        method: Method,
        path: &str,
        query: Option<&[(String, String)]>,
        body: Option<&B>,
    ) -> Result<T, AppError>
    where
        B: Serialize + Sync,
        T: DeserializeOwned + Send,
    {
        let text = self
            .execute_with_refresh(method, path, query, body)
            .await?;
        parse_body(&text)
    }

    async fn request_raw(
        &self,
        method: Method,
        path: &str,
        query: Option<&[(String, String)]>,
    ) -> Result<String, AppError> {
        self.execute_with_refresh(method, path, query, None::<&()>)
            .await
    }
}

/// Deserializes a response body, treating an empty body as an empty JSON object
fn parse_body<T: DeserializeOwned>(text: &str) -> Result<T, AppError> {
    if text.trim().is_empty() {
        return Ok(serde_json::from_value(Value::Object(
            serde_json::Map::new(),
        ))?);
    }
    Ok(serde_json::from_str(text)?)
}

/// Maps a non-2xx status and its body onto an [`AppError`]
///
/// 401 is mapped to `Unauthorized` here; the refresh-once path intercepts it
/// earlier when a refresh token is held.
#[must_use]
pub fn map_failure(status: StatusCode, body: &str) -> AppError {
    if status == StatusCode::TOO_MANY_REQUESTS {
        return AppError::TooManyRequests;
    }

    if status == StatusCode::UNAUTHORIZED {
        return AppError::Unauthorized;
    }

    if status == StatusCode::SERVICE_UNAVAILABLE {
        if let Ok(value) = serde_json::from_str::<Value>(body) {
            if value
                .get("maintenance")
                .and_then(Value::as_bool)
                .unwrap_or(false)
            {
                let message = value
                    .get("maintenance_message")
                    .and_then(Value::as_str)
                    .unwrap_or("API maintenance in progress")
                    .to_string();
                let eta = value
                    .get("maintenance_eta")
                    .and_then(Value::as_str)
                    .map(String::from);
                return AppError::Maintenance { message, eta };
            }
        }
    }

    if status.is_client_error() {
        return AppError::Client {
            status,
            message: client_error_message(body),
        };
    }

    AppError::Server { status }
}

/// Builds a human-readable message from a 4xx response body
///
/// Prefers the `detail` field; otherwise joins the field-by-field
/// validation-error arrays/strings the API returns for bad input.
#[must_use]
pub fn client_error_message(body: &str) -> String {
    let Ok(value) = serde_json::from_str::<Value>(body) else {
        return body.trim().to_string();
    };

    if let Some(detail) = value.get("detail").and_then(Value::as_str) {
        return detail.to_string();
    }

    if let Some(map) = value.as_object() {
        let mut parts = Vec::new();
        for (field, errors) in map {
            match errors {
                Value::Array(items) => {
                    let joined = items
                        .iter()
                        .filter_map(Value::as_str)
                        .collect::<Vec<_>>()
                        .join(" ");
                    parts.push(format!("{field}: {joined}"));
                }
                Value::String(s) => parts.push(format!("{field}: {s}")),
                other => parts.push(format!("{field}: {other}")),
            }
        }
        if !parts.is_empty() {
            return parts.join("; ");
        }
    }

    body.trim().to_string()
}
