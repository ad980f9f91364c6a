/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 9/11/25
******************************************************************************/
use crate::constants::{DEFAULT_HOST, DEFAULT_PAGE_SIZE, DEFAULT_REQUEST_TIMEOUT_SECS};
use crate::model::retry::RetryConfig;
use crate::utils::config::{get_env_or_default, get_env_or_none};
use dotenv::dotenv;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize)]
/// Authentication credentials for the Gencove API
///
/// Exactly one form is active per client instance. An API key takes
/// precedence: when present, email/password are ignored and a token refresh
/// is never attempted.
pub enum Credentials {
    /// Static API key, sent as `Authorization: Api-Key <key>`
    ApiKey(String),
    /// Email/password login exchanged for a JWT pair
    Login {
        /// Email address of the Gencove account
        email: String,
        /// Password of the Gencove account
        password: String,
        /// One-time password for accounts with MFA enabled
        otp_token: Option<String>,
    },
}

impl Credentials {
    /// Builds credentials from environment variables
    ///
    /// `GENCOVE_API_KEY` wins when set; otherwise `GENCOVE_EMAIL`,
    /// `GENCOVE_PASSWORD` and the optional `GENCOVE_OTP_TOKEN` are used.
    pub fn from_env() -> Self {
        if let Some(api_key) = get_env_or_none::<String>("GENCOVE_API_KEY") {
            return Credentials::ApiKey(api_key);
        }

        let email = get_env_or_default("GENCOVE_EMAIL", String::from("default_email"));
        let password = get_env_or_default("GENCOVE_PASSWORD", String::from("default_password"));

        if email == "default_email" {
            error!("GENCOVE_EMAIL not found in environment variables or .env file");
        }
        if password == "default_password" {
            error!("GENCOVE_PASSWORD not found in environment variables or .env file");
        }

        Credentials::Login {
            email,
            password,
            otp_token: get_env_or_none("GENCOVE_OTP_TOKEN"),
        }
    }

    /// Whether these credentials are a static API key
    #[must_use]
    pub fn is_api_key(&self) -> bool {
        matches!(self, Credentials::ApiKey(_))
    }
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Main configuration for the Gencove API client
pub struct Config {
    /// Authentication credentials
    pub credentials: Credentials,
    /// REST API configuration
    pub rest_api: RestApiConfig,
    /// Number of items to retrieve per page in list endpoints
    pub page_size: u32,
    /// Retry policy for timed-out requests
    pub retry: RetryConfig,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Configuration for the REST API
pub struct RestApiConfig {
    /// Base URL for the Gencove REST API
    pub base_url: String,
    /// Timeout in seconds for REST API requests
    pub timeout: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Creates a new configuration instance from environment variables
    ///
    /// Loads `.env` first, then reads `GENCOVE_*` variables, falling back to
    /// the crate defaults.
    ///
    /// # Returns
    ///
    /// A new `Config` instance
    pub fn new() -> Self {
        // Explicitly load the .env file
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }

        Config {
            credentials: Credentials::from_env(),
            rest_api: RestApiConfig {
                base_url: get_env_or_default("GENCOVE_HOST", String::from(DEFAULT_HOST)),
                timeout: get_env_or_default("GENCOVE_REQUEST_TIMEOUT", DEFAULT_REQUEST_TIMEOUT_SECS),
            },
            page_size: get_env_or_default("GENCOVE_PAGE_SIZE", DEFAULT_PAGE_SIZE),
            retry: RetryConfig::default(),
        }
    }

    /// Creates a configuration with explicit credentials and base URL,
    /// leaving the rest at crate defaults
    ///
    /// # Arguments
    /// * `credentials` - Credentials to authenticate with
    /// * `base_url` - Base URL of the API, without trailing slash
    #[must_use]
    pub fn with_credentials(credentials: Credentials, base_url: impl Into<String>) -> Self {
        Config {
            credentials,
            rest_api: RestApiConfig {
                base_url: base_url.into(),
                timeout: DEFAULT_REQUEST_TIMEOUT_SECS,
            },
            page_size: DEFAULT_PAGE_SIZE,
            retry: RetryConfig::new(),
        }
    }
}
