/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 9/11/25
******************************************************************************/

//! Environment parsing helpers backing the `GENCOVE_*` configuration
//! variables and the retry knobs (`MAX_RETRY_ATTEMPTS`, `RETRY_BASE_DELAY_MS`,
//! `RETRY_MAX_ELAPSED_SECS`).

use std::env;
use std::fmt::Debug;
use std::str::FromStr;
use tracing::error;

/// Reads and parses an environment variable, falling back to `default` when
/// the variable is missing or does not parse
///
/// Used for settings with a sensible crate default, e.g. `GENCOVE_HOST`,
/// `GENCOVE_REQUEST_TIMEOUT` and `GENCOVE_PAGE_SIZE`. A set-but-unparseable
/// value is logged and replaced by the default.
///
/// # Arguments
///
/// * `env_var` - Name of the environment variable
/// * `default` - Value to use when the variable is missing or invalid
///
/// # Returns
///
/// The parsed value, or `default`
pub fn get_env_or_default<T: FromStr>(env_var: &str, default: T) -> T
where
    <T as FromStr>::Err: Debug,
{
    match env::var(env_var) {
        Ok(val) => val.parse::<T>().unwrap_or_else(|_| {
            error!("Failed to parse {}: {}, using default", env_var, val);
            default
        }),
        Err(_) => default,
    }
}

/// Reads and parses an environment variable, returning `None` when it is
/// missing or does not parse
///
/// Used for settings whose absence changes behavior rather than picking a
/// default, e.g. `GENCOVE_API_KEY` (its presence selects API-key
/// authentication over email/password) and `GENCOVE_OTP_TOKEN`.
///
/// # Arguments
/// * `env_var` - Name of the environment variable
///
/// # Returns
/// The parsed value, or `None`
pub fn get_env_or_none<T: FromStr>(env_var: &str) -> Option<T>
where
    <T as FromStr>::Err: Debug,
{
    match env::var(env_var) {
        Ok(val) => val.parse::<T>().ok(),
        Err(_) => None,
    }
}
