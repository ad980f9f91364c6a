/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 9/11/25
******************************************************************************/

//! # Gencove Client
//!
//! An async client for the Gencove bioinformatics API built on `tokio` and
//! `reqwest`. It handles:
//! - Authentication with email/password (plus optional OTP) exchanged for a
//!   JWT pair, or a static API key
//! - Transparent access-token refresh when the server rejects an expired JWT
//! - Cursor-based pagination of list endpoints (`offset`/`limit` with a
//!   server-provided `next` link)
//! - Exponential backoff retries, applied only to timed-out requests
//!
//! ## Example
//! ```ignore
//! use gencove_client::prelude::*;
//! use std::sync::Arc;
//!
//! let config = Arc::new(Config::new());
//! let client = Arc::new(GencoveHttpClientImpl::new(config.clone()));
//! let projects = ProjectServiceImpl::new(config, client);
//!
//! // Lazily walk pages
//! let mut pager = projects.projects();
//! while let Some(page) = pager.next_page().await? {
//!     for project in page {
//!         println!("{} {}", project.id, project.name);
//!     }
//! }
//! ```

/// Application layer: pagination and per-entity services
pub mod application;
/// Configuration loaded from environment variables and `.env`
pub mod config;
/// Crate-wide constants
pub mod constants;
/// Error types for the library
pub mod error;
/// Request/response models and the retry policy
pub mod model;
/// Convenient re-exports of the most commonly used types
pub mod prelude;
/// Session management and JWT authentication
pub mod session;
/// HTTP transport with status-to-error mapping
pub mod transport;
/// Small helpers (env parsing, logging)
pub mod utils;

/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the current version of the crate
#[must_use]
pub fn version() -> &'static str {
    VERSION
}
