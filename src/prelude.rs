/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 15/11/25
******************************************************************************/

//! # Gencove Client Prelude
//!
//! This module provides a convenient way to import the most commonly used types and traits
//! from the Gencove client library. By importing this prelude, you get access to all the
//! essential components needed for most Gencove API interactions.
//!
//! ## Usage
//!
//! ```rust
//! use gencove_client::prelude::*;
//!
//! // Now you have access to all the commonly used types and traits
//! let config = Config::new();
//! // ... etc
//! ```

// ============================================================================
// CORE CONFIGURATION AND SETUP
// ============================================================================

/// Configuration for the Gencove API client
pub use crate::config::{Config, Credentials, RestApiConfig};

/// Library version information
pub use crate::{VERSION, version};

/// Logging initialization helper
pub use crate::utils::logger::setup_logger;

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Main error type for the library
pub use crate::error::AppError;

// ============================================================================
// AUTHENTICATION AND SESSION MANAGEMENT
// ============================================================================

/// Authentication manager for the Gencove API
pub use crate::session::auth::Auth;

/// Session types and the authenticator trait
pub use crate::session::interface::{Authenticator, JwtTokens, Session};

// ============================================================================
// TRANSPORT AND HTTP CLIENT
// ============================================================================

/// HTTP client trait
pub use crate::transport::http_client::GencoveHttpClient;

/// HTTP client implementation
pub use crate::transport::http_client::GencoveHttpClientImpl;

// ============================================================================
// PAGINATION AND RETRIES
// ============================================================================

/// Cursor paginator over list endpoints
pub use crate::application::pagination::Paginator;

/// Retry policy for timed-out requests
pub use crate::model::retry::{RetryConfig, retry_on_timeout};

// ============================================================================
// CORE SERVICES (TRAITS)
// ============================================================================

/// Project service trait for project operations
pub use crate::application::services::ProjectService;

/// Sample service trait for sample operations
pub use crate::application::services::SampleService;

/// Upload service trait for upload operations
pub use crate::application::services::UploadService;

// ============================================================================
// SERVICE IMPLEMENTATIONS
// ============================================================================

/// Project service implementation
pub use crate::application::services::project_service::ProjectServiceImpl;

/// Sample service implementation
pub use crate::application::services::sample_service::SampleServiceImpl;

/// Upload service implementation
pub use crate::application::services::upload_service::UploadServiceImpl;

// ============================================================================
// MODELS
// ============================================================================

/// Request bodies for API calls
pub use crate::model::requests::{
    CreateBatchRequest, DeleteProjectsRequest, LoginRequest, RefreshRequest,
    SampleMetadataRequest, UploadDetailsRequest,
};

/// Response models from API calls
pub use crate::model::responses::{
    AccessToken, Batch, EntityStatus, FastqPair, Page, PageMeta, Project, QualityControl,
    S3Object, Sample, SampleDetails, SampleFile, SampleSheetEntry, TokenPair, Upload,
    UploadDetails, UploadRef,
};
