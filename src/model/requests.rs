/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 12/11/25
******************************************************************************/
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};

#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize)]
/// Body of the `jwt-create` login call
pub struct LoginRequest {
    /// Email address of the Gencove account
    pub email: String,
    /// Password of the Gencove account
    pub password: String,
    /// One-time password, only sent for accounts with MFA enabled
    #[serde(skip_serializing_if = "Option::is_none")]
    pub otp_token: Option<String>,
}

#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize)]
/// Body of the `jwt-refresh` call exchanging a refresh token for a new access token
pub struct RefreshRequest {
    /// The refresh token currently held by the session
    pub refresh: String,
}

#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize)]
/// Body for creating an analysis batch within a project
pub struct CreateBatchRequest {
    /// Display name of the batch
    pub name: String,
    /// Pipeline batch type key, as returned by the batch-types endpoint
    pub batch_type: String,
    /// Samples to include in the batch
    pub sample_ids: Vec<String>,
}

#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize)]
/// Body for deleting one or more projects
pub struct DeleteProjectsRequest {
    /// IDs of the projects to delete
    pub projects: Vec<String>,
}

#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize)]
/// Body for resolving an upload destination into S3 post data
pub struct UploadDetailsRequest {
    /// Logical `gncv://` destination path of the upload
    pub destination_path: String,
}

#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize)]
/// Body for replacing the free-form metadata attached to a sample
pub struct SampleMetadataRequest {
    /// Arbitrary JSON metadata; `null` clears the stored metadata
    pub metadata: serde_json::Value,
}
