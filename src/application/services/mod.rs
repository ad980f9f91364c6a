/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 15/11/25
******************************************************************************/

//! Per-entity services for the Gencove API
//!
//! Each service is a trait plus an implementation generic over
//! [`GencoveHttpClient`](crate::transport::http_client::GencoveHttpClient),
//! so it can run against a mock transport in tests. Listing operations are
//! backed by the cursor paginator; the concrete implementations additionally
//! expose the paginators themselves for callers that want lazy pages.
//!
//! Mutating operations (batch creation, project deletion, metadata updates)
//! are issued exactly once and are never wrapped in the timeout-retry policy.

/// Project operations: listing, samples, batches, deletion
pub mod project_service;
/// Sample operations: details, quality controls, file download URLs, metadata
pub mod sample_service;
/// Upload operations: listing, post data, sample sheet
pub mod upload_service;

use crate::error::AppError;
use crate::model::requests::CreateBatchRequest;
use crate::model::responses::{
    Batch, Project, QualityControl, Sample, SampleDetails, SampleSheetEntry, Upload, UploadDetails,
};
use async_trait::async_trait;

/// Project operations against the Gencove API
#[async_trait]
pub trait ProjectService: Send + Sync {
    /// Lists every project visible to the authenticated account
    async fn list_projects(&self) -> Result<Vec<Project>, AppError>;

    /// Gets one project by ID
    async fn get_project(&self, project_id: &str) -> Result<Project, AppError>;

    /// Lists every sample assigned to a project
    async fn list_project_samples(&self, project_id: &str) -> Result<Vec<Sample>, AppError>;

    /// Lists every analysis batch of a project
    async fn list_batches(&self, project_id: &str) -> Result<Vec<Batch>, AppError>;

    /// Gets one batch by ID
    async fn get_batch(&self, batch_id: &str) -> Result<Batch, AppError>;

    /// Creates an analysis batch; issued exactly once, never retried
    async fn create_batch(
        &self,
        project_id: &str,
        request: &CreateBatchRequest,
    ) -> Result<Batch, AppError>;

    /// Deletes the given projects; issued exactly once, never retried
    async fn delete_projects(&self, project_ids: &[String]) -> Result<(), AppError>;
}

/// Sample operations against the Gencove API
#[async_trait]
pub trait SampleService: Send + Sync {
    /// Gets the full detail view of a sample, including deliverable files
    async fn get_sample_details(&self, sample_id: &str) -> Result<SampleDetails, AppError>;

    /// Gets the quality-control metrics recorded for a sample
    async fn get_quality_controls(&self, sample_id: &str)
    -> Result<Vec<QualityControl>, AppError>;

    /// Resolves the pre-signed download URL of one deliverable file type
    async fn get_download_url(
        &self,
        sample_id: &str,
        file_type: &str,
    ) -> Result<String, AppError>;

    /// Replaces the free-form metadata attached to a sample; never retried
    async fn update_sample_metadata(
        &self,
        sample_id: &str,
        metadata: &serde_json::Value,
    ) -> Result<serde_json::Value, AppError>;
}

/// Upload operations against the Gencove API
#[async_trait]
pub trait UploadService: Send + Sync {
    /// Lists every upload of the authenticated account
    async fn list_uploads(&self) -> Result<Vec<Upload>, AppError>;

    /// Resolves a `gncv://` destination into S3 post data, creating the
    /// upload record when it does not exist yet
    async fn get_upload_details(&self, destination_path: &str)
    -> Result<UploadDetails, AppError>;

    /// Lists the sample sheet, optionally filtered by `gncv://` path prefix
    /// and assignment status
    async fn list_sample_sheet(
        &self,
        gncv_prefix: Option<&str>,
        status: Option<&str>,
    ) -> Result<Vec<SampleSheetEntry>, AppError>;
}
