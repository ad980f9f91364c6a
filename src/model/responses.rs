/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 12/11/25
******************************************************************************/
use chrono::{DateTime, Utc};
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use serde::de::DeserializeOwned;

#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, Default)]
/// Pagination metadata carried by every list response
pub struct PageMeta {
    /// Total number of items across all pages, when the server reports it
    pub count: Option<u64>,
    /// URL of the next page; `None` on the last page
    pub next: Option<String>,
    /// URL of the previous page; `None` on the first page
    pub previous: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: DeserializeOwned", serialize = "T: Serialize"))]
/// One page of a paginated list response: `{meta: {...}, results: [...]}`
pub struct Page<T> {
    /// Pagination metadata
    pub meta: PageMeta,
    /// Items on this page; may be empty on the first page of an empty listing
    pub results: Vec<T>,
}

#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize)]
/// JWT pair returned by the `jwt-create` endpoint
pub struct TokenPair {
    /// Short-lived access token
    pub access: String,
    /// Longer-lived refresh token
    pub refresh: String,
}

#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize)]
/// New access token returned by the `jwt-refresh` endpoint
pub struct AccessToken {
    /// Short-lived access token
    pub access: String,
}

#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize)]
/// A Gencove project
pub struct Project {
    /// Project ID
    pub id: String,
    /// Display name of the project
    pub name: String,
    /// Free-form project description
    pub description: Option<String>,
    /// ID of the organization owning the project
    pub organization: Option<String>,
    /// Number of samples assigned to the project
    pub sample_count: Option<u64>,
    /// Pipeline capabilities key configured for the project
    pub pipeline_capabilities: Option<String>,
    /// Creation timestamp
    pub created: Option<DateTime<Utc>>,
}

#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize)]
/// Most recent status of a sample, batch or upload
pub struct EntityStatus {
    /// Status record ID
    pub id: Option<String>,
    /// Status name, e.g. `succeeded`, `failed`, `running`
    pub status: String,
    /// When the status was recorded
    pub created: Option<DateTime<Utc>>,
}

#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize)]
/// A sample as returned by project listing endpoints
pub struct Sample {
    /// Sample ID
    pub id: String,
    /// Caller-supplied sample identifier
    pub client_id: Option<String>,
    /// Physical well/plate identifier, when tracked
    pub physical_id: Option<String>,
    /// ID of the sequencing run the sample belongs to
    pub run: Option<String>,
    /// Latest analysis status
    pub last_status: Option<EntityStatus>,
    /// Latest archive status of the sample's files
    pub archive_last_status: Option<EntityStatus>,
    /// Creation timestamp
    pub created: Option<DateTime<Utc>>,
}

#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize)]
/// A single deliverable file attached to a sample
pub struct SampleFile {
    /// File ID
    pub id: String,
    /// Deliverable type key, e.g. `fastq-r1`, `vcf`, `bam`
    pub file_type: Option<String>,
    /// File size in bytes
    pub size: Option<u64>,
    /// Pre-signed download URL; short-lived
    pub download_url: Option<String>,
}

#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize)]
/// Full detail view of a sample, including its deliverable files
pub struct SampleDetails {
    /// Sample ID
    pub id: String,
    /// Caller-supplied sample identifier
    pub client_id: Option<String>,
    /// Latest analysis status
    pub last_status: Option<EntityStatus>,
    /// Archive status of the sample's files
    pub archive_last_status: Option<EntityStatus>,
    /// Deliverable files produced for this sample
    #[serde(default)]
    pub files: Vec<SampleFile>,
}

#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize)]
/// One quality-control metric for a sample
pub struct QualityControl {
    /// Metric key, e.g. `mean_coverage`, `contamination`
    pub quality_control_type: String,
    /// Measured value
    pub value: Option<f64>,
    /// Pass/fail verdict for this metric
    pub status: Option<String>,
}

#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize)]
/// An analysis batch within a project
pub struct Batch {
    /// Batch ID
    pub id: String,
    /// Display name of the batch
    pub name: Option<String>,
    /// Pipeline batch type key
    pub batch_type: Option<String>,
    /// Latest batch status
    pub last_status: Option<EntityStatus>,
    /// Deliverable files produced by the batch
    #[serde(default)]
    pub files: Vec<SampleFile>,
}

#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize)]
/// An uploaded file addressed by its logical `gncv://` path
pub struct Upload {
    /// Upload ID
    pub id: String,
    /// Logical `gncv://` destination path
    pub destination_path: String,
    /// Latest upload status
    pub last_status: Option<EntityStatus>,
    /// Creation timestamp
    pub created: Option<DateTime<Utc>>,
}

#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize)]
/// Physical S3 location backing an upload
pub struct S3Object {
    /// Bucket name
    pub bucket: String,
    /// Object key within the bucket
    pub object_name: String,
}

#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize)]
/// Resolution of a `gncv://` destination into a concrete S3 target
pub struct UploadDetails {
    /// Upload ID
    pub id: String,
    /// Logical `gncv://` destination path
    pub destination_path: String,
    /// Physical S3 location to upload to
    pub s3: Option<S3Object>,
    /// Latest upload status
    pub last_status: Option<EntityStatus>,
}

#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize)]
/// Reference from a sample-sheet entry to a stored upload
pub struct UploadRef {
    /// Upload ID
    pub upload: String,
    /// Logical `gncv://` destination path of the upload
    pub destination_path: String,
}

#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize)]
/// Paired FASTQ uploads for one sample-sheet entry
pub struct FastqPair {
    /// Forward reads
    pub r1: Option<UploadRef>,
    /// Reverse reads, absent for single-end runs
    pub r2: Option<UploadRef>,
}

#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize)]
/// One row of the sample sheet grouping uploads by client ID
pub struct SampleSheetEntry {
    /// Caller-supplied sample identifier
    pub client_id: Option<String>,
    /// FASTQ uploads grouped under this client ID
    pub fastq: Option<FastqPair>,
}
