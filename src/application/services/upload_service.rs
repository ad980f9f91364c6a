/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 15/11/25
******************************************************************************/
use crate::application::pagination::Paginator;
use crate::application::services::UploadService;
use crate::config::Config;
use crate::constants::GNCV_SCHEME;
use crate::error::AppError;
use crate::model::requests::UploadDetailsRequest;
use crate::model::responses::{SampleSheetEntry, Upload, UploadDetails};
use crate::transport::http_client::GencoveHttpClient;
use async_trait::async_trait;
use reqwest::Method;
use std::sync::Arc;
use tracing::{debug, info};

/// Implementation of the upload service
pub struct UploadServiceImpl<T: GencoveHttpClient> {
    config: Arc<Config>,
    client: Arc<T>,
}

impl<T: GencoveHttpClient> UploadServiceImpl<T> {
    /// Creates a new instance of the upload service
    pub fn new(config: Arc<Config>, client: Arc<T>) -> Self {
        Self { config, client }
    }

    /// Lazy paginator over all uploads
    pub fn uploads(&self) -> Paginator<'_, T, Upload> {
        Paginator::new(
            self.client.as_ref(),
            "api/v2/uploads/",
            self.config.page_size,
        )
    }

    /// Lazy paginator over the sample sheet
    ///
    /// # Arguments
    /// * `gncv_prefix` - Restricts entries to uploads under this `gncv://` prefix
    /// * `status` - Restricts entries by assignment status, e.g. `unassigned`
    pub fn sample_sheet(
        &self,
        gncv_prefix: Option<&str>,
        status: Option<&str>,
    ) -> Paginator<'_, T, SampleSheetEntry> {
        let mut pager = Paginator::new(
            self.client.as_ref(),
            "api/v2/sample-sheet/",
            self.config.page_size,
        );
        if let Some(prefix) = gncv_prefix {
            pager = pager.with_query("search", prefix);
        }
        if let Some(status) = status {
            pager = pager.with_query("status", status);
        }
        pager
    }
}

/// Checks that a destination is a `gncv://` path
fn validate_gncv_path(destination_path: &str) -> Result<(), AppError> {
    if !destination_path.starts_with(GNCV_SCHEME) {
        return Err(AppError::InvalidInput(format!(
            "destination path must start with {GNCV_SCHEME}: {destination_path}"
        )));
    }
    if destination_path.len() == GNCV_SCHEME.len() {
        return Err(AppError::InvalidInput(String::from(
            "destination path must not be empty",
        )));
    }
    Ok(())
}

#[async_trait]
impl<T: GencoveHttpClient + 'static> UploadService for UploadServiceImpl<T> {
    async fn list_uploads(&self) -> Result<Vec<Upload>, AppError> {
        info!("listing uploads");

        let result = self.uploads().collect_all().await?;

        debug!("uploads obtained: {}", result.len());
        Ok(result)
    }

    async fn get_upload_details(
        &self,
        destination_path: &str,
    ) -> Result<UploadDetails, AppError> {
        validate_gncv_path(destination_path)?;
        info!("resolving upload destination {}", destination_path);

        let body = UploadDetailsRequest {
            destination_path: destination_path.to_string(),
        };

        self.client
            .request::<UploadDetailsRequest, UploadDetails>(
                Method::POST,
                "api/v2/uploads-post-data/",
                None,
                Some(&body),
            )
            .await
    }

    async fn list_sample_sheet(
        &self,
        gncv_prefix: Option<&str>,
        status: Option<&str>,
    ) -> Result<Vec<SampleSheetEntry>, AppError> {
        if let Some(prefix) = gncv_prefix {
            validate_gncv_path(prefix)?;
        }
        info!("listing sample sheet");

        let result = self.sample_sheet(gncv_prefix, status).collect_all().await?;

        debug!("sample sheet entries obtained: {}", result.len());
        Ok(result)
    }
}
