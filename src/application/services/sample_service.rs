/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 15/11/25
******************************************************************************/
use crate::application::pagination::Paginator;
use crate::application::services::SampleService;
use crate::config::Config;
use crate::error::AppError;
use crate::model::requests::SampleMetadataRequest;
use crate::model::responses::{QualityControl, SampleDetails};
use crate::transport::http_client::GencoveHttpClient;
use async_trait::async_trait;
use reqwest::Method;
use std::sync::Arc;
use tracing::{debug, info};

/// Implementation of the sample service
pub struct SampleServiceImpl<T: GencoveHttpClient> {
    config: Arc<Config>,
    client: Arc<T>,
}

impl<T: GencoveHttpClient> SampleServiceImpl<T> {
    /// Creates a new instance of the sample service
    pub fn new(config: Arc<Config>, client: Arc<T>) -> Self {
        Self { config, client }
    }

    /// Lazy paginator over the quality-control metrics of a sample
    pub fn quality_controls(&self, sample_id: &str) -> Paginator<'_, T, QualityControl> {
        Paginator::new(
            self.client.as_ref(),
            format!("api/v2/sample-quality-controls/{sample_id}"),
            self.config.page_size,
        )
    }
}

fn require_id(value: &str, what: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::InvalidInput(format!("{what} must not be empty")));
    }
    Ok(())
}

#[async_trait]
impl<T: GencoveHttpClient + 'static> SampleService for SampleServiceImpl<T> {
    async fn get_sample_details(&self, sample_id: &str) -> Result<SampleDetails, AppError> {
        require_id(sample_id, "sample id")?;
        debug!("getting details of sample {}", sample_id);

        self.client
            .request::<(), SampleDetails>(
                Method::GET,
                &format!("api/v2/sample-details/{sample_id}"),
                None,
                None,
            )
            .await
    }

    async fn get_quality_controls(
        &self,
        sample_id: &str,
    ) -> Result<Vec<QualityControl>, AppError> {
        require_id(sample_id, "sample id")?;
        info!("getting quality controls of sample {}", sample_id);

        let result = self.quality_controls(sample_id).collect_all().await?;

        debug!("quality controls obtained: {}", result.len());
        Ok(result)
    }

    async fn get_download_url(
        &self,
        sample_id: &str,
        file_type: &str,
    ) -> Result<String, AppError> {
        require_id(sample_id, "sample id")?;
        require_id(file_type, "file type")?;
        debug!("resolving {} download url for sample {}", file_type, sample_id);

        let details = self.get_sample_details(sample_id).await?;

        details
            .files
            .iter()
            .find(|file| file.file_type.as_deref() == Some(file_type))
            .and_then(|file| file.download_url.clone())
            .ok_or_else(|| {
                AppError::InvalidInput(format!(
                    "sample {sample_id} has no downloadable {file_type} file"
                ))
            })
    }

    async fn update_sample_metadata(
        &self,
        sample_id: &str,
        metadata: &serde_json::Value,
    ) -> Result<serde_json::Value, AppError> {
        require_id(sample_id, "sample id")?;
        info!("updating metadata of sample {}", sample_id);

        let body = SampleMetadataRequest {
            metadata: metadata.clone(),
        };

        self.client
            .request::<SampleMetadataRequest, serde_json::Value>(
                Method::POST,
                &format!("api/v2/sample-metadata/{sample_id}"),
                None,
                Some(&body),
            )
            .await
    }
}
