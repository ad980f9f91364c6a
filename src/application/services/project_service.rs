/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 15/11/25
******************************************************************************/
use crate::application::pagination::Paginator;
use crate::application::services::ProjectService;
use crate::config::Config;
use crate::error::AppError;
use crate::model::requests::{CreateBatchRequest, DeleteProjectsRequest};
use crate::model::responses::{Batch, Project, Sample};
use crate::transport::http_client::GencoveHttpClient;
use async_trait::async_trait;
use reqwest::Method;
use std::sync::Arc;
use tracing::{debug, info};

/// Implementation of the project service
pub struct ProjectServiceImpl<T: GencoveHttpClient> {
    config: Arc<Config>,
    client: Arc<T>,
}

impl<T: GencoveHttpClient> ProjectServiceImpl<T> {
    /// Creates a new instance of the project service
    pub fn new(config: Arc<Config>, client: Arc<T>) -> Self {
        Self { config, client }
    }

    /// Lazy paginator over all projects
    pub fn projects(&self) -> Paginator<'_, T, Project> {
        Paginator::new(
            self.client.as_ref(),
            "api/v2/projects/",
            self.config.page_size,
        )
    }

    /// Lazy paginator over the samples of a project
    pub fn project_samples(&self, project_id: &str) -> Paginator<'_, T, Sample> {
        Paginator::new(
            self.client.as_ref(),
            format!("api/v2/project-samples/{project_id}"),
            self.config.page_size,
        )
    }

    /// Lazy paginator over the batches of a project
    pub fn project_batches(&self, project_id: &str) -> Paginator<'_, T, Batch> {
        Paginator::new(
            self.client.as_ref(),
            format!("api/v2/project-batches/{project_id}"),
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
impl<T: GencoveHttpClient + 'static> ProjectService for ProjectServiceImpl<T> {
    async fn list_projects(&self) -> Result<Vec<Project>, AppError> {
        info!("listing projects");

        let result = self.projects().collect_all().await?;

        debug!("projects obtained: {}", result.len());
        Ok(result)
    }

    async fn get_project(&self, project_id: &str) -> Result<Project, AppError> {
        require_id(project_id, "project id")?;
        debug!("getting project {}", project_id);

        self.client
            .request::<(), Project>(
                Method::GET,
                &format!("api/v2/projects/{project_id}"),
                None,
                None,
            )
            .await
    }

    async fn list_project_samples(&self, project_id: &str) -> Result<Vec<Sample>, AppError> {
        require_id(project_id, "project id")?;
        info!("listing samples of project {}", project_id);

        let result = self.project_samples(project_id).collect_all().await?;

        debug!("samples obtained: {}", result.len());
        Ok(result)
    }

    async fn list_batches(&self, project_id: &str) -> Result<Vec<Batch>, AppError> {
        require_id(project_id, "project id")?;
        info!("listing batches of project {}", project_id);

        let result = self.project_batches(project_id).collect_all().await?;

        debug!("batches obtained: {}", result.len());
        Ok(result)
    }

    async fn get_batch(&self, batch_id: &str) -> Result<Batch, AppError> {
        require_id(batch_id, "batch id")?;
        debug!("getting batch {}", batch_id);

        self.client
            .request::<(), Batch>(Method::GET, &format!("api/v2/batches/{batch_id}"), None, None)
            .await
    }

    async fn create_batch(
        &self,
        project_id: &str,
        request: &CreateBatchRequest,
    ) -> Result<Batch, AppError> {
        require_id(project_id, "project id")?;
        if request.sample_ids.is_empty() {
            return Err(AppError::InvalidInput(String::from(
                "batch requires at least one sample",
            )));
        }

        info!(
            "creating batch '{}' with {} samples in project {}",
            request.name,
            request.sample_ids.len(),
            project_id
        );

        self.client
            .request::<CreateBatchRequest, Batch>(
                Method::POST,
                &format!("api/v2/project-batches/{project_id}"),
                None,
                Some(request),
            )
            .await
    }

    async fn delete_projects(&self, project_ids: &[String]) -> Result<(), AppError> {
        if project_ids.is_empty() {
            return Err(AppError::InvalidInput(String::from(
                "no projects to delete",
            )));
        }

        info!("deleting {} projects", project_ids.len());

        let body = DeleteProjectsRequest {
            projects: project_ids.to_vec(),
        };

        // The body of a successful delete is empty
        self.client
            .request::<DeleteProjectsRequest, serde_json::Value>(
                Method::DELETE,
                "api/v2/projects/",
                None,
                Some(&body),
            )
            .await?;

        Ok(())
    }
}
