//! Employer profile, job posting and application management

use std::sync::Arc;

use jobboard_domain::types::{
    ApiEnvelope, ApplicationStatus, EmployerDashboardStats, EmployerProfile, JobApplication,
    JobListQuery, JobPosting, JobPostingRequest, MessageResponse, Paginated,
    UpdateApplicationStatusRequest, UpdateEmployerProfileRequest,
};
use tracing::{debug, instrument};
use urlencoding::encode;

use crate::api::client::ApiClient;
use crate::api::errors::ApiError;

/// Employer endpoints under `/employer`
pub struct EmployerService {
    client: Arc<ApiClient>,
}

impl EmployerService {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    // === Profile ===

    #[instrument(skip(self))]
    pub async fn profile(&self) -> Result<EmployerProfile, ApiError> {
        let response: ApiEnvelope<EmployerProfile> = self.client.get("/employer/profile").await?;
        Ok(response.into_data())
    }

    /// Update the fields set on `request`; unset fields are left unchanged
    #[instrument(skip(self, request))]
    pub async fn update_profile(
        &self,
        request: &UpdateEmployerProfileRequest,
    ) -> Result<EmployerProfile, ApiError> {
        let response: ApiEnvelope<EmployerProfile> =
            self.client.put("/employer/profile", request).await?;
        Ok(response.into_data())
    }

    // === Job postings ===

    /// List the employer's postings, one page at a time
    ///
    /// # Arguments
    ///
    /// * `query` - Page, page size and status filter; unset filters are not sent
    ///
    /// # Errors
    ///
    /// Returns error if API request fails
    #[instrument(skip(self))]
    pub async fn list_jobs(&self, query: &JobListQuery) -> Result<Paginated<JobPosting>, ApiError> {
        let response: ApiEnvelope<Paginated<JobPosting>> =
            self.client.get_with_query("/employer/jobs", query.to_query_pairs()).await?;
        let page = response.into_data();

        debug!(count = page.items.len(), total = page.pagination.total, "Jobs listed");
        Ok(page)
    }

    #[instrument(skip(self), fields(job_id = %id))]
    pub async fn job(&self, id: &str) -> Result<JobPosting, ApiError> {
        let path = format!("/employer/jobs/{}", encode(id));
        let response: ApiEnvelope<JobPosting> = self.client.get(&path).await?;
        Ok(response.into_data())
    }

    #[instrument(skip(self, request), fields(title = %request.title))]
    pub async fn create_job(&self, request: &JobPostingRequest) -> Result<JobPosting, ApiError> {
        let response: ApiEnvelope<JobPosting> = self.client.post("/employer/jobs", request).await?;
        let job = response.into_data();

        debug!(job_id = %job.id, "Job created");
        Ok(job)
    }

    #[instrument(skip(self, request), fields(job_id = %id))]
    pub async fn update_job(
        &self,
        id: &str,
        request: &JobPostingRequest,
    ) -> Result<JobPosting, ApiError> {
        let path = format!("/employer/jobs/{}", encode(id));
        let response: ApiEnvelope<JobPosting> = self.client.put(&path, request).await?;
        Ok(response.into_data())
    }

    #[instrument(skip(self), fields(job_id = %id))]
    pub async fn delete_job(&self, id: &str) -> Result<MessageResponse, ApiError> {
        let path = format!("/employer/jobs/{}", encode(id));
        self.client.delete(&path).await
    }

    // === Applications ===

    #[instrument(skip(self), fields(job_id = %job_id))]
    pub async fn job_applications(&self, job_id: &str) -> Result<Vec<JobApplication>, ApiError> {
        let path = format!("/employer/jobs/{}/applications", encode(job_id));
        let response: ApiEnvelope<Vec<JobApplication>> = self.client.get(&path).await?;
        Ok(response.into_data())
    }

    #[instrument(skip(self), fields(application_id = %id, status = %status))]
    pub async fn update_application_status(
        &self,
        id: &str,
        status: ApplicationStatus,
    ) -> Result<JobApplication, ApiError> {
        let path = format!("/employer/applications/{}/status", encode(id));
        let request = UpdateApplicationStatusRequest { status };
        let response: ApiEnvelope<JobApplication> = self.client.put(&path, &request).await?;
        Ok(response.into_data())
    }

    // === Dashboard ===

    #[instrument(skip(self))]
    pub async fn dashboard_stats(&self) -> Result<EmployerDashboardStats, ApiError> {
        let response: ApiEnvelope<EmployerDashboardStats> =
            self.client.get("/employer/dashboard").await?;
        Ok(response.into_data())
    }
}

#[cfg(test)]
mod tests {
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;
    use crate::api::client::ApiClientConfig;
    use crate::api::token_store::TokenStore;

    fn service_for(server: &MockServer) -> EmployerService {
        let config = ApiClientConfig { base_url: server.uri(), ..Default::default() };
        let client = ApiClient::builder()
            .config(config)
            .token_store(TokenStore::in_memory())
            .build()
            .unwrap();
        EmployerService::new(Arc::new(client))
    }

    #[tokio::test]
    async fn test_update_application_status_encodes_id() {
        let mock_server = MockServer::start().await;

        Mock::given(method("PUT"))
            .and(path("/employer/applications/app%2F7/status"))
            .and(body_json(serde_json::json!({ "status": "shortlisted" })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "success": true,
                "data": {
                    "id": "app/7",
                    "jobId": "job-1",
                    "applicantName": "Asha Rao",
                    "applicantEmail": "asha@example.com",
                    "status": "shortlisted",
                    "appliedAt": "2026-03-01T10:00:00Z"
                }
            })))
            .mount(&mock_server)
            .await;

        let service = service_for(&mock_server);

        let application =
            service.update_application_status("app/7", ApplicationStatus::Shortlisted).await.unwrap();
        assert_eq!(application.id, "app/7");
        assert_eq!(application.status, ApplicationStatus::Shortlisted);
    }

    #[tokio::test]
    async fn test_delete_job_returns_acknowledgement() {
        let mock_server = MockServer::start().await;

        Mock::given(method("DELETE"))
            .and(path("/employer/jobs/job-9"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "success": true,
                "message": "Job deleted"
            })))
            .mount(&mock_server)
            .await;

        let service = service_for(&mock_server);

        let ack = service.delete_job("job-9").await.unwrap();
        assert!(ack.success);
        assert_eq!(ack.message.as_deref(), Some("Job deleted"));
    }

    #[tokio::test]
    async fn test_dashboard_stats_unwraps_envelope() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/employer/dashboard"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "success": true,
                "data": { "totalJobs": 4, "activeJobs": 2, "totalApplications": 31, "shortlisted": 5 }
            })))
            .mount(&mock_server)
            .await;

        let service = service_for(&mock_server);

        let stats = service.dashboard_stats().await.unwrap();
        assert_eq!(stats.total_applications, 31);
        assert_eq!(stats.active_jobs, 2);
    }

    #[tokio::test]
    async fn test_missing_job_is_client_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/employer/jobs/nope"))
            .respond_with(
                ResponseTemplate::new(404)
                    .set_body_json(serde_json::json!({ "success": false, "message": "Job not found" })),
            )
            .mount(&mock_server)
            .await;

        let service = service_for(&mock_server);

        let err = service.job("nope").await.unwrap_err();
        assert!(matches!(err, ApiError::Client(_)));
        assert_eq!(err.user_message(), "Job not found");
    }
}
