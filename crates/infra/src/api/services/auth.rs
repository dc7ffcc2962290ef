//! Authentication and registration service
//!
//! The only service that writes the session: login and the final
//! registration steps store the returned token, logout clears it.

use std::sync::Arc;

use jobboard_domain::types::{
    AuthResponse, EmployeeFinalRequest, EmployeeStep1Request, EmployeeStep2Request,
    EmployerRegistrationRequest, LoginRequest, RegistrationStepResponse, UserSummary,
};
use serde::de::IgnoredAny;
use tracing::{debug, info, instrument, warn};

use crate::api::client::ApiClient;
use crate::api::errors::ApiError;
use crate::api::token_store::TokenStore;

/// Auth endpoints under `/auth`
pub struct AuthService {
    client: Arc<ApiClient>,
}

impl AuthService {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// Sign in with an email or phone identifier
    ///
    /// On success the returned token and user type are written to the token
    /// store before this returns. Nothing is written on failure.
    ///
    /// # Errors
    ///
    /// Returns error if the credentials are rejected, the request fails or
    /// the session cannot be stored
    #[instrument(skip(self, password))]
    pub async fn login(&self, identifier: &str, password: &str) -> Result<AuthResponse, ApiError> {
        let request =
            LoginRequest { identifier: identifier.to_string(), password: password.to_string() };

        let response: AuthResponse = self.client.post("/auth/login", &request).await?;
        self.store_session(&response).await?;

        info!(user_type = %response.user_type, "Logged in");
        Ok(response)
    }

    /// Sign out
    ///
    /// The local session is cleared whatever the server answers; the remote
    /// outcome is still returned so callers can report it. If this future is
    /// dropped before the server answers, the clear is spawned onto the
    /// current runtime instead.
    #[instrument(skip(self))]
    pub async fn logout(&self) -> Result<(), ApiError> {
        let guard = ClearOnDrop::new(self.client.token_store().clone());
        let remote: Result<IgnoredAny, ApiError> = self.client.post_empty("/auth/logout").await;

        self.client.token_store().clear().await;
        guard.disarm();

        match remote {
            Ok(_) => {
                info!("Logged out");
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "Remote logout failed, local session cleared");
                Err(e)
            }
        }
    }

    /// Employee registration, step 1: identity and credentials
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn register_employee_step1(
        &self,
        request: &EmployeeStep1Request,
    ) -> Result<RegistrationStepResponse, ApiError> {
        let response: RegistrationStepResponse =
            self.client.post("/auth/register/employee-step1", request).await?;

        debug!(registration_id = %response.registration_id, "Employee registration started");
        Ok(response)
    }

    /// Employee registration, step 2: profile details
    #[instrument(skip(self, request), fields(registration_id = %request.registration_id))]
    pub async fn register_employee_step2(
        &self,
        request: &EmployeeStep2Request,
    ) -> Result<RegistrationStepResponse, ApiError> {
        self.client.post("/auth/register/employee-step2", request).await
    }

    /// Employee registration, final step
    ///
    /// Completes the account and signs the employee in.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the session cannot be stored
    #[instrument(skip(self, request), fields(registration_id = %request.registration_id))]
    pub async fn register_employee_final(
        &self,
        request: &EmployeeFinalRequest,
    ) -> Result<AuthResponse, ApiError> {
        let response: AuthResponse =
            self.client.post("/auth/register/employee-final", request).await?;
        self.store_session(&response).await?;

        info!("Employee registration completed");
        Ok(response)
    }

    /// Employer registration; a single step that also signs the employer in
    #[instrument(skip(self, request), fields(company = %request.company_name))]
    pub async fn register_employer(
        &self,
        request: &EmployerRegistrationRequest,
    ) -> Result<AuthResponse, ApiError> {
        let response: AuthResponse = self.client.post("/auth/register/employer", request).await?;
        self.store_session(&response).await?;

        info!("Employer registration completed");
        Ok(response)
    }

    /// Account behind the current session
    #[instrument(skip(self))]
    pub async fn current_user(&self) -> Result<UserSummary, ApiError> {
        self.client.get("/auth/me").await
    }

    async fn store_session(&self, response: &AuthResponse) -> Result<(), ApiError> {
        self.client
            .token_store()
            .set_token(&response.token, &response.user_type)
            .await
            .map_err(ApiError::from)
    }
}

/// Clears the session on drop unless disarmed
struct ClearOnDrop {
    store: Option<TokenStore>,
}

impl ClearOnDrop {
    fn new(store: TokenStore) -> Self {
        Self { store: Some(store) }
    }

    fn disarm(mut self) {
        self.store = None;
    }
}

impl Drop for ClearOnDrop {
    fn drop(&mut self) {
        let Some(store) = self.store.take() else {
            return;
        };
        match tokio::runtime::Handle::try_current() {
            Ok(handle) => {
                warn!("Logout cancelled, clearing session in the background");
                handle.spawn(async move { store.clear().await });
            }
            Err(_) => warn!("Logout cancelled outside a runtime, session not cleared"),
        }
    }
}

#[cfg(test)]
mod tests {
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;
    use crate::api::client::ApiClientConfig;

    async fn service_for(server: &MockServer) -> (AuthService, TokenStore) {
        let store = TokenStore::in_memory();
        let config = ApiClientConfig { base_url: server.uri(), ..Default::default() };
        let client = ApiClient::builder().config(config).token_store(store.clone()).build().unwrap();
        (AuthService::new(Arc::new(client)), store)
    }

    #[tokio::test]
    async fn test_step1_returns_registration_id() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/auth/register/employee-step1"))
            .and(body_json(serde_json::json!({
                "fullName": "Asha Rao",
                "email": "asha@example.com",
                "phone": "9876543210",
                "password": "secret"
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
                "registrationId": "reg-1",
                "message": "Step 1 complete"
            })))
            .mount(&mock_server)
            .await;

        let (service, store) = service_for(&mock_server).await;
        let request = EmployeeStep1Request {
            full_name: "Asha Rao".into(),
            email: "asha@example.com".into(),
            phone: "9876543210".into(),
            password: "secret".into(),
        };

        let response = service.register_employee_step1(&request).await.unwrap();
        assert_eq!(response.registration_id, "reg-1");
        // Intermediate steps never sign in
        assert_eq!(store.token().await, None);
    }

    #[tokio::test]
    async fn test_failed_login_writes_nothing() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/auth/login"))
            .respond_with(
                ResponseTemplate::new(400)
                    .set_body_json(serde_json::json!({ "message": "Invalid credentials" })),
            )
            .mount(&mock_server)
            .await;

        let (service, store) = service_for(&mock_server).await;

        let err = service.login("asha@example.com", "wrong").await.unwrap_err();
        assert_eq!(err.user_message(), "Invalid credentials");
        assert!(!store.is_authenticated().await);
    }

    #[tokio::test]
    async fn test_employer_registration_signs_in() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/auth/register/employer"))
            .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
                "token": "employer-token",
                "userType": "employer"
            })))
            .mount(&mock_server)
            .await;

        let (service, store) = service_for(&mock_server).await;
        let request = EmployerRegistrationRequest {
            company_name: "Acme Hiring".into(),
            contact_person: "Ravi".into(),
            email: "hr@acme.test".into(),
            phone: "9000000000".into(),
            password: "secret".into(),
            industry: None,
            website: None,
        };

        service.register_employer(&request).await.unwrap();
        assert_eq!(store.token().await.as_deref(), Some("employer-token"));
        assert_eq!(store.user_type().await.as_deref(), Some("employer"));
    }
}
