//! Single entry point wiring one client into every service

use std::sync::Arc;

use jobboard_domain::ClientConfig;
use tracing::info;

use super::client::{ApiClient, ApiClientConfig};
use super::errors::ApiError;
use super::services::{AuthService, EmployerService, PaymentService, PlanService};
use super::token_store::TokenStore;
use super::unauthorized::SharedUnauthorizedHandler;
use crate::storage;

/// All JobBoard services over one shared [`ApiClient`]
///
/// Built once by the application shell and passed to whatever needs API
/// access; there is no global instance.
pub struct JobBoardApi {
    client: Arc<ApiClient>,
    auth: AuthService,
    employer: EmployerService,
    payment: PaymentService,
    plan: PlanService,
}

impl JobBoardApi {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self {
            auth: AuthService::new(client.clone()),
            employer: EmployerService::new(client.clone()),
            payment: PaymentService::new(client.clone()),
            plan: PlanService::new(client.clone()),
            client,
        }
    }

    /// Build the storage backend, client and services from configuration
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Config` if the client cannot be created
    pub fn from_config(
        config: &ClientConfig,
        on_unauthorized: Option<SharedUnauthorizedHandler>,
    ) -> Result<Self, ApiError> {
        let token_store = TokenStore::new(storage::from_config(&config.storage));
        let client = ApiClient::builder()
            .config(ApiClientConfig::from(&config.api))
            .token_store(token_store)
            .unauthorized_handler(on_unauthorized)
            .build()?;

        info!(
            base_url = %client.base_url(),
            storage = %config.storage.backend,
            "JobBoard API client ready"
        );
        Ok(Self::new(Arc::new(client)))
    }

    pub fn client(&self) -> &Arc<ApiClient> {
        &self.client
    }

    pub fn token_store(&self) -> &TokenStore {
        self.client.token_store()
    }

    pub fn auth(&self) -> &AuthService {
        &self.auth
    }

    pub fn employer(&self) -> &EmployerService {
        &self.employer
    }

    pub fn payment(&self) -> &PaymentService {
        &self.payment
    }

    pub fn plan(&self) -> &PlanService {
        &self.plan
    }
}
