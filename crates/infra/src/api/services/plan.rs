//! Subscription plans and the employee's active subscription

use std::sync::Arc;

use jobboard_domain::types::{ApiEnvelope, EmployeePlan, MessageResponse, Plan, SubscribeRequest};
use tracing::{debug, instrument};

use crate::api::client::ApiClient;
use crate::api::errors::ApiError;

/// Plan catalogue and employee subscription endpoints
pub struct PlanService {
    client: Arc<ApiClient>,
}

impl PlanService {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// Public plan catalogue
    #[instrument(skip(self))]
    pub async fn list_plans(&self) -> Result<Vec<Plan>, ApiError> {
        let response: ApiEnvelope<Vec<Plan>> = self.client.get("/plans/").await?;
        let plans = response.into_data();

        debug!(count = plans.len(), "Plans listed");
        Ok(plans)
    }

    /// Current subscription, `None` when the employee has none
    #[instrument(skip(self))]
    pub async fn current_plan(&self) -> Result<Option<EmployeePlan>, ApiError> {
        let response: ApiEnvelope<Option<EmployeePlan>> =
            self.client.get("/employee/plan/current").await?;
        Ok(response.into_data())
    }

    /// Subscribe to a plan, optionally backed by a verified payment
    #[instrument(skip(self), fields(plan_id = %plan_id))]
    pub async fn subscribe(
        &self,
        plan_id: &str,
        payment_id: Option<&str>,
    ) -> Result<EmployeePlan, ApiError> {
        let request = SubscribeRequest {
            plan_id: plan_id.to_string(),
            payment_id: payment_id.map(str::to_string),
        };
        let response: ApiEnvelope<EmployeePlan> =
            self.client.post("/employee/plan/subscribe", &request).await?;
        Ok(response.into_data())
    }

    #[instrument(skip(self))]
    pub async fn cancel(&self) -> Result<MessageResponse, ApiError> {
        self.client.post_empty("/employee/plan/cancel").await
    }
}
