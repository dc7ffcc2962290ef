//! Payment gateway orders and payment history

use std::sync::Arc;

use jobboard_domain::types::{
    ApiEnvelope, CreateOrderRequest, PaymentOrder, PaymentRecord, PaymentVerification,
    VerifyPaymentRequest,
};
use tracing::{debug, info, instrument, warn};
use urlencoding::encode;

use crate::api::client::ApiClient;
use crate::api::errors::ApiError;

/// Payment endpoints under `/payments`
pub struct PaymentService {
    client: Arc<ApiClient>,
}

impl PaymentService {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// Open a gateway order for a plan purchase
    ///
    /// The returned order is handed to the checkout widget as-is.
    #[instrument(skip(self), fields(plan_id = %plan_id))]
    pub async fn create_order(&self, plan_id: &str) -> Result<PaymentOrder, ApiError> {
        let request = CreateOrderRequest { plan_id: plan_id.to_string() };
        let response: ApiEnvelope<PaymentOrder> =
            self.client.post("/payments/create-order", &request).await?;
        let order = response.into_data();

        debug!(order_id = %order.order_id, amount = order.amount, "Payment order created");
        Ok(order)
    }

    /// Confirm a completed checkout with the server
    ///
    /// # Errors
    ///
    /// Returns error if API request fails. A rejected signature is not an
    /// error; it comes back as `verified: false`.
    #[instrument(skip(self, request), fields(order_id = %request.order_id))]
    pub async fn verify_payment(
        &self,
        request: &VerifyPaymentRequest,
    ) -> Result<PaymentVerification, ApiError> {
        let response: ApiEnvelope<PaymentVerification> =
            self.client.post("/payments/verify", request).await?;
        let verification = response.into_data();

        if verification.verified {
            info!("Payment verified");
        } else {
            warn!("Payment verification rejected");
        }
        Ok(verification)
    }

    #[instrument(skip(self))]
    pub async fn history(&self) -> Result<Vec<PaymentRecord>, ApiError> {
        let response: ApiEnvelope<Vec<PaymentRecord>> =
            self.client.get("/payments/history").await?;
        Ok(response.into_data())
    }

    #[instrument(skip(self), fields(payment_id = %id))]
    pub async fn payment(&self, id: &str) -> Result<PaymentRecord, ApiError> {
        let path = format!("/payments/{}", encode(id));
        let response: ApiEnvelope<PaymentRecord> = self.client.get(&path).await?;
        Ok(response.into_data())
    }
}
