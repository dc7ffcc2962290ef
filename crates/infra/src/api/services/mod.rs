//! One service per backend area
//!
//! Each service borrows the shared [`ApiClient`](super::ApiClient) and maps
//! one method to one endpoint. Resource endpoints answer with an
//! [`ApiEnvelope`](jobboard_domain::types::ApiEnvelope) that the services
//! unwrap; auth endpoints answer with flat bodies.

pub mod auth;
pub mod employer;
pub mod payment;
pub mod plan;

pub use auth::AuthService;
pub use employer::EmployerService;
pub use payment::PaymentService;
pub use plan::PlanService;
