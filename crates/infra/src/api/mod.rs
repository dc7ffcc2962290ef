//! JobBoard API access layer
//!
//! Session-aware client for the JobBoard REST API plus the domain services
//! built on it.
//!
//! # Architecture
//!
//! - [`TokenStore`] owns the persisted session (token + user type)
//! - [`ApiClient`] attaches the bearer token and clears the session on 401
//! - Services map one method to one endpoint, no retries or caching
//! - [`error_message`] turns any failure into the line the UI shows

pub mod client;
pub mod errors;
pub mod facade;
pub mod request;
pub mod services;
pub mod token_store;
pub mod unauthorized;

pub use client::{ApiClient, ApiClientBuilder, ApiClientConfig};
pub use errors::{error_message, normalize_error, ApiError, ApiErrorCategory, ErrorResponse};
pub use facade::JobBoardApi;
pub use request::ApiRequest;
pub use services::{AuthService, EmployerService, PaymentService, PlanService};
pub use token_store::TokenStore;
pub use unauthorized::{SharedUnauthorizedHandler, UnauthorizedHandler};
