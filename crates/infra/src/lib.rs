//! # JobBoard Infrastructure
//!
//! I/O side of the JobBoard client layer.
//!
//! This crate contains:
//! - The session-aware API client and the auth, employer, payment and plan
//!   services
//! - Session storage backends (memory, platform keychain)
//! - Configuration loading and logging setup
//!
//! ## Architecture
//! - Wire types and errors come from `jobboard-domain`
//! - One [`ApiClient`] is built per application and shared by `Arc`
//! - Contains all "impure" code (HTTP, keychain, filesystem)

pub mod api;
pub mod config;
pub mod errors;
pub mod http;
pub mod observability;
pub mod storage;

// Re-export commonly used items
pub use api::{
    error_message, normalize_error, ApiClient, ApiClientConfig, ApiError, ApiErrorCategory,
    ApiRequest, AuthService, EmployerService, JobBoardApi, PaymentService, PlanService, TokenStore,
    UnauthorizedHandler,
};
pub use errors::InfraError;
pub use http::{HttpClient, HttpClientBuilder};
pub use storage::{KeychainStorage, MemoryStorage, SessionStorage};
