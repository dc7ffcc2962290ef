//! Wire types for the JobBoard REST API
//!
//! Field names follow the backend's camelCase JSON; enums travel as
//! lowercase strings.

pub mod auth;
pub mod common;
pub mod employer;
pub mod payment;
pub mod plan;

pub use auth::*;
pub use common::*;
pub use employer::*;
pub use payment::*;
pub use plan::*;
