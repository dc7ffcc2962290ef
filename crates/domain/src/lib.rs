//! # JobBoard Domain
//!
//! Wire types and models shared by the JobBoard client layer.
//!
//! This crate contains:
//! - Request/response DTOs for the auth, employer, payment and plan APIs
//! - Domain error types and Result definitions
//! - Client configuration structures
//! - Domain constants (storage keys, user-facing error messages)
//!
//! ## Architecture
//! - No dependencies on other JobBoard crates
//! - Only external dependencies allowed
//! - Pure data structures, no I/O

pub mod config;
pub mod constants;
pub mod errors;
pub mod macros;
pub mod types;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
