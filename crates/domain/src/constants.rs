//! Client-layer constants
//!
//! Storage keys, defaults and the fixed user-facing error messages.

// Session storage keys
pub const TOKEN_STORAGE_KEY: &str = "token";
pub const USER_TYPE_STORAGE_KEY: &str = "user_type";

// API defaults
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000/api/v1";
pub const DEFAULT_KEYCHAIN_SERVICE: &str = "JobBoard.session";
pub const HEALTH_CHECK_TIMEOUT_SECS: u64 = 5;

// Normalized error messages shown by the UI
pub const GENERIC_SERVER_ERROR_MESSAGE: &str = "An error occurred";
pub const NETWORK_ERROR_MESSAGE: &str = "Network error. Please check your connection.";
pub const UNEXPECTED_ERROR_MESSAGE: &str = "An unexpected error occurred";
