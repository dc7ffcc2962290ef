//! Session storage backends
//!
//! The token store persists two strings through a [`SessionStorage`]. The
//! backend is chosen by the application shell: process memory for tests and
//! headless runs, the platform keychain for desktop sessions that must
//! survive restarts.

pub mod keychain;
pub mod memory;

use std::sync::Arc;

use async_trait::async_trait;
use jobboard_domain::{JobBoardError, StorageBackend, StorageConfig};

pub use keychain::KeychainStorage;
pub use memory::MemoryStorage;

/// Persistent string key-value store
///
/// Implementations must treat removal of a missing key as success.
#[async_trait]
pub trait SessionStorage: Send + Sync {
    /// Read a value, `None` when the key was never written or was removed
    ///
    /// # Errors
    /// Returns `JobBoardError::Storage` if the backend cannot be reached
    async fn get_item(&self, key: &str) -> Result<Option<String>, JobBoardError>;

    /// Write a value, replacing any previous one
    ///
    /// # Errors
    /// Returns `JobBoardError::Storage` if the backend rejects the write
    async fn set_item(&self, key: &str, value: &str) -> Result<(), JobBoardError>;

    /// Remove a value (idempotent)
    ///
    /// # Errors
    /// Returns `JobBoardError::Storage` if the backend cannot be reached
    async fn remove_item(&self, key: &str) -> Result<(), JobBoardError>;
}

/// Build the backend selected in configuration
pub fn from_config(config: &StorageConfig) -> Arc<dyn SessionStorage> {
    match config.backend {
        StorageBackend::Memory => Arc::new(MemoryStorage::new()),
        StorageBackend::Keychain => Arc::new(KeychainStorage::new(config.service_name.clone())),
    }
}
