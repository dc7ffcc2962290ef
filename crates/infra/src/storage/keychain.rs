//! Keychain-backed session storage
//!
//! Persists session values in the platform keychain (macOS Keychain Access,
//! Windows Credential Manager, Linux Secret Service) so a signed-in session
//! survives application restarts.

use async_trait::async_trait;
use jobboard_domain::JobBoardError;
use keyring::Entry;
use tracing::debug;

use super::SessionStorage;
use crate::errors::InfraError;

/// [`SessionStorage`] over the platform keychain
///
/// Each key becomes one keychain entry under `service_name`.
#[derive(Debug, Clone)]
pub struct KeychainStorage {
    service_name: String,
}

impl KeychainStorage {
    /// # Arguments
    /// * `service_name` - Keychain service identifier (e.g. "JobBoard.session")
    pub fn new(service_name: impl Into<String>) -> Self {
        Self { service_name: service_name.into() }
    }

    pub fn service_name(&self) -> &str {
        &self.service_name
    }

    /// Run a keychain operation on the blocking pool
    ///
    /// Platform keychain calls are synchronous (a D-Bus round trip on Linux)
    /// and must stay off the async workers.
    async fn with_entry<T, F>(&self, key: &str, op: F) -> Result<T, JobBoardError>
    where
        T: Send + 'static,
        F: FnOnce(Entry) -> Result<T, JobBoardError> + Send + 'static,
    {
        let service_name = self.service_name.clone();
        let key = key.to_string();

        tokio::task::spawn_blocking(move || {
            let entry = Entry::new(&service_name, &key).map_err(InfraError::from)?;
            op(entry)
        })
        .await
        .map_err(|e| JobBoardError::Storage(format!("Keychain task failed: {e}")))?
    }
}

#[async_trait]
impl SessionStorage for KeychainStorage {
    async fn get_item(&self, key: &str) -> Result<Option<String>, JobBoardError> {
        debug!(service = %self.service_name, key = %key, "Reading session value from keychain");

        self.with_entry(key, |entry| match entry.get_password() {
            Ok(value) => Ok(Some(value)),
            Err(keyring::Error::NoEntry) => Ok(None),
            Err(e) => Err(InfraError::from(e).into()),
        })
        .await
    }

    async fn set_item(&self, key: &str, value: &str) -> Result<(), JobBoardError> {
        debug!(service = %self.service_name, key = %key, "Writing session value to keychain");

        let value = value.to_string();
        self.with_entry(key, move |entry| {
            entry.set_password(&value).map_err(|e| InfraError::from(e).into())
        })
        .await
    }

    async fn remove_item(&self, key: &str) -> Result<(), JobBoardError> {
        debug!(service = %self.service_name, key = %key, "Removing session value from keychain");

        self.with_entry(key, |entry| match entry.delete_credential() {
            Ok(()) | Err(keyring::Error::NoEntry) => Ok(()),
            Err(e) => Err(InfraError::from(e).into()),
        })
        .await
    }
}
