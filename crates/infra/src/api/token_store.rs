//! Session token store
//!
//! Single owner of the persisted session: the bearer token and the user type
//! returned at login. Reads never fail; a storage error is logged and treated
//! as "no session".

use std::sync::Arc;

use jobboard_domain::constants::{TOKEN_STORAGE_KEY, USER_TYPE_STORAGE_KEY};
use jobboard_domain::JobBoardError;
use tracing::{debug, warn};

use crate::storage::{MemoryStorage, SessionStorage};

/// Persisted session over a [`SessionStorage`] backend
///
/// Cloning shares the backend; every clone sees the same session.
#[derive(Clone)]
pub struct TokenStore {
    storage: Arc<dyn SessionStorage>,
}

impl TokenStore {
    pub fn new(storage: Arc<dyn SessionStorage>) -> Self {
        Self { storage }
    }

    /// Store over a fresh [`MemoryStorage`]
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStorage::new()))
    }

    /// Persist the token and user type of a new session
    ///
    /// Values are stored verbatim, overwriting any previous session.
    ///
    /// # Errors
    /// Returns `JobBoardError::Storage` if either write fails
    pub async fn set_token(&self, token: &str, user_type: &str) -> Result<(), JobBoardError> {
        self.storage.set_item(TOKEN_STORAGE_KEY, token).await?;
        self.storage.set_item(USER_TYPE_STORAGE_KEY, user_type).await?;
        debug!(user_type = %user_type, "Session stored");
        Ok(())
    }

    /// Current bearer token, if any
    pub async fn token(&self) -> Option<String> {
        self.read(TOKEN_STORAGE_KEY).await
    }

    /// User type of the current session, if any
    pub async fn user_type(&self) -> Option<String> {
        self.read(USER_TYPE_STORAGE_KEY).await
    }

    /// Remove both session values. Idempotent.
    pub async fn clear(&self) {
        for key in [TOKEN_STORAGE_KEY, USER_TYPE_STORAGE_KEY] {
            if let Err(e) = self.storage.remove_item(key).await {
                warn!(key = %key, error = %e, "Failed to remove session value");
            }
        }
        debug!("Session cleared");
    }

    /// A non-empty token is present
    pub async fn is_authenticated(&self) -> bool {
        self.token().await.is_some_and(|token| !token.is_empty())
    }

    async fn read(&self, key: &str) -> Option<String> {
        match self.storage.get_item(key).await {
            Ok(value) => value,
            Err(e) => {
                warn!(key = %key, error = %e, "Failed to read session value");
                None
            }
        }
    }
}

impl std::fmt::Debug for TokenStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenStore").finish_non_exhaustive()
    }
}
