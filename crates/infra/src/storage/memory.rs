//! Process-local session storage

use std::collections::HashMap;

use async_trait::async_trait;
use jobboard_domain::JobBoardError;
use parking_lot::RwLock;

use super::SessionStorage;

/// In-memory [`SessionStorage`]; contents are lost when the process exits
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

#[async_trait]
impl SessionStorage for MemoryStorage {
    async fn get_item(&self, key: &str) -> Result<Option<String>, JobBoardError> {
        Ok(self.entries.read().get(key).cloned())
    }

    async fn set_item(&self, key: &str, value: &str) -> Result<(), JobBoardError> {
        self.entries.write().insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove_item(&self, key: &str) -> Result<(), JobBoardError> {
        self.entries.write().remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn set_then_get_returns_latest_value() {
        let storage = MemoryStorage::new();
        storage.set_item("token", "first").await.unwrap();
        storage.set_item("token", "second").await.unwrap();

        assert_eq!(storage.get_item("token").await.unwrap().as_deref(), Some("second"));
        assert_eq!(storage.len(), 1);
    }

    #[tokio::test]
    async fn removing_missing_key_is_not_an_error() {
        let storage = MemoryStorage::new();
        storage.remove_item("token").await.unwrap();
        assert!(storage.is_empty());
        assert_eq!(storage.get_item("token").await.unwrap(), None);
    }
}
