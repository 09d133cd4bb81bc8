//! In-memory progress store.
//!
//! Backs tests and ephemeral sessions. Entries are held as serialized JSON
//! strings, the same shape a durable backend stores, so corrupt-snapshot
//! recovery is exercisable here too.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::warn;

use crate::error::StorageError;
use crate::role::Role;
use crate::session::PersistedSnapshot;
use crate::store::traits::ProgressStore;

/// Progress store with no durability.
#[derive(Default)]
pub struct MemoryProgressStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryProgressStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Plant a raw entry, bypassing serialization.
    ///
    /// Lets tests stage malformed snapshots and verify the fail-soft load
    /// path.
    pub async fn insert_raw(&self, role: Role, value: impl Into<String>) {
        self.entries
            .write()
            .await
            .insert(role.storage_key(), value.into());
    }
}

#[async_trait]
impl ProgressStore for MemoryProgressStore {
    async fn load(&self, role: Role) -> Result<Option<PersistedSnapshot>, StorageError> {
        let entries = self.entries.read().await;
        let Some(value) = entries.get(&role.storage_key()) else {
            return Ok(None);
        };
        match serde_json::from_str::<PersistedSnapshot>(value) {
            Ok(snapshot) => Ok(Some(snapshot)),
            Err(e) => {
                warn!(role = %role, "Discarding malformed progress snapshot: {e}");
                Ok(None)
            }
        }
    }

    async fn save(&self, role: Role, snapshot: &PersistedSnapshot) -> Result<(), StorageError> {
        let value = serde_json::to_string(snapshot)
            .map_err(|e| StorageError::Serialization(e.to_string()))?;
        self.entries.write().await.insert(role.storage_key(), value);
        Ok(())
    }

    async fn clear(&self, role: Role) -> Result<bool, StorageError> {
        Ok(self
            .entries
            .write()
            .await
            .remove(&role.storage_key())
            .is_some())
    }
}
