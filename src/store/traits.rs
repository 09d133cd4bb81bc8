//! `ProgressStore` trait — the port between the wizard and durable storage.

use async_trait::async_trait;

use crate::error::StorageError;
use crate::role::Role;
use crate::session::PersistedSnapshot;

/// Backend-agnostic snapshot storage, keyed per role.
///
/// Implementations make a single attempt per operation: no retry, no
/// queueing. Last write wins — each role's wizard is expected to be the only
/// writer for its key, and concurrent writers (two open sessions for the
/// same role) silently overwrite each other.
#[async_trait]
pub trait ProgressStore: Send + Sync {
    /// Read the snapshot stored for `role`, if any.
    ///
    /// Fails soft on content: a missing entry and a malformed entry both
    /// yield `Ok(None)` — the malformed case logs a diagnostic, but callers
    /// cannot distinguish "never saved" from "corrupted". `Err` is reserved
    /// for the storage collaborator itself being unreachable.
    async fn load(&self, role: Role) -> Result<Option<PersistedSnapshot>, StorageError>;

    /// Write the snapshot for `role`, replacing any prior value.
    async fn save(&self, role: Role, snapshot: &PersistedSnapshot) -> Result<(), StorageError>;

    /// Remove the snapshot for `role`. Returns whether an entry existed.
    async fn clear(&self, role: Role) -> Result<bool, StorageError>;
}
