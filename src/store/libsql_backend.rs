//! libSQL-backed progress store.
//!
//! Persists one row per role in a `progress` key-value table. Supports local
//! file and in-memory databases; the schema is created on open.

use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use libsql::{Connection, Database, params};
use tracing::{info, warn};

use crate::config::StorageConfig;
use crate::error::StorageError;
use crate::role::Role;
use crate::session::PersistedSnapshot;
use crate::store::traits::ProgressStore;

/// libSQL progress store.
///
/// Holds a single connection reused for all operations.
/// `libsql::Connection` is `Send + Sync` and safe for concurrent async use.
pub struct LibSqlProgressStore {
    #[allow(dead_code)]
    db: Arc<Database>,
    conn: Connection,
}

impl LibSqlProgressStore {
    /// Open (or create) a local database file and set up the schema.
    pub async fn new_local(path: &Path) -> Result<Self, StorageError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                StorageError::Open(format!("Failed to create database directory: {e}"))
            })?;
        }

        let db = libsql::Builder::new_local(path)
            .build()
            .await
            .map_err(|e| StorageError::Open(format!("Failed to open libSQL database: {e}")))?;

        let conn = db
            .connect()
            .map_err(|e| StorageError::Open(format!("Failed to create connection: {e}")))?;

        let store = Self {
            db: Arc::new(db),
            conn,
        };
        store.init_schema().await?;
        info!(path = %path.display(), "Progress database opened");
        Ok(store)
    }

    /// Open the database named by `config`.
    pub async fn open(config: &StorageConfig) -> Result<Self, StorageError> {
        Self::new_local(Path::new(&config.db_path)).await
    }

    /// Create an in-memory database (for tests and ephemeral sessions).
    pub async fn new_memory() -> Result<Self, StorageError> {
        let db = libsql::Builder::new_local(":memory:")
            .build()
            .await
            .map_err(|e| StorageError::Open(format!("Failed to create in-memory database: {e}")))?;

        let conn = db
            .connect()
            .map_err(|e| StorageError::Open(format!("Failed to create connection: {e}")))?;

        let store = Self {
            db: Arc::new(db),
            conn,
        };
        store.init_schema().await?;
        Ok(store)
    }

    async fn init_schema(&self) -> Result<(), StorageError> {
        self.conn
            .execute(
                "CREATE TABLE IF NOT EXISTS progress (
                    key TEXT PRIMARY KEY,
                    value TEXT NOT NULL,
                    updated_at TEXT NOT NULL
                )",
                (),
            )
            .await
            .map_err(|e| StorageError::Query(format!("init_schema: {e}")))?;
        Ok(())
    }

    fn conn(&self) -> &Connection {
        &self.conn
    }
}

#[async_trait]
impl ProgressStore for LibSqlProgressStore {
    async fn load(&self, role: Role) -> Result<Option<PersistedSnapshot>, StorageError> {
        let conn = self.conn();
        let mut rows = conn
            .query(
                "SELECT value FROM progress WHERE key = ?1",
                params![role.storage_key()],
            )
            .await
            .map_err(|e| StorageError::Query(format!("load: {e}")))?;

        match rows.next().await {
            Ok(Some(row)) => {
                let value: String = row.get(0).unwrap_or_default();
                match serde_json::from_str::<PersistedSnapshot>(&value) {
                    Ok(snapshot) => Ok(Some(snapshot)),
                    Err(e) => {
                        warn!(role = %role, "Discarding malformed progress snapshot: {e}");
                        Ok(None)
                    }
                }
            }
            Ok(None) => Ok(None),
            Err(e) => Err(StorageError::Query(format!("load: {e}"))),
        }
    }

    async fn save(&self, role: Role, snapshot: &PersistedSnapshot) -> Result<(), StorageError> {
        let value = serde_json::to_string(snapshot)
            .map_err(|e| StorageError::Serialization(e.to_string()))?;
        let now = Utc::now().to_rfc3339();

        self.conn()
            .execute(
                "INSERT INTO progress (key, value, updated_at) VALUES (?1, ?2, ?3)
                 ON CONFLICT (key) DO UPDATE SET value = ?2, updated_at = ?3",
                params![role.storage_key(), value, now],
            )
            .await
            .map_err(|e| StorageError::Query(format!("save: {e}")))?;

        Ok(())
    }

    async fn clear(&self, role: Role) -> Result<bool, StorageError> {
        let count = self
            .conn()
            .execute(
                "DELETE FROM progress WHERE key = ?1",
                params![role.storage_key()],
            )
            .await
            .map_err(|e| StorageError::Query(format!("clear: {e}")))?;
        Ok(count > 0)
    }
}
