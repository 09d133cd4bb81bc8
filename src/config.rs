//! Configuration types.

/// Storage configuration for the libSQL progress backend.
#[derive(Debug, Clone)]
pub struct StorageConfig {
    /// Path of the local database file.
    pub db_path: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            db_path: "./data/onboarding.db".to_string(),
        }
    }
}
