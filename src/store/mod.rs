//! Progress persistence — durable per-role snapshot storage.

pub mod libsql_backend;
pub mod memory;
pub mod traits;

pub use libsql_backend::LibSqlProgressStore;
pub use memory::MemoryProgressStore;
pub use traits::ProgressStore;
