mod errors;
mod file_storage;
mod memory_storage;

use serde_json::Value;

pub use errors::StorageError;
pub use file_storage::FileStorage;
pub use memory_storage::MemoryStorage;

/// A key-value store whose values are whole JSON lists.
///
/// Callers always read and write complete lists; there is no partial update.
pub trait Storage: Send + Sync + 'static {
    /// Returns `None` when nothing has been stored under `key`.
    fn get(&self, key: &str) -> Result<Option<Vec<Value>>, StorageError>;
    fn set(&self, key: &str, values: Vec<Value>) -> Result<(), StorageError>;
}
