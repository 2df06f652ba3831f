use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Storage serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Store at [{}] is not a key-value document", path.display())]
    InvalidDocument {
        path: PathBuf
    },
    #[error("Value stored under [{key}] is not a list")]
    Corrupt {
        key: String
    }
}
