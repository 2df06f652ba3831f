use thiserror::Error;
use tokio::task::JoinError;

use crate::models::ValidationError;
use crate::storage::StorageError;

#[derive(Debug, Error)]
pub enum RegisterError {
    #[error("Transaction rejected: {0}")]
    Validation(#[from] ValidationError),
    #[error("Could not save the transaction: {0}")]
    Storage(#[from] StorageError),
    #[error("Storage task did not complete: {0}")]
    Task(#[from] JoinError)
}
