//! Error types for the storage layer

use thiserror::Error;
use usersvc_types::UnknownCriteria;

pub type Result<T> = std::result::Result<T, StoreError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("no user found with ID {0}")]
    NotFound(String),

    #[error("invalid search criteria: {0}")]
    InvalidCriteria(String),

    #[error("unsupported database type: {0}")]
    BackendUnavailable(String),
}

impl From<UnknownCriteria> for StoreError {
    fn from(e: UnknownCriteria) -> Self {
        StoreError::InvalidCriteria(e.0)
    }
}
