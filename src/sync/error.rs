use thiserror::Error;

use crate::{config::ConfigError, management::StorageError};

#[derive(Error, Debug)]
pub enum SyncError {
    /// Network, auth or API failure on one of the services.
    #[error("{service} is unavailable: {message}")]
    CollaboratorUnavailable {
        service: &'static str,
        message: String,
    },

    #[error("Storage failure: {0}")]
    Storage(#[from] StorageError),

    #[error("{service} does not support {operation}")]
    Unsupported {
        service: &'static str,
        operation: &'static str,
    },

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl SyncError {
    pub fn unavailable(service: &'static str, err: impl ToString) -> Self {
        SyncError::CollaboratorUnavailable {
            service,
            message: err.to_string(),
        }
    }
}
