//! Mobile-friendly error types.

use daybook_core::DaybookError;

/// Mobile-friendly error type.
#[derive(Debug, thiserror::Error, uniffi::Error)]
pub enum MobileError {
    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<DaybookError> for MobileError {
    fn from(err: DaybookError) -> Self {
        match err {
            DaybookError::Storage(e) => MobileError::StorageError(e.to_string()),
            DaybookError::Fetch(e) => MobileError::NetworkError(e.to_string()),
            DaybookError::Refresh(e) => MobileError::NetworkError(e.to_string()),
            DaybookError::Facts(e) => MobileError::ConfigError(e.to_string()),
            DaybookError::Configuration(e) => MobileError::ConfigError(e),
        }
    }
}

impl From<daybook_core::GameError> for MobileError {
    fn from(err: daybook_core::GameError) -> Self {
        MobileError::InvalidInput(err.to_string())
    }
}
