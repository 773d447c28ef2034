//! Adapter error types.

use thiserror::Error;

use crate::clients::ClientError;

/// Which remote operation an [`AdapterError`] came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    DescribeFailed,
    CreateFailed,
    ModifyFailed,
    DeleteFailed,
    Cancelled,
}

/// Errors returned by the Observe/Create/Update/Delete operations.
#[derive(Debug, Error)]
pub enum AdapterError {
    #[error("cannot describe cache subnet group")]
    DescribeFailed(#[source] ClientError),

    #[error("cannot create cache subnet group")]
    CreateFailed(#[source] ClientError),

    #[error("cannot modify cache subnet group")]
    ModifyFailed(#[source] ClientError),

    #[error("cannot delete cache subnet group")]
    DeleteFailed(#[source] ClientError),

    /// The driver cancelled the call. Not a remote failure; no backoff needed.
    #[error("operation cancelled")]
    Cancelled,
}

impl AdapterError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::DescribeFailed(_) => ErrorKind::DescribeFailed,
            Self::CreateFailed(_) => ErrorKind::CreateFailed,
            Self::ModifyFailed(_) => ErrorKind::ModifyFailed,
            Self::DeleteFailed(_) => ErrorKind::DeleteFailed,
            Self::Cancelled => ErrorKind::Cancelled,
        }
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }

    /// Underlying remote error, if any.
    pub fn client_error(&self) -> Option<&ClientError> {
        match self {
            Self::DescribeFailed(e)
            | Self::CreateFailed(e)
            | Self::ModifyFailed(e)
            | Self::DeleteFailed(e) => Some(e),
            Self::Cancelled => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, AdapterError>;

/// Errors building an adapter for a resource.
#[derive(Debug, Error)]
pub enum ConnectError {
    #[error("provider config not found: {0}")]
    ProviderConfigNotFound(String),

    #[error("cannot create client")]
    Client(#[source] ClientError),
}

/// Errors loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("provider config {0}: region is required")]
    MissingRegion(String),
}
