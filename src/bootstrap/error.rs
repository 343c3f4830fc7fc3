//! Bootstrap error types.

use crate::account::services::AccountServiceError;
use crate::error::FailureKind;
use crate::issue::services::IssueLifecycleError;
use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors raised while loading or applying seed data.
#[derive(Debug, Error)]
pub enum BootstrapError {
    /// The seed file could not be read.
    #[error("failed to read seed file {path}: {source}")]
    Read {
        /// Path of the seed file.
        path: Utf8PathBuf,
        /// Underlying I/O failure.
        source: std::io::Error,
    },
    /// The seed file is not valid seed JSON.
    #[error("invalid seed data: {0}")]
    Parse(#[from] serde_json::Error),
    /// An issue references an email with no registered account.
    #[error("seed data references unknown account: {0}")]
    UnknownAccount(String),
    /// Registering a seed account failed.
    #[error(transparent)]
    Account(#[from] AccountServiceError),
    /// Reporting or updating a seed issue failed.
    #[error(transparent)]
    Issue(#[from] IssueLifecycleError),
}

impl BootstrapError {
    /// Classifies the failure for presentation.
    #[must_use]
    pub const fn kind(&self) -> FailureKind {
        match self {
            Self::Read { .. } => FailureKind::BackendUnavailable,
            Self::Parse(_) => FailureKind::Validation,
            Self::UnknownAccount(_) => FailureKind::NotFound,
            Self::Account(err) => err.kind(),
            Self::Issue(err) => err.kind(),
        }
    }
}

/// Result type for bootstrap operations.
pub type BootstrapResult<T> = Result<T, BootstrapError>;
