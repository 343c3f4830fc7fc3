//! Repository port for issue persistence and timeline storage.

use crate::account::domain::UserId;
use crate::issue::domain::{Issue, IssueId, TimelineEntry};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for issue repository operations.
pub type IssueRepositoryResult<T> = Result<T, IssueRepositoryError>;

/// Issue persistence contract.
///
/// Implementations keep issues and their timeline entries; entries are
/// retrieved in the order they were appended.
#[async_trait]
pub trait IssueRepository: Send + Sync {
    /// Stores a newly reported issue together with its submission entry.
    ///
    /// # Errors
    ///
    /// Returns [`IssueRepositoryError::DuplicateIssue`] when the identifier
    /// already exists.
    async fn store(&self, issue: &Issue) -> IssueRepositoryResult<()>;

    /// Appends a timeline entry to an existing issue.
    ///
    /// # Errors
    ///
    /// Returns [`IssueRepositoryError::NotFound`] when the issue does not
    /// exist.
    async fn append_entry(&self, id: IssueId, entry: &TimelineEntry)
    -> IssueRepositoryResult<()>;

    /// Finds an issue with its full timeline.
    ///
    /// Returns `None` when the issue does not exist.
    async fn find_by_id(&self, id: IssueId) -> IssueRepositoryResult<Option<Issue>>;

    /// Returns every issue, newest-created first.
    async fn list_all(&self) -> IssueRepositoryResult<Vec<Issue>>;

    /// Returns issues reported by the user, newest-created first.
    async fn list_for_reporter(&self, reporter: UserId) -> IssueRepositoryResult<Vec<Issue>>;
}

/// Errors returned by issue repository implementations.
#[derive(Debug, Clone, Error)]
pub enum IssueRepositoryError {
    /// An issue with the same identifier already exists.
    #[error("duplicate issue identifier: {0}")]
    DuplicateIssue(IssueId),

    /// The issue was not found.
    #[error("issue not found: {0}")]
    NotFound(IssueId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl IssueRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
