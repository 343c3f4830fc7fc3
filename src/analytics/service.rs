//! On-demand dashboard computation over the issue repository.

use super::statistics::{
    CategoryCount, DepartmentStats, IssueSummary, PriorityCount, category_counts,
    department_stats, priority_counts, summarize,
};
use crate::error::FailureKind;
use crate::issue::ports::{IssueRepository, IssueRepositoryError};
use serde::Serialize;
use std::sync::Arc;
use thiserror::Error;

/// Every figure shown on the administrator dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Dashboard {
    /// Headline counts.
    pub summary: IssueSummary,
    /// Counts for every priority.
    pub by_priority: Vec<PriorityCount>,
    /// Counts for non-empty categories.
    pub by_category: Vec<CategoryCount>,
    /// Rollups for every department.
    pub by_department: Vec<DepartmentStats>,
}

/// Service-level errors for analytics.
#[derive(Debug, Error)]
pub enum AnalyticsError {
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] IssueRepositoryError),
}

impl AnalyticsError {
    /// Classifies the failure for presentation.
    #[must_use]
    pub const fn kind(&self) -> FailureKind {
        match self {
            Self::Repository(IssueRepositoryError::NotFound(_)) => FailureKind::NotFound,
            Self::Repository(_) => FailureKind::BackendUnavailable,
        }
    }
}

/// Recomputes dashboard statistics from the full issue collection.
#[derive(Clone)]
pub struct AnalyticsService<R>
where
    R: IssueRepository,
{
    repository: Arc<R>,
}

impl<R> AnalyticsService<R>
where
    R: IssueRepository,
{
    /// Creates a new analytics service.
    #[must_use]
    pub const fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Builds the dashboard from every stored issue.
    ///
    /// # Errors
    ///
    /// Returns [`AnalyticsError::Repository`] when the issues cannot be
    /// listed.
    pub async fn dashboard(&self) -> Result<Dashboard, AnalyticsError> {
        let issues = self.repository.list_all().await?;
        tracing::debug!(issue_count = issues.len(), "computing dashboard");
        Ok(Dashboard {
            summary: summarize(&issues),
            by_priority: priority_counts(&issues),
            by_category: category_counts(&issues),
            by_department: department_stats(&issues),
        })
    }
}
