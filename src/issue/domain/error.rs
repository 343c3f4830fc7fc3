//! Error types for issue domain validation and parsing.

use super::{IssueId, IssueStatus};
use thiserror::Error;

/// Errors returned while constructing or mutating issue domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum IssueDomainError {
    /// The issue title is empty after trimming.
    #[error("issue title must not be empty")]
    EmptyTitle,

    /// The issue description is empty after trimming.
    #[error("issue description must not be empty")]
    EmptyDescription,

    /// The issue location is empty after trimming.
    #[error("issue location must not be empty")]
    EmptyLocation,

    /// A status update was attempted without an explanatory note.
    #[error("a note explaining the status update is required")]
    EmptyNote,

    /// The lifecycle does not offer the requested status.
    #[error("issue {issue_id} cannot move from {from} to {to}")]
    InvalidStatusTransition {
        /// Issue being updated.
        issue_id: IssueId,
        /// Current status.
        from: IssueStatus,
        /// Requested status.
        to: IssueStatus,
    },

    /// A persisted timeline has no entries.
    #[error("issue timeline must contain the submission entry")]
    EmptyTimeline,

    /// A persisted timeline does not begin with the submission entry.
    #[error("issue timeline must start with a submitted entry, found {0}")]
    TimelineMustStartSubmitted(IssueStatus),
}

/// Error returned while parsing issue statuses from persistence or requests.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown issue status: {0}")]
pub struct ParseIssueStatusError(pub String);

/// Error returned while parsing issue categories.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown issue category: {0}")]
pub struct ParseIssueCategoryError(pub String);

/// Error returned while parsing issue priorities.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown issue priority: {0}")]
pub struct ParseIssuePriorityError(pub String);
