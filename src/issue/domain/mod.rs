//! Domain model for campus issue reporting.
//!
//! An [`Issue`] owns its append-only [`Timeline`]; its status and last-update
//! time are always those of the newest entry. [`IssueStatus`] carries the
//! forward-only lifecycle guard and [`classify`] suggests routing for a new
//! report. Infrastructure concerns stay outside this boundary.

mod classification;
mod error;
mod ids;
mod issue;
mod status;
mod timeline;

pub use classification::{Classification, IssueCategory, IssuePriority, classify};
pub use error::{
    IssueDomainError, ParseIssueCategoryError, ParseIssuePriorityError, ParseIssueStatusError,
};
pub use ids::IssueId;
pub use issue::{Issue, IssueDetails, PersistedIssueData};
pub use status::{IssueStatus, StatusBucket};
pub use timeline::{Author, Timeline, TimelineEntry, TimelineNote};
