//! Issue lifecycle states and the forward-only transition guard.

use super::ParseIssueStatusError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Issue lifecycle state.
///
/// States are ordered: `Submitted < Reviewed < InProgress < Resolved <
/// Closed`. An issue only ever moves forward through this order, though it
/// may skip intermediate states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueStatus {
    /// Reported and waiting for triage.
    Submitted,
    /// Seen by an administrator.
    Reviewed,
    /// Work has started.
    InProgress,
    /// The problem has been fixed.
    Resolved,
    /// No further work will happen.
    Closed,
}

/// Coarse grouping of statuses used by dashboards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusBucket {
    /// Not yet triaged.
    Open,
    /// Triaged and being worked on.
    Active,
    /// Resolved or closed.
    Resolved,
}

impl IssueStatus {
    /// Every status in lifecycle order.
    pub const ORDER: [Self; 5] = [
        Self::Submitted,
        Self::Reviewed,
        Self::InProgress,
        Self::Resolved,
        Self::Closed,
    ];

    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Submitted => "submitted",
            Self::Reviewed => "reviewed",
            Self::InProgress => "in_progress",
            Self::Resolved => "resolved",
            Self::Closed => "closed",
        }
    }

    /// Returns the human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Submitted => "Submitted",
            Self::Reviewed => "Reviewed",
            Self::InProgress => "In Progress",
            Self::Resolved => "Resolved",
            Self::Closed => "Closed",
        }
    }

    const fn position(self) -> usize {
        match self {
            Self::Submitted => 0,
            Self::Reviewed => 1,
            Self::InProgress => 2,
            Self::Resolved => 3,
            Self::Closed => 4,
        }
    }

    /// Returns the statuses an administrator may move to from this one:
    /// every status strictly later in lifecycle order.
    ///
    /// [`IssueStatus::Closed`] offers nothing.
    #[must_use]
    pub fn next_statuses(self) -> &'static [Self] {
        let order: &'static [Self] = &Self::ORDER;
        order.get(self.position() + 1..).unwrap_or_default()
    }

    /// Returns `true` when `target` is strictly later in lifecycle order.
    #[must_use]
    pub const fn can_advance_to(self, target: Self) -> bool {
        target.position() > self.position()
    }

    /// Returns `true` when no further transitions are offered.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Closed)
    }

    /// Returns `true` when the problem is fixed (resolved or closed).
    #[must_use]
    pub const fn is_resolved(self) -> bool {
        matches!(self, Self::Resolved | Self::Closed)
    }

    /// Returns the dashboard bucket for this status.
    #[must_use]
    pub const fn bucket(self) -> StatusBucket {
        match self {
            Self::Submitted => StatusBucket::Open,
            Self::Reviewed | Self::InProgress => StatusBucket::Active,
            Self::Resolved | Self::Closed => StatusBucket::Resolved,
        }
    }
}

impl fmt::Display for IssueStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for IssueStatus {
    type Error = ParseIssueStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "submitted" => Ok(Self::Submitted),
            "reviewed" => Ok(Self::Reviewed),
            "in_progress" => Ok(Self::InProgress),
            "resolved" => Ok(Self::Resolved),
            "closed" => Ok(Self::Closed),
            _ => Err(ParseIssueStatusError(value.to_owned())),
        }
    }
}
