//! Pure reducers over an issue collection.

use crate::account::domain::Department;
use crate::issue::domain::{Issue, IssueCategory, IssuePriority, StatusBucket};
use serde::Serialize;

/// Headline counts for the administrator dashboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct IssueSummary {
    /// Every issue.
    pub total: usize,
    /// Issues still `submitted`.
    pub open: usize,
    /// Issues `reviewed` or `in_progress`.
    pub active: usize,
    /// Issues `resolved` or `closed`.
    pub resolved: usize,
    /// Issues with critical priority, whatever their status.
    pub critical: usize,
}

/// Number of issues with one priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PriorityCount {
    /// The priority.
    pub priority: IssuePriority,
    /// Issues with that priority.
    pub count: usize,
}

/// Number of issues in one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    /// The category.
    pub category: IssueCategory,
    /// Issues in that category.
    pub count: usize,
}

/// Workload and resolution figures for one department.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DepartmentStats {
    /// The department.
    pub department: Department,
    /// Issues routed to the department.
    pub total: usize,
    /// Routed issues not yet resolved or closed.
    pub active: usize,
    /// Routed issues resolved or closed.
    pub resolved: usize,
    /// `resolved` as a whole percentage of `total`.
    pub resolution_rate: usize,
}

/// Counts issues by status bucket and critical priority.
#[must_use]
pub fn summarize(issues: &[Issue]) -> IssueSummary {
    issues
        .iter()
        .fold(IssueSummary::default(), |mut summary, issue| {
            summary.total += 1;
            match issue.status().bucket() {
                StatusBucket::Open => summary.open += 1,
                StatusBucket::Active => summary.active += 1,
                StatusBucket::Resolved => summary.resolved += 1,
            }
            if issue.details().priority() == IssuePriority::Critical {
                summary.critical += 1;
            }
            summary
        })
}

/// Counts issues for every priority, lowest first. Zero counts are kept.
#[must_use]
pub fn priority_counts(issues: &[Issue]) -> Vec<PriorityCount> {
    IssuePriority::ALL
        .into_iter()
        .map(|priority| PriorityCount {
            priority,
            count: issues
                .iter()
                .filter(|issue| issue.details().priority() == priority)
                .count(),
        })
        .collect()
}

/// Counts issues per category in reporting order, omitting empty
/// categories.
#[must_use]
pub fn category_counts(issues: &[Issue]) -> Vec<CategoryCount> {
    IssueCategory::ALL
        .into_iter()
        .map(|category| CategoryCount {
            category,
            count: issues
                .iter()
                .filter(|issue| issue.details().category() == category)
                .count(),
        })
        .filter(|entry| entry.count > 0)
        .collect()
}

/// Builds a rollup for every department, including those with no issues.
#[must_use]
pub fn department_stats(issues: &[Issue]) -> Vec<DepartmentStats> {
    Department::ALL
        .into_iter()
        .map(|department| {
            let (total, resolved) = issues
                .iter()
                .filter(|issue| issue.details().department() == department)
                .fold((0_usize, 0_usize), |(routed, done), issue| {
                    (routed + 1, done + usize::from(issue.status().is_resolved()))
                });
            DepartmentStats {
                department,
                total,
                active: total.saturating_sub(resolved),
                resolved,
                resolution_rate: resolution_rate(resolved, total),
            }
        })
        .collect()
}

/// Returns `resolved * 100 / total` rounded to the nearest whole percent,
/// halves rounding up.
///
/// An empty department has a rate of zero.
///
/// # Examples
///
///     use facilitrack::analytics::resolution_rate;
///
///     assert_eq!(resolution_rate(0, 0), 0);
///     assert_eq!(resolution_rate(1, 3), 33);
///     assert_eq!(resolution_rate(2, 3), 67);
///     assert_eq!(resolution_rate(1, 8), 13);
#[must_use]
pub fn resolution_rate(resolved: usize, total: usize) -> usize {
    // round(r * 100 / t) == floor((200r + t) / 2t)
    resolved
        .checked_mul(200)
        .and_then(|scaled| scaled.checked_add(total))
        .zip(total.checked_mul(2))
        .and_then(|(numerator, denominator)| numerator.checked_div(denominator))
        .unwrap_or(0)
}
