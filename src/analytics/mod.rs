//! Dashboard statistics over reported issues.
//!
//! The reducers in this module are pure functions of an issue slice;
//! [`AnalyticsService`] feeds them from the repository on demand.

mod service;
mod statistics;


pub use service::{AnalyticsError, AnalyticsService, Dashboard};
pub use statistics::{
    CategoryCount, DepartmentStats, IssueSummary, PriorityCount, category_counts,
    department_stats, priority_counts, resolution_rate, summarize,
};
