//! Application services for issue reporting and status tracking.

mod lifecycle;
mod timeline_view;

pub use lifecycle::{
    IssueLifecycleError, IssueLifecycleResult, IssueLifecycleService, IssueQuery,
    ReportIssueRequest, UpdateStatusRequest,
};
pub use timeline_view::{TimelineEntryView, TimelineRenderError, TimelineRenderer, TimelineView};
