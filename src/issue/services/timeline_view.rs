//! Read model and text rendering for an issue's status history.

use crate::issue::domain::{Issue, IssueId, IssueStatus, TimelineEntry};
use chrono::{DateTime, Utc};
use minijinja::Environment;
use serde::Serialize;
use thiserror::Error;

const TIMELINE_TEMPLATE: &str = "\
{{ title }} [{{ status_label }}]
{% for entry in entries %}
{{ entry.recorded_at }}  {{ entry.status_label }}{% if entry.is_current %} (current){% endif %}
    {{ entry.note }} - {{ entry.actor_name }}
{% endfor %}";

/// One row of a rendered timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimelineEntryView {
    /// Recorded status.
    pub status: IssueStatus,
    /// Human-readable status label.
    pub status_label: &'static str,
    /// When the entry was recorded.
    pub recorded_at: DateTime<Utc>,
    /// Explanatory note.
    pub note: String,
    /// Display name of the entry's author.
    pub actor_name: String,
    /// Whether this is the latest entry.
    pub is_current: bool,
}

impl TimelineEntryView {
    fn from_entry(entry: &TimelineEntry, is_current: bool) -> Self {
        Self {
            status: entry.status(),
            status_label: entry.status().label(),
            recorded_at: entry.recorded_at(),
            note: entry.note().as_str().to_owned(),
            actor_name: entry.author().display_name().as_str().to_owned(),
            is_current,
        }
    }
}

/// Chronological history of one issue, ready for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimelineView {
    /// Issue identifier.
    pub issue_id: IssueId,
    /// Issue title.
    pub title: String,
    /// Current status label.
    pub status_label: &'static str,
    /// Entries oldest first; exactly one is marked current.
    pub entries: Vec<TimelineEntryView>,
}

impl TimelineView {
    /// Builds the view for an issue.
    #[must_use]
    pub fn from_issue(issue: &Issue) -> Self {
        let timeline = issue.timeline();
        let last_index = timeline.len().saturating_sub(1);
        let entries = timeline
            .iter()
            .enumerate()
            .map(|(index, entry)| TimelineEntryView::from_entry(entry, index == last_index))
            .collect();

        Self {
            issue_id: issue.id(),
            title: issue.details().title().to_owned(),
            status_label: issue.status().label(),
            entries,
        }
    }

    /// Returns the entry marked current.
    #[must_use]
    pub fn current(&self) -> Option<&TimelineEntryView> {
        self.entries.iter().find(|entry| entry.is_current)
    }
}

/// Errors raised while rendering a timeline.
#[derive(Debug, Error)]
#[error("failed to render timeline for issue {issue_id}: {reason}")]
pub struct TimelineRenderError {
    issue_id: IssueId,
    reason: String,
}

/// Plain-text timeline renderer backed by a `minijinja` template.
#[derive(Debug)]
pub struct TimelineRenderer {
    environment: Environment<'static>,
}

impl Default for TimelineRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TimelineRenderer {
    /// Creates a renderer using the built-in template.
    #[must_use]
    pub fn new() -> Self {
        Self {
            environment: Environment::new(),
        }
    }

    /// Renders the view as text, one block per entry.
    ///
    /// # Errors
    ///
    /// Returns [`TimelineRenderError`] when template evaluation fails.
    pub fn render(&self, view: &TimelineView) -> Result<String, TimelineRenderError> {
        self.environment
            .render_str(TIMELINE_TEMPLATE, view)
            .map_err(|err| TimelineRenderError {
                issue_id: view.issue_id,
                reason: err.to_string(),
            })
    }
}
