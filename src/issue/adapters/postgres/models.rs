//! Diesel row models for issue persistence.

use super::schema::{issue_timeline_entries, issues};
use chrono::{DateTime, Utc};
use diesel::prelude::*;

/// Query result row for issue records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = issues)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct IssueRow {
    /// Issue identifier.
    pub id: uuid::Uuid,
    /// Short summary.
    pub title: String,
    /// Free-text description.
    pub description: String,
    /// Category storage value.
    pub category: String,
    /// Priority storage value.
    pub priority: String,
    /// Status storage value.
    pub status: String,
    /// Free-text location.
    pub location: String,
    /// Department storage value.
    pub department: String,
    /// Reporter user identifier.
    pub reported_by: uuid::Uuid,
    /// Reporter display name.
    pub reporter_name: String,
    /// Optional image reference.
    pub image_url: Option<String>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Latest update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Insert model for issue records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = issues)]
pub struct NewIssueRow {
    /// Issue identifier.
    pub id: uuid::Uuid,
    /// Short summary.
    pub title: String,
    /// Free-text description.
    pub description: String,
    /// Category storage value.
    pub category: String,
    /// Priority storage value.
    pub priority: String,
    /// Status storage value.
    pub status: String,
    /// Free-text location.
    pub location: String,
    /// Department storage value.
    pub department: String,
    /// Reporter user identifier.
    pub reported_by: uuid::Uuid,
    /// Reporter display name.
    pub reporter_name: String,
    /// Optional image reference.
    pub image_url: Option<String>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Latest update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Query and insert model for timeline entries.
#[derive(Debug, Clone, Queryable, Selectable, Insertable)]
#[diesel(table_name = issue_timeline_entries)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TimelineEntryRow {
    /// Parent issue identifier.
    pub issue_id: uuid::Uuid,
    /// Position within the issue timeline.
    pub sequence: i32,
    /// Status storage value.
    pub status: String,
    /// Explanatory note.
    pub note: String,
    /// Author user identifier.
    pub updated_by: uuid::Uuid,
    /// Author display name.
    pub updated_by_name: String,
    /// Entry timestamp.
    pub created_at: DateTime<Utc>,
}
