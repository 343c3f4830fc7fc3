//! Mapping between issue aggregates and Diesel rows.

use super::models::{IssueRow, NewIssueRow, TimelineEntryRow};
use crate::account::domain::{Department, DisplayName, UserId};
use crate::issue::{
    domain::{
        Author, Issue, IssueCategory, IssueDetails, IssueId, IssuePriority, IssueStatus,
        PersistedIssueData, TimelineEntry, TimelineNote,
    },
    ports::{IssueRepositoryError, IssueRepositoryResult},
};

/// Builds the insert row for a newly reported issue.
pub(crate) fn to_new_issue_row(issue: &Issue) -> NewIssueRow {
    let details = issue.details();
    NewIssueRow {
        id: issue.id().into_inner(),
        title: details.title().to_owned(),
        description: details.description().to_owned(),
        category: details.category().as_str().to_owned(),
        priority: details.priority().as_str().to_owned(),
        status: issue.status().as_str().to_owned(),
        location: details.location().to_owned(),
        department: details.department().as_str().to_owned(),
        reported_by: issue.reporter().id().into_inner(),
        reporter_name: issue.reporter().display_name().as_str().to_owned(),
        image_url: details.image_url().map(str::to_owned),
        created_at: issue.created_at(),
        updated_at: issue.updated_at(),
    }
}

/// Builds the row for a timeline entry at the given position.
pub(crate) fn to_entry_row(
    issue_id: IssueId,
    sequence: i32,
    entry: &TimelineEntry,
) -> TimelineEntryRow {
    TimelineEntryRow {
        issue_id: issue_id.into_inner(),
        sequence,
        status: entry.status().as_str().to_owned(),
        note: entry.note().as_str().to_owned(),
        updated_by: entry.author().id().into_inner(),
        updated_by_name: entry.author().display_name().as_str().to_owned(),
        created_at: entry.recorded_at(),
    }
}

/// Builds rows for every entry of an issue timeline, numbered from zero.
pub(crate) fn to_entry_rows(issue: &Issue) -> IssueRepositoryResult<Vec<TimelineEntryRow>> {
    issue
        .timeline()
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            let sequence = i32::try_from(index).map_err(IssueRepositoryError::persistence)?;
            Ok(to_entry_row(issue.id(), sequence, entry))
        })
        .collect()
}

/// Reconstructs an issue from its row and its entry rows.
///
/// Entry rows must already be ordered by sequence. Status and `updated_at`
/// come from the entries; the denormalized columns on `issues` only serve
/// queries.
pub(crate) fn row_to_issue(
    row: IssueRow,
    entry_rows: Vec<TimelineEntryRow>,
) -> IssueRepositoryResult<Issue> {
    let IssueRow {
        id,
        title,
        description,
        category,
        priority,
        location,
        department,
        reported_by,
        reporter_name,
        image_url,
        created_at,
        ..
    } = row;

    let mut details = IssueDetails::new(title, description, location)
        .map_err(IssueRepositoryError::persistence)?
        .with_category(
            IssueCategory::try_from(category.as_str()).map_err(IssueRepositoryError::persistence)?,
        )
        .with_priority(
            IssuePriority::try_from(priority.as_str()).map_err(IssueRepositoryError::persistence)?,
        )
        .with_department(
            Department::try_from(department.as_str()).map_err(IssueRepositoryError::persistence)?,
        );
    if let Some(url) = image_url {
        details = details.with_image_url(url);
    }

    let reporter = Author::new(
        UserId::from_uuid(reported_by),
        DisplayName::new(reporter_name).map_err(IssueRepositoryError::persistence)?,
    );
    let timeline = entry_rows
        .into_iter()
        .map(row_to_entry)
        .collect::<IssueRepositoryResult<Vec<_>>>()?;

    Issue::from_persisted(PersistedIssueData {
        id: IssueId::from_uuid(id),
        details,
        reporter,
        created_at,
        timeline,
    })
    .map_err(IssueRepositoryError::persistence)
}

fn row_to_entry(row: TimelineEntryRow) -> IssueRepositoryResult<TimelineEntry> {
    let status =
        IssueStatus::try_from(row.status.as_str()).map_err(IssueRepositoryError::persistence)?;
    let note = TimelineNote::new(row.note).map_err(IssueRepositoryError::persistence)?;
    let author = Author::new(
        UserId::from_uuid(row.updated_by),
        DisplayName::new(row.updated_by_name).map_err(IssueRepositoryError::persistence)?,
    );
    Ok(TimelineEntry::new(status, row.created_at, note, author))
}
