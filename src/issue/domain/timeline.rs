//! Append-only status history owned by each issue.

use super::{IssueDomainError, IssueStatus};
use crate::account::domain::{Actor, DisplayName, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Explanatory note attached to a timeline entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimelineNote(String);

impl TimelineNote {
    /// Creates a validated note.
    ///
    /// # Errors
    ///
    /// Returns [`IssueDomainError::EmptyNote`] when the value is empty after
    /// trimming.
    pub fn new(value: impl Into<String>) -> Result<Self, IssueDomainError> {
        let raw = value.into();
        let normalized = raw.trim();
        if normalized.is_empty() {
            return Err(IssueDomainError::EmptyNote);
        }
        Ok(Self(normalized.to_owned()))
    }

    /// Returns the note text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for TimelineNote {
    type Error = IssueDomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<TimelineNote> for String {
    fn from(note: TimelineNote) -> Self {
        note.0
    }
}

impl fmt::Display for TimelineNote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identity recorded against a report or a timeline entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Author {
    id: UserId,
    display_name: DisplayName,
}

impl Author {
    /// Creates an author from identity parts.
    #[must_use]
    pub const fn new(id: UserId, display_name: DisplayName) -> Self {
        Self { id, display_name }
    }

    /// Returns the user identifier.
    #[must_use]
    pub const fn id(&self) -> UserId {
        self.id
    }

    /// Returns the display name.
    #[must_use]
    pub const fn display_name(&self) -> &DisplayName {
        &self.display_name
    }
}

impl From<&Actor> for Author {
    fn from(actor: &Actor) -> Self {
        Self::new(actor.id(), actor.display_name().clone())
    }
}

/// One immutable status-change record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineEntry {
    status: IssueStatus,
    recorded_at: DateTime<Utc>,
    note: TimelineNote,
    author: Author,
}

impl TimelineEntry {
    /// Creates a timeline entry.
    #[must_use]
    pub const fn new(
        status: IssueStatus,
        recorded_at: DateTime<Utc>,
        note: TimelineNote,
        author: Author,
    ) -> Self {
        Self {
            status,
            recorded_at,
            note,
            author,
        }
    }

    /// Returns the status recorded by this entry.
    #[must_use]
    pub const fn status(&self) -> IssueStatus {
        self.status
    }

    /// Returns when the entry was recorded.
    #[must_use]
    pub const fn recorded_at(&self) -> DateTime<Utc> {
        self.recorded_at
    }

    /// Returns the explanatory note.
    #[must_use]
    pub const fn note(&self) -> &TimelineNote {
        &self.note
    }

    /// Returns who recorded the entry.
    #[must_use]
    pub const fn author(&self) -> &Author {
        &self.author
    }
}

/// Chronological status history of an issue.
///
/// The first entry is always the `submitted` entry written when the issue
/// was reported. Later entries are only ever appended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<TimelineEntry>", into = "Vec<TimelineEntry>")]
pub struct Timeline {
    submission: TimelineEntry,
    updates: Vec<TimelineEntry>,
}

impl Timeline {
    /// Starts a timeline with the submission entry for a new report.
    #[must_use]
    pub fn opened(reporter: Author, reported_at: DateTime<Utc>) -> Self {
        let note = TimelineNote(format!("Issue reported by {}", reporter.display_name()));
        Self {
            submission: TimelineEntry::new(IssueStatus::Submitted, reported_at, note, reporter),
            updates: Vec::new(),
        }
    }

    /// Returns the submission entry.
    #[must_use]
    pub const fn submission(&self) -> &TimelineEntry {
        &self.submission
    }

    /// Returns the most recent entry.
    #[must_use]
    pub fn latest(&self) -> &TimelineEntry {
        self.updates.last().unwrap_or(&self.submission)
    }

    /// Iterates entries oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &TimelineEntry> {
        std::iter::once(&self.submission).chain(self.updates.iter())
    }

    /// Returns the number of entries, including the submission entry.
    #[must_use]
    pub fn len(&self) -> usize {
        self.updates.len() + 1
    }

    /// Always `false`: a timeline holds at least its submission entry.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        false
    }

    pub(super) fn push(&mut self, entry: TimelineEntry) {
        self.updates.push(entry);
    }
}

impl TryFrom<Vec<TimelineEntry>> for Timeline {
    type Error = IssueDomainError;

    fn try_from(entries: Vec<TimelineEntry>) -> Result<Self, Self::Error> {
        let mut iter = entries.into_iter();
        let submission = iter.next().ok_or(IssueDomainError::EmptyTimeline)?;
        if submission.status() != IssueStatus::Submitted {
            return Err(IssueDomainError::TimelineMustStartSubmitted(
                submission.status(),
            ));
        }
        Ok(Self {
            submission,
            updates: iter.collect(),
        })
    }
}

impl From<Timeline> for Vec<TimelineEntry> {
    fn from(timeline: Timeline) -> Self {
        let mut entries = Vec::with_capacity(timeline.len());
        entries.push(timeline.submission);
        entries.extend(timeline.updates);
        entries
    }
}

