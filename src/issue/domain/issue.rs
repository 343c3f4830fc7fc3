//! Issue aggregate root and report details.

use super::{
    Author, Classification, IssueCategory, IssueDomainError, IssueId, IssuePriority, IssueStatus,
    Timeline, TimelineEntry, TimelineNote, classify,
};
use crate::account::domain::{Actor, Department};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Descriptive fields supplied when an issue is reported.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawIssueDetails", into = "RawIssueDetails")]
pub struct IssueDetails {
    title: String,
    description: String,
    location: String,
    category: IssueCategory,
    priority: IssuePriority,
    department: Department,
    image_url: Option<String>,
}

impl IssueDetails {
    /// Creates report details with required fields.
    ///
    /// Category, priority, and department start from the classifier's
    /// suggestion for the description and may be overridden.
    ///
    /// # Errors
    ///
    /// Returns [`IssueDomainError::EmptyTitle`],
    /// [`IssueDomainError::EmptyDescription`], or
    /// [`IssueDomainError::EmptyLocation`] when the corresponding field is
    /// empty after trimming.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        location: impl Into<String>,
    ) -> Result<Self, IssueDomainError> {
        let required_title = required(title.into(), IssueDomainError::EmptyTitle)?;
        let required_description =
            required(description.into(), IssueDomainError::EmptyDescription)?;
        let required_location = required(location.into(), IssueDomainError::EmptyLocation)?;
        let suggestion = classify(&required_description);

        Ok(Self {
            title: required_title,
            description: required_description,
            location: required_location,
            category: suggestion.category,
            priority: suggestion.priority,
            department: suggestion.department,
            image_url: None,
        })
    }

    /// Replaces category, priority, and department together.
    #[must_use]
    pub const fn with_classification(mut self, classification: Classification) -> Self {
        self.category = classification.category;
        self.priority = classification.priority;
        self.department = classification.department;
        self
    }

    /// Sets the category.
    #[must_use]
    pub const fn with_category(mut self, category: IssueCategory) -> Self {
        self.category = category;
        self
    }

    /// Sets the priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: IssuePriority) -> Self {
        self.priority = priority;
        self
    }

    /// Sets the owning department.
    #[must_use]
    pub const fn with_department(mut self, department: Department) -> Self {
        self.department = department;
        self
    }

    /// Attaches an image reference. Blank values clear it.
    #[must_use]
    pub fn with_image_url(mut self, image_url: impl Into<String>) -> Self {
        let value = image_url.into();
        let normalized = value.trim();
        self.image_url = (!normalized.is_empty()).then(|| normalized.to_owned());
        self
    }

    /// Returns the title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the free-text location.
    #[must_use]
    pub fn location(&self) -> &str {
        &self.location
    }

    /// Returns the category.
    #[must_use]
    pub const fn category(&self) -> IssueCategory {
        self.category
    }

    /// Returns the priority.
    #[must_use]
    pub const fn priority(&self) -> IssuePriority {
        self.priority
    }

    /// Returns the owning department.
    #[must_use]
    pub const fn department(&self) -> Department {
        self.department
    }

    /// Returns the image reference, if any.
    #[must_use]
    pub fn image_url(&self) -> Option<&str> {
        self.image_url.as_deref()
    }
}

#[derive(Serialize, Deserialize)]
struct RawIssueDetails {
    title: String,
    description: String,
    location: String,
    category: IssueCategory,
    priority: IssuePriority,
    department: Department,
    image_url: Option<String>,
}

impl TryFrom<RawIssueDetails> for IssueDetails {
    type Error = IssueDomainError;

    fn try_from(raw: RawIssueDetails) -> Result<Self, Self::Error> {
        Ok(Self::new(raw.title, raw.description, raw.location)?
            .with_category(raw.category)
            .with_priority(raw.priority)
            .with_department(raw.department)
            .with_image_url(raw.image_url.unwrap_or_default()))
    }
}

impl From<IssueDetails> for RawIssueDetails {
    fn from(details: IssueDetails) -> Self {
        Self {
            title: details.title,
            description: details.description,
            location: details.location,
            category: details.category,
            priority: details.priority,
            department: details.department,
            image_url: details.image_url,
        }
    }
}

fn required(value: String, missing: IssueDomainError) -> Result<String, IssueDomainError> {
    let normalized = value.trim();
    if normalized.is_empty() {
        return Err(missing);
    }
    Ok(normalized.to_owned())
}

/// Issue aggregate root.
///
/// Status and `updated_at` are read from the latest timeline entry, so they
/// always agree with the history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    id: IssueId,
    details: IssueDetails,
    reporter: Author,
    created_at: DateTime<Utc>,
    timeline: Timeline,
}

/// Parameter object for reconstructing a persisted issue aggregate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedIssueData {
    /// Persisted issue identifier.
    pub id: IssueId,
    /// Persisted report details.
    pub details: IssueDetails,
    /// Persisted reporter identity.
    pub reporter: Author,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted timeline entries, oldest first.
    pub timeline: Vec<TimelineEntry>,
}

impl Issue {
    /// Reports a new issue.
    ///
    /// The issue starts `submitted` with a single timeline entry authored by
    /// the reporter, and `created_at` equals `updated_at`.
    #[must_use]
    pub fn report(details: IssueDetails, reporter: &Actor, clock: &impl Clock) -> Self {
        let timestamp = clock.utc();
        let author = Author::from(reporter);

        Self {
            id: IssueId::new(),
            details,
            timeline: Timeline::opened(author.clone(), timestamp),
            reporter: author,
            created_at: timestamp,
        }
    }

    /// Reconstructs an issue from persisted storage.
    ///
    /// # Errors
    ///
    /// Returns [`IssueDomainError::EmptyTimeline`] or
    /// [`IssueDomainError::TimelineMustStartSubmitted`] when the stored
    /// history is not a valid timeline.
    pub fn from_persisted(data: PersistedIssueData) -> Result<Self, IssueDomainError> {
        Ok(Self {
            id: data.id,
            details: data.details,
            reporter: data.reporter,
            created_at: data.created_at,
            timeline: Timeline::try_from(data.timeline)?,
        })
    }

    /// Returns the issue identifier.
    #[must_use]
    pub const fn id(&self) -> IssueId {
        self.id
    }

    /// Returns the report details.
    #[must_use]
    pub const fn details(&self) -> &IssueDetails {
        &self.details
    }

    /// Returns who reported the issue.
    #[must_use]
    pub const fn reporter(&self) -> &Author {
        &self.reporter
    }

    /// Returns the current status.
    #[must_use]
    pub fn status(&self) -> IssueStatus {
        self.timeline.latest().status()
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the timestamp of the latest status change.
    #[must_use]
    pub fn updated_at(&self) -> DateTime<Utc> {
        self.timeline.latest().recorded_at()
    }

    /// Returns the status history.
    #[must_use]
    pub const fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    /// Records a status change without consulting the lifecycle guard.
    ///
    /// Repeating the same call appends the same status again; history is
    /// never deduplicated.
    pub fn record_status(
        &mut self,
        status: IssueStatus,
        note: TimelineNote,
        actor: &Actor,
        clock: &impl Clock,
    ) -> &TimelineEntry {
        let entry = TimelineEntry::new(status, clock.utc(), note, Author::from(actor));
        self.timeline.push(entry);
        self.timeline.latest()
    }

    /// Records a status change the lifecycle guard offers from the current
    /// status.
    ///
    /// # Errors
    ///
    /// Returns [`IssueDomainError::InvalidStatusTransition`] when `status` is
    /// not strictly later than the current status. The issue is unchanged.
    pub fn advance_to(
        &mut self,
        status: IssueStatus,
        note: TimelineNote,
        actor: &Actor,
        clock: &impl Clock,
    ) -> Result<&TimelineEntry, IssueDomainError> {
        let current = self.status();
        if !current.can_advance_to(status) {
            return Err(IssueDomainError::InvalidStatusTransition {
                issue_id: self.id,
                from: current,
                to: status,
            });
        }
        Ok(self.record_status(status, note, actor, clock))
    }

    /// Appends an entry that has already been persisted elsewhere.
    pub(crate) fn append_entry(&mut self, entry: TimelineEntry) {
        self.timeline.push(entry);
    }
}
