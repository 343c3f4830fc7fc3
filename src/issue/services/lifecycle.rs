//! Service layer for reporting issues and recording status changes.

use crate::account::domain::{Actor, Department, ParseDepartmentError, UserId};
use crate::error::FailureKind;
use crate::issue::{
    domain::{
        Issue, IssueCategory, IssueDetails, IssueDomainError, IssueId, IssuePriority,
        IssueStatus, ParseIssueCategoryError, ParseIssuePriorityError, ParseIssueStatusError,
        TimelineNote,
    },
    ports::{IssueRepository, IssueRepositoryError},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Request payload for reporting a new issue.
///
/// Category, priority, and department arrive as raw strings from a form.
/// Any that are omitted fall back to the classifier's suggestion for the
/// description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportIssueRequest {
    title: String,
    description: String,
    location: String,
    category: Option<String>,
    priority: Option<String>,
    department: Option<String>,
    image_url: Option<String>,
}

impl ReportIssueRequest {
    /// Creates a request with the required report fields.
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        location: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            location: location.into(),
            category: None,
            priority: None,
            department: None,
            image_url: None,
        }
    }

    /// Overrides the suggested category.
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Overrides the suggested priority.
    #[must_use]
    pub fn with_priority(mut self, priority: impl Into<String>) -> Self {
        self.priority = Some(priority.into());
        self
    }

    /// Overrides the suggested department.
    #[must_use]
    pub fn with_department(mut self, department: impl Into<String>) -> Self {
        self.department = Some(department.into());
        self
    }

    /// Attaches an image reference.
    #[must_use]
    pub fn with_image_url(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = Some(image_url.into());
        self
    }

    fn into_details(self) -> IssueLifecycleResult<IssueDetails> {
        let mut details = IssueDetails::new(self.title, self.description, self.location)?;
        if let Some(raw) = self.category {
            details = details.with_category(IssueCategory::try_from(raw.as_str())?);
        }
        if let Some(raw) = self.priority {
            details = details.with_priority(IssuePriority::try_from(raw.as_str())?);
        }
        if let Some(raw) = self.department {
            details = details.with_department(Department::try_from(raw.as_str())?);
        }
        if let Some(url) = self.image_url {
            details = details.with_image_url(url);
        }
        Ok(details)
    }
}

/// Request payload for recording a status change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateStatusRequest {
    issue_id: IssueId,
    status: String,
    note: String,
}

impl UpdateStatusRequest {
    /// Creates a status change request from raw form values.
    #[must_use]
    pub fn new(issue_id: IssueId, status: impl Into<String>, note: impl Into<String>) -> Self {
        Self {
            issue_id,
            status: status.into(),
            note: note.into(),
        }
    }

    /// Returns the target issue identifier.
    #[must_use]
    pub const fn issue_id(&self) -> IssueId {
        self.issue_id
    }
}

/// Criteria for the administrator issue list.
///
/// Empty criteria match every issue.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IssueQuery {
    search: Option<String>,
    status: Option<IssueStatus>,
    department: Option<Department>,
}

impl IssueQuery {
    /// Creates a query matching every issue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Restricts results to issues whose title or location contains the
    /// text, ignoring case. Blank text is ignored.
    #[must_use]
    pub fn with_search(mut self, text: impl Into<String>) -> Self {
        let raw = text.into();
        let needle = raw.trim().to_lowercase();
        self.search = (!needle.is_empty()).then_some(needle);
        self
    }

    /// Restricts results to one status.
    #[must_use]
    pub const fn with_status(mut self, status: IssueStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Restricts results to one department.
    #[must_use]
    pub const fn with_department(mut self, department: Department) -> Self {
        self.department = Some(department);
        self
    }

    /// Returns whether the issue satisfies every criterion.
    #[must_use]
    pub fn matches(&self, issue: &Issue) -> bool {
        let details = issue.details();
        let search_ok = self.search.as_deref().is_none_or(|needle| {
            details.title().to_lowercase().contains(needle)
                || details.location().to_lowercase().contains(needle)
        });
        let status_ok = self.status.is_none_or(|status| issue.status() == status);
        let department_ok = self
            .department
            .is_none_or(|department| details.department() == department);
        search_ok && status_ok && department_ok
    }
}

/// Service-level errors for issue lifecycle operations.
#[derive(Debug, Error)]
pub enum IssueLifecycleError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] IssueDomainError),
    /// The requested status is not a known status.
    #[error(transparent)]
    InvalidStatus(#[from] ParseIssueStatusError),
    /// The requested category is not a known category.
    #[error(transparent)]
    InvalidCategory(#[from] ParseIssueCategoryError),
    /// The requested priority is not a known priority.
    #[error(transparent)]
    InvalidPriority(#[from] ParseIssuePriorityError),
    /// The requested department is not a known department.
    #[error(transparent)]
    InvalidDepartment(#[from] ParseDepartmentError),
    /// The issue does not exist.
    #[error("issue not found: {0}")]
    NotFound(IssueId),
    /// The actor's role does not allow status changes.
    #[error("user {actor} is not permitted to change issue status")]
    NotPermitted {
        /// The rejected actor.
        actor: UserId,
    },
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] IssueRepositoryError),
}

impl IssueLifecycleError {
    /// Classifies the failure for presentation.
    #[must_use]
    pub const fn kind(&self) -> FailureKind {
        match self {
            Self::Domain(_)
            | Self::InvalidStatus(_)
            | Self::InvalidCategory(_)
            | Self::InvalidPriority(_)
            | Self::InvalidDepartment(_) => FailureKind::Validation,
            Self::NotFound(_) | Self::Repository(IssueRepositoryError::NotFound(_)) => {
                FailureKind::NotFound
            }
            Self::NotPermitted { .. } => FailureKind::Forbidden,
            Self::Repository(
                IssueRepositoryError::DuplicateIssue(_) | IssueRepositoryError::Persistence(_),
            ) => FailureKind::BackendUnavailable,
        }
    }
}

/// Result type for issue lifecycle service operations.
pub type IssueLifecycleResult<T> = Result<T, IssueLifecycleError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TransitionPolicy {
    Permissive,
    Guarded,
}

/// Issue lifecycle orchestration service.
#[derive(Clone)]
pub struct IssueLifecycleService<R, C>
where
    R: IssueRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> IssueLifecycleService<R, C>
where
    R: IssueRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new issue lifecycle service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Reports a new issue on behalf of the actor.
    ///
    /// # Errors
    ///
    /// Returns [`IssueLifecycleError`] when a required field is empty, an
    /// override is not a known value, or the repository rejects the issue.
    pub async fn report_issue(
        &self,
        reporter: &Actor,
        request: ReportIssueRequest,
    ) -> IssueLifecycleResult<Issue> {
        let details = request.into_details()?;
        let issue = Issue::report(details, reporter, &*self.clock);
        self.repository.store(&issue).await?;
        tracing::info!(
            issue_id = %issue.id(),
            reporter = %reporter.id(),
            category = %issue.details().category(),
            department = %issue.details().department(),
            "issue reported"
        );
        Ok(issue)
    }

    /// Retrieves an issue with its full timeline.
    ///
    /// Returns `Ok(None)` when no issue has the identifier.
    ///
    /// # Errors
    ///
    /// Returns [`IssueLifecycleError::Repository`] when persistence lookup
    /// fails.
    pub async fn find_by_id(&self, id: IssueId) -> IssueLifecycleResult<Option<Issue>> {
        Ok(self.repository.find_by_id(id).await?)
    }

    /// Lists every issue, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`IssueLifecycleError::Repository`] when persistence lookup
    /// fails.
    pub async fn list_all(&self) -> IssueLifecycleResult<Vec<Issue>> {
        Ok(self.repository.list_all().await?)
    }

    /// Lists the issues a user reported, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`IssueLifecycleError::Repository`] when persistence lookup
    /// fails.
    pub async fn list_for_reporter(&self, reporter: UserId) -> IssueLifecycleResult<Vec<Issue>> {
        Ok(self.repository.list_for_reporter(reporter).await?)
    }

    /// Lists the issues matching the query, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`IssueLifecycleError::Repository`] when persistence lookup
    /// fails.
    pub async fn filter(&self, query: &IssueQuery) -> IssueLifecycleResult<Vec<Issue>> {
        let issues = self.repository.list_all().await?;
        Ok(issues
            .into_iter()
            .filter(|issue| query.matches(issue))
            .collect())
    }

    /// Records a status change with an explanatory note.
    ///
    /// Any known status is accepted, including the current one and earlier
    /// ones; each call appends a timeline entry. The returned issue is
    /// re-read after the append and includes entries other actors recorded
    /// concurrently.
    ///
    /// # Errors
    ///
    /// Returns [`IssueLifecycleError::NotPermitted`] for non-admin actors,
    /// [`IssueLifecycleError::InvalidStatus`] for an unknown status,
    /// [`IssueLifecycleError::Domain`] for an empty note, and
    /// [`IssueLifecycleError::NotFound`] when the issue does not exist. The
    /// issue is unchanged on every failure.
    pub async fn update_status(
        &self,
        actor: &Actor,
        request: UpdateStatusRequest,
    ) -> IssueLifecycleResult<Issue> {
        self.change_status(actor, request, TransitionPolicy::Permissive)
            .await
    }

    /// Records a status change the lifecycle guard offers from the current
    /// status.
    ///
    /// # Errors
    ///
    /// Returns the same errors as [`Self::update_status`], plus
    /// [`IssueDomainError::InvalidStatusTransition`] (wrapped in
    /// [`IssueLifecycleError::Domain`]) when the target is not strictly later
    /// than the current status.
    pub async fn advance_status(
        &self,
        actor: &Actor,
        request: UpdateStatusRequest,
    ) -> IssueLifecycleResult<Issue> {
        self.change_status(actor, request, TransitionPolicy::Guarded)
            .await
    }

    async fn change_status(
        &self,
        actor: &Actor,
        request: UpdateStatusRequest,
        policy: TransitionPolicy,
    ) -> IssueLifecycleResult<Issue> {
        let issue_id = request.issue_id;
        if !actor.is_admin() {
            tracing::warn!(%issue_id, actor = %actor.id(), "status change rejected: not an admin");
            return Err(IssueLifecycleError::NotPermitted { actor: actor.id() });
        }
        let status = IssueStatus::try_from(request.status.as_str())?;
        let note = TimelineNote::new(request.note)?;

        let mut issue = self
            .repository
            .find_by_id(issue_id)
            .await?
            .ok_or(IssueLifecycleError::NotFound(issue_id))?;

        let entry = match policy {
            TransitionPolicy::Permissive => issue.record_status(status, note, actor, &*self.clock),
            TransitionPolicy::Guarded => issue
                .advance_to(status, note, actor, &*self.clock)
                .inspect_err(|err| {
                    tracing::warn!(%issue_id, error = %err, "status change rejected");
                })?,
        }
        .clone();

        self.repository.append_entry(issue_id, &entry).await?;
        tracing::info!(
            %issue_id,
            status = %status,
            actor = %actor.id(),
            "issue status updated"
        );

        // Other actors may have appended since the lookup.
        self.repository
            .find_by_id(issue_id)
            .await?
            .ok_or(IssueLifecycleError::NotFound(issue_id))
    }
}
