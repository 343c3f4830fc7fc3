//! In-memory repository for issue lifecycle tests and demos.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::account::domain::UserId;
use crate::issue::{
    domain::{Issue, IssueId, TimelineEntry},
    ports::{IssueRepository, IssueRepositoryError, IssueRepositoryResult},
};

/// Thread-safe in-memory issue repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryIssueRepository {
    state: Arc<RwLock<InMemoryIssueState>>,
}

#[derive(Debug, Default)]
struct InMemoryIssueState {
    issues: HashMap<IssueId, Issue>,
    reporter_index: HashMap<UserId, Vec<IssueId>>,
}

impl InMemoryIssueRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn lock_error(err: &impl ToString) -> IssueRepositoryError {
    IssueRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

/// Orders issues newest-created first, breaking ties by identifier so the
/// listing is stable.
fn newest_first(mut issues: Vec<Issue>) -> Vec<Issue> {
    issues.sort_by(|left, right| {
        right
            .created_at()
            .cmp(&left.created_at())
            .then_with(|| left.id().into_inner().cmp(&right.id().into_inner()))
    });
    issues
}

#[async_trait]
impl IssueRepository for InMemoryIssueRepository {
    async fn store(&self, issue: &Issue) -> IssueRepositoryResult<()> {
        let mut state = self.state.write().map_err(|err| lock_error(&err))?;
        if state.issues.contains_key(&issue.id()) {
            return Err(IssueRepositoryError::DuplicateIssue(issue.id()));
        }

        state
            .reporter_index
            .entry(issue.reporter().id())
            .or_default()
            .push(issue.id());
        state.issues.insert(issue.id(), issue.clone());
        Ok(())
    }

    async fn append_entry(
        &self,
        id: IssueId,
        entry: &TimelineEntry,
    ) -> IssueRepositoryResult<()> {
        let mut state = self.state.write().map_err(|err| lock_error(&err))?;
        let issue = state
            .issues
            .get_mut(&id)
            .ok_or(IssueRepositoryError::NotFound(id))?;
        issue.append_entry(entry.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: IssueId) -> IssueRepositoryResult<Option<Issue>> {
        let state = self.state.read().map_err(|err| lock_error(&err))?;
        Ok(state.issues.get(&id).cloned())
    }

    async fn list_all(&self) -> IssueRepositoryResult<Vec<Issue>> {
        let state = self.state.read().map_err(|err| lock_error(&err))?;
        Ok(newest_first(state.issues.values().cloned().collect()))
    }

    async fn list_for_reporter(&self, reporter: UserId) -> IssueRepositoryResult<Vec<Issue>> {
        let state = self.state.read().map_err(|err| lock_error(&err))?;
        let issues = state
            .reporter_index
            .get(&reporter)
            .map(|ids| {
                ids.iter()
                    .filter_map(|id| state.issues.get(id).cloned())
                    .collect()
            })
            .unwrap_or_default();
        Ok(newest_first(issues))
    }
}
