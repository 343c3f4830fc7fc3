//! `PostgreSQL` repository implementation for issue storage.

use super::{
    conversion::{row_to_issue, to_entry_row, to_entry_rows, to_new_issue_row},
    models::{IssueRow, TimelineEntryRow},
    schema::{issue_timeline_entries, issues},
};
use crate::account::domain::UserId;
use crate::issue::{
    domain::{Issue, IssueId, TimelineEntry},
    ports::{IssueRepository, IssueRepositoryError, IssueRepositoryResult},
};
use async_trait::async_trait;
use diesel::dsl::max;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use std::collections::HashMap;

/// `PostgreSQL` connection pool type used by issue adapters.
pub type IssuePgPool = Pool<ConnectionManager<PgConnection>>;

/// `PostgreSQL`-backed issue repository.
///
/// Issues live in `issues`; their history lives in `issue_timeline_entries`
/// keyed by parent issue and ordered by a per-issue sequence number.
#[derive(Debug, Clone)]
pub struct PostgresIssueRepository {
    pool: IssuePgPool,
}

impl PostgresIssueRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: IssuePgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> IssueRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> IssueRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(IssueRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(IssueRepositoryError::persistence)?
    }
}

#[async_trait]
impl IssueRepository for PostgresIssueRepository {
    async fn store(&self, issue: &Issue) -> IssueRepositoryResult<()> {
        let issue_id = issue.id();
        let new_row = to_new_issue_row(issue);
        let entry_rows = to_entry_rows(issue)?;

        self.run_blocking(move |connection| {
            connection
                .transaction::<_, DieselError, _>(|tx| {
                    diesel::insert_into(issues::table)
                        .values(&new_row)
                        .execute(tx)?;
                    diesel::insert_into(issue_timeline_entries::table)
                        .values(&entry_rows)
                        .execute(tx)?;
                    Ok(())
                })
                .map_err(|err| match err {
                    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                        IssueRepositoryError::DuplicateIssue(issue_id)
                    }
                    _ => IssueRepositoryError::persistence(err),
                })
        })
        .await
    }

    async fn append_entry(
        &self,
        id: IssueId,
        entry: &TimelineEntry,
    ) -> IssueRepositoryResult<()> {
        let entry = entry.clone();
        self.run_blocking(move |connection| {
            let appended = connection
                .transaction::<_, DieselError, _>(|tx| {
                    // Locking the parent row serializes sequence allocation
                    // for concurrent appends to the same issue.
                    let parent = issues::table
                        .find(id.into_inner())
                        .select(issues::id)
                        .for_update()
                        .first::<uuid::Uuid>(tx)
                        .optional()?;
                    if parent.is_none() {
                        return Ok(false);
                    }

                    let last_sequence = issue_timeline_entries::table
                        .filter(issue_timeline_entries::issue_id.eq(id.into_inner()))
                        .select(max(issue_timeline_entries::sequence))
                        .first::<Option<i32>>(tx)?;
                    let next_sequence = last_sequence.map_or(0, |sequence| sequence + 1);

                    diesel::insert_into(issue_timeline_entries::table)
                        .values(&to_entry_row(id, next_sequence, &entry))
                        .execute(tx)?;
                    diesel::update(issues::table.find(id.into_inner()))
                        .set((
                            issues::status.eq(entry.status().as_str()),
                            issues::updated_at.eq(entry.recorded_at()),
                        ))
                        .execute(tx)?;
                    Ok(true)
                })
                .map_err(IssueRepositoryError::persistence)?;

            if appended {
                Ok(())
            } else {
                Err(IssueRepositoryError::NotFound(id))
            }
        })
        .await
    }

    async fn find_by_id(&self, id: IssueId) -> IssueRepositoryResult<Option<Issue>> {
        self.run_blocking(move |connection| {
            let loaded = read_snapshot(connection, |tx| {
                let row = issues::table
                    .find(id.into_inner())
                    .select(IssueRow::as_select())
                    .first::<IssueRow>(tx)
                    .optional()?;
                let Some(issue_row) = row else {
                    return Ok(None);
                };
                let entry_rows = load_entries(tx, vec![issue_row.id])?;
                Ok(Some((issue_row, entry_rows)))
            })?;

            loaded
                .map(|(issue_row, entry_rows)| row_to_issue(issue_row, entry_rows))
                .transpose()
        })
        .await
    }

    async fn list_all(&self) -> IssueRepositoryResult<Vec<Issue>> {
        self.run_blocking(|connection| {
            let (rows, entry_rows) = read_snapshot(connection, |tx| {
                let rows = issues::table
                    .order((issues::created_at.desc(), issues::id.asc()))
                    .select(IssueRow::as_select())
                    .load::<IssueRow>(tx)?;
                let entry_rows = load_entries(tx, rows.iter().map(|row| row.id).collect())?;
                Ok((rows, entry_rows))
            })?;
            assemble(rows, entry_rows)
        })
        .await
    }

    async fn list_for_reporter(&self, reporter: UserId) -> IssueRepositoryResult<Vec<Issue>> {
        self.run_blocking(move |connection| {
            let (rows, entry_rows) = read_snapshot(connection, |tx| {
                let rows = issues::table
                    .filter(issues::reported_by.eq(reporter.into_inner()))
                    .order((issues::created_at.desc(), issues::id.asc()))
                    .select(IssueRow::as_select())
                    .load::<IssueRow>(tx)?;
                let entry_rows = load_entries(tx, rows.iter().map(|row| row.id).collect())?;
                Ok((rows, entry_rows))
            })?;
            assemble(rows, entry_rows)
        })
        .await
    }
}

/// Runs the reads in one read-only `REPEATABLE READ` transaction so issue
/// rows and their entries come from the same snapshot.
fn read_snapshot<T, F>(connection: &mut PgConnection, reads: F) -> IssueRepositoryResult<T>
where
    F: FnOnce(&mut PgConnection) -> QueryResult<T>,
{
    connection
        .build_transaction()
        .read_only()
        .repeatable_read()
        .run::<T, DieselError, _>(reads)
        .map_err(IssueRepositoryError::persistence)
}

fn load_entries(
    connection: &mut PgConnection,
    ids: Vec<uuid::Uuid>,
) -> QueryResult<Vec<TimelineEntryRow>> {
    issue_timeline_entries::table
        .filter(issue_timeline_entries::issue_id.eq_any(ids))
        .order((
            issue_timeline_entries::issue_id.asc(),
            issue_timeline_entries::sequence.asc(),
        ))
        .select(TimelineEntryRow::as_select())
        .load::<TimelineEntryRow>(connection)
}

/// Groups entry rows under their issue rows and assembles aggregates,
/// preserving the issue row order.
fn assemble(
    rows: Vec<IssueRow>,
    entry_rows: Vec<TimelineEntryRow>,
) -> IssueRepositoryResult<Vec<Issue>> {
    let mut entries_by_issue: HashMap<uuid::Uuid, Vec<TimelineEntryRow>> = HashMap::new();
    for entry_row in entry_rows {
        entries_by_issue
            .entry(entry_row.issue_id)
            .or_default()
            .push(entry_row);
    }

    rows.into_iter()
        .map(|row| {
            let entries = entries_by_issue.remove(&row.id).unwrap_or_default();
            row_to_issue(row, entries)
        })
        .collect()
}
