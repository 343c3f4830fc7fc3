//! Timeline entry numbering tests for the `PostgreSQL` issue repository.

use crate::postgres::helpers::{
    StepClock, actor, morning, prepare, stored_sequences, stored_status_column, test_runtime,
};
use facilitrack::account::domain::UserRole;
use facilitrack::issue::{
    domain::{Issue, IssueDetails, IssueStatus, TimelineNote},
    ports::{IssueRepository, IssueRepositoryError},
    services::{IssueLifecycleService, ReportIssueRequest, UpdateStatusRequest},
};
use pg_embedded_setup_unpriv::TestCluster;
use pg_embedded_setup_unpriv::test_support::shared_test_cluster;
use rstest::rstest;
use std::sync::Arc;

#[rstest]
fn appended_entries_are_numbered_in_arrival_order(
    shared_test_cluster: &'static TestCluster,
) -> eyre::Result<()> {
    let prepared = prepare(shared_test_cluster, "timeline_sequence")?;
    let reporter = actor("Asha Rao", UserRole::Student)?;
    let admin = actor("Maintenance Admin", UserRole::Admin)?;
    let clock = StepClock::per_minute(morning(8)?);
    let details = IssueDetails::new("Dark corridor", "The light is broken", "Block A")?;
    let mut issue = Issue::report(details, &reporter, &clock);
    let rt = test_runtime()?;
    rt.block_on(prepared.repository.store(&issue))?;

    let changes = [
        (IssueStatus::Reviewed, "Triaged"),
        (IssueStatus::InProgress, "Electrician booked"),
        (IssueStatus::InProgress, "Waiting for parts"),
        (IssueStatus::Resolved, "Bulb replaced"),
    ];
    for (status, text) in changes {
        let entry = issue
            .record_status(status, TimelineNote::new(text)?, &admin, &clock)
            .clone();
        rt.block_on(prepared.repository.append_entry(issue.id(), &entry))?;
    }
    let restored = rt
        .block_on(prepared.repository.find_by_id(issue.id()))?
        .ok_or_else(|| eyre::eyre!("stored issue should be found"))?;

    let expected: Vec<(i32, String)> = [
        "submitted",
        "reviewed",
        "in_progress",
        "in_progress",
        "resolved",
    ]
    .into_iter()
    .zip(0..)
    .map(|(status, sequence)| (sequence, status.to_owned()))
    .collect();
    assert_eq!(
        stored_sequences(shared_test_cluster, &prepared.db_name, issue.id())?,
        expected
    );
    assert_eq!(restored, issue);
    assert_eq!(restored.status(), IssueStatus::Resolved);
    assert_eq!(
        stored_status_column(shared_test_cluster, &prepared.db_name, issue.id())?,
        "resolved"
    );
    Ok(())
}

#[rstest]
fn append_to_unknown_issue_is_not_found(
    shared_test_cluster: &'static TestCluster,
) -> eyre::Result<()> {
    let prepared = prepare(shared_test_cluster, "timeline_unknown")?;
    let reporter = actor("Asha Rao", UserRole::Student)?;
    let admin = actor("Maintenance Admin", UserRole::Admin)?;
    let clock = StepClock::per_minute(morning(8)?);
    let details = IssueDetails::new("Dark corridor", "The light is broken", "Block A")?;
    let mut unsaved = Issue::report(details, &reporter, &clock);
    let entry = unsaved
        .record_status(IssueStatus::Reviewed, TimelineNote::new("Triaged")?, &admin, &clock)
        .clone();
    let rt = test_runtime()?;

    let result = rt.block_on(prepared.repository.append_entry(unsaved.id(), &entry));

    assert!(
        matches!(result, Err(IssueRepositoryError::NotFound(id)) if id == unsaved.id()),
        "expected NotFound, got: {result:?}"
    );
    assert!(stored_sequences(shared_test_cluster, &prepared.db_name, unsaved.id())?.is_empty());
    Ok(())
}

#[rstest]
fn status_update_through_service_returns_stored_history(
    shared_test_cluster: &'static TestCluster,
) -> eyre::Result<()> {
    let prepared = prepare(shared_test_cluster, "timeline_service")?;
    let reporter = actor("Asha Rao", UserRole::Student)?;
    let admin = actor("IT Admin", UserRole::Admin)?;
    let service = IssueLifecycleService::new(
        Arc::new(prepared.repository.clone()),
        Arc::new(StepClock::per_minute(morning(9)?)),
    );
    let rt = test_runtime()?;

    let created = rt.block_on(service.report_issue(
        &reporter,
        ReportIssueRequest::new("Library wifi", "WiFi is down", "Central Library"),
    ))?;
    let updated = rt.block_on(service.update_status(
        &admin,
        UpdateStatusRequest::new(created.id(), "in_progress", "Router restart scheduled"),
    ))?;
    let reloaded = rt
        .block_on(service.find_by_id(created.id()))?
        .ok_or_else(|| eyre::eyre!("reported issue should be found"))?;

    assert_eq!(updated, reloaded);
    assert_eq!(updated.timeline().len(), 2);
    assert_eq!(updated.status(), IssueStatus::InProgress);
    assert!(updated.updated_at() > updated.created_at());
    Ok(())
}
