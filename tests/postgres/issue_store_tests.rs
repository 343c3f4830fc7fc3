//! Insert, lookup, and listing tests for the `PostgreSQL` issue repository.

use crate::postgres::helpers::{
    StepClock, actor, morning, prepare, stored_sequences, stored_status_column, test_runtime,
};
use facilitrack::account::domain::{Actor, UserRole};
use facilitrack::issue::{
    domain::{Issue, IssueDetails, IssueId},
    ports::{IssueRepository, IssueRepositoryError},
};
use mockable::Clock;
use pg_embedded_setup_unpriv::TestCluster;
use pg_embedded_setup_unpriv::test_support::shared_test_cluster;
use rstest::rstest;

fn report(title: &str, reporter: &Actor, clock: &impl Clock) -> eyre::Result<Issue> {
    let details = IssueDetails::new(title, "The water tap is leaking", "Hostel B, Room 12")?
        .with_image_url("https://img.campus.edu/tap.jpg");
    Ok(Issue::report(details, reporter, clock))
}

fn ids(issues: &[Issue]) -> Vec<IssueId> {
    issues.iter().map(Issue::id).collect()
}

#[rstest]
fn stored_issue_reads_back_with_its_submission_entry(
    shared_test_cluster: &'static TestCluster,
) -> eyre::Result<()> {
    let prepared = prepare(shared_test_cluster, "issue_store")?;
    let reporter = actor("Asha Rao", UserRole::Student)?;
    let issue = report("Leaking tap", &reporter, &StepClock::per_minute(morning(8)?))?;
    let rt = test_runtime()?;

    rt.block_on(prepared.repository.store(&issue))?;
    let restored = rt
        .block_on(prepared.repository.find_by_id(issue.id()))?
        .ok_or_else(|| eyre::eyre!("stored issue should be found"))?;

    assert_eq!(restored, issue);
    assert_eq!(
        stored_sequences(shared_test_cluster, &prepared.db_name, issue.id())?,
        vec![(0, "submitted".to_owned())]
    );
    assert_eq!(
        stored_status_column(shared_test_cluster, &prepared.db_name, issue.id())?,
        "submitted"
    );
    Ok(())
}

#[rstest]
fn duplicate_issue_is_rejected_without_extra_entries(
    shared_test_cluster: &'static TestCluster,
) -> eyre::Result<()> {
    let prepared = prepare(shared_test_cluster, "issue_duplicate")?;
    let reporter = actor("Asha Rao", UserRole::Student)?;
    let issue = report("Leaking tap", &reporter, &StepClock::per_minute(morning(8)?))?;
    let rt = test_runtime()?;

    rt.block_on(prepared.repository.store(&issue))?;
    let result = rt.block_on(prepared.repository.store(&issue));

    assert!(
        matches!(result, Err(IssueRepositoryError::DuplicateIssue(id)) if id == issue.id()),
        "expected DuplicateIssue, got: {result:?}"
    );
    assert_eq!(
        stored_sequences(shared_test_cluster, &prepared.db_name, issue.id())?,
        vec![(0, "submitted".to_owned())]
    );
    Ok(())
}

#[rstest]
fn unknown_issue_is_absent(shared_test_cluster: &'static TestCluster) -> eyre::Result<()> {
    let prepared = prepare(shared_test_cluster, "issue_absent")?;
    let rt = test_runtime()?;

    let found = rt.block_on(prepared.repository.find_by_id(IssueId::new()))?;

    assert!(found.is_none());
    Ok(())
}

#[rstest]
fn listing_is_newest_first_with_ties_ordered_by_id(
    shared_test_cluster: &'static TestCluster,
) -> eyre::Result<()> {
    let prepared = prepare(shared_test_cluster, "issue_listing")?;
    let asha = actor("Asha Rao", UserRole::Student)?;
    let ben = actor("Ben Okafor", UserRole::Student)?;
    let early = StepClock::per_minute(morning(8)?);
    let tied = StepClock::frozen(morning(10)?);
    let first = report("Dripping shower", &asha, &early)?;
    let second = report("Blocked drain", &ben, &early)?;
    let tied_a = report("Burst pipe", &asha, &tied)?;
    let tied_b = report("Leaking cistern", &ben, &tied)?;
    let rt = test_runtime()?;

    for issue in [&first, &tied_a, &second, &tied_b] {
        rt.block_on(prepared.repository.store(issue))?;
    }
    let all = rt.block_on(prepared.repository.list_all())?;
    let mine = rt.block_on(prepared.repository.list_for_reporter(asha.id()))?;

    let mut tied_ids = vec![tied_a.id(), tied_b.id()];
    tied_ids.sort_by_key(|id| id.into_inner());
    let mut expected = tied_ids;
    expected.extend([second.id(), first.id()]);
    assert_eq!(ids(&all), expected);
    assert_eq!(ids(&mine), vec![tied_a.id(), first.id()]);
    assert!(all.iter().all(|issue| issue.timeline().len() == 1));
    Ok(())
}
