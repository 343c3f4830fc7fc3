//! Then steps for issue tracking BDD scenarios.

use super::world::{IssueTrackingWorld, run_async};
use facilitrack::account::domain::Department;
use facilitrack::issue::domain::{Issue, IssueCategory, IssuePriority, IssueStatus};
use rstest_bdd_macros::then;

/// Reloads the scenario issue so assertions see persisted state.
fn stored_issue(world: &IssueTrackingWorld) -> Result<Issue, eyre::Report> {
    let issue_id = world.current_issue()?.id();
    run_async(world.issues.find_by_id(issue_id))?
        .ok_or_else(|| eyre::eyre!("issue {issue_id} missing from the store"))
}

#[then(r#"the issue is classified as "{category}" with "{priority}" priority for "{department}""#)]
fn issue_is_classified(
    world: &IssueTrackingWorld,
    category: String,
    priority: String,
    department: String,
) -> Result<(), eyre::Report> {
    let expected = (
        IssueCategory::try_from(category.as_str())?,
        IssuePriority::try_from(priority.as_str())?,
        Department::try_from(department.as_str())?,
    );
    let issue = stored_issue(world)?;
    let details = issue.details();
    let actual = (details.category(), details.priority(), details.department());
    eyre::ensure!(
        actual == expected,
        "expected classification {expected:?}, found {actual:?}"
    );
    Ok(())
}

#[then(r#"the issue status is "{status}""#)]
fn issue_status_is(world: &IssueTrackingWorld, status: String) -> Result<(), eyre::Report> {
    let expected = IssueStatus::try_from(status.as_str())?;
    let issue = stored_issue(world)?;
    eyre::ensure!(
        issue.status() == expected,
        "expected status {expected}, found {}",
        issue.status()
    );
    Ok(())
}

#[then("the timeline has {count:usize} entries")]
fn timeline_has_entries(world: &IssueTrackingWorld, count: usize) -> Result<(), eyre::Report> {
    let issue = stored_issue(world)?;
    let actual = issue.timeline().len();
    eyre::ensure!(actual == count, "expected {count} timeline entries, found {actual}");
    Ok(())
}

#[then(r#"the latest timeline note is "{note}""#)]
fn latest_note_is(world: &IssueTrackingWorld, note: String) -> Result<(), eyre::Report> {
    let issue = stored_issue(world)?;
    let actual = issue.timeline().latest().note().as_str().to_owned();
    eyre::ensure!(actual == note, "expected latest note {note:?}, found {actual:?}");
    Ok(())
}

#[then("no further statuses are offered")]
fn no_further_statuses(world: &IssueTrackingWorld) -> Result<(), eyre::Report> {
    let issue = stored_issue(world)?;
    eyre::ensure!(
        issue.status().next_statuses().is_empty(),
        "expected no next statuses from {}",
        issue.status()
    );
    Ok(())
}

#[then(r#"the update fails with a "{kind}" failure"#)]
fn update_fails_with(world: &IssueTrackingWorld, kind: String) -> Result<(), eyre::Report> {
    let result = world
        .last_update_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing update result"))?;
    let Err(err) = result else {
        return Err(eyre::eyre!("expected a {kind} failure, got success"));
    };
    eyre::ensure!(
        err.kind().as_str() == kind,
        "expected a {kind} failure, got {} ({err})",
        err.kind()
    );
    Ok(())
}
