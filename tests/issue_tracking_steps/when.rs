//! When steps for issue tracking BDD scenarios.

use super::given::report;
use super::world::{IssueTrackingWorld, run_async};
use facilitrack::account::domain::Actor;
use facilitrack::issue::domain::IssueId;
use facilitrack::issue::services::UpdateStatusRequest;
use rstest_bdd_macros::when;

#[derive(Clone, Copy)]
enum Mode {
    Update,
    Advance,
}

fn apply(world: &mut IssueTrackingWorld, actor: &Actor, request: UpdateStatusRequest, mode: Mode) {
    let result = run_async(async {
        match mode {
            Mode::Update => world.issues.update_status(actor, request).await,
            Mode::Advance => world.issues.advance_status(actor, request).await,
        }
    });
    if let Ok(ref updated) = result {
        world.current_issue = Some(updated.clone());
    }
    world.last_update_result = Some(result);
}

#[when(r#"the student reports "{description}" at "{location}""#)]
fn student_reports(
    world: &mut IssueTrackingWorld,
    description: String,
    location: String,
) -> Result<(), eyre::Report> {
    report(world, description, location)
}

#[when(r#"the admin updates the issue to "{status}" with note "{note}""#)]
fn admin_updates(
    world: &mut IssueTrackingWorld,
    status: String,
    note: String,
) -> Result<(), eyre::Report> {
    let admin = world.admin()?.clone();
    let issue_id = world.current_issue()?.id();
    apply(world, &admin, UpdateStatusRequest::new(issue_id, status, note), Mode::Update);
    Ok(())
}

#[when(r#"the admin advances the issue to "{status}" with note "{note}""#)]
fn admin_advances(
    world: &mut IssueTrackingWorld,
    status: String,
    note: String,
) -> Result<(), eyre::Report> {
    let admin = world.admin()?.clone();
    let issue_id = world.current_issue()?.id();
    apply(world, &admin, UpdateStatusRequest::new(issue_id, status, note), Mode::Advance);
    Ok(())
}

#[when(r#"the student updates the issue to "{status}" with note "{note}""#)]
fn student_updates(
    world: &mut IssueTrackingWorld,
    status: String,
    note: String,
) -> Result<(), eyre::Report> {
    let student = world.student()?.clone();
    let issue_id = world.current_issue()?.id();
    apply(world, &student, UpdateStatusRequest::new(issue_id, status, note), Mode::Update);
    Ok(())
}

#[when(r#"the admin updates an unknown issue to "{status}" with note "{note}""#)]
fn admin_updates_unknown(
    world: &mut IssueTrackingWorld,
    status: String,
    note: String,
) -> Result<(), eyre::Report> {
    let admin = world.admin()?.clone();
    apply(world, &admin, UpdateStatusRequest::new(IssueId::new(), status, note), Mode::Update);
    Ok(())
}
