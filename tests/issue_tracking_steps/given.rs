//! Given steps for issue tracking BDD scenarios.

use super::world::{IssueTrackingWorld, run_async};
use facilitrack::account::services::{RegisterAdminRequest, SignUpRequest};
use facilitrack::issue::services::ReportIssueRequest;
use eyre::WrapErr;
use rstest_bdd_macros::given;

#[given(r#"a student "{student_email}" and an admin "{admin_email}" for department "{department}""#)]
fn student_and_admin(
    world: &mut IssueTrackingWorld,
    student_email: String,
    admin_email: String,
    department: String,
) -> Result<(), eyre::Report> {
    let student = run_async(
        world
            .accounts
            .sign_up(SignUpRequest::new("Asha Rao", student_email)),
    )
    .wrap_err("sign up scenario student")?;
    let admin = run_async(world.accounts.register_admin(RegisterAdminRequest::new(
        format!("{department} Desk"),
        admin_email,
        department,
    )))
    .wrap_err("register scenario admin")?;

    world.student = Some(student.as_actor());
    world.admin = Some(admin.as_actor());
    Ok(())
}

#[given(r#"the student reported "{description}" at "{location}""#)]
fn student_reported(
    world: &mut IssueTrackingWorld,
    description: String,
    location: String,
) -> Result<(), eyre::Report> {
    report(world, description, location)
}

/// Reports an issue as the scenario student and remembers it.
///
/// # Errors
///
/// Returns an error when the student is missing or the report is rejected.
pub fn report(
    world: &mut IssueTrackingWorld,
    description: String,
    location: String,
) -> Result<(), eyre::Report> {
    let student = world.student()?.clone();
    let request = ReportIssueRequest::new("Campus report", description, location);
    let created = run_async(world.issues.report_issue(&student, request))
        .wrap_err("report scenario issue")?;
    world.current_issue = Some(created);
    Ok(())
}
