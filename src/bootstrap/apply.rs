//! Applying seed data through the public services.

use super::{BootstrapError, BootstrapResult, SeedData, SeedIssue};
use crate::account::{
    domain::{Actor, User},
    ports::{UserDirectory, UserDirectoryError},
    services::{AccountService, AccountServiceError, RegisterAdminRequest, SignUpRequest},
};
use crate::issue::{
    ports::IssueRepository,
    services::{IssueLifecycleService, ReportIssueRequest, UpdateStatusRequest},
};
use mockable::Clock;

/// Outcome of applying seed data.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BootstrapReport {
    /// Accounts created.
    pub registered_accounts: usize,
    /// Emails skipped because an account already existed.
    pub skipped_accounts: Vec<String>,
    /// Issues reported.
    pub issues_reported: usize,
    /// Status changes replayed.
    pub status_changes: usize,
}

/// Applies seed data once: accounts first, then issues with their history.
///
/// Already-registered emails are skipped. Issues are reported by their
/// reporter account and their history is replayed through
/// [`IssueLifecycleService::update_status`], so every rule that applies to
/// live updates applies to seeded ones.
///
/// # Errors
///
/// Returns [`BootstrapError::UnknownAccount`] when an issue names an email
/// with no account, or the wrapped service error when a record is rejected.
/// Records applied before the failure are kept.
pub async fn apply_seed<D, R, C>(
    seed: &SeedData,
    accounts: &AccountService<D, C>,
    issues: &IssueLifecycleService<R, C>,
) -> BootstrapResult<BootstrapReport>
where
    D: UserDirectory,
    R: IssueRepository,
    C: Clock + Send + Sync,
{
    let mut report = BootstrapReport::default();

    for admin in &seed.admins {
        let request =
            RegisterAdminRequest::new(&admin.name, &admin.email, &admin.department);
        record_registration(&mut report, &admin.email, accounts.register_admin(request).await)?;
    }
    for student in &seed.students {
        let request = SignUpRequest::new(&student.name, &student.email);
        record_registration(&mut report, &student.email, accounts.sign_up(request).await)?;
    }

    for seed_issue in &seed.issues {
        let reporter = actor_for(accounts, &seed_issue.reporter).await?;
        let issue = issues
            .report_issue(&reporter, report_request(seed_issue))
            .await?;
        report.issues_reported += 1;

        for change in &seed_issue.history {
            let actor = actor_for(accounts, &change.actor).await?;
            issues
                .update_status(
                    &actor,
                    UpdateStatusRequest::new(issue.id(), &change.status, &change.note),
                )
                .await?;
            report.status_changes += 1;
        }
    }

    tracing::info!(
        registered = report.registered_accounts,
        skipped = report.skipped_accounts.len(),
        issues = report.issues_reported,
        status_changes = report.status_changes,
        "seed data applied"
    );
    Ok(report)
}

fn record_registration(
    report: &mut BootstrapReport,
    email: &str,
    outcome: Result<User, AccountServiceError>,
) -> BootstrapResult<()> {
    match outcome {
        Ok(_) => {
            report.registered_accounts += 1;
            Ok(())
        }
        Err(AccountServiceError::Directory(UserDirectoryError::DuplicateEmail(_))) => {
            tracing::info!(email, "seed account already registered; skipping");
            report.skipped_accounts.push(email.to_owned());
            Ok(())
        }
        Err(err) => Err(err.into()),
    }
}

async fn actor_for<D, C>(accounts: &AccountService<D, C>, email: &str) -> BootstrapResult<Actor>
where
    D: UserDirectory,
    C: Clock + Send + Sync,
{
    accounts
        .find_by_email(email)
        .await?
        .map(|user| user.as_actor())
        .ok_or_else(|| BootstrapError::UnknownAccount(email.to_owned()))
}

fn report_request(seed_issue: &SeedIssue) -> ReportIssueRequest {
    let mut request = ReportIssueRequest::new(
        &seed_issue.title,
        &seed_issue.description,
        &seed_issue.location,
    );
    if let Some(category) = &seed_issue.category {
        request = request.with_category(category);
    }
    if let Some(priority) = &seed_issue.priority {
        request = request.with_priority(priority);
    }
    if let Some(department) = &seed_issue.department {
        request = request.with_department(department);
    }
    if let Some(image_url) = &seed_issue.image_url {
        request = request.with_image_url(image_url);
    }
    request
}
