//! In-memory integration tests for issue reporting and status tracking.

use super::helpers::{Campus, campus};
use facilitrack::{
    account::domain::Department,
    error::FailureKind,
    issue::{
        domain::{IssueCategory, IssueStatus},
        services::{IssueQuery, ReportIssueRequest, TimelineRenderer, TimelineView, UpdateStatusRequest},
    },
};
use rstest::rstest;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn reported_issue_is_routed_and_visible_to_reporter(
    campus: Result<Campus, eyre::Report>,
) -> Result<(), eyre::Report> {
    let campus = campus?;
    let asha = campus.actor("asha@campus.edu").await?;
    let ben = campus.actor("ben@campus.edu").await?;

    let created = campus
        .issues
        .report_issue(
            &asha,
            ReportIssueRequest::new(
                "Library wifi",
                "WiFi is down in the library",
                "Central Library, 2nd floor",
            ),
        )
        .await?;

    let owner = campus
        .accounts
        .suggest_owner(created.details().department())
        .await?
        .ok_or_else(|| eyre::eyre!("IT should have an admin"))?;
    let mine = campus.issues.list_for_reporter(asha.id()).await?;
    let bens = campus.issues.list_for_reporter(ben.id()).await?;

    eyre::ensure!(
        created.details().category() == IssueCategory::Network,
        "wifi report should be classified as network"
    );
    eyre::ensure!(
        owner.email().as_str() == "it@campus.edu",
        "IT issues should route to it@campus.edu"
    );
    eyre::ensure!(mine.len() == 1, "reporter should see their issue");
    eyre::ensure!(bens.is_empty(), "other students should not see the issue");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn admin_walks_issue_through_lifecycle(
    campus: Result<Campus, eyre::Report>,
) -> Result<(), eyre::Report> {
    let campus = campus?;
    let asha = campus.actor("asha@campus.edu").await?;
    let admin = campus.actor("maintenance@campus.edu").await?;
    let created = campus
        .issues
        .report_issue(
            &asha,
            ReportIssueRequest::new("Leaking pipe", "Pipe burst in lab", "Chemistry Lab"),
        )
        .await?;

    for (status, note) in [
        ("reviewed", "Confirmed on site"),
        ("in_progress", "Plumber on the way"),
        ("resolved", "Pipe replaced"),
        ("closed", "Reporter confirmed"),
    ] {
        campus
            .issues
            .advance_status(&admin, UpdateStatusRequest::new(created.id(), status, note))
            .await?;
    }
    let reopen = campus
        .issues
        .advance_status(
            &admin,
            UpdateStatusRequest::new(created.id(), "in_progress", "Still leaking"),
        )
        .await;
    let stored = campus
        .issues
        .find_by_id(created.id())
        .await?
        .ok_or_else(|| eyre::eyre!("issue should exist"))?;

    let Err(err) = reopen else {
        eyre::bail!("closed issue should not advance");
    };
    eyre::ensure!(
        err.kind() == FailureKind::Validation,
        "reopening a closed issue should be a validation failure"
    );
    eyre::ensure!(stored.status() == IssueStatus::Closed, "issue should stay closed");
    eyre::ensure!(
        stored.timeline().len() == 5,
        "timeline should hold submission plus four changes"
    );
    eyre::ensure!(
        stored.updated_at() > stored.created_at(),
        "updated_at should move past created_at"
    );

    let text = TimelineRenderer::new().render(&TimelineView::from_issue(&stored))?;
    eyre::ensure!(text.contains("Closed (current)"), "latest entry should be marked current");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn admin_list_filters_newest_first(
    campus: Result<Campus, eyre::Report>,
) -> Result<(), eyre::Report> {
    let campus = campus?;
    let asha = campus.actor("asha@campus.edu").await?;
    let mut reported = Vec::new();
    for (title, description, location) in [
        ("Dirty corridor", "Garbage near stairs", "Hostel B"),
        ("Broken window", "Window pane cracked", "Hostel B, Room 4"),
        ("Gate lock", "The gate lock is jammed", "North Gate"),
    ] {
        let issue = campus
            .issues
            .report_issue(&asha, ReportIssueRequest::new(title, description, location))
            .await?;
        reported.push(issue.id());
    }

    let hostel = campus
        .issues
        .filter(&IssueQuery::new().with_search("HOSTEL b"))
        .await?;
    let maintenance = campus
        .issues
        .filter(&IssueQuery::new().with_department(Department::Maintenance))
        .await?;
    let all = campus.issues.list_all().await?;

    let hostel_titles: Vec<&str> = hostel.iter().map(|issue| issue.details().title()).collect();
    eyre::ensure!(
        hostel_titles == vec!["Broken window", "Dirty corridor"],
        "search should match location, newest first"
    );
    eyre::ensure!(maintenance.len() == 1, "only the window report belongs to Maintenance");
    let newest_first: Vec<_> = reported.into_iter().rev().collect();
    eyre::ensure!(
        all.iter().map(|issue| issue.id()).collect::<Vec<_>>() == newest_first,
        "listing should be newest first"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn student_update_leaves_issue_untouched(
    campus: Result<Campus, eyre::Report>,
) -> Result<(), eyre::Report> {
    let campus = campus?;
    let ben = campus.actor("ben@campus.edu").await?;
    let created = campus
        .issues
        .report_issue(
            &ben,
            ReportIssueRequest::new("Smelly bin", "Bad smell from trash bin", "Canteen"),
        )
        .await?;

    let result = campus
        .issues
        .update_status(&ben, UpdateStatusRequest::new(created.id(), "resolved", "Fixed it"))
        .await;
    let stored = campus.issues.find_by_id(created.id()).await?;

    let Err(err) = result else {
        eyre::bail!("student update should be rejected");
    };
    eyre::ensure!(err.kind() == FailureKind::Forbidden, "student update should be forbidden");
    eyre::ensure!(stored.as_ref() == Some(&created), "issue should be unchanged");
    Ok(())
}
