//! In-memory integration tests for dashboard statistics.

use std::sync::Arc;

use super::helpers::{Campus, campus};
use facilitrack::{
    account::domain::Department,
    analytics::AnalyticsService,
    issue::services::{ReportIssueRequest, UpdateStatusRequest},
};
use rstest::rstest;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn dashboard_tracks_department_resolution(
    campus: Result<Campus, eyre::Report>,
) -> Result<(), eyre::Report> {
    let campus = campus?;
    let asha = campus.actor("asha@campus.edu").await?;
    let admin = campus.actor("maintenance@campus.edu").await?;
    let analytics = AnalyticsService::new(Arc::clone(&campus.repository));

    let empty = analytics.dashboard().await?;
    eyre::ensure!(empty.summary.total == 0, "fresh campus should have no issues");
    eyre::ensure!(
        empty.by_department.iter().all(|stats| stats.resolution_rate == 0),
        "empty departments should report a zero rate"
    );

    let mut maintenance_ids = Vec::new();
    for description in ["Fan not spinning", "Tap dripping", "Desk drawer stuck"] {
        let issue = campus
            .issues
            .report_issue(
                &asha,
                ReportIssueRequest::new("Repair needed", description, "Block C"),
            )
            .await?;
        maintenance_ids.push(issue.id());
    }
    let first = maintenance_ids
        .first()
        .copied()
        .ok_or_else(|| eyre::eyre!("expected a reported issue"))?;
    campus
        .issues
        .update_status(&admin, UpdateStatusRequest::new(first, "resolved", "Fan replaced"))
        .await?;

    let dashboard = analytics.dashboard().await?;
    let maintenance = dashboard
        .by_department
        .iter()
        .find(|stats| stats.department == Department::Maintenance)
        .ok_or_else(|| eyre::eyre!("missing maintenance rollup"))?;

    eyre::ensure!(dashboard.summary.total == 3, "three issues were reported");
    eyre::ensure!(dashboard.summary.resolved == 1, "one issue was resolved");
    eyre::ensure!(maintenance.total == 3, "all three route to Maintenance");
    eyre::ensure!(maintenance.active == 2, "two remain active");
    eyre::ensure!(maintenance.resolution_rate == 33, "one of three is 33%");
    eyre::ensure!(dashboard.by_category.len() == 3, "three distinct categories");
    Ok(())
}
