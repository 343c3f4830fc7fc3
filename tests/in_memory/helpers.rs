//! Shared test helpers for in-memory integration tests.

use chrono::{DateTime, Duration, Local, TimeZone, Utc};
use facilitrack::{
    account::{
        adapters::memory::InMemoryUserDirectory, domain::Actor, services::AccountService,
    },
    bootstrap::{SeedData, apply_seed},
    issue::{adapters::memory::InMemoryIssueRepository, services::IssueLifecycleService},
};
use mockable::Clock;
use rstest::fixture;
use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};

/// Clock advancing one minute per reading from 2025-09-01 08:00 UTC.
#[derive(Debug, Default)]
pub struct MinuteClock {
    ticks: AtomicI64,
}

impl Clock for MinuteClock {
    fn local(&self) -> DateTime<Local> {
        self.utc().with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        let tick = self.ticks.fetch_add(1, Ordering::SeqCst);
        let start = Utc
            .with_ymd_and_hms(2025, 9, 1, 8, 0, 0)
            .single()
            .unwrap_or_else(Utc::now);
        start + Duration::minutes(tick)
    }
}

/// Account service over the in-memory directory.
pub type Accounts = AccountService<InMemoryUserDirectory, MinuteClock>;

/// Issue service over the in-memory repository.
pub type Issues = IssueLifecycleService<InMemoryIssueRepository, MinuteClock>;

/// A freshly bootstrapped campus: default admins plus two students.
pub struct Campus {
    pub accounts: Accounts,
    pub issues: Issues,
    pub repository: Arc<InMemoryIssueRepository>,
}

impl Campus {
    /// Returns the actor for a registered email.
    ///
    /// # Errors
    ///
    /// Returns an error when the lookup fails or no account exists.
    pub async fn actor(&self, email: &str) -> Result<Actor, eyre::Report> {
        let user = self
            .accounts
            .find_by_email(email)
            .await?
            .ok_or_else(|| eyre::eyre!("no account for {email}"))?;
        Ok(user.as_actor())
    }
}

/// Provides a campus with default department admins and two students.
///
/// # Errors
///
/// Returns an error if seeding fails.
#[fixture]
pub fn campus() -> Result<Campus, eyre::Report> {
    let clock = Arc::new(MinuteClock::default());
    let repository = Arc::new(InMemoryIssueRepository::new());
    let campus = Campus {
        accounts: AccountService::new(Arc::new(InMemoryUserDirectory::new()), Arc::clone(&clock)),
        issues: IssueLifecycleService::new(Arc::clone(&repository), clock),
        repository,
    };

    let mut seed = SeedData::campus_defaults();
    seed.students = SeedData::from_json_str(
        r#"{"students": [
            {"name": "Asha Rao", "email": "asha@campus.edu"},
            {"name": "Ben Okafor", "email": "ben@campus.edu"}
        ]}"#,
    )?
    .students;

    tokio::task::block_in_place(|| {
        tokio::runtime::Handle::current()
            .block_on(apply_seed(&seed, &campus.accounts, &campus.issues))
    })?;
    Ok(campus)
}
