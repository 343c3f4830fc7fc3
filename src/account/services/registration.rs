//! Service layer for account registration and lookup.

use crate::account::{
    domain::{
        AccountDomainError, Department, DisplayName, EmailAddress, ParseDepartmentError, User,
        UserId,
    },
    ports::{UserDirectory, UserDirectoryError},
};
use crate::error::FailureKind;
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Request payload for a student sign-up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignUpRequest {
    display_name: String,
    email: String,
}

impl SignUpRequest {
    /// Creates a sign-up request.
    #[must_use]
    pub fn new(display_name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
            email: email.into(),
        }
    }
}

/// Request payload for registering a department administrator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterAdminRequest {
    display_name: String,
    email: String,
    department: String,
}

impl RegisterAdminRequest {
    /// Creates an administrator registration request.
    #[must_use]
    pub fn new(
        display_name: impl Into<String>,
        email: impl Into<String>,
        department: impl Into<String>,
    ) -> Self {
        Self {
            display_name: display_name.into(),
            email: email.into(),
            department: department.into(),
        }
    }
}

/// Service-level errors for account operations.
#[derive(Debug, Error)]
pub enum AccountServiceError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] AccountDomainError),
    /// The department name is not recognised.
    #[error(transparent)]
    InvalidDepartment(#[from] ParseDepartmentError),
    /// Directory operation failed.
    #[error(transparent)]
    Directory(#[from] UserDirectoryError),
}

impl AccountServiceError {
    /// Classifies the error for presentation.
    #[must_use]
    pub const fn kind(&self) -> FailureKind {
        match self {
            Self::Domain(_)
            | Self::InvalidDepartment(_)
            | Self::Directory(
                UserDirectoryError::DuplicateEmail(_) | UserDirectoryError::DuplicateUser(_),
            ) => FailureKind::Validation,
            Self::Directory(UserDirectoryError::Persistence(_)) => FailureKind::BackendUnavailable,
        }
    }
}

/// Result type for account service operations.
pub type AccountServiceResult<T> = Result<T, AccountServiceError>;

/// Account registration and lookup service.
#[derive(Clone)]
pub struct AccountService<D, C>
where
    D: UserDirectory,
    C: Clock + Send + Sync,
{
    directory: Arc<D>,
    clock: Arc<C>,
}

impl<D, C> AccountService<D, C>
where
    D: UserDirectory,
    C: Clock + Send + Sync,
{
    /// Creates a new account service.
    #[must_use]
    pub const fn new(directory: Arc<D>, clock: Arc<C>) -> Self {
        Self { directory, clock }
    }

    /// Registers a student account.
    ///
    /// # Errors
    ///
    /// Returns [`AccountServiceError::Domain`] for an empty name or malformed
    /// email and [`AccountServiceError::Directory`] when the email is taken.
    pub async fn sign_up(&self, request: SignUpRequest) -> AccountServiceResult<User> {
        let display_name = DisplayName::new(request.display_name)?;
        let email = EmailAddress::new(request.email)?;
        let user = User::new_student(display_name, email, &*self.clock);
        self.register(user).await
    }

    /// Registers an administrator owning a department.
    ///
    /// # Errors
    ///
    /// Returns [`AccountServiceError`] when validation fails, the department
    /// is unknown, or the email is taken.
    pub async fn register_admin(&self, request: RegisterAdminRequest) -> AccountServiceResult<User> {
        let display_name = DisplayName::new(request.display_name)?;
        let email = EmailAddress::new(request.email)?;
        let department = Department::try_from(request.department.as_str())?;
        let user = User::new_admin(display_name, email, department, &*self.clock);
        self.register(user).await
    }

    /// Finds a user by raw email address.
    ///
    /// # Errors
    ///
    /// Returns [`AccountServiceError`] when the address is malformed or the
    /// directory lookup fails.
    pub async fn find_by_email(&self, email: &str) -> AccountServiceResult<Option<User>> {
        let address = EmailAddress::new(email)?;
        Ok(self.directory.find_by_email(&address).await?)
    }

    /// Finds a user by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`AccountServiceError::Directory`] when the lookup fails.
    pub async fn find_by_id(&self, id: UserId) -> AccountServiceResult<Option<User>> {
        Ok(self.directory.find_by_id(id).await?)
    }

    /// Suggests the administrator who should own issues routed to a
    /// department: the first one registered for it.
    ///
    /// # Errors
    ///
    /// Returns [`AccountServiceError::Directory`] when the lookup fails.
    pub async fn suggest_owner(&self, department: Department) -> AccountServiceResult<Option<User>> {
        let admins = self.directory.find_admins_by_department(department).await?;
        Ok(admins.into_iter().next())
    }

    async fn register(&self, user: User) -> AccountServiceResult<User> {
        if let Err(err) = self.directory.register(&user).await {
            tracing::warn!(email = %user.email(), error = %err, "account registration rejected");
            return Err(err.into());
        }
        tracing::info!(
            user_id = %user.id(),
            role = %user.role(),
            "registered account"
        );
        Ok(user)
    }
}
