//! User aggregate and the authenticated actor handed to services.

use super::{Department, DisplayName, EmailAddress, ParseUserRoleError, UserId};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Role granted to a user account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    /// Reports issues and follows their progress.
    Student,
    /// Triages and resolves reported issues.
    Admin,
}

impl UserRole {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Student => "student",
            Self::Admin => "admin",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for UserRole {
    type Error = ParseUserRoleError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "student" => Ok(Self::Student),
            "admin" => Ok(Self::Admin),
            _ => Err(ParseUserRoleError(value.to_owned())),
        }
    }
}

/// Registered campus user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    id: UserId,
    display_name: DisplayName,
    email: EmailAddress,
    role: UserRole,
    department: Option<Department>,
    created_at: DateTime<Utc>,
}

impl User {
    /// Creates a student account.
    #[must_use]
    pub fn new_student(display_name: DisplayName, email: EmailAddress, clock: &impl Clock) -> Self {
        Self {
            id: UserId::new(),
            display_name,
            email,
            role: UserRole::Student,
            department: None,
            created_at: clock.utc(),
        }
    }

    /// Creates an administrator account owning the given department.
    #[must_use]
    pub fn new_admin(
        display_name: DisplayName,
        email: EmailAddress,
        department: Department,
        clock: &impl Clock,
    ) -> Self {
        Self {
            id: UserId::new(),
            display_name,
            email,
            role: UserRole::Admin,
            department: Some(department),
            created_at: clock.utc(),
        }
    }

    /// Returns the user identifier.
    #[must_use]
    pub const fn id(&self) -> UserId {
        self.id
    }

    /// Returns the display name.
    #[must_use]
    pub const fn display_name(&self) -> &DisplayName {
        &self.display_name
    }

    /// Returns the normalized email address.
    #[must_use]
    pub const fn email(&self) -> &EmailAddress {
        &self.email
    }

    /// Returns the account role.
    #[must_use]
    pub const fn role(&self) -> UserRole {
        self.role
    }

    /// Returns the owned department. Only administrators carry one.
    #[must_use]
    pub const fn department(&self) -> Option<Department> {
        self.department
    }

    /// Returns the registration timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the actor view of this user.
    #[must_use]
    pub fn as_actor(&self) -> Actor {
        Actor::new(self.id, self.display_name.clone(), self.role)
    }
}

/// Authenticated identity supplied by the identity provider.
///
/// Services trust these values as given; authentication happens outside
/// this crate.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Actor {
    id: UserId,
    display_name: DisplayName,
    role: UserRole,
}

impl Actor {
    /// Creates an actor from identity-provider claims.
    #[must_use]
    pub const fn new(id: UserId, display_name: DisplayName, role: UserRole) -> Self {
        Self {
            id,
            display_name,
            role,
        }
    }

    /// Returns the stable user identifier.
    #[must_use]
    pub const fn id(&self) -> UserId {
        self.id
    }

    /// Returns the display name.
    #[must_use]
    pub const fn display_name(&self) -> &DisplayName {
        &self.display_name
    }

    /// Returns the role.
    #[must_use]
    pub const fn role(&self) -> UserRole {
        self.role
    }

    /// Returns `true` for administrators.
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }
}

impl From<&User> for Actor {
    fn from(user: &User) -> Self {
        user.as_actor()
    }
}
