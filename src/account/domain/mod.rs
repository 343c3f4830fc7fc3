//! Domain model for campus user accounts.
//!
//! Users are students who report issues or administrators who own a
//! department and triage its issues. The [`Actor`] type is the identity
//! provider's view of whoever is performing an operation.

mod department;
mod error;
mod ids;
mod user;

pub use department::Department;
pub use error::{AccountDomainError, ParseDepartmentError, ParseUserRoleError};
pub use ids::{DisplayName, EmailAddress, UserId};
pub use user::{Actor, User, UserRole};
