//! Error types for account domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing account domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AccountDomainError {
    /// The display name is empty after trimming.
    #[error("display name must not be empty")]
    EmptyDisplayName,

    /// The email address is malformed.
    #[error("invalid email address '{0}'")]
    InvalidEmail(String),
}

/// Error returned while parsing user roles from persistence or requests.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown user role: {0}")]
pub struct ParseUserRoleError(pub String);

/// Error returned while parsing departments from persistence or requests.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown department: {0}")]
pub struct ParseDepartmentError(pub String);
