//! Crate-wide failure classification.
//!
//! Each service error exposes a `kind()` so a presentation layer can decide
//! between an inline form error and a transient notification without
//! matching on every variant. No failure is retried by this crate and none is
//! fatal; callers may simply repeat the action.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Broad category of a failed operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// The referenced issue or user does not exist.
    NotFound,
    /// Input was rejected: a required field was empty, a value was not one of
    /// the allowed enumerations, an email was already registered, or a status
    /// change was not permitted by the lifecycle.
    Validation,
    /// The actor's role does not allow the operation.
    Forbidden,
    /// The persistence backend or another collaborator failed.
    BackendUnavailable,
}

impl FailureKind {
    /// Returns the canonical representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NotFound => "not_found",
            Self::Validation => "validation",
            Self::Forbidden => "forbidden",
            Self::BackendUnavailable => "backend_unavailable",
        }
    }
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
