//! Responsible campus departments.

use super::ParseDepartmentError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Team an issue is routed to and an administrator may own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Department {
    /// Electrical, plumbing, and furniture repairs.
    Maintenance,
    /// Network and computing equipment.
    #[serde(rename = "IT")]
    It,
    /// Cleaning and waste.
    Housekeeping,
    /// Campus safety and access control.
    Security,
    /// Anything not routed elsewhere.
    General,
}

impl Department {
    /// Every department in reporting order.
    pub const ALL: [Self; 5] = [
        Self::Maintenance,
        Self::It,
        Self::Housekeeping,
        Self::Security,
        Self::General,
    ];

    /// Returns the canonical storage and display representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Maintenance => "Maintenance",
            Self::It => "IT",
            Self::Housekeeping => "Housekeeping",
            Self::Security => "Security",
            Self::General => "General",
        }
    }
}

impl fmt::Display for Department {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for Department {
    type Error = ParseDepartmentError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "maintenance" => Ok(Self::Maintenance),
            "it" => Ok(Self::It),
            "housekeeping" => Ok(Self::Housekeeping),
            "security" => Ok(Self::Security),
            "general" => Ok(Self::General),
            _ => Err(ParseDepartmentError(value.to_owned())),
        }
    }
}
