//! Issue category, priority, and keyword-based classification.

use super::{ParseIssueCategoryError, ParseIssuePriorityError};
use crate::account::domain::Department;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of infrastructure problem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueCategory {
    /// Lights, fans, sockets, power.
    Electrical,
    /// Taps, pipes, drains, leaks.
    Plumbing,
    /// Chairs, desks, doors, windows.
    Furniture,
    /// Dirt, waste, smells.
    Cleanliness,
    /// Wi-Fi, computers, printers.
    Network,
    /// Locks, gates, CCTV, theft.
    Security,
    /// Anything else.
    Other,
}

impl IssueCategory {
    /// Every category in reporting order.
    pub const ALL: [Self; 7] = [
        Self::Electrical,
        Self::Plumbing,
        Self::Furniture,
        Self::Cleanliness,
        Self::Network,
        Self::Security,
        Self::Other,
    ];

    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Electrical => "electrical",
            Self::Plumbing => "plumbing",
            Self::Furniture => "furniture",
            Self::Cleanliness => "cleanliness",
            Self::Network => "network",
            Self::Security => "security",
            Self::Other => "other",
        }
    }

    /// Returns the human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Electrical => "Electrical",
            Self::Plumbing => "Plumbing",
            Self::Furniture => "Furniture",
            Self::Cleanliness => "Cleanliness",
            Self::Network => "Network",
            Self::Security => "Security",
            Self::Other => "Other",
        }
    }
}

impl fmt::Display for IssueCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for IssueCategory {
    type Error = ParseIssueCategoryError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "electrical" => Ok(Self::Electrical),
            "plumbing" => Ok(Self::Plumbing),
            "furniture" => Ok(Self::Furniture),
            "cleanliness" => Ok(Self::Cleanliness),
            "network" => Ok(Self::Network),
            "security" => Ok(Self::Security),
            "other" => Ok(Self::Other),
            _ => Err(ParseIssueCategoryError(value.to_owned())),
        }
    }
}

/// Urgency of an issue, ordered from least to most urgent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssuePriority {
    /// Can wait.
    Low,
    /// Default urgency.
    Medium,
    /// Should be handled soon.
    High,
    /// Safety or security risk.
    Critical,
}

impl IssuePriority {
    /// Every priority from lowest to highest.
    pub const ALL: [Self; 4] = [Self::Low, Self::Medium, Self::High, Self::Critical];

    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Critical => "critical",
        }
    }
}

impl fmt::Display for IssuePriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for IssuePriority {
    type Error = ParseIssuePriorityError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            "critical" => Ok(Self::Critical),
            _ => Err(ParseIssuePriorityError(value.to_owned())),
        }
    }
}

/// Suggested routing for a reported issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Classification {
    /// Suggested category.
    pub category: IssueCategory,
    /// Suggested priority.
    pub priority: IssuePriority,
    /// Suggested owning department.
    pub department: Department,
}

impl Classification {
    /// Result used when no keyword group matches.
    pub const FALLBACK: Self = Self::new(
        IssueCategory::Other,
        IssuePriority::Medium,
        Department::General,
    );

    /// Creates a classification from its parts.
    #[must_use]
    pub const fn new(
        category: IssueCategory,
        priority: IssuePriority,
        department: Department,
    ) -> Self {
        Self {
            category,
            priority,
            department,
        }
    }
}

impl Default for Classification {
    fn default() -> Self {
        Self::FALLBACK
    }
}

struct KeywordRule {
    keywords: &'static [&'static str],
    classification: Classification,
}

/// Keyword groups in match order. The first group with any keyword present
/// wins, so the order is the tie-break for descriptions that mention several
/// kinds of problem.
const KEYWORD_RULES: [KeywordRule; 6] = [
    KeywordRule {
        keywords: &["fan", "light", "electric", "power", "switch"],
        classification: Classification::new(
            IssueCategory::Electrical,
            IssuePriority::Medium,
            Department::Maintenance,
        ),
    },
    KeywordRule {
        keywords: &["water", "leak", "tap", "pipe", "drain"],
        classification: Classification::new(
            IssueCategory::Plumbing,
            IssuePriority::High,
            Department::Maintenance,
        ),
    },
    KeywordRule {
        keywords: &["wifi", "internet", "network", "computer", "printer"],
        classification: Classification::new(
            IssueCategory::Network,
            IssuePriority::High,
            Department::It,
        ),
    },
    KeywordRule {
        keywords: &["chair", "desk", "table", "door", "window"],
        classification: Classification::new(
            IssueCategory::Furniture,
            IssuePriority::Low,
            Department::Maintenance,
        ),
    },
    KeywordRule {
        keywords: &["clean", "dirty", "garbage", "trash", "smell"],
        classification: Classification::new(
            IssueCategory::Cleanliness,
            IssuePriority::Medium,
            Department::Housekeeping,
        ),
    },
    KeywordRule {
        keywords: &["cctv", "security", "theft", "gate", "lock"],
        classification: Classification::new(
            IssueCategory::Security,
            IssuePriority::Critical,
            Department::Security,
        ),
    },
];

/// Suggests a category, priority, and department for a free-text
/// description.
///
/// Matching is case-insensitive substring search, so `"lighting"` matches
/// the `light` keyword.
///
/// # Examples
///
///     use facilitrack::account::domain::Department;
///     use facilitrack::issue::domain::{classify, IssueCategory, IssuePriority};
///
///     let suggestion = classify("WiFi is down in the library");
///     assert_eq!(suggestion.category, IssueCategory::Network);
///     assert_eq!(suggestion.priority, IssuePriority::High);
///     assert_eq!(suggestion.department, Department::It);
#[must_use]
pub fn classify(description: &str) -> Classification {
    let lowered = description.to_lowercase();
    KEYWORD_RULES
        .iter()
        .find(|rule| rule.keywords.iter().any(|keyword| lowered.contains(keyword)))
        .map_or(Classification::FALLBACK, |rule| rule.classification)
}
