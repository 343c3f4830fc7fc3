//! Seed data format and loading.

use super::{BootstrapError, BootstrapResult};
use crate::account::domain::Department;
use camino::{Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use serde::{Deserialize, Serialize};

/// Accounts and demo issues applied once to an empty installation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SeedData {
    /// Administrator accounts.
    #[serde(default)]
    pub admins: Vec<SeedAdmin>,
    /// Student accounts.
    #[serde(default)]
    pub students: Vec<SeedStudent>,
    /// Issues reported after all accounts exist, in file order.
    #[serde(default)]
    pub issues: Vec<SeedIssue>,
}

/// Administrator account owning a department.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SeedAdmin {
    /// Display name.
    pub name: String,
    /// Login email.
    pub email: String,
    /// Owned department, e.g. `"Maintenance"` or `"IT"`.
    pub department: String,
}

/// Student account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SeedStudent {
    /// Display name.
    pub name: String,
    /// Login email.
    pub email: String,
}

/// Demo issue with optional status history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SeedIssue {
    /// Email of the reporting account.
    pub reporter: String,
    /// Short summary.
    pub title: String,
    /// Free-text description.
    pub description: String,
    /// Free-text location.
    pub location: String,
    /// Category override.
    #[serde(default)]
    pub category: Option<String>,
    /// Priority override.
    #[serde(default)]
    pub priority: Option<String>,
    /// Department override.
    #[serde(default)]
    pub department: Option<String>,
    /// Image reference.
    #[serde(default)]
    pub image_url: Option<String>,
    /// Status changes replayed after the report, oldest first.
    #[serde(default)]
    pub history: Vec<SeedStatusChange>,
}

/// One replayed status change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SeedStatusChange {
    /// Email of the administrator making the change.
    pub actor: String,
    /// Target status storage value.
    pub status: String,
    /// Explanatory note.
    pub note: String,
}

impl SeedData {
    /// Built-in campus defaults: one administrator per department.
    #[must_use]
    pub fn campus_defaults() -> Self {
        let admins = Department::ALL
            .into_iter()
            .map(|department| {
                let mailbox = match department {
                    Department::Maintenance => "maintenance",
                    Department::It => "it",
                    Department::Housekeeping => "housekeeping",
                    Department::Security => "security",
                    Department::General => "admin",
                };
                SeedAdmin {
                    name: format!("{department} Admin"),
                    email: format!("{mailbox}@campus.edu"),
                    department: department.as_str().to_owned(),
                }
            })
            .collect();
        Self {
            admins,
            ..Self::default()
        }
    }

    /// Parses seed data from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`BootstrapError::Parse`] when the text is not valid seed
    /// JSON.
    pub fn from_json_str(contents: &str) -> BootstrapResult<Self> {
        Ok(serde_json::from_str(contents)?)
    }

    /// Reads a seed file relative to a capability directory.
    ///
    /// # Errors
    ///
    /// Returns [`BootstrapError::Read`] when the file cannot be read and
    /// [`BootstrapError::Parse`] when it is not valid seed JSON.
    pub fn load_from_dir(dir: &Dir, file: impl AsRef<Utf8Path>) -> BootstrapResult<Self> {
        let path = file.as_ref();
        let contents = dir
            .read_to_string(path)
            .map_err(|source| BootstrapError::Read {
                path: path.to_owned(),
                source,
            })?;
        Self::from_json_str(&contents)
    }

    /// Reads a seed file by path, opening its parent directory with ambient
    /// authority.
    ///
    /// # Errors
    ///
    /// Returns [`BootstrapError::Read`] when the path has no file name or
    /// cannot be read and [`BootstrapError::Parse`] when it is not valid
    /// seed JSON.
    pub fn load(path: &Utf8Path) -> BootstrapResult<Self> {
        let read_error = |source: std::io::Error| BootstrapError::Read {
            path: path.to_owned(),
            source,
        };
        let file_name = path.file_name().ok_or_else(|| {
            read_error(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "seed path has no file name",
            ))
        })?;
        let parent = path
            .parent()
            .filter(|dir| !dir.as_str().is_empty())
            .map_or_else(|| Utf8PathBuf::from("."), Utf8Path::to_path_buf);
        let dir = Dir::open_ambient_dir(&parent, ambient_authority()).map_err(read_error)?;
        Self::load_from_dir(&dir, file_name)
    }
}
