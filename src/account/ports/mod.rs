//! Port contracts for user accounts.

pub mod directory;

pub use directory::{UserDirectory, UserDirectoryError, UserDirectoryResult};
