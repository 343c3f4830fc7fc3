//! One-time initialisation from seed data.
//!
//! Seed files are JSON documents listing administrator accounts, student
//! accounts, and demo issues. [`SeedData::campus_defaults`] provides the
//! built-in department administrators.

mod apply;
mod error;
mod seed;


pub use apply::{BootstrapReport, apply_seed};
pub use error::{BootstrapError, BootstrapResult};
pub use seed::{SeedAdmin, SeedData, SeedIssue, SeedStatusChange, SeedStudent};
