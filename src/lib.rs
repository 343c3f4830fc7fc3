//! Facilitrack: campus facilities issue tracking.
//!
//! Students report infrastructure problems (electrical, plumbing, network,
//! and so on); administrators triage them and move each through a linear
//! lifecycle, leaving a timeline entry with a note at every step.
//!
//! # Architecture
//!
//! Facilitrack follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (in-memory, `PostgreSQL`)
//!
//! # Modules
//!
//! - [`account`]: Student and administrator accounts
//! - [`issue`]: Issue reporting, lifecycle guard, and status timeline
//! - [`analytics`]: Dashboard statistics and department rollups
//! - [`location`]: Optional reverse geocoding for reported positions
//! - [`bootstrap`]: One-time seed data
//! - [`error`]: Crate-wide failure classification

pub mod account;
pub mod analytics;
pub mod bootstrap;
pub mod error;
pub mod issue;
pub mod location;

#[cfg(test)]
mod test_support;
