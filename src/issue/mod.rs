//! Campus issue reporting and status tracking.
//!
//! Students report problems; administrators move them through the
//! `submitted → reviewed → in_progress → resolved → closed` lifecycle, each
//! change leaving a timeline entry with a note. The module follows
//! hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
