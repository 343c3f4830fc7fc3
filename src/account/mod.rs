//! Campus user accounts.
//!
//! Students sign up with a unique email; administrators are registered
//! against the department they own. The module follows the same hexagonal
//! layout as [`crate::issue`]:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
