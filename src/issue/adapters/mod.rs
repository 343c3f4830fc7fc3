//! Adapter implementations for issue ports.

pub mod memory;
pub mod postgres;
