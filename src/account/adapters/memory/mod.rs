//! In-memory account adapters for tests and seeded demos.

mod directory;

pub use directory::InMemoryUserDirectory;
