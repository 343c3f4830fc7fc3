//! `PostgreSQL` adapters for issue persistence.

mod conversion;
mod models;
mod repository;
mod schema;


pub use repository::{IssuePgPool, PostgresIssueRepository};
