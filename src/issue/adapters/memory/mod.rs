//! In-memory issue adapters.

mod issue;

pub use issue::InMemoryIssueRepository;
