//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in forum-core.
//! Each repository handles database operations for a specific domain entity;
//! the vote and comment repositories additionally own the transactions that
//! keep counters and rows consistent.

mod comment;
mod error;
mod submission;
mod user;
mod vote;

pub use comment::PgCommentRepository;
pub use submission::PgSubmissionRepository;
pub use user::PgUserRepository;
pub use vote::PgVoteRepository;
