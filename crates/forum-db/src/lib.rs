//! # forum-db
//!
//! Storage layer implementing the forum-core repository traits.
//!
//! ## Overview
//!
//! Two implementations of the same ports:
//!
//! - PostgreSQL via SQLx (`repositories`): connection pool management,
//!   `FromRow` models, entity mappers, and repositories whose multi-record
//!   operations (vote transitions, comment creation) each run inside a
//!   single transaction.
//! - In-memory (`mem`): one mutex-guarded store backing the same traits,
//!   used by the service and API test suites and for running the server
//!   without Postgres.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use forum_db::pool::{create_pool, DatabaseConfig};
//! use forum_db::PgVoteRepository;
//! use forum_core::VoteRepository;
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = DatabaseConfig::from_env();
//!     let pool = create_pool(&config).await?;
//!     let vote_repo = PgVoteRepository::new(pool);
//!
//!     // Use the repository...
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod mem;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use mem::{
    MemCommentRepository, MemStore, MemSubmissionRepository, MemUserRepository, MemVoteRepository,
};
pub use pool::{create_pool, create_pool_from_env, run_migrations, DatabaseConfig, PgPool};
pub use repositories::{
    PgCommentRepository, PgSubmissionRepository, PgUserRepository, PgVoteRepository,
};
