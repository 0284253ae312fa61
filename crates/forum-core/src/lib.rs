//! # forum-core
//!
//! Domain layer containing entities, value objects, repository traits, and the
//! vote transition table. This crate has zero dependencies on infrastructure
//! (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{
    Comment, Submission, User, Votable, VotableKind, Vote, VoteTransition, DELETED_USER_NAME,
};
pub use error::DomainError;
pub use traits::{
    CommentRepository, RepoResult, SubmissionRepository, UserRepository, VoteRepository,
};
pub use value_objects::{Id, IdGenerator, IdParseError, VoteDirection};
