//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation. Operations that must be atomic (vote
//! transitions, comment creation) are expressed as single calls here: one
//! call, one transaction. Splitting them into per-row writes at this level
//! would reopen the crash window between counter and vote-row updates.

use async_trait::async_trait;

use crate::entities::{Comment, Submission, User, VotableKind, Vote, VoteTransition};
use crate::error::DomainError;
use crate::value_objects::Id;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID
    async fn find_by_id(&self, id: Id) -> RepoResult<Option<User>>;

    /// Find user by username
    async fn find_by_username(&self, username: &str) -> RepoResult<Option<User>>;

    /// Create a new user
    async fn create(&self, user: &User) -> RepoResult<()>;
}

// ============================================================================
// Submission Repository
// ============================================================================

#[async_trait]
pub trait SubmissionRepository: Send + Sync {
    /// Find submission by ID
    async fn find_by_id(&self, id: Id) -> RepoResult<Option<Submission>>;

    /// List submissions newest-first with offset pagination
    async fn find_page(&self, limit: i64, offset: i64) -> RepoResult<Vec<Submission>>;

    /// Total number of submissions
    async fn count(&self) -> RepoResult<i64>;

    /// Create a new submission
    async fn create(&self, submission: &Submission) -> RepoResult<()>;

    /// Update title, content, and modification flags
    async fn update(&self, submission: &Submission) -> RepoResult<()>;

    /// Delete a submission, cascading to its comments and votes
    async fn delete(&self, id: Id) -> RepoResult<()>;
}

// ============================================================================
// Comment Repository
// ============================================================================

#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// Find comment by ID
    async fn find_by_id(&self, id: Id) -> RepoResult<Option<Comment>>;

    /// All comments of a submission, ordered score descending then oldest
    /// first (deterministic tie-break)
    async fn find_by_submission(&self, submission_id: Id) -> RepoResult<Vec<Comment>>;

    /// Insert the comment and increment its submission's comment_count,
    /// as one transaction
    async fn create(&self, comment: &Comment) -> RepoResult<()>;
}

// ============================================================================
// Vote Repository
// ============================================================================

#[async_trait]
pub trait VoteRepository: Send + Sync {
    /// Find the vote a user holds on a comment
    async fn find(&self, user_id: Id, comment_id: Id) -> RepoResult<Option<Vote>>;

    /// All of a user's votes under one submission (cancelled ones included)
    async fn find_by_submission(&self, user_id: Id, submission_id: Id) -> RepoResult<Vec<Vote>>;

    /// Apply one vote transition as a single transaction: upsert the vote
    /// row at `vote.value`, shift the voted item's counters by the
    /// transition deltas, and shift the author's karma counter - `kind`
    /// picks post karma or comment karma. `author_id` is None when the
    /// author has been deleted; the karma delta is then skipped.
    async fn apply(
        &self,
        vote: &Vote,
        author_id: Option<Id>,
        kind: VotableKind,
        transition: &VoteTransition,
    ) -> RepoResult<()>;
}
