//! Service context - dependency container for services
//!
//! Holds the repositories, id generator, and vote lock registry services
//! need. Everything sits behind the forum-core ports, so the same context
//! runs over PostgreSQL in production and the in-memory store in tests.

use std::sync::Arc;

use forum_core::traits::{
    CommentRepository, SubmissionRepository, UserRepository, VoteRepository,
};
use forum_core::{Id, IdGenerator};

use super::error::{ServiceError, ServiceResult};
use super::locks::VoteLocks;

/// Service context containing all dependencies
#[derive(Clone)]
pub struct ServiceContext {
    user_repo: Arc<dyn UserRepository>,
    submission_repo: Arc<dyn SubmissionRepository>,
    comment_repo: Arc<dyn CommentRepository>,
    vote_repo: Arc<dyn VoteRepository>,
    id_generator: Arc<IdGenerator>,
    vote_locks: Arc<VoteLocks>,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        submission_repo: Arc<dyn SubmissionRepository>,
        comment_repo: Arc<dyn CommentRepository>,
        vote_repo: Arc<dyn VoteRepository>,
        id_generator: Arc<IdGenerator>,
    ) -> Self {
        Self {
            user_repo,
            submission_repo,
            comment_repo,
            vote_repo,
            id_generator,
            vote_locks: Arc::new(VoteLocks::new()),
        }
    }

    // === Repositories ===

    /// Get the user repository
    pub fn user_repo(&self) -> &dyn UserRepository {
        self.user_repo.as_ref()
    }

    /// Get the submission repository
    pub fn submission_repo(&self) -> &dyn SubmissionRepository {
        self.submission_repo.as_ref()
    }

    /// Get the comment repository
    pub fn comment_repo(&self) -> &dyn CommentRepository {
        self.comment_repo.as_ref()
    }

    /// Get the vote repository
    pub fn vote_repo(&self) -> &dyn VoteRepository {
        self.vote_repo.as_ref()
    }

    // === Services ===

    /// Get the vote lock registry
    pub fn vote_locks(&self) -> &VoteLocks {
        self.vote_locks.as_ref()
    }

    /// Generate a new Id
    pub fn generate_id(&self) -> Id {
        self.id_generator.generate()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("repositories", &"...")
            .finish()
    }
}

/// Builder for creating ServiceContext
#[derive(Default)]
pub struct ServiceContextBuilder {
    user_repo: Option<Arc<dyn UserRepository>>,
    submission_repo: Option<Arc<dyn SubmissionRepository>>,
    comment_repo: Option<Arc<dyn CommentRepository>>,
    vote_repo: Option<Arc<dyn VoteRepository>>,
    id_generator: Option<Arc<IdGenerator>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn user_repo(mut self, repo: Arc<dyn UserRepository>) -> Self {
        self.user_repo = Some(repo);
        self
    }

    pub fn submission_repo(mut self, repo: Arc<dyn SubmissionRepository>) -> Self {
        self.submission_repo = Some(repo);
        self
    }

    pub fn comment_repo(mut self, repo: Arc<dyn CommentRepository>) -> Self {
        self.comment_repo = Some(repo);
        self
    }

    pub fn vote_repo(mut self, repo: Arc<dyn VoteRepository>) -> Self {
        self.vote_repo = Some(repo);
        self
    }

    pub fn id_generator(mut self, generator: Arc<IdGenerator>) -> Self {
        self.id_generator = Some(generator);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> ServiceResult<ServiceContext> {
        Ok(ServiceContext::new(
            self.user_repo
                .ok_or_else(|| ServiceError::validation("user_repo is required"))?,
            self.submission_repo
                .ok_or_else(|| ServiceError::validation("submission_repo is required"))?,
            self.comment_repo
                .ok_or_else(|| ServiceError::validation("comment_repo is required"))?,
            self.vote_repo
                .ok_or_else(|| ServiceError::validation("vote_repo is required"))?,
            self.id_generator
                .ok_or_else(|| ServiceError::validation("id_generator is required"))?,
        ))
    }
}
