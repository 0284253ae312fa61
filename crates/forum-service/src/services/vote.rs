//! Vote service
//!
//! The vote engine: governs one (user, comment) pair's vote value and the
//! counter side-effects of every transition. A missing vote row and a
//! cancelled one transition identically (stored value 0); casting the stored
//! value again cancels; casting the opposite value doubles the delta.

use forum_core::entities::{Votable, Vote, VoteTransition};
use forum_core::error::DomainError;
use forum_core::value_objects::{Id, VoteDirection};
use tracing::{info, instrument, warn};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Vote service
pub struct VoteService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> VoteService<'a> {
    /// Create a new VoteService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Cast (or update) a user's vote on a comment.
    ///
    /// Returns the signed score delta so the caller can update a live
    /// display without a reload. The read-modify-write runs under the
    /// pair's lock, and all resulting writes (comment counters, author
    /// karma, vote row) land in one repository transaction.
    #[instrument(skip(self))]
    pub async fn cast_vote(
        &self,
        user_id: Id,
        comment_id: Id,
        direction: VoteDirection,
    ) -> ServiceResult<i32> {
        let pair_lock = self.ctx.vote_locks().pair(user_id, comment_id);
        let _guard = pair_lock.lock().await;

        let comment = self
            .ctx
            .comment_repo()
            .find_by_id(comment_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Comment", comment_id.to_string()))?;
        let submission_id = comment.submission_id;
        let votable = Votable::Comment(comment);

        let existing = self.ctx.vote_repo().find(user_id, comment_id).await?;
        let stored = existing.as_ref().map_or(0, |v| v.value);

        let transition = VoteTransition::compute(stored, direction).map_err(|e| {
            if let DomainError::VoteStateCorrupt { stored } = e {
                // Corrupted prior state, not a user error; must not be
                // applied and must not pass silently
                warn!(
                    user_id = %user_id,
                    comment_id = %comment_id,
                    stored,
                    requested = direction.value(),
                    "Vote row holds an undefined value"
                );
            }
            e
        })?;

        let mut vote = existing
            .unwrap_or_else(|| Vote::new(user_id, comment_id, submission_id, direction));
        vote.value = transition.new_value;

        self.ctx
            .vote_repo()
            .apply(&vote, votable.author_id(), votable.kind(), &transition)
            .await?;

        info!(
            user_id = %user_id,
            comment_id = %comment_id,
            value = transition.new_value,
            score_delta = transition.score_delta,
            "Vote applied"
        );

        Ok(transition.score_delta)
    }
}
