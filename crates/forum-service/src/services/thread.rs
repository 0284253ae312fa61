//! Thread service
//!
//! Read-side assembly of a submission view: the submission itself, its
//! comment tree ordered score-descending per level, and the requesting
//! user's vote value per comment.

use std::collections::HashMap;

use forum_core::value_objects::Id;
use tracing::instrument;

use crate::dto::{build_comment_tree, SubmissionResponse, ThreadResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Thread service
pub struct ThreadService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ThreadService<'a> {
    /// Create a new ThreadService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Assemble the full thread view for one submission.
    ///
    /// The vote map is only populated for an authenticated reader. Comments
    /// the user never voted on are absent from it; a cancelled vote shows up
    /// with value 0 so the client can distinguish "never voted" from
    /// "cancelled".
    #[instrument(skip(self))]
    pub async fn assemble(
        &self,
        submission_id: Id,
        requesting_user: Option<Id>,
    ) -> ServiceResult<ThreadResponse> {
        let submission = self
            .ctx
            .submission_repo()
            .find_by_id(submission_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Submission", submission_id.to_string()))?;

        let author = match submission.author_id {
            Some(author_id) => self.ctx.user_repo().find_by_id(author_id).await?,
            None => None,
        };

        let comments = self.ctx.comment_repo().find_by_submission(submission_id).await?;

        let mut comment_votes = HashMap::new();
        if let Some(user_id) = requesting_user {
            let votes = self
                .ctx
                .vote_repo()
                .find_by_submission(user_id, submission_id)
                .await?;
            for vote in votes {
                comment_votes.insert(vote.comment_id.to_string(), vote.value);
            }
        }

        Ok(ThreadResponse {
            submission: SubmissionResponse::from_parts(&submission, author.as_ref()),
            comments: build_comment_tree(&comments),
            comment_votes,
        })
    }
}
