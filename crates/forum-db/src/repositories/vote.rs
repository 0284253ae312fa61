//! PostgreSQL implementation of VoteRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use forum_core::entities::{VotableKind, Vote, VoteTransition};
use forum_core::error::DomainError;
use forum_core::traits::{RepoResult, VoteRepository};
use forum_core::value_objects::Id;

use crate::models::VoteModel;

use super::error::map_db_error;

/// PostgreSQL implementation of VoteRepository
#[derive(Clone)]
pub struct PgVoteRepository {
    pool: PgPool,
}

impl PgVoteRepository {
    /// Create a new PgVoteRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl VoteRepository for PgVoteRepository {
    #[instrument(skip(self))]
    async fn find(&self, user_id: Id, comment_id: Id) -> RepoResult<Option<Vote>> {
        let result = sqlx::query_as::<_, VoteModel>(
            r"
            SELECT user_id, comment_id, submission_id, value, created_at
            FROM votes
            WHERE user_id = $1 AND comment_id = $2
            ",
        )
        .bind(user_id.into_inner())
        .bind(comment_id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Vote::from))
    }

    #[instrument(skip(self))]
    async fn find_by_submission(&self, user_id: Id, submission_id: Id) -> RepoResult<Vec<Vote>> {
        let results = sqlx::query_as::<_, VoteModel>(
            r"
            SELECT user_id, comment_id, submission_id, value, created_at
            FROM votes
            WHERE user_id = $1 AND submission_id = $2
            ",
        )
        .bind(user_id.into_inner())
        .bind(submission_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Vote::from).collect())
    }

    #[instrument(skip(self))]
    async fn apply(
        &self,
        vote: &Vote,
        author_id: Option<Id>,
        kind: VotableKind,
        transition: &VoteTransition,
    ) -> RepoResult<()> {
        // One transaction for comment counters, author karma, and the vote
        // row. Counter updates are relative increments so concurrent voters
        // on the same comment cannot lose each other's writes.
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let result = sqlx::query(
            r"
            UPDATE comments
            SET ups = ups + $2, downs = downs + $3, score = score + $4
            WHERE id = $1
            ",
        )
        .bind(vote.comment_id.into_inner())
        .bind(transition.ups_delta)
        .bind(transition.downs_delta)
        .bind(transition.score_delta)
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::CommentNotFound(vote.comment_id));
        }

        // No karma target once the author account is gone
        if let Some(author_id) = author_id {
            let karma_update = match kind {
                VotableKind::Comment => {
                    "UPDATE users SET comment_karma = comment_karma + $2 WHERE id = $1"
                }
                VotableKind::Submission => {
                    "UPDATE users SET post_karma = post_karma + $2 WHERE id = $1"
                }
            };
            sqlx::query(karma_update)
                .bind(author_id.into_inner())
                .bind(transition.karma_delta)
                .execute(&mut *tx)
                .await
                .map_err(map_db_error)?;
        }

        sqlx::query(
            r"
            INSERT INTO votes (user_id, comment_id, submission_id, value, created_at)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (user_id, comment_id) DO UPDATE SET value = EXCLUDED.value
            ",
        )
        .bind(vote.user_id.into_inner())
        .bind(vote.comment_id.into_inner())
        .bind(vote.submission_id.into_inner())
        .bind(vote.value)
        .bind(vote.created_at)
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        tx.commit().await.map_err(map_db_error)?;

        Ok(())
    }
}
