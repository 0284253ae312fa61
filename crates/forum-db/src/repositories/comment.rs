//! PostgreSQL implementation of CommentRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use forum_core::entities::Comment;
use forum_core::error::DomainError;
use forum_core::traits::{CommentRepository, RepoResult};
use forum_core::value_objects::Id;

use crate::models::CommentModel;

use super::error::map_db_error;

/// PostgreSQL implementation of CommentRepository
#[derive(Clone)]
pub struct PgCommentRepository {
    pool: PgPool,
}

impl PgCommentRepository {
    /// Create a new PgCommentRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CommentRepository for PgCommentRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Id) -> RepoResult<Option<Comment>> {
        let result = sqlx::query_as::<_, CommentModel>(
            r"
            SELECT id, submission_id, parent_id, author_id, author_name, content,
                   ups, downs, score, created_at
            FROM comments
            WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Comment::from))
    }

    #[instrument(skip(self))]
    async fn find_by_submission(&self, submission_id: Id) -> RepoResult<Vec<Comment>> {
        let results = sqlx::query_as::<_, CommentModel>(
            r"
            SELECT id, submission_id, parent_id, author_id, author_name, content,
                   ups, downs, score, created_at
            FROM comments
            WHERE submission_id = $1
            ORDER BY score DESC, created_at ASC, id ASC
            ",
        )
        .bind(submission_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Comment::from).collect())
    }

    #[instrument(skip(self))]
    async fn create(&self, comment: &Comment) -> RepoResult<()> {
        // Insert and counter bump must land together; a crash between the two
        // would leave comment_count out of sync forever.
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        sqlx::query(
            r"
            INSERT INTO comments (id, submission_id, parent_id, author_id, author_name,
                                  content, ups, downs, score, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            ",
        )
        .bind(comment.id.into_inner())
        .bind(comment.submission_id.into_inner())
        .bind(comment.parent_id.map(Id::into_inner))
        .bind(comment.author_id.map(Id::into_inner))
        .bind(&comment.author_name)
        .bind(&comment.content)
        .bind(comment.ups)
        .bind(comment.downs)
        .bind(comment.score)
        .bind(comment.created_at)
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        let result = sqlx::query(
            r"
            UPDATE submissions SET comment_count = comment_count + 1 WHERE id = $1
            ",
        )
        .bind(comment.submission_id.into_inner())
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::SubmissionNotFound(comment.submission_id));
        }

        tx.commit().await.map_err(map_db_error)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PgCommentRepository>();
    }
}
