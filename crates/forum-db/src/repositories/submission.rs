//! PostgreSQL implementation of SubmissionRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use forum_core::entities::Submission;
use forum_core::error::DomainError;
use forum_core::traits::{RepoResult, SubmissionRepository};
use forum_core::value_objects::Id;

use crate::models::SubmissionModel;

use super::error::map_db_error;

/// PostgreSQL implementation of SubmissionRepository
#[derive(Clone)]
pub struct PgSubmissionRepository {
    pool: PgPool,
}

impl PgSubmissionRepository {
    /// Create a new PgSubmissionRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SubmissionRepository for PgSubmissionRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Id) -> RepoResult<Option<Submission>> {
        let result = sqlx::query_as::<_, SubmissionModel>(
            r"
            SELECT id, author_id, title, content, ups, downs, score, comment_count,
                   created_at, modified, updated_at
            FROM submissions
            WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Submission::from))
    }

    #[instrument(skip(self))]
    async fn find_page(&self, limit: i64, offset: i64) -> RepoResult<Vec<Submission>> {
        let results = sqlx::query_as::<_, SubmissionModel>(
            r"
            SELECT id, author_id, title, content, ups, downs, score, comment_count,
                   created_at, modified, updated_at
            FROM submissions
            ORDER BY created_at DESC, id DESC
            LIMIT $1 OFFSET $2
            ",
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Submission::from).collect())
    }

    #[instrument(skip(self))]
    async fn count(&self) -> RepoResult<i64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM submissions")
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)
    }

    #[instrument(skip(self))]
    async fn create(&self, submission: &Submission) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO submissions (id, author_id, title, content, ups, downs, score,
                                     comment_count, created_at, modified, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            ",
        )
        .bind(submission.id.into_inner())
        .bind(submission.author_id.map(Id::into_inner))
        .bind(&submission.title)
        .bind(&submission.content)
        .bind(submission.ups)
        .bind(submission.downs)
        .bind(submission.score)
        .bind(submission.comment_count)
        .bind(submission.created_at)
        .bind(submission.modified)
        .bind(submission.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn update(&self, submission: &Submission) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE submissions
            SET title = $2, content = $3, modified = $4, updated_at = $5
            WHERE id = $1
            ",
        )
        .bind(submission.id.into_inner())
        .bind(&submission.title)
        .bind(&submission.content)
        .bind(submission.modified)
        .bind(submission.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::SubmissionNotFound(submission.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Id) -> RepoResult<()> {
        // Comments and votes go with it via ON DELETE CASCADE
        let result = sqlx::query("DELETE FROM submissions WHERE id = $1")
            .bind(id.into_inner())
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::SubmissionNotFound(id));
        }

        Ok(())
    }
}
