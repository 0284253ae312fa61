//! Submission service
//!
//! Submission lifecycle: staff-only creation, author-only edit and delete,
//! and the newest-first front page.

use forum_core::entities::Submission;
use forum_core::error::DomainError;
use forum_core::value_objects::Id;
use tracing::{info, instrument};

use crate::dto::{
    CreateSubmissionRequest, FrontPageResponse, SubmissionResponse, UpdateSubmissionRequest,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Submissions shown per front-page request
pub const SUBMISSIONS_PER_PAGE: i64 = 25;

/// Submission service
pub struct SubmissionService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> SubmissionService<'a> {
    /// Create a new SubmissionService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Create a new submission; staff accounts only
    #[instrument(skip(self, request))]
    pub async fn create_submission(
        &self,
        user_id: Id,
        request: CreateSubmissionRequest,
    ) -> ServiceResult<SubmissionResponse> {
        let user = self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", user_id.to_string()))?;

        if !user.is_staff {
            return Err(DomainError::StaffOnly.into());
        }

        let submission = Submission::new(
            self.ctx.generate_id(),
            user.id,
            request.title,
            request.content,
        );
        self.ctx.submission_repo().create(&submission).await?;

        info!(submission_id = %submission.id, "Submission created");

        Ok(SubmissionResponse::from_parts(&submission, Some(&user)))
    }

    /// Edit a submission's title and body; author only
    #[instrument(skip(self, request))]
    pub async fn update_submission(
        &self,
        user_id: Id,
        submission_id: Id,
        request: UpdateSubmissionRequest,
    ) -> ServiceResult<SubmissionResponse> {
        let mut submission = self.require_authored(user_id, submission_id).await?;

        let title = request.title.unwrap_or_else(|| submission.title.clone());
        let content = request.content.unwrap_or_else(|| submission.content.clone());
        submission.edit(title, content);

        self.ctx.submission_repo().update(&submission).await?;

        info!(submission_id = %submission.id, "Submission updated");

        let author = self.ctx.user_repo().find_by_id(user_id).await?;
        Ok(SubmissionResponse::from_parts(&submission, author.as_ref()))
    }

    /// Delete a submission and everything under it; author only
    #[instrument(skip(self))]
    pub async fn delete_submission(&self, user_id: Id, submission_id: Id) -> ServiceResult<()> {
        let submission = self.require_authored(user_id, submission_id).await?;

        self.ctx.submission_repo().delete(submission.id).await?;

        info!(submission_id = %submission.id, "Submission deleted");

        Ok(())
    }

    /// Newest-first listing, 25 per page. An out-of-range page clamps to the
    /// last page rather than erroring.
    #[instrument(skip(self))]
    pub async fn front_page(&self, page: i64) -> ServiceResult<FrontPageResponse> {
        let total = self.ctx.submission_repo().count().await?;
        let total_pages = ((total + SUBMISSIONS_PER_PAGE - 1) / SUBMISSIONS_PER_PAGE).max(1);
        let page = if (1..=total_pages).contains(&page) {
            page
        } else {
            total_pages
        };

        let submissions = self
            .ctx
            .submission_repo()
            .find_page(SUBMISSIONS_PER_PAGE, (page - 1) * SUBMISSIONS_PER_PAGE)
            .await?;

        let mut responses = Vec::with_capacity(submissions.len());
        for submission in &submissions {
            let author = match submission.author_id {
                Some(author_id) => self.ctx.user_repo().find_by_id(author_id).await?,
                None => None,
            };
            responses.push(SubmissionResponse::from_parts(submission, author.as_ref()));
        }

        Ok(FrontPageResponse {
            submissions: responses,
            page,
            total_pages,
        })
    }

    async fn require_authored(&self, user_id: Id, submission_id: Id) -> ServiceResult<Submission> {
        let submission = self
            .ctx
            .submission_repo()
            .find_by_id(submission_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Submission", submission_id.to_string()))?;

        if submission.author_id != Some(user_id) {
            return Err(DomainError::NotSubmissionAuthor.into());
        }

        Ok(submission)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::testing::{mem_context, seed_staff, seed_submission, seed_user};

    fn create_request(title: &str) -> CreateSubmissionRequest {
        CreateSubmissionRequest {
            title: title.to_string(),
            content: "content".to_string(),
        }
    }

    #[tokio::test]
    async fn test_only_staff_can_create() {
        let ctx = mem_context();
        let staff = seed_staff(&ctx, "admin").await;
        let pleb = seed_user(&ctx, "pleb").await;
        let service = SubmissionService::new(&ctx);

        let created = service
            .create_submission(staff.id, create_request("hello"))
            .await
            .unwrap();
        assert_eq!(created.author_name, "admin");

        let err = service
            .create_submission(pleb.id, create_request("nope"))
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), 403);
    }

    #[tokio::test]
    async fn test_update_is_author_only_and_sets_modified() {
        let ctx = mem_context();
        let author = seed_user(&ctx, "author").await;
        let other = seed_user(&ctx, "other").await;
        let submission = seed_submission(&ctx, &author, "original").await;
        let service = SubmissionService::new(&ctx);

        let err = service
            .update_submission(
                other.id,
                submission.id,
                UpdateSubmissionRequest {
                    title: Some("hijack".to_string()),
                    content: None,
                },
            )
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), 403);

        let updated = service
            .update_submission(
                author.id,
                submission.id,
                UpdateSubmissionRequest {
                    title: Some("edited".to_string()),
                    content: None,
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.title, "edited");
        assert!(updated.modified);
        assert!(updated.updated_at.is_some());
    }

    #[tokio::test]
    async fn test_delete_is_author_only() {
        let ctx = mem_context();
        let author = seed_user(&ctx, "author").await;
        let other = seed_user(&ctx, "other").await;
        let submission = seed_submission(&ctx, &author, "doomed").await;
        let service = SubmissionService::new(&ctx);

        let err = service
            .delete_submission(other.id, submission.id)
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), 403);

        service.delete_submission(author.id, submission.id).await.unwrap();

        let err = service
            .delete_submission(author.id, submission.id)
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), 404);
    }

    #[tokio::test]
    async fn test_front_page_clamps_out_of_range_pages() {
        let ctx = mem_context();
        let author = seed_user(&ctx, "author").await;
        for i in 0..30 {
            seed_submission(&ctx, &author, &format!("post {i}")).await;
        }
        let service = SubmissionService::new(&ctx);

        let first = service.front_page(1).await.unwrap();
        assert_eq!(first.submissions.len(), 25);
        assert_eq!(first.total_pages, 2);

        let last = service.front_page(2).await.unwrap();
        assert_eq!(last.submissions.len(), 5);

        // Beyond the end falls back to the last page
        let clamped = service.front_page(99).await.unwrap();
        assert_eq!(clamped.page, 2);
        assert_eq!(clamped.submissions.len(), 5);
    }

    #[tokio::test]
    async fn test_front_page_empty_forum() {
        let ctx = mem_context();
        let service = SubmissionService::new(&ctx);

        let page = service.front_page(1).await.unwrap();
        assert!(page.submissions.is_empty());
        assert_eq!(page.total_pages, 1);
    }
}
