//! Shared fixtures for service tests: a ServiceContext wired over the
//! in-memory store, plus seeded users and threads.

use std::sync::Arc;

use forum_core::entities::{Submission, User};
use forum_core::traits::{SubmissionRepository, UserRepository};
use forum_core::{Id, IdGenerator};
use forum_db::{
    MemCommentRepository, MemStore, MemSubmissionRepository, MemUserRepository, MemVoteRepository,
};

use super::context::ServiceContext;

pub fn mem_context() -> ServiceContext {
    let store = MemStore::new();
    ServiceContext::new(
        Arc::new(MemUserRepository::new(Arc::clone(&store))),
        Arc::new(MemSubmissionRepository::new(Arc::clone(&store))),
        Arc::new(MemCommentRepository::new(Arc::clone(&store))),
        Arc::new(MemVoteRepository::new(store)),
        Arc::new(IdGenerator::new(0)),
    )
}

pub async fn seed_user(ctx: &ServiceContext, username: &str) -> User {
    let user = User::new(ctx.generate_id(), username.to_string());
    ctx.user_repo().create(&user).await.unwrap();
    user
}

pub async fn seed_staff(ctx: &ServiceContext, username: &str) -> User {
    let mut user = User::new(ctx.generate_id(), username.to_string());
    user.is_staff = true;
    ctx.user_repo().create(&user).await.unwrap();
    user
}

pub async fn seed_submission(ctx: &ServiceContext, author: &User, title: &str) -> Submission {
    let submission = Submission::new(
        ctx.generate_id(),
        author.id,
        title.to_string(),
        "content".to_string(),
    );
    ctx.submission_repo().create(&submission).await.unwrap();
    submission
}

pub async fn user_by_id(ctx: &ServiceContext, id: Id) -> User {
    ctx.user_repo().find_by_id(id).await.unwrap().unwrap()
}
