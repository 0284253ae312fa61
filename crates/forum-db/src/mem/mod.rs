//! In-memory implementation of the repository traits
//!
//! One store, one mutex: every multi-record operation holds the lock for its
//! whole duration, which gives the same atomicity the PostgreSQL
//! implementation gets from transactions. Used by the service and API test
//! suites and for running the server without a database.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;

use forum_core::entities::{Comment, Submission, User, Vote, VoteTransition, VotableKind};
use forum_core::error::DomainError;
use forum_core::traits::{
    CommentRepository, RepoResult, SubmissionRepository, UserRepository, VoteRepository,
};
use forum_core::value_objects::Id;

#[derive(Debug, Default)]
struct State {
    users: HashMap<Id, User>,
    submissions: HashMap<Id, Submission>,
    comments: HashMap<Id, Comment>,
    votes: HashMap<(Id, Id), Vote>,
}

/// Shared in-memory store backing all four repositories
#[derive(Debug, Default)]
pub struct MemStore {
    state: Mutex<State>,
}

impl MemStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    fn lock(&self) -> MutexGuard<'_, State> {
        self.state.lock().expect("mem store lock poisoned")
    }
}

/// In-memory UserRepository
#[derive(Clone)]
pub struct MemUserRepository {
    store: Arc<MemStore>,
}

impl MemUserRepository {
    pub fn new(store: Arc<MemStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl UserRepository for MemUserRepository {
    async fn find_by_id(&self, id: Id) -> RepoResult<Option<User>> {
        Ok(self.store.lock().users.get(&id).cloned())
    }

    async fn find_by_username(&self, username: &str) -> RepoResult<Option<User>> {
        Ok(self
            .store
            .lock()
            .users
            .values()
            .find(|u| u.username == username)
            .cloned())
    }

    async fn create(&self, user: &User) -> RepoResult<()> {
        self.store.lock().users.insert(user.id, user.clone());
        Ok(())
    }
}

/// In-memory SubmissionRepository
#[derive(Clone)]
pub struct MemSubmissionRepository {
    store: Arc<MemStore>,
}

impl MemSubmissionRepository {
    pub fn new(store: Arc<MemStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl SubmissionRepository for MemSubmissionRepository {
    async fn find_by_id(&self, id: Id) -> RepoResult<Option<Submission>> {
        Ok(self.store.lock().submissions.get(&id).cloned())
    }

    async fn find_page(&self, limit: i64, offset: i64) -> RepoResult<Vec<Submission>> {
        let state = self.store.lock();
        let mut all: Vec<Submission> = state.submissions.values().cloned().collect();
        all.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(all
            .into_iter()
            .skip(offset.max(0) as usize)
            .take(limit.max(0) as usize)
            .collect())
    }

    async fn count(&self) -> RepoResult<i64> {
        Ok(self.store.lock().submissions.len() as i64)
    }

    async fn create(&self, submission: &Submission) -> RepoResult<()> {
        self.store
            .lock()
            .submissions
            .insert(submission.id, submission.clone());
        Ok(())
    }

    async fn update(&self, submission: &Submission) -> RepoResult<()> {
        let mut state = self.store.lock();
        let existing = state
            .submissions
            .get_mut(&submission.id)
            .ok_or(DomainError::SubmissionNotFound(submission.id))?;
        existing.title = submission.title.clone();
        existing.content = submission.content.clone();
        existing.modified = submission.modified;
        existing.updated_at = submission.updated_at;
        Ok(())
    }

    async fn delete(&self, id: Id) -> RepoResult<()> {
        let mut state = self.store.lock();
        if state.submissions.remove(&id).is_none() {
            return Err(DomainError::SubmissionNotFound(id));
        }
        // Cascade, same as the FK constraints in the schema
        state.comments.retain(|_, c| c.submission_id != id);
        state.votes.retain(|_, v| v.submission_id != id);
        Ok(())
    }
}

/// In-memory CommentRepository
#[derive(Clone)]
pub struct MemCommentRepository {
    store: Arc<MemStore>,
}

impl MemCommentRepository {
    pub fn new(store: Arc<MemStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl CommentRepository for MemCommentRepository {
    async fn find_by_id(&self, id: Id) -> RepoResult<Option<Comment>> {
        Ok(self.store.lock().comments.get(&id).cloned())
    }

    async fn find_by_submission(&self, submission_id: Id) -> RepoResult<Vec<Comment>> {
        let state = self.store.lock();
        let mut comments: Vec<Comment> = state
            .comments
            .values()
            .filter(|c| c.submission_id == submission_id)
            .cloned()
            .collect();
        comments.sort_by(|a, b| {
            b.score
                .cmp(&a.score)
                .then(a.created_at.cmp(&b.created_at))
                .then(a.id.cmp(&b.id))
        });
        Ok(comments)
    }

    async fn create(&self, comment: &Comment) -> RepoResult<()> {
        let mut state = self.store.lock();
        let submission = state
            .submissions
            .get_mut(&comment.submission_id)
            .ok_or(DomainError::SubmissionNotFound(comment.submission_id))?;
        submission.record_comment();
        state.comments.insert(comment.id, comment.clone());
        Ok(())
    }
}

/// In-memory VoteRepository
#[derive(Clone)]
pub struct MemVoteRepository {
    store: Arc<MemStore>,
}

impl MemVoteRepository {
    pub fn new(store: Arc<MemStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl VoteRepository for MemVoteRepository {
    async fn find(&self, user_id: Id, comment_id: Id) -> RepoResult<Option<Vote>> {
        Ok(self.store.lock().votes.get(&(user_id, comment_id)).cloned())
    }

    async fn find_by_submission(&self, user_id: Id, submission_id: Id) -> RepoResult<Vec<Vote>> {
        Ok(self
            .store
            .lock()
            .votes
            .values()
            .filter(|v| v.user_id == user_id && v.submission_id == submission_id)
            .cloned()
            .collect())
    }

    async fn apply(
        &self,
        vote: &Vote,
        author_id: Option<Id>,
        kind: VotableKind,
        transition: &VoteTransition,
    ) -> RepoResult<()> {
        let mut state = self.store.lock();

        let comment = state
            .comments
            .get_mut(&vote.comment_id)
            .ok_or(DomainError::CommentNotFound(vote.comment_id))?;
        comment.apply_vote(transition);

        if let Some(author_id) = author_id {
            if let Some(author) = state.users.get_mut(&author_id) {
                author.apply_karma(kind, transition.karma_delta);
            }
        }

        state
            .votes
            .insert((vote.user_id, vote.comment_id), vote.clone());

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use forum_core::value_objects::VoteDirection;

    fn store_with_thread() -> (Arc<MemStore>, User, Submission, Comment) {
        let store = MemStore::new();
        let author = User::new(Id::new(1), "alice".to_string());
        let submission = Submission::new(
            Id::new(10),
            author.id,
            "A post".to_string(),
            "body".to_string(),
        );
        let comment = Comment::new(Id::new(100), submission.id, &author, "first".to_string());

        {
            let mut state = store.lock();
            state.users.insert(author.id, author.clone());
            state.submissions.insert(submission.id, submission.clone());
        }
        (store, author, submission, comment)
    }

    #[tokio::test]
    async fn test_comment_create_bumps_comment_count() {
        let (store, _author, submission, comment) = store_with_thread();
        let repo = MemCommentRepository::new(Arc::clone(&store));

        repo.create(&comment).await.unwrap();

        let subs = MemSubmissionRepository::new(store);
        let found = subs.find_by_id(submission.id).await.unwrap().unwrap();
        assert_eq!(found.comment_count, 1);
    }

    #[tokio::test]
    async fn test_comment_create_without_submission_fails() {
        let store = MemStore::new();
        let author = User::new(Id::new(1), "alice".to_string());
        let orphan = Comment::new(Id::new(100), Id::new(999), &author, "hi".to_string());

        let repo = MemCommentRepository::new(store);
        let err = repo.create(&orphan).await.unwrap_err();
        assert!(matches!(err, DomainError::SubmissionNotFound(_)));
    }

    #[tokio::test]
    async fn test_vote_apply_moves_counters_and_karma_together() {
        let (store, author, submission, comment) = store_with_thread();
        let comments = MemCommentRepository::new(Arc::clone(&store));
        comments.create(&comment).await.unwrap();

        let transition = VoteTransition::compute(0, VoteDirection::Up).unwrap();
        let mut vote = Vote::new(Id::new(2), comment.id, submission.id, VoteDirection::Up);
        vote.value = transition.new_value;

        let votes = MemVoteRepository::new(Arc::clone(&store));
        votes
            .apply(&vote, comment.author_id, VotableKind::Comment, &transition)
            .await
            .unwrap();

        let found = comments.find_by_id(comment.id).await.unwrap().unwrap();
        assert_eq!((found.ups, found.downs, found.score), (1, 0, 1));

        let users = MemUserRepository::new(Arc::clone(&store));
        let alice = users.find_by_id(author.id).await.unwrap().unwrap();
        assert_eq!(alice.comment_karma, 1);

        let stored = votes.find(Id::new(2), comment.id).await.unwrap().unwrap();
        assert_eq!(stored.value, 1);
    }

    #[tokio::test]
    async fn test_submission_delete_cascades() {
        let (store, _author, submission, comment) = store_with_thread();
        let comments = MemCommentRepository::new(Arc::clone(&store));
        comments.create(&comment).await.unwrap();

        let transition = VoteTransition::compute(0, VoteDirection::Down).unwrap();
        let mut vote = Vote::new(Id::new(2), comment.id, submission.id, VoteDirection::Down);
        vote.value = transition.new_value;
        let votes = MemVoteRepository::new(Arc::clone(&store));
        votes
            .apply(&vote, comment.author_id, VotableKind::Comment, &transition)
            .await
            .unwrap();

        let subs = MemSubmissionRepository::new(Arc::clone(&store));
        subs.delete(submission.id).await.unwrap();

        assert!(comments.find_by_id(comment.id).await.unwrap().is_none());
        assert!(votes.find(Id::new(2), comment.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_comments_ordered_by_score_then_age() {
        let (store, author, submission, _comment) = store_with_thread();
        let comments = MemCommentRepository::new(Arc::clone(&store));

        let mut low = Comment::new(Id::new(101), submission.id, &author, "low".to_string());
        low.score = 1;
        let mut high = Comment::new(Id::new(102), submission.id, &author, "high".to_string());
        high.score = 5;
        let tied = Comment::new(Id::new(103), submission.id, &author, "tied".to_string());
        let mut tied_newer = Comment::new(Id::new(104), submission.id, &author, "tied2".to_string());
        tied_newer.created_at = tied.created_at;

        for c in [&low, &high, &tied, &tied_newer] {
            comments.create(c).await.unwrap();
        }

        let ordered = comments.find_by_submission(submission.id).await.unwrap();
        let ids: Vec<Id> = ordered.iter().map(|c| c.id).collect();
        assert_eq!(
            ids,
            vec![Id::new(102), Id::new(101), Id::new(103), Id::new(104)]
        );
    }

    #[tokio::test]
    async fn test_find_page_is_newest_first() {
        let store = MemStore::new();
        let subs = MemSubmissionRepository::new(Arc::clone(&store));

        for i in 1..=3 {
            let s = Submission::new(Id::new(i), Id::new(1), format!("post {i}"), String::new());
            subs.create(&s).await.unwrap();
        }

        let page = subs.find_page(2, 0).await.unwrap();
        assert_eq!(page.len(), 2);
        assert!(page[0].id > page[1].id);
        assert_eq!(subs.count().await.unwrap(), 3);
    }
}
