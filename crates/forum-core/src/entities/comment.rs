//! Comment entity - a node in a submission's threaded tree

use chrono::{DateTime, Utc};

use crate::entities::user::User;
use crate::entities::vote::VoteTransition;
use crate::value_objects::Id;

/// Comment entity
///
/// `submission_id` always names the root submission of the thread, no matter
/// how deeply nested the comment is; replies inherit it from their parent at
/// construction, so the invariant cannot be broken after the fact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub id: Id,
    pub submission_id: Id,
    /// None for a direct child of the submission
    pub parent_id: Option<Id>,
    /// None once the author account has been deleted
    pub author_id: Option<Id>,
    /// Display name captured at creation time, stable across later renames
    pub author_name: String,
    pub content: String,
    pub ups: i32,
    pub downs: i32,
    pub score: i32,
    pub created_at: DateTime<Utc>,
}

impl Comment {
    /// Create a root-level comment directly under a submission
    pub fn new(id: Id, submission_id: Id, author: &User, content: String) -> Self {
        Self {
            id,
            submission_id,
            parent_id: None,
            author_id: Some(author.id),
            author_name: author.username.clone(),
            content,
            ups: 0,
            downs: 0,
            score: 0,
            created_at: Utc::now(),
        }
    }

    /// Create a nested reply to another comment
    pub fn reply(id: Id, parent: &Comment, author: &User, content: String) -> Self {
        Self {
            id,
            submission_id: parent.submission_id,
            parent_id: Some(parent.id),
            author_id: Some(author.id),
            author_name: author.username.clone(),
            content,
            ups: 0,
            downs: 0,
            score: 0,
            created_at: Utc::now(),
        }
    }

    /// Check if this comment is a nested reply
    #[inline]
    pub fn is_reply(&self) -> bool {
        self.parent_id.is_some()
    }

    /// Apply the counter deltas of one vote transition
    pub fn apply_vote(&mut self, transition: &VoteTransition) {
        self.ups += transition.ups_delta;
        self.downs += transition.downs_delta;
        self.score += transition.score_delta;
    }
}
