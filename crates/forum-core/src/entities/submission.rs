//! Submission entity - a top-level post that comments and votes hang off

use chrono::{DateTime, Utc};

use crate::entities::vote::VoteTransition;
use crate::value_objects::Id;

/// Submission entity
///
/// `ups`/`downs`/`score`/`comment_count` are denormalized counters maintained
/// by the vote engine and the comment tree builder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub id: Id,
    /// None once the author account has been deleted
    pub author_id: Option<Id>,
    pub title: String,
    pub content: String,
    pub ups: i32,
    pub downs: i32,
    pub score: i32,
    pub comment_count: i32,
    pub created_at: DateTime<Utc>,
    pub modified: bool,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Submission {
    /// Create a new Submission
    pub fn new(id: Id, author_id: Id, title: String, content: String) -> Self {
        Self {
            id,
            author_id: Some(author_id),
            title,
            content,
            ups: 0,
            downs: 0,
            score: 0,
            comment_count: 0,
            created_at: Utc::now(),
            modified: false,
            updated_at: None,
        }
    }

    /// Edit title and body, flagging the submission as modified
    pub fn edit(&mut self, title: String, content: String) {
        self.title = title;
        self.content = content;
        self.modified = true;
        self.updated_at = Some(Utc::now());
    }

    /// Record one new comment anywhere in this submission's tree
    #[inline]
    pub fn record_comment(&mut self) {
        self.comment_count += 1;
    }

    /// Apply the counter deltas of one vote transition
    pub fn apply_vote(&mut self, transition: &VoteTransition) {
        self.ups += transition.ups_delta;
        self.downs += transition.downs_delta;
        self.score += transition.score_delta;
    }
}
