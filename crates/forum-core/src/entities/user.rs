//! User entity - represents a forum user and their karma counters

use chrono::{DateTime, Utc};

use crate::entities::votable::VotableKind;
use crate::value_objects::Id;

/// Display name shown when an author reference resolves to nothing.
///
/// This is a presentation-layer default, never a stored value.
pub const DELETED_USER_NAME: &str = "deleted user";

/// User entity
///
/// Each karma counter equals the sum of all currently-active vote values cast
/// on this user's items of the corresponding kind. Both are maintained
/// incrementally by the vote engine, never recomputed from scratch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: Id,
    pub username: String,
    pub email: Option<String>,
    pub about_text: Option<String>,
    pub post_karma: i32,
    pub comment_karma: i32,
    pub is_staff: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new User with required fields
    pub fn new(id: Id, username: String) -> Self {
        let now = Utc::now();
        Self {
            id,
            username,
            email: None,
            about_text: None,
            post_karma: 0,
            comment_karma: 0,
            is_staff: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply a signed karma delta to the counter matching the votable kind
    pub fn apply_karma(&mut self, kind: VotableKind, delta: i32) {
        match kind {
            VotableKind::Submission => self.post_karma += delta,
            VotableKind::Comment => self.comment_karma += delta,
        }
    }

    /// Total karma across both counters
    #[inline]
    pub fn karma(&self) -> i32 {
        self.post_karma + self.comment_karma
    }
}
