//! Request DTOs for API endpoints
//!
//! The vote and comment requests keep the wire field names existing clients
//! send (`what_id`, `vote_value`, `parentType`, ...). Every field is
//! optional at the deserialization layer; presence
//! checks happen in the handlers so each missing field can produce its
//! contractual rejection message.

use forum_core::Id;
use serde::Deserialize;
use validator::Validate;

// ============================================================================
// Vote Requests
// ============================================================================

/// A vote cast on a comment
#[derive(Debug, Clone, Default, Deserialize)]
pub struct VoteRequest {
    /// Comment id the vote lands on
    #[serde(default)]
    pub what_id: Option<Id>,

    /// Requested vote value as sent by the client; must parse as exactly
    /// `-1` or `1`
    #[serde(default)]
    pub vote_value: Option<String>,
}

// ============================================================================
// Comment Requests
// ============================================================================

/// A new comment under a submission or another comment
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PostCommentRequest {
    /// "comment" or "submission"
    #[serde(default, rename = "parentType")]
    pub parent_type: Option<String>,

    /// Digits-only id of the parent
    #[serde(default, rename = "parentId")]
    pub parent_id: Option<String>,

    #[serde(default, rename = "commentContent")]
    pub comment_content: Option<String>,
}

// ============================================================================
// Submission Requests
// ============================================================================

/// Create submission request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateSubmissionRequest {
    #[validate(length(min = 1, max = 250, message = "Title must be 1-250 characters"))]
    pub title: String,

    #[validate(length(max = 5000, message = "Content must be at most 5000 characters"))]
    #[serde(default)]
    pub content: String,
}

/// Update submission request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateSubmissionRequest {
    #[validate(length(min = 1, max = 250, message = "Title must be 1-250 characters"))]
    pub title: Option<String>,

    #[validate(length(max = 5000, message = "Content must be at most 5000 characters"))]
    pub content: Option<String>,
}
