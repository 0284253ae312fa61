//! Response DTOs for API endpoints
//!
//! Ids are serialized as strings for JavaScript compatibility. The vote
//! response keeps the `{"error": null, "voteDiff": n}` shape shipped
//! clients parse.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::Serialize;

// ============================================================================
// Vote Responses
// ============================================================================

/// Outcome of one vote cast, for optimistic client-side score updates
#[derive(Debug, Serialize)]
pub struct VoteResponse {
    pub error: Option<String>,
    #[serde(rename = "voteDiff")]
    pub vote_diff: i32,
}

impl VoteResponse {
    /// Successful cast with the signed score delta
    pub fn ok(vote_diff: i32) -> Self {
        Self {
            error: None,
            vote_diff,
        }
    }
}

// ============================================================================
// Message Responses
// ============================================================================

/// Plain message reply, used by the comment endpoint
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub msg: String,
}

impl MessageResponse {
    pub fn new(msg: impl Into<String>) -> Self {
        Self { msg: msg.into() }
    }
}

// ============================================================================
// Submission Responses
// ============================================================================

/// Submission as rendered to clients
#[derive(Debug, Clone, Serialize)]
pub struct SubmissionResponse {
    pub id: String,
    pub title: String,
    pub content: String,
    /// Resolved display name; "deleted user" when the author is gone
    pub author_name: String,
    pub ups: i32,
    pub downs: i32,
    pub score: i32,
    pub comment_count: i32,
    pub created_at: DateTime<Utc>,
    pub modified: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// One front-page listing
#[derive(Debug, Serialize)]
pub struct FrontPageResponse {
    pub submissions: Vec<SubmissionResponse>,
    pub page: i64,
    pub total_pages: i64,
}

// ============================================================================
// Thread Responses
// ============================================================================

/// One comment with its replies nested beneath it, each level ordered score
/// descending
#[derive(Debug, Clone, Serialize)]
pub struct CommentNode {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
    pub author_name: String,
    pub content: String,
    pub ups: i32,
    pub downs: i32,
    pub score: i32,
    pub created_at: DateTime<Utc>,
    pub children: Vec<CommentNode>,
}

/// A submission with its full comment tree and the requesting user's votes
#[derive(Debug, Serialize)]
pub struct ThreadResponse {
    pub submission: SubmissionResponse,
    pub comments: Vec<CommentNode>,
    /// Comment id -> this user's current vote value. Unvoted comments are
    /// absent; cancelled votes appear with value 0. Empty for anonymous
    /// readers.
    pub comment_votes: HashMap<String, i32>,
}
