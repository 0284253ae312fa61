//! Submission database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for submissions table
#[derive(Debug, Clone, FromRow)]
pub struct SubmissionModel {
    pub id: i64,
    pub author_id: Option<i64>,
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
