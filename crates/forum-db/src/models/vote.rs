//! Vote database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for votes table
#[derive(Debug, Clone, FromRow)]
pub struct VoteModel {
    pub user_id: i64,
    pub comment_id: i64,
    pub submission_id: i64,
    pub value: i32,
    pub created_at: DateTime<Utc>,
}
