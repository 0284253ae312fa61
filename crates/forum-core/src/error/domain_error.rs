//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::value_objects::Id;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("User not found: {0}")]
    UserNotFound(Id),

    #[error("Submission not found: {0}")]
    SubmissionNotFound(Id),

    #[error("Comment not found: {0}")]
    CommentNotFound(Id),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// The stored vote value and the requested one form no defined
    /// transition. This is corrupted prior state, not a user error; the
    /// display string is part of the public vote-endpoint contract.
    #[error("Wrong values for old/new vote combination")]
    VoteStateCorrupt { stored: i32 },

    // =========================================================================
    // Authorization Errors
    // =========================================================================
    #[error("Not the submission author")]
    NotSubmissionAuthor,

    #[error("Only staff can create submissions")]
    StaffOnly,

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            Self::UserNotFound(_) => "UNKNOWN_USER",
            Self::SubmissionNotFound(_) => "UNKNOWN_SUBMISSION",
            Self::CommentNotFound(_) => "UNKNOWN_COMMENT",
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::VoteStateCorrupt { .. } => "VOTE_STATE_CORRUPT",
            Self::NotSubmissionAuthor => "NOT_SUBMISSION_AUTHOR",
            Self::StaffOnly => "STAFF_ONLY",
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::UserNotFound(_) | Self::SubmissionNotFound(_) | Self::CommentNotFound(_)
        )
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::ValidationError(_) | Self::VoteStateCorrupt { .. })
    }

    /// Check if this is an authorization error
    pub fn is_authorization(&self) -> bool {
        matches!(self, Self::NotSubmissionAuthor | Self::StaffOnly)
    }
}
