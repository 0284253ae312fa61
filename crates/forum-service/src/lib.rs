//! # forum-service
//!
//! Application layer containing the vote engine, comment tree builder, thread
//! assembly, submission lifecycle, and their DTOs.

pub mod dto;
pub mod services;

// Re-export commonly used types at crate root
pub use dto::{
    CommentNode, CreateSubmissionRequest, FrontPageResponse, MessageResponse, PostCommentRequest,
    SubmissionResponse, ThreadResponse, UpdateSubmissionRequest, VoteRequest, VoteResponse,
};
pub use services::{
    CommentParent, CommentService, ServiceContext, ServiceContextBuilder, ServiceError,
    ServiceResult, SubmissionService, ThreadService, VoteService,
};
