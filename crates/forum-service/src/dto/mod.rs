//! Data transfer objects for the HTTP boundary

mod mappers;
mod requests;
mod responses;

pub use mappers::build_comment_tree;
pub use requests::{
    CreateSubmissionRequest, PostCommentRequest, UpdateSubmissionRequest, VoteRequest,
};
pub use responses::{
    CommentNode, FrontPageResponse, MessageResponse, SubmissionResponse, ThreadResponse,
    VoteResponse,
};
