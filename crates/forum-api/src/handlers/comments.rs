//! Comment handler
//!
//! Endpoint for posting comments under a submission or another comment. The
//! `msg` replies are literal strings that shipped clients display verbatim.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use forum_core::Id;
use forum_service::{CommentParent, CommentService, MessageResponse, PostCommentRequest};

use crate::extractors::OptionalAuthUser;
use crate::response::ApiError;
use crate::state::AppState;

/// Post a new comment
///
/// POST /api/v1/comments
///
/// Check order is part of the contract: identity, then parent shape, then
/// content emptiness, then parent existence. A malformed or missing parent
/// is a hard 400; empty content gets a friendly message instead.
pub async fn post_comment(
    State(state): State<AppState>,
    auth: OptionalAuthUser,
    payload: Option<Json<PostCommentRequest>>,
) -> Response {
    let Some(user) = auth.0 else {
        return Json(MessageResponse::new("You need to log in to post new comments."))
            .into_response();
    };

    let request = payload.map_or_else(PostCommentRequest::default, |Json(r)| r);

    let Some(parent) = resolve_parent(&request) else {
        return StatusCode::BAD_REQUEST.into_response();
    };

    let content = request.comment_content.unwrap_or_default();
    if content.trim().is_empty() {
        return Json(MessageResponse::new("You have to write something.")).into_response();
    }

    let service = CommentService::new(state.service_context());
    match service.create_comment(user.user_id, parent, content).await {
        Ok(_) => Json(MessageResponse::new("Your comment has been posted.")).into_response(),
        // A nonexistent parent id is a bad request here, not a 404
        Err(e) if e.status_code() == 404 => StatusCode::BAD_REQUEST.into_response(),
        Err(e) => ApiError::Service(e).into_response(),
    }
}

/// Resolve parentType/parentId into a typed parent, if they are well-formed
fn resolve_parent(request: &PostCommentRequest) -> Option<CommentParent> {
    let parent_type = request.parent_type.as_deref()?;
    let parent_id = request.parent_id.as_deref()?;

    if parent_id.is_empty() || !parent_id.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let id = parent_id.parse::<Id>().ok()?;

    match parent_type {
        "comment" => Some(CommentParent::Comment(id)),
        "submission" => Some(CommentParent::Submission(id)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(parent_type: Option<&str>, parent_id: Option<&str>) -> PostCommentRequest {
        PostCommentRequest {
            parent_type: parent_type.map(String::from),
            parent_id: parent_id.map(String::from),
            comment_content: Some("text".to_string()),
        }
    }

    #[test]
    fn test_resolve_parent_accepts_both_kinds() {
        assert_eq!(
            resolve_parent(&request(Some("submission"), Some("7"))),
            Some(CommentParent::Submission(Id::new(7)))
        );
        assert_eq!(
            resolve_parent(&request(Some("comment"), Some("8"))),
            Some(CommentParent::Comment(Id::new(8)))
        );
    }

    #[test]
    fn test_resolve_parent_rejects_malformed_input() {
        assert_eq!(resolve_parent(&request(None, Some("7"))), None);
        assert_eq!(resolve_parent(&request(Some("submission"), None)), None);
        assert_eq!(resolve_parent(&request(Some("submission"), Some(""))), None);
        assert_eq!(resolve_parent(&request(Some("submission"), Some("-7"))), None);
        assert_eq!(resolve_parent(&request(Some("submission"), Some("7a"))), None);
        assert_eq!(resolve_parent(&request(Some("thread"), Some("7"))), None);
    }
}
