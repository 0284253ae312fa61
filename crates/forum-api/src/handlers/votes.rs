//! Vote handler
//!
//! Endpoint for casting, changing, and cancelling votes on comments. The
//! rejection bodies here are literal plain-text strings that shipped clients
//! match on - do not reword them.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use forum_core::VoteDirection;
use forum_service::{VoteRequest, VoteResponse, VoteService};

use crate::extractors::OptionalAuthUser;
use crate::response::ApiError;
use crate::state::AppState;

/// Cast, change, or cancel a vote on a comment
///
/// POST /api/v1/votes
///
/// Casting the same value twice cancels the vote (stored value 0). The
/// response carries the signed score delta so the client can update the
/// displayed score without a refresh.
pub async fn vote(
    State(state): State<AppState>,
    auth: OptionalAuthUser,
    payload: Option<Json<VoteRequest>>,
) -> Response {
    // Check order is part of the contract: identity first, then the vote
    // value, then the target id
    let Some(user) = auth.0 else {
        return StatusCode::FORBIDDEN.into_response();
    };

    let request = payload.map_or_else(VoteRequest::default, |Json(r)| r);

    let Some(direction) = request.vote_value.as_deref().and_then(VoteDirection::parse) else {
        return rejection("Wrong value for the vote!");
    };

    let Some(what_id) = request.what_id else {
        return rejection("Not all values were provided!");
    };

    let service = VoteService::new(state.service_context());
    match service.cast_vote(user.user_id, what_id, direction).await {
        Ok(vote_diff) => Json(VoteResponse::ok(vote_diff)).into_response(),
        Err(e) if e.is_vote_state_corrupt() => {
            rejection("Wrong values for old/new vote combination")
        }
        Err(e) => ApiError::Service(e).into_response(),
    }
}

/// Plain-text 400, the rejection shape shipped clients match on
fn rejection(msg: &'static str) -> Response {
    (StatusCode::BAD_REQUEST, msg).into_response()
}
