//! Thread and submission handlers
//!
//! Thread assembly (submission + comment tree + the caller's votes) and the
//! submission lifecycle: front page, create, edit, delete.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use forum_service::{
    CreateSubmissionRequest, FrontPageResponse, SubmissionResponse, SubmissionService,
    ThreadResponse, ThreadService, UpdateSubmissionRequest,
};
use serde::Deserialize;
use validator::Validate;

use crate::extractors::{AuthUser, OptionalAuthUser};
use crate::response::{ApiError, ApiResult, Created, NoContent};
use crate::state::AppState;

/// Front page query parameters
#[derive(Debug, Deserialize)]
pub struct FrontPageParams {
    #[serde(default)]
    pub page: Option<String>,
}

/// List submissions newest-first, 25 per page
///
/// GET /api/v1/threads?page=N
pub async fn front_page(
    State(state): State<AppState>,
    Query(params): Query<FrontPageParams>,
) -> ApiResult<Json<FrontPageResponse>> {
    // A non-integer page is a 404 (not a 400); an out-of-range one clamps to
    // the last page inside the service
    let page = match params.page {
        None => 1,
        Some(raw) => raw
            .parse::<i64>()
            .map_err(|_| ApiError::App(forum_common::AppError::not_found(format!("page {raw}"))))?,
    };

    let service = SubmissionService::new(state.service_context());
    let response = service.front_page(page).await?;
    Ok(Json(response))
}

/// Assemble one thread: submission, comment tree, and the caller's votes
///
/// GET /api/v1/threads/:thread_id
pub async fn get_thread(
    State(state): State<AppState>,
    auth: OptionalAuthUser,
    Path(thread_id): Path<String>,
) -> ApiResult<Json<ThreadResponse>> {
    let thread_id = thread_id
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid thread_id format"))?;

    let service = ThreadService::new(state.service_context());
    let thread = service
        .assemble(thread_id, auth.0.map(|u| u.user_id))
        .await?;
    Ok(Json(thread))
}

/// Create a new submission (staff only)
///
/// POST /api/v1/threads
pub async fn create_submission(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(payload): Json<CreateSubmissionRequest>,
) -> ApiResult<Created<Json<SubmissionResponse>>> {
    payload.validate()?;

    let service = SubmissionService::new(state.service_context());
    let submission = service.create_submission(auth.user_id, payload).await?;
    Ok(Created(Json(submission)))
}

/// Edit a submission (author only)
///
/// PATCH /api/v1/threads/:thread_id
pub async fn update_submission(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(thread_id): Path<String>,
    Json(payload): Json<UpdateSubmissionRequest>,
) -> ApiResult<Json<SubmissionResponse>> {
    let thread_id = thread_id
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid thread_id format"))?;
    payload.validate()?;

    let service = SubmissionService::new(state.service_context());
    let submission = service
        .update_submission(auth.user_id, thread_id, payload)
        .await?;
    Ok(Json(submission))
}

/// Delete a submission and its whole tree (author only)
///
/// DELETE /api/v1/threads/:thread_id
pub async fn delete_submission(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(thread_id): Path<String>,
) -> ApiResult<NoContent> {
    let thread_id = thread_id
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid thread_id format"))?;

    let service = SubmissionService::new(state.service_context());
    service.delete_submission(auth.user_id, thread_id).await?;
    Ok(NoContent)
}
