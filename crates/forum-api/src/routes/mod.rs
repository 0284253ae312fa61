//! Route definitions
//!
//! All API routes organized by domain and mounted under /api/v1.

use axum::{
    routing::{delete, get, patch, post},
    Router,
};

use crate::handlers::{comments, health, threads, votes};
use crate::state::AppState;

/// Create the main API router with all routes (excluding health for separate middleware handling)
pub fn create_router() -> Router<AppState> {
    Router::new().nest("/api/v1", api_v1_routes())
}

/// Health check routes (exported separately to bypass rate limiting)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// API v1 routes
fn api_v1_routes() -> Router<AppState> {
    Router::new()
        .merge(thread_routes())
        .merge(comment_routes())
        .merge(vote_routes())
}

/// Thread and submission routes
fn thread_routes() -> Router<AppState> {
    Router::new()
        .route("/threads", get(threads::front_page))
        .route("/threads", post(threads::create_submission))
        .route("/threads/:thread_id", get(threads::get_thread))
        .route("/threads/:thread_id", patch(threads::update_submission))
        .route("/threads/:thread_id", delete(threads::delete_submission))
}

/// Comment routes
fn comment_routes() -> Router<AppState> {
    Router::new().route("/comments", post(comments::post_comment))
}

/// Vote routes
fn vote_routes() -> Router<AppState> {
    Router::new().route("/votes", post(votes::vote))
}
