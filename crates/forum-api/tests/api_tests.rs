//! HTTP contract tests
//!
//! Drive the whole router (middleware included) over the in-memory
//! repositories with `tower::ServiceExt::oneshot`. These pin the literal
//! request/response contract of the vote and comment endpoints - the
//! rejection strings and the `voteDiff` shape are load-bearing for shipped
//! clients.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use forum_api::server::create_app;
use forum_api::state::AppState;
use forum_common::{
    AppConfig, AppSettings, CorsConfig, DatabaseConfig, Environment, IdConfig, RateLimitConfig,
    ServerConfig,
};
use forum_core::entities::{Comment, Submission, User, VotableKind, Vote, VoteTransition};
use forum_core::traits::{CommentRepository, SubmissionRepository, UserRepository, VoteRepository};
use forum_core::{Id, IdGenerator, VoteDirection};
use forum_db::{
    MemCommentRepository, MemStore, MemSubmissionRepository, MemUserRepository, MemVoteRepository,
};
use forum_service::{ServiceContext, ServiceContextBuilder};

fn test_config() -> AppConfig {
    AppConfig {
        app: AppSettings {
            name: "forum-server-test".to_string(),
            env: Environment::Development,
        },
        api: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
        },
        database: DatabaseConfig {
            url: "postgres://unused".to_string(),
            max_connections: 1,
            min_connections: 1,
        },
        rate_limit: RateLimitConfig {
            requests_per_second: 1000,
            burst: 1000,
        },
        cors: CorsConfig {
            allowed_origins: vec![],
        },
        id: IdConfig { worker_id: 0 },
    }
}

/// Build the full app over the in-memory store; the returned context shares
/// the same store for seeding
fn test_app() -> (Router, ServiceContext) {
    let store = MemStore::new();
    let ctx = ServiceContextBuilder::new()
        .user_repo(Arc::new(MemUserRepository::new(Arc::clone(&store))))
        .submission_repo(Arc::new(MemSubmissionRepository::new(Arc::clone(&store))))
        .comment_repo(Arc::new(MemCommentRepository::new(Arc::clone(&store))))
        .vote_repo(Arc::new(MemVoteRepository::new(store)))
        .id_generator(Arc::new(IdGenerator::new(0)))
        .build()
        .unwrap();

    let app = create_app(AppState::new(ctx.clone(), test_config()));
    (app, ctx)
}

async fn seed_user(ctx: &ServiceContext, username: &str, staff: bool) -> User {
    let mut user = User::new(ctx.generate_id(), username.to_string());
    user.is_staff = staff;
    ctx.user_repo().create(&user).await.unwrap();
    user
}

async fn seed_thread(ctx: &ServiceContext, author: &User) -> (Submission, Comment) {
    let submission = Submission::new(
        ctx.generate_id(),
        author.id,
        "A post".to_string(),
        "content".to_string(),
    );
    ctx.submission_repo().create(&submission).await.unwrap();
    let comment = Comment::new(ctx.generate_id(), submission.id, author, "first".to_string());
    ctx.comment_repo().create(&comment).await.unwrap();
    (submission, comment)
}

fn post_json(uri: &str, user: Option<&User>, body: Value) -> Request<Body> {
    let mut builder = Request::post(uri).header(header::CONTENT_TYPE, "application/json");
    if let Some(user) = user {
        builder = builder.header("x-user-id", user.id.to_string());
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

fn get(uri: &str, user: Option<&User>) -> Request<Body> {
    let mut builder = Request::get(uri);
    if let Some(user) = user {
        builder = builder.header("x-user-id", user.id.to_string());
    }
    builder.body(Body::empty()).unwrap()
}

async fn body_text(response: axum::response::Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    serde_json::from_str(&body_text(response).await).unwrap()
}

// ============================================================================
// Vote endpoint
// ============================================================================

#[tokio::test]
async fn vote_requires_authentication() {
    let (app, _ctx) = test_app();

    let response = app
        .oneshot(post_json("/api/v1/votes", None, json!({})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn vote_rejects_missing_or_invalid_vote_value() {
    let (app, ctx) = test_app();
    let user = seed_user(&ctx, "voter", false).await;
    let (_, comment) = seed_thread(&ctx, &user).await;

    // No data at all
    let response = app
        .clone()
        .oneshot(post_json("/api/v1/votes", Some(&user), json!({})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_text(response).await, "Wrong value for the vote!");

    // what_id without vote_value
    let response = app
        .clone()
        .oneshot(post_json(
            "/api/v1/votes",
            Some(&user),
            json!({"what_id": comment.id.to_string()}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_text(response).await, "Wrong value for the vote!");

    // Values that do not parse as exactly -1 or 1
    for bad in ["0", "2", "-2", "1.5", "-1.5", "abc", "", "+1"] {
        let response = app
            .clone()
            .oneshot(post_json(
                "/api/v1/votes",
                Some(&user),
                json!({"what_id": comment.id.to_string(), "vote_value": bad}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "value {bad:?}");
        assert_eq!(body_text(response).await, "Wrong value for the vote!");
    }
}

#[tokio::test]
async fn vote_rejects_missing_what_id_with_valid_value() {
    let (app, ctx) = test_app();
    let user = seed_user(&ctx, "voter", false).await;

    let response = app
        .oneshot(post_json(
            "/api/v1/votes",
            Some(&user),
            json!({"vote_value": "1"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_text(response).await, "Not all values were provided!");
}

#[tokio::test]
async fn vote_full_cycle_returns_table_deltas() {
    let (app, ctx) = test_app();
    let author = seed_user(&ctx, "author", false).await;
    let voter = seed_user(&ctx, "voter", false).await;
    let (_, comment) = seed_thread(&ctx, &author).await;

    let cast = |value: &str| {
        post_json(
            "/api/v1/votes",
            Some(&voter),
            json!({"what_id": comment.id.to_string(), "vote_value": value}),
        )
    };

    // New vote: 0 -> +1
    let response = app.clone().oneshot(cast("1")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!({"error": null, "voteDiff": 1})
    );

    // Change: +1 -> -1 doubles the delta
    let response = app.clone().oneshot(cast("-1")).await.unwrap();
    assert_eq!(
        body_json(response).await,
        json!({"error": null, "voteDiff": -2})
    );

    // Cancel: -1 cast again
    let response = app.clone().oneshot(cast("-1")).await.unwrap();
    assert_eq!(
        body_json(response).await,
        json!({"error": null, "voteDiff": 1})
    );

    // Re-activate the cancelled row: 0 -> -1, then -1 -> +1
    let response = app.clone().oneshot(cast("-1")).await.unwrap();
    assert_eq!(
        body_json(response).await,
        json!({"error": null, "voteDiff": -1})
    );
    let response = app.clone().oneshot(cast("1")).await.unwrap();
    assert_eq!(
        body_json(response).await,
        json!({"error": null, "voteDiff": 2})
    );
}

#[tokio::test]
async fn vote_on_unknown_comment_is_not_found() {
    let (app, ctx) = test_app();
    let user = seed_user(&ctx, "voter", false).await;

    let response = app
        .oneshot(post_json(
            "/api/v1/votes",
            Some(&user),
            json!({"what_id": "999999", "vote_value": "1"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn vote_with_corrupt_stored_value_is_rejected() {
    let (app, ctx) = test_app();
    let author = seed_user(&ctx, "author", false).await;
    let voter = seed_user(&ctx, "voter", false).await;
    let (submission, comment) = seed_thread(&ctx, &author).await;

    // Plant a corrupted row without touching the counters
    let mut bad = Vote::new(voter.id, comment.id, submission.id, VoteDirection::Up);
    bad.value = 5;
    let zero = VoteTransition {
        score_delta: 0,
        ups_delta: 0,
        downs_delta: 0,
        karma_delta: 0,
        new_value: 5,
    };
    ctx.vote_repo()
        .apply(&bad, None, VotableKind::Comment, &zero)
        .await
        .unwrap();

    let response = app
        .oneshot(post_json(
            "/api/v1/votes",
            Some(&voter),
            json!({"what_id": comment.id.to_string(), "vote_value": "1"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_text(response).await,
        "Wrong values for old/new vote combination"
    );
}

// ============================================================================
// Comment endpoint
// ============================================================================

#[tokio::test]
async fn comment_requires_login_message() {
    let (app, _ctx) = test_app();

    let response = app
        .oneshot(post_json("/api/v1/comments", None, json!({})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!({"msg": "You need to log in to post new comments."})
    );
}

#[tokio::test]
async fn comment_rejects_malformed_parents() {
    let (app, ctx) = test_app();
    let user = seed_user(&ctx, "alice", false).await;
    let (submission, _) = seed_thread(&ctx, &user).await;

    let bad_bodies = [
        json!({"parentType": "", "parentId": "", "commentContent": ""}),
        json!({"parentType": "thread", "parentId": submission.id.to_string(), "commentContent": "x"}),
        json!({"parentType": "submission", "parentId": "not_an_integer", "commentContent": "x"}),
        // Well-formed but nonexistent parent
        json!({"parentType": "submission", "parentId": "999999", "commentContent": "x"}),
        json!({"parentType": "comment", "parentId": "999999", "commentContent": "x"}),
    ];

    for body in bad_bodies {
        let response = app
            .clone()
            .oneshot(post_json("/api/v1/comments", Some(&user), body.clone()))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "body {body}");
    }
}

#[tokio::test]
async fn comment_empty_content_gets_message() {
    let (app, ctx) = test_app();
    let user = seed_user(&ctx, "alice", false).await;
    let (submission, _) = seed_thread(&ctx, &user).await;

    for content in ["", "   ", "\n\t"] {
        let response = app
            .clone()
            .oneshot(post_json(
                "/api/v1/comments",
                Some(&user),
                json!({
                    "parentType": "submission",
                    "parentId": submission.id.to_string(),
                    "commentContent": content,
                }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await,
            json!({"msg": "You have to write something."})
        );
    }
}

#[tokio::test]
async fn comment_posts_under_submission_and_comment() {
    let (app, ctx) = test_app();
    let user = seed_user(&ctx, "alice", false).await;
    let (submission, comment) = seed_thread(&ctx, &user).await;

    let response = app
        .clone()
        .oneshot(post_json(
            "/api/v1/comments",
            Some(&user),
            json!({
                "parentType": "submission",
                "parentId": submission.id.to_string(),
                "commentContent": "a root comment",
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!({"msg": "Your comment has been posted."})
    );

    let response = app
        .clone()
        .oneshot(post_json(
            "/api/v1/comments",
            Some(&user),
            json!({
                "parentType": "comment",
                "parentId": comment.id.to_string(),
                "commentContent": "a nested reply",
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    // Both landed against the root submission's counter
    let response = app
        .oneshot(get(&format!("/api/v1/threads/{}", submission.id), None))
        .await
        .unwrap();
    let thread = body_json(response).await;
    assert_eq!(thread["submission"]["comment_count"], json!(3));
}

// ============================================================================
// Thread endpoint
// ============================================================================

#[tokio::test]
async fn thread_unknown_submission_is_not_found() {
    let (app, _ctx) = test_app();

    let response = app
        .oneshot(get("/api/v1/threads/999999", None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn thread_vote_map_reflects_active_and_cancelled_votes() {
    let (app, ctx) = test_app();
    let author = seed_user(&ctx, "author", false).await;
    let voter = seed_user(&ctx, "voter", false).await;
    let (submission, upvoted) = seed_thread(&ctx, &author).await;
    let cancelled = Comment::new(
        ctx.generate_id(),
        submission.id,
        &author,
        "second".to_string(),
    );
    ctx.comment_repo().create(&cancelled).await.unwrap();

    let cast = |comment_id: Id, value: &str| {
        post_json(
            "/api/v1/votes",
            Some(&voter),
            json!({"what_id": comment_id.to_string(), "vote_value": value}),
        )
    };
    app.clone().oneshot(cast(upvoted.id, "1")).await.unwrap();
    app.clone().oneshot(cast(cancelled.id, "-1")).await.unwrap();
    app.clone().oneshot(cast(cancelled.id, "-1")).await.unwrap();

    // Anonymous readers get an empty map
    let response = app
        .clone()
        .oneshot(get(&format!("/api/v1/threads/{}", submission.id), None))
        .await
        .unwrap();
    let thread = body_json(response).await;
    assert_eq!(thread["comment_votes"], json!({}));

    // The voter sees the up vote and the cancelled vote as 0
    let response = app
        .oneshot(get(
            &format!("/api/v1/threads/{}", submission.id),
            Some(&voter),
        ))
        .await
        .unwrap();
    let thread = body_json(response).await;
    assert_eq!(thread["comment_votes"][upvoted.id.to_string()], json!(1));
    assert_eq!(thread["comment_votes"][cancelled.id.to_string()], json!(0));
}

// ============================================================================
// Submission lifecycle
// ============================================================================

#[tokio::test]
async fn submission_creation_is_staff_only() {
    let (app, ctx) = test_app();
    let staff = seed_user(&ctx, "admin", true).await;
    let pleb = seed_user(&ctx, "pleb", false).await;

    let body = json!({"title": "news", "content": "something happened"});

    let response = app
        .clone()
        .oneshot(post_json("/api/v1/threads", Some(&pleb), body.clone()))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let response = app
        .oneshot(post_json("/api/v1/threads", Some(&staff), body))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = body_json(response).await;
    assert_eq!(created["author_name"], json!("admin"));
    assert_eq!(created["score"], json!(0));
}

#[tokio::test]
async fn submission_edit_and_delete_are_author_only() {
    let (app, ctx) = test_app();
    let author = seed_user(&ctx, "author", false).await;
    let other = seed_user(&ctx, "other", false).await;
    let (submission, _) = seed_thread(&ctx, &author).await;
    let uri = format!("/api/v1/threads/{}", submission.id);

    let patch = |user: &User| {
        Request::patch(uri.as_str())
            .header(header::CONTENT_TYPE, "application/json")
            .header("x-user-id", user.id.to_string())
            .body(Body::from(json!({"title": "edited"}).to_string()))
            .unwrap()
    };

    let response = app.clone().oneshot(patch(&other)).await.unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let response = app.clone().oneshot(patch(&author)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let updated = body_json(response).await;
    assert_eq!(updated["title"], json!("edited"));
    assert_eq!(updated["modified"], json!(true));

    let delete = |user: &User| {
        Request::delete(uri.as_str())
            .header("x-user-id", user.id.to_string())
            .body(Body::empty())
            .unwrap()
    };

    let response = app.clone().oneshot(delete(&other)).await.unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let response = app.clone().oneshot(delete(&author)).await.unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = app.oneshot(get(&uri, None)).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn front_page_lists_and_rejects_bad_pages() {
    let (app, ctx) = test_app();
    let author = seed_user(&ctx, "author", false).await;
    seed_thread(&ctx, &author).await;

    let response = app.clone().oneshot(get("/api/v1/threads", None)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let page = body_json(response).await;
    assert_eq!(page["submissions"].as_array().unwrap().len(), 1);
    assert_eq!(page["page"], json!(1));

    // Non-integer page parameter is a 404
    let response = app
        .oneshot(get("/api/v1/threads?page=not_an_integer", None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn health_endpoints_respond() {
    let (app, _ctx) = test_app();

    let response = app.clone().oneshot(get("/health", None)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app.oneshot(get("/health/ready", None)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}
