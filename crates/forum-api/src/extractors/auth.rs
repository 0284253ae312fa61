//! Identity extractor
//!
//! The upstream gateway authenticates requests and forwards the user id in
//! the `X-User-Id` header; this service trusts it. No header means an
//! anonymous caller.

use axum::{async_trait, extract::FromRequestParts, http::request::Parts};
use forum_core::Id;

use crate::response::ApiError;

/// Header carrying the authenticated user id
pub const USER_ID_HEADER: &str = "x-user-id";

/// Authenticated user forwarded by the gateway
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user_id: Id,
}

impl AuthUser {
    /// Create a new AuthUser
    pub fn new(user_id: Id) -> Self {
        Self { user_id }
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let raw = parts
            .headers
            .get(USER_ID_HEADER)
            .ok_or(ApiError::MissingAuth)?;

        let user_id = raw
            .to_str()
            .ok()
            .and_then(|s| s.parse::<Id>().ok())
            .ok_or_else(|| {
                tracing::warn!("Malformed {USER_ID_HEADER} header");
                ApiError::InvalidAuthFormat
            })?;

        Ok(AuthUser::new(user_id))
    }
}

/// Optional authenticated user
///
/// Returns None if the identity header is absent, or an error if it is
/// present but malformed.
#[derive(Debug, Clone)]
pub struct OptionalAuthUser(pub Option<AuthUser>);

#[async_trait]
impl<S> FromRequestParts<S> for OptionalAuthUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        if parts.headers.get(USER_ID_HEADER).is_none() {
            return Ok(Self(None));
        }
        AuthUser::from_request_parts(parts, state)
            .await
            .map(|user| Self(Some(user)))
    }
}
