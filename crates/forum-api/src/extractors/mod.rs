//! Request extractors

mod auth;

pub use auth::{AuthUser, OptionalAuthUser, USER_ID_HEADER};
