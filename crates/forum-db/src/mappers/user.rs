//! User entity <-> model mapper

use forum_core::entities::User;
use forum_core::value_objects::Id;

use crate::models::UserModel;

impl From<UserModel> for User {
    fn from(model: UserModel) -> Self {
        User {
            id: Id::new(model.id),
            username: model.username,
            email: model.email,
            about_text: model.about_text,
            post_karma: model.post_karma,
            comment_karma: model.comment_karma,
            is_staff: model.is_staff,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
