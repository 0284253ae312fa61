//! Comment entity <-> model mapper

use forum_core::entities::Comment;
use forum_core::value_objects::Id;

use crate::models::CommentModel;

impl From<CommentModel> for Comment {
    fn from(model: CommentModel) -> Self {
        Comment {
            id: Id::new(model.id),
            submission_id: Id::new(model.submission_id),
            parent_id: model.parent_id.map(Id::new),
            author_id: model.author_id.map(Id::new),
            author_name: model.author_name,
            content: model.content,
            ups: model.ups,
            downs: model.downs,
            score: model.score,
            created_at: model.created_at,
        }
    }
}
