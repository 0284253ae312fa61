//! Vote entity <-> model mapper

use forum_core::entities::Vote;
use forum_core::value_objects::Id;

use crate::models::VoteModel;

impl From<VoteModel> for Vote {
    fn from(model: VoteModel) -> Self {
        Vote {
            user_id: Id::new(model.user_id),
            comment_id: Id::new(model.comment_id),
            submission_id: Id::new(model.submission_id),
            value: model.value,
            created_at: model.created_at,
        }
    }
}
