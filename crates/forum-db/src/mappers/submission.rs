//! Submission entity <-> model mapper

use forum_core::entities::Submission;
use forum_core::value_objects::Id;

use crate::models::SubmissionModel;

impl From<SubmissionModel> for Submission {
    fn from(model: SubmissionModel) -> Self {
        Submission {
            id: Id::new(model.id),
            author_id: model.author_id.map(Id::new),
            title: model.title,
            content: model.content,
            ups: model.ups,
            downs: model.downs,
            score: model.score,
            comment_count: model.comment_count,
            created_at: model.created_at,
            modified: model.modified,
            updated_at: model.updated_at,
        }
    }
}
