//! Entity -> response DTO conversions

use std::collections::HashMap;

use forum_core::entities::{Comment, Submission, User, DELETED_USER_NAME};
use forum_core::value_objects::Id;

use super::responses::{CommentNode, SubmissionResponse};

impl SubmissionResponse {
    /// Build from a submission and its (possibly deleted) author
    pub fn from_parts(submission: &Submission, author: Option<&User>) -> Self {
        Self {
            id: submission.id.to_string(),
            title: submission.title.clone(),
            content: submission.content.clone(),
            author_name: author
                .map_or_else(|| DELETED_USER_NAME.to_string(), |u| u.username.clone()),
            ups: submission.ups,
            downs: submission.downs,
            score: submission.score,
            comment_count: submission.comment_count,
            created_at: submission.created_at,
            modified: submission.modified,
            updated_at: submission.updated_at,
        }
    }
}

impl CommentNode {
    fn from_comment(comment: &Comment, children: Vec<CommentNode>) -> Self {
        Self {
            id: comment.id.to_string(),
            parent_id: comment.parent_id.map(|id| id.to_string()),
            author_name: comment.author_name.clone(),
            content: comment.content.clone(),
            ups: comment.ups,
            downs: comment.downs,
            score: comment.score,
            created_at: comment.created_at,
            children,
        }
    }
}

/// Nest a flat, already-ordered comment list into a tree.
///
/// The repository returns comments sorted score-descending (ties by age then
/// id); grouping by parent preserves that order within every level, which is
/// exactly the ordering the thread view wants.
pub fn build_comment_tree(comments: &[Comment]) -> Vec<CommentNode> {
    let mut by_parent: HashMap<Option<Id>, Vec<&Comment>> = HashMap::new();
    for comment in comments {
        by_parent.entry(comment.parent_id).or_default().push(comment);
    }
    build_level(None, &by_parent)
}

fn build_level(parent: Option<Id>, by_parent: &HashMap<Option<Id>, Vec<&Comment>>) -> Vec<CommentNode> {
    by_parent.get(&parent).map_or_else(Vec::new, |level| {
        level
            .iter()
            .map(|c| CommentNode::from_comment(c, build_level(Some(c.id), by_parent)))
            .collect()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn comment(id: i64, parent: Option<i64>, score: i32) -> Comment {
        let author = User::new(Id::new(1), "alice".to_string());
        let mut c = Comment::new(Id::new(id), Id::new(10), &author, format!("c{id}"));
        c.parent_id = parent.map(Id::new);
        c.score = score;
        c
    }

    #[test]
    fn test_tree_nests_children_under_parents() {
        // Already in repo order: score desc
        let flat = vec![
            comment(2, None, 5),
            comment(1, None, 3),
            comment(3, Some(1), 2),
            comment(4, Some(3), 0),
        ];

        let tree = build_comment_tree(&flat);
        assert_eq!(tree.len(), 2);
        assert_eq!(tree[0].id, "2");
        assert_eq!(tree[1].id, "1");
        assert_eq!(tree[1].children[0].id, "3");
        assert_eq!(tree[1].children[0].children[0].id, "4");
    }

    #[test]
    fn test_tree_preserves_order_within_a_level() {
        let flat = vec![
            comment(1, None, 0),
            comment(9, Some(1), 7),
            comment(8, Some(1), 4),
            comment(7, Some(1), 1),
        ];

        let tree = build_comment_tree(&flat);
        let child_ids: Vec<&str> = tree[0].children.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(child_ids, vec!["9", "8", "7"]);
    }

    #[test]
    fn test_deleted_author_falls_back_to_sentinel() {
        let submission = Submission::new(
            Id::new(1),
            Id::new(2),
            "t".to_string(),
            "b".to_string(),
        );
        let response = SubmissionResponse::from_parts(&submission, None);
        assert_eq!(response.author_name, DELETED_USER_NAME);
    }
}
