//! Votable - the capability shared by everything that can receive votes
//!
//! The tagged variant replaces the dynamic type checks a looser language
//! would scatter through the engine; callers resolve the variant once at the
//! boundary and the engine dispatches on it.

use crate::entities::comment::Comment;
use crate::entities::submission::Submission;
use crate::entities::vote::VoteTransition;
use crate::value_objects::Id;

/// Which kind of votable an entity is; decides which karma counter the
/// author's deltas land on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VotableKind {
    Submission,
    Comment,
}

/// An entity that owns ups/downs/score counters and can be voted on
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Votable {
    Submission(Submission),
    Comment(Comment),
}

impl Votable {
    pub fn kind(&self) -> VotableKind {
        match self {
            Self::Submission(_) => VotableKind::Submission,
            Self::Comment(_) => VotableKind::Comment,
        }
    }

    pub fn id(&self) -> Id {
        match self {
            Self::Submission(s) => s.id,
            Self::Comment(c) => c.id,
        }
    }

    /// The author receiving karma for votes on this item, if still around
    pub fn author_id(&self) -> Option<Id> {
        match self {
            Self::Submission(s) => s.author_id,
            Self::Comment(c) => c.author_id,
        }
    }

    pub fn score(&self) -> i32 {
        match self {
            Self::Submission(s) => s.score,
            Self::Comment(c) => c.score,
        }
    }

    /// Apply the counter deltas of one vote transition
    pub fn apply_vote(&mut self, transition: &VoteTransition) {
        match self {
            Self::Submission(s) => s.apply_vote(transition),
            Self::Comment(c) => c.apply_vote(transition),
        }
    }
}

impl From<Submission> for Votable {
    fn from(submission: Submission) -> Self {
        Self::Submission(submission)
    }
}

impl From<Comment> for Votable {
    fn from(comment: Comment) -> Self {
        Self::Comment(comment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::user::User;
    use crate::value_objects::VoteDirection;

    fn comment_votable() -> Votable {
        let author = User::new(Id::new(100), "alice".to_string());
        Comment::new(Id::new(1), Id::new(10), &author, "hi".to_string()).into()
    }

    fn submission_votable() -> Votable {
        Submission::new(Id::new(1), Id::new(100), "t".to_string(), "b".to_string()).into()
    }

    #[test]
    fn test_kind_dispatch() {
        assert_eq!(comment_votable().kind(), VotableKind::Comment);
        assert_eq!(submission_votable().kind(), VotableKind::Submission);
    }

    #[test]
    fn test_apply_vote_moves_counters_on_both_variants() {
        let up = VoteTransition::compute(0, VoteDirection::Up).unwrap();

        for mut votable in [comment_votable(), submission_votable()] {
            votable.apply_vote(&up);
            assert_eq!(votable.score(), 1);
        }
    }

    #[test]
    fn test_karma_routing_follows_kind() {
        let mut author = User::new(Id::new(100), "alice".to_string());
        let up = VoteTransition::compute(0, VoteDirection::Up).unwrap();

        author.apply_karma(comment_votable().kind(), up.karma_delta);
        author.apply_karma(submission_votable().kind(), up.karma_delta);

        assert_eq!(author.comment_karma, 1);
        assert_eq!(author.post_karma, 1);
    }
}
