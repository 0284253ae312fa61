//! Vote entity and the vote transition table
//!
//! A vote row holds the most recent value a user cast on a comment. Cancelled
//! votes are kept with value 0 (not deleted) so the pair's history can be
//! re-activated later. Every state change goes through
//! [`VoteTransition::compute`], which is the single source of truth for how
//! counters move.

use chrono::{DateTime, Utc};

use crate::error::DomainError;
use crate::value_objects::{Id, VoteDirection};

/// Vote entity - one row per (user, comment) pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vote {
    pub user_id: Id,
    pub comment_id: Id,
    /// Denormalized root submission, for "all my votes in this thread" reads
    pub submission_id: Id,
    /// -1, 0 (cancelled) or 1; anything else is corrupted prior state
    pub value: i32,
    pub created_at: DateTime<Utc>,
}

impl Vote {
    /// Create a new Vote
    pub fn new(user_id: Id, comment_id: Id, submission_id: Id, direction: VoteDirection) -> Self {
        Self {
            user_id,
            comment_id,
            submission_id,
            value: direction.value(),
            created_at: Utc::now(),
        }
    }

    /// Check if this vote is currently cancelled
    #[inline]
    pub fn is_cancelled(&self) -> bool {
        self.value == 0
    }
}

/// The counter side-effects of one vote state change
///
/// | stored | requested | score | ups | downs | karma |
/// |--------|-----------|-------|-----|-------|-------|
/// | -1     | +1        | +2    | +1  | -1    | +2    |
/// | +1     | -1        | -2    | -1  | +1    | -2    |
/// | 0      | +1        | +1    | +1  | 0     | +1    |
/// | 0      | -1        | -1    | 0   | +1    | -1    |
/// | +1     | +1 cancel | -1    | -1  | 0     | -1    |
/// | -1     | -1 cancel | +1    | 0   | -1    | +1    |
///
/// A first-time vote is the `stored = 0` row: a missing row and a cancelled
/// row transition identically.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VoteTransition {
    pub score_delta: i32,
    pub ups_delta: i32,
    pub downs_delta: i32,
    pub karma_delta: i32,
    /// The value the vote row holds after this transition
    pub new_value: i32,
}

impl VoteTransition {
    /// Compute the transition for a stored value and a requested direction.
    ///
    /// Any (stored, requested) pair outside the table is corrupted prior
    /// state, not a user error, and must propagate - applying nothing would
    /// silently desynchronize the stored value from the counters.
    pub fn compute(stored: i32, requested: VoteDirection) -> Result<Self, DomainError> {
        let value = requested.value();

        if stored == value {
            // Cancel: the same value cast twice reverses the original deltas
            return match stored {
                1 => Ok(Self {
                    score_delta: -1,
                    ups_delta: -1,
                    downs_delta: 0,
                    karma_delta: -1,
                    new_value: 0,
                }),
                -1 => Ok(Self {
                    score_delta: 1,
                    ups_delta: 0,
                    downs_delta: -1,
                    karma_delta: 1,
                    new_value: 0,
                }),
                _ => Err(DomainError::VoteStateCorrupt { stored }),
            };
        }

        match (stored, value) {
            (-1, 1) => Ok(Self {
                score_delta: 2,
                ups_delta: 1,
                downs_delta: -1,
                karma_delta: 2,
                new_value: 1,
            }),
            (1, -1) => Ok(Self {
                score_delta: -2,
                ups_delta: -1,
                downs_delta: 1,
                karma_delta: -2,
                new_value: -1,
            }),
            (0, 1) => Ok(Self {
                score_delta: 1,
                ups_delta: 1,
                downs_delta: 0,
                karma_delta: 1,
                new_value: 1,
            }),
            (0, -1) => Ok(Self {
                score_delta: -1,
                ups_delta: 0,
                downs_delta: 1,
                karma_delta: -1,
                new_value: -1,
            }),
            _ => Err(DomainError::VoteStateCorrupt { stored }),
        }
    }

    /// Check if this transition cancels the vote
    #[inline]
    pub fn is_cancel(&self) -> bool {
        self.new_value == 0
    }
}
