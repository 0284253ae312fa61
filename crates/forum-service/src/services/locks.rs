//! Per-(user, comment) vote serialization
//!
//! The vote engine's read-modify-write (load vote row, compute transition,
//! apply) is only safe when at most one operation runs per (user, comment)
//! pair at a time. Rather than lean on upstream request serialization, each
//! pair gets its own async mutex here; votes on different pairs never wait
//! on each other.

use std::sync::Arc;

use dashmap::DashMap;
use forum_core::Id;
use tokio::sync::Mutex;

/// Registry of per-(user, comment) async locks
#[derive(Debug, Default)]
pub struct VoteLocks {
    locks: DashMap<(Id, Id), Arc<Mutex<()>>>,
}

impl VoteLocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get (or create) the lock for one (user, comment) pair.
    ///
    /// Entries are a pointer each and reused on every revisit; the registry
    /// grows with the number of distinct pairs seen by this process, which
    /// is not worth an eviction scheme.
    pub fn pair(&self, user_id: Id, comment_id: Id) -> Arc<Mutex<()>> {
        self.locks
            .entry((user_id, comment_id))
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone()
    }
}
