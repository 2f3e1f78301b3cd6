use std::collections::HashSet;

use super::post::PostId;

/// Posts waiting for their removal timer. View state only; the ledger
/// never sees these tags.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PendingDeletes {
    tags: HashSet<(String, PostId)>,
}

impl PendingDeletes {
    /// Tags a post. Returns false if it was already pending.
    pub fn mark(&mut self, group: &str, post: PostId) -> bool {
        self.tags.insert((group.to_owned(), post))
    }

    pub fn is_pending(&self, group: &str, post: PostId) -> bool {
        self.tags.contains(&(group.to_owned(), post))
    }

    pub fn clear(&mut self, group: &str, post: PostId) -> bool {
        self.tags.remove(&(group.to_owned(), post))
    }

    pub fn clear_group(&mut self, group: &str) {
        self.tags.retain(|(tagged_group, _)| tagged_group != group);
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}
