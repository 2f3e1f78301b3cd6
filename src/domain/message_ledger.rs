use std::collections::HashMap;

use super::{
    error::FeedError,
    post::{Post, PostDraft, PostId, JUST_POSTED},
};

/// Author id stamped on posts when no profile overrides it.
pub const DEFAULT_CURRENT_USER_ID: &str = "current-user";

/// Per-group post sequences, oldest first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageLedger {
    current_user_id: String,
    messages: HashMap<String, Vec<Post>>,
}

impl Default for MessageLedger {
    fn default() -> Self {
        Self::new(DEFAULT_CURRENT_USER_ID)
    }
}

impl MessageLedger {
    pub fn new(current_user_id: impl Into<String>) -> Self {
        Self {
            current_user_id: current_user_id.into(),
            messages: HashMap::new(),
        }
    }

    pub fn current_user_id(&self) -> &str {
        &self.current_user_id
    }

    /// Posts of a group in display order. Unknown groups read as empty.
    pub fn list(&self, group: &str) -> &[Post] {
        self.messages.get(group).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn get(&self, group: &str, post: PostId) -> Option<&Post> {
        self.list(group).iter().find(|entry| entry.id == post)
    }

    pub fn has_group(&self, group: &str) -> bool {
        self.messages.contains_key(group)
    }

    /// Appends a new post authored by the current user and returns its id.
    pub fn append(&mut self, group: &str, draft: PostDraft) -> PostId {
        let post = Post {
            id: PostId::generate(),
            user: draft.user,
            content: draft.content,
            timestamp: JUST_POSTED.to_owned(),
            likes: 0,
            user_id: Some(self.current_user_id.clone()),
        };
        let id = post.id;

        self.messages.entry(group.to_owned()).or_default().push(post);
        id
    }

    /// Inserts an already-formed post at the end of a group.
    pub fn seed(&mut self, group: &str, post: Post) {
        self.messages.entry(group.to_owned()).or_default().push(post);
    }

    /// Adds exactly one like. Repeated calls keep counting.
    pub fn like(&mut self, group: &str, post: PostId) -> Result<u32, FeedError> {
        let entry = self.find_mut(group, post)?;
        entry.likes = entry.likes.saturating_add(1);
        Ok(entry.likes)
    }

    /// Removes a post, keeping the remaining order.
    pub fn delete(&mut self, group: &str, post: PostId) -> Result<Post, FeedError> {
        let posts = self
            .messages
            .get_mut(group)
            .ok_or_else(|| FeedError::GroupNotFound(group.to_owned()))?;
        let index = posts
            .iter()
            .position(|entry| entry.id == post)
            .ok_or_else(|| FeedError::PostNotFound {
                group: group.to_owned(),
                post,
            })?;

        Ok(posts.remove(index))
    }

    /// Drops a group's whole sequence, returning how many posts it held.
    pub fn purge_group(&mut self, group: &str) -> usize {
        self.messages
            .remove(group)
            .map(|posts| posts.len())
            .unwrap_or(0)
    }

    fn find_mut(&mut self, group: &str, post: PostId) -> Result<&mut Post, FeedError> {
        self.messages
            .get_mut(group)
            .ok_or_else(|| FeedError::GroupNotFound(group.to_owned()))?
            .iter_mut()
            .find(|entry| entry.id == post)
            .ok_or_else(|| FeedError::PostNotFound {
                group: group.to_owned(),
                post,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::post::PostAuthor;

    fn draft(content: &str) -> PostDraft {
        PostDraft {
            user: PostAuthor::new("Dana", "/a.png"),
            content: content.to_owned(),
        }
    }

    fn contents(ledger: &MessageLedger, group: &str) -> Vec<String> {
        ledger
            .list(group)
            .iter()
            .map(|post| post.content.clone())
            .collect()
    }

    #[test]
    fn list_of_group_without_posts_is_empty() {
        let ledger = MessageLedger::default();

        assert!(ledger.list("Group 1").is_empty());
        assert!(!ledger.has_group("Group 1"));
    }

    #[test]
    fn append_synthesizes_fresh_post_at_the_end() {
        let mut ledger = MessageLedger::default();
        ledger.append("Group 1", draft("first"));

        let id = ledger.append("Group 1", draft("hi"));

        let posts = ledger.list("Group 1");
        assert_eq!(posts.len(), 2);
        let last = posts.last().expect("appended post should be last");
        assert_eq!(last.id, id);
        assert_eq!(last.content, "hi");
        assert_eq!(last.user, PostAuthor::new("Dana", "/a.png"));
        assert_eq!(last.timestamp, JUST_POSTED);
        assert_eq!(last.likes, 0);
        assert_eq!(last.user_id.as_deref(), Some(DEFAULT_CURRENT_USER_ID));
    }

    #[test]
    fn append_assigns_unique_ids() {
        let mut ledger = MessageLedger::default();

        let first = ledger.append("Group 1", draft("a"));
        let second = ledger.append("Group 1", draft("a"));
        let other = ledger.append("Group 2", draft("a"));

        assert_ne!(first, second);
        assert_ne!(first, other);
        assert_ne!(second, other);
    }

    #[test]
    fn append_uses_configured_current_user() {
        let mut ledger = MessageLedger::new("dana42");

        let id = ledger.append("Group 1", draft("hi"));

        let post = ledger.get("Group 1", id).expect("post should exist");
        assert!(post.is_authored_by("dana42"));
    }

    #[test]
    fn list_does_not_create_sequences() {
        let ledger = MessageLedger::default();
        let before = ledger.clone();

        let _ = ledger.list("Group 9");

        assert_eq!(ledger, before);
    }

    #[test]
    fn like_increments_once_per_call() {
        let mut ledger = MessageLedger::default();
        let id = ledger.append("Group 1", draft("hi"));

        for _ in 0..3 {
            ledger.like("Group 1", id).expect("like should succeed");
        }

        assert_eq!(ledger.get("Group 1", id).map(|post| post.likes), Some(3));
    }

    #[test]
    fn like_on_missing_group_or_post_leaves_ledger_unchanged() {
        let mut ledger = MessageLedger::default();
        ledger.append("Group 1", draft("hi"));
        let before = ledger.clone();
        let stray = PostId::generate();

        assert_eq!(
            ledger.like("Nope", stray),
            Err(FeedError::GroupNotFound("Nope".to_owned()))
        );
        assert_eq!(
            ledger.like("Group 1", stray),
            Err(FeedError::PostNotFound {
                group: "Group 1".to_owned(),
                post: stray,
            })
        );
        assert_eq!(ledger, before);
    }

    #[test]
    fn delete_removes_post_and_preserves_order_of_the_rest() {
        let mut ledger = MessageLedger::default();
        ledger.append("Group 1", draft("a"));
        let doomed = ledger.append("Group 1", draft("b"));
        ledger.append("Group 1", draft("c"));

        let removed = ledger.delete("Group 1", doomed).expect("delete should succeed");

        assert_eq!(removed.content, "b");
        assert_eq!(contents(&ledger, "Group 1"), ["a", "c"]);
    }

    #[test]
    fn delete_twice_reports_missing_post_the_second_time() {
        let mut ledger = MessageLedger::default();
        let id = ledger.append("Group 1", draft("a"));

        ledger.delete("Group 1", id).expect("first delete should succeed");
        let before = ledger.clone();

        assert!(matches!(
            ledger.delete("Group 1", id),
            Err(FeedError::PostNotFound { .. })
        ));
        assert_eq!(ledger, before);
    }

    #[test]
    fn delete_on_missing_group_leaves_ledger_unchanged() {
        let mut ledger = MessageLedger::default();
        ledger.append("Group 1", draft("a"));
        let before = ledger.clone();

        assert!(ledger.delete("Group 2", PostId::generate()).is_err());
        assert_eq!(ledger, before);
    }

    #[test]
    fn purge_group_drops_only_that_group() {
        let mut ledger = MessageLedger::default();
        ledger.append("Group 1", draft("a"));
        ledger.append("Group 1", draft("b"));
        ledger.append("Group 2", draft("c"));

        assert_eq!(ledger.purge_group("Group 1"), 2);
        assert!(ledger.list("Group 1").is_empty());
        assert_eq!(contents(&ledger, "Group 2"), ["c"]);
        assert_eq!(ledger.purge_group("Group 1"), 0);
    }
}
