use thiserror::Error;

use super::post::PostId;

/// Failures of the group and feed containers.
///
/// Every operation that returns one of these leaves its container unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FeedError {
    #[error("group title must not be empty")]
    EmptyGroupTitle,
    #[error("a group titled {0:?} already exists")]
    DuplicateGroupTitle(String),
    #[error("group {0:?} not found")]
    GroupNotFound(String),
    #[error("post {post} not found in group {group:?}")]
    PostNotFound { group: String, post: PostId },
    #[error("new group order must name every current group exactly once")]
    InvalidReorder,
    #[error("post text is empty")]
    EmptyPost,
}

impl FeedError {
    /// Stable code used in structured log records.
    pub fn code(&self) -> &'static str {
        match self {
            Self::EmptyGroupTitle => "FEED_EMPTY_GROUP_TITLE",
            Self::DuplicateGroupTitle(_) => "FEED_DUPLICATE_GROUP_TITLE",
            Self::GroupNotFound(_) => "FEED_GROUP_NOT_FOUND",
            Self::PostNotFound { .. } => "FEED_POST_NOT_FOUND",
            Self::InvalidReorder => "FEED_INVALID_REORDER",
            Self::EmptyPost => "FEED_EMPTY_POST",
        }
    }
}
