use std::fmt;

use uuid::Uuid;

/// Display timestamp given to every freshly appended post.
pub const JUST_POSTED: &str = "Just now";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PostId(Uuid);

impl PostId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Author snapshot taken when a post is written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostAuthor {
    pub name: String,
    pub avatar: String,
}

impl PostAuthor {
    pub fn new(name: impl Into<String>, avatar: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            avatar: avatar.into(),
        }
    }

    /// Single character shown in place of the avatar image.
    pub fn initial(&self) -> char {
        self.name.chars().next().unwrap_or('?')
    }
}

/// What the composer hands to the ledger; the ledger fills in the rest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostDraft {
    pub user: PostAuthor,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    pub id: PostId,
    pub user: PostAuthor,
    pub content: String,
    /// Opaque display string, not a parsed time.
    pub timestamp: String,
    pub likes: u32,
    /// Author id compared against the current profile to allow deletion.
    pub user_id: Option<String>,
}

impl Post {
    pub fn is_authored_by(&self, user_id: &str) -> bool {
        self.user_id.as_deref() == Some(user_id)
    }
}
