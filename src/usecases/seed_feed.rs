//! Demo content shown on first start when `startup.seed_sample_feed` is on.

use crate::domain::{
    error::FeedError,
    group::{GroupIcon, NewGroup},
    post::{Post, PostAuthor, PostId},
    workspace::FeedWorkspace,
};

struct SamplePost {
    group: &'static str,
    icon: GroupIcon,
    author: &'static str,
    avatar: &'static str,
    user_id: &'static str,
    content: &'static str,
    timestamp: &'static str,
    likes: u32,
}

const SAMPLE_POSTS: [SamplePost; 2] = [
    SamplePost {
        group: "Group 1",
        icon: GroupIcon::Code,
        author: "Sarah Chen",
        avatar: "/avatars/sarah.jpg",
        user_id: "sarah123",
        content: "Just learned about React Server Components today! They're a game-changer \
                  for performance optimization. Key takeaway: they run on the server and \
                  reduce client-side JavaScript.",
        timestamp: "2 hours ago",
        likes: 12,
    },
    SamplePost {
        group: "Group 2",
        icon: GroupIcon::Book,
        author: "Alex Thompson",
        avatar: "/avatars/alex.jpg",
        user_id: "alex456",
        content: "Deep dive into TypeScript generics today. Here's a quick tip: use 'extends' \
                  to constrain generic types. Example: `<T extends object>`. This ensures \
                  better type safety!",
        timestamp: "4 hours ago",
        likes: 8,
    },
];

/// Registers the sample groups (skipping any that already exist) and
/// appends their posts. Returns the number of posts added.
pub fn seed_sample_feed(workspace: &mut FeedWorkspace) -> usize {
    for sample in &SAMPLE_POSTS {
        match workspace.registry.add(NewGroup::new(sample.group, sample.icon)) {
            Ok(_) | Err(FeedError::DuplicateGroupTitle(_)) => {}
            Err(error) => tracing::warn!(
                code = error.code(),
                group = sample.group,
                error = %error,
                "sample group not registered"
            ),
        }

        workspace.ledger.seed(
            sample.group,
            Post {
                id: PostId::generate(),
                user: PostAuthor::new(sample.author, sample.avatar),
                content: sample.content.to_owned(),
                timestamp: sample.timestamp.to_owned(),
                likes: sample.likes,
                user_id: Some(sample.user_id.to_owned()),
            },
        );
    }

    tracing::debug!(posts = SAMPLE_POSTS.len(), "sample feed seeded");
    SAMPLE_POSTS.len()
}
