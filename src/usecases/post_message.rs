//! Publishing a post from the composer.

use crate::domain::{
    error::FeedError,
    post::{PostAuthor, PostDraft, PostId},
    workspace::FeedWorkspace,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostMessageCommand {
    pub group: String,
    pub author: PostAuthor,
    pub text: String,
}

/// Appends the trimmed text to a registered group.
///
/// # Errors
/// `EmptyPost` for blank text, `GroupNotFound` when the group is not in the
/// registry. Nothing is appended in either case.
pub fn post_message(
    workspace: &mut FeedWorkspace,
    command: PostMessageCommand,
) -> Result<PostId, FeedError> {
    let text = command.text.trim();
    if text.is_empty() {
        return Err(FeedError::EmptyPost);
    }
    if !workspace.registry.contains(&command.group) {
        return Err(FeedError::GroupNotFound(command.group));
    }

    let id = workspace.ledger.append(
        &command.group,
        PostDraft {
            user: command.author,
            content: text.to_owned(),
        },
    );

    tracing::info!(group = %command.group, post = %id, "post published");
    Ok(id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        group::{GroupIcon, NewGroup},
        message_ledger::DEFAULT_CURRENT_USER_ID,
        post::JUST_POSTED,
    };

    fn workspace() -> FeedWorkspace {
        let mut workspace = FeedWorkspace::default();
        workspace
            .registry
            .add(NewGroup::new("Group 1", GroupIcon::Plus))
            .expect("group should be added");
        workspace
    }

    fn command(group: &str, text: &str) -> PostMessageCommand {
        PostMessageCommand {
            group: group.to_owned(),
            author: PostAuthor::new("Dana", "/a.png"),
            text: text.to_owned(),
        }
    }

    #[test]
    fn publishes_post_with_sentinels() {
        let mut workspace = workspace();

        let id = post_message(&mut workspace, command("Group 1", "hi")).expect("post should succeed");

        let posts = workspace.ledger.list("Group 1");
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].id, id);
        assert_eq!(posts[0].user, PostAuthor::new("Dana", "/a.png"));
        assert_eq!(posts[0].timestamp, JUST_POSTED);
        assert_eq!(posts[0].likes, 0);
        assert_eq!(posts[0].user_id.as_deref(), Some(DEFAULT_CURRENT_USER_ID));
    }

    #[test]
    fn trims_text_before_publishing() {
        let mut workspace = workspace();

        post_message(&mut workspace, command("Group 1", "  hello world \n"))
            .expect("post should succeed");

        assert_eq!(workspace.ledger.list("Group 1")[0].content, "hello world");
    }

    #[test]
    fn rejects_whitespace_only_text() {
        let mut workspace = workspace();
        let before = workspace.clone();

        let result = post_message(&mut workspace, command("Group 1", " \t "));

        assert_eq!(result, Err(FeedError::EmptyPost));
        assert_eq!(workspace, before);
    }

    #[test]
    fn rejects_unregistered_group() {
        let mut workspace = workspace();
        let before = workspace.clone();

        let result = post_message(&mut workspace, command("Group 9", "hi"));

        assert_eq!(result, Err(FeedError::GroupNotFound("Group 9".to_owned())));
        assert_eq!(workspace, before);
    }
}
