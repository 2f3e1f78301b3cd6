use crate::domain::{error::FeedError, post::PostId, workspace::FeedWorkspace};

/// Adds one like and returns the new count.
pub fn like_post(workspace: &mut FeedWorkspace, group: &str, post: PostId) -> Result<u32, FeedError> {
    let likes = workspace.ledger.like(group, post)?;
    tracing::debug!(group = %group, post = %post, likes, "post liked");
    Ok(likes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::post::{PostAuthor, PostDraft};

    #[test]
    fn each_like_adds_exactly_one() {
        let mut workspace = FeedWorkspace::default();
        let id = workspace.ledger.append(
            "Group 1",
            PostDraft {
                user: PostAuthor::new("Dana", ""),
                content: "hi".to_owned(),
            },
        );

        assert_eq!(like_post(&mut workspace, "Group 1", id), Ok(1));
        assert_eq!(like_post(&mut workspace, "Group 1", id), Ok(2));
        assert_eq!(like_post(&mut workspace, "Group 1", id), Ok(3));
    }

    #[test]
    fn liking_missing_post_changes_nothing() {
        let mut workspace = FeedWorkspace::default();
        let before = workspace.clone();

        assert!(like_post(&mut workspace, "Group 1", PostId::generate()).is_err());
        assert_eq!(workspace, before);
    }
}
