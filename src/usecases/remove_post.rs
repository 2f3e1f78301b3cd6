//! Two-step post removal: the post is tagged as pending right away and only
//! leaves the ledger once the scheduler reports the removal latency elapsed.

use crate::{
    domain::{
        error::FeedError,
        events::RemovalRequest,
        pending_deletes::PendingDeletes,
        post::{Post, PostId},
        workspace::FeedWorkspace,
    },
    usecases::contracts::RemovalScheduler,
};

const POST_REMOVAL_SKIPPED: &str = "POST_REMOVAL_SKIPPED";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemovalOutcome {
    Scheduled,
    /// A removal for this post is already on its way.
    AlreadyPending,
}

/// Tags the post as pending and schedules its removal. There is no way to
/// take the request back once scheduled.
pub fn request_post_removal(
    workspace: &FeedWorkspace,
    pending: &mut PendingDeletes,
    scheduler: &dyn RemovalScheduler,
    group: &str,
    post: PostId,
) -> Result<RemovalOutcome, FeedError> {
    if !workspace.ledger.has_group(group) {
        return Err(FeedError::GroupNotFound(group.to_owned()));
    }
    if workspace.ledger.get(group, post).is_none() {
        return Err(FeedError::PostNotFound {
            group: group.to_owned(),
            post,
        });
    }

    if !pending.mark(group, post) {
        return Ok(RemovalOutcome::AlreadyPending);
    }

    scheduler.schedule(RemovalRequest {
        group: group.to_owned(),
        post,
    });
    tracing::debug!(group = %group, post = %post, "post removal scheduled");
    Ok(RemovalOutcome::Scheduled)
}

/// Applies a removal whose latency has elapsed. The pending tag is dropped
/// whether or not the post is still there.
pub fn complete_post_removal(
    workspace: &mut FeedWorkspace,
    pending: &mut PendingDeletes,
    request: &RemovalRequest,
) -> Result<Post, FeedError> {
    pending.clear(&request.group, request.post);

    match workspace.ledger.delete(&request.group, request.post) {
        Ok(post) => {
            tracing::info!(group = %request.group, post = %request.post, "post removed");
            Ok(post)
        }
        Err(error) => {
            tracing::debug!(
                code = POST_REMOVAL_SKIPPED,
                error = %error,
                "post already gone when removal fired"
            );
            Err(error)
        }
    }
}
