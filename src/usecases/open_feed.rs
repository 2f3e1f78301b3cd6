use crate::domain::{error::FeedError, post::Post, workspace::FeedWorkspace};

/// Posts of a registered group, oldest first.
///
/// Unlike `MessageLedger::list`, this tells "no such group" apart from a
/// group that simply has no posts yet.
pub fn open_feed<'a>(workspace: &'a FeedWorkspace, group: &str) -> Result<&'a [Post], FeedError> {
    if !workspace.registry.contains(group) {
        return Err(FeedError::GroupNotFound(group.to_owned()));
    }

    Ok(workspace.ledger.list(group))
}
