//! Sidebar actions on the group registry.
//!
//! Keeping the selection consistent with the registry is done here rather
//! than in `SelectionState`, which accepts any title.

use crate::domain::{
    error::FeedError,
    group::{GroupIcon, NewGroup},
    workspace::FeedWorkspace,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveDirection {
    Up,
    Down,
}

pub fn create_group(workspace: &mut FeedWorkspace, new_group: NewGroup) -> Result<String, FeedError> {
    let title = workspace.registry.add(new_group)?.title.clone();
    tracing::info!(group = %title, "group created");
    Ok(title)
}

/// Removes a group and everything posted in it.
pub fn delete_group(workspace: &mut FeedWorkspace, title: &str) -> Result<usize, FeedError> {
    workspace.registry.delete(title)?;
    let purged = workspace.ledger.purge_group(title);
    clear_selection_if(workspace, title);

    tracing::info!(group = %title, purged_posts = purged, "group deleted");
    Ok(purged)
}

/// Leaves a group. Its posts stay in the ledger, so re-joining under the
/// same title shows the old history again.
///
/// Retained sequences are never reclaimed; only `delete_group` frees them.
pub fn exit_group(workspace: &mut FeedWorkspace, title: &str) -> Result<(), FeedError> {
    workspace.registry.exit(title)?;
    clear_selection_if(workspace, title);

    tracing::info!(group = %title, "left group");
    Ok(())
}

pub fn select_group(workspace: &mut FeedWorkspace, title: &str) -> Result<(), FeedError> {
    if !workspace.registry.contains(title) {
        return Err(FeedError::GroupNotFound(title.to_owned()));
    }

    workspace.selection.set(title);
    tracing::debug!(group = %title, "group selected");
    Ok(())
}

pub fn cycle_group_icon(workspace: &mut FeedWorkspace, title: &str) -> Result<GroupIcon, FeedError> {
    let icon = workspace
        .registry
        .get(title)
        .map(|group| group.icon.next())
        .ok_or_else(|| FeedError::GroupNotFound(title.to_owned()))?;

    workspace.registry.update_icon(title, icon)?;
    Ok(icon)
}

/// Swaps a group with its neighbour. Moving past either end is a no-op.
/// Returns the group's new index.
pub fn move_group(
    workspace: &mut FeedWorkspace,
    title: &str,
    direction: MoveDirection,
) -> Result<usize, FeedError> {
    let index = workspace
        .registry
        .position(title)
        .ok_or_else(|| FeedError::GroupNotFound(title.to_owned()))?;

    let target = match direction {
        MoveDirection::Up => index.checked_sub(1),
        MoveDirection::Down => Some(index + 1).filter(|next| *next < workspace.registry.len()),
    };
    let Some(target) = target else {
        return Ok(index);
    };

    let mut order: Vec<String> = workspace
        .registry
        .groups()
        .iter()
        .map(|group| group.title.clone())
        .collect();
    order.swap(index, target);
    workspace.registry.reorder(&order)?;

    Ok(target)
}

fn clear_selection_if(workspace: &mut FeedWorkspace, title: &str) {
    if workspace.selection.is_selected(title) {
        workspace.selection.clear();
    }
}
