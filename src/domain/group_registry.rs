use std::collections::HashSet;

use super::{
    error::FeedError,
    group::{Group, GroupIcon, NewGroup},
};

/// Ordered groups the user belongs to. Insertion order is display order
/// until an explicit [`GroupRegistry::reorder`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GroupRegistry {
    groups: Vec<Group>,
}

impl GroupRegistry {
    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn get(&self, title: &str) -> Option<&Group> {
        self.groups.iter().find(|group| group.title == title)
    }

    pub fn contains(&self, title: &str) -> bool {
        self.get(title).is_some()
    }

    pub fn position(&self, title: &str) -> Option<usize> {
        self.groups.iter().position(|group| group.title == title)
    }

    /// Appends a group. Titles are trimmed and must be non-empty and unique.
    pub fn add(&mut self, new_group: NewGroup) -> Result<&Group, FeedError> {
        let title = new_group.title.trim();
        if title.is_empty() {
            return Err(FeedError::EmptyGroupTitle);
        }
        if self.contains(title) {
            return Err(FeedError::DuplicateGroupTitle(title.to_owned()));
        }

        let group = Group::from_new(NewGroup::new(title, new_group.icon));
        self.groups.push(group);

        let index = self.groups.len() - 1;
        Ok(&self.groups[index])
    }

    /// Removes every group with this title.
    pub fn delete(&mut self, title: &str) -> Result<(), FeedError> {
        let before = self.groups.len();
        self.groups.retain(|group| group.title != title);

        if self.groups.len() == before {
            return Err(FeedError::GroupNotFound(title.to_owned()));
        }
        Ok(())
    }

    /// Leaves a group. Same registry effect as [`GroupRegistry::delete`];
    /// what happens to the group's posts is decided by the caller.
    pub fn exit(&mut self, title: &str) -> Result<(), FeedError> {
        self.delete(title)
    }

    pub fn update_icon(&mut self, title: &str, icon: GroupIcon) -> Result<(), FeedError> {
        let mut matched = false;
        for group in self.groups.iter_mut().filter(|group| group.title == title) {
            group.icon = icon;
            matched = true;
        }

        if matched {
            Ok(())
        } else {
            Err(FeedError::GroupNotFound(title.to_owned()))
        }
    }

    /// Rearranges groups into `new_order`, which must be a permutation of
    /// the current titles.
    pub fn reorder<S: AsRef<str>>(&mut self, new_order: &[S]) -> Result<(), FeedError> {
        if new_order.len() != self.groups.len() {
            return Err(FeedError::InvalidReorder);
        }

        let mut seen = HashSet::with_capacity(new_order.len());
        let mut indices = Vec::with_capacity(new_order.len());
        for title in new_order {
            let title = title.as_ref();
            if !seen.insert(title) {
                return Err(FeedError::InvalidReorder);
            }
            let index = self.position(title).ok_or(FeedError::InvalidReorder)?;
            indices.push(index);
        }

        let mut slots: Vec<Option<Group>> = self.groups.drain(..).map(Some).collect();
        self.groups = indices
            .into_iter()
            .filter_map(|index| slots[index].take())
            .collect();
        Ok(())
    }
}
