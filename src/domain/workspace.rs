use super::{
    group_registry::GroupRegistry, message_ledger::MessageLedger, selection::SelectionState,
};

/// The three containers a session works with, owned together.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FeedWorkspace {
    pub registry: GroupRegistry,
    pub ledger: MessageLedger,
    pub selection: SelectionState,
}

impl FeedWorkspace {
    pub fn new(current_user_id: impl Into<String>) -> Self {
        Self {
            registry: GroupRegistry::default(),
            ledger: MessageLedger::new(current_user_id),
            selection: SelectionState::default(),
        }
    }

    /// Selected group, only if the registry still has it.
    pub fn selected_group(&self) -> Option<&str> {
        self.selection
            .get()
            .filter(|title| self.registry.contains(title))
    }
}
