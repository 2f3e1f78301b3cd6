//! Domain layer: groups, posts, and the state containers around them.

pub mod error;
pub mod events;
pub mod group;
pub mod group_registry;
pub mod message_ledger;
pub mod pending_deletes;
pub mod post;
pub mod selection;
pub mod shell_state;
pub mod text_input_state;
pub mod workspace;

/// Returns the domain module name for smoke checks.
pub fn module_name() -> &'static str {
    "domain"
}
