//! Use case layer: application workflows and orchestration.

pub mod bootstrap;
pub mod context;
pub mod contracts;
pub mod like_post;
pub mod manage_groups;
pub mod open_feed;
pub mod post_message;
pub mod remove_post;
pub mod seed_feed;
pub mod shell;

/// Returns the usecases module name for smoke checks.
pub fn module_name() -> &'static str {
    "usecases"
}
