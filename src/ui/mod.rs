//! UI layer: terminal rendering and input.

mod event_source;
mod post_rendering;
pub mod shell;
mod styles;
mod terminal;
mod text_input;
mod view;

pub(crate) use event_source::{ChannelRemovalSource, CrosstermEventSource};

/// Returns the UI module name for smoke checks.
pub fn module_name() -> &'static str {
    "ui"
}
