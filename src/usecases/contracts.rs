use anyhow::Result;

use crate::domain::{
    events::{AppEvent, RemovalRequest},
    shell_state::ShellState,
};

pub trait AppEventSource {
    fn next_event(&mut self) -> Result<Option<AppEvent>>;
}

pub trait ShellOrchestrator {
    fn state(&self) -> &ShellState;
    fn handle_event(&mut self, event: AppEvent) -> Result<()>;
}

/// Defers a post removal. Implementations report the request back as an
/// `AppEvent::RemovalDue` once the removal latency has passed.
pub trait RemovalScheduler {
    fn schedule(&self, request: RemovalRequest);
}

impl<T: RemovalScheduler + ?Sized> RemovalScheduler for &T {
    fn schedule(&self, request: RemovalRequest) {
        (*self).schedule(request)
    }
}
