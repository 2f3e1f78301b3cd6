use std::{
    sync::mpsc::{Receiver, TryRecvError},
    time::Duration,
};

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};

use crate::{
    domain::events::{AppEvent, KeyInput, RemovalRequest},
    usecases::contracts::AppEventSource,
};

const EVENT_POLL_TIMEOUT: Duration = Duration::from_millis(100);

#[derive(Default)]
pub struct CrosstermEventSource;

impl AppEventSource for CrosstermEventSource {
    fn next_event(&mut self) -> Result<Option<AppEvent>> {
        if !event::poll(EVENT_POLL_TIMEOUT)? {
            return Ok(Some(AppEvent::Tick));
        }

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                return Ok(None);
            }

            let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
            if ctrl && key.code == KeyCode::Char('c') {
                return Ok(Some(AppEvent::QuitRequested));
            }

            return Ok(key_name(key.code).map(|name| AppEvent::InputKey(KeyInput::new(name, ctrl))));
        }

        Ok(None)
    }
}

fn key_name(code: KeyCode) -> Option<String> {
    let name = match code {
        KeyCode::Char(ch) => return Some(ch.to_string()),
        KeyCode::Enter => "enter",
        KeyCode::Esc => "esc",
        KeyCode::Tab => "tab",
        KeyCode::Backspace => "backspace",
        KeyCode::Left => "left",
        KeyCode::Right => "right",
        KeyCode::Up => "up",
        KeyCode::Down => "down",
        _ => return None,
    };
    Some(name.to_owned())
}

/// Delivers elapsed removals ahead of terminal input so the feed updates
/// as soon as a timer fires.
pub struct ChannelRemovalSource<S> {
    inner: S,
    due_rx: Receiver<RemovalRequest>,
    disconnected: bool,
}

impl<S> ChannelRemovalSource<S> {
    pub fn new(inner: S, due_rx: Receiver<RemovalRequest>) -> Self {
        Self {
            inner,
            due_rx,
            disconnected: false,
        }
    }
}

impl<S: AppEventSource> AppEventSource for ChannelRemovalSource<S> {
    fn next_event(&mut self) -> Result<Option<AppEvent>> {
        if !self.disconnected {
            match self.due_rx.try_recv() {
                Ok(request) => return Ok(Some(AppEvent::RemovalDue(request))),
                Err(TryRecvError::Empty) => {}
                Err(TryRecvError::Disconnected) => {
                    tracing::warn!("removal channel closed; pending deletes will not complete");
                    self.disconnected = true;
                }
            }
        }

        self.inner.next_event()
    }
}

#[cfg(test)]
pub struct MockEventSource {
    queue: std::collections::VecDeque<AppEvent>,
}

#[cfg(test)]
impl MockEventSource {
    pub fn from(events: Vec<AppEvent>) -> Self {
        Self {
            queue: events.into(),
        }
    }
}

#[cfg(test)]
impl AppEventSource for MockEventSource {
    fn next_event(&mut self) -> Result<Option<AppEvent>> {
        Ok(self.queue.pop_front())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::mpsc;

    use super::*;
    use crate::domain::post::PostId;

    #[test]
    fn named_keys_map_to_orchestrator_vocabulary() {
        assert_eq!(key_name(KeyCode::Enter).as_deref(), Some("enter"));
        assert_eq!(key_name(KeyCode::Char('J')).as_deref(), Some("J"));
        assert_eq!(key_name(KeyCode::Down).as_deref(), Some("down"));
        assert_eq!(key_name(KeyCode::F(5)), None);
    }

    #[test]
    fn removals_are_delivered_before_terminal_events() {
        let (tx, rx) = mpsc::channel();
        let request = RemovalRequest {
            group: "Group 1".to_owned(),
            post: PostId::generate(),
        };
        tx.send(request.clone()).expect("send should succeed");
        let mut source =
            ChannelRemovalSource::new(MockEventSource::from(vec![AppEvent::Tick]), rx);

        assert_eq!(
            source.next_event().expect("event"),
            Some(AppEvent::RemovalDue(request))
        );
        assert_eq!(source.next_event().expect("event"), Some(AppEvent::Tick));
        assert_eq!(source.next_event().expect("event"), None);
    }

    #[test]
    fn closed_channel_falls_through_to_inner_source() {
        let (tx, rx) = mpsc::channel::<RemovalRequest>();
        drop(tx);
        let mut source =
            ChannelRemovalSource::new(MockEventSource::from(vec![AppEvent::QuitRequested]), rx);

        assert_eq!(
            source.next_event().expect("event"),
            Some(AppEvent::QuitRequested)
        );
    }
}
