use anyhow::Result;

use crate::domain::{
    error::FeedError,
    events::{AppEvent, KeyInput, RemovalRequest},
    group::{GroupIcon, NewGroup},
    post::PostId,
    shell_state::{ActivePane, ShellState},
    text_input_state::TextInputState,
};

use super::{
    contracts::{RemovalScheduler, ShellOrchestrator},
    like_post::like_post,
    manage_groups::{self, MoveDirection},
    open_feed::open_feed,
    post_message::{post_message, PostMessageCommand},
    remove_post::{complete_post_removal, request_post_removal, RemovalOutcome},
};

pub struct DefaultShellOrchestrator<R>
where
    R: RemovalScheduler,
{
    state: ShellState,
    scheduler: R,
}

impl<R> DefaultShellOrchestrator<R>
where
    R: RemovalScheduler,
{
    pub fn new(state: ShellState, scheduler: R) -> Self {
        Self { state, scheduler }
    }

    fn handle_key(&mut self, key: KeyInput) {
        match self.state.active_pane() {
            pane if pane.accepts_text() => self.handle_text_key(&key),
            ActivePane::Sidebar => self.handle_sidebar_key(&key),
            _ => self.handle_feed_key(&key),
        }
        self.state.clamp_cursors();
    }

    fn handle_navigation_key(&mut self, key: &KeyInput) -> bool {
        match key.key.as_str() {
            "tab" => {
                let next = self.state.active_pane().cycled();
                self.state.set_active_pane(next);
            }
            "q" => self.state.stop(),
            _ => return false,
        }
        true
    }

    fn handle_sidebar_key(&mut self, key: &KeyInput) {
        if self.handle_navigation_key(key) {
            return;
        }

        match key.key.as_str() {
            "j" | "down" => self.state.move_sidebar_cursor(1),
            "k" | "up" => self.state.move_sidebar_cursor(-1),
            "n" => {
                self.state.group_prompt_mut().clear();
                self.state.set_active_pane(ActivePane::GroupPrompt);
            }
            "enter" => self.with_highlighted_group(|shell, title| {
                manage_groups::select_group(shell.state.workspace_mut(), &title)?;
                let posts = open_feed(shell.state.workspace(), &title)?.len();
                shell.state.focus_latest_post();
                shell.state.set_active_pane(ActivePane::Feed);
                if posts == 0 {
                    shell.state.set_info(format!("{title} has no posts yet"));
                }
                Ok(())
            }),
            "d" => self.with_highlighted_group(|shell, title| {
                let purged = manage_groups::delete_group(shell.state.workspace_mut(), &title)?;
                shell.state.pending_mut().clear_group(&title);
                shell
                    .state
                    .set_info(format!("Deleted group {title} ({purged} posts removed)"));
                Ok(())
            }),
            "x" => self.with_highlighted_group(|shell, title| {
                manage_groups::exit_group(shell.state.workspace_mut(), &title)?;
                shell.state.set_info(format!("Left group {title}"));
                Ok(())
            }),
            "i" => self.with_highlighted_group(|shell, title| {
                manage_groups::cycle_group_icon(shell.state.workspace_mut(), &title)?;
                Ok(())
            }),
            "J" => self.move_highlighted_group(MoveDirection::Down),
            "K" => self.move_highlighted_group(MoveDirection::Up),
            _ => {}
        }
    }

    fn handle_feed_key(&mut self, key: &KeyInput) {
        if self.handle_navigation_key(key) {
            return;
        }

        match key.key.as_str() {
            "j" | "down" => self.state.move_feed_cursor(1),
            "k" | "up" => self.state.move_feed_cursor(-1),
            "i" => {
                if self.state.workspace().selected_group().is_some() {
                    self.state.set_active_pane(ActivePane::Composer);
                } else {
                    self.state.set_error("Select a group before posting");
                }
            }
            "l" => self.like_highlighted_post(),
            "d" => self.delete_highlighted_post(),
            _ => {}
        }
    }

    fn handle_text_key(&mut self, key: &KeyInput) {
        let pane = self.state.active_pane();
        match key.key.as_str() {
            "enter" => {
                if pane == ActivePane::GroupPrompt {
                    self.submit_group_prompt();
                } else {
                    self.submit_composer();
                }
            }
            "esc" => {
                let back = if pane == ActivePane::GroupPrompt {
                    self.state.group_prompt_mut().clear();
                    ActivePane::Sidebar
                } else {
                    ActivePane::Feed
                };
                self.state.set_active_pane(back);
            }
            "tab" => {
                let next = pane.cycled();
                self.state.set_active_pane(next);
            }
            "backspace" => self.text_input_mut().backspace(),
            "left" => self.text_input_mut().move_left(),
            "right" => self.text_input_mut().move_right(),
            _ => {
                if let Some(ch) = key.as_char() {
                    if !self.text_input_mut().insert_char(ch) {
                        self.state.set_error("Input is full");
                    }
                }
            }
        }
    }

    fn text_input_mut(&mut self) -> &mut TextInputState {
        if self.state.active_pane() == ActivePane::GroupPrompt {
            self.state.group_prompt_mut()
        } else {
            self.state.composer_mut()
        }
    }

    fn submit_group_prompt(&mut self) {
        let title = self.state.group_prompt().text().to_owned();
        match manage_groups::create_group(
            self.state.workspace_mut(),
            NewGroup::new(title, GroupIcon::default()),
        ) {
            Ok(title) => {
                self.state.group_prompt_mut().clear();
                self.state.set_active_pane(ActivePane::Sidebar);
                self.state.focus_group(&title);
                self.state.set_info(format!("Created group {title}"));
            }
            Err(error) => self.report(error),
        }
    }

    fn submit_composer(&mut self) {
        let Some(group) = self.state.workspace().selected_group().map(str::to_owned) else {
            self.state.set_error("Select a group before posting");
            return;
        };

        let command = PostMessageCommand {
            group,
            author: self.state.profile().clone(),
            text: self.state.composer().text().to_owned(),
        };
        match post_message(self.state.workspace_mut(), command) {
            Ok(_) => {
                self.state.composer_mut().clear();
                self.state.focus_latest_post();
                self.state.set_info("Posted");
            }
            Err(error) => self.report(error),
        }
    }

    fn like_highlighted_post(&mut self) {
        let Some((group, post)) = self.highlighted_post_key() else {
            return;
        };
        if let Err(error) = like_post(self.state.workspace_mut(), &group, post) {
            self.report(error);
        }
    }

    fn delete_highlighted_post(&mut self) {
        let Some((group, post)) = self.highlighted_post_key() else {
            return;
        };

        let current_user = self.state.workspace().ledger.current_user_id().to_owned();
        let is_own = self
            .state
            .highlighted_post()
            .is_some_and(|entry| entry.is_authored_by(&current_user));
        if !is_own {
            self.state.set_error("Only your own posts can be deleted");
            return;
        }

        let (workspace, pending) = self.state.workspace_and_pending_mut();
        match request_post_removal(workspace, pending, &self.scheduler, &group, post) {
            Ok(RemovalOutcome::Scheduled) => self.state.set_info("Deleting post..."),
            Ok(RemovalOutcome::AlreadyPending) => {}
            Err(error) => self.report(error),
        }
    }

    fn complete_removal(&mut self, request: RemovalRequest) {
        let (workspace, pending) = self.state.workspace_and_pending_mut();
        if complete_post_removal(workspace, pending, &request).is_ok() {
            self.state.set_info("Post deleted");
        }
        self.state.clamp_cursors();
    }

    fn highlighted_post_key(&self) -> Option<(String, PostId)> {
        let group = self.state.workspace().selected_group()?.to_owned();
        let post = self.state.highlighted_post()?.id;
        Some((group, post))
    }

    fn with_highlighted_group<F>(&mut self, action: F)
    where
        F: FnOnce(&mut Self, String) -> Result<(), FeedError>,
    {
        let Some(title) = self.state.highlighted_group().map(str::to_owned) else {
            return;
        };
        if let Err(error) = action(self, title) {
            self.report(error);
        }
    }

    fn move_highlighted_group(&mut self, direction: MoveDirection) {
        self.with_highlighted_group(|shell, title| {
            manage_groups::move_group(shell.state.workspace_mut(), &title, direction)?;
            shell.state.focus_group(&title);
            Ok(())
        });
    }

    /// Drops a selection whose group is no longer registered.
    fn check_selected_feed(&mut self) {
        let Some(group) = self.state.workspace().selection.get().map(str::to_owned) else {
            return;
        };
        if let Err(error) = open_feed(self.state.workspace(), &group) {
            self.state.workspace_mut().selection.clear();
            self.state.clamp_cursors();
            self.report(error);
        }
    }

    fn report(&mut self, error: FeedError) {
        tracing::warn!(code = error.code(), error = %error, "shell action rejected");
        self.state.set_error(error.to_string());
    }
}

impl<R> ShellOrchestrator for DefaultShellOrchestrator<R>
where
    R: RemovalScheduler,
{
    fn state(&self) -> &ShellState {
        &self.state
    }

    fn handle_event(&mut self, event: AppEvent) -> Result<()> {
        match event {
            AppEvent::Tick => {}
            AppEvent::QuitRequested => self.state.stop(),
            AppEvent::InputKey(key) => self.handle_key(key),
            AppEvent::RemovalDue(request) => self.complete_removal(request),
        }
        self.check_selected_feed();

        Ok(())
    }
}

impl<R: RemovalScheduler> std::fmt::Debug for DefaultShellOrchestrator<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DefaultShellOrchestrator")
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::domain::{
        post::{Post, PostAuthor},
        shell_state::StatusKind,
        workspace::FeedWorkspace,
    };

    #[derive(Default)]
    struct RecordingScheduler {
        scheduled: RefCell<Vec<RemovalRequest>>,
    }

    impl RemovalScheduler for RecordingScheduler {
        fn schedule(&self, request: RemovalRequest) {
            self.scheduled.borrow_mut().push(request);
        }
    }

    fn orchestrator(groups: &[&str]) -> DefaultShellOrchestrator<RecordingScheduler> {
        let mut workspace = FeedWorkspace::default();
        for title in groups {
            workspace
                .registry
                .add(NewGroup::new(*title, GroupIcon::Plus))
                .expect("fixture group should be added");
        }
        let state = ShellState::new(workspace, PostAuthor::new("Dana", "/a.png"));
        DefaultShellOrchestrator::new(state, RecordingScheduler::default())
    }

    fn press(orchestrator: &mut DefaultShellOrchestrator<RecordingScheduler>, keys: &[&str]) {
        for key in keys {
            orchestrator
                .handle_event(AppEvent::InputKey(KeyInput::new(*key, false)))
                .expect("key must be handled");
        }
    }

    fn type_text(orchestrator: &mut DefaultShellOrchestrator<RecordingScheduler>, text: &str) {
        for ch in text.chars() {
            let key = ch.to_string();
            press(orchestrator, &[key.as_str()]);
        }
    }

    fn group_titles(orchestrator: &DefaultShellOrchestrator<RecordingScheduler>) -> Vec<String> {
        orchestrator
            .state()
            .workspace()
            .registry
            .groups()
            .iter()
            .map(|group| group.title.clone())
            .collect()
    }

    #[test]
    fn stops_on_quit_event() {
        let mut orchestrator = orchestrator(&[]);

        orchestrator
            .handle_event(AppEvent::QuitRequested)
            .expect("event must be handled");

        assert!(!orchestrator.state().is_running());
    }

    #[test]
    fn q_quits_from_sidebar_but_is_typed_in_composer() {
        let mut orchestrator = orchestrator(&["Group 1"]);
        press(&mut orchestrator, &["enter", "i", "q"]);

        assert!(orchestrator.state().is_running());
        assert_eq!(orchestrator.state().composer().text(), "q");

        press(&mut orchestrator, &["esc", "q"]);
        assert!(!orchestrator.state().is_running());
    }

    #[test]
    fn creates_group_from_prompt() {
        let mut orchestrator = orchestrator(&[]);

        press(&mut orchestrator, &["n"]);
        type_text(&mut orchestrator, "Book Club");
        press(&mut orchestrator, &["enter"]);

        let group = orchestrator
            .state()
            .workspace()
            .registry
            .get("Book Club")
            .cloned()
            .expect("group should exist");
        assert_eq!(group.url, "/book-club");
        assert_eq!(group.icon, GroupIcon::Plus);
        assert!(!group.is_active);
        assert_eq!(orchestrator.state().active_pane(), ActivePane::Sidebar);
        assert_eq!(orchestrator.state().highlighted_group(), Some("Book Club"));
    }

    #[test]
    fn duplicate_group_keeps_prompt_open_with_error() {
        let mut orchestrator = orchestrator(&["A"]);

        press(&mut orchestrator, &["n", "A", "enter"]);

        assert_eq!(group_titles(&orchestrator), ["A"]);
        assert_eq!(orchestrator.state().active_pane(), ActivePane::GroupPrompt);
        assert_eq!(
            orchestrator.state().status().map(|status| status.kind),
            Some(StatusKind::Error)
        );
    }

    #[test]
    fn enter_selects_group_and_focuses_feed() {
        let mut orchestrator = orchestrator(&["A", "B"]);

        press(&mut orchestrator, &["j", "enter"]);

        assert_eq!(orchestrator.state().workspace().selection.get(), Some("B"));
        assert_eq!(orchestrator.state().active_pane(), ActivePane::Feed);
    }

    #[test]
    fn opening_group_without_posts_says_so() {
        let mut orchestrator = orchestrator(&["Book Club"]);

        press(&mut orchestrator, &["enter"]);

        let status = orchestrator.state().status().cloned().expect("status line");
        assert_eq!(status.kind, StatusKind::Info);
        assert_eq!(status.text, "Book Club has no posts yet");
    }

    #[test]
    fn selection_of_unregistered_group_is_reported_and_dropped() {
        let mut orchestrator = orchestrator(&["A"]);
        orchestrator.state.workspace_mut().selection.set("Gone");

        orchestrator
            .handle_event(AppEvent::Tick)
            .expect("event must be handled");

        assert_eq!(orchestrator.state().workspace().selection.get(), None);
        let status = orchestrator.state().status().cloned().expect("status line");
        assert_eq!(status.kind, StatusKind::Error);
        assert_eq!(status.text, FeedError::GroupNotFound("Gone".to_owned()).to_string());
    }

    #[test]
    fn deleting_selected_group_clears_selection() {
        let mut orchestrator = orchestrator(&["Book Club"]);
        press(&mut orchestrator, &["enter", "tab", "tab"]);
        assert_eq!(orchestrator.state().active_pane(), ActivePane::Sidebar);

        press(&mut orchestrator, &["d"]);

        assert!(group_titles(&orchestrator).is_empty());
        assert_eq!(orchestrator.state().workspace().selection.get(), None);
    }

    #[test]
    fn shifted_keys_reorder_groups() {
        let mut orchestrator = orchestrator(&["A", "B", "C"]);

        press(&mut orchestrator, &["J", "J"]);

        assert_eq!(group_titles(&orchestrator), ["B", "C", "A"]);
        assert_eq!(orchestrator.state().highlighted_group(), Some("A"));

        press(&mut orchestrator, &["K"]);
        assert_eq!(group_titles(&orchestrator), ["B", "A", "C"]);
    }

    #[test]
    fn composer_posts_to_selected_group_and_like_counts_up() {
        let mut orchestrator = orchestrator(&["Group 1"]);
        press(&mut orchestrator, &["enter", "i"]);
        type_text(&mut orchestrator, "hi there");
        press(&mut orchestrator, &["enter", "esc", "l", "l", "l"]);

        let posts = orchestrator.state().visible_posts();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].content, "hi there");
        assert_eq!(posts[0].user.name, "Dana");
        assert_eq!(posts[0].likes, 3);
        assert!(orchestrator.state().composer().is_empty());
    }

    #[test]
    fn own_post_is_removed_only_after_removal_fires() {
        let mut orchestrator = orchestrator(&["Group 1"]);
        press(&mut orchestrator, &["enter", "i"]);
        type_text(&mut orchestrator, "oops");
        press(&mut orchestrator, &["enter", "esc", "d", "d"]);

        let post = orchestrator.state().visible_posts()[0].id;
        assert!(orchestrator.state().pending().is_pending("Group 1", post));
        assert_eq!(orchestrator.scheduler.scheduled.borrow().len(), 1);

        let request = orchestrator.scheduler.scheduled.borrow()[0].clone();
        orchestrator
            .handle_event(AppEvent::RemovalDue(request.clone()))
            .expect("removal must be handled");

        assert!(orchestrator.state().visible_posts().is_empty());
        assert!(orchestrator.state().pending().is_empty());

        orchestrator
            .handle_event(AppEvent::RemovalDue(request))
            .expect("repeated removal must be harmless");
        assert!(orchestrator.state().visible_posts().is_empty());
    }

    #[test]
    fn foreign_posts_cannot_be_deleted() {
        let mut orchestrator = orchestrator(&["Group 1"]);
        let foreign = Post {
            id: PostId::generate(),
            user: PostAuthor::new("Sarah Chen", "/avatars/sarah.jpg"),
            content: "hello".to_owned(),
            timestamp: "2 hours ago".to_owned(),
            likes: 12,
            user_id: Some("sarah123".to_owned()),
        };
        orchestrator
            .state
            .workspace_mut()
            .ledger
            .seed("Group 1", foreign);

        press(&mut orchestrator, &["enter", "d"]);

        assert_eq!(orchestrator.state().visible_posts().len(), 1);
        assert!(orchestrator.scheduler.scheduled.borrow().is_empty());
        assert_eq!(
            orchestrator.state().status().map(|status| status.kind),
            Some(StatusKind::Error)
        );
    }

    #[test]
    fn composer_requires_a_selected_group() {
        let mut orchestrator = orchestrator(&["Group 1"]);

        press(&mut orchestrator, &["tab", "i"]);

        assert_eq!(orchestrator.state().active_pane(), ActivePane::Feed);
        assert_eq!(
            orchestrator.state().status().map(|status| status.text.as_str()),
            Some("Select a group before posting")
        );
    }
}
