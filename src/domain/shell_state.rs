use super::{
    pending_deletes::PendingDeletes,
    post::{Post, PostAuthor},
    text_input_state::TextInputState,
    workspace::FeedWorkspace,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActivePane {
    #[default]
    Sidebar,
    Feed,
    Composer,
    /// Typing the title of a group to create.
    GroupPrompt,
}

impl ActivePane {
    /// Next pane for `tab`. Text entry panes fall back to the sidebar.
    pub fn cycled(self) -> Self {
        match self {
            ActivePane::Sidebar => ActivePane::Feed,
            ActivePane::Feed => ActivePane::Composer,
            ActivePane::Composer | ActivePane::GroupPrompt => ActivePane::Sidebar,
        }
    }

    pub fn accepts_text(self) -> bool {
        matches!(self, ActivePane::Composer | ActivePane::GroupPrompt)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLine {
    pub kind: StatusKind,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellState {
    running: bool,
    active_pane: ActivePane,
    workspace: FeedWorkspace,
    profile: PostAuthor,
    pending: PendingDeletes,
    composer: TextInputState,
    group_prompt: TextInputState,
    sidebar_cursor: Option<usize>,
    feed_cursor: Option<usize>,
    status: Option<StatusLine>,
}

impl Default for ShellState {
    fn default() -> Self {
        Self::new(FeedWorkspace::default(), PostAuthor::new("You", ""))
    }
}

impl ShellState {
    pub fn new(workspace: FeedWorkspace, profile: PostAuthor) -> Self {
        let mut state = Self {
            running: true,
            active_pane: ActivePane::default(),
            workspace,
            profile,
            pending: PendingDeletes::default(),
            composer: TextInputState::default(),
            group_prompt: TextInputState::default(),
            sidebar_cursor: None,
            feed_cursor: None,
            status: None,
        };
        state.clamp_cursors();
        state
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn active_pane(&self) -> ActivePane {
        self.active_pane
    }

    pub fn set_active_pane(&mut self, pane: ActivePane) {
        self.active_pane = pane;
    }

    pub fn workspace(&self) -> &FeedWorkspace {
        &self.workspace
    }

    pub fn workspace_mut(&mut self) -> &mut FeedWorkspace {
        &mut self.workspace
    }

    pub fn profile(&self) -> &PostAuthor {
        &self.profile
    }

    /// Both halves at once, for actions that read the feed and tag posts.
    pub fn workspace_and_pending_mut(&mut self) -> (&mut FeedWorkspace, &mut PendingDeletes) {
        (&mut self.workspace, &mut self.pending)
    }

    pub fn pending(&self) -> &PendingDeletes {
        &self.pending
    }

    pub fn pending_mut(&mut self) -> &mut PendingDeletes {
        &mut self.pending
    }

    pub fn composer(&self) -> &TextInputState {
        &self.composer
    }

    pub fn composer_mut(&mut self) -> &mut TextInputState {
        &mut self.composer
    }

    pub fn group_prompt(&self) -> &TextInputState {
        &self.group_prompt
    }

    pub fn group_prompt_mut(&mut self) -> &mut TextInputState {
        &mut self.group_prompt
    }

    pub fn status(&self) -> Option<&StatusLine> {
        self.status.as_ref()
    }

    pub fn set_info(&mut self, text: impl Into<String>) {
        self.status = Some(StatusLine {
            kind: StatusKind::Info,
            text: text.into(),
        });
    }

    pub fn set_error(&mut self, text: impl Into<String>) {
        self.status = Some(StatusLine {
            kind: StatusKind::Error,
            text: text.into(),
        });
    }

    pub fn sidebar_cursor(&self) -> Option<usize> {
        self.sidebar_cursor
    }

    /// Group title under the sidebar cursor.
    pub fn highlighted_group(&self) -> Option<&str> {
        self.sidebar_cursor
            .and_then(|index| self.workspace.registry.groups().get(index))
            .map(|group| group.title.as_str())
    }

    pub fn feed_cursor(&self) -> Option<usize> {
        self.feed_cursor
    }

    /// Posts of the selected group, oldest first.
    pub fn visible_posts(&self) -> &[Post] {
        match self.workspace.selected_group() {
            Some(group) => self.workspace.ledger.list(group),
            None => &[],
        }
    }

    /// Post under the feed cursor.
    pub fn highlighted_post(&self) -> Option<&Post> {
        self.feed_cursor
            .and_then(|index| self.visible_posts().get(index))
    }

    pub fn move_sidebar_cursor(&mut self, delta: isize) {
        self.sidebar_cursor = step(self.sidebar_cursor, delta, self.workspace.registry.len());
    }

    pub fn move_feed_cursor(&mut self, delta: isize) {
        self.feed_cursor = step(self.feed_cursor, delta, self.visible_posts().len());
    }

    /// Points the sidebar cursor at a group, if it exists.
    pub fn focus_group(&mut self, title: &str) {
        if let Some(index) = self.workspace.registry.position(title) {
            self.sidebar_cursor = Some(index);
        }
    }

    /// Moves the feed cursor to the newest post.
    pub fn focus_latest_post(&mut self) {
        self.feed_cursor = self.visible_posts().len().checked_sub(1);
    }

    /// Keeps both cursors inside their lists after the containers changed.
    pub fn clamp_cursors(&mut self) {
        self.sidebar_cursor = clamp(self.sidebar_cursor, self.workspace.registry.len());
        let posts = self.visible_posts().len();
        self.feed_cursor = clamp(self.feed_cursor, posts);
    }
}

fn clamp(cursor: Option<usize>, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    Some(cursor.unwrap_or(0).min(len - 1))
}

fn step(cursor: Option<usize>, delta: isize, len: usize) -> Option<usize> {
    let current = clamp(cursor, len)?;
    let next = current.saturating_add_signed(delta).min(len - 1);
    Some(next)
}
