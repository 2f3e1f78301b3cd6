use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

use crate::domain::{
    group::Group,
    shell_state::{ActivePane, ShellState, StatusKind},
};

use super::{
    post_rendering::{post_list_item, PostRowContext},
    styles,
    text_input::{render_text_input, TextInputView},
};

const WELCOME_TEXT: [&str; 3] = [
    "Welcome to WeLearn!",
    "You haven't joined any learning groups yet. Create or join a group to start sharing your daily learnings with others.",
    "Press 'n' in the sidebar to create a group, then Enter to open it.",
];

pub fn render(frame: &mut Frame<'_>, state: &ShellState) {
    let [content_area, status_area] = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .areas(frame.area());

    let [sidebar_area, feed_with_input_area] = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(30), Constraint::Percentage(70)])
        .areas(content_area);

    let [feed_area, composer_area] = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(3)])
        .areas(feed_with_input_area);

    let active_pane = state.active_pane();
    if active_pane == ActivePane::GroupPrompt {
        let [list_area, prompt_area] = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(1), Constraint::Length(3)])
            .areas(sidebar_area);
        render_sidebar(frame, list_area, state, true);
        render_text_input(
            frame,
            prompt_area,
            &TextInputView {
                title: "New group",
                placeholder: "",
                state: state.group_prompt(),
                focused: true,
            },
        );
    } else {
        render_sidebar(frame, sidebar_area, state, active_pane == ActivePane::Sidebar);
    }

    render_feed(frame, feed_area, state, active_pane == ActivePane::Feed);
    render_text_input(
        frame,
        composer_area,
        &TextInputView {
            title: "Post",
            placeholder: "Press 'i' to share what you learned...",
            state: state.composer(),
            focused: active_pane == ActivePane::Composer,
        },
    );

    frame.render_widget(Paragraph::new(status_line(state)), status_area);
}

fn panel_block(title: String, is_active: bool) -> Block<'static> {
    let border_style = if is_active {
        styles::active_panel_border_style()
    } else {
        styles::inactive_panel_border_style()
    };

    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style)
}

fn render_sidebar(frame: &mut Frame<'_>, area: Rect, state: &ShellState, is_active: bool) {
    let workspace = state.workspace();
    let groups = workspace.registry.groups();
    let block = panel_block(format!("Learning Groups ({})", groups.len()), is_active);

    if groups.is_empty() {
        let hint = Paragraph::new("No groups yet. Press 'n' to create one.")
            .wrap(Wrap { trim: true })
            .block(block);
        frame.render_widget(hint, area);
        return;
    }

    let items: Vec<ListItem<'static>> = groups
        .iter()
        .map(|group| group_list_item(group, workspace.selection.is_selected(&group.title)))
        .collect();
    let list = List::new(items)
        .block(block)
        .highlight_style(styles::highlight_style());

    let mut list_state = ListState::default();
    list_state.select(state.sidebar_cursor());
    frame.render_stateful_widget(list, area, &mut list_state);
}

fn group_list_item(group: &Group, is_selected: bool) -> ListItem<'static> {
    let title_style = if is_selected {
        styles::selected_group_style()
    } else {
        styles::group_title_style()
    };

    ListItem::new(Line::from(vec![
        Span::styled(format!("{} ", group.icon.glyph()), styles::group_icon_style()),
        Span::styled(group.title.clone(), title_style),
    ]))
}

fn render_feed(frame: &mut Frame<'_>, area: Rect, state: &ShellState, is_active: bool) {
    let workspace = state.workspace();
    let Some(group) = workspace
        .selected_group()
        .and_then(|title| workspace.registry.get(title))
    else {
        let welcome: Vec<Line<'static>> = WELCOME_TEXT
            .iter()
            .map(|text| Line::raw(*text))
            .collect();
        let paragraph = Paragraph::new(welcome)
            .wrap(Wrap { trim: true })
            .block(panel_block("Feed".to_owned(), is_active));
        frame.render_widget(paragraph, area);
        return;
    };

    let block = panel_block(format!("{} {}", group.title, group.url), is_active);
    let posts = state.visible_posts();
    if posts.is_empty() {
        let empty = Paragraph::new("No posts yet. Press 'i' to share what you learned.")
            .wrap(Wrap { trim: true })
            .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let width = area.width.saturating_sub(2) as usize;
    let current_user_id = workspace.ledger.current_user_id();
    let items: Vec<ListItem<'static>> = posts
        .iter()
        .map(|post| {
            post_list_item(
                post,
                &PostRowContext {
                    current_user_id,
                    is_pending: state.pending().is_pending(&group.title, post.id),
                    width,
                },
            )
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(if is_active {
            styles::highlight_style()
        } else {
            Style::default()
        });

    let mut list_state = ListState::default();
    list_state.select(state.feed_cursor());
    frame.render_stateful_widget(list, area, &mut list_state);
}

fn status_line(state: &ShellState) -> Line<'static> {
    if let Some(status) = state.status() {
        let style = match status.kind {
            StatusKind::Info => styles::status_info_style(),
            StatusKind::Error => styles::status_error_style(),
        };
        return Line::from(Span::styled(status.text.clone(), style));
    }

    Line::from(Span::styled(key_hints(state.active_pane()), styles::key_hint_style()))
}

fn key_hints(pane: ActivePane) -> &'static str {
    match pane {
        ActivePane::Sidebar => {
            "j/k move  enter open  n new  d delete  x exit  i icon  J/K reorder  tab feed  q quit"
        }
        ActivePane::Feed => "j/k move  l like  d delete  i write  tab next  q quit",
        ActivePane::Composer => "enter post  esc back  tab sidebar",
        ActivePane::GroupPrompt => "enter create  esc cancel",
    }
}
