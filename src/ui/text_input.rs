//! Rendering of the composer and the new-group prompt.

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::domain::text_input_state::TextInputState;

use super::styles;

const PROMPT_SYMBOL: &str = "> ";

pub struct TextInputView<'a> {
    pub title: &'a str,
    pub placeholder: &'a str,
    pub state: &'a TextInputState,
    pub focused: bool,
}

pub fn render_text_input(frame: &mut Frame<'_>, area: Rect, view: &TextInputView<'_>) {
    let border_style = if view.focused {
        styles::active_panel_border_style()
    } else {
        styles::inactive_panel_border_style()
    };

    let paragraph = Paragraph::new(build_input_line(view)).block(
        Block::default()
            .title(view.title.to_owned())
            .borders(Borders::ALL)
            .border_style(border_style),
    );
    frame.render_widget(paragraph, area);

    if view.focused {
        let before_cursor: String = view.state.text().chars().take(view.state.cursor()).collect();
        let offset = PROMPT_SYMBOL.width() + before_cursor.width();
        let cursor_x = area
            .x
            .saturating_add(1)
            .saturating_add(offset.min(u16::MAX as usize) as u16);
        frame.set_cursor_position((cursor_x, area.y.saturating_add(1)));
    }
}

fn build_input_line(view: &TextInputView<'_>) -> Line<'static> {
    let prompt = Span::styled(PROMPT_SYMBOL.to_owned(), styles::input_prompt_style());

    if view.state.is_empty() && !view.focused {
        return Line::from(vec![
            prompt,
            Span::styled(view.placeholder.to_owned(), styles::input_placeholder_style()),
        ]);
    }

    Line::from(vec![
        prompt,
        Span::styled(view.state.text().to_owned(), styles::input_text_style()),
    ])
}
