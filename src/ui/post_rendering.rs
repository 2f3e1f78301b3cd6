//! Turns feed posts into list rows: a header line, then the wrapped text.

use ratatui::{
    text::{Line, Span},
    widgets::ListItem,
};
use unicode_width::UnicodeWidthChar;

use crate::domain::post::Post;

use super::styles;

/// Indent applied to body lines so they sit under the author name.
const BODY_INDENT: &str = "  ";
const PENDING_LABEL: &str = " (deleting...)";

pub struct PostRowContext<'a> {
    pub current_user_id: &'a str,
    pub is_pending: bool,
    pub width: usize,
}

pub fn post_list_item(post: &Post, context: &PostRowContext<'_>) -> ListItem<'static> {
    ListItem::new(post_lines(post, context))
}

pub fn post_lines(post: &Post, context: &PostRowContext<'_>) -> Vec<Line<'static>> {
    let mut lines = vec![header_line(post, context)];

    let body_style = if context.is_pending {
        styles::pending_removal_style()
    } else {
        styles::post_text_style()
    };
    let body_width = context.width.saturating_sub(BODY_INDENT.len()).max(1);
    for chunk in wrap_text(&post.content, body_width) {
        lines.push(Line::from(vec![
            Span::raw(BODY_INDENT),
            Span::styled(chunk, body_style),
        ]));
    }

    lines.push(Line::raw(""));
    lines
}

fn header_line(post: &Post, context: &PostRowContext<'_>) -> Line<'static> {
    let author_style = if context.is_pending {
        styles::pending_removal_style()
    } else {
        styles::post_author_style()
    };

    let mut spans = vec![
        Span::styled(format!("[{}] ", post.user.initial()), styles::post_meta_style()),
        Span::styled(post.user.name.clone(), author_style),
    ];
    if post.is_authored_by(context.current_user_id) {
        spans.push(Span::styled(" (you)", styles::post_meta_style()));
    }
    spans.push(Span::styled(
        format!(" · {}", post.timestamp),
        styles::post_meta_style(),
    ));
    spans.push(Span::styled(
        format!("  \u{2665} {}", post.likes),
        styles::like_count_style(),
    ));
    if context.is_pending {
        spans.push(Span::styled(PENDING_LABEL, styles::post_meta_style()));
    }

    Line::from(spans)
}

/// Greedy word wrap by display width. Words wider than the line are split.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();

    for paragraph in text.lines() {
        let mut current = String::new();
        let mut current_width = 0;

        for word in paragraph.split_whitespace() {
            let word_width: usize = word.chars().map(char_width).sum();
            let separator = usize::from(!current.is_empty());

            if current_width + separator + word_width <= width {
                if separator == 1 {
                    current.push(' ');
                }
                current.push_str(word);
                current_width += separator + word_width;
                continue;
            }

            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
                current_width = 0;
            }

            for ch in word.chars() {
                let ch_width = char_width(ch);
                if current_width + ch_width > width && !current.is_empty() {
                    lines.push(std::mem::take(&mut current));
                    current_width = 0;
                }
                current.push(ch);
                current_width += ch_width;
            }
        }

        lines.push(current);
    }

    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

fn char_width(ch: char) -> usize {
    ch.width().unwrap_or(0)
}
