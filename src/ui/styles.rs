//! Style definitions for the UI components.

use ratatui::style::{Color, Modifier, Style};

// =============================================================================
// Panels
// =============================================================================

pub fn active_panel_border_style() -> Style {
    Style::default().fg(Color::Cyan)
}

pub fn inactive_panel_border_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

pub fn highlight_style() -> Style {
    Style::default().add_modifier(Modifier::REVERSED | Modifier::BOLD)
}

// =============================================================================
// Sidebar
// =============================================================================

pub fn group_title_style() -> Style {
    Style::default().fg(Color::White)
}

/// The group whose feed is open.
pub fn selected_group_style() -> Style {
    Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD)
}

pub fn group_icon_style() -> Style {
    Style::default().fg(Color::Cyan)
}

// =============================================================================
// Feed
// =============================================================================

pub fn post_author_style() -> Style {
    Style::default()
        .fg(Color::White)
        .add_modifier(Modifier::BOLD)
}

pub fn post_meta_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

pub fn post_text_style() -> Style {
    Style::default().fg(Color::White)
}

pub fn like_count_style() -> Style {
    Style::default().fg(Color::Magenta)
}

/// Posts waiting for their removal timer.
pub fn pending_removal_style() -> Style {
    Style::default()
        .fg(Color::DarkGray)
        .add_modifier(Modifier::CROSSED_OUT)
}

// =============================================================================
// Input and status
// =============================================================================

pub fn input_prompt_style() -> Style {
    Style::default().fg(Color::Cyan)
}

pub fn input_text_style() -> Style {
    Style::default().fg(Color::White)
}

pub fn input_placeholder_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

pub fn status_info_style() -> Style {
    Style::default().fg(Color::Green)
}

pub fn status_error_style() -> Style {
    Style::default().fg(Color::Red)
}

pub fn key_hint_style() -> Style {
    Style::default().fg(Color::DarkGray)
}
