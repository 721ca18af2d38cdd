//! Style definitions for the UI components.

use ratatui::style::{Color, Modifier, Style};

// =============================================================================
// Page chrome
// =============================================================================

/// Header bar: bold title on a blue band.
pub fn header_title_style() -> Style {
    Style::default()
        .fg(Color::White)
        .bg(Color::Blue)
        .add_modifier(Modifier::BOLD)
}

/// Backend address shown next to the title.
pub fn header_detail_style() -> Style {
    Style::default().fg(Color::Gray).bg(Color::Blue)
}

pub fn footer_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

pub fn key_hint_style() -> Style {
    Style::default().fg(Color::Gray)
}

pub fn notice_info_style() -> Style {
    Style::default().fg(Color::Yellow)
}

pub fn notice_error_style() -> Style {
    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
}

pub fn panel_border_style() -> Style {
    Style::default().fg(Color::Cyan)
}

// =============================================================================
// Transcript
// =============================================================================

pub fn timestamp_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

/// Author label of messages typed by the local user.
pub fn user_author_style() -> Style {
    Style::default()
        .fg(Color::Green)
        .add_modifier(Modifier::BOLD)
}

/// Author label of every other message type.
pub fn other_author_style() -> Style {
    Style::default()
        .fg(Color::Magenta)
        .add_modifier(Modifier::BOLD)
}

pub fn message_text_style() -> Style {
    Style::default().fg(Color::White)
}

pub fn empty_message_style() -> Style {
    Style::default()
        .fg(Color::DarkGray)
        .add_modifier(Modifier::ITALIC)
}

pub fn selected_entry_style() -> Style {
    Style::default().add_modifier(Modifier::REVERSED)
}

// =============================================================================
// Input
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_and_other_authors_are_distinguishable() {
        assert_ne!(user_author_style().fg, other_author_style().fg);
    }

    #[test]
    fn error_notice_is_bold_red() {
        let style = notice_error_style();
        assert_eq!(style.fg, Some(Color::Red));
        assert!(style.add_modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn selected_entry_is_reversed() {
        assert!(selected_entry_style()
            .add_modifier
            .contains(Modifier::REVERSED));
    }
}
