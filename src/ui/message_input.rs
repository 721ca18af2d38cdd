//! Message form rendering.

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthChar;

use crate::domain::message_input_state::MessageInputState;

use super::styles;

const PLACEHOLDER_TEXT: &str = "Type a message and press Enter...";

const PROMPT_SYMBOL: &str = "> ";

/// Renders the always-focused input box and places the terminal cursor in it.
pub fn render_message_input(
    frame: &mut Frame<'_>,
    area: Rect,
    input_state: &MessageInputState,
    pending_sends: usize,
) {
    let inner_width = area.width.saturating_sub(2) as usize;
    let available = inner_width.saturating_sub(PROMPT_SYMBOL.len() + 1);
    let window = visible_window(input_state.text(), input_state.cursor_position(), available);

    let title = if pending_sends > 0 {
        format!("Message (sending {pending_sends})")
    } else {
        "Message".to_owned()
    };

    let paragraph = Paragraph::new(build_input_line(&window.text, input_state.is_empty())).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(styles::panel_border_style()),
    );
    frame.render_widget(paragraph, area);

    let cursor_x = area
        .x
        .saturating_add(1)
        .saturating_add(PROMPT_SYMBOL.len() as u16)
        .saturating_add(window.cursor_column.min(u16::MAX as usize) as u16);
    let cursor_y = area.y.saturating_add(1);
    frame.set_cursor_position((cursor_x, cursor_y));
}

fn build_input_line(visible_text: &str, is_empty: bool) -> Line<'static> {
    let prompt = Span::styled(PROMPT_SYMBOL.to_owned(), styles::input_prompt_style());

    if is_empty {
        Line::from(vec![
            prompt,
            Span::styled(PLACEHOLDER_TEXT.to_owned(), styles::input_placeholder_style()),
        ])
    } else {
        Line::from(vec![
            prompt,
            Span::styled(visible_text.to_owned(), styles::input_text_style()),
        ])
    }
}

/// Slice of the input that fits the box, and the cursor column inside it.
#[derive(Debug, Clone, PartialEq, Eq)]
struct InputWindow {
    text: String,
    cursor_column: usize,
}

/// Scrolls the text horizontally so the cursor stays inside `width` columns.
fn visible_window(text: &str, cursor: usize, width: usize) -> InputWindow {
    let chars: Vec<char> = text.chars().collect();
    let cursor = cursor.min(chars.len());
    let char_width = |ch: &char| ch.width().unwrap_or(0);

    let mut start = 0;
    let mut cursor_column: usize = chars[..cursor].iter().map(char_width).sum();
    while cursor_column > width && start < cursor {
        cursor_column -= char_width(&chars[start]);
        start += 1;
    }

    let mut used = 0;
    let visible: String = chars[start..]
        .iter()
        .take_while(|ch| {
            used += char_width(*ch);
            used <= width
        })
        .collect();

    InputWindow {
        text: visible,
        cursor_column,
    }
}
