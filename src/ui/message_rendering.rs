//! Transcript rendering logic.
//!
//! Every transcript entry becomes exactly one `TranscriptItem`:
//! - a header line with arrival time and author type
//! - the message text, word-wrapped to the panel width and indented

use ratatui::text::{Line, Span};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::domain::message::TranscriptEntry;

use super::styles;

const BODY_INDENT: &str = "  ";
const EMPTY_TEXT_PLACEHOLDER: &str = "(empty message)";

/// Visual block of one transcript entry.
#[derive(Debug, Clone, PartialEq)]
pub struct TranscriptItem {
    pub lines: Vec<Line<'static>>,
}

impl TranscriptItem {
    pub fn height(&self) -> usize {
        self.lines.len()
    }
}

/// Builds one item per entry. `width` is the inner width of the panel.
pub fn build_transcript_items(
    entries: &[TranscriptEntry],
    width: usize,
    selected_index: Option<usize>,
) -> Vec<TranscriptItem> {
    entries
        .iter()
        .enumerate()
        .map(|(index, entry)| transcript_item(entry, width, selected_index == Some(index)))
        .collect()
}

/// Returns the first visual row of the item at `index`.
pub fn first_row_of(items: &[TranscriptItem], index: usize) -> Option<usize> {
    if index >= items.len() {
        return None;
    }

    Some(items[..index].iter().map(TranscriptItem::height).sum())
}

fn transcript_item(entry: &TranscriptEntry, width: usize, selected: bool) -> TranscriptItem {
    let message = &entry.message;
    let author_style = if message.is_from_user() {
        styles::user_author_style()
    } else {
        styles::other_author_style()
    };

    let mut header_spans = vec![Span::styled(
        entry.received_at.format("%H:%M").to_string(),
        styles::timestamp_style(),
    )];
    if let Some(label) = message.author_label() {
        header_spans.push(Span::raw(" "));
        header_spans.push(Span::styled(label.to_owned(), author_style));
    }

    let mut header = Line::from(header_spans);
    if selected {
        header = header.patch_style(styles::selected_entry_style());
    }

    let mut lines = vec![header];

    if message.text.trim().is_empty() {
        lines.push(Line::from(vec![
            Span::raw(BODY_INDENT),
            Span::styled(EMPTY_TEXT_PLACEHOLDER, styles::empty_message_style()),
        ]));
        return TranscriptItem { lines };
    }

    let body_width = width.saturating_sub(BODY_INDENT.len()).max(1);
    for segment in wrap_text(&message.text, body_width) {
        lines.push(Line::from(vec![
            Span::raw(BODY_INDENT),
            Span::styled(segment, styles::message_text_style()),
        ]));
    }

    TranscriptItem { lines }
}

/// Word-wraps `text` to `width` display columns.
///
/// Explicit newlines are kept, words longer than a line are split by character.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        let mut current = String::new();
        let mut current_width = 0;

        for word in paragraph.split_whitespace() {
            let word_width = word.width();

            if current_width > 0 && current_width + 1 + word_width <= width {
                current.push(' ');
                current.push_str(word);
                current_width += 1 + word_width;
                continue;
            }

            if current_width > 0 {
                lines.push(std::mem::take(&mut current));
                current_width = 0;
            }

            if word_width <= width {
                current.push_str(word);
                current_width = word_width;
                continue;
            }

            for ch in word.chars() {
                let ch_width = ch.width().unwrap_or(0);
                if current_width + ch_width > width && current_width > 0 {
                    lines.push(std::mem::take(&mut current));
                    current_width = 0;
                }
                current.push(ch);
                current_width += ch_width;
            }
        }

        lines.push(current);
    }

    lines
}
