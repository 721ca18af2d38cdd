use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::domain::{
    shell_state::{NoticeLevel, ShellState},
    transcript_state::TranscriptUiState,
};

use super::message_input::render_message_input;
use super::message_rendering::{build_transcript_items, first_row_of};
use super::styles;

const KEY_HINTS: &str = "Enter send | Ctrl+R refresh | Up/Down scroll | Esc quit";

/// Static page decoration taken from config.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageChrome {
    pub title: String,
    pub backend_url: String,
    pub footer: String,
}

pub fn render(frame: &mut Frame<'_>, state: &mut ShellState, chrome: &PageChrome) {
    let [header_area, transcript_area, input_area, footer_area] = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .areas(frame.area());

    render_header(frame, header_area, chrome);
    render_transcript(frame, transcript_area, state);
    render_message_input(frame, input_area, state.input(), state.pending_sends());
    render_footer(frame, footer_area, state, chrome);
}

fn render_header(frame: &mut Frame<'_>, area: Rect, chrome: &PageChrome) {
    let line = Line::from(vec![
        Span::styled(format!(" {} ", chrome.title), styles::header_title_style()),
        Span::styled(format!(" {}", chrome.backend_url), styles::header_detail_style()),
    ])
    .style(styles::header_detail_style());

    frame.render_widget(Paragraph::new(line), area);
}

fn render_transcript(frame: &mut Frame<'_>, area: Rect, state: &mut ShellState) {
    let transcript = state.transcript();
    let ui_state = transcript.ui_state();

    let title = match ui_state {
        TranscriptUiState::Loading if !transcript.is_empty() => {
            format!("Messages ({}) - refreshing", transcript.len())
        }
        _ => format!("Messages ({})", transcript.len()),
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(styles::panel_border_style());

    if transcript.is_empty() {
        let placeholder = match ui_state {
            TranscriptUiState::Loading => "Loading messages...",
            TranscriptUiState::Error => "Failed to load messages. Press Ctrl+R to retry.",
            TranscriptUiState::Ready => "No messages yet. Say hello!",
        };
        frame.render_widget(Paragraph::new(placeholder).block(block), area);
        return;
    }

    let inner_width = area.width.saturating_sub(2) as usize;
    let viewport_height = area.height.saturating_sub(2) as usize;
    let items = build_transcript_items(
        transcript.entries(),
        inner_width,
        transcript.selected_index(),
    );

    let selected_row = transcript
        .selected_index()
        .and_then(|index| first_row_of(&items, index).map(|row| (row, items[index].height())));

    if let Some((row, height)) = selected_row {
        // Keep the whole selected item on screen, not only its header.
        let last_row = row + height.saturating_sub(1);
        state
            .transcript_mut()
            .update_scroll_offset(last_row, viewport_height);
        state.transcript_mut().update_scroll_offset(row, viewport_height);
    }

    let scroll_offset = state.transcript().scroll_offset();
    let lines: Vec<Line<'static>> = items.into_iter().flat_map(|item| item.lines).collect();

    let paragraph = Paragraph::new(lines)
        .block(block)
        .scroll((scroll_offset.min(u16::MAX as usize) as u16, 0));
    frame.render_widget(paragraph, area);
}

fn render_footer(frame: &mut Frame<'_>, area: Rect, state: &ShellState, chrome: &PageChrome) {
    frame.render_widget(Paragraph::new(footer_line(state, chrome)), area);
}

fn footer_line(state: &ShellState, chrome: &PageChrome) -> Line<'static> {
    let mut spans = Vec::new();

    if !chrome.footer.is_empty() {
        spans.push(Span::styled(chrome.footer.clone(), styles::footer_style()));
        spans.push(Span::styled(" | ", styles::footer_style()));
    }

    match state.notice() {
        Some(notice) => {
            let style = match notice.level {
                NoticeLevel::Info => styles::notice_info_style(),
                NoticeLevel::Error => styles::notice_error_style(),
            };
            spans.push(Span::styled(notice.text.clone(), style));
        }
        None => spans.push(Span::styled(KEY_HINTS, styles::key_hint_style())),
    }

    Line::from(spans)
}
