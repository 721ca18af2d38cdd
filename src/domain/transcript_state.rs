use super::message::{Message, TranscriptEntry};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranscriptUiState {
    Loading,
    Ready,
    Error,
}

/// Scroll margin - number of items to keep visible above/below cursor before scrolling.
const SCROLL_MARGIN: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscriptState {
    entries: Vec<TranscriptEntry>,
    ui_state: TranscriptUiState,
    selected_index: Option<usize>,
    scroll_offset: usize,
}

impl Default for TranscriptState {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            ui_state: TranscriptUiState::Loading,
            selected_index: None,
            scroll_offset: 0,
        }
    }
}

impl TranscriptState {
    pub fn entries(&self) -> &[TranscriptEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn ui_state(&self) -> TranscriptUiState {
        self.ui_state.clone()
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected_index
    }

    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    /// Marks a fetch as in progress. Entries already shown stay visible.
    pub fn set_loading(&mut self) {
        self.ui_state = TranscriptUiState::Loading;
    }

    /// Replaces the transcript with a freshly fetched list and selects the tail.
    pub fn set_ready(&mut self, messages: Vec<Message>) {
        self.entries = messages
            .into_iter()
            .map(TranscriptEntry::received_now)
            .collect();
        self.selected_index = self.entries.len().checked_sub(1);
        self.scroll_offset = 0;
        self.ui_state = TranscriptUiState::Ready;
    }

    pub fn set_error(&mut self) {
        self.ui_state = TranscriptUiState::Error;
    }

    /// Appends one message. The selection follows the tail when it was already
    /// on the last entry (or nothing was selected).
    pub fn append(&mut self, message: Message) {
        let follow_tail = match self.selected_index {
            None => true,
            Some(index) => index + 1 >= self.entries.len(),
        };

        self.entries.push(TranscriptEntry::received_now(message));

        if follow_tail {
            self.selected_index = Some(self.entries.len() - 1);
        }

        // A reply to a send can arrive before the initial fetch finished or
        // after it failed; the transcript is usable either way.
        self.ui_state = TranscriptUiState::Ready;
    }

    pub fn select_next(&mut self) {
        if self.entries.is_empty() {
            return;
        }

        self.selected_index = match self.selected_index {
            None => Some(0),
            Some(idx) if idx + 1 < self.entries.len() => Some(idx + 1),
            Some(idx) => Some(idx),
        };
    }

    pub fn select_previous(&mut self) {
        if self.entries.is_empty() {
            return;
        }

        self.selected_index = match self.selected_index {
            None => Some(self.entries.len() - 1),
            Some(idx) => Some(idx.saturating_sub(1)),
        };
    }

    pub fn select_first(&mut self) {
        if !self.entries.is_empty() {
            self.selected_index = Some(0);
        }
    }

    pub fn select_last(&mut self) {
        self.selected_index = self.entries.len().checked_sub(1);
    }

    /// Moves the selection by `step` entries in either direction, clamped to bounds.
    pub fn select_by(&mut self, step: isize) {
        if self.entries.is_empty() {
            return;
        }

        let last = self.entries.len() - 1;
        let current = self.selected_index.unwrap_or(last);
        let target = current.saturating_add_signed(step).min(last);
        self.selected_index = Some(target);
    }

    /// Updates the scroll offset so that the row at `row_index` stays visible
    /// with SCROLL_MARGIN rows around it.
    ///
    /// `row_index` is the first visual row of the selected entry and
    /// `viewport_height` the number of visible rows.
    pub fn update_scroll_offset(&mut self, row_index: usize, viewport_height: usize) {
        if viewport_height == 0 {
            return;
        }

        let effective_margin = SCROLL_MARGIN.min(viewport_height / 2);

        if row_index < self.scroll_offset + effective_margin {
            self.scroll_offset = row_index.saturating_sub(effective_margin);
        }

        let visible_bottom = self.scroll_offset + viewport_height;
        if row_index + effective_margin >= visible_bottom {
            self.scroll_offset = (row_index + effective_margin + 1).saturating_sub(viewport_height);
        }
    }
}
