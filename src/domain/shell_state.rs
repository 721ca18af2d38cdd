use super::{message_input_state::MessageInputState, transcript_state::TranscriptState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Error,
}

/// One-line notice shown in the footer until replaced or cleared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusNotice {
    pub level: NoticeLevel,
    pub text: String,
}

impl StatusNotice {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            text: text.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellState {
    running: bool,
    transcript: TranscriptState,
    input: MessageInputState,
    pending_sends: usize,
    notice: Option<StatusNotice>,
}

impl Default for ShellState {
    fn default() -> Self {
        Self {
            running: true,
            transcript: TranscriptState::default(),
            input: MessageInputState::default(),
            pending_sends: 0,
            notice: None,
        }
    }
}

impl ShellState {
    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn transcript(&self) -> &TranscriptState {
        &self.transcript
    }

    pub fn transcript_mut(&mut self) -> &mut TranscriptState {
        &mut self.transcript
    }

    pub fn input(&self) -> &MessageInputState {
        &self.input
    }

    pub fn input_mut(&mut self) -> &mut MessageInputState {
        &mut self.input
    }

    /// Number of sends dispatched whose result has not arrived yet.
    pub fn pending_sends(&self) -> usize {
        self.pending_sends
    }

    pub fn begin_send(&mut self) {
        self.pending_sends += 1;
    }

    pub fn finish_send(&mut self) {
        self.pending_sends = self.pending_sends.saturating_sub(1);
    }

    pub fn notice(&self) -> Option<&StatusNotice> {
        self.notice.as_ref()
    }

    pub fn set_notice(&mut self, notice: StatusNotice) {
        self.notice = Some(notice);
    }

    pub fn clear_notice(&mut self) {
        self.notice = None;
    }
}
