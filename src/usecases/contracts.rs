use anyhow::Result;

use crate::domain::{events::AppEvent, shell_state::ShellState};

pub trait AppEventSource {
    fn next_event(&mut self) -> Result<Option<AppEvent>>;
}

pub trait ShellOrchestrator {
    fn state(&self) -> &ShellState;
    fn state_mut(&mut self) -> &mut ShellState;
    /// Issues the initial fetch. Called once before the first frame.
    fn start(&mut self) -> Result<()>;
    fn handle_event(&mut self, event: AppEvent) -> Result<()>;
}

/// Network work the shell hands off so the UI loop never waits on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendRequest {
    FetchMessages,
    SendMessage { text: String },
}

/// Accepts backend requests; their results come back later as `AppEvent`s.
pub trait RequestDispatcher {
    fn dispatch(&mut self, request: BackendRequest) -> Result<()>;
}
