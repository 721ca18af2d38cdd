use anyhow::Result;

use crate::domain::{
    events::{AppEvent, KeyInput},
    message::Message,
    shell_state::{ShellState, StatusNotice},
};

use super::{
    contracts::{BackendRequest, RequestDispatcher, ShellOrchestrator},
    load_messages::LoadMessagesError,
    send_message::SendMessageError,
};

const TRANSCRIPT_PAGE_STEP: isize = 10;

const SHELL_LOAD_FAILED: &str = "SHELL_LOAD_MESSAGES_FAILED";
const SHELL_SEND_FAILED: &str = "SHELL_SEND_MESSAGE_FAILED";

pub struct DefaultShellOrchestrator<D>
where
    D: RequestDispatcher,
{
    state: ShellState,
    dispatcher: D,
}

impl<D> DefaultShellOrchestrator<D>
where
    D: RequestDispatcher,
{
    pub fn new(dispatcher: D) -> Self {
        Self {
            state: ShellState::default(),
            dispatcher,
        }
    }

    fn request_messages(&mut self) -> Result<()> {
        self.dispatcher.dispatch(BackendRequest::FetchMessages)?;
        self.state.transcript_mut().set_loading();
        tracing::debug!("messages fetch dispatched");
        Ok(())
    }

    fn submit_input(&mut self) -> Result<()> {
        if self.state.input().is_blank() {
            self.state
                .set_notice(StatusNotice::info(SendMessageError::EmptyMessage.user_message()));
            return Ok(());
        }

        let text = self.state.input().text().trim().to_owned();
        self.dispatcher
            .dispatch(BackendRequest::SendMessage { text })?;

        self.state.input_mut().take_text();
        self.state.begin_send();
        self.state.set_notice(StatusNotice::info("Sending..."));
        tracing::debug!(
            pending_sends = self.state.pending_sends(),
            "message send dispatched"
        );

        Ok(())
    }

    fn handle_key(&mut self, key: KeyInput) -> Result<()> {
        if key.ctrl {
            match key.key.as_str() {
                "r" => {
                    self.state.set_notice(StatusNotice::info("Refreshing..."));
                    self.request_messages()?;
                }
                "home" => self.state.transcript_mut().select_first(),
                "end" => self.state.transcript_mut().select_last(),
                _ => {}
            }
            return Ok(());
        }

        match key.key.as_str() {
            "enter" => self.submit_input()?,
            "backspace" => self.state.input_mut().delete_char_before(),
            "delete" => self.state.input_mut().delete_char_at(),
            "left" => self.state.input_mut().move_cursor_left(),
            "right" => self.state.input_mut().move_cursor_right(),
            "home" => self.state.input_mut().move_cursor_home(),
            "end" => self.state.input_mut().move_cursor_end(),
            "up" => self.state.transcript_mut().select_previous(),
            "down" => self.state.transcript_mut().select_next(),
            "pageup" => self.state.transcript_mut().select_by(-TRANSCRIPT_PAGE_STEP),
            "pagedown" => self.state.transcript_mut().select_by(TRANSCRIPT_PAGE_STEP),
            _ => {
                if let Some(ch) = key.as_char() {
                    if !self.state.input_mut().insert_char(ch) {
                        self.state.set_notice(StatusNotice::info(
                            "Message is at the maximum length.",
                        ));
                    }
                }
            }
        }

        Ok(())
    }

    fn on_messages_loaded(&mut self, result: Result<Vec<Message>, LoadMessagesError>) {
        match result {
            Ok(messages) => {
                tracing::info!(count = messages.len(), "messages loaded");
                self.state.transcript_mut().set_ready(messages);
                if self.state.pending_sends() == 0 {
                    self.state.clear_notice();
                }
            }
            Err(error) => {
                tracing::warn!(code = SHELL_LOAD_FAILED, error = ?error, "messages fetch failed");
                self.state.transcript_mut().set_error();
                self.state
                    .set_notice(StatusNotice::error(error.user_message()));
            }
        }
    }

    fn on_message_sent(&mut self, result: Result<Message, SendMessageError>) {
        self.state.finish_send();

        match result {
            Ok(message) => {
                tracing::debug!(kind = %message.kind, "message appended");
                self.state.transcript_mut().append(message);
                if self.state.pending_sends() == 0 {
                    self.state.clear_notice();
                }
            }
            Err(error) => {
                tracing::warn!(code = SHELL_SEND_FAILED, error = ?error, "message send failed");
                self.state
                    .set_notice(StatusNotice::error(error.user_message()));
            }
        }
    }
}

impl<D> ShellOrchestrator for DefaultShellOrchestrator<D>
where
    D: RequestDispatcher,
{
    fn state(&self) -> &ShellState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut ShellState {
        &mut self.state
    }

    fn start(&mut self) -> Result<()> {
        self.request_messages()
    }

    fn handle_event(&mut self, event: AppEvent) -> Result<()> {
        match event {
            AppEvent::Tick => {}
            AppEvent::QuitRequested => self.state.stop(),
            AppEvent::InputKey(key) => self.handle_key(key)?,
            AppEvent::MessagesLoaded(result) => self.on_messages_loaded(result),
            AppEvent::MessageSent(result) => self.on_message_sent(result),
        }

        Ok(())
    }
}
