use super::message::Message;
use crate::usecases::{load_messages::LoadMessagesError, send_message::SendMessageError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    Tick,
    QuitRequested,
    InputKey(KeyInput),
    MessagesLoaded(Result<Vec<Message>, LoadMessagesError>),
    MessageSent(Result<Message, SendMessageError>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyInput {
    pub key: String,
    pub ctrl: bool,
}

impl KeyInput {
    pub fn new(key: impl Into<String>, ctrl: bool) -> Self {
        Self {
            key: key.into(),
            ctrl,
        }
    }

    /// Returns the typed character when the key is a single printable char
    /// without modifiers.
    pub fn as_char(&self) -> Option<char> {
        if self.ctrl {
            return None;
        }

        let mut chars = self.key.chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) => Some(ch),
            _ => None,
        }
    }
}
