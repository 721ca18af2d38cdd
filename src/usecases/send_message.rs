//! Use case for posting a message to the backend.
//!
//! Text is trimmed and blank input is rejected before any request is made.

use crate::domain::message::Message;

/// Command to post a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendMessageCommand {
    pub text: String,
}

impl SendMessageCommand {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// Errors reported by the transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SendMessageSourceError {
    /// Backend unreachable or the request timed out.
    Unavailable,
    /// Backend answered with a non-success HTTP status.
    Rejected(u16),
    /// Response body did not decode as a message.
    InvalidData,
}

/// Errors of the send operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SendMessageError {
    /// Message text is empty after trimming whitespace.
    EmptyMessage,
    TemporarilyUnavailable,
    Rejected(u16),
    DataContractViolation,
}

impl SendMessageError {
    pub fn user_message(&self) -> String {
        match self {
            Self::EmptyMessage => "Type a message before sending.".to_owned(),
            Self::TemporarilyUnavailable => {
                "Message not sent: backend unreachable.".to_owned()
            }
            Self::Rejected(status) => format!("Message not sent: backend answered {status}."),
            Self::DataContractViolation => {
                "Message sent, but the reply had an unexpected format.".to_owned()
            }
        }
    }
}

/// Posts text messages and returns the message the backend created.
pub trait MessageSender {
    fn send_message(&self, text: &str) -> Result<Message, SendMessageSourceError>;
}

impl<T: MessageSender + ?Sized> MessageSender for &T {
    fn send_message(&self, text: &str) -> Result<Message, SendMessageSourceError> {
        (*self).send_message(text)
    }
}

/// Sends a message and returns the backend's answer to append to the transcript.
///
/// # Errors
/// Returns `SendMessageError::EmptyMessage` for blank text without calling
/// the sender. Transport errors are mapped to their domain counterparts.
pub fn send_message(
    sender: &dyn MessageSender,
    command: SendMessageCommand,
) -> Result<Message, SendMessageError> {
    let text = command.text.trim();
    if text.is_empty() {
        return Err(SendMessageError::EmptyMessage);
    }

    sender.send_message(text).map_err(map_source_error)
}

fn map_source_error(error: SendMessageSourceError) -> SendMessageError {
    match error {
        SendMessageSourceError::Unavailable => SendMessageError::TemporarilyUnavailable,
        SendMessageSourceError::Rejected(status) => SendMessageError::Rejected(status),
        SendMessageSourceError::InvalidData => SendMessageError::DataContractViolation,
    }
}
