use crate::domain::message::Message;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadMessagesOutput {
    pub messages: Vec<Message>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessagesSourceError {
    /// Backend unreachable or the request timed out.
    Unavailable,
    /// Backend answered with a non-success HTTP status.
    Rejected(u16),
    /// Response body did not decode as a message list.
    InvalidData,
}

pub trait MessagesSource {
    fn fetch_messages(&self) -> Result<Vec<Message>, MessagesSourceError>;
}

impl<T> MessagesSource for &T
where
    T: MessagesSource + ?Sized,
{
    fn fetch_messages(&self) -> Result<Vec<Message>, MessagesSourceError> {
        (*self).fetch_messages()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadMessagesError {
    TemporarilyUnavailable,
    Rejected(u16),
    DataContractViolation,
}

impl LoadMessagesError {
    pub fn user_message(&self) -> String {
        match self {
            Self::TemporarilyUnavailable => {
                "Failed to load messages: backend unreachable. Ctrl+R to retry.".to_owned()
            }
            Self::Rejected(status) => {
                format!("Failed to load messages: backend answered {status}. Ctrl+R to retry.")
            }
            Self::DataContractViolation => {
                "Failed to load messages: unexpected response format. Ctrl+R to retry.".to_owned()
            }
        }
    }
}

pub fn load_messages(source: &dyn MessagesSource) -> Result<LoadMessagesOutput, LoadMessagesError> {
    let messages = source.fetch_messages().map_err(map_source_error)?;

    Ok(LoadMessagesOutput { messages })
}

fn map_source_error(error: MessagesSourceError) -> LoadMessagesError {
    match error {
        MessagesSourceError::Unavailable => LoadMessagesError::TemporarilyUnavailable,
        MessagesSourceError::Rejected(status) => LoadMessagesError::Rejected(status),
        MessagesSourceError::InvalidData => LoadMessagesError::DataContractViolation,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    struct StubSource {
        result: Result<Vec<Message>, MessagesSourceError>,
        calls: Cell<usize>,
    }

    impl StubSource {
        fn with_result(result: Result<Vec<Message>, MessagesSourceError>) -> Self {
            Self {
                result,
                calls: Cell::new(0),
            }
        }
    }

    impl MessagesSource for StubSource {
        fn fetch_messages(&self) -> Result<Vec<Message>, MessagesSourceError> {
            self.calls.set(self.calls.get() + 1);
            self.result.clone()
        }
    }

    #[test]
    fn keeps_source_payload_and_order() {
        let messages = vec![Message::new("first", "user"), Message::new("second", "bot")];
        let source = StubSource::with_result(Ok(messages.clone()));

        let output = load_messages(&source).expect("load should succeed");

        assert_eq!(output.messages, messages);
        assert_eq!(source.calls.get(), 1);
    }

    #[test]
    fn empty_list_is_a_valid_result() {
        let source = StubSource::with_result(Ok(vec![]));

        let output = load_messages(&source).expect("load should succeed");

        assert!(output.messages.is_empty());
    }

    #[test]
    fn maps_unavailable_error() {
        let source = StubSource::with_result(Err(MessagesSourceError::Unavailable));

        let err = load_messages(&source).expect_err("must fail");

        assert_eq!(err, LoadMessagesError::TemporarilyUnavailable);
    }

    #[test]
    fn maps_rejected_error_with_status() {
        let source = StubSource::with_result(Err(MessagesSourceError::Rejected(503)));

        let err = load_messages(&source).expect_err("must fail");

        assert_eq!(err, LoadMessagesError::Rejected(503));
        assert!(err.user_message().contains("503"));
    }

    #[test]
    fn maps_invalid_data_to_contract_violation() {
        let source = StubSource::with_result(Err(MessagesSourceError::InvalidData));

        let err = load_messages(&source).expect_err("must fail");

        assert_eq!(err, LoadMessagesError::DataContractViolation);
    }

    #[test]
    fn every_load_error_offers_retry_hint() {
        for error in [
            LoadMessagesError::TemporarilyUnavailable,
            LoadMessagesError::Rejected(500),
            LoadMessagesError::DataContractViolation,
        ] {
            assert!(error.user_message().contains("Ctrl+R to retry"));
        }
    }
}
