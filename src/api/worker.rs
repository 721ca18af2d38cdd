use std::{
    sync::{
        atomic::{AtomicUsize, Ordering},
        mpsc::{self, Receiver, Sender},
        Arc,
    },
    thread::{self, JoinHandle},
};

use anyhow::{anyhow, Result};

use crate::{
    domain::events::AppEvent,
    infra::error::AppError,
    usecases::{
        contracts::{BackendRequest, RequestDispatcher},
        load_messages::{load_messages, MessagesSource},
        send_message::{send_message, MessageSender, SendMessageCommand},
    },
};

const REQUEST_WORKER_STARTED: &str = "API_REQUEST_WORKER_STARTED";
const REQUEST_WORKER_STOPPED: &str = "API_REQUEST_WORKER_STOPPED";
const REQUEST_WORKER_EVENT_SEND_FAILED: &str = "API_REQUEST_WORKER_EVENT_SEND_FAILED";
const REQUEST_WORKER_DETACHED: &str = "API_REQUEST_WORKER_DETACHED";

/// Runs backend requests on a dedicated thread, one at a time, and reports
/// each result as an `AppEvent`.
///
/// Requests are served in submission order, so replies to consecutive sends
/// are appended in the order the user typed them.
#[derive(Debug)]
pub struct RequestWorker {
    request_tx: Option<Sender<BackendRequest>>,
    worker: Option<JoinHandle<()>>,
    /// Requests dispatched but not yet answered.
    pending: Arc<AtomicUsize>,
}

impl RequestWorker {
    pub fn start<B>(backend: B, event_tx: Sender<AppEvent>) -> Result<Self, AppError>
    where
        B: MessagesSource + MessageSender + Send + 'static,
    {
        let (request_tx, request_rx) = mpsc::channel::<BackendRequest>();
        let pending = Arc::new(AtomicUsize::new(0));
        let worker_pending = Arc::clone(&pending);
        let worker = thread::Builder::new()
            .name("chatpane-requests".to_owned())
            .spawn(move || run_worker(backend, request_rx, event_tx, worker_pending))
            .map_err(AppError::WorkerSpawn)?;

        tracing::info!(code = REQUEST_WORKER_STARTED, "request worker started");

        Ok(Self {
            request_tx: Some(request_tx),
            worker: Some(worker),
            pending,
        })
    }
}

impl RequestDispatcher for RequestWorker {
    fn dispatch(&mut self, request: BackendRequest) -> Result<()> {
        let request_tx = self
            .request_tx
            .as_ref()
            .ok_or_else(|| anyhow!("request worker is shut down"))?;

        self.pending.fetch_add(1, Ordering::SeqCst);
        request_tx.send(request).map_err(|_| {
            self.pending.fetch_sub(1, Ordering::SeqCst);
            anyhow!("request worker stopped unexpectedly")
        })
    }
}

impl Drop for RequestWorker {
    fn drop(&mut self) {
        // Closing the queue ends the worker loop once queued requests are served.
        self.request_tx.take();

        if let Some(worker) = self.worker.take() {
            let pending = self.pending.load(Ordering::SeqCst);
            if pending > 0 {
                tracing::debug!(
                    code = REQUEST_WORKER_DETACHED,
                    pending,
                    "request worker busy on shutdown; detaching"
                );
                return;
            }

            if let Err(error) = worker.join() {
                tracing::warn!(error = ?error, "request worker panicked");
            }
        }
    }
}

fn run_worker<B>(
    backend: B,
    request_rx: Receiver<BackendRequest>,
    event_tx: Sender<AppEvent>,
    pending: Arc<AtomicUsize>,
) where
    B: MessagesSource + MessageSender,
{
    for request in request_rx {
        let event = execute(&backend, request);
        pending.fetch_sub(1, Ordering::SeqCst);

        if let Err(error) = event_tx.send(event) {
            tracing::warn!(
                code = REQUEST_WORKER_EVENT_SEND_FAILED,
                error = %error,
                "request worker lost its event channel"
            );
            return;
        }
    }

    tracing::info!(code = REQUEST_WORKER_STOPPED, "request worker stopped");
}

fn execute<B>(backend: &B, request: BackendRequest) -> AppEvent
where
    B: MessagesSource + MessageSender,
{
    match request {
        BackendRequest::FetchMessages => {
            AppEvent::MessagesLoaded(load_messages(backend).map(|output| output.messages))
        }
        BackendRequest::SendMessage { text } => {
            AppEvent::MessageSent(send_message(backend, SendMessageCommand::new(text)))
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{
        sync::{atomic::AtomicBool, Mutex},
        time::Duration,
    };

    use super::*;
    use crate::{
        domain::message::Message,
        usecases::{
            load_messages::{LoadMessagesError, MessagesSourceError},
            send_message::{SendMessageError, SendMessageSourceError},
        },
    };

    const RECV_TIMEOUT: Duration = Duration::from_secs(2);

    #[derive(Clone, Default)]
    struct StubBackend {
        fail_fetch: bool,
        sent: Arc<Mutex<Vec<String>>>,
    }

    impl MessagesSource for StubBackend {
        fn fetch_messages(&self) -> Result<Vec<Message>, MessagesSourceError> {
            if self.fail_fetch {
                return Err(MessagesSourceError::Unavailable);
            }
            Ok(vec![Message::new("welcome", "bot")])
        }
    }

    impl MessageSender for StubBackend {
        fn send_message(&self, text: &str) -> Result<Message, SendMessageSourceError> {
            self.sent.lock().expect("sent lock").push(text.to_owned());
            Ok(Message::new(text, "user"))
        }
    }

    #[test]
    fn fetch_request_reports_loaded_messages() {
        let (event_tx, event_rx) = mpsc::channel();
        let mut worker =
            RequestWorker::start(StubBackend::default(), event_tx).expect("worker must start");

        worker
            .dispatch(BackendRequest::FetchMessages)
            .expect("dispatch must succeed");

        let event = event_rx.recv_timeout(RECV_TIMEOUT).expect("event expected");
        assert_eq!(
            event,
            AppEvent::MessagesLoaded(Ok(vec![Message::new("welcome", "bot")]))
        );
    }

    #[test]
    fn fetch_failure_is_reported_as_event() {
        let (event_tx, event_rx) = mpsc::channel();
        let backend = StubBackend {
            fail_fetch: true,
            ..StubBackend::default()
        };
        let mut worker = RequestWorker::start(backend, event_tx).expect("worker must start");

        worker
            .dispatch(BackendRequest::FetchMessages)
            .expect("dispatch must succeed");

        let event = event_rx.recv_timeout(RECV_TIMEOUT).expect("event expected");
        assert_eq!(
            event,
            AppEvent::MessagesLoaded(Err(LoadMessagesError::TemporarilyUnavailable))
        );
    }

    #[test]
    fn sends_are_served_in_submission_order() {
        let (event_tx, event_rx) = mpsc::channel();
        let backend = StubBackend::default();
        let sent = Arc::clone(&backend.sent);
        let mut worker = RequestWorker::start(backend, event_tx).expect("worker must start");

        for text in ["one", "two", "three"] {
            worker
                .dispatch(BackendRequest::SendMessage {
                    text: text.to_owned(),
                })
                .expect("dispatch must succeed");
        }

        let replies: Vec<AppEvent> = (0..3)
            .map(|_| event_rx.recv_timeout(RECV_TIMEOUT).expect("event expected"))
            .collect();

        assert_eq!(
            replies,
            vec![
                AppEvent::MessageSent(Ok(Message::new("one", "user"))),
                AppEvent::MessageSent(Ok(Message::new("two", "user"))),
                AppEvent::MessageSent(Ok(Message::new("three", "user"))),
            ]
        );
        assert_eq!(*sent.lock().expect("sent lock"), vec!["one", "two", "three"]);
    }

    #[test]
    fn blank_send_is_rejected_without_reaching_backend() {
        let (event_tx, event_rx) = mpsc::channel();
        let backend = StubBackend::default();
        let sent = Arc::clone(&backend.sent);
        let mut worker = RequestWorker::start(backend, event_tx).expect("worker must start");

        worker
            .dispatch(BackendRequest::SendMessage {
                text: "   ".to_owned(),
            })
            .expect("dispatch must succeed");

        let event = event_rx.recv_timeout(RECV_TIMEOUT).expect("event expected");
        assert_eq!(
            event,
            AppEvent::MessageSent(Err(SendMessageError::EmptyMessage))
        );
        assert!(sent.lock().expect("sent lock").is_empty());
    }

    struct DropFlagBackend {
        dropped: Arc<AtomicBool>,
    }

    impl Drop for DropFlagBackend {
        fn drop(&mut self) {
            self.dropped.store(true, Ordering::SeqCst);
        }
    }

    impl MessagesSource for DropFlagBackend {
        fn fetch_messages(&self) -> Result<Vec<Message>, MessagesSourceError> {
            Ok(vec![])
        }
    }

    impl MessageSender for DropFlagBackend {
        fn send_message(&self, text: &str) -> Result<Message, SendMessageSourceError> {
            Ok(Message::new(text, "user"))
        }
    }

    #[test]
    fn dropping_idle_worker_joins_and_releases_backend() {
        let (event_tx, _event_rx) = mpsc::channel();
        let dropped = Arc::new(AtomicBool::new(false));
        let backend = DropFlagBackend {
            dropped: Arc::clone(&dropped),
        };
        let worker = RequestWorker::start(backend, event_tx).expect("worker must start");

        drop(worker);

        assert!(dropped.load(Ordering::SeqCst));
    }

    #[test]
    fn dropping_worker_after_answered_request_joins() {
        let (event_tx, event_rx) = mpsc::channel();
        let dropped = Arc::new(AtomicBool::new(false));
        let backend = DropFlagBackend {
            dropped: Arc::clone(&dropped),
        };
        let mut worker = RequestWorker::start(backend, event_tx).expect("worker must start");

        worker
            .dispatch(BackendRequest::FetchMessages)
            .expect("dispatch must succeed");
        event_rx.recv_timeout(RECV_TIMEOUT).expect("event expected");
        drop(worker);

        assert!(dropped.load(Ordering::SeqCst));
    }
}
