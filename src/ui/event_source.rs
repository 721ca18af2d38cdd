use std::{
    sync::mpsc::{Receiver, TryRecvError},
    time::Duration,
};

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::{
    domain::events::{AppEvent, KeyInput},
    usecases::contracts::AppEventSource,
};

const EVENT_POLL_TIMEOUT: Duration = Duration::from_millis(100);
const RESULT_CHANNEL_CLOSED: &str = "UI_RESULT_CHANNEL_CLOSED";

#[derive(Default)]
pub struct CrosstermEventSource;

impl AppEventSource for CrosstermEventSource {
    fn next_event(&mut self) -> Result<Option<AppEvent>> {
        if !event::poll(EVENT_POLL_TIMEOUT)? {
            return Ok(Some(AppEvent::Tick));
        }

        match event::read()? {
            Event::Key(key) => Ok(map_key_event(key)),
            Event::Resize(_, _) => Ok(Some(AppEvent::Tick)),
            _ => Ok(None),
        }
    }
}

/// Translates a terminal key press into an app event.
pub fn map_key_event(key: KeyEvent) -> Option<AppEvent> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    if key.code == KeyCode::Esc || (ctrl && key.code == KeyCode::Char('c')) {
        return Some(AppEvent::QuitRequested);
    }

    let name = match key.code {
        KeyCode::Char(ch) => ch.to_string(),
        KeyCode::Enter => "enter".to_owned(),
        KeyCode::Backspace => "backspace".to_owned(),
        KeyCode::Delete => "delete".to_owned(),
        KeyCode::Left => "left".to_owned(),
        KeyCode::Right => "right".to_owned(),
        KeyCode::Home => "home".to_owned(),
        KeyCode::End => "end".to_owned(),
        KeyCode::Up => "up".to_owned(),
        KeyCode::Down => "down".to_owned(),
        KeyCode::PageUp => "pageup".to_owned(),
        KeyCode::PageDown => "pagedown".to_owned(),
        _ => return None,
    };

    Some(AppEvent::InputKey(KeyInput::new(name, ctrl)))
}

/// Merges request results from the worker with terminal input.
///
/// Pending results are drained before the terminal is polled, so a reply is
/// never delayed behind keyboard input.
pub struct ShellEventSource {
    results: Receiver<AppEvent>,
    terminal: CrosstermEventSource,
    results_closed: bool,
}

impl ShellEventSource {
    pub fn new(results: Receiver<AppEvent>) -> Self {
        Self {
            results,
            terminal: CrosstermEventSource,
            results_closed: false,
        }
    }

    fn next_result(&mut self) -> Option<AppEvent> {
        if self.results_closed {
            return None;
        }

        match self.results.try_recv() {
            Ok(event) => Some(event),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => {
                tracing::warn!(
                    code = RESULT_CHANNEL_CLOSED,
                    "request worker result channel closed"
                );
                self.results_closed = true;
                None
            }
        }
    }
}

impl AppEventSource for ShellEventSource {
    fn next_event(&mut self) -> Result<Option<AppEvent>> {
        if let Some(event) = self.next_result() {
            return Ok(Some(event));
        }

        self.terminal.next_event()
    }
}

#[cfg(test)]
pub struct MockEventSource {
    queue: std::collections::VecDeque<AppEvent>,
}

#[cfg(test)]
impl MockEventSource {
    pub fn from(events: Vec<AppEvent>) -> Self {
        Self {
            queue: events.into(),
        }
    }
}

#[cfg(test)]
impl AppEventSource for MockEventSource {
    fn next_event(&mut self) -> Result<Option<AppEvent>> {
        Ok(self.queue.pop_front())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::mpsc;

    use super::*;
    use crate::domain::message::Message;

    fn press(code: KeyCode, modifiers: KeyModifiers) -> Option<AppEvent> {
        map_key_event(KeyEvent::new(code, modifiers))
    }

    #[test]
    fn esc_and_ctrl_c_quit() {
        assert_eq!(
            press(KeyCode::Esc, KeyModifiers::NONE),
            Some(AppEvent::QuitRequested)
        );
        assert_eq!(
            press(KeyCode::Char('c'), KeyModifiers::CONTROL),
            Some(AppEvent::QuitRequested)
        );
    }

    #[test]
    fn q_is_typed_not_quit() {
        assert_eq!(
            press(KeyCode::Char('q'), KeyModifiers::NONE),
            Some(AppEvent::InputKey(KeyInput::new("q", false)))
        );
    }

    #[test]
    fn named_keys_map_to_names() {
        assert_eq!(
            press(KeyCode::Enter, KeyModifiers::NONE),
            Some(AppEvent::InputKey(KeyInput::new("enter", false)))
        );
        assert_eq!(
            press(KeyCode::PageUp, KeyModifiers::NONE),
            Some(AppEvent::InputKey(KeyInput::new("pageup", false)))
        );
    }

    #[test]
    fn ctrl_modifier_is_kept() {
        assert_eq!(
            press(KeyCode::Char('r'), KeyModifiers::CONTROL),
            Some(AppEvent::InputKey(KeyInput::new("r", true)))
        );
    }

    #[test]
    fn key_release_is_ignored() {
        let mut key = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE);
        key.kind = KeyEventKind::Release;

        assert_eq!(map_key_event(key), None);
    }

    #[test]
    fn unsupported_keys_are_ignored() {
        assert_eq!(press(KeyCode::Tab, KeyModifiers::NONE), None);
    }

    #[test]
    fn shell_source_delivers_pending_results_first() {
        let (tx, rx) = mpsc::channel();
        let mut source = ShellEventSource::new(rx);
        let event = AppEvent::MessageSent(Ok(Message::new("hi", "user")));
        tx.send(event.clone()).expect("channel open");

        assert_eq!(source.next_result(), Some(event));
        assert_eq!(source.next_result(), None);
    }

    #[test]
    fn shell_source_tolerates_closed_result_channel() {
        let (tx, rx) = mpsc::channel::<AppEvent>();
        let mut source = ShellEventSource::new(rx);
        drop(tx);

        assert_eq!(source.next_result(), None);
        assert!(source.results_closed);
    }
}
