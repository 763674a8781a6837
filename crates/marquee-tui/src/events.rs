//! Event handling for Marquee
//!
//! Turns raw crossterm events into application events.

use crate::ui::button::Activation;
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use futures::{Stream, StreamExt};
use std::io;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEvent {
    /// Leave the application (q, Esc, Ctrl+C)
    Quit,
    /// Switch between dark and light palettes
    ToggleTheme,
    /// Keyboard activation of the button
    Activate(Activation),
    /// Open the external link
    OpenLink,
    /// Left mouse button pressed at a cell
    Click { column: u16, row: u16 },
    /// Terminal was resized to new dimensions
    Resize(u16, u16),
    /// Nothing to do (timeout or ignored input)
    None,
}

#[derive(Debug, Clone)]
pub struct EventHandler {
    timeout: Duration,
}

impl EventHandler {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }

    /// Wait up to the configured timeout for the next terminal event.
    /// A closed stream means the terminal is gone, so it maps to `Quit`.
    pub async fn next_event<S>(&self, stream: &mut S) -> io::Result<AppEvent>
    where
        S: Stream<Item = io::Result<Event>> + Unpin,
    {
        tokio::select! {
            event = stream.next() => match event {
                Some(Ok(event)) => Ok(Self::map_event(event)),
                Some(Err(e)) => Err(e),
                None => Ok(AppEvent::Quit),
            },
            _ = tokio::time::sleep(self.timeout) => Ok(AppEvent::None),
        }
    }

    pub fn map_event(event: Event) -> AppEvent {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => Self::map_key(key),
            Event::Mouse(MouseEvent {
                kind: MouseEventKind::Down(MouseButton::Left),
                column,
                row,
                ..
            }) => AppEvent::Click { column, row },
            Event::Resize(width, height) => AppEvent::Resize(width, height),
            _ => AppEvent::None,
        }
    }

    fn map_key(key: KeyEvent) -> AppEvent {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => AppEvent::Quit,
            KeyCode::Char('q') | KeyCode::Esc => AppEvent::Quit,
            KeyCode::Char('t') | KeyCode::Char('T') => AppEvent::ToggleTheme,
            KeyCode::Char('o') | KeyCode::Char('O') => AppEvent::OpenLink,
            KeyCode::Enter | KeyCode::Char(' ') => AppEvent::Activate(Activation::Key(key.code)),
            _ => AppEvent::None,
        }
    }
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new(Duration::from_millis(50))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;
    use futures::stream;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> Event {
        Event::Key(KeyEvent::new(code, modifiers))
    }

    #[test]
    fn test_quit_keys() {
        for event in [
            key(KeyCode::Char('q'), KeyModifiers::NONE),
            key(KeyCode::Esc, KeyModifiers::NONE),
            key(KeyCode::Char('c'), KeyModifiers::CONTROL),
        ] {
            assert_eq!(EventHandler::map_event(event), AppEvent::Quit);
        }
        assert_eq!(
            EventHandler::map_event(key(KeyCode::Char('c'), KeyModifiers::NONE)),
            AppEvent::None
        );
    }

    #[test]
    fn test_activation_keys_carry_the_key() {
        assert_eq!(
            EventHandler::map_event(key(KeyCode::Enter, KeyModifiers::NONE)),
            AppEvent::Activate(Activation::Key(KeyCode::Enter))
        );
        assert_eq!(
            EventHandler::map_event(key(KeyCode::Char(' '), KeyModifiers::NONE)),
            AppEvent::Activate(Activation::Key(KeyCode::Char(' ')))
        );
    }

    #[test]
    fn test_key_release_is_ignored() {
        let release = Event::Key(KeyEvent {
            code: KeyCode::Enter,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        });
        assert_eq!(EventHandler::map_event(release), AppEvent::None);
    }

    #[test]
    fn test_resize_and_click() {
        assert_eq!(
            EventHandler::map_event(Event::Resize(120, 40)),
            AppEvent::Resize(120, 40)
        );

        let click = Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 7,
            row: 3,
            modifiers: KeyModifiers::NONE,
        });
        assert_eq!(
            EventHandler::map_event(click),
            AppEvent::Click { column: 7, row: 3 }
        );

        let right = Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Right),
            column: 7,
            row: 3,
            modifiers: KeyModifiers::NONE,
        });
        assert_eq!(EventHandler::map_event(right), AppEvent::None);
    }

    #[tokio::test]
    async fn test_idle_stream_times_out_to_none() {
        let handler = EventHandler::new(Duration::from_millis(5));
        let mut idle = stream::pending::<io::Result<Event>>();
        assert_eq!(handler.next_event(&mut idle).await.unwrap(), AppEvent::None);
    }

    #[tokio::test]
    async fn test_stream_events_are_mapped() {
        let handler = EventHandler::new(Duration::from_secs(5));
        let mut events = stream::iter(vec![
            Ok(Event::Resize(80, 24)),
            Ok(key(KeyCode::Char('t'), KeyModifiers::NONE)),
        ]);
        assert_eq!(
            handler.next_event(&mut events).await.unwrap(),
            AppEvent::Resize(80, 24)
        );
        assert_eq!(
            handler.next_event(&mut events).await.unwrap(),
            AppEvent::ToggleTheme
        );
        // Exhausted stream: the terminal is gone
        assert_eq!(handler.next_event(&mut events).await.unwrap(), AppEvent::Quit);
    }

    #[tokio::test]
    async fn test_stream_error_is_propagated() {
        let handler = EventHandler::default();
        let lost = io::Error::new(io::ErrorKind::BrokenPipe, "tty lost");
        let mut failing = stream::iter(vec![Err::<Event, _>(lost)]);
        assert!(handler.next_event(&mut failing).await.is_err());
    }
}
