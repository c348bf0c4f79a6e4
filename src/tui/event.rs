use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEventKind};

/// TUI-specific input events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TuiEvent {
    // Always handled by the event loop
    ForceQuit, // Ctrl+C
    Quit,
    Back, // Esc
    Reset,
    Resize,

    // Routed to the option list
    Submit, // Enter or Space
    CursorUp,
    CursorDown,
    Select(usize), // Digit shortcut, zero-based
}

/// Poll for an event without blocking (returns immediately)
pub fn poll_event_immediate() -> Option<TuiEvent> {
    poll_event_timeout(Duration::ZERO)
}

/// Poll for an event, blocking up to `timeout`.
pub fn poll_event_timeout(timeout: Duration) -> Option<TuiEvent> {
    match event::poll(timeout) {
        Ok(true) => {}
        Ok(false) => return None,
        Err(e) => {
            log::warn!("Event poll failed: {}", e);
            return None;
        }
    }
    match event::read() {
        Ok(event) => map_event(event),
        Err(e) => {
            log::warn!("Event read failed: {}", e);
            None
        }
    }
}

pub fn map_event(event: Event) -> Option<TuiEvent> {
    match event {
        Event::Key(key_event) => map_key(key_event),
        Event::Mouse(mouse_event) => match mouse_event.kind {
            MouseEventKind::ScrollUp => Some(TuiEvent::CursorUp),
            MouseEventKind::ScrollDown => Some(TuiEvent::CursorDown),
            _ => None,
        },
        Event::Resize(_, _) => Some(TuiEvent::Resize),
        _ => None,
    }
}

fn map_key(key_event: KeyEvent) -> Option<TuiEvent> {
    // Ignore release/repeat reports from terminals that send them
    if key_event.kind != KeyEventKind::Press {
        return None;
    }
    log::debug!(
        "Key event: {:?} with modifiers {:?}",
        key_event.code,
        key_event.modifiers
    );
    match (key_event.modifiers, key_event.code) {
        (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(TuiEvent::ForceQuit),
        (_, KeyCode::Char('q')) => Some(TuiEvent::Quit),
        (_, KeyCode::Char('r')) => Some(TuiEvent::Reset),
        (_, KeyCode::Esc) => Some(TuiEvent::Back),
        (_, KeyCode::Enter | KeyCode::Char(' ')) => Some(TuiEvent::Submit),
        (_, KeyCode::Up | KeyCode::BackTab | KeyCode::Char('k')) => Some(TuiEvent::CursorUp),
        (_, KeyCode::Down | KeyCode::Tab | KeyCode::Char('j')) => Some(TuiEvent::CursorDown),
        (_, KeyCode::Char(c)) => c
            .to_digit(10)
            .filter(|&d| d > 0)
            .map(|d| TuiEvent::Select(d as usize - 1)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_ctrl_c_is_force_quit() {
        let event = Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert_eq!(map_event(event), Some(TuiEvent::ForceQuit));
    }

    #[test]
    fn test_navigation_keys() {
        assert_eq!(map_event(key(KeyCode::Up)), Some(TuiEvent::CursorUp));
        assert_eq!(map_event(key(KeyCode::Char('j'))), Some(TuiEvent::CursorDown));
        assert_eq!(map_event(key(KeyCode::Enter)), Some(TuiEvent::Submit));
        assert_eq!(map_event(key(KeyCode::Char(' '))), Some(TuiEvent::Submit));
        assert_eq!(map_event(key(KeyCode::Esc)), Some(TuiEvent::Back));
    }

    #[test]
    fn test_digits_are_zero_based_shortcuts() {
        assert_eq!(map_event(key(KeyCode::Char('1'))), Some(TuiEvent::Select(0)));
        assert_eq!(map_event(key(KeyCode::Char('9'))), Some(TuiEvent::Select(8)));
        assert_eq!(map_event(key(KeyCode::Char('0'))), None);
        assert_eq!(map_event(key(KeyCode::Char('x'))), None);
    }

    #[test]
    fn test_key_release_ignored() {
        let mut release = KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE);
        release.kind = KeyEventKind::Release;
        assert_eq!(map_event(Event::Key(release)), None);
    }

    #[test]
    fn test_resize() {
        assert_eq!(map_event(Event::Resize(80, 24)), Some(TuiEvent::Resize));
    }
}
