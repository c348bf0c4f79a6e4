//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the `View`
//! produced by `core::view::render`, and translates key presses into
//! `core::Action` values.
//!
//! This is the only module that knows about ratatui and crossterm. It never
//! decides what a key *means* for the pass finder: the focused `OptionItem`
//! already carries its action.
//!
//! ## Redraw Strategy
//!
//! Nothing animates, so the loop sleeps up to 500ms and only redraws after
//! an event. All pending events are drained before the next frame.

mod component;
mod components;
mod event;
mod ui;

use log::{debug, info};
use std::io::stdout;
use std::time::Duration;

use crossterm::cursor::{Hide, Show};
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;

use crate::core::action::{Action, Effect, update};
use crate::core::state::{App, Screen};
use crate::core::view::render;
use crate::tui::component::EventHandler;
use crate::tui::components::{ListEvent, OptionListState};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

const IDLE_POLL: Duration = Duration::from_millis(500);

/// TUI-specific presentation state (not part of core business logic)
#[derive(Debug, Default)]
pub struct TuiState {
    pub options: OptionListState,
}

impl TuiState {
    pub fn new() -> Self {
        Self::default()
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), EnableMouseCapture, Hide)?;
        info!("Terminal modes enabled (mouse, hidden cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture, Show);
    }
}

pub fn run(mut app: App) -> std::io::Result<()> {
    let mut tui = TuiState::new();
    tui.options.set_len(render(&app).actionable().len());

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    let mut needs_redraw = true; // Force first frame
    let result = loop {
        if needs_redraw {
            let view = render(&app);
            let chrome = ui::Chrome {
                status_message: &app.status_message,
                currency: &app.currency_symbol,
            };
            if let Err(e) = terminal.draw(|f| ui::draw_ui(f, &view, &chrome, &mut tui)) {
                break Err(e);
            }
            needs_redraw = false;
        }

        let first_event = poll_event_timeout(IDLE_POLL);
        if first_event.is_some() {
            needs_redraw = true;
        }

        let mut should_quit = false;
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            if handle_event(&mut app, &mut tui, event) {
                should_quit = true;
                break;
            }
        }

        if should_quit {
            break Ok(());
        }
    };

    info!("Leaving on screen {}", app.screen);
    ratatui::restore();
    result
}

/// Apply one terminal event. Returns `true` when the app should exit.
fn handle_event(app: &mut App, tui: &mut TuiState, event: TuiEvent) -> bool {
    let action = match event {
        // Resize just needs a redraw
        TuiEvent::Resize => return false,
        // Ctrl+C always quits
        TuiEvent::ForceQuit => Action::Quit,
        // `q` would be too easy to hit mid-flow
        TuiEvent::Quit if app.screen == Screen::Choose => Action::Quit,
        TuiEvent::Quit => return false,
        TuiEvent::Back if app.screen == Screen::Choose => return false,
        TuiEvent::Back | TuiEvent::Reset => Action::Reset,
        TuiEvent::Submit | TuiEvent::CursorUp | TuiEvent::CursorDown | TuiEvent::Select(_) => {
            match tui.options.handle_event(&event) {
                Some(ListEvent::Activate(index)) => {
                    let view = render(app);
                    let actionable = view.actionable();
                    match actionable.get(index) {
                        Some(item) => item.action.clone(),
                        None => return false,
                    }
                }
                None => return false,
            }
        }
    };

    debug!("Key event {:?} dispatches {}", event, action);
    let before = app.screen;
    let effect = update(app, action);
    if effect == Effect::Quit {
        return true;
    }

    if app.screen != before {
        tui.options.reset();
    }
    tui.options.set_len(render(app).actionable().len());
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::PassKey;
    use crate::core::recommend::recommend;
    use crate::core::state::{Interest, QuizStep};
    use crate::test_support::{app_on, test_app};

    fn tui_for(app: &App) -> TuiState {
        let mut tui = TuiState::new();
        tui.options.set_len(render(app).actionable().len());
        tui
    }

    fn press(app: &mut App, tui: &mut TuiState, events: &[TuiEvent]) -> bool {
        events.iter().any(|e| handle_event(app, tui, *e))
    }

    #[test]
    fn test_quiz_flow_with_keys() {
        let mut app = test_app();
        let mut tui = tui_for(&app);

        // Quick Quiz, then "3-4 days"
        press(&mut app, &mut tui, &[TuiEvent::Submit, TuiEvent::Select(1)]);
        assert_eq!(app.selections.days, Some(3));
        assert_eq!(app.screen, Screen::Quiz(QuizStep::Interests));
        assert_eq!(tui.options.selected, 0);

        // Museums, then Continue (fifth item once an interest is chosen)
        press(
            &mut app,
            &mut tui,
            &[TuiEvent::CursorDown, TuiEvent::Submit, TuiEvent::Select(4)],
        );
        assert_eq!(app.selections.interests, vec![Interest::Museums]);
        assert_eq!(app.screen, Screen::Quiz(QuizStep::Budget));

        press(&mut app, &mut tui, &[TuiEvent::Select(0)]);
        assert_eq!(app.screen, Screen::Results);
        assert_eq!(app.selections.attractions, vec!["met", "moma", "amnh", "intrepid"]);
        assert_eq!(recommend(&app.selections), PassKey::CityPass);
        assert_eq!(tui.options.len, 1);
    }

    #[test]
    fn test_detailed_flow_with_keys() {
        let mut app = test_app();
        let mut tui = tui_for(&app);

        press(&mut app, &mut tui, &[TuiEvent::CursorDown, TuiEvent::Submit]);
        assert_eq!(app.screen, Screen::Detailed);
        assert_eq!(tui.options.len, 10);

        press(&mut app, &mut tui, &[TuiEvent::Select(0), TuiEvent::Select(3)]);
        assert_eq!(app.selections.attractions, vec!["esb", "met"]);
        // Show results button appears after the ten cards
        assert_eq!(tui.options.len, 11);

        press(&mut app, &mut tui, &[TuiEvent::Select(0)]);
        assert_eq!(app.selections.attractions, vec!["met"]);
    }

    #[test]
    fn test_quit_only_on_choose_screen() {
        let mut app = app_on(Screen::Detailed);
        let mut tui = tui_for(&app);
        assert!(!handle_event(&mut app, &mut tui, TuiEvent::Quit));
        assert_eq!(app.screen, Screen::Detailed);

        let mut app = test_app();
        let mut tui = tui_for(&app);
        assert!(handle_event(&mut app, &mut tui, TuiEvent::Quit));
    }

    #[test]
    fn test_force_quit_anywhere() {
        let mut app = app_on(Screen::Quiz(QuizStep::Budget));
        let mut tui = tui_for(&app);
        assert!(handle_event(&mut app, &mut tui, TuiEvent::ForceQuit));
    }

    #[test]
    fn test_escape_and_reset_return_to_choose() {
        let mut app = app_on(Screen::Detailed);
        let mut tui = tui_for(&app);
        press(&mut app, &mut tui, &[TuiEvent::Select(2), TuiEvent::Back]);
        assert_eq!(app.screen, Screen::Choose);
        assert!(app.selections.attractions.is_empty());
        assert_eq!(tui.options.len, 2);

        // Esc on the choose screen does nothing
        assert!(!handle_event(&mut app, &mut tui, TuiEvent::Back));
        assert_eq!(app.screen, Screen::Choose);

        let mut app = app_on(Screen::Results);
        let mut tui = tui_for(&app);
        press(&mut app, &mut tui, &[TuiEvent::Reset]);
        assert_eq!(app.screen, Screen::Choose);
    }

    #[test]
    fn test_resize_and_unknown_digit_are_noops() {
        let mut app = test_app();
        let mut tui = tui_for(&app);
        assert!(!press(
            &mut app,
            &mut tui,
            &[TuiEvent::Resize, TuiEvent::Select(7)]
        ));
        assert_eq!(app.screen, Screen::Choose);
    }
}
