//! # Option List Component
//!
//! Focusable list of the current view's actionable items (quiz answers,
//! attraction cards, buttons). Up/Down move the focus, Enter/Space
//! activates it, digits jump straight to an item.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `OptionListState` lives in `TuiState`
//! - `OptionList` is created each frame with borrowed state and items
//!
//! The list never dispatches anything itself. It emits
//! `ListEvent::Activate(index)` and the event loop looks up the action.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{List, ListItem, ListState};
use unicode_width::UnicodeWidthStr;

use crate::core::view::OptionItem;
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

/// Display columns reserved for the icon so labels line up.
const ICON_COLUMN: usize = 3;
/// "9. " shortcut prefix + icon column.
const DESCRIPTION_INDENT: usize = 3 + ICON_COLUMN;

/// Persistent focus state for the option list.
#[derive(Debug, Default)]
pub struct OptionListState {
    pub selected: usize,
    pub len: usize,
    pub list_state: ListState,
}

impl OptionListState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Update the item count, clamping the focus into range.
    pub fn set_len(&mut self, len: usize) {
        self.len = len;
        self.selected = self.selected.min(len.saturating_sub(1));
        self.list_state
            .select(if len == 0 { None } else { Some(self.selected) });
    }

    /// Move focus back to the top (used when the screen changes).
    pub fn reset(&mut self) {
        self.selected = 0;
        self.list_state = ListState::default();
        self.set_len(self.len);
    }
}

/// Events emitted by the option list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListEvent {
    Activate(usize),
}

impl EventHandler for OptionListState {
    type Event = ListEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<ListEvent> {
        if self.len == 0 {
            return None;
        }
        match event {
            TuiEvent::CursorUp => {
                self.selected = self.selected.saturating_sub(1);
                self.list_state.select(Some(self.selected));
                None
            }
            TuiEvent::CursorDown => {
                self.selected = (self.selected + 1).min(self.len - 1);
                self.list_state.select(Some(self.selected));
                None
            }
            TuiEvent::Submit => Some(ListEvent::Activate(self.selected)),
            TuiEvent::Select(index) if *index < self.len => {
                self.selected = *index;
                self.list_state.select(Some(self.selected));
                Some(ListEvent::Activate(*index))
            }
            _ => None,
        }
    }
}

/// Transient render wrapper for the option list.
pub struct OptionList<'a> {
    state: &'a mut OptionListState,
    items: &'a [&'a OptionItem],
}

impl<'a> OptionList<'a> {
    pub fn new(state: &'a mut OptionListState, items: &'a [&'a OptionItem]) -> Self {
        Self { state, items }
    }
}

impl Component for OptionList<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let description_width = (area.width as usize).saturating_sub(DESCRIPTION_INDENT + 1);

        let list_items: Vec<ListItem> = self
            .items
            .iter()
            .enumerate()
            .map(|(i, item)| {
                let focused = i == self.state.selected;
                option_lines(item, i, focused, description_width)
            })
            .map(ListItem::new)
            .collect();

        frame.render_stateful_widget(List::new(list_items), area, &mut self.state.list_state);
    }
}

/// Label line plus wrapped description lines for one item.
fn option_lines(item: &OptionItem, index: usize, focused: bool, width: usize) -> Vec<Line<'static>> {
    let label_style = if focused {
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD | Modifier::REVERSED)
    } else if item.selected {
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };

    let shortcut = if index < 9 {
        format!("{}. ", index + 1)
    } else {
        "   ".to_string()
    };
    let icon_pad = ICON_COLUMN.saturating_sub(item.icon.width());

    let mut label = vec![
        Span::styled(shortcut, Style::default().fg(Color::DarkGray)),
        Span::raw(format!("{}{}", item.icon, " ".repeat(icon_pad))),
        Span::styled(item.label.clone(), label_style),
    ];
    if item.selected {
        label.push(Span::styled(" ✓", Style::default().fg(Color::Green)));
    }

    let mut lines = vec![Line::from(label)];
    if !item.description.is_empty() && width > 0 {
        let indent = " ".repeat(DESCRIPTION_INDENT);
        for wrapped in textwrap::wrap(&item.description, width) {
            lines.push(Line::from(Span::styled(
                format!("{indent}{wrapped}"),
                Style::default().fg(Color::DarkGray),
            )));
        }
    }
    lines
}
