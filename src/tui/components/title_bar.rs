//! # TitleBar Component
//!
//! Top status bar showing where the user is and the latest status message.
//!
//! ## Conditional Formatting
//!
//! 1. **Status message**: `"NYC Pass Finder | Question 2 of 3 | Pick at least one interest"`
//! 2. **Default**: `"NYC Pass Finder | Question 2 of 3"`
//!
//! Rejections land in the status message, so they are visible on the line
//! the user is already looking at.

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

const APP_TITLE: &str = "NYC Pass Finder";

/// Top status bar component.
///
/// # Props
///
/// - `heading`: Screen description (e.g. "Question 2 of 3", "Your pass")
/// - `status_message`: Transient status from the core app state
pub struct TitleBar {
    pub heading: String,
    pub status_message: String,
}

impl TitleBar {
    pub fn new(heading: String, status_message: String) -> Self {
        Self {
            heading,
            status_message,
        }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut spans = vec![
            Span::styled(
                APP_TITLE,
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            ),
            Span::raw(" | "),
            Span::raw(self.heading.as_str()),
        ];
        if !self.status_message.is_empty() {
            spans.push(Span::raw(" | "));
            spans.push(Span::styled(
                self.status_message.as_str(),
                Style::default().fg(Color::Cyan),
            ));
        }

        frame.render_widget(Line::from(spans), area);
    }
}
