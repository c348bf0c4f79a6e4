//! # Results Card Component
//!
//! The recommended pass: name, price, savings, what's included and how
//! long it is valid. Stateless; all data comes from the `ResultsView` prop.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Padding, Paragraph, Wrap};

use crate::core::view::{ResultsView, price_label};
use crate::tui::component::Component;

pub struct ResultsCard<'a> {
    pub view: &'a ResultsView,
    pub currency: &'a str,
}

impl<'a> ResultsCard<'a> {
    pub fn new(view: &'a ResultsView, currency: &'a str) -> Self {
        Self { view, currency }
    }

    fn paragraph(&self) -> Paragraph<'a> {
        let view = self.view;
        let muted = Style::default().fg(Color::DarkGray);

        let mut lines = vec![
            Line::from(Span::styled(
                view.pass_name.clone(),
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            )),
            Line::from(vec![
                Span::styled(
                    price_label(view.price, self.currency),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::styled(" per person  ", muted),
                Span::styled(view.savings_label.clone(), Style::default().fg(Color::Green)),
            ]),
            Line::default(),
        ];

        match view.savings {
            Some(savings) => {
                lines.push(Line::from(Span::styled(
                    format!("💰 You'll save {}{savings}", self.currency),
                    Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
                )));
                lines.push(Line::from(Span::styled(
                    format!(
                        "   {}{} separately vs. {}{} with the pass",
                        self.currency, view.total_price, self.currency, view.price
                    ),
                    muted,
                )));
                lines.push(Line::default());
            }
            None if view.total_price > 0 => {
                lines.push(Line::from(Span::styled(
                    format!(
                        "Tickets bought separately: {}{}",
                        self.currency, view.total_price
                    ),
                    muted,
                )));
                lines.push(Line::default());
            }
            None => {}
        }

        lines.push(Line::from(Span::styled("What's included:", muted)));
        for inclusion in &view.inclusions {
            lines.push(Line::from(vec![
                Span::styled("  ✓ ", Style::default().fg(Color::Green)),
                Span::raw(inclusion.clone()),
            ]));
        }

        if !view.selected.is_empty() {
            lines.push(Line::default());
            lines.push(Line::from(vec![
                Span::styled("Your picks: ", muted),
                Span::raw(view.selected.join(", ")),
            ]));
        }

        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            format!("Valid for {} days from first use", view.valid_days),
            muted,
        )));

        Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Yellow))
                    .title(" 🎉 We Recommend ")
                    .title_alignment(Alignment::Center)
                    .padding(Padding::horizontal(1)),
            )
            .wrap(Wrap { trim: false })
    }

    /// Rows the card needs at the given width, borders included.
    pub fn required_height(&self, width: u16) -> u16 {
        self.paragraph().line_count(width) as u16
    }
}

impl Component for ResultsCard<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_widget(self.paragraph(), area);
    }
}
