use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Gauge, Paragraph, Wrap};

use crate::core::view::{
    ChooseView, DetailedView, OptionItem, QuizView, ResultsView, View, price_label,
};
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{OptionList, ResultsCard, TitleBar};

/// Props the renderer needs besides the view itself.
pub struct Chrome<'a> {
    pub status_message: &'a str,
    pub currency: &'a str,
}

pub fn draw_ui(frame: &mut Frame, view: &View, chrome: &Chrome, tui: &mut TuiState) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Min(0), Length(1)]);
    let [title_area, main_area, help_area] = layout.areas(frame.area());

    TitleBar::new(heading(view), chrome.status_message.to_string()).render(frame, title_area);

    let body = inset(main_area);
    let actionable = view.actionable();
    match view {
        View::Choose(choose) => draw_choose(frame, body, choose, &actionable, tui),
        View::Quiz(quiz) => draw_quiz(frame, body, quiz, &actionable, tui),
        View::Detailed(detailed) => {
            draw_detailed(frame, body, detailed, chrome.currency, &actionable, tui)
        }
        View::Results(results) => {
            draw_results(frame, body, results, chrome.currency, &actionable, tui)
        }
    }

    let help = Paragraph::new(help_text(view))
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, help_area);
}

fn heading(view: &View) -> String {
    match view {
        View::Choose(_) => "Start".to_string(),
        View::Quiz(quiz) => format!("Question {} of {}", quiz.step_number, quiz.step_count),
        View::Detailed(_) => "Pick attractions".to_string(),
        View::Results(_) => "Your pass".to_string(),
    }
}

fn help_text(view: &View) -> &'static str {
    match view {
        View::Choose(_) => "↑↓ Move  Enter Select  1-9 Jump  q Quit",
        View::Quiz(_) => "↑↓ Move  Enter Select  1-9 Jump  Esc Start over  Ctrl+C Quit",
        View::Detailed(_) => "↑↓ Move  Space Toggle  1-9 Jump  Esc Start over  Ctrl+C Quit",
        View::Results(_) => "Enter Start over  r Reset  Ctrl+C Quit",
    }
}

/// Leave a one-column margin around the body.
fn inset(area: Rect) -> Rect {
    Rect {
        x: area.x.saturating_add(1),
        y: area.y.saturating_add(1),
        width: area.width.saturating_sub(2),
        height: area.height.saturating_sub(1),
    }
}

fn header_lines(title: &str, subtitle: Option<&str>) -> Vec<Line<'static>> {
    let mut lines = vec![Line::from(Span::styled(
        title.to_string(),
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
    ))];
    if let Some(subtitle) = subtitle {
        lines.push(Line::from(Span::styled(
            subtitle.to_string(),
            Style::default().fg(Color::DarkGray),
        )));
    }
    lines
}

fn draw_choose(
    frame: &mut Frame,
    area: Rect,
    view: &ChooseView,
    actionable: &[&OptionItem],
    tui: &mut TuiState,
) {
    use Constraint::{Length, Min};
    let [header_area, _, list_area] = Layout::vertical([Length(2), Length(1), Min(0)]).areas(area);

    let header = Paragraph::new(header_lines(&view.title, Some(view.subtitle.as_str())))
        .alignment(Alignment::Center);
    frame.render_widget(header, header_area);

    OptionList::new(&mut tui.options, actionable).render(frame, list_area);
}

fn draw_quiz(
    frame: &mut Frame,
    area: Rect,
    view: &QuizView,
    actionable: &[&OptionItem],
    tui: &mut TuiState,
) {
    use Constraint::{Length, Min};
    let [gauge_area, _, header_area, list_area, hint_area] =
        Layout::vertical([Length(1), Length(1), Length(3), Min(0), Length(1)]).areas(area);

    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(Color::Cyan).bg(Color::Black))
        .percent(view.progress_percent.min(100))
        .label(format!("Question {} of {}", view.step_number, view.step_count));
    frame.render_widget(gauge, gauge_area);

    let header = Paragraph::new(header_lines(&view.question, view.subtitle.as_deref()));
    frame.render_widget(header, header_area);

    OptionList::new(&mut tui.options, actionable).render(frame, list_area);

    // A disabled button is not focusable, so say why it is missing
    if let Some(button) = &view.continue_button
        && !button.enabled
    {
        let hint = Paragraph::new(format!("{} (select at least one interest)", button.label))
            .style(Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM));
        frame.render_widget(hint, hint_area);
    }
}

fn draw_detailed(
    frame: &mut Frame,
    area: Rect,
    view: &DetailedView,
    currency: &str,
    actionable: &[&OptionItem],
    tui: &mut TuiState,
) {
    use Constraint::{Length, Min};
    let [header_area, counter_area, list_area] =
        Layout::vertical([Length(2), Length(2), Min(0)]).areas(area);

    let header = Paragraph::new(header_lines(&view.title, Some(view.subtitle.as_str())));
    frame.render_widget(header, header_area);

    if view.selected_count > 0 {
        let counter = Paragraph::new(Line::from(vec![
            Span::styled(
                format!("{} attractions selected  ", view.selected_count),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                price_label(view.total_price, currency),
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                "  total if purchased separately",
                Style::default().fg(Color::DarkGray),
            ),
        ]))
        .wrap(Wrap { trim: true });
        frame.render_widget(counter, counter_area);
    }

    OptionList::new(&mut tui.options, actionable).render(frame, list_area);
}

fn draw_results(
    frame: &mut Frame,
    area: Rect,
    view: &ResultsView,
    currency: &str,
    actionable: &[&OptionItem],
    tui: &mut TuiState,
) {
    use Constraint::{Length, Min};
    let mut card = ResultsCard::new(view, currency);
    let card_height = card.required_height(area.width).min(area.height.saturating_sub(1));
    let [card_area, list_area] = Layout::vertical([Length(card_height), Min(0)]).areas(area);

    card.render(frame, card_area);
    OptionList::new(&mut tui.options, actionable).render(frame, list_area);
}
