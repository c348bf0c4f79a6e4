//! # View Model
//!
//! `render(&App) -> View` turns the current state into a plain data
//! description of the screen. Front ends draw it; they never inspect `App`
//! or re-derive the rules.
//!
//! ```text
//! App  →  render()  →  View::Choose | Quiz | Detailed | Results
//!                            │
//!                            └── OptionItem { label, selected, enabled, action }
//! ```
//!
//! Each interactive element carries the `Action` it triggers, so a front end
//! only needs `View::actionable()` and `update()`.

use serde::Serialize;

use crate::core::action::Action;
use crate::core::catalog::PassKey;
use crate::core::recommend::evaluate;
use crate::core::state::{App, BudgetStyle, Interest, QuizStep, Screen};

/// An interactive card or button.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptionItem {
    pub icon: String,
    pub label: String,
    pub description: String,
    pub selected: bool,
    pub enabled: bool,
    pub action: Action,
}

impl OptionItem {
    fn new(icon: &str, label: &str, description: &str, action: Action) -> Self {
        Self {
            icon: icon.to_string(),
            label: label.to_string(),
            description: description.to_string(),
            selected: false,
            enabled: true,
            action,
        }
    }

    fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChooseView {
    pub title: String,
    pub subtitle: String,
    pub options: Vec<OptionItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuizView {
    pub step: QuizStep,
    /// 1-based, for "Question 2 of 3".
    pub step_number: usize,
    pub step_count: usize,
    pub progress_percent: u16,
    pub question: String,
    pub subtitle: Option<String>,
    pub options: Vec<OptionItem>,
    /// Only on the interests step.
    pub continue_button: Option<OptionItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetailedView {
    pub title: String,
    pub subtitle: String,
    pub items: Vec<OptionItem>,
    pub selected_count: usize,
    pub total_price: u32,
    /// Present once at least one attraction is selected.
    pub show_results: Option<OptionItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultsView {
    pub pass_key: PassKey,
    pub pass_name: String,
    pub savings_label: String,
    pub price: u32,
    pub total_price: u32,
    pub savings: Option<u32>,
    pub inclusions: Vec<String>,
    pub valid_days: u32,
    /// Names of the selected attractions, in selection order.
    pub selected: Vec<String>,
    pub start_over: OptionItem,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum View {
    Choose(ChooseView),
    Quiz(QuizView),
    Detailed(DetailedView),
    Results(ResultsView),
}

impl View {
    /// Enabled interactive items in display order.
    pub fn actionable(&self) -> Vec<&OptionItem> {
        let items: Vec<&OptionItem> = match self {
            View::Choose(view) => view.options.iter().collect(),
            View::Quiz(view) => view
                .options
                .iter()
                .chain(view.continue_button.as_ref())
                .collect(),
            View::Detailed(view) => view
                .items
                .iter()
                .chain(view.show_results.as_ref())
                .collect(),
            View::Results(view) => vec![&view.start_over],
        };
        items.into_iter().filter(|item| item.enabled).collect()
    }
}

struct DayOption {
    days: u32,
    label: &'static str,
    subtitle: &'static str,
}

const DAY_OPTIONS: [DayOption; 4] = [
    DayOption { days: 2, label: "1-2 days", subtitle: "Quick trip" },
    DayOption { days: 3, label: "3-4 days", subtitle: "Long weekend" },
    DayOption { days: 5, label: "5-7 days", subtitle: "Full week" },
    DayOption { days: 8, label: "8+ days", subtitle: "Extended stay" },
];

fn interest_card(interest: Interest) -> (&'static str, &'static str, &'static str) {
    match interest {
        Interest::Views => ("🏙️", "Skyline Views", "Empire State, Top of the Rock"),
        Interest::Museums => ("🎨", "Museums & Art", "The Met, MoMA, Natural History"),
        Interest::Landmarks => ("🗽", "Iconic Landmarks", "Statue of Liberty, 9/11 Memorial"),
        Interest::Family => ("👪", "Family Activities", "Kid-friendly attractions"),
    }
}

fn budget_card(budget: BudgetStyle) -> (&'static str, &'static str, &'static str) {
    match budget {
        BudgetStyle::Budget => ("💰", "Budget-Conscious", "Maximum savings is my priority"),
        BudgetStyle::Balanced => ("⚖️", "Balanced", "Good value with flexibility"),
        BudgetStyle::Premium => ("✨", "Premium Experience", "See everything, skip lines"),
    }
}

/// "Free" for zero, otherwise the amount behind the currency symbol.
pub fn price_label(price: u32, currency: &str) -> String {
    if price == 0 {
        "Free".to_string()
    } else {
        format!("{currency}{price}")
    }
}

pub fn render(app: &App) -> View {
    match app.screen {
        Screen::Choose => View::Choose(render_choose()),
        Screen::Quiz(step) => View::Quiz(render_quiz(app, step)),
        Screen::Detailed => View::Detailed(render_detailed(app)),
        Screen::Results => View::Results(render_results(app)),
    }
}

fn render_choose() -> ChooseView {
    ChooseView {
        title: "Find Your Perfect NYC Pass".to_string(),
        subtitle: "Save up to 50% on top NYC attractions".to_string(),
        options: vec![
            OptionItem::new(
                "🎯",
                "Quick Quiz",
                "Answer 3 quick questions and we'll recommend the best pass",
                Action::StartQuiz,
            ),
            OptionItem::new(
                "🎨",
                "Pick Attractions",
                "Select exactly what you want to see and we'll calculate savings",
                Action::StartDetailed,
            ),
        ],
    }
}

fn render_quiz(app: &App, step: QuizStep) -> QuizView {
    let selections = &app.selections;
    let (question, subtitle, options, continue_button) = match step {
        QuizStep::Days => {
            let options: Vec<OptionItem> = DAY_OPTIONS
                .iter()
                .map(|opt| {
                    OptionItem::new("📅", opt.label, opt.subtitle, Action::SelectDays(opt.days))
                        .selected(selections.days == Some(opt.days))
                })
                .collect();
            ("How many days are you visiting NYC?", None, options, None)
        }
        QuizStep::Interests => {
            let options: Vec<OptionItem> = Interest::ALL
                .into_iter()
                .map(|interest| {
                    let (icon, label, description) = interest_card(interest);
                    OptionItem::new(icon, label, description, Action::ToggleInterest(interest))
                        .selected(selections.has_interest(interest))
                })
                .collect();
            let continue_button = OptionItem::new("→", "Continue", "", Action::ContinueQuiz)
                .enabled(!selections.interests.is_empty());
            (
                "What interests you most?",
                Some("Select all that apply"),
                options,
                Some(continue_button),
            )
        }
        QuizStep::Budget => {
            let options: Vec<OptionItem> = BudgetStyle::ALL
                .into_iter()
                .map(|budget| {
                    let (icon, label, description) = budget_card(budget);
                    OptionItem::new(icon, label, description, Action::FinishQuiz(budget))
                })
                .collect();
            (
                "What's your budget style?",
                Some("This helps us recommend the right pass"),
                options,
                None,
            )
        }
    };

    let step_number = step.index() + 1;
    QuizView {
        step,
        step_number,
        step_count: QuizStep::COUNT,
        progress_percent: (step_number * 100 / QuizStep::COUNT) as u16,
        question: question.to_string(),
        subtitle: subtitle.map(str::to_string),
        options,
        continue_button,
    }
}

fn render_detailed(app: &App) -> DetailedView {
    let selections = &app.selections;
    let items = app
        .catalog
        .attractions
        .iter()
        .map(|attraction| {
            OptionItem::new(
                &attraction.icon,
                &attraction.name,
                &price_label(attraction.price, &app.currency_symbol),
                Action::ToggleAttraction(attraction.id.clone()),
            )
            .selected(selections.has_attraction(&attraction.id))
        })
        .collect();

    let selected_count = selections.attractions.len();
    let show_results = (selected_count > 0).then(|| {
        OptionItem::new("→", "Show Me the Best Pass", "", Action::ShowResults)
    });

    DetailedView {
        title: "Select Your Attractions".to_string(),
        subtitle: "Pick what you want to see and we'll show you the best pass".to_string(),
        items,
        selected_count,
        total_price: crate::core::recommend::total_price(selections, &app.catalog),
        show_results,
    }
}

fn render_results(app: &App) -> ResultsView {
    let recommendation = evaluate(&app.selections, &app.catalog);
    let pass = recommendation.pass;
    let selected = app
        .selections
        .attractions
        .iter()
        .filter_map(|id| app.catalog.attraction(id))
        .map(|a| a.name.clone())
        .collect();

    ResultsView {
        pass_key: recommendation.key,
        pass_name: pass.name.clone(),
        savings_label: pass.savings_label.clone(),
        price: pass.price,
        total_price: recommendation.total_price,
        savings: recommendation.savings,
        inclusions: pass.attractions.clone(),
        valid_days: pass.valid_days,
        selected,
        start_over: OptionItem::new("←", "Start over", "", Action::Reset),
    }
}
