//! # Application State
//!
//! Core selection state for the pass finder. Domain logic only, no
//! TUI-specific types. Presentation state lives in the `tui` module.
//!
//! ```text
//! App
//! ├── catalog: Arc<Catalog>          // reference data
//! ├── screen: Screen                 // Choose | Quiz(step) | Detailed | Results
//! ├── selections: Selections         // days, interests, attractions, budget
//! ├── max_auto_attractions: usize    // quiz auto-selection cap
//! ├── currency_symbol: String        // price prefix
//! └── status_message: String         // status bar text
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.
//! Fields of `Selections` that the current screen does not use may hold
//! values from an earlier flow. Only `reset` clears them.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::core::catalog::{Catalog, Category};
use crate::core::config::ResolvedConfig;

/// Default cap on attractions auto-selected when the quiz finishes.
pub const DEFAULT_MAX_AUTO_ATTRACTIONS: usize = 5;
pub const DEFAULT_CURRENCY_SYMBOL: &str = "$";

/// Interest tags offered by the quiz.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Interest {
    Views,
    Museums,
    Landmarks,
    Family,
}

impl Interest {
    pub const ALL: [Interest; 4] = [
        Interest::Views,
        Interest::Museums,
        Interest::Landmarks,
        Interest::Family,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Interest::Views => "views",
            Interest::Museums => "museums",
            Interest::Landmarks => "landmarks",
            Interest::Family => "family",
        }
    }

    /// The attraction category this interest selects, if any.
    /// `Family` is a quiz answer only; no attraction carries it.
    pub fn category(self) -> Option<Category> {
        match self {
            Interest::Views => Some(Category::Views),
            Interest::Museums => Some(Category::Museums),
            Interest::Landmarks => Some(Category::Landmarks),
            Interest::Family => None,
        }
    }
}

impl FromStr for Interest {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Interest::ALL
            .into_iter()
            .find(|i| i.as_str() == s)
            .ok_or(())
    }
}

/// Answer to the last quiz question. Recorded, never used for the recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BudgetStyle {
    Budget,
    Balanced,
    Premium,
}

impl BudgetStyle {
    pub const ALL: [BudgetStyle; 3] = [
        BudgetStyle::Budget,
        BudgetStyle::Balanced,
        BudgetStyle::Premium,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            BudgetStyle::Budget => "budget",
            BudgetStyle::Balanced => "balanced",
            BudgetStyle::Premium => "premium",
        }
    }
}

impl FromStr for BudgetStyle {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BudgetStyle::ALL
            .into_iter()
            .find(|b| b.as_str() == s)
            .ok_or(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuizStep {
    Days,
    Interests,
    Budget,
}

impl QuizStep {
    pub const COUNT: usize = 3;

    /// Zero-based position in the quiz.
    pub fn index(self) -> usize {
        match self {
            QuizStep::Days => 0,
            QuizStep::Interests => 1,
            QuizStep::Budget => 2,
        }
    }
}

/// Which screen is active. The quiz step only exists while in the quiz.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Screen {
    #[default]
    Choose,
    Quiz(QuizStep),
    Detailed,
    Results,
}

impl Screen {
    pub fn name(self) -> &'static str {
        match self {
            Screen::Choose => "choose",
            Screen::Quiz(_) => "quiz",
            Screen::Detailed => "detailed",
            Screen::Results => "results",
        }
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Screen::Quiz(step) => write!(f, "quiz (step {})", step.index()),
            other => f.write_str(other.name()),
        }
    }
}

/// The user's choices so far.
///
/// `interests` and `attractions` behave as sets that remember insertion
/// order. Order matters only for display.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Selections {
    pub days: Option<u32>,
    pub interests: Vec<Interest>,
    pub attractions: Vec<String>,
    pub budget: Option<BudgetStyle>,
}

impl Selections {
    pub fn has_interest(&self, interest: Interest) -> bool {
        self.interests.contains(&interest)
    }

    pub fn has_attraction(&self, id: &str) -> bool {
        self.attractions.iter().any(|a| a == id)
    }

    pub fn toggle_interest(&mut self, interest: Interest) {
        toggle(&mut self.interests, interest);
    }

    pub fn toggle_attraction(&mut self, id: &str) {
        toggle(&mut self.attractions, id.to_string());
    }
}

/// Remove `item` if present, otherwise append it.
fn toggle<T: PartialEq>(items: &mut Vec<T>, item: T) {
    match items.iter().position(|existing| *existing == item) {
        Some(index) => {
            items.remove(index);
        }
        None => items.push(item),
    }
}

pub struct App {
    pub catalog: Arc<Catalog>,
    pub screen: Screen,
    pub selections: Selections,
    pub max_auto_attractions: usize,
    pub currency_symbol: String,
    pub status_message: String,
}

impl App {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self {
            catalog,
            screen: Screen::default(),
            selections: Selections::default(),
            max_auto_attractions: DEFAULT_MAX_AUTO_ATTRACTIONS,
            currency_symbol: DEFAULT_CURRENCY_SYMBOL.to_string(),
            status_message: String::new(),
        }
    }

    /// Restore the defaults. Catalog and settings are kept.
    pub fn reset(&mut self) {
        self.screen = Screen::default();
        self.selections = Selections::default();
        self.status_message.clear();
    }

    /// Build an app with the resolved settings applied.
    pub fn from_config(catalog: Arc<Catalog>, config: &ResolvedConfig) -> Self {
        let mut app = Self::new(catalog);
        app.max_auto_attractions = config.max_auto_attractions;
        app.currency_symbol = config.currency_symbol.clone();
        app.screen = config.start_mode.screen();
        app
    }

    pub fn quiz_step(&self) -> Option<QuizStep> {
        match self.screen {
            Screen::Quiz(step) => Some(step),
            _ => None,
        }
    }

    /// Ids of the first `max_auto_attractions` catalog attractions whose
    /// category matches one of the chosen interests, in catalog order.
    pub fn auto_attractions(&self) -> Vec<String> {
        self.catalog
            .attractions
            .iter()
            .filter(|a| {
                self.selections
                    .interests
                    .iter()
                    .any(|i| i.category() == Some(a.category))
            })
            .take(self.max_auto_attractions)
            .map(|a| a.id.clone())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::test_app;

    #[test]
    fn test_app_new_defaults() {
        let app = test_app();
        assert_eq!(app.screen, Screen::Choose);
        assert_eq!(app.selections, Selections::default());
        assert_eq!(app.max_auto_attractions, DEFAULT_MAX_AUTO_ATTRACTIONS);
        assert!(app.quiz_step().is_none());
    }

    #[test]
    fn test_toggle_attraction_preserves_order() {
        let mut selections = Selections::default();
        selections.toggle_attraction("sol");
        selections.toggle_attraction("esb");
        selections.toggle_attraction("met");
        selections.toggle_attraction("esb");
        assert_eq!(selections.attractions, vec!["sol", "met"]);
        selections.toggle_attraction("esb");
        assert_eq!(selections.attractions, vec!["sol", "met", "esb"]);
    }

    #[test]
    fn test_toggle_interest_twice_is_identity() {
        let mut selections = Selections::default();
        selections.toggle_interest(Interest::Views);
        let before = selections.clone();
        selections.toggle_interest(Interest::Museums);
        selections.toggle_interest(Interest::Museums);
        assert_eq!(selections, before);
    }

    #[test]
    fn test_auto_attractions_takes_first_five_in_catalog_order() {
        let mut app = test_app();
        app.selections.interests = vec![Interest::Museums, Interest::Views];
        assert_eq!(
            app.auto_attractions(),
            vec!["esb", "totr", "met", "moma", "amnh"]
        );
    }

    #[test]
    fn test_auto_attractions_ignores_family() {
        let mut app = test_app();
        app.selections.interests = vec![Interest::Family];
        assert!(app.auto_attractions().is_empty());
    }

    #[test]
    fn test_auto_attractions_respects_cap() {
        let mut app = test_app();
        app.max_auto_attractions = 2;
        app.selections.interests = vec![Interest::Landmarks];
        assert_eq!(app.auto_attractions(), vec!["sol", "911"]);
    }

    #[test]
    fn test_interest_and_budget_parse() {
        assert_eq!("views".parse::<Interest>(), Ok(Interest::Views));
        assert_eq!("family".parse::<Interest>(), Ok(Interest::Family));
        assert!("Views".parse::<Interest>().is_err());
        assert_eq!("premium".parse::<BudgetStyle>(), Ok(BudgetStyle::Premium));
        assert!("cheap".parse::<BudgetStyle>().is_err());
    }

    #[test]
    fn test_screen_display() {
        assert_eq!(Screen::Choose.to_string(), "choose");
        assert_eq!(Screen::Quiz(QuizStep::Budget).to_string(), "quiz (step 2)");
    }
}
