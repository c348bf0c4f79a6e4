//! # Actions
//!
//! Everything that can happen in the pass finder becomes an `Action`.
//! User picks "3-4 days"? That's `Action::SelectDays(3)`.
//! User ticks MoMA? That's `Action::ToggleAttraction("moma")`.
//!
//! The `update()` function takes the current state and an action,
//! mutates the state and returns an `Effect` telling the front end what to
//! do next. No I/O here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```
//!
//! Every action has a precondition on the current screen. An action whose
//! precondition does not hold is a no-op and comes back as
//! `Effect::Ignored(rejection)`.
//!
//! Actions also have a textual form (`name` or `name:param`) used by the
//! replay script and logs. See the `FromStr` impl.

use std::fmt;
use std::str::FromStr;

use log::{debug, info, warn};
use serde::Serialize;
use thiserror::Error;

use crate::core::state::{App, BudgetStyle, Interest, QuizStep, Screen};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "action", content = "param", rename_all = "kebab-case")]
pub enum Action {
    StartQuiz,
    StartDetailed,
    Reset,
    SelectDays(u32),
    ToggleInterest(Interest),
    ContinueQuiz,
    FinishQuiz(BudgetStyle),
    ToggleAttraction(String),
    ShowResults,
    Quit,
}

impl Action {
    pub fn name(&self) -> &'static str {
        match self {
            Action::StartQuiz => "start-quiz",
            Action::StartDetailed => "start-detailed",
            Action::Reset => "reset",
            Action::SelectDays(_) => "select-days",
            Action::ToggleInterest(_) => "toggle-interest",
            Action::ContinueQuiz => "continue-quiz",
            Action::FinishQuiz(_) => "finish-quiz",
            Action::ToggleAttraction(_) => "toggle-attraction",
            Action::ShowResults => "show-results",
            Action::Quit => "quit",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::SelectDays(days) => write!(f, "{}:{days}", self.name()),
            Action::ToggleInterest(interest) => write!(f, "{}:{}", self.name(), interest.as_str()),
            Action::FinishQuiz(budget) => write!(f, "{}:{}", self.name(), budget.as_str()),
            Action::ToggleAttraction(id) => write!(f, "{}:{id}", self.name()),
            _ => f.write_str(self.name()),
        }
    }
}

/// Malformed textual action.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActionError {
    #[error("unknown action: {0}")]
    UnknownAction(String),
    #[error("action '{0}' requires a parameter")]
    MissingParameter(&'static str),
    #[error("action '{0}' takes no parameter")]
    UnexpectedParameter(&'static str),
    #[error("invalid day count: {0} (expected a positive integer)")]
    InvalidDays(String),
    #[error("unknown interest: {0}")]
    UnknownInterest(String),
    #[error("unknown budget style: {0}")]
    UnknownBudget(String),
}

impl FromStr for Action {
    type Err = ActionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (name, param) = match s.split_once(':') {
            Some((name, param)) => (name.trim(), Some(param.trim())),
            None => (s.trim(), None),
        };

        let no_param = |action: Action| match param {
            Some(_) => Err(ActionError::UnexpectedParameter(action.name())),
            None => Ok(action),
        };
        let required = |action_name: &'static str| {
            param
                .filter(|p| !p.is_empty())
                .ok_or(ActionError::MissingParameter(action_name))
        };

        match name {
            "start-quiz" => no_param(Action::StartQuiz),
            "start-detailed" => no_param(Action::StartDetailed),
            "reset" => no_param(Action::Reset),
            "continue-quiz" => no_param(Action::ContinueQuiz),
            "show-results" => no_param(Action::ShowResults),
            "quit" => no_param(Action::Quit),
            "select-days" => {
                let raw = required("select-days")?;
                match raw.parse::<u32>() {
                    Ok(days) if days > 0 => Ok(Action::SelectDays(days)),
                    _ => Err(ActionError::InvalidDays(raw.to_string())),
                }
            }
            "toggle-interest" => {
                let raw = required("toggle-interest")?;
                raw.parse::<Interest>()
                    .map(Action::ToggleInterest)
                    .map_err(|_| ActionError::UnknownInterest(raw.to_string()))
            }
            "finish-quiz" => {
                let raw = required("finish-quiz")?;
                raw.parse::<BudgetStyle>()
                    .map(Action::FinishQuiz)
                    .map_err(|_| ActionError::UnknownBudget(raw.to_string()))
            }
            "toggle-attraction" => {
                let raw = required("toggle-attraction")?;
                Ok(Action::ToggleAttraction(raw.to_string()))
            }
            other => Err(ActionError::UnknownAction(other.to_string())),
        }
    }
}

/// Why an action was not applied.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
pub enum Rejection {
    #[error("'{action}' is not available on the {screen} screen")]
    WrongScreen { action: &'static str, screen: Screen },
    #[error("Pick at least one interest to continue")]
    NoInterests,
    #[error("Select at least one attraction first")]
    NoAttractions,
    #[error("Unknown attraction: {0}")]
    UnknownAttraction(String),
}

/// What the front end should do after an update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// State changed; redraw.
    Render,
    /// State untouched.
    Ignored(Rejection),
    Quit,
}

/// Apply one action to the app.
pub fn update(app: &mut App, action: Action) -> Effect {
    debug!("Dispatching {} on {}", action, app.screen);
    let previous = app.screen;

    let effect = match apply(app, action) {
        Ok(effect) => effect,
        Err(rejection) => {
            warn!("Rejected action: {}", rejection);
            app.status_message = rejection.to_string();
            return Effect::Ignored(rejection);
        }
    };

    if app.screen != previous {
        info!("Screen changed: {} -> {}", previous, app.screen);
    }
    effect
}

fn apply(app: &mut App, action: Action) -> Result<Effect, Rejection> {
    let wrong_screen = |action: &Action, screen: Screen| Rejection::WrongScreen {
        action: action.name(),
        screen,
    };

    match (app.screen, action) {
        (_, Action::Quit) => return Ok(Effect::Quit),
        (_, Action::Reset) => {
            app.reset();
        }
        (_, Action::StartQuiz) => {
            app.screen = Screen::Quiz(QuizStep::Days);
            app.status_message.clear();
        }
        (_, Action::StartDetailed) => {
            app.screen = Screen::Detailed;
            app.status_message.clear();
        }
        (Screen::Quiz(QuizStep::Days), Action::SelectDays(days)) => {
            app.selections.days = Some(days);
            app.screen = Screen::Quiz(QuizStep::Interests);
        }
        (Screen::Quiz(QuizStep::Interests), Action::ToggleInterest(interest)) => {
            app.selections.toggle_interest(interest);
            app.status_message.clear();
        }
        (Screen::Quiz(QuizStep::Interests), Action::ContinueQuiz) => {
            if app.selections.interests.is_empty() {
                return Err(Rejection::NoInterests);
            }
            app.screen = Screen::Quiz(QuizStep::Budget);
        }
        (Screen::Quiz(QuizStep::Budget), Action::FinishQuiz(budget)) => {
            app.selections.budget = Some(budget);
            app.selections.attractions = app.auto_attractions();
            app.screen = Screen::Results;
        }
        (Screen::Detailed, Action::ToggleAttraction(id)) => {
            if !app.catalog.contains(&id) {
                return Err(Rejection::UnknownAttraction(id));
            }
            app.selections.toggle_attraction(&id);
            let count = app.selections.attractions.len();
            app.status_message = format!("{count} attractions selected");
        }
        (Screen::Detailed, Action::ShowResults) => {
            if app.selections.attractions.is_empty() {
                return Err(Rejection::NoAttractions);
            }
            app.screen = Screen::Results;
            app.status_message.clear();
        }
        (screen, action) => return Err(wrong_screen(&action, screen)),
    }

    Ok(Effect::Render)
}
