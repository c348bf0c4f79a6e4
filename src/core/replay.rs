//! # Replay
//!
//! Runs a comma-separated list of textual actions against an `App` without
//! a terminal, e.g.
//!
//! ```text
//! start-quiz, select-days:2, toggle-interest:landmarks, continue-quiz, finish-quiz:budget
//! ```
//!
//! The whole script is parsed before anything is dispatched, so a typo
//! never leaves the app half-way through a flow.

use log::info;
use serde::Serialize;

use crate::core::action::{Action, ActionError, Effect, Rejection, update};
use crate::core::state::App;

/// What happened to one step of the script.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "lowercase")]
pub enum StepOutcome {
    Applied { action: String },
    Rejected { action: String, reason: Rejection },
    Quit { action: String },
}

/// Parse every step of `script`. Empty steps are skipped.
pub fn parse_script(script: &str) -> Result<Vec<Action>, ActionError> {
    script
        .split(',')
        .map(str::trim)
        .filter(|step| !step.is_empty())
        .map(str::parse)
        .collect()
}

/// Parse and apply `script`. Stops after a `quit` step.
pub fn run_script(app: &mut App, script: &str) -> Result<Vec<StepOutcome>, ActionError> {
    let actions = parse_script(script)?;
    info!("Replaying {} actions", actions.len());

    let mut outcomes = Vec::with_capacity(actions.len());
    for action in actions {
        let label = action.to_string();
        match update(app, action) {
            Effect::Render => outcomes.push(StepOutcome::Applied { action: label }),
            Effect::Ignored(reason) => outcomes.push(StepOutcome::Rejected {
                action: label,
                reason,
            }),
            Effect::Quit => {
                outcomes.push(StepOutcome::Quit { action: label });
                break;
            }
        }
    }
    Ok(outcomes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::state::{Interest, Screen};
    use crate::test_support::test_app;

    #[test]
    fn test_parse_script_skips_blank_steps() {
        let actions = parse_script(" start-quiz ,, select-days:3 ,").unwrap();
        assert_eq!(actions, vec![Action::StartQuiz, Action::SelectDays(3)]);
    }

    #[test]
    fn test_parse_error_aborts_before_dispatch() {
        let mut app = test_app();
        let err = run_script(&mut app, "start-quiz, select-days:many").unwrap_err();
        assert_eq!(err, ActionError::InvalidDays("many".into()));
        assert_eq!(app.screen, Screen::Choose);
    }

    #[test]
    fn test_rejections_are_reported_and_replay_continues() {
        let mut app = test_app();
        let outcomes = run_script(
            &mut app,
            "start-quiz, select-days:5, continue-quiz, toggle-interest:views",
        )
        .unwrap();

        assert_eq!(outcomes.len(), 4);
        assert_eq!(
            outcomes[2],
            StepOutcome::Rejected {
                action: "continue-quiz".into(),
                reason: Rejection::NoInterests,
            }
        );
        assert_eq!(app.selections.interests, vec![Interest::Views]);
    }

    #[test]
    fn test_quit_stops_replay() {
        let mut app = test_app();
        let outcomes = run_script(&mut app, "quit, start-detailed").unwrap();
        assert_eq!(outcomes, vec![StepOutcome::Quit { action: "quit".into() }]);
        assert_eq!(app.screen, Screen::Choose);
    }

    #[test]
    fn test_outcome_serializes() {
        let json = serde_json::to_value(StepOutcome::Applied {
            action: "reset".into(),
        })
        .unwrap();
        assert_eq!(json["outcome"], "applied");
        assert_eq!(json["action"], "reset");
    }
}
