//! Pass Finder library exports for testing

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::core::state::{QuizStep, Screen};

pub mod core;
pub mod tui;

#[cfg(test)]
pub mod test_support;

/// Which screen the app opens on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StartMode {
    #[default]
    Choose,
    Quiz,
    Detailed,
}

impl StartMode {
    pub fn screen(self) -> Screen {
        match self {
            StartMode::Choose => Screen::Choose,
            StartMode::Quiz => Screen::Quiz(QuizStep::Days),
            StartMode::Detailed => Screen::Detailed,
        }
    }
}
