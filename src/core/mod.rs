//! # Core Application Logic
//!
//! This module contains the pass finder's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Catalog (ref data)   │
//!                    │  • State (selections)   │
//!                    │  • Action + update()    │
//!                    │  • recommend()          │
//!                    │  • render() → View      │
//!                    │                         │
//!                    │  No terminal. Pure.     │
//!                    └───────────┬─────────────┘
//!                                │
//!                  ┌─────────────┴─────────────┐
//!                  ▼                           ▼
//!           ┌────────────┐              ┌────────────┐
//!           │    TUI     │              │   Replay   │
//!           │  Adapter   │              │  (--replay │
//!           │ (ratatui)  │              │   → JSON)  │
//!           └────────────┘              └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`catalog`]: attractions and passes
//! - [`state`]: the `App` struct, all selection state in one place
//! - [`action`]: the `Action` enum and the `update()` reducer
//! - [`recommend`]: pass rules and price aggregation
//! - [`view`]: declarative view model built from `App`
//! - [`replay`]: apply a scripted list of actions
//! - [`config`]: config file and override resolution

pub mod action;
pub mod catalog;
pub mod config;
pub mod recommend;
pub mod replay;
pub mod state;
pub mod view;
