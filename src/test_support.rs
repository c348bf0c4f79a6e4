//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::Arc;

use crate::core::catalog::Catalog;
use crate::core::state::{App, Screen};

/// Creates a test App backed by the built-in catalog.
pub fn test_app() -> App {
    App::new(Arc::new(Catalog::nyc()))
}

/// Creates a test App already on the given screen, with empty selections.
pub fn app_on(screen: Screen) -> App {
    let mut app = test_app();
    app.screen = screen;
    app
}
