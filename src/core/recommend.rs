//! # Recommendation Engine
//!
//! Maps the user's selections to one of the three passes. Pure and total:
//! any input, including an empty one, yields a pass.
//!
//! Rules, first match wins:
//!
//! 1. Three attractions or fewer → Explorer (pay per pick).
//! 2. A trip of 1-3 days → CityPASS.
//! 3. Interested in both museums and views → Sightseeing.
//! 4. Otherwise → CityPASS.

use serde::Serialize;

use crate::core::catalog::{Catalog, Pass, PassKey};
use crate::core::state::{Interest, Selections};

/// Selections this small are better served by a pick-your-own pass.
pub const EXPLORER_MAX_ATTRACTIONS: usize = 3;
/// Trips this short favour the fixed CityPASS.
pub const SHORT_TRIP_MAX_DAYS: u32 = 3;

pub fn recommend(selections: &Selections) -> PassKey {
    if selections.attractions.len() <= EXPLORER_MAX_ATTRACTIONS {
        return PassKey::Explorer;
    }
    // Zero days counts as "not answered".
    if matches!(selections.days, Some(days) if (1..=SHORT_TRIP_MAX_DAYS).contains(&days)) {
        return PassKey::CityPass;
    }
    if selections.has_interest(Interest::Museums) && selections.has_interest(Interest::Views) {
        return PassKey::Sightseeing;
    }
    PassKey::CityPass
}

/// Sum of individual ticket prices. Ids missing from the catalog count as
/// free. Saturates at `u32::MAX` for absurd custom catalogs.
pub fn total_price(selections: &Selections, catalog: &Catalog) -> u32 {
    selections
        .attractions
        .iter()
        .filter_map(|id| catalog.attraction(id))
        .fold(0u32, |total, a| total.saturating_add(a.price))
}

/// A recommendation together with the numbers the results screen shows.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation<'a> {
    pub key: PassKey,
    pub pass: &'a Pass,
    pub total_price: u32,
    /// `total_price - pass.price`, only when the pass is actually cheaper.
    pub savings: Option<u32>,
}

pub fn evaluate<'a>(selections: &Selections, catalog: &'a Catalog) -> Recommendation<'a> {
    let key = recommend(selections);
    let pass = catalog.pass(key);
    let total_price = total_price(selections, catalog);
    let savings = total_price
        .checked_sub(pass.price)
        .filter(|&saved| saved > 0);
    Recommendation {
        key,
        pass,
        total_price,
        savings,
    }
}
