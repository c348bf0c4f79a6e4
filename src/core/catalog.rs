//! # Catalog
//!
//! Static reference data: the attractions a visitor can pick and the three
//! pass bundles we can recommend. Loaded once at startup and never mutated.
//!
//! ```text
//! Catalog
//! ├── attractions: Vec<Attraction>   // display order = catalog order
//! └── passes: PassTable              // one Pass per PassKey
//! ```
//!
//! The built-in data set is New York. A custom catalog can be loaded from a
//! TOML file with the same shape (see [`Catalog::load`]).

use std::collections::HashSet;
use std::fmt;
use std::fs;
use std::path::Path;

use log::info;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Views,
    Landmarks,
    Museums,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attraction {
    pub id: String,
    pub name: String,
    pub price: u32,
    pub category: Category,
    pub icon: String,
}

/// Identifies one of the three pass bundles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PassKey {
    #[serde(rename = "citypass")]
    CityPass,
    Sightseeing,
    Explorer,
}

impl PassKey {
    pub fn as_str(self) -> &'static str {
        match self {
            PassKey::CityPass => "citypass",
            PassKey::Sightseeing => "sightseeing",
            PassKey::Explorer => "explorer",
        }
    }
}

impl fmt::Display for PassKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pass {
    pub name: String,
    pub price: u32,
    /// Display names of what the pass covers. Not linked to `Attraction::id`.
    pub attractions: Vec<String>,
    pub savings_label: String,
    pub valid_days: u32,
}

/// One pass per key. Keyed by field so a loaded catalog can never miss one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PassTable {
    pub citypass: Pass,
    pub sightseeing: Pass,
    pub explorer: Pass,
}

impl PassTable {
    pub fn get(&self, key: PassKey) -> &Pass {
        match key {
            PassKey::CityPass => &self.citypass,
            PassKey::Sightseeing => &self.sightseeing,
            PassKey::Explorer => &self.explorer,
        }
    }
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("catalog parse error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("attraction at position {0} has an empty id")]
    EmptyId(usize),
    #[error("duplicate attraction id: {0}")]
    DuplicateId(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    pub attractions: Vec<Attraction>,
    pub passes: PassTable,
}

impl Catalog {
    /// Build a catalog, rejecting empty or duplicate attraction ids.
    pub fn new(attractions: Vec<Attraction>, passes: PassTable) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for (position, attraction) in attractions.iter().enumerate() {
            if attraction.id.trim().is_empty() {
                return Err(CatalogError::EmptyId(position));
            }
            if !seen.insert(attraction.id.as_str()) {
                return Err(CatalogError::DuplicateId(attraction.id.clone()));
            }
        }
        Ok(Self {
            attractions,
            passes,
        })
    }

    /// Parse a catalog from TOML text.
    pub fn from_toml(contents: &str) -> Result<Self, CatalogError> {
        let raw: Catalog = toml::from_str(contents)?;
        Self::new(raw.attractions, raw.passes)
    }

    /// Load a catalog from a TOML file.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let contents = fs::read_to_string(path)?;
        let catalog = Self::from_toml(&contents)?;
        info!(
            "Loaded catalog from {} ({} attractions)",
            path.display(),
            catalog.attractions.len()
        );
        Ok(catalog)
    }

    pub fn attraction(&self, id: &str) -> Option<&Attraction> {
        self.attractions.iter().find(|a| a.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.attraction(id).is_some()
    }

    pub fn pass(&self, key: PassKey) -> &Pass {
        self.passes.get(key)
    }

    /// The built-in New York data set.
    pub fn nyc() -> Self {
        let attraction = |id: &str, name: &str, price, category, icon: &str| Attraction {
            id: id.to_string(),
            name: name.to_string(),
            price,
            category,
            icon: icon.to_string(),
        };
        let pass = |name: &str, price, attractions: &[&str], savings_label: &str, valid_days| Pass {
            name: name.to_string(),
            price,
            attractions: attractions.iter().map(|s| s.to_string()).collect(),
            savings_label: savings_label.to_string(),
            valid_days,
        };

        use Category::*;
        Self {
            attractions: vec![
                attraction("esb", "Empire State Building", 44, Views, "🏙️"),
                attraction("totr", "Top of the Rock", 42, Views, "🌆"),
                attraction("sol", "Statue of Liberty", 24, Landmarks, "🗽"),
                attraction("met", "The Met Museum", 30, Museums, "🎨"),
                attraction("moma", "MoMA", 25, Museums, "🖼️"),
                attraction("amnh", "Natural History Museum", 28, Museums, "🦕"),
                attraction("911", "9/11 Memorial & Museum", 33, Landmarks, "🕊️"),
                attraction("intrepid", "Intrepid Museum", 36, Museums, "🚢"),
                attraction("brooklyn", "Brooklyn Bridge", 0, Landmarks, "🌉"),
                attraction("central", "Central Park", 0, Landmarks, "🌳"),
            ],
            passes: PassTable {
                citypass: pass(
                    "New York CityPASS",
                    138,
                    &[
                        "Empire State Building",
                        "American Museum of Natural History",
                        "Met Museum",
                        "Statue of Liberty",
                        "9/11 Memorial",
                        "Guggenheim",
                    ],
                    "Save up to 40%",
                    9,
                ),
                sightseeing: pass(
                    "Sightseeing Pass",
                    129,
                    &[
                        "Empire State Building",
                        "Top of the Rock",
                        "MoMA",
                        "Circle Line Cruise",
                        "Madame Tussauds",
                    ],
                    "Save up to 50%",
                    30,
                ),
                explorer: pass(
                    "New York Explorer Pass",
                    94,
                    &["Choose 3-10 attractions", "Flexible options"],
                    "Save up to 35%",
                    60,
                ),
            },
        }
    }
}
