//! # Battery Spec Tables
//!
//! Built-in storage definitions. A [`StorageDefinition`] has the same shape
//! as the JSON accepted by [`StorageDefinition::from_json`]:
//!
//! ```text
//! {
//!   "order": ["CR1632", "CR2025"],
//!   "types": {
//!     "default": { "battery_clearance": 0.5, ... },
//!     "CR1632":  { "label": "CR1632", "battery_diameter": 16, "battery_height": 3.2 }
//!   }
//! }
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::StorageError;
use crate::spec::ParamOverlay;

/// Key of the overlay every type is merged onto.
pub const DEFAULT_TYPE_KEY: &str = "default";

/// A requested order plus the type table it draws from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorageDefinition {
    /// Labels to build, left to right.
    pub order: Vec<String>,
    /// Type table keyed by label; [`DEFAULT_TYPE_KEY`] holds the defaults.
    pub types: BTreeMap<String, ParamOverlay>,
}

impl StorageDefinition {
    /// Parse a definition from JSON.
    pub fn from_json(source: &str) -> Result<Self, StorageError> {
        Ok(serde_json::from_str(source)?)
    }

    /// Pretty-printed JSON, loadable with [`from_json`](Self::from_json).
    pub fn to_json(&self) -> Result<String, StorageError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// The default overlay, or an empty one when the table has none.
    pub fn defaults(&self) -> ParamOverlay {
        self.types.get(DEFAULT_TYPE_KEY).cloned().unwrap_or_default()
    }

    /// Type-specific overlay for `label`. The defaults entry is not a type.
    pub fn overlay_for(&self, label: &str) -> Option<&ParamOverlay> {
        if label == DEFAULT_TYPE_KEY {
            return None;
        }
        self.types.get(label)
    }

    /// All configured type labels, sorted, without the defaults entry.
    pub fn type_labels(&self) -> impl Iterator<Item = &str> {
        self.types
            .keys()
            .map(String::as_str)
            .filter(|k| *k != DEFAULT_TYPE_KEY)
    }
}

fn table(
    order: &[&str],
    defaults: ParamOverlay,
    cells: &[(&str, f64, f64)],
) -> StorageDefinition {
    let mut types = BTreeMap::new();
    types.insert(DEFAULT_TYPE_KEY.to_string(), defaults);
    for &(label, diameter, height) in cells {
        types.insert(label.to_string(), ParamOverlay::cell(label, diameter, height));
    }
    StorageDefinition {
        order: order.iter().map(|s| s.to_string()).collect(),
        types,
    }
}

// =============================================================================
// COIN CELLS
// =============================================================================

/// Lithium coin cells, diameter and height in millimetres.
const COIN_CELLS: &[(&str, f64, f64)] = &[
    ("CR3032", 30.0, 3.2),
    ("CR2016", 20.0, 1.6),
    ("CR2330", 20.0, 3.2),
    ("CR2032", 20.0, 3.2),
    ("CR1220", 12.5, 2.0),
    ("CR1632", 16.0, 3.2),
    ("CR927", 9.5, 2.7),
    ("CR1025", 10.0, 2.5),
    ("CR1130", 11.5, 3.0),
    ("CR1216", 12.5, 1.6),
    ("CR1225", 12.5, 2.5),
    ("CR1616", 16.0, 1.6),
    ("CR1620", 16.0, 2.0),
    ("CR2012", 20.0, 1.2),
    ("CR2020", 20.0, 2.0),
    ("CR2025", 20.0, 2.5),
    ("CR2040", 20.0, 4.0),
    ("CR2050", 20.0, 5.0),
    ("CR2320", 23.0, 2.0),
    ("CR2325", 23.0, 2.5),
    ("BR2335", 23.0, 3.5),
    ("CR2354", 23.0, 5.4),
    ("CR2412", 24.5, 1.2),
    ("CR2430", 24.5, 3.0),
    ("CR2450", 24.5, 5.0),
    ("CR2477", 24.5, 7.7),
    ("CR11108", 11.6, 10.8),
];

/// Coin-cell defaults. Counts are minimums (`min_battery_count`).
pub fn coin_cell_defaults() -> ParamOverlay {
    ParamOverlay {
        battery_clearance: Some(0.5),
        battery_protrusion: Some(0.2),
        grabby_slot_diameter: Some(15.0),
        grabby_slot_offset: Some(5.0),
        slot_margin: Some(2.0),
        slot_angle: Some(-15.0),
        tower_bottom_margin: Some(2.5),
        min_battery_count: Some(10),
        ..Default::default()
    }
}

/// Coin-cell table, ordered CR1632 then CR2025.
pub fn coin_cell_definition() -> StorageDefinition {
    table(&["CR1632", "CR2025"], coin_cell_defaults(), COIN_CELLS)
}

// =============================================================================
// BUTTON CELLS
// =============================================================================

/// Alkaline (LR) and silver-oxide (SR) button cells.
const BUTTON_CELLS: &[(&str, f64, f64)] = &[
    ("LR41", 7.9, 3.6),
    ("LR43", 11.6, 4.2),
    ("LR44", 11.6, 5.4),
    ("LR1130", 11.6, 3.1),
    ("LR621", 6.8, 2.1),
    ("LR626", 6.8, 2.6),
    ("LR754", 7.9, 5.4),
    ("SR516", 5.8, 1.6),
    ("SR521", 5.8, 2.1),
    ("SR621", 6.8, 2.1),
    ("SR626", 6.8, 2.6),
    ("SR726", 7.9, 2.6),
    ("SR927", 9.5, 2.7),
];

/// Button-cell defaults. Counts are exact (`battery_count`) and the grabby
/// hole is scaled down for the smaller cells.
pub fn button_cell_defaults() -> ParamOverlay {
    ParamOverlay {
        battery_clearance: Some(0.5),
        battery_protrusion: Some(0.2),
        grabby_slot_diameter: Some(8.0),
        grabby_slot_offset: Some(3.0),
        slot_margin: Some(2.0),
        slot_angle: Some(-15.0),
        tower_bottom_margin: Some(2.5),
        battery_count: Some(10),
        ..Default::default()
    }
}

/// Button-cell table, ordered LR44, LR1130, SR626.
pub fn button_cell_definition() -> StorageDefinition {
    table(&["LR44", "LR1130", "SR626"], button_cell_defaults(), BUTTON_CELLS)
}

// =============================================================================
// TESTS
// =============================================================================
