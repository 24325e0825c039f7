//! # Variants
//!
//! The coin-cell and button-cell generators share every step; they differ
//! only in their table, their count policy, and how the file is named.

use std::fmt;

use crate::naming::{FileNaming, BUTTON_CELL_FILE_NAME};
use crate::table::{button_cell_definition, coin_cell_definition, StorageDefinition};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Variant {
    /// Lithium coin cells, minimum counts, files named after the labels.
    #[default]
    CoinCell,
    /// Button cells, exact counts, one fixed file name.
    ButtonCell,
}

impl Variant {
    /// Built-in table and default order.
    pub fn definition(self) -> StorageDefinition {
        match self {
            Variant::CoinCell => coin_cell_definition(),
            Variant::ButtonCell => button_cell_definition(),
        }
    }

    pub fn naming(self) -> FileNaming {
        match self {
            Variant::CoinCell => FileNaming::JoinedLabels,
            Variant::ButtonCell => FileNaming::Fixed(BUTTON_CELL_FILE_NAME),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Variant::CoinCell => "coin-cell",
            Variant::ButtonCell => "button-cell",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_naming_policies() {
        assert_eq!(Variant::CoinCell.naming(), FileNaming::JoinedLabels);
        assert_eq!(
            Variant::ButtonCell.naming(),
            FileNaming::Fixed("button-cell-storage.scad")
        );
    }

    #[test]
    fn test_display_matches_name() {
        assert_eq!(Variant::CoinCell.to_string(), "coin-cell");
        assert_eq!(Variant::ButtonCell.to_string(), "button-cell");
        assert_eq!(Variant::default(), Variant::CoinCell);
    }

    #[test]
    fn test_definitions_follow_variant() {
        assert_eq!(Variant::CoinCell.definition().order, vec!["CR1632", "CR2025"]);
        assert_eq!(Variant::ButtonCell.definition().order, vec!["LR44", "LR1130", "SR626"]);
    }
}
