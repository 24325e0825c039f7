//! # Spec Resolver
//!
//! Merges each requested type's overlay onto the table defaults and
//! validates the result. Resolution is positional over the definition's
//! `order`, mirroring how towers are laid out left to right.

use tracing::debug;

use crate::error::StorageError;
use crate::spec::BatterySpec;
use crate::table::StorageDefinition;

/// A storage definition ready to be resolved into specs.
#[derive(Debug, Clone, PartialEq)]
pub struct StorageConfig {
    definition: StorageDefinition,
}

impl StorageConfig {
    pub fn new(definition: StorageDefinition) -> Self {
        Self { definition }
    }

    /// Replace the requested order, keeping the type table.
    pub fn with_order<I, S>(mut self, order: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.definition.order = order.into_iter().map(Into::into).collect();
        self
    }

    pub fn definition(&self) -> &StorageDefinition {
        &self.definition
    }

    /// Requested labels, in order.
    pub fn labels(&self) -> &[String] {
        &self.definition.order
    }

    /// Number of requested types.
    pub fn len(&self) -> usize {
        self.definition.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definition.order.is_empty()
    }

    /// Resolved spec for the `index`-th requested type.
    pub fn get(&self, index: usize) -> Result<BatterySpec, StorageError> {
        let label = self
            .definition
            .order
            .get(index)
            .ok_or(StorageError::IndexOutOfRange {
                index,
                len: self.len(),
            })?;
        self.lookup(label)
    }

    /// Resolved spec for a type label, whether or not it is in the order.
    ///
    /// A type entry without its own `label` is labelled by its table key.
    pub fn lookup(&self, label: &str) -> Result<BatterySpec, StorageError> {
        let overlay = self
            .definition
            .overlay_for(label)
            .ok_or_else(|| StorageError::UnknownBatteryType(label.to_string()))?;

        let mut merged = self.definition.defaults().overlay(overlay);
        if merged.label.is_none() {
            merged.label = Some(label.to_string());
        }

        let spec = BatterySpec::from_overlay(&merged)?;
        debug!(
            label = spec.label(),
            diameter = spec.battery_diameter(),
            height = spec.battery_height(),
            slots = spec.slot_count().slots(),
            "Resolved battery spec"
        );
        Ok(spec)
    }

    /// Resolve every requested type, failing on the first bad one.
    pub fn resolve_all(&self) -> Result<Vec<BatterySpec>, StorageError> {
        if self.is_empty() {
            return Err(StorageError::EmptyOrder);
        }
        (0..self.len()).map(|i| self.get(i)).collect()
    }

    /// Iterate resolved specs lazily, in order.
    pub fn iter(&self) -> impl Iterator<Item = Result<BatterySpec, StorageError>> + '_ {
        (0..self.len()).map(move |i| self.get(i))
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spec::{ParamOverlay, SlotCount};
    use crate::table::{coin_cell_definition, DEFAULT_TYPE_KEY};

    #[test]
    fn test_get_merges_defaults() {
        let config = StorageConfig::new(coin_cell_definition());
        assert_eq!(config.len(), 2);
        let spec = config.get(0).unwrap();
        assert_eq!(spec.label(), "CR1632");
        assert_eq!(spec.battery_diameter(), 16.0);
        assert_eq!(spec.battery_clearance(), 0.5);
        assert_eq!(spec.slot_count(), SlotCount::Minimum(10));
        assert_eq!(config.get(1).unwrap().label(), "CR2025");
    }

    #[test]
    fn test_get_out_of_range() {
        let config = StorageConfig::new(coin_cell_definition());
        let err = config.get(2).unwrap_err();
        assert!(matches!(err, StorageError::IndexOutOfRange { index: 2, len: 2 }));
    }

    #[test]
    fn test_unknown_label() {
        let config = StorageConfig::new(coin_cell_definition()).with_order(["CR9999"]);
        match config.resolve_all().unwrap_err() {
            StorageError::UnknownBatteryType(label) => assert_eq!(label, "CR9999"),
            other => panic!("Expected UnknownBatteryType, got {:?}", other),
        }
    }

    #[test]
    fn test_default_key_is_not_requestable() {
        let config = StorageConfig::new(coin_cell_definition()).with_order([DEFAULT_TYPE_KEY]);
        assert!(matches!(config.get(0), Err(StorageError::UnknownBatteryType(_))));
    }

    #[test]
    fn test_resolve_all_stops_at_first_failure() {
        let config =
            StorageConfig::new(coin_cell_definition()).with_order(["CR2032", "CR9999", "CR0000"]);
        match config.resolve_all().unwrap_err() {
            StorageError::UnknownBatteryType(label) => assert_eq!(label, "CR9999"),
            other => panic!("Expected UnknownBatteryType, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_order() {
        let config = StorageConfig::new(coin_cell_definition()).with_order(Vec::<String>::new());
        assert!(config.is_empty());
        assert!(matches!(config.resolve_all(), Err(StorageError::EmptyOrder)));
    }

    #[test]
    fn test_label_defaults_to_table_key() {
        let mut def = coin_cell_definition();
        let mut overlay = ParamOverlay::cell("ignored", 18.0, 2.0);
        overlay.label = None;
        def.types.insert("CUSTOM18".to_string(), overlay);
        let config = StorageConfig::new(def).with_order(["CUSTOM18"]);
        assert_eq!(config.get(0).unwrap().label(), "CUSTOM18");
    }

    #[test]
    fn test_iter_yields_in_order() {
        let config = StorageConfig::new(coin_cell_definition()).with_order(["CR2032", "CR927"]);
        let labels: Vec<String> = config
            .iter()
            .map(|r| r.unwrap().label().to_string())
            .collect();
        assert_eq!(labels, vec!["CR2032", "CR927"]);
    }
}
