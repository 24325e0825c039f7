//! # Battery Specs
//!
//! [`ParamOverlay`] is one layer of a battery type table: every parameter is
//! optional. Layers are merged with [`ParamOverlay::overlay`] (the upper
//! layer wins field by field) and the merged record is validated into an
//! immutable [`BatterySpec`] by [`BatterySpecBuilder::build`].
//!
//! ```rust
//! use cell_storage::spec::{BatterySpec, SlotCount};
//!
//! let spec = BatterySpec::builder("CR1632")
//!     .battery_diameter(16.0)
//!     .battery_height(3.2)
//!     .slot_count(SlotCount::Minimum(10))
//!     .battery_clearance(0.5)
//!     .battery_protrusion(0.2)
//!     .slot_margin(2.0)
//!     .slot_angle(-15.0)
//!     .grabby_slot_diameter(15.0)
//!     .grabby_slot_offset(5.0)
//!     .tower_bottom_margin(2.5)
//!     .build()
//!     .unwrap();
//! assert_eq!(spec.slot_count().slots(), 10);
//! ```

use config::constants::MAX_SLOT_COUNT;
use serde::{Deserialize, Serialize};

use crate::error::StorageError;

// =============================================================================
// SLOT COUNT
// =============================================================================

/// How many slots a tower gets.
///
/// Coin-cell tables use `min_battery_count`, button-cell tables use
/// `battery_count`. Both currently yield exactly `n` slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotCount {
    /// `battery_count`: exactly this many slots.
    Exact(u32),
    /// `min_battery_count`: at least this many slots.
    Minimum(u32),
}

impl SlotCount {
    /// Number of slots cut into the tower.
    pub fn slots(self) -> u32 {
        match self {
            SlotCount::Exact(n) | SlotCount::Minimum(n) => n,
        }
    }

    /// Table field this count was read from.
    pub fn field_name(self) -> &'static str {
        match self {
            SlotCount::Exact(_) => "battery_count",
            SlotCount::Minimum(_) => "min_battery_count",
        }
    }
}

// =============================================================================
// PARAMETER OVERLAY
// =============================================================================

/// One layer of battery parameters. Field names match the JSON table keys.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ParamOverlay {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub battery_diameter: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub battery_height: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub battery_count: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_battery_count: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub battery_clearance: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub battery_protrusion: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slot_margin: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slot_angle: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grabby_slot_diameter: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grabby_slot_offset: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tower_bottom_margin: Option<f64>,
}

impl ParamOverlay {
    /// Shallow merge: every field set in `top` replaces the one in `self`.
    ///
    /// The two count fields travel together: if `top` sets either of them,
    /// both are taken from `top`, so a type can switch a default
    /// `min_battery_count` to an exact `battery_count`.
    pub fn overlay(&self, top: &ParamOverlay) -> ParamOverlay {
        let top_sets_count = top.battery_count.is_some() || top.min_battery_count.is_some();
        let (battery_count, min_battery_count) = if top_sets_count {
            (top.battery_count, top.min_battery_count)
        } else {
            (self.battery_count, self.min_battery_count)
        };

        ParamOverlay {
            label: top.label.clone().or_else(|| self.label.clone()),
            battery_diameter: top.battery_diameter.or(self.battery_diameter),
            battery_height: top.battery_height.or(self.battery_height),
            battery_count,
            min_battery_count,
            battery_clearance: top.battery_clearance.or(self.battery_clearance),
            battery_protrusion: top.battery_protrusion.or(self.battery_protrusion),
            slot_margin: top.slot_margin.or(self.slot_margin),
            slot_angle: top.slot_angle.or(self.slot_angle),
            grabby_slot_diameter: top.grabby_slot_diameter.or(self.grabby_slot_diameter),
            grabby_slot_offset: top.grabby_slot_offset.or(self.grabby_slot_offset),
            tower_bottom_margin: top.tower_bottom_margin.or(self.tower_bottom_margin),
        }
    }

    /// Overlay with only a label and the two physical dimensions set.
    pub fn cell(label: &str, battery_diameter: f64, battery_height: f64) -> Self {
        ParamOverlay {
            label: Some(label.to_string()),
            battery_diameter: Some(battery_diameter),
            battery_height: Some(battery_height),
            ..Default::default()
        }
    }
}

// =============================================================================
// BATTERY SPEC
// =============================================================================

/// Validated, immutable parameters for one battery type.
#[derive(Debug, Clone, PartialEq)]
pub struct BatterySpec {
    label: String,
    battery_diameter: f64,
    battery_height: f64,
    slot_count: SlotCount,
    battery_clearance: f64,
    battery_protrusion: f64,
    slot_margin: f64,
    slot_angle: f64,
    grabby_slot_diameter: f64,
    grabby_slot_offset: f64,
    tower_bottom_margin: f64,
}

impl BatterySpec {
    /// Start a builder for the given label.
    pub fn builder(label: impl Into<String>) -> BatterySpecBuilder {
        BatterySpecBuilder::from_overlay(ParamOverlay {
            label: Some(label.into()),
            ..Default::default()
        })
    }

    /// Validate a fully merged overlay.
    pub fn from_overlay(params: &ParamOverlay) -> Result<Self, StorageError> {
        BatterySpecBuilder::from_overlay(params.clone()).build()
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn battery_diameter(&self) -> f64 {
        self.battery_diameter
    }

    pub fn battery_height(&self) -> f64 {
        self.battery_height
    }

    pub fn slot_count(&self) -> SlotCount {
        self.slot_count
    }

    pub fn battery_clearance(&self) -> f64 {
        self.battery_clearance
    }

    /// Fraction of the battery diameter left standing proud of the slot.
    pub fn battery_protrusion(&self) -> f64 {
        self.battery_protrusion
    }

    pub fn slot_margin(&self) -> f64 {
        self.slot_margin
    }

    /// Slot tilt about the X axis, in degrees.
    pub fn slot_angle(&self) -> f64 {
        self.slot_angle
    }

    pub fn grabby_slot_diameter(&self) -> f64 {
        self.grabby_slot_diameter
    }

    /// Distance of the grabby cylinder axis in front of the tower face.
    pub fn grabby_slot_offset(&self) -> f64 {
        self.grabby_slot_offset
    }

    pub fn tower_bottom_margin(&self) -> f64 {
        self.tower_bottom_margin
    }
}

// =============================================================================
// BUILDER
// =============================================================================

/// Builder for [`BatterySpec`]. Holds a [`ParamOverlay`] and validates it on
/// [`build`](BatterySpecBuilder::build).
#[derive(Debug, Clone, Default)]
pub struct BatterySpecBuilder {
    params: ParamOverlay,
}

impl BatterySpecBuilder {
    pub fn from_overlay(params: ParamOverlay) -> Self {
        Self { params }
    }

    pub fn battery_diameter(mut self, value: f64) -> Self {
        self.params.battery_diameter = Some(value);
        self
    }

    pub fn battery_height(mut self, value: f64) -> Self {
        self.params.battery_height = Some(value);
        self
    }

    pub fn slot_count(mut self, count: SlotCount) -> Self {
        match count {
            SlotCount::Exact(n) => {
                self.params.battery_count = Some(n);
                self.params.min_battery_count = None;
            }
            SlotCount::Minimum(n) => {
                self.params.battery_count = None;
                self.params.min_battery_count = Some(n);
            }
        }
        self
    }

    pub fn battery_clearance(mut self, value: f64) -> Self {
        self.params.battery_clearance = Some(value);
        self
    }

    pub fn battery_protrusion(mut self, value: f64) -> Self {
        self.params.battery_protrusion = Some(value);
        self
    }

    pub fn slot_margin(mut self, value: f64) -> Self {
        self.params.slot_margin = Some(value);
        self
    }

    pub fn slot_angle(mut self, value: f64) -> Self {
        self.params.slot_angle = Some(value);
        self
    }

    pub fn grabby_slot_diameter(mut self, value: f64) -> Self {
        self.params.grabby_slot_diameter = Some(value);
        self
    }

    pub fn grabby_slot_offset(mut self, value: f64) -> Self {
        self.params.grabby_slot_offset = Some(value);
        self
    }

    pub fn tower_bottom_margin(mut self, value: f64) -> Self {
        self.params.tower_bottom_margin = Some(value);
        self
    }

    /// Check that every field is present and in range.
    pub fn build(self) -> Result<BatterySpec, StorageError> {
        let p = self.params;

        let label = match p.label.as_deref().map(str::trim) {
            Some(l) if !l.is_empty() => l.to_string(),
            Some(_) => {
                return Err(StorageError::InvalidField {
                    label: String::new(),
                    field: "label",
                    reason: "must not be empty".to_string(),
                })
            }
            None => {
                return Err(StorageError::MissingField {
                    label: "<unnamed>".to_string(),
                    field: "label",
                })
            }
        };

        let check = Checker { label: &label };

        let slot_count = match (p.battery_count, p.min_battery_count) {
            (Some(_), Some(_)) => return Err(StorageError::ConflictingSlotCount(label.clone())),
            (Some(n), None) => SlotCount::Exact(n),
            (None, Some(n)) => SlotCount::Minimum(n),
            (None, None) => return Err(check.missing("battery_count")),
        };
        if slot_count.slots() == 0 {
            return Err(check.invalid(slot_count.field_name(), "must be at least 1"));
        }
        if slot_count.slots() > MAX_SLOT_COUNT {
            return Err(check.invalid(
                slot_count.field_name(),
                &format!("must be at most {}", MAX_SLOT_COUNT),
            ));
        }

        let battery_diameter = check.positive("battery_diameter", p.battery_diameter)?;
        let battery_height = check.positive("battery_height", p.battery_height)?;
        let battery_clearance = check.non_negative("battery_clearance", p.battery_clearance)?;

        let battery_protrusion = check.finite("battery_protrusion", p.battery_protrusion)?;
        if !(0.0..1.0).contains(&battery_protrusion) {
            return Err(check.invalid("battery_protrusion", "must be in [0, 1)"));
        }

        let slot_margin = check.positive("slot_margin", p.slot_margin)?;

        let slot_angle = check.finite("slot_angle", p.slot_angle)?;
        if slot_angle.abs() >= 90.0 {
            return Err(check.invalid("slot_angle", "must be strictly between -90 and 90 degrees"));
        }

        let grabby_slot_diameter = check.positive("grabby_slot_diameter", p.grabby_slot_diameter)?;
        let grabby_slot_offset = check.finite("grabby_slot_offset", p.grabby_slot_offset)?;
        let tower_bottom_margin = check.non_negative("tower_bottom_margin", p.tower_bottom_margin)?;

        Ok(BatterySpec {
            label,
            battery_diameter,
            battery_height,
            slot_count,
            battery_clearance,
            battery_protrusion,
            slot_margin,
            slot_angle,
            grabby_slot_diameter,
            grabby_slot_offset,
            tower_bottom_margin,
        })
    }
}

struct Checker<'a> {
    label: &'a str,
}

impl Checker<'_> {
    fn missing(&self, field: &'static str) -> StorageError {
        StorageError::MissingField {
            label: self.label.to_string(),
            field,
        }
    }

    fn invalid(&self, field: &'static str, reason: &str) -> StorageError {
        StorageError::InvalidField {
            label: self.label.to_string(),
            field,
            reason: reason.to_string(),
        }
    }

    fn finite(&self, field: &'static str, value: Option<f64>) -> Result<f64, StorageError> {
        let v = value.ok_or_else(|| self.missing(field))?;
        if !v.is_finite() {
            return Err(self.invalid(field, "must be finite"));
        }
        Ok(v)
    }

    fn positive(&self, field: &'static str, value: Option<f64>) -> Result<f64, StorageError> {
        let v = self.finite(field, value)?;
        if v <= 0.0 {
            return Err(self.invalid(field, "must be positive"));
        }
        Ok(v)
    }

    fn non_negative(&self, field: &'static str, value: Option<f64>) -> Result<f64, StorageError> {
        let v = self.finite(field, value)?;
        if v < 0.0 {
            return Err(self.invalid(field, "must not be negative"));
        }
        Ok(v)
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn defaults() -> ParamOverlay {
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

    #[test]
    fn test_overlay_type_values_win() {
        let mut top = ParamOverlay::cell("CR2032", 20.0, 3.2);
        top.battery_clearance = Some(0.75);
        let merged = defaults().overlay(&top);
        assert_eq!(merged.label.as_deref(), Some("CR2032"));
        assert_eq!(merged.battery_clearance, Some(0.75));
        assert_eq!(merged.slot_margin, Some(2.0));
        assert_eq!(merged.min_battery_count, Some(10));
    }

    #[test]
    fn test_overlay_count_fields_travel_together() {
        let mut top = ParamOverlay::cell("LR44", 11.6, 5.4);
        top.battery_count = Some(6);
        let merged = defaults().overlay(&top);
        assert_eq!(merged.battery_count, Some(6));
        assert_eq!(merged.min_battery_count, None);
        let spec = BatterySpec::from_overlay(&merged).unwrap();
        assert_eq!(spec.slot_count(), SlotCount::Exact(6));
    }

    #[test]
    fn test_from_overlay_valid() {
        let merged = defaults().overlay(&ParamOverlay::cell("CR1632", 16.0, 3.2));
        let spec = BatterySpec::from_overlay(&merged).unwrap();
        assert_eq!(spec.label(), "CR1632");
        assert_eq!(spec.battery_diameter(), 16.0);
        assert_eq!(spec.slot_count(), SlotCount::Minimum(10));
        assert_eq!(spec.slot_angle(), -15.0);
    }

    #[test]
    fn test_missing_dimension() {
        let mut top = ParamOverlay::cell("CR1632", 16.0, 3.2);
        top.battery_height = None;
        let err = BatterySpec::from_overlay(&defaults().overlay(&top)).unwrap_err();
        match err {
            StorageError::MissingField { label, field } => {
                assert_eq!(label, "CR1632");
                assert_eq!(field, "battery_height");
            }
            other => panic!("Expected MissingField, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_count() {
        let err = BatterySpec::builder("X")
            .battery_diameter(10.0)
            .battery_height(2.0)
            .build()
            .unwrap_err();
        assert!(matches!(err, StorageError::MissingField { field: "battery_count", .. }));
    }

    #[test]
    fn test_missing_label() {
        let err = BatterySpec::from_overlay(&defaults()).unwrap_err();
        assert!(matches!(err, StorageError::MissingField { field: "label", .. }));
    }

    #[test]
    fn test_blank_label_rejected() {
        let merged = defaults().overlay(&ParamOverlay::cell("  ", 16.0, 3.2));
        let err = BatterySpec::from_overlay(&merged).unwrap_err();
        assert!(matches!(err, StorageError::InvalidField { field: "label", .. }));
    }

    #[test]
    fn test_conflicting_counts() {
        let mut params = defaults().overlay(&ParamOverlay::cell("CR1632", 16.0, 3.2));
        params.battery_count = Some(4);
        let err = BatterySpec::from_overlay(&params).unwrap_err();
        assert!(matches!(err, StorageError::ConflictingSlotCount(_)));
    }

    #[test]
    fn test_zero_count_rejected() {
        let mut top = ParamOverlay::cell("CR1632", 16.0, 3.2);
        top.min_battery_count = Some(0);
        let err = BatterySpec::from_overlay(&defaults().overlay(&top)).unwrap_err();
        assert!(matches!(err, StorageError::InvalidField { field: "min_battery_count", .. }));
    }

    #[test]
    fn test_huge_count_rejected() {
        let json = r#"{ "label": "CR1632", "battery_diameter": 16, "battery_height": 3.2,
                        "min_battery_count": 4000000000 }"#;
        let top: ParamOverlay = serde_json::from_str(json).unwrap();
        let err = BatterySpec::from_overlay(&defaults().overlay(&top)).unwrap_err();
        match err {
            StorageError::InvalidField { field, reason, .. } => {
                assert_eq!(field, "min_battery_count");
                assert!(reason.contains("at most 1000"));
            }
            other => panic!("Expected InvalidField, got {:?}", other),
        }

        let mut top = ParamOverlay::cell("LR44", 11.6, 5.4);
        top.battery_count = Some(MAX_SLOT_COUNT);
        let spec = BatterySpec::from_overlay(&defaults().overlay(&top)).unwrap();
        assert_eq!(spec.slot_count(), SlotCount::Exact(MAX_SLOT_COUNT));
    }

    #[test]
    fn test_range_checks() {
        let base = defaults().overlay(&ParamOverlay::cell("CR1632", 16.0, 3.2));

        let mut p = base.clone();
        p.battery_diameter = Some(0.0);
        assert!(matches!(
            BatterySpec::from_overlay(&p),
            Err(StorageError::InvalidField { field: "battery_diameter", .. })
        ));

        let mut p = base.clone();
        p.battery_protrusion = Some(1.0);
        assert!(matches!(
            BatterySpec::from_overlay(&p),
            Err(StorageError::InvalidField { field: "battery_protrusion", .. })
        ));

        let mut p = base.clone();
        p.battery_clearance = Some(-0.1);
        assert!(matches!(
            BatterySpec::from_overlay(&p),
            Err(StorageError::InvalidField { field: "battery_clearance", .. })
        ));

        let mut p = base.clone();
        p.slot_angle = Some(90.0);
        assert!(matches!(
            BatterySpec::from_overlay(&p),
            Err(StorageError::InvalidField { field: "slot_angle", .. })
        ));

        let mut p = base;
        p.grabby_slot_offset = Some(f64::NAN);
        assert!(matches!(
            BatterySpec::from_overlay(&p),
            Err(StorageError::InvalidField { field: "grabby_slot_offset", .. })
        ));
    }

    #[test]
    fn test_slot_count_field_names() {
        assert_eq!(SlotCount::Exact(3).field_name(), "battery_count");
        assert_eq!(SlotCount::Minimum(3).field_name(), "min_battery_count");
        assert_eq!(SlotCount::Minimum(3).slots(), 3);
    }

    #[test]
    fn test_overlay_deserializes_table_keys() {
        let json = r#"{"label": "CR2032", "battery_diameter": 20, "battery_height": 3.2}"#;
        let overlay: ParamOverlay = serde_json::from_str(json).unwrap();
        assert_eq!(overlay, ParamOverlay::cell("CR2032", 20.0, 3.2));
    }

    #[test]
    fn test_overlay_rejects_unknown_keys() {
        let json = r#"{"battery_diamter": 20}"#;
        assert!(serde_json::from_str::<ParamOverlay>(json).is_err());
    }
}
