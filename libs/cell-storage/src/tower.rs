//! # Tower Builder
//!
//! One vertical stack of angled battery slots. Coordinates: X across the
//! tower width, Y into the tower (front face at `y = 0`), Z up.
//!
//! ```text
//! difference() {
//!     cube([tower_width, tower_depth, tower_height]);
//!     slot 0 .. slot n-1        // tilted boxes breaking through the front
//!     grabby cylinder           // finger access down the front face
//!     label                     // text sunk into the top face
//! }
//! ```

use config::constants::{
    estimated_label_width, GRABBY_OVERCUT, LABEL_LIFT, LABEL_TEXT_SIZE, SLOT_CUT_DEPTH,
};
use glam::DVec3;
use openscad_csg::{
    cube, cylinder, difference, linear_extrude, rotate, text, translate, GeometryNode,
};
use tracing::{debug, warn};

use crate::spec::BatterySpec;

/// Derived geometry for one battery type.
#[derive(Debug, Clone, PartialEq)]
pub struct Tower {
    spec: BatterySpec,
    slot_width: f64,
    slot_depth: f64,
    slot_height: f64,
    tower_width: f64,
    tower_depth: f64,
    tower_height: f64,
}

impl Tower {
    /// Derive slot and tower dimensions from a resolved spec.
    pub fn new(spec: BatterySpec) -> Self {
        let d = spec.battery_diameter();
        let c = spec.battery_clearance();
        let m = spec.slot_margin();
        let count = f64::from(spec.slot_count().slots());

        let slot_width = d + c * 2.0;
        let slot_depth = d * (1.0 - spec.battery_protrusion());
        let slot_height = spec.battery_height() + c * 2.0;

        let tower_width = d + c * 2.0 + m * 2.0;
        let tower_depth = slot_depth + m;
        let tower_height =
            (spec.battery_height() + c * 2.0 + m) * count + m + spec.tower_bottom_margin();

        debug!(
            label = spec.label(),
            slot_width, slot_depth, slot_height, tower_width, tower_depth, tower_height,
            "Derived tower dimensions"
        );

        if estimated_label_width(spec.label()) > tower_width {
            warn!(
                "Label {} is likely wider than its {:.1} mm tower",
                spec.label(),
                tower_width
            );
        }

        Self {
            spec,
            slot_width,
            slot_depth,
            slot_height,
            tower_width,
            tower_depth,
            tower_height,
        }
    }

    pub fn spec(&self) -> &BatterySpec {
        &self.spec
    }

    pub fn label(&self) -> &str {
        self.spec.label()
    }

    pub fn slot_width(&self) -> f64 {
        self.slot_width
    }

    pub fn slot_depth(&self) -> f64 {
        self.slot_depth
    }

    pub fn slot_height(&self) -> f64 {
        self.slot_height
    }

    pub fn width(&self) -> f64 {
        self.tower_width
    }

    pub fn depth(&self) -> f64 {
        self.tower_depth
    }

    pub fn height(&self) -> f64 {
        self.tower_height
    }

    pub fn slot_count(&self) -> u32 {
        self.spec.slot_count().slots()
    }

    /// Height of slot `index`'s lower edge above the tower base.
    pub fn slot_z(&self, index: u32) -> f64 {
        let m = self.spec.slot_margin();
        (self.slot_height + m) * f64::from(index) + m + self.spec.tower_bottom_margin()
    }

    /// Pivot of slot `index`: front-face point the slot box rotates about.
    pub fn slot_origin(&self, index: u32) -> DVec3 {
        DVec3::new(
            self.tower_width / 2.0 - self.slot_width / 2.0,
            0.0,
            self.slot_z(index),
        )
    }

    /// Force height and depth to assembly-wide values. Slot placement is
    /// unaffected; only the body, grabby hole and label move.
    pub(crate) fn harmonize(&mut self, height: f64, depth: f64) {
        debug_assert!(height >= self.tower_height && depth >= self.tower_depth);
        self.tower_height = height;
        self.tower_depth = depth;
    }

    /// Cutter for slot `index`: a box extended [`SLOT_CUT_DEPTH`] toward the
    /// front, tilted by the slot angle about X.
    pub fn slot(&self, index: u32) -> GeometryNode {
        let cutter = cube(DVec3::new(
            self.slot_width,
            self.slot_depth + SLOT_CUT_DEPTH,
            self.slot_height,
        ));
        translate(
            self.slot_origin(index),
            rotate(
                DVec3::new(self.spec.slot_angle(), 0.0, 0.0),
                translate(DVec3::new(0.0, -SLOT_CUT_DEPTH, 0.0), cutter),
            ),
        )
    }

    /// Cylindrical finger hole through the full height, centred on the
    /// tower's width, in front of the front face.
    pub fn grabby_slot(&self) -> GeometryNode {
        translate(
            DVec3::new(
                self.tower_width / 2.0,
                -self.spec.grabby_slot_offset(),
                -GRABBY_OVERCUT,
            ),
            cylinder(
                self.tower_height + GRABBY_OVERCUT * 2.0,
                self.spec.grabby_slot_diameter(),
            ),
        )
    }

    /// Label text extruded downward into the top face.
    pub fn label_cut(&self) -> GeometryNode {
        let m = self.spec.slot_margin();
        translate(
            DVec3::new(
                self.tower_width / 2.0,
                self.tower_depth / 2.0,
                self.tower_height - m / 2.0 + LABEL_LIFT,
            ),
            linear_extrude(m, text(self.spec.label(), LABEL_TEXT_SIZE)),
        )
    }

    /// Body minus every slot, the grabby hole and the label.
    pub fn assemble(&self) -> GeometryNode {
        let body = cube(DVec3::new(self.tower_width, self.tower_depth, self.tower_height));

        let mut parts = Vec::with_capacity(self.slot_count() as usize + 3);
        parts.push(body);
        parts.extend((0..self.slot_count()).map(|i| self.slot(i)));
        parts.push(self.grabby_slot());
        parts.push(self.label_cut());
        difference(parts)
    }
}

// =============================================================================
// TESTS
// =============================================================================
