//! # Primitive Constructors
//!
//! - `cube([x, y, z])` - Axis-aligned box anchored at the origin
//! - `cylinder(h, d)` - Straight cylinder standing on the XY plane
//! - `text(s, size)` - Centered 2D text outline

use glam::DVec3;

use crate::geometry::GeometryNode;

/// Box with one corner at the origin.
///
/// ## OpenSCAD Equivalent
///
/// ```text
/// cube(size = [x, y, z]);
/// ```
pub fn cube(size: DVec3) -> GeometryNode {
    GeometryNode::Cube {
        size: size.to_array(),
    }
}

/// Straight cylinder of the given height and diameter, base on the XY plane.
///
/// ## OpenSCAD Equivalent
///
/// ```text
/// cylinder(h = height, d = diameter);
/// ```
pub fn cylinder(height: f64, diameter: f64) -> GeometryNode {
    GeometryNode::Cylinder {
        height,
        radius: diameter / 2.0,
    }
}

/// Text outline centered on the origin in both directions.
///
/// ## OpenSCAD Equivalent
///
/// ```text
/// text(text = "...", size = size, halign = "center", valign = "center");
/// ```
pub fn text(content: impl Into<String>, size: f64) -> GeometryNode {
    GeometryNode::Text {
        text: content.into(),
        size,
    }
}

// =============================================================================
// TESTS
// =============================================================================
