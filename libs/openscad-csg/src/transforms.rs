//! # Transform Constructors
//!
//! ## Transforms
//!
//! - `translate([x, y, z])` - Move geometry
//! - `rotate([x, y, z])` - Rotate geometry (Euler angles, degrees)
//! - `linear_extrude(height)` - Extrude 2D geometry along Z

use glam::DVec3;

use crate::geometry::GeometryNode;

/// Wrap `child` in a translation.
///
/// ## OpenSCAD Signature
///
/// ```text
/// translate(v = [x, y, z]) child;
/// ```
pub fn translate(offset: DVec3, child: GeometryNode) -> GeometryNode {
    GeometryNode::Translate {
        offset: offset.to_array(),
        child: Box::new(child),
    }
}

/// Wrap `child` in a rotation.
///
/// ## OpenSCAD Signature
///
/// ```text
/// rotate(a = [x, y, z]) child;
/// ```
pub fn rotate(angles: DVec3, child: GeometryNode) -> GeometryNode {
    GeometryNode::Rotate {
        angles: angles.to_array(),
        child: Box::new(child),
    }
}

/// Extrude a 2D `child` upward from the XY plane.
///
/// ## OpenSCAD Signature
///
/// ```text
/// linear_extrude(height = h) child;
/// ```
pub fn linear_extrude(height: f64, child: GeometryNode) -> GeometryNode {
    debug_assert!(child.is_2d(), "linear_extrude needs a 2D child, got {}", child.name());
    GeometryNode::LinearExtrude {
        height,
        child: Box::new(child),
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::{cube, text};

    #[test]
    fn test_translate_wraps_child() {
        let node = translate(DVec3::new(21.0, 0.0, 0.0), cube(DVec3::ONE));
        match node {
            GeometryNode::Translate { offset, child } => {
                assert_eq!(offset, [21.0, 0.0, 0.0]);
                assert_eq!(child.name(), "cube");
            }
            other => panic!("Expected Translate, got {:?}", other),
        }
    }

    #[test]
    fn test_rotate_about_x() {
        let node = rotate(DVec3::new(-15.0, 0.0, 0.0), cube(DVec3::ONE));
        match node {
            GeometryNode::Rotate { angles, .. } => assert_eq!(angles, [-15.0, 0.0, 0.0]),
            other => panic!("Expected Rotate, got {:?}", other),
        }
    }

    #[test]
    fn test_linear_extrude_text() {
        let node = linear_extrude(2.0, text("LR44", 3.5));
        match node {
            GeometryNode::LinearExtrude { height, child } => {
                assert_eq!(height, 2.0);
                assert!(child.is_2d());
            }
            other => panic!("Expected LinearExtrude, got {:?}", other),
        }
    }
}
