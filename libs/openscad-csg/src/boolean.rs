//! # Boolean Operations
//!
//! Constructors for CSG boolean operations.
//!
//! ## Operations
//!
//! - `union()` - Combine geometries
//! - `difference()` - Subtract geometries
//!
//! Empty children are dropped and degenerate operations collapse the way
//! OpenSCAD evaluates them: a union of one child is that child, a union of
//! nothing is empty.

use crate::geometry::GeometryNode;

/// Combine all children into a single geometry.
///
/// ## Example
///
/// ```text
/// union() {
///     cube(10);
///     translate([5, 0, 0]) cube(10);
/// }
/// ```
pub fn union(children: Vec<GeometryNode>) -> GeometryNode {
    let mut child_nodes: Vec<GeometryNode> =
        children.into_iter().filter(|c| !c.is_empty()).collect();

    match child_nodes.len() {
        0 => GeometryNode::Empty,
        1 => child_nodes.remove(0),
        _ => GeometryNode::Union {
            children: child_nodes,
        },
    }
}

/// Subtract all subsequent children from the first child.
///
/// An empty base yields empty geometry; a base with nothing left to subtract
/// is returned as-is.
///
/// ## Example
///
/// ```text
/// difference() {
///     cube(10);
///     sphere(6);  // Subtracted from cube
/// }
/// ```
pub fn difference(children: Vec<GeometryNode>) -> GeometryNode {
    let mut iter = children.into_iter();
    let base = match iter.next() {
        Some(base) if !base.is_empty() => base,
        _ => return GeometryNode::Empty,
    };

    let cutters: Vec<GeometryNode> = iter.filter(|c| !c.is_empty()).collect();
    if cutters.is_empty() {
        return base;
    }

    let mut child_nodes = Vec::with_capacity(cutters.len() + 1);
    child_nodes.push(base);
    child_nodes.extend(cutters);
    GeometryNode::Difference {
        children: child_nodes,
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::{cube, cylinder};
    use glam::DVec3;

    #[test]
    fn test_union_empty() {
        assert!(union(vec![]).is_empty());
        assert!(union(vec![GeometryNode::Empty]).is_empty());
    }

    #[test]
    fn test_union_single_child_collapses() {
        let result = union(vec![cube(DVec3::ONE)]);
        assert_eq!(result.name(), "cube");
    }

    #[test]
    fn test_union_keeps_order() {
        let result = union(vec![cube(DVec3::ONE), GeometryNode::Empty, cylinder(1.0, 1.0)]);
        match result {
            GeometryNode::Union { children } => {
                assert_eq!(children.len(), 2);
                assert_eq!(children[0].name(), "cube");
                assert_eq!(children[1].name(), "cylinder");
            }
            other => panic!("Expected Union, got {:?}", other),
        }
    }

    #[test]
    fn test_difference_empty_base() {
        let result = difference(vec![GeometryNode::Empty, cube(DVec3::ONE)]);
        assert!(result.is_empty());
        assert!(difference(vec![]).is_empty());
    }

    #[test]
    fn test_difference_without_cutters_returns_base() {
        let result = difference(vec![cube(DVec3::ONE), GeometryNode::Empty]);
        assert_eq!(result.name(), "cube");
    }

    #[test]
    fn test_difference_base_first() {
        let result = difference(vec![
            cube(DVec3::splat(10.0)),
            cylinder(12.0, 4.0),
            cylinder(12.0, 2.0),
        ]);
        match result {
            GeometryNode::Difference { children } => {
                assert_eq!(children.len(), 3);
                assert_eq!(children[0].name(), "cube");
            }
            other => panic!("Expected Difference, got {:?}", other),
        }
    }
}
