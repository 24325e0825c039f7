//! # Geometry Types
//!
//! CSG node types. Every value is concrete: sizes are numbers, transforms
//! carry their vectors, text carries its string.

// =============================================================================
// GEOMETRY NODE
// =============================================================================

/// A node in the CSG tree.
#[derive(Debug, Clone, PartialEq)]
pub enum GeometryNode {
    // =========================================================================
    // 3D PRIMITIVES
    // =========================================================================

    /// Cube primitive.
    ///
    /// ## OpenSCAD Equivalent
    ///
    /// ```text
    /// cube(size = [x, y, z]);
    /// ```
    Cube {
        /// Size as [x, y, z], corner at the origin.
        size: [f64; 3],
    },

    /// Cylinder primitive.
    ///
    /// ## OpenSCAD Equivalent
    ///
    /// ```text
    /// cylinder(h = 10, d = 15);
    /// ```
    Cylinder {
        /// Height, base on the XY plane.
        height: f64,
        radius: f64,
    },

    // =========================================================================
    // 2D PRIMITIVES
    // =========================================================================

    /// Text outline, centered on the origin in both directions.
    ///
    /// ## OpenSCAD Equivalent
    ///
    /// ```text
    /// text(text = "CR2032", size = 3.5, halign = "center", valign = "center");
    /// ```
    Text {
        /// String to render.
        text: String,
        /// Font size (approximate cap height).
        size: f64,
    },

    // =========================================================================
    // TRANSFORMS
    // =========================================================================

    /// Translation transform.
    Translate {
        /// Translation vector [x, y, z].
        offset: [f64; 3],
        /// Child geometry.
        child: Box<GeometryNode>,
    },

    /// Rotation transform.
    Rotate {
        /// Rotation angles [x, y, z] in degrees.
        angles: [f64; 3],
        /// Child geometry.
        child: Box<GeometryNode>,
    },

    // =========================================================================
    // EXTRUSIONS
    // =========================================================================

    /// Linear extrusion of a 2D child.
    LinearExtrude {
        /// Extrusion height, upward from the XY plane.
        height: f64,
        /// Child 2D geometry.
        child: Box<GeometryNode>,
    },

    // =========================================================================
    // BOOLEAN OPERATIONS
    // =========================================================================

    /// Union of children.
    Union {
        /// Child geometries.
        children: Vec<GeometryNode>,
    },

    /// Difference (first child minus rest).
    Difference {
        /// Child geometries.
        children: Vec<GeometryNode>,
    },

    // =========================================================================
    // META
    // =========================================================================

    /// Empty geometry.
    Empty,
}

impl GeometryNode {
    /// Check if this is an empty node.
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Check if this is a 2D node.
    pub fn is_2d(&self) -> bool {
        matches!(self, Self::Text { .. })
    }

    /// Check if this is a 3D primitive.
    pub fn is_3d(&self) -> bool {
        matches!(self, Self::Cube { .. } | Self::Cylinder { .. })
    }

    /// OpenSCAD module name of this node.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Cube { .. } => "cube",
            Self::Cylinder { .. } => "cylinder",
            Self::Text { .. } => "text",
            Self::Translate { .. } => "translate",
            Self::Rotate { .. } => "rotate",
            Self::LinearExtrude { .. } => "linear_extrude",
            Self::Union { .. } => "union",
            Self::Difference { .. } => "difference",
            Self::Empty => "empty",
        }
    }

    /// Direct children of this node, in order.
    pub fn children(&self) -> &[GeometryNode] {
        match self {
            Self::Translate { child, .. }
            | Self::Rotate { child, .. }
            | Self::LinearExtrude { child, .. } => std::slice::from_ref(child.as_ref()),
            Self::Union { children } | Self::Difference { children } => children,
            Self::Cube { .. } | Self::Cylinder { .. } | Self::Text { .. } | Self::Empty => &[],
        }
    }

    /// Total number of nodes in this subtree, including `self`.
    pub fn node_count(&self) -> usize {
        1 + self.children().iter().map(GeometryNode::node_count).sum::<usize>()
    }

    /// Number of nodes in this subtree with the given module name.
    pub fn count_named(&self, name: &str) -> usize {
        let own = usize::from(self.name() == name);
        own + self
            .children()
            .iter()
            .map(|c| c.count_named(name))
            .sum::<usize>()
    }
}

// =============================================================================
// TESTS
// =============================================================================
