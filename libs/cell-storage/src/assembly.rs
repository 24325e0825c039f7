//! # Assembly Composer
//!
//! Builds every requested tower, harmonizes them to the tallest height and
//! the deepest depth, and places them left to right with no gap.

use glam::DVec3;
use openscad_csg::{translate, union, GeometryNode};
use tracing::info;

use crate::error::StorageError;
use crate::resolver::StorageConfig;
use crate::spec::BatterySpec;
use crate::tower::Tower;

/// A tower and its position along the assembly's width.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedTower {
    pub tower: Tower,
    /// X coordinate of the tower's left face.
    pub x_offset: f64,
}

/// Harmonized towers placed side by side.
#[derive(Debug, Clone, PartialEq)]
pub struct Assembly {
    towers: Vec<PlacedTower>,
    width: f64,
    height: f64,
    depth: f64,
}

impl Assembly {
    /// Resolve every requested type and assemble the towers.
    ///
    /// Fails before building any geometry if one spec does not resolve.
    pub fn build(config: &StorageConfig) -> Result<Self, StorageError> {
        let specs = config.resolve_all()?;
        Self::from_specs(specs)
    }

    /// Assemble towers from already-resolved specs, in order.
    pub fn from_specs(specs: Vec<BatterySpec>) -> Result<Self, StorageError> {
        if specs.is_empty() {
            return Err(StorageError::EmptyOrder);
        }

        let towers: Vec<Tower> = specs.into_iter().map(Tower::new).collect();

        let height = towers.iter().map(Tower::height).fold(0.0, f64::max);
        let depth = towers.iter().map(Tower::depth).fold(0.0, f64::max);

        let mut width = 0.0;
        let mut placed = Vec::with_capacity(towers.len());
        for mut tower in towers {
            tower.harmonize(height, depth);
            let x_offset = width;
            width += tower.width();
            placed.push(PlacedTower { tower, x_offset });
        }

        info!(
            "Assembled {} tower(s): {:.2} x {:.2} x {:.2} mm",
            placed.len(),
            width,
            depth,
            height
        );

        Ok(Self {
            towers: placed,
            width,
            height,
            depth,
        })
    }

    pub fn towers(&self) -> &[PlacedTower] {
        &self.towers
    }

    /// Total width, the sum of all tower widths.
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Shared tower height after harmonization.
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Shared tower depth after harmonization.
    pub fn depth(&self) -> f64 {
        self.depth
    }

    /// Labels of the placed towers, left to right.
    pub fn labels(&self) -> Vec<&str> {
        self.towers.iter().map(|p| p.tower.label()).collect()
    }

    /// Union of every tower translated to its offset.
    pub fn geometry(&self) -> GeometryNode {
        union(
            self.towers
                .iter()
                .map(|p| translate(DVec3::new(p.x_offset, 0.0, 0.0), p.tower.assemble()))
                .collect(),
        )
    }
}

// =============================================================================
// TESTS
// =============================================================================
