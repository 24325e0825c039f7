//! # OpenSCAD CSG
//!
//! Builds constructive solid geometry trees and serializes them as OpenSCAD
//! scripts. Nothing here meshes or evaluates geometry; the output is handed
//! to OpenSCAD (or any compatible renderer) for that.
//!
//! ## Architecture
//!
//! ```text
//! primitives / transforms / boolean → GeometryNode → printer → ScadDocument → .scad
//! ```
//!
//! ## Example
//!
//! ```rust
//! use glam::DVec3;
//! use openscad_csg::{cube, cylinder, difference, translate, ScadDocument};
//!
//! let block = difference(vec![
//!     cube(DVec3::new(10.0, 10.0, 10.0)),
//!     translate(DVec3::new(5.0, 5.0, -1.0), cylinder(12.0, 4.0)),
//! ]);
//! let source = ScadDocument::new(block).render().unwrap();
//! assert!(source.starts_with("$fn = 48;"));
//! assert!(source.contains("cylinder(h = 12, d = 4);"));
//! ```

pub mod boolean;
pub mod error;
pub mod export;
pub mod geometry;
pub mod primitives;
pub mod printer;
pub mod transforms;

// Re-export public API
pub use boolean::{difference, union};
pub use error::CsgError;
pub use export::ScadDocument;
pub use geometry::GeometryNode;
pub use primitives::{cube, cylinder, text};
pub use printer::print;
pub use transforms::{linear_extrude, rotate, translate};
