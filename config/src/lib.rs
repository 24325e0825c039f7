//! # Config Crate
//!
//! Centralized configuration constants for the cell storage generator.
//! Every fabrication literal that is not part of a battery table (cut
//! overshoots, label sizing, tessellation) is defined here so the tower
//! geometry and the `.scad` printer agree on one value.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{DEFAULT_SEGMENTS, SLOT_CUT_DEPTH};
//!
//! let header = format!("$fn = {};", DEFAULT_SEGMENTS);
//! assert_eq!(header, "$fn = 48;");
//! assert!(SLOT_CUT_DEPTH > 0.0);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **OpenSCAD Compatible**: Segment counts map directly onto `$fn`
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;
