//! # Cell Storage
//!
//! Parametric 3D-printable storage towers for coin cells and button cells.
//!
//! ## Architecture
//!
//! ```text
//! table (StorageDefinition)
//!     → resolver (StorageConfig → BatterySpec)
//!     → tower (Tower: slots, grabby hole, label)
//!     → assembly (harmonize, place side by side)
//!     → generate (ScadDocument, file name)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use cell_storage::{generate, GenerateOptions, Variant};
//!
//! let generated = generate(Variant::CoinCell, &GenerateOptions::default()).unwrap();
//! assert_eq!(generated.file_name, "CR1632_CR2025.scad");
//! assert_eq!(generated.assembly.width(), 46.0);
//! ```

pub mod assembly;
pub mod error;
pub mod generate;
pub mod naming;
pub mod report;
pub mod resolver;
pub mod spec;
pub mod table;
pub mod tower;
pub mod variant;

// Re-exports for convenience
pub use assembly::{Assembly, PlacedTower};
pub use error::StorageError;
pub use generate::{generate, GenerateOptions, Generated};
pub use resolver::StorageConfig;
pub use spec::{BatterySpec, BatterySpecBuilder, ParamOverlay, SlotCount};
pub use table::{button_cell_definition, coin_cell_definition, StorageDefinition};
pub use tower::Tower;
pub use variant::Variant;
