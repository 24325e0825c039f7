//! # Storage Errors
//!
//! Every failure here is a configuration failure: an unknown battery label,
//! a missing or out-of-range parameter, or an unreadable definition. They
//! are raised before any geometry is built.

use config::constants::ConfigError;
use openscad_csg::CsgError;
use thiserror::Error;

/// Errors raised while resolving specs or generating a storage assembly.
#[derive(Debug, Error)]
pub enum StorageError {
    /// A requested label has no entry in the type table.
    #[error("Unknown battery type: {0}")]
    UnknownBatteryType(String),

    /// A required parameter is absent after overlaying defaults.
    #[error("Missing field `{field}` for {label}")]
    MissingField {
        label: String,
        field: &'static str,
    },

    /// A parameter is present but outside its valid range.
    #[error("Invalid field `{field}` for {label}: {reason}")]
    InvalidField {
        label: String,
        field: &'static str,
        reason: String,
    },

    /// One overlay layer sets both `battery_count` and `min_battery_count`.
    #[error("Both `battery_count` and `min_battery_count` set for {0}")]
    ConflictingSlotCount(String),

    /// Order index past the end of the requested order.
    #[error("Order index {index} out of range ({len} types requested)")]
    IndexOutOfRange { index: usize, len: usize },

    /// Nothing requested.
    #[error("No battery types requested")]
    EmptyOrder,

    /// A JSON storage definition could not be parsed.
    #[error("Invalid storage definition: {0}")]
    Definition(#[from] serde_json::Error),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Csg(#[from] CsgError),
}

// =============================================================================
// TESTS
// =============================================================================
