//! # CSG Errors
//!
//! Error types for printing and exporting CSG trees.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while serializing a tree.
#[derive(Debug, Error)]
pub enum CsgError {
    /// A NaN or infinite value reached the printer.
    #[error("Non-finite value {value} in {node}")]
    NonFinite {
        /// Module name of the offending node.
        node: &'static str,
        /// The offending value.
        value: f64,
    },

    /// Writing the output file failed.
    #[error("Failed to write {}: {source}", path.display())]
    Io {
        /// Destination path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

// =============================================================================
// TESTS
// =============================================================================
