//! # Generation Pipeline
//!
//! ```text
//! StorageDefinition → StorageConfig → Assembly → ScadDocument → <name>.scad
//! ```

use std::path::{Path, PathBuf};

use config::constants::GeneratorConfig;
use openscad_csg::ScadDocument;
use tracing::info;

use crate::assembly::Assembly;
use crate::error::StorageError;
use crate::report::parameter_report;
use crate::resolver::StorageConfig;
use crate::table::StorageDefinition;
use crate::variant::Variant;

/// Knobs for one generation run.
#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    /// Output settings (`$fn`, parameter trailer).
    pub config: GeneratorConfig,
    /// Custom table replacing the variant's built-in one.
    pub definition: Option<StorageDefinition>,
    /// Labels replacing the table's order.
    pub order: Option<Vec<String>>,
}

impl GenerateOptions {
    /// Options with a validated output config and the variant's own table.
    pub fn new(segments: u32, include_parameters: bool) -> Result<Self, StorageError> {
        Ok(Self {
            config: GeneratorConfig::new(segments, include_parameters)?,
            ..Default::default()
        })
    }

    pub fn with_definition(mut self, definition: StorageDefinition) -> Self {
        self.definition = Some(definition);
        self
    }

    /// Build these labels instead of the table's order.
    pub fn with_order(mut self, order: Vec<String>) -> Self {
        self.order = Some(order);
        self
    }
}

/// A generated, not yet written, storage file.
#[derive(Debug, Clone)]
pub struct Generated {
    pub variant: Variant,
    pub file_name: String,
    pub assembly: Assembly,
    pub document: ScadDocument,
}

impl Generated {
    /// Full file contents.
    pub fn render(&self) -> Result<String, StorageError> {
        Ok(self.document.render()?)
    }

    /// Write into `dir` under [`file_name`](Self::file_name) and return the
    /// written path.
    pub fn write(&self, dir: &Path) -> Result<PathBuf, StorageError> {
        let path = dir.join(&self.file_name);
        self.document.write_to(&path)?;
        Ok(path)
    }
}

/// Resolve, build and frame one storage assembly. Nothing touches the file
/// system.
pub fn generate(variant: Variant, options: &GenerateOptions) -> Result<Generated, StorageError> {
    let definition = options
        .definition
        .clone()
        .unwrap_or_else(|| variant.definition());

    let mut storage = StorageConfig::new(definition);
    if let Some(order) = &options.order {
        storage = storage.with_order(order.iter().cloned());
    }

    let assembly = Assembly::build(&storage)?;
    let labels = assembly.labels();
    let file_name = variant.naming().file_name(labels.as_slice());

    info!(
        "Generating {} storage for {} as {}",
        variant,
        labels.join(", "),
        file_name
    );

    let header = format!(
        "Generated by cell-storage {}\n{} storage: {}",
        env!("CARGO_PKG_VERSION"),
        variant,
        labels.join(", ")
    );
    let mut document = ScadDocument::new(assembly.geometry())
        .with_segments(options.config.segments)
        .with_header_comment(header);
    if options.config.include_parameters {
        document = document.with_trailer_comment(parameter_report(&assembly));
    }

    Ok(Generated {
        variant,
        file_name,
        assembly,
        document,
    })
}

// =============================================================================
// TESTS
// =============================================================================
