//! # Document Export
//!
//! A [`ScadDocument`] is a printed tree plus the file-level framing OpenSCAD
//! expects: optional leading comment, the global `$fn` directive, and an
//! optional trailing block comment.
//!
//! ```text
//! // Generated by cell-storage 0.1.0
//! $fn = 48;
//!
//! union() {
//!     ...
//! }
//!
//! /*
//! parameters...
//! */
//! ```

use std::fs;
use std::path::Path;

use config::constants::DEFAULT_SEGMENTS;
use tracing::{debug, info};

use crate::error::CsgError;
use crate::geometry::GeometryNode;
use crate::printer::print;

/// An OpenSCAD script ready to be rendered.
#[derive(Debug, Clone, PartialEq)]
pub struct ScadDocument {
    /// Root geometry.
    pub body: GeometryNode,
    /// Global `$fn` written into the header.
    pub segments: u32,
    /// Line comment placed above the header, one `//` line per input line.
    pub header_comment: Option<String>,
    /// Block comment appended after the body.
    pub trailer_comment: Option<String>,
}

impl ScadDocument {
    /// Document with the default `$fn` and no comments.
    pub fn new(body: GeometryNode) -> Self {
        Self {
            body,
            segments: DEFAULT_SEGMENTS,
            header_comment: None,
            trailer_comment: None,
        }
    }

    /// Override the global `$fn`.
    pub fn with_segments(mut self, segments: u32) -> Self {
        self.segments = segments;
        self
    }

    pub fn with_header_comment(mut self, comment: impl Into<String>) -> Self {
        self.header_comment = Some(comment.into());
        self
    }

    pub fn with_trailer_comment(mut self, comment: impl Into<String>) -> Self {
        self.trailer_comment = Some(comment.into());
        self
    }

    /// Render the whole file as a string.
    pub fn render(&self) -> Result<String, CsgError> {
        let mut out = String::new();

        if let Some(comment) = &self.header_comment {
            for line in comment.lines() {
                if line.is_empty() {
                    out.push_str("//\n");
                } else {
                    out.push_str(&format!("// {}\n", line));
                }
            }
        }
        out.push_str(&format!("$fn = {};\n", self.segments));

        let body = print(&self.body)?;
        if !body.is_empty() {
            out.push('\n');
            out.push_str(&body);
        }

        if let Some(comment) = &self.trailer_comment {
            // A literal terminator inside the text would close the block early
            let safe = comment.replace("*/", "* /");
            out.push_str("\n/*\n");
            out.push_str(&safe);
            if !safe.ends_with('\n') {
                out.push('\n');
            }
            out.push_str("*/\n");
        }

        Ok(out)
    }

    /// Render and write to `path`, replacing any existing file.
    ///
    /// Nothing is written when rendering fails.
    pub fn write_to(&self, path: &Path) -> Result<(), CsgError> {
        let source = self.render()?;
        debug!(nodes = self.body.node_count(), bytes = source.len(), "Rendered document");

        fs::write(path, source).map_err(|source| CsgError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        info!("Wrote {}", path.display());
        Ok(())
    }
}

// =============================================================================
// TESTS
// =============================================================================
