//! # Configuration Constants
//!
//! Constants shared by the tower builder and the OpenSCAD serializer.
//!
//! ## Categories
//!
//! - **Precision**: Floating-point comparison tolerances
//! - **Resolution**: Global `$fn` written into every generated file
//! - **Cutting**: Overshoot lengths that keep boolean cuts clean
//! - **Labels**: Text sizing for the embossed tower label

use std::fmt;

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Epsilon for floating-point comparisons.
///
/// Tower dimensions are sums of a handful of millimetre values, so anything
/// below this is accumulated rounding noise.
///
/// # Example
///
/// ```rust
/// use config::constants::EPSILON;
///
/// let sum: f64 = 0.1 + 0.2;
/// assert!((sum - 0.3).abs() < EPSILON);
/// ```
pub const EPSILON: f64 = 1e-9;

// =============================================================================
// RESOLUTION CONSTANTS
// =============================================================================

/// Default `$fn` (fragment count) emitted in the generated file header.
///
/// Applies to the grabby cylinder and the label glyph outlines.
///
/// # Example
///
/// ```rust
/// use config::constants::DEFAULT_SEGMENTS;
/// assert_eq!(DEFAULT_SEGMENTS, 48);
/// ```
pub const DEFAULT_SEGMENTS: u32 = 48;

/// Smallest `$fn` accepted for a generated file.
///
/// Fewer than three fragments cannot describe a closed outline.
pub const MIN_SEGMENTS: u32 = 3;

// =============================================================================
// CUTTING CONSTANTS
// =============================================================================

/// Distance a slot cut is extended toward the front (negative Y) before it is
/// rotated, so the tilted box still breaks through the tower face.
///
/// # Example
///
/// ```rust
/// use config::constants::SLOT_CUT_DEPTH;
///
/// let slot_depth = 12.8;
/// let cut_depth = slot_depth + SLOT_CUT_DEPTH;
/// assert!(cut_depth > slot_depth);
/// ```
pub const SLOT_CUT_DEPTH: f64 = 50.0;

/// Distance the grabby cylinder overshoots the tower at the bottom and at
/// the top.
///
/// The cylinder starts at `-GRABBY_OVERCUT` and is
/// `tower_height + 2 * GRABBY_OVERCUT` tall.
pub const GRABBY_OVERCUT: f64 = 5.0;

/// Largest slot count accepted for one tower.
///
/// A thousand slots is already a tower metres tall; anything above is a
/// typo in the table.
pub const MAX_SLOT_COUNT: u32 = 1000;

// =============================================================================
// LABEL CONSTANTS
// =============================================================================

/// Font size passed to `text()` for tower labels.
pub const LABEL_TEXT_SIZE: f64 = 3.5;

/// Vertical lift applied to the label extrusion above
/// `tower_height - slot_margin / 2`.
pub const LABEL_LIFT: f64 = 0.1;

/// Rough advance width of one label glyph relative to the font size.
///
/// Used only to warn when a label is likely wider than the tower top.
pub const LABEL_GLYPH_ASPECT: f64 = 0.7;

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Checks if two f64 values are approximately equal within EPSILON.
///
/// # Example
///
/// ```rust
/// use config::constants::approx_equal;
///
/// assert!(approx_equal(66.5, 66.5 + 1e-12));
/// assert!(!approx_equal(66.5, 66.6));
/// ```
#[inline]
pub fn approx_equal(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

/// Estimates the rendered width of a label at [`LABEL_TEXT_SIZE`].
///
/// # Example
///
/// ```rust
/// use config::constants::estimated_label_width;
///
/// assert!(estimated_label_width("CR2032") > estimated_label_width("LR44"));
/// ```
pub fn estimated_label_width(label: &str) -> f64 {
    label.chars().count() as f64 * LABEL_TEXT_SIZE * LABEL_GLYPH_ASPECT
}

// =============================================================================
// GENERATOR CONFIG
// =============================================================================

/// Immutable snapshot of the generator settings that are not part of a
/// battery table.
///
/// # Examples
/// ```
/// use config::constants::GeneratorConfig;
/// let config = GeneratorConfig::default();
/// assert_eq!(config.segments, 48);
/// assert!(config.include_parameters);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeneratorConfig {
    /// `$fn` written into the file header.
    pub segments: u32,
    /// Whether the resolved parameters are appended as a trailing comment.
    pub include_parameters: bool,
}

impl GeneratorConfig {
    /// Builds a configuration, rejecting segment counts below
    /// [`MIN_SEGMENTS`].
    ///
    /// # Examples
    /// ```
    /// use config::constants::GeneratorConfig;
    /// let cfg = GeneratorConfig::new(64, false).expect("valid config");
    /// assert_eq!(cfg.segments, 64);
    /// assert!(GeneratorConfig::new(2, true).is_err());
    /// ```
    pub fn new(segments: u32, include_parameters: bool) -> Result<Self, ConfigError> {
        if segments < MIN_SEGMENTS {
            return Err(ConfigError::InvalidSegments(segments));
        }
        Ok(Self {
            segments,
            include_parameters,
        })
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            segments: DEFAULT_SEGMENTS,
            include_parameters: true,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// Raised when the requested segment count is too small to form a polygon.
    InvalidSegments(u32),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidSegments(value) => {
                write!(f, "segments must be >= {MIN_SEGMENTS}: {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
