//! # Configuration Constants
//!
//! Centralized constants for the sweep-mesh pipeline. Geometry tolerances,
//! tessellation defaults and wireframe styling are defined here.
//!
//! ## Categories
//!
//! - **Precision**: Floating-point comparison tolerances
//! - **Resolution**: Default sample counts along paths and around rings
//! - **Geometry**: Fixed business values (segment length)
//! - **Styling**: Wireframe palette and line widths

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Epsilon for floating-point comparisons.
///
/// Geometric invariants (unit frames, ring radii, segment length) are
/// checked against this tolerance.
///
/// # Example
///
/// ```rust
/// use config::constants::EPSILON;
///
/// fn approximately_equal(a: f64, b: f64) -> bool {
///     (a - b).abs() < EPSILON
/// }
///
/// assert!(approximately_equal(1.0, 1.0 + 1e-12));
/// ```
pub const EPSILON: f64 = 1e-9;

/// Tolerance below which a cross product is treated as zero.
///
/// A path direction whose cross product with the reference axis is shorter
/// than this is considered parallel to that axis, and the frame builder
/// falls back to the next reference axis.
///
/// # Example
///
/// ```rust
/// use config::constants::PARALLEL_TOLERANCE;
///
/// let cross_length = 1e-12;
/// assert!(cross_length < PARALLEL_TOLERANCE);
/// ```
pub const PARALLEL_TOLERANCE: f64 = 1e-8;

/// Squared length below which a direction vector is treated as zero.
pub const MIN_DIRECTION_LENGTH_SQUARED: f64 = 1e-24;

// =============================================================================
// RESOLUTION CONSTANTS
// =============================================================================

/// Minimum number of points in a ring.
///
/// Three points are the smallest closed polygon.
pub const MIN_RADIAL_SEGMENTS: usize = 3;

/// Minimum number of samples along a path.
///
/// Two samples define a single segment.
pub const MIN_PATH_SAMPLES: usize = 2;

/// Default number of points per ring.
///
/// # Example
///
/// ```rust
/// use config::constants::DEFAULT_RADIAL_SEGMENTS;
///
/// let user_segments: Option<usize> = None;
/// assert_eq!(user_segments.unwrap_or(DEFAULT_RADIAL_SEGMENTS), 30);
/// ```
pub const DEFAULT_RADIAL_SEGMENTS: usize = 30;

/// Default number of samples along a straight axis (tubes, cylinders, pipes).
pub const DEFAULT_AXIAL_SAMPLES: usize = 20;

/// Default number of samples along a Hermite curve.
///
/// Curved paths need more rings than straight ones to look smooth.
pub const DEFAULT_HERMITE_SAMPLES: usize = 40;

// =============================================================================
// GEOMETRY CONSTANTS
// =============================================================================

/// Length every line segment is rescaled to.
///
/// # Example
///
/// ```rust
/// use config::constants::SEGMENT_LENGTH;
///
/// assert_eq!(SEGMENT_LENGTH, 4.0);
/// ```
pub const SEGMENT_LENGTH: f64 = 4.0;

// =============================================================================
// STYLING CONSTANTS
// =============================================================================

/// Default wireframe palette, indexed by a per-shape color index.
///
/// # Example
///
/// ```rust
/// use config::constants::DEFAULT_PALETTE;
///
/// assert_eq!(DEFAULT_PALETTE[0], "black");
/// ```
pub const DEFAULT_PALETTE: [&str; 5] = ["black", "red", "green", "blue", "purple"];

/// Line width used when drawing mesh wireframes.
pub const MESH_LINE_WIDTH: f64 = 4.0;

/// Line width used when drawing standalone segments.
pub const SEGMENT_LINE_WIDTH: f64 = 6.0;

/// Marker size at segment endpoints.
pub const SEGMENT_MARKER_SIZE: f64 = 4.0;

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
/// assert!(approx_equal(1.0, 1.0 + 1e-12));
/// assert!(!approx_equal(1.0, 1.1));
/// ```
#[inline]
pub fn approx_equal(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

/// Checks if a f64 value is approximately zero within EPSILON.
///
/// # Example
///
/// ```rust
/// use config::constants::approx_zero;
///
/// assert!(approx_zero(1e-12));
/// assert!(!approx_zero(0.1));
/// ```
#[inline]
pub fn approx_zero(value: f64) -> bool {
    value.abs() < EPSILON
}
