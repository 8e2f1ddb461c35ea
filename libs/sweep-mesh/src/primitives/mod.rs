//! # Primitives
//!
//! Mesh generation for the supported solids (box, tube, cylinder, pipe) and
//! the fixed-length line segment.

pub mod cuboid;
pub mod cylinder;
pub mod pipe;
pub mod segment;

pub use cuboid::create_box;
pub use cylinder::{create_cylinder, create_tube};
pub use pipe::{create_hermite_pipe, create_pipe};
pub use segment::{create_segment, Segment};

use config::constants::{DEFAULT_AXIAL_SAMPLES, DEFAULT_RADIAL_SEGMENTS};
use serde::{Deserialize, Serialize};

use crate::error::{MeshError, MeshResult};
use crate::frame::{frames_for, Frame};
use crate::path::{segment_directions, Path};
use crate::vec3::Point3;

fn default_axial_samples() -> usize {
    DEFAULT_AXIAL_SAMPLES
}

fn default_radial_segments() -> usize {
    DEFAULT_RADIAL_SEGMENTS
}

/// Parameters for single-wall solids (open tubes and capped cylinders).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TubeParams {
    /// Radius of the wall
    pub radius: f64,
    /// Number of rings along the axis
    #[serde(default = "default_axial_samples")]
    pub axial_samples: usize,
    /// Number of points per ring
    #[serde(default = "default_radial_segments")]
    pub radial_segments: usize,
}

impl Default for TubeParams {
    fn default() -> Self {
        Self {
            radius: 1.0,
            axial_samples: DEFAULT_AXIAL_SAMPLES,
            radial_segments: DEFAULT_RADIAL_SEGMENTS,
        }
    }
}

impl TubeParams {
    /// Creates parameters with the given radius and default resolution.
    pub fn with_radius(radius: f64) -> Self {
        Self {
            radius,
            ..Self::default()
        }
    }

    fn checked_radius(&self) -> MeshResult<f64> {
        positive(self.radius, "radius")
    }
}

/// Parameters for hollow pipes with wall thickness.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PipeParams {
    /// Radius of the exterior wall
    pub outer_radius: f64,
    /// Wall thickness; the interior radius is `outer_radius - thickness`
    pub thickness: f64,
    /// Number of rings along the path
    #[serde(default = "default_axial_samples")]
    pub axial_samples: usize,
    /// Number of points per ring
    #[serde(default = "default_radial_segments")]
    pub radial_segments: usize,
}

impl Default for PipeParams {
    fn default() -> Self {
        Self {
            outer_radius: 1.0,
            thickness: 0.2,
            axial_samples: DEFAULT_AXIAL_SAMPLES,
            radial_segments: DEFAULT_RADIAL_SEGMENTS,
        }
    }
}

impl PipeParams {
    /// Creates parameters with the given radius and thickness and default
    /// resolution.
    pub fn new(outer_radius: f64, thickness: f64) -> Self {
        Self {
            outer_radius,
            thickness,
            ..Self::default()
        }
    }

    /// Overrides the number of rings along the path.
    #[must_use]
    pub fn with_axial_samples(mut self, axial_samples: usize) -> Self {
        self.axial_samples = axial_samples;
        self
    }

    /// Validates the radii and returns `(outer, inner)`.
    ///
    /// # Errors
    ///
    /// [`MeshError::InvalidGeometry`] if either value is non-positive or the
    /// thickness leaves no cavity (`thickness >= outer_radius`).
    pub fn radii(&self) -> MeshResult<(f64, f64)> {
        let outer = positive(self.outer_radius, "outer radius")?;
        let thickness = positive(self.thickness, "thickness")?;
        if thickness >= outer {
            return Err(MeshError::invalid(format!(
                "thickness {thickness} must be smaller than outer radius {outer}"
            )));
        }
        Ok((outer, outer - thickness))
    }
}

/// Returns `value` if it is finite and strictly positive.
pub(crate) fn positive(value: f64, what: &str) -> MeshResult<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(MeshError::invalid(format!("{what} must be positive: {value}")))
    }
}

/// Frames for the sampled `centers` of `path`.
///
/// A straight path shares one frame built from its full direction, so rings
/// never twist. A curved path gets one frame per sample from the local
/// segment direction.
pub(crate) fn frames_along(path: &Path, centers: &[Point3]) -> MeshResult<Vec<Frame>> {
    if !path.is_straight() {
        return frames_for(&segment_directions(centers)?);
    }
    match (centers.first(), centers.last()) {
        (Some(start), Some(end)) => Ok(vec![Frame::from_direction(*end - *start)?]),
        _ => Err(MeshError::invalid("straight path has no samples")),
    }
}
