//! # Path Sampler
//!
//! Discretizes a straight segment or a cubic Hermite curve into an ordered
//! list of centers. Parameters are uniform in `[0, 1]`, both ends included,
//! so the first and last centers are exactly the path endpoints.

use config::constants::MIN_PATH_SAMPLES;
use serde::{Deserialize, Serialize};

use crate::error::{MeshError, MeshResult};
use crate::vec3::{Point3, Vec3};

/// A cubic Hermite curve defined by endpoints and end tangents.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HermiteCurve {
    /// Curve start `p0`
    pub start: Point3,
    /// Curve end `p1`
    pub end: Point3,
    /// Tangent at the start `t0`
    pub start_tangent: Vec3,
    /// Tangent at the end `t1`
    pub end_tangent: Vec3,
}

impl HermiteCurve {
    /// Evaluates the curve at parameter `t`.
    ///
    /// `h00·p0 + h10·t0 + h01·p1 + h11·t1` with the standard cubic basis.
    pub fn point_at(&self, t: f64) -> Point3 {
        let [h00, h10, h01, h11] = hermite_basis(t);
        self.start * h00 + self.start_tangent * h10 + self.end * h01 + self.end_tangent * h11
    }
}

/// A path to sweep a cross-section along.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Path {
    /// Straight segment from `start` to `end`.
    Linear { start: Point3, end: Point3 },
    /// Cubic Hermite curve.
    Hermite(HermiteCurve),
}

impl Path {
    /// Samples `samples` centers along the path.
    pub fn sample(&self, samples: usize) -> MeshResult<Vec<Point3>> {
        match self {
            Path::Linear { start, end } => sample_linear(*start, *end, samples),
            Path::Hermite(curve) => sample_hermite(curve, samples),
        }
    }

    /// Returns true for a straight path, where one frame serves every ring.
    pub fn is_straight(&self) -> bool {
        matches!(self, Path::Linear { .. })
    }
}

/// Standard cubic Hermite basis `[h00, h10, h01, h11]` at `t`.
pub fn hermite_basis(t: f64) -> [f64; 4] {
    let t2 = t * t;
    let t3 = t2 * t;
    [
        2.0 * t3 - 3.0 * t2 + 1.0,
        t3 - 2.0 * t2 + t,
        -2.0 * t3 + 3.0 * t2,
        t3 - t2,
    ]
}

/// Uniform parameters `i / (samples - 1)` for `i = 0..samples`.
fn parameters(samples: usize) -> MeshResult<impl Iterator<Item = f64>> {
    if samples < MIN_PATH_SAMPLES {
        return Err(MeshError::invalid(format!(
            "path needs at least {MIN_PATH_SAMPLES} samples, got {samples}"
        )));
    }
    let last = (samples - 1) as f64;
    Ok((0..samples).map(move |i| i as f64 / last))
}

/// Samples `samples` points on the segment `start → end`.
///
/// `center(t) = (1 - t)·start + t·end`.
///
/// # Errors
///
/// [`MeshError::InvalidGeometry`] if `samples < 2`.
///
/// # Example
///
/// ```rust
/// use sweep_mesh::path::sample_linear;
/// use glam::DVec3;
///
/// let centers = sample_linear(DVec3::ZERO, DVec3::new(0.0, 0.0, 4.0), 5).unwrap();
/// assert_eq!(centers.len(), 5);
/// assert_eq!(centers[2], DVec3::new(0.0, 0.0, 2.0));
/// ```
pub fn sample_linear(start: Point3, end: Point3, samples: usize) -> MeshResult<Vec<Point3>> {
    Ok(parameters(samples)?
        .map(|t| start * (1.0 - t) + end * t)
        .collect())
}

/// Samples `samples` points on a Hermite curve.
///
/// # Errors
///
/// [`MeshError::InvalidGeometry`] if `samples < 2`.
pub fn sample_hermite(curve: &HermiteCurve, samples: usize) -> MeshResult<Vec<Point3>> {
    Ok(parameters(samples)?.map(|t| curve.point_at(t)).collect())
}

/// One travel direction per center.
///
/// Each center uses the segment to the next center; the last center reuses
/// the final segment. Directions are not normalized.
pub fn segment_directions(centers: &[Point3]) -> MeshResult<Vec<Vec3>> {
    if centers.len() < MIN_PATH_SAMPLES {
        return Err(MeshError::invalid(format!(
            "path needs at least {MIN_PATH_SAMPLES} samples, got {}",
            centers.len()
        )));
    }

    let mut directions: Vec<Vec3> = centers.windows(2).map(|pair| pair[1] - pair[0]).collect();
    if let Some(&last) = directions.last() {
        directions.push(last);
    }
    Ok(directions)
}
