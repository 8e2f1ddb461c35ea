//! # Ring Generator
//!
//! Circular cross-sections placed in the plane of a [`Frame`].

use std::f64::consts::TAU;

use config::constants::MIN_RADIAL_SEGMENTS;

use crate::error::{MeshError, MeshResult};
use crate::frame::Frame;
use crate::vec3::Point3;

/// One circular cross-section of a swept solid.
///
/// `points[j]` sits at angle `2π·j/m`; there is no duplicate closing point,
/// consumers wrap with `(j + 1) % m`.
#[derive(Debug, Clone, PartialEq)]
pub struct Ring {
    /// Center of the circle
    pub center: Point3,
    /// Circle radius
    pub radius: f64,
    /// Evenly spaced points, counter-clockwise around the frame axis
    pub points: Vec<Point3>,
}

impl Ring {
    /// Number of points in the ring.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns true if the ring has no points.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

fn check_ring_params(radius: f64, segments: usize) -> MeshResult<()> {
    if segments < MIN_RADIAL_SEGMENTS {
        return Err(MeshError::invalid(format!(
            "ring needs at least {MIN_RADIAL_SEGMENTS} points, got {segments}"
        )));
    }
    if !radius.is_finite() || radius < 0.0 {
        return Err(MeshError::invalid(format!(
            "ring radius must be finite and non-negative: {radius}"
        )));
    }
    Ok(())
}

/// Generates a ring of `segments` points around `center`.
///
/// `ring[j] = center + radius·(cos θ_j·a + sin θ_j·b)`, `θ_j = 2π·j/segments`.
///
/// # Errors
///
/// [`MeshError::InvalidGeometry`] if `segments < 3` or the radius is
/// negative or not finite.
///
/// # Example
///
/// ```rust
/// use sweep_mesh::frame::Frame;
/// use sweep_mesh::ring::generate_ring;
/// use glam::DVec3;
///
/// let frame = Frame::from_direction(DVec3::Z).unwrap();
/// let ring = generate_ring(DVec3::ZERO, &frame, 1.0, 4).unwrap();
/// assert_eq!(ring.len(), 4);
/// assert!((ring.points[0] - DVec3::X).length() < 1e-12);
/// ```
pub fn generate_ring(
    center: Point3,
    frame: &Frame,
    radius: f64,
    segments: usize,
) -> MeshResult<Ring> {
    check_ring_params(radius, segments)?;

    let step = TAU / segments as f64;
    let points = (0..segments)
        .map(|j| center + frame.offset(radius, step * j as f64))
        .collect();

    Ok(Ring {
        center,
        radius,
        points,
    })
}

/// Generates one ring per center, pairing each center with its frame.
///
/// A single frame may be reused for every center of a straight path by
/// passing a one-element slice.
///
/// # Errors
///
/// [`MeshError::InvalidGeometry`] if the frame count is neither 1 nor the
/// center count, or a ring parameter is invalid.
pub fn rings_along(
    centers: &[Point3],
    frames: &[Frame],
    radius: f64,
    segments: usize,
) -> MeshResult<Vec<Ring>> {
    check_ring_params(radius, segments)?;

    match frames {
        [frame] => centers
            .iter()
            .map(|&center| generate_ring(center, frame, radius, segments))
            .collect(),
        _ if frames.len() == centers.len() => centers
            .iter()
            .zip(frames)
            .map(|(&center, frame)| generate_ring(center, frame, radius, segments))
            .collect(),
        _ => Err(MeshError::invalid(format!(
            "expected 1 or {} frames, got {}",
            centers.len(),
            frames.len()
        ))),
    }
}
