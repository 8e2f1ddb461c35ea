//! # Segment Primitive
//!
//! A two-point line segment whose length is pinned to [`SEGMENT_LENGTH`].

use config::constants::SEGMENT_LENGTH;
use serde::{Deserialize, Serialize};

use crate::error::MeshResult;
use crate::vec3::{unit_or_invalid, Point3};

/// A straight segment between two points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    /// First endpoint
    pub start: Point3,
    /// Second endpoint
    pub end: Point3,
}

impl Segment {
    /// Distance between the endpoints.
    pub fn length(&self) -> f64 {
        self.start.distance(self.end)
    }

    /// Endpoints in order.
    pub fn points(&self) -> [Point3; 2] {
        [self.start, self.end]
    }
}

/// Creates a segment from `p1` toward `p2` with length exactly 4.
///
/// When `|p2 - p1|` is already exactly 4 the input is returned unchanged;
/// otherwise `p2` is moved along the same direction to `p1 + 4·û`.
///
/// # Errors
///
/// [`MeshError::InvalidGeometry`](crate::MeshError) if the points coincide
/// (no direction to preserve).
///
/// # Example
///
/// ```rust
/// use sweep_mesh::primitives::create_segment;
/// use glam::DVec3;
///
/// let segment = create_segment(DVec3::ZERO, DVec3::new(0.0, 10.0, 0.0)).unwrap();
/// assert_eq!(segment.end, DVec3::new(0.0, 4.0, 0.0));
/// ```
pub fn create_segment(p1: Point3, p2: Point3) -> MeshResult<Segment> {
    let offset = p2 - p1;
    if offset.length() == SEGMENT_LENGTH {
        return Ok(Segment { start: p1, end: p2 });
    }

    let direction = unit_or_invalid(offset, "segment direction")?;
    Ok(Segment {
        start: p1,
        end: p1 + direction * SEGMENT_LENGTH,
    })
}
