//! # Cylinder Primitive
//!
//! Single-wall solids swept along a straight axis: the open tube and the
//! closed, capped cylinder.

use crate::error::MeshResult;
use crate::mesh::Mesh;
use crate::path::Path;
use crate::primitives::{frames_along, TubeParams};
use crate::ring::{rings_along, Ring};
use crate::stitch::{stitch_capped, stitch_tube};
use crate::vec3::Point3;

/// Samples the axis and builds one ring per sample.
fn axis_rings(
    start: Point3,
    end: Point3,
    params: &TubeParams,
) -> MeshResult<(Vec<Point3>, Vec<Ring>)> {
    let radius = params.checked_radius()?;
    let path = Path::Linear { start, end };
    let centers = path.sample(params.axial_samples)?;
    let frames = frames_along(&path, &centers)?;
    let rings = rings_along(&centers, &frames, radius, params.radial_segments)?;
    Ok((centers, rings))
}

/// Creates an open single-wall tube from `start` to `end`.
///
/// # Returns
///
/// `axial_samples · radial_segments` vertices and
/// `2 · radial_segments · (axial_samples - 1)` triangles facing outward.
///
/// # Errors
///
/// [`MeshError::InvalidGeometry`](crate::MeshError) for a non-positive
/// radius, coincident endpoints, fewer than 2 axial samples or fewer than 3
/// radial segments.
pub fn create_tube(start: Point3, end: Point3, params: &TubeParams) -> MeshResult<Mesh> {
    let (_, rings) = axis_rings(start, end, params)?;
    stitch_tube(&rings)
}

/// Creates a closed cylinder from `start` (base) to `end` (top).
///
/// # Returns
///
/// The rings followed by the base and top centers, with
/// `2 · m · (n - 1) + 2 · m` triangles (lateral wall plus two fans).
///
/// # Example
///
/// ```rust
/// use sweep_mesh::primitives::{create_cylinder, TubeParams};
/// use glam::DVec3;
///
/// let params = TubeParams { radius: 1.0, axial_samples: 20, radial_segments: 30 };
/// let mesh = create_cylinder(DVec3::ZERO, DVec3::new(0.0, 0.0, 5.0), &params).unwrap();
/// assert_eq!(mesh.vertex_count(), 20 * 30 + 2);
/// assert_eq!(mesh.triangle_count(), 2 * 30 * 19 + 2 * 30);
/// ```
pub fn create_cylinder(start: Point3, end: Point3, params: &TubeParams) -> MeshResult<Mesh> {
    let (centers, rings) = axis_rings(start, end, params)?;
    let base = centers[0];
    let top = centers[centers.len() - 1];
    stitch_capped(&rings, base, top)
}
