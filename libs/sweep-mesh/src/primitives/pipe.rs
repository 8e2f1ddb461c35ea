//! # Pipe Primitive
//!
//! Hollow pipes with wall thickness, swept along a straight axis or a cubic
//! Hermite curve. Both share one sweep: sample the path, build frames, place
//! outer and inner rings, then stitch them into a closed shell.

use crate::error::MeshResult;
use crate::mesh::Mesh;
use crate::path::{HermiteCurve, Path};
use crate::primitives::{frames_along, PipeParams};
use crate::ring::rings_along;
use crate::stitch::stitch_shell;
use crate::vec3::Point3;

/// Sweeps an annulus along `path`.
///
/// # Errors
///
/// Fails with [`MeshError::InvalidGeometry`](crate::MeshError) on invalid
/// radii, sample counts, or a zero-length step along the path.
pub fn sweep_pipe(path: &Path, params: &PipeParams) -> MeshResult<Mesh> {
    let (outer_radius, inner_radius) = params.radii()?;
    let centers = path.sample(params.axial_samples)?;
    let frames = frames_along(path, &centers)?;

    let outer = rings_along(&centers, &frames, outer_radius, params.radial_segments)?;
    let inner = rings_along(&centers, &frames, inner_radius, params.radial_segments)?;
    stitch_shell(&outer, &inner)
}

/// Creates a straight hollow pipe from `start` to `end`.
///
/// Every ring shares the frame of `end - start`.
///
/// # Example
///
/// ```rust
/// use sweep_mesh::primitives::{create_pipe, PipeParams};
/// use glam::DVec3;
///
/// let params = PipeParams::new(1.0, 0.25);
/// let mesh = create_pipe(DVec3::ZERO, DVec3::new(0.0, 0.0, 8.0), &params).unwrap();
/// let (n, m) = (params.axial_samples, params.radial_segments);
/// assert_eq!(mesh.triangle_count(), 4 * m * (n - 1) + 4 * m);
/// ```
pub fn create_pipe(start: Point3, end: Point3, params: &PipeParams) -> MeshResult<Mesh> {
    sweep_pipe(&Path::Linear { start, end }, params)
}

/// Creates a hollow pipe following a Hermite curve.
///
/// Each ring is oriented by the step from its center to the next one (the
/// last ring reuses the final step).
pub fn create_hermite_pipe(curve: &HermiteCurve, params: &PipeParams) -> MeshResult<Mesh> {
    sweep_pipe(&Path::Hermite(*curve), params)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MeshError;
    use crate::vec3::Vec3;
    use approx::assert_relative_eq;
    use config::constants::EPSILON;
    use glam::DVec3;

    fn params(outer: f64, thickness: f64, n: usize, m: usize) -> PipeParams {
        PipeParams {
            outer_radius: outer,
            thickness,
            axial_samples: n,
            radial_segments: m,
        }
    }

    fn bend() -> HermiteCurve {
        HermiteCurve {
            start: Point3::new(0.0, 0.0, 0.0),
            end: Point3::new(4.0, 0.0, 4.0),
            start_tangent: Vec3::new(0.0, 0.0, 6.0),
            end_tangent: Vec3::new(6.0, 0.0, 0.0),
        }
    }

    #[test]
    fn test_pipe_counts() {
        let (n, m) = (20, 30);
        let end = DVec3::new(2.0, 1.0, 0.0);
        let mesh = create_pipe(DVec3::ZERO, end, &params(1.0, 0.1, n, m)).unwrap();
        assert_eq!(mesh.vertex_count(), 2 * n * m);
        assert_eq!(mesh.triangle_count(), 4 * m * (n - 1) + 4 * m);
        assert!(mesh.validate());
    }

    #[test]
    fn test_pipe_walls_at_outer_and_inner_radius() {
        let (n, m) = (4, 8);
        let start = DVec3::new(0.0, -1.0, 0.0);
        let end = DVec3::new(0.0, -1.0, 5.0);
        let mesh = create_pipe(start, end, &params(2.0, 0.5, n, m)).unwrap();
        let distance = |v: DVec3| DVec3::new(v.x, v.y + 1.0, 0.0).length();
        for v in &mesh.vertices()[..n * m] {
            assert_relative_eq!(distance(*v), 2.0, epsilon = EPSILON);
        }
        for v in &mesh.vertices()[n * m..] {
            assert_relative_eq!(distance(*v), 1.5, epsilon = EPSILON);
        }
    }

    #[test]
    fn test_pipe_rejects_thickness_at_or_above_radius() {
        let result = create_pipe(DVec3::ZERO, DVec3::Z, &params(1.0, 1.0, 4, 8));
        assert!(matches!(result, Err(MeshError::InvalidGeometry { .. })));
        assert!(create_pipe(DVec3::ZERO, DVec3::Z, &params(1.0, 2.0, 4, 8)).is_err());
    }

    #[test]
    fn test_pipe_rejects_degenerate_axis() {
        assert!(create_pipe(DVec3::X, DVec3::X, &params(1.0, 0.1, 4, 8)).is_err());
    }

    #[test]
    fn test_hermite_pipe_counts() {
        let (n, m) = (40, 30);
        let mesh = create_hermite_pipe(&bend(), &params(0.5, 0.1, n, m)).unwrap();
        assert_eq!(mesh.vertex_count(), 2 * n * m);
        assert_eq!(mesh.triangle_count(), 4 * m * (n - 1) + 4 * m);
        assert!(mesh.validate());
    }

    #[test]
    fn test_hermite_pipe_rings_are_centered_on_curve() {
        let (n, m) = (10, 12);
        let curve = bend();
        let mesh = create_hermite_pipe(&curve, &params(0.5, 0.1, n, m)).unwrap();
        let centers = Path::Hermite(curve).sample(n).unwrap();
        for (i, center) in centers.iter().enumerate() {
            let ring = &mesh.vertices()[i * m..(i + 1) * m];
            let mean = ring.iter().copied().sum::<DVec3>() / m as f64;
            assert_relative_eq!((mean - *center).length(), 0.0, epsilon = EPSILON);
            for v in ring {
                assert_relative_eq!((*v - *center).length(), 0.5, epsilon = EPSILON);
            }
        }
    }

    #[test]
    fn test_hermite_pipe_mouth_layout() {
        let (n, m) = (12, 16);
        let mesh = create_hermite_pipe(&bend(), &params(0.5, 0.1, n, m)).unwrap();
        let walls = 2 * (2 * m * (n - 1));
        let inner = (n * m) as u32;
        let last_row = ((n - 1) * m) as u32;

        assert_eq!(mesh.triangle(walls), [0, inner + 1, inner]);
        assert_eq!(mesh.triangle(walls + 1), [0, 1, inner + 1]);

        let (o0, i0) = (last_row, inner + last_row);
        assert_eq!(mesh.triangle(walls + 2 * m), [o0, i0, i0 + 1]);
        assert_eq!(mesh.triangle(walls + 2 * m + 1), [o0, i0 + 1, o0 + 1]);
    }

    #[test]
    fn test_hermite_pipe_rejects_collapsed_curve() {
        let curve = HermiteCurve {
            start: Point3::ONE,
            end: Point3::ONE,
            start_tangent: Vec3::ZERO,
            end_tangent: Vec3::ZERO,
        };
        assert!(create_hermite_pipe(&curve, &params(0.5, 0.1, 8, 8)).is_err());
    }
}
