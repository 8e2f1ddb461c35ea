//! # Frame Builder
//!
//! Builds the orthonormal basis used to place circular cross-sections
//! perpendicular to a path direction.

use config::constants::PARALLEL_TOLERANCE;

use crate::error::{MeshError, MeshResult};
use crate::vec3::{try_unit, unit_or_invalid, Vec3};

/// Reference axes tried in order when building a frame.
const REFERENCE_AXES: [Vec3; 2] = [Vec3::X, Vec3::Y];

/// A local basis perpendicular to a direction.
///
/// `a` and `b` are unit length, orthogonal to each other and to `axis`.
/// Ring points are placed at `center + r·(cos θ·a + sin θ·b)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    /// Normalized direction the frame is built around.
    pub axis: Vec3,
    /// First in-plane basis vector, `b × axis`.
    pub a: Vec3,
    /// Second in-plane basis vector, `normalize(axis × reference)`.
    pub b: Vec3,
}

impl Frame {
    /// Builds a frame around `direction`.
    ///
    /// The reference axis is `(1,0,0)`, replaced by `(0,1,0)` when the
    /// direction is parallel (or anti-parallel) to it.
    ///
    /// # Errors
    ///
    /// [`MeshError::InvalidGeometry`] if `direction` is zero-length or not
    /// finite.
    ///
    /// # Example
    ///
    /// ```rust
    /// use sweep_mesh::frame::Frame;
    /// use glam::DVec3;
    ///
    /// let frame = Frame::from_direction(DVec3::new(0.0, 0.0, 2.0)).unwrap();
    /// assert_eq!(frame.axis, DVec3::Z);
    /// assert!(frame.a.dot(frame.b).abs() < 1e-12);
    /// ```
    pub fn from_direction(direction: Vec3) -> MeshResult<Self> {
        let axis = unit_or_invalid(direction, "frame direction")?;

        let b = REFERENCE_AXES
            .iter()
            .map(|reference| axis.cross(*reference))
            .find(|cross| cross.length() >= PARALLEL_TOLERANCE)
            .and_then(try_unit)
            .ok_or_else(|| {
                MeshError::degenerate(format!(
                    "direction {axis:?} is parallel to every reference axis"
                ))
            })?;
        let a = b.cross(axis);

        Ok(Self { axis, a, b })
    }

    /// Returns the in-plane offset at angle `theta` for a ring of `radius`.
    #[inline]
    pub fn offset(&self, radius: f64, theta: f64) -> Vec3 {
        let (sin, cos) = theta.sin_cos();
        (self.a * cos + self.b * sin) * radius
    }
}

/// Builds one frame per direction.
pub fn frames_for(directions: &[Vec3]) -> MeshResult<Vec<Frame>> {
    directions.iter().copied().map(Frame::from_direction).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use config::constants::{approx_equal, approx_zero, EPSILON};

    fn assert_orthonormal(frame: &Frame, direction: Vec3) {
        let d = direction.normalize();
        assert!(approx_equal(frame.a.length(), 1.0), "|a| = {}", frame.a.length());
        assert!(approx_equal(frame.b.length(), 1.0), "|b| = {}", frame.b.length());
        assert!(approx_zero(frame.a.dot(frame.b)), "a·b = {}", frame.a.dot(frame.b));
        assert!(approx_zero(frame.a.dot(d)), "a·d = {}", frame.a.dot(d));
        assert!(approx_zero(frame.b.dot(d)), "b·d = {}", frame.b.dot(d));
        assert!(approx_equal(frame.axis.dot(d), 1.0));
    }

    #[test]
    fn frame_is_orthonormal_for_many_directions() {
        let directions = [
            Vec3::new(0.0, 0.0, 1.0),
            Vec3::new(0.0, 1.0, 0.0),
            Vec3::new(1.0, 1.0, 1.0),
            Vec3::new(-3.0, 0.5, 2.0),
            Vec3::new(1e-3, -7.0, 4.0),
            Vec3::new(100.0, 0.0, -0.01),
        ];
        for d in directions {
            let frame = Frame::from_direction(d).expect("non-zero direction");
            assert_orthonormal(&frame, d);
        }
    }

    #[test]
    fn frame_falls_back_when_parallel_to_x() {
        let frame = Frame::from_direction(Vec3::new(5.0, 0.0, 0.0)).expect("fallback axis");
        assert_orthonormal(&frame, Vec3::X);
        // X × Y = Z, so b follows the fallback reference
        assert_relative_eq!(frame.b.z, 1.0, epsilon = EPSILON);
    }

    #[test]
    fn frame_falls_back_when_anti_parallel_to_x() {
        let frame = Frame::from_direction(Vec3::new(-2.0, 0.0, 0.0)).expect("fallback axis");
        assert_orthonormal(&frame, -Vec3::X);
    }

    #[test]
    fn frame_along_z_uses_x_reference() {
        let frame = Frame::from_direction(Vec3::Z).expect("valid");
        // Z × X = Y, then a = Y × Z = X
        assert_relative_eq!(frame.b.y, 1.0, epsilon = EPSILON);
        assert_relative_eq!(frame.a.x, 1.0, epsilon = EPSILON);
    }

    #[test]
    fn frame_rejects_zero_direction() {
        let err = Frame::from_direction(Vec3::ZERO).unwrap_err();
        assert!(matches!(err, MeshError::InvalidGeometry { .. }));
    }

    #[test]
    fn frame_rejects_non_finite_direction() {
        assert!(Frame::from_direction(Vec3::new(f64::NAN, 1.0, 0.0)).is_err());
    }

    #[test]
    fn frame_offset_has_requested_radius() {
        let frame = Frame::from_direction(Vec3::new(1.0, 2.0, 3.0)).expect("valid");
        for k in 0..8 {
            let theta = k as f64 * 0.7;
            assert_relative_eq!(frame.offset(2.5, theta).length(), 2.5, epsilon = EPSILON);
            assert!(approx_zero(frame.offset(2.5, theta).dot(frame.axis)));
        }
    }

    #[test]
    fn frames_for_fails_on_any_zero_direction() {
        let result = frames_for(&[Vec3::X, Vec3::ZERO]);
        assert!(result.is_err());
        assert_eq!(frames_for(&[Vec3::X, Vec3::Z]).expect("valid").len(), 2);
    }
}
