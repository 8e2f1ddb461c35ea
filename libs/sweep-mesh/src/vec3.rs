//! Thin wrapper around `glam::DVec3` shared across the mesh kernel.
//!
//! Points and directions are both `DVec3`; the aliases keep signatures
//! readable. Named operations (add, sub, scale, dot, cross, normalize) are
//! glam's own.

use config::constants::MIN_DIRECTION_LENGTH_SQUARED;

use crate::error::{MeshError, MeshResult};

/// A position in 3D space.
pub use glam::DVec3 as Point3;

/// A direction or offset in 3D space.
pub use glam::DVec3 as Vec3;

/// Returns the unit vector along `v`, or `None` if `v` is zero-length or
/// not finite.
///
/// # Examples
/// ```
/// use sweep_mesh::vec3::{try_unit, Vec3};
/// assert_eq!(try_unit(Vec3::new(0.0, 3.0, 0.0)), Some(Vec3::Y));
/// assert_eq!(try_unit(Vec3::ZERO), None);
/// ```
pub fn try_unit(v: Vec3) -> Option<Vec3> {
    if !v.is_finite() || v.length_squared() < MIN_DIRECTION_LENGTH_SQUARED {
        return None;
    }
    Some(v / v.length())
}

/// Like [`try_unit`], but reports a zero-length direction as
/// [`MeshError::InvalidGeometry`] naming `what`.
pub fn unit_or_invalid(v: Vec3, what: &str) -> MeshResult<Vec3> {
    try_unit(v).ok_or_else(|| {
        MeshError::invalid(format!("{what} must be a finite non-zero vector: {v:?}"))
    })
}
