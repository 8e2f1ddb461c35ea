//! # Box Primitive
//!
//! Generates a closed rectangular prism directly as 8 vertices and 12
//! triangles. Does not use frames, paths or rings.

use crate::error::{MeshError, MeshResult};
use crate::mesh::Mesh;
use crate::primitives::positive;
use crate::vec3::Point3;

/// Fixed triangulation of the 6 faces, 2 triangles each.
#[rustfmt::skip]
const BOX_TRIANGLES: [[u32; 3]; 12] = [
    [0, 1, 2], [0, 2, 3], // base
    [4, 5, 6], [4, 6, 7], // top
    [0, 1, 5], [0, 5, 4], // back (y = min)
    [1, 2, 6], [1, 6, 5], // right (x = max)
    [2, 3, 7], [2, 7, 6], // front (y = max)
    [3, 0, 4], [3, 4, 7], // left (x = min)
];

/// Creates a box mesh.
///
/// The box is centered on `origin` in x and y. The base sits on the `z = 0`
/// plane and the top at `z = origin.z + height`, so `origin.z` raises the
/// top face only.
///
/// # Arguments
///
/// * `base` - Extent along X
/// * `depth` - Extent along Y
/// * `height` - Extent along Z above `origin.z`
/// * `origin` - Center of the footprint; its z offsets the top face
///
/// # Returns
///
/// A mesh with 8 vertices (bottom 0..4, top 4..8) and 12 triangles.
///
/// # Example
///
/// ```rust
/// use sweep_mesh::primitives::create_box;
/// use glam::DVec3;
///
/// let mesh = create_box(2.0, 2.0, 3.0, DVec3::ZERO).unwrap();
/// assert_eq!(mesh.vertex_count(), 8);
/// assert_eq!(mesh.triangle_count(), 12);
/// ```
pub fn create_box(base: f64, depth: f64, height: f64, origin: Point3) -> MeshResult<Mesh> {
    let base = positive(base, "box base")?;
    let depth = positive(depth, "box depth")?;
    let height = positive(height, "box height")?;
    if !origin.is_finite() {
        return Err(MeshError::invalid(format!("box origin must be finite: {origin:?}")));
    }

    // No ordering check: origin.z <= -height puts the top on or below z = 0.
    let top = origin.z + height;

    let (x0, x1) = (origin.x - base / 2.0, origin.x + base / 2.0);
    let (y0, y1) = (origin.y - depth / 2.0, origin.y + depth / 2.0);

    let mut mesh = Mesh::with_capacity(8, BOX_TRIANGLES.len());
    for z in [0.0, top] {
        mesh.add_vertex(Point3::new(x0, y0, z));
        mesh.add_vertex(Point3::new(x1, y0, z));
        mesh.add_vertex(Point3::new(x1, y1, z));
        mesh.add_vertex(Point3::new(x0, y1, z));
    }
    for [a, b, c] in BOX_TRIANGLES {
        mesh.add_triangle(a, b, c);
    }

    Ok(mesh)
}
