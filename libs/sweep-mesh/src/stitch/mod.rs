//! # Mesh Stitcher
//!
//! Turns ring sequences into closed triangle meshes.
//!
//! ## Vertex layout
//!
//! Ring `i`, point `j` of a sequence of `n` rings with `m` points lands at
//! `first + i·m + j`. Angular neighbours wrap with `(j + 1) % m`, so the last
//! quad of every band closes the ring without a duplicate vertex.
//!
//! ## Winding
//!
//! Rings run counter-clockwise around the travel direction. With that
//! convention:
//! - exterior walls use `(p0, p1, p2)`, `(p1, p3, p2)` and face away from the axis
//! - interior walls use the mirrored `(p0, p2, p1)`, `(p1, p2, p3)` and face
//!   the axis (away from the material of a hollow shell)
//! - mouths and caps use fixed end windings: start mouth `(o0, i1, i0)`,
//!   `(o0, o1, i1)`; finish mouth `(o0, i0, i1)`, `(o0, i1, o1)`; base fan
//!   `(c, j, j+1)`; top fan `(c, j+1, j)`
//!
//! By the right-hand rule the end windings point along the travel direction
//! at the start and against it at the finish, so the ends are wound opposite
//! to the walls. Every edge is still shared by exactly two triangles.

use config::constants::{MIN_PATH_SAMPLES, MIN_RADIAL_SEGMENTS};

use crate::error::{MeshError, MeshResult};
use crate::mesh::Mesh;
use crate::ring::Ring;
use crate::vec3::Point3;

#[cfg(test)]
mod tests;

/// Which side of a lateral wall its triangles face.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Wall {
    /// Exterior wall, normals point away from the path.
    Outer,
    /// Interior wall of a hollow pipe, normals point toward the path.
    Inner,
}

/// Which end of the path a mouth or cap closes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum End {
    /// First ring; its closing surface is wound along the travel direction.
    Start,
    /// Last ring; its closing surface is wound against the travel direction.
    Finish,
}

/// Checks a ring sequence and returns its shared point count `m`.
fn ring_size(rings: &[Ring], what: &str) -> MeshResult<usize> {
    if rings.len() < MIN_PATH_SAMPLES {
        return Err(MeshError::invalid(format!(
            "{what} needs at least {MIN_PATH_SAMPLES} rings, got {}",
            rings.len()
        )));
    }

    let m = rings[0].len();
    if m < MIN_RADIAL_SEGMENTS {
        return Err(MeshError::invalid(format!(
            "{what} rings need at least {MIN_RADIAL_SEGMENTS} points, got {m}"
        )));
    }
    if let Some((i, ring)) = rings.iter().enumerate().find(|(_, ring)| ring.len() != m) {
        return Err(MeshError::invalid(format!(
            "{what} ring {i} has {} points, expected {m}",
            ring.len()
        )));
    }
    Ok(m)
}

/// Rejects layouts whose indices would not fit the `u32` index buffer.
fn check_index_range(vertex_count: usize) -> MeshResult<()> {
    u32::try_from(vertex_count)
        .map(|_| ())
        .map_err(|_| {
            MeshError::invalid(format!(
                "mesh needs {vertex_count} vertices, more than u32 indices allow"
            ))
        })
}

/// Appends every ring's points in sequence order and returns the first index.
fn push_rings(mesh: &mut Mesh, rings: &[Ring]) -> u32 {
    let first = mesh.vertex_count() as u32;
    for ring in rings {
        mesh.extend_vertices(&ring.points);
    }
    first
}

/// Stitches the lateral band between consecutive rings.
///
/// Adds `2·m·(n-1)` triangles. `first` is the index of ring 0, point 0.
pub fn lateral_band(mesh: &mut Mesh, first: u32, n: usize, m: usize, wall: Wall) {
    let m32 = m as u32;
    for i in 0..n.saturating_sub(1) as u32 {
        let row = first + i * m32;
        let next_row = row + m32;
        for j in 0..m32 {
            let j_next = (j + 1) % m32;
            let p0 = row + j;
            let p1 = row + j_next;
            let p2 = next_row + j;
            let p3 = next_row + j_next;

            match wall {
                Wall::Outer => {
                    mesh.add_triangle(p0, p1, p2);
                    mesh.add_triangle(p1, p3, p2);
                }
                Wall::Inner => {
                    mesh.add_triangle(p0, p2, p1);
                    mesh.add_triangle(p1, p2, p3);
                }
            }
        }
    }
}

/// Closes the annulus between an outer ring and an inner ring.
///
/// `outer` and `inner` are the first indices of the two rings. Adds `2·m`
/// triangles.
pub fn mouth(mesh: &mut Mesh, outer: u32, inner: u32, m: usize, end: End) {
    let m32 = m as u32;
    for j in 0..m32 {
        let j_next = (j + 1) % m32;
        let (o0, o1) = (outer + j, outer + j_next);
        let (i0, i1) = (inner + j, inner + j_next);

        match end {
            End::Start => {
                mesh.add_triangle(o0, i1, i0);
                mesh.add_triangle(o0, o1, i1);
            }
            End::Finish => {
                mesh.add_triangle(o0, i0, i1);
                mesh.add_triangle(o0, i1, o1);
            }
        }
    }
}

/// Closes a ring with a triangle fan around `center`.
///
/// `ring` is the first index of the ring. Adds `m` triangles.
pub fn cap(mesh: &mut Mesh, center: u32, ring: u32, m: usize, end: End) {
    let m32 = m as u32;
    for j in 0..m32 {
        let current = ring + j;
        let next = ring + (j + 1) % m32;

        match end {
            End::Start => mesh.add_triangle(center, current, next),
            End::Finish => mesh.add_triangle(center, next, current),
        }
    }
}

/// Stitches a single-wall open tube.
///
/// Vertices are the rings in order (`n·m`); triangles are the exterior
/// lateral band (`2·m·(n-1)`).
///
/// # Errors
///
/// [`MeshError::InvalidGeometry`] if there are fewer than 2 rings, fewer
/// than 3 points per ring, or the rings differ in size.
///
/// # Example
///
/// ```rust
/// use sweep_mesh::frame::Frame;
/// use sweep_mesh::path::sample_linear;
/// use sweep_mesh::ring::rings_along;
/// use sweep_mesh::stitch::stitch_tube;
/// use glam::DVec3;
///
/// let centers = sample_linear(DVec3::ZERO, DVec3::Z, 3).unwrap();
/// let frame = Frame::from_direction(DVec3::Z).unwrap();
/// let rings = rings_along(&centers, &[frame], 1.0, 8).unwrap();
/// let mesh = stitch_tube(&rings).unwrap();
/// assert_eq!(mesh.triangle_count(), 2 * 8 * 2);
/// ```
pub fn stitch_tube(rings: &[Ring]) -> MeshResult<Mesh> {
    let m = ring_size(rings, "tube")?;
    let n = rings.len();
    check_index_range(n * m)?;

    let mut mesh = Mesh::with_capacity(n * m, 2 * m * (n - 1));
    let first = push_rings(&mut mesh, rings);
    lateral_band(&mut mesh, first, n, m, Wall::Outer);

    log::debug!(
        "stitched tube: {n} rings x {m} points, {} triangles",
        mesh.triangle_count()
    );
    Ok(mesh)
}

/// Stitches a hollow pipe with wall thickness.
///
/// Vertices are the outer rings (`[0, n·m)`) followed by the inner rings
/// (`[n·m, 2·n·m)`). Triangles are the exterior band, the interior band and
/// one mouth at each end: `4·m·(n-1) + 4·m` in total.
///
/// # Errors
///
/// [`MeshError::InvalidGeometry`] if either sequence is invalid on its own
/// or the two sequences differ in ring count or ring size.
pub fn stitch_shell(outer: &[Ring], inner: &[Ring]) -> MeshResult<Mesh> {
    let m = ring_size(outer, "outer wall")?;
    let inner_m = ring_size(inner, "inner wall")?;
    let n = outer.len();
    if inner.len() != n || inner_m != m {
        return Err(MeshError::invalid(format!(
            "outer wall is {n}x{m} but inner wall is {}x{inner_m}",
            inner.len()
        )));
    }
    check_index_range(2 * n * m)?;

    let mut mesh = Mesh::with_capacity(2 * n * m, 4 * m * (n - 1) + 4 * m);
    let outer_first = push_rings(&mut mesh, outer);
    let inner_first = push_rings(&mut mesh, inner);

    lateral_band(&mut mesh, outer_first, n, m, Wall::Outer);
    lateral_band(&mut mesh, inner_first, n, m, Wall::Inner);

    let last_row = ((n - 1) * m) as u32;
    mouth(&mut mesh, outer_first, inner_first, m, End::Start);
    mouth(&mut mesh, outer_first + last_row, inner_first + last_row, m, End::Finish);

    log::debug!(
        "stitched shell: {n} rings x {m} points, {} triangles",
        mesh.triangle_count()
    );
    Ok(mesh)
}

/// Stitches a closed, capped cylinder.
///
/// Vertices are the rings (`[0, n·m)`), then `base_center` (`n·m`), then
/// `top_center` (`n·m + 1`). Triangles are the exterior band plus one fan per
/// end: `2·m·(n-1) + 2·m` in total.
///
/// # Errors
///
/// [`MeshError::InvalidGeometry`] under the same conditions as
/// [`stitch_tube`].
pub fn stitch_capped(
    rings: &[Ring],
    base_center: Point3,
    top_center: Point3,
) -> MeshResult<Mesh> {
    let m = ring_size(rings, "cylinder")?;
    let n = rings.len();
    check_index_range(n * m + 2)?;

    let mut mesh = Mesh::with_capacity(n * m + 2, 2 * m * (n - 1) + 2 * m);
    let first = push_rings(&mut mesh, rings);
    let base = mesh.add_vertex(base_center);
    let top = mesh.add_vertex(top_center);

    lateral_band(&mut mesh, first, n, m, Wall::Outer);
    cap(&mut mesh, base, first, m, End::Start);
    cap(&mut mesh, top, first + ((n - 1) * m) as u32, m, End::Finish);

    log::debug!(
        "stitched capped cylinder: {n} rings x {m} points, {} triangles",
        mesh.triangle_count()
    );
    Ok(mesh)
}
