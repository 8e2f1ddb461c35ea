//! # Stitcher Tests
//!
//! Triangle counts, index bounds, seam closure, end layouts and winding direction for the
//! three stitching policies.

use std::collections::HashMap;

use super::*;
use crate::frame::Frame;
use crate::path::sample_linear;
use crate::ring::rings_along;
use crate::vec3::Vec3;

/// `n` rings of `m` points along +Z from z=0 to z=3.
fn straight_rings(n: usize, m: usize, radius: f64) -> Vec<Ring> {
    let centers =
        sample_linear(Point3::ZERO, Point3::new(0.0, 0.0, 3.0), n).expect("valid samples");
    let frame = Frame::from_direction(Vec3::Z).expect("valid frame");
    rings_along(&centers, &[frame], radius, m).expect("valid rings")
}

/// Every undirected edge is shared by exactly two triangles.
fn assert_closed(mesh: &Mesh) {
    let mut edges: HashMap<(u32, u32), usize> = HashMap::new();
    for tri in mesh.triangles() {
        for k in 0..3 {
            let (a, b) = (tri[k], tri[(k + 1) % 3]);
            *edges.entry((a.min(b), a.max(b))).or_default() += 1;
        }
    }
    for (&(u, v), &count) in &edges {
        assert_eq!(count, 2, "edge {u}-{v} used {count} times");
    }
}

fn radial(point: Point3) -> Vec3 {
    Vec3::new(point.x, point.y, 0.0)
}

// =============================================================================
// SINGLE-WALL TUBE
// =============================================================================

#[test]
fn test_tube_counts() {
    for (n, m) in [(2, 3), (4, 8), (20, 30)] {
        let mesh = stitch_tube(&straight_rings(n, m, 1.0)).expect("valid tube");
        assert_eq!(mesh.vertex_count(), n * m);
        assert_eq!(mesh.triangle_count(), 2 * m * (n - 1));
        assert!(mesh.validate());
    }
}

#[test]
fn test_tube_first_quad_layout() {
    let mesh = stitch_tube(&straight_rings(3, 4, 1.0)).expect("valid tube");
    assert_eq!(mesh.triangle(0), [0, 1, 4]);
    assert_eq!(mesh.triangle(1), [1, 5, 4]);
}

#[test]
fn test_tube_last_quad_wraps_to_start_of_ring() {
    let m = 5;
    let mesh = stitch_tube(&straight_rings(2, m, 1.0)).expect("valid tube");
    // j = m - 1 pairs with j = 0, no duplicate closing vertex
    let last = mesh.triangle_count();
    assert_eq!(mesh.triangle(last - 2), [4, 0, 9]);
    assert_eq!(mesh.triangle(last - 1), [0, 5, 9]);
}

#[test]
fn test_tube_normals_point_away_from_axis() {
    let mesh = stitch_tube(&straight_rings(4, 12, 2.0)).expect("valid tube");
    for t in 0..mesh.triangle_count() {
        let n = mesh.face_normal(t);
        assert!(n.dot(radial(mesh.face_centroid(t))) > 0.0, "triangle {t} faces inward");
    }
}

#[test]
fn test_tube_rejects_single_ring() {
    let rings = straight_rings(2, 6, 1.0);
    let err = stitch_tube(&rings[..1]).unwrap_err();
    assert!(matches!(err, MeshError::InvalidGeometry { .. }));
}

#[test]
fn test_tube_rejects_mismatched_rings() {
    let mut rings = straight_rings(3, 6, 1.0);
    rings[2].points.pop();
    assert!(stitch_tube(&rings).is_err());
}

#[test]
fn test_tube_rejects_tiny_rings() {
    let mut rings = straight_rings(2, 3, 1.0);
    for ring in &mut rings {
        ring.points.truncate(2);
    }
    assert!(stitch_tube(&rings).is_err());
}

// =============================================================================
// DUAL-WALL SHELL
// =============================================================================

#[test]
fn test_shell_counts() {
    for (n, m) in [(2, 3), (5, 8), (20, 30)] {
        let outer = straight_rings(n, m, 2.0);
        let inner = straight_rings(n, m, 1.5);
        let mesh = stitch_shell(&outer, &inner).expect("valid shell");
        assert_eq!(mesh.vertex_count(), 2 * n * m);
        assert_eq!(mesh.triangle_count(), 4 * m * (n - 1) + 4 * m);
        assert!(mesh.validate());
    }
}

#[test]
fn test_shell_inner_vertices_follow_outer() {
    let (n, m) = (3, 6);
    let inner = straight_rings(n, m, 0.5);
    let mesh = stitch_shell(&straight_rings(n, m, 1.0), &inner).expect("valid shell");
    assert_eq!(mesh.vertex((n * m) as u32), inner[0].points[0]);
}

#[test]
fn test_shell_is_closed() {
    let mesh = stitch_shell(&straight_rings(6, 10, 2.0), &straight_rings(6, 10, 1.0))
        .expect("valid");
    assert_closed(&mesh);
}

#[test]
fn test_shell_walls_face_away_from_material() {
    let (n, m) = (4, 16);
    let mesh = stitch_shell(&straight_rings(n, m, 2.0), &straight_rings(n, m, 1.0))
        .expect("valid");
    let band = 2 * m * (n - 1);

    for t in 0..band {
        let normal = mesh.face_normal(t);
        assert!(normal.dot(radial(mesh.face_centroid(t))) > 0.0, "outer wall {t}");
    }
    for t in band..2 * band {
        let normal = mesh.face_normal(t);
        assert!(normal.dot(radial(mesh.face_centroid(t))) < 0.0, "inner wall {t}");
    }
}

#[test]
fn test_shell_mouth_layout() {
    // n = 3, m = 4: outer rings at 0..12, inner rings at 12..24
    let mesh = stitch_shell(&straight_rings(3, 4, 2.0), &straight_rings(3, 4, 1.0))
        .expect("valid");
    let band = 2 * 4 * 2;

    // Start mouth: (o0, i1, i0), (o0, o1, i1)
    assert_eq!(mesh.triangle(2 * band), [0, 13, 12]);
    assert_eq!(mesh.triangle(2 * band + 1), [0, 1, 13]);
    assert_eq!(mesh.triangle(2 * band + 6), [3, 12, 15]);
    assert_eq!(mesh.triangle(2 * band + 7), [3, 0, 12]);

    // Finish mouth on ring 2: (o0, i0, i1), (o0, i1, o1)
    assert_eq!(mesh.triangle(2 * band + 8), [8, 20, 21]);
    assert_eq!(mesh.triangle(2 * band + 9), [8, 21, 9]);
    assert_eq!(mesh.triangle(2 * band + 14), [11, 23, 20]);
    assert_eq!(mesh.triangle(2 * band + 15), [11, 20, 8]);
}

#[test]
fn test_shell_mouths_wound_along_travel() {
    let (n, m) = (4, 16);
    let mesh = stitch_shell(&straight_rings(n, m, 2.0), &straight_rings(n, m, 1.0))
        .expect("valid");
    let ends = 2 * (2 * m * (n - 1));
    for t in ends..ends + 2 * m {
        assert!(mesh.face_normal(t).z > 0.99, "start mouth {t}");
    }
    for t in ends + 2 * m..mesh.triangle_count() {
        assert!(mesh.face_normal(t).z < -0.99, "finish mouth {t}");
    }
}

#[test]
fn test_shell_rejects_shape_mismatch() {
    let outer = straight_rings(4, 8, 2.0);
    assert!(stitch_shell(&outer, &straight_rings(3, 8, 1.0)).is_err());
    assert!(stitch_shell(&outer, &straight_rings(4, 6, 1.0)).is_err());
}

// =============================================================================
// CAPPED CYLINDER
// =============================================================================

#[test]
fn test_capped_counts_and_centers() {
    let (n, m) = (5, 12);
    let base = Point3::ZERO;
    let top = Point3::new(0.0, 0.0, 3.0);
    let mesh = stitch_capped(&straight_rings(n, m, 1.0), base, top).expect("valid cylinder");

    assert_eq!(mesh.vertex_count(), n * m + 2);
    assert_eq!(mesh.triangle_count(), 2 * m * (n - 1) + 2 * m);
    assert_eq!(mesh.vertex((n * m) as u32), base);
    assert_eq!(mesh.vertex((n * m + 1) as u32), top);
    assert!(mesh.validate());
}

#[test]
fn test_capped_is_closed() {
    let top = Point3::new(0.0, 0.0, 3.0);
    let mesh = stitch_capped(&straight_rings(3, 7, 1.0), Point3::ZERO, top)
        .expect("valid cylinder");
    assert_closed(&mesh);
}

#[test]
fn test_capped_fan_layout() {
    // n = 3, m = 4: base center 12, top center 13, top ring at 8..12
    let top = Point3::new(0.0, 0.0, 3.0);
    let mesh = stitch_capped(&straight_rings(3, 4, 1.0), Point3::ZERO, top)
        .expect("valid cylinder");
    let band = 2 * 4 * 2;

    // Base fan: (c, j, (j+1) % m)
    assert_eq!(mesh.triangle(band), [12, 0, 1]);
    assert_eq!(mesh.triangle(band + 3), [12, 3, 0]);

    // Top fan: (c, offset + (j+1) % m, offset + j)
    assert_eq!(mesh.triangle(band + 4), [13, 9, 8]);
    assert_eq!(mesh.triangle(band + 7), [13, 8, 11]);
}

#[test]
fn test_capped_fans_wound_along_travel() {
    let (n, m) = (3, 8);
    let top = Point3::new(0.0, 0.0, 3.0);
    let mesh = stitch_capped(&straight_rings(n, m, 1.0), Point3::ZERO, top)
        .expect("valid cylinder");
    let band = 2 * m * (n - 1);
    let base_center = (n * m) as u32;

    for t in band..band + m {
        assert_eq!(mesh.triangle(t)[0], base_center);
        assert!(mesh.face_normal(t).z > 0.99, "base cap {t}");
    }
    for t in band + m..mesh.triangle_count() {
        assert_eq!(mesh.triangle(t)[0], base_center + 1);
        assert!(mesh.face_normal(t).z < -0.99, "top cap {t}");
    }
}

// =============================================================================
// BUILDING BLOCKS
// =============================================================================

#[test]
fn test_lateral_band_single_ring_adds_nothing() {
    let mut mesh = Mesh::new();
    lateral_band(&mut mesh, 0, 1, 4, Wall::Outer);
    assert_eq!(mesh.triangle_count(), 0);
}

#[test]
fn test_inner_band_mirrors_outer_band() {
    let mut outer = Mesh::new();
    let mut inner = Mesh::new();
    lateral_band(&mut outer, 0, 2, 3, Wall::Outer);
    lateral_band(&mut inner, 0, 2, 3, Wall::Inner);
    for (o, i) in outer.triangles().iter().zip(inner.triangles()) {
        let mut o_sorted = *o;
        let mut i_sorted = *i;
        o_sorted.sort_unstable();
        i_sorted.sort_unstable();
        assert_eq!(o_sorted, i_sorted);
        assert_ne!(o, i);
    }
}
