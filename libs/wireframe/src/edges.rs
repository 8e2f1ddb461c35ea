//! # Edge Extraction
//!
//! Undirected edges of a triangle list, each reported once no matter how
//! many triangles share it or which way they wind.

use std::collections::HashSet;

/// Returns every undirected edge of `triangles` once, as `[min, max]`, in
/// the order the edges are first seen.
///
/// # Example
///
/// ```rust
/// use wireframe::edges::unique_edges;
///
/// // Two triangles sharing the 0-2 diagonal of a quad
/// let edges = unique_edges(&[[0, 1, 2], [0, 2, 3]]);
/// assert_eq!(edges, vec![[0, 1], [1, 2], [0, 2], [2, 3], [0, 3]]);
/// ```
pub fn unique_edges(triangles: &[[u32; 3]]) -> Vec<[u32; 2]> {
    let mut seen = HashSet::with_capacity(triangles.len() * 2);
    let mut edges = Vec::with_capacity(triangles.len() * 2);

    for tri in triangles {
        for (a, b) in [(tri[0], tri[1]), (tri[1], tri[2]), (tri[2], tri[0])] {
            let edge = [a.min(b), a.max(b)];
            if seen.insert(edge) {
                edges.push(edge);
            }
        }
    }

    edges
}
