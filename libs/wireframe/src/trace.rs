//! # Traces
//!
//! A [`Trace`] is one draw item for an external 3D plotter: coordinate
//! columns plus line styling. A mesh becomes a single trace whose edges are
//! separated by `null` entries, so the plotter lifts the pen between them.

use serde::{Deserialize, Serialize};
use sweep_mesh::{Mesh, Point3, Segment};

use crate::edges::unique_edges;
use crate::style::{LineStyle, TraceMode};

/// Serializable 3D polyline draw item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trace {
    pub mode: TraceMode,
    pub color: String,
    pub width: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub marker_size: Option<f64>,
    pub x: Vec<Option<f64>>,
    pub y: Vec<Option<f64>>,
    pub z: Vec<Option<f64>>,
}

impl Trace {
    fn empty(style: &LineStyle, color: &str, capacity: usize) -> Self {
        Self {
            mode: style.mode,
            color: color.to_string(),
            width: style.width,
            marker_size: style.marker_size,
            x: Vec::with_capacity(capacity),
            y: Vec::with_capacity(capacity),
            z: Vec::with_capacity(capacity),
        }
    }

    fn push_point(&mut self, p: Point3) {
        self.x.push(Some(p.x));
        self.y.push(Some(p.y));
        self.z.push(Some(p.z));
    }

    fn push_gap(&mut self) {
        self.x.push(None);
        self.y.push(None);
        self.z.push(None);
    }

    /// Wireframe of `mesh`: every unique edge drawn once.
    ///
    /// # Example
    ///
    /// ```rust
    /// use sweep_mesh::primitives::create_box;
    /// use wireframe::style::LineStyle;
    /// use wireframe::trace::Trace;
    /// use glam::DVec3;
    ///
    /// let mesh = create_box(1.0, 1.0, 1.0, DVec3::ZERO).unwrap();
    /// let trace = Trace::from_mesh(&mesh, &LineStyle::mesh(), "black");
    /// assert_eq!(trace.edge_count(), 18);
    /// ```
    pub fn from_mesh(mesh: &Mesh, style: &LineStyle, color: &str) -> Self {
        let edges = unique_edges(mesh.triangles());
        let mut trace = Self::empty(style, color, edges.len() * 3);
        for (i, [a, b]) in edges.into_iter().enumerate() {
            if i > 0 {
                trace.push_gap();
            }
            trace.push_point(mesh.vertex(a));
            trace.push_point(mesh.vertex(b));
        }
        trace
    }

    /// Two-point trace for `segment`.
    pub fn from_segment(segment: &Segment, style: &LineStyle, color: &str) -> Self {
        let mut trace = Self::empty(style, color, 2);
        for p in segment.points() {
            trace.push_point(p);
        }
        trace
    }

    /// Number of points, not counting gaps.
    pub fn point_count(&self) -> usize {
        self.x.iter().filter(|v| v.is_some()).count()
    }

    /// Number of drawn pieces separated by gaps.
    pub fn edge_count(&self) -> usize {
        if self.x.is_empty() {
            0
        } else {
            self.x.iter().filter(|v| v.is_none()).count() + 1
        }
    }
}
