//! # Sweep Mesh
//!
//! Triangle meshes for simple parametric solids: boxes, open tubes, capped
//! cylinders and hollow pipes swept along a straight axis or a Hermite curve,
//! plus fixed-length line segments.
//!
//! ## Architecture
//!
//! ```text
//! path (centers) ─┐
//!                 ├─> ring (cross-sections) ─> stitch (vertices + triangles)
//! frame (basis) ──┘
//! primitives::create_box   (independent, 8 vertices + 12 triangles)
//! ```
//!
//! Every generator is a pure function: inputs are validated first and any
//! failure returns a [`MeshError`] without a partial mesh.
//!
//! ## Usage
//!
//! ```rust
//! use sweep_mesh::primitives::{create_pipe, PipeParams};
//! use glam::DVec3;
//!
//! let mesh = create_pipe(DVec3::ZERO, DVec3::new(0.0, 0.0, 10.0), &PipeParams::new(1.0, 0.2))?;
//! assert!(mesh.validate());
//! # Ok::<(), sweep_mesh::MeshError>(())
//! ```

pub mod error;
pub mod frame;
pub mod mesh;
pub mod path;
pub mod primitives;
pub mod ring;
pub mod stitch;
pub mod vec3;

pub use error::{MeshError, MeshResult};
pub use frame::Frame;
pub use mesh::Mesh;
pub use path::{HermiteCurve, Path};
pub use primitives::{PipeParams, Segment, TubeParams};
pub use ring::Ring;
pub use vec3::{Point3, Vec3};
