//! Wireframe rendering for sweep-mesh solids.
//!
//! Reduces each mesh to its unique edges and emits serializable line
//! [`Trace`]s for an external 3D plotter. A [`Scene`] bundles several shapes
//! with palette indices and renders them in parallel.
//!
//! ```
//! use wireframe::{Palette, Scene};
//!
//! let rendered = Scene::demo().render(&Palette::default());
//! assert!(rendered.skipped.is_empty());
//! assert_eq!(rendered.traces.len(), Scene::demo().len());
//! ```

pub mod edges;
pub mod error;
pub mod scene;
pub mod style;
pub mod trace;

pub use edges::unique_edges;
pub use error::{WireframeError, WireframeResult};
pub use scene::{RenderedScene, Scene, SceneShape, Shape, SkippedShape};
pub use style::{LineStyle, Palette, TraceMode};
pub use trace::Trace;

/// Reads a scene description from `path`.
///
/// # Errors
/// Returns [`WireframeError::Io`] if the file cannot be read and
/// [`WireframeError::Json`] if it is not a valid scene.
pub fn load_scene(path: impl AsRef<std::path::Path>) -> WireframeResult<Scene> {
    let json = std::fs::read_to_string(path)?;
    Scene::from_json(&json)
}
