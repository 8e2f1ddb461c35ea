//! # Wireframe Errors

use sweep_mesh::MeshError;
use thiserror::Error;

/// Errors raised while loading, rendering or exporting a scene.
#[derive(Debug, Error)]
pub enum WireframeError {
    /// A shape failed to generate.
    #[error("Mesh generation failed: {0}")]
    Mesh(#[from] MeshError),

    /// Scene or trace JSON could not be read or written.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Scene file could not be read.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for wireframe operations.
pub type WireframeResult<T> = Result<T, WireframeError>;
