//! # Mesh Errors
//!
//! Error types for mesh generation operations. Every generator validates its
//! inputs up front and fails without returning a partial mesh.

use thiserror::Error;

/// Errors that can occur during mesh generation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MeshError {
    /// Structurally impossible input: zero-length direction, too few samples,
    /// non-positive radius or dimension, thickness not below the outer radius.
    #[error("Invalid geometry: {message}")]
    InvalidGeometry { message: String },

    /// Every candidate reference axis is parallel to the direction.
    ///
    /// Only reachable if the reference-axis fallback is exhausted, which
    /// cannot happen for a finite non-zero direction.
    #[error("Degenerate input: {message}")]
    DegenerateInput { message: String },
}

impl MeshError {
    /// Creates an invalid geometry error.
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidGeometry {
            message: message.into(),
        }
    }

    /// Creates a degenerate input error.
    pub fn degenerate(message: impl Into<String>) -> Self {
        Self::DegenerateInput {
            message: message.into(),
        }
    }
}

/// Result type alias for mesh operations.
pub type MeshResult<T> = Result<T, MeshError>;
