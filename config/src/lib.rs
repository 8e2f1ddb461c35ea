//! # Config Crate
//!
//! Centralized configuration constants for the sweep-mesh pipeline.
//! Tolerances, default tessellation counts, the fixed segment length and the
//! wireframe palette are defined here so the mesh kernel and the wireframe
//! layer agree on them.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{EPSILON, DEFAULT_RADIAL_SEGMENTS, MIN_RADIAL_SEGMENTS};
//!
//! // Use EPSILON for floating-point comparisons
//! let value: f64 = 1e-12;
//! assert!(value.abs() < EPSILON);
//!
//! // Tessellation defaults are always valid ring sizes
//! assert!(DEFAULT_RADIAL_SEGMENTS >= MIN_RADIAL_SEGMENTS);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **No Dependencies**: Plain `const` items and small helpers only

pub mod constants;
