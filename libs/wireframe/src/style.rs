//! # Palette and Line Styles
//!
//! Colors are picked from an explicit [`Palette`] passed to the renderer;
//! there is no global color state.

use config::constants::{
    DEFAULT_PALETTE, MESH_LINE_WIDTH, SEGMENT_LINE_WIDTH, SEGMENT_MARKER_SIZE,
};
use serde::{Deserialize, Serialize};

/// Ordered list of named colors.
///
/// # Example
///
/// ```rust
/// use wireframe::style::Palette;
///
/// let palette = Palette::default();
/// assert_eq!(palette.color(1), "red");
/// assert_eq!(palette.color(6), "red"); // wraps around
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Palette {
    colors: Vec<String>,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            colors: DEFAULT_PALETTE.iter().map(|c| (*c).to_string()).collect(),
        }
    }
}

impl Palette {
    /// Creates a palette from `colors`, or `None` if it is empty.
    pub fn new<I, S>(colors: I) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let colors: Vec<String> = colors.into_iter().map(Into::into).collect();
        if colors.is_empty() {
            None
        } else {
            Some(Self { colors })
        }
    }

    /// Color at `index`, wrapping modulo the palette length.
    pub fn color(&self, index: usize) -> &str {
        &self.colors[index % self.colors.len()]
    }

    /// Number of colors.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Always false; a palette holds at least one color.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

/// How a trace is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TraceMode {
    /// Plain polylines
    #[serde(rename = "lines")]
    Lines,
    /// Polylines with a marker on every point
    #[serde(rename = "lines+markers")]
    LinesAndMarkers,
}

/// Line drawing parameters for one kind of trace.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineStyle {
    pub mode: TraceMode,
    pub width: f64,
    pub marker_size: Option<f64>,
}

impl LineStyle {
    /// Style for mesh wireframes.
    pub const fn mesh() -> Self {
        Self {
            mode: TraceMode::Lines,
            width: MESH_LINE_WIDTH,
            marker_size: None,
        }
    }

    /// Style for standalone segments, with endpoint markers.
    pub const fn segment() -> Self {
        Self {
            mode: TraceMode::LinesAndMarkers,
            width: SEGMENT_LINE_WIDTH,
            marker_size: Some(SEGMENT_MARKER_SIZE),
        }
    }
}
