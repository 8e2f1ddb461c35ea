//! # Scenes
//!
//! A [`Scene`] is an ordered list of shapes, each with a palette index. It
//! can be loaded from JSON and rendered into [`Trace`]s. Shapes are generated
//! in parallel and independently: a shape with bad parameters is logged and
//! skipped while the rest of the scene still renders.

use config::constants::DEFAULT_HERMITE_SAMPLES;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use sweep_mesh::primitives::{
    create_box, create_cylinder, create_hermite_pipe, create_pipe, create_segment, create_tube,
};
use sweep_mesh::{HermiteCurve, MeshResult, PipeParams, Point3, TubeParams, Vec3};

use crate::error::WireframeResult;
use crate::style::{LineStyle, Palette};
use crate::trace::Trace;

fn hermite_pipe_params() -> PipeParams {
    PipeParams::default().with_axial_samples(DEFAULT_HERMITE_SAMPLES)
}

/// One shape and the parameters it is generated from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Shape {
    Box {
        base: f64,
        depth: f64,
        height: f64,
        #[serde(default)]
        origin: Point3,
    },
    Segment {
        start: Point3,
        end: Point3,
    },
    Tube {
        start: Point3,
        end: Point3,
        #[serde(default)]
        params: TubeParams,
    },
    Cylinder {
        start: Point3,
        end: Point3,
        #[serde(default)]
        params: TubeParams,
    },
    Pipe {
        start: Point3,
        end: Point3,
        #[serde(default)]
        params: PipeParams,
    },
    HermitePipe {
        curve: HermiteCurve,
        #[serde(default = "hermite_pipe_params")]
        params: PipeParams,
    },
}

impl Shape {
    /// Short name used in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Shape::Box { .. } => "box",
            Shape::Segment { .. } => "segment",
            Shape::Tube { .. } => "tube",
            Shape::Cylinder { .. } => "cylinder",
            Shape::Pipe { .. } => "pipe",
            Shape::HermitePipe { .. } => "hermite_pipe",
        }
    }

    /// Generates the shape and draws it in `color`.
    pub fn trace(&self, color: &str) -> MeshResult<Trace> {
        let mesh = match self {
            Shape::Box {
                base,
                depth,
                height,
                origin,
            } => create_box(*base, *depth, *height, *origin)?,
            Shape::Segment { start, end } => {
                let segment = create_segment(*start, *end)?;
                return Ok(Trace::from_segment(&segment, &LineStyle::segment(), color));
            }
            Shape::Tube { start, end, params } => create_tube(*start, *end, params)?,
            Shape::Cylinder { start, end, params } => create_cylinder(*start, *end, params)?,
            Shape::Pipe { start, end, params } => create_pipe(*start, *end, params)?,
            Shape::HermitePipe { curve, params } => create_hermite_pipe(curve, params)?,
        };
        Ok(Trace::from_mesh(&mesh, &LineStyle::mesh(), color))
    }
}

/// A shape placed in a scene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneShape {
    #[serde(flatten)]
    pub shape: Shape,
    /// Index into the render palette (wraps)
    #[serde(default)]
    pub color_index: usize,
}

/// A shape that failed to generate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedShape {
    /// Position of the shape in the scene
    pub index: usize,
    pub message: String,
}

/// Output of [`Scene::render`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RenderedScene {
    /// One trace per successful shape, in scene order
    pub traces: Vec<Trace>,
    pub skipped: Vec<SkippedShape>,
}

impl RenderedScene {
    /// Serializes the draw list as pretty JSON.
    pub fn to_json(&self) -> WireframeResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Ordered list of shapes to render.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    pub shapes: Vec<SceneShape>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a shape drawn with palette entry `color_index`.
    pub fn push(&mut self, shape: Shape, color_index: usize) -> &mut Self {
        self.shapes.push(SceneShape { shape, color_index });
        self
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Parses a scene from JSON.
    ///
    /// # Example
    ///
    /// ```rust
    /// use wireframe::scene::Scene;
    ///
    /// let scene = Scene::from_json(r#"{
    ///     "shapes": [
    ///         { "type": "box", "base": 2, "depth": 2, "height": 1, "color_index": 1 },
    ///         { "type": "segment", "start": [0, 0, 0], "end": [1, 0, 0] }
    ///     ]
    /// }"#).unwrap();
    /// assert_eq!(scene.len(), 2);
    /// ```
    pub fn from_json(json: &str) -> WireframeResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> WireframeResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Generates every shape and turns it into a trace.
    ///
    /// Shapes are generated in parallel; traces keep scene order. A shape
    /// that fails is logged and reported in [`RenderedScene::skipped`].
    pub fn render(&self, palette: &Palette) -> RenderedScene {
        let results: Vec<MeshResult<Trace>> = self
            .shapes
            .par_iter()
            .map(|entry| entry.shape.trace(palette.color(entry.color_index)))
            .collect();

        let mut rendered = RenderedScene::default();
        for (index, (entry, result)) in self.shapes.iter().zip(results).enumerate() {
            match result {
                Ok(trace) => {
                    log::debug!(
                        "shape {index} ({}): {} edges",
                        entry.shape.kind(),
                        trace.edge_count()
                    );
                    rendered.traces.push(trace);
                }
                Err(err) => {
                    log::warn!("skipping shape {index} ({}): {err}", entry.shape.kind());
                    rendered.skipped.push(SkippedShape {
                        index,
                        message: err.to_string(),
                    });
                }
            }
        }
        rendered
    }

    /// The sample scene: a box, two straight pipes, a capped cylinder, a
    /// bent pipe and a segment.
    pub fn demo() -> Self {
        let mut scene = Self::new();
        scene
            .push(
                Shape::Box {
                    base: 4.0,
                    depth: 3.0,
                    height: 2.0,
                    origin: Point3::ZERO,
                },
                0,
            )
            .push(
                Shape::Pipe {
                    start: Point3::new(-2.0, 0.0, 2.0),
                    end: Point3::new(-2.0, 0.0, 8.0),
                    params: PipeParams::new(0.5, 0.1),
                },
                1,
            )
            .push(
                Shape::Pipe {
                    start: Point3::new(2.0, 0.0, 2.0),
                    end: Point3::new(6.0, 0.0, 2.0),
                    params: PipeParams::new(0.4, 0.1),
                },
                1,
            )
            .push(
                Shape::Cylinder {
                    start: Point3::new(0.0, 3.0, 0.0),
                    end: Point3::new(0.0, 3.0, 5.0),
                    params: TubeParams::with_radius(0.8),
                },
                2,
            )
            .push(
                Shape::HermitePipe {
                    curve: HermiteCurve {
                        start: Point3::new(-2.0, 0.0, 8.0),
                        end: Point3::new(3.0, 0.0, 10.0),
                        start_tangent: Vec3::new(0.0, 0.0, 6.0),
                        end_tangent: Vec3::new(6.0, 0.0, 0.0),
                    },
                    params: PipeParams::new(0.5, 0.1).with_axial_samples(DEFAULT_HERMITE_SAMPLES),
                },
                3,
            )
            .push(
                Shape::Segment {
                    start: Point3::new(0.0, -3.0, 0.0),
                    end: Point3::new(1.0, -3.0, 1.0),
                },
                4,
            );
        scene
    }
}
