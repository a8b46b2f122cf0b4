//! Render orchestration: one parameter space, every component drawn from it
//!
//! A [`Wallpaper`] holds the immutable result of all decisions for a request.
//! Its shapes are produced lazily: tiles stream from the pattern, are warped
//! by the deformation pipeline, clipped against the canvas and colored at
//! their centroid.

use crate::algorithm::deformation::{
    Composition, Deformation, DeformationKind, DeformationPipeline,
};
use crate::color::ColorComposer;
use crate::io::configuration::OVERSCAN;
use crate::io::error::Result;
use crate::parameters::{Choice, DecisionLog, ParameterSpace};
use crate::spatial::canvas::Canvas;
use crate::spatial::point::{Point, Rect};
use crate::spatial::tiles::{Tiles, TilingPattern};
use std::collections::HashMap;

/// Everything that determines a wallpaper
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderRequest {
    /// Canvas width
    pub width: u32,
    /// Canvas height
    pub height: u32,
    /// Seed bytes; `None` picks a time-derived seed
    pub seed: Option<Vec<u8>>,
    /// Decision key → raw override value
    pub overrides: HashMap<String, String>,
    /// Whether the decision log should be reported with the output
    pub log_choices: bool,
    /// How multiple enabled deformations combine
    pub composition: Composition,
}

impl RenderRequest {
    /// Request with a random seed and no overrides
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            seed: None,
            overrides: HashMap::new(),
            log_choices: false,
            composition: Composition::default(),
        }
    }

    /// Pin the seed
    #[must_use]
    pub fn with_seed(mut self, seed: impl Into<Vec<u8>>) -> Self {
        self.seed = Some(seed.into());
        self
    }

    /// Override one decision
    #[must_use]
    pub fn with_override(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.overrides.insert(key.into(), value.into());
        self
    }

    /// Report the decision log with the output
    #[must_use]
    pub const fn with_log_choices(mut self, log_choices: bool) -> Self {
        self.log_choices = log_choices;
        self
    }

    /// Choose how enabled deformations combine
    #[must_use]
    pub const fn with_composition(mut self, composition: Composition) -> Self {
        self.composition = composition;
        self
    }
}

/// A visible polygon and its fill color
#[derive(Clone, Debug, PartialEq)]
pub struct Shape {
    /// Vertices after deformation
    pub points: Vec<Point>,
    /// Six digit lower-case hex RGB
    pub color: String,
}

/// The fully decided wallpaper for one request
#[derive(Clone, Debug)]
pub struct Wallpaper {
    canvas: Canvas,
    pattern: TilingPattern,
    detail: f64,
    pipeline: DeformationPipeline,
    composer: ColorComposer,
    decisions: DecisionLog,
    log_choices: bool,
}

impl Wallpaper {
    /// Make every decision for `request`
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Width or height is zero
    /// - A categorical override names no available option
    pub fn generate(request: &RenderRequest) -> Result<Self> {
        let canvas = Canvas::new(request.width, request.height)?;
        let params = ParameterSpace::new(
            request.seed.as_deref(),
            canvas,
            request.overrides.clone(),
        );
        let mut decisions = DecisionLog::new();

        let composer = ColorComposer::draw(&params, &mut decisions)?;
        let pattern = TilingPattern::draw(&params, &mut decisions)?;
        let detail = params.detail(&mut decisions);
        let pipeline = DeformationPipeline::draw(&params, request.composition, &mut decisions);

        let warps: Vec<DeformationKind> =
            pipeline.active().iter().map(Deformation::kind).collect();
        log::debug!(
            "rendering {}x{} {} tiling, {} scheme, warps {:?}, {} filter(s)",
            canvas.width(),
            canvas.height(),
            pattern.family().display_name(),
            composer.scheme().family().display_name(),
            warps,
            composer.filters().len(),
        );

        Ok(Self {
            canvas,
            pattern,
            detail,
            pipeline,
            composer,
            decisions,
            log_choices: request.log_choices,
        })
    }

    /// Canvas being rendered
    pub const fn canvas(&self) -> Canvas {
        self.canvas
    }

    /// Selected tiling
    pub const fn pattern(&self) -> &TilingPattern {
        &self.pattern
    }

    /// Tile scale (size of the smallest detail)
    pub const fn detail(&self) -> f64 {
        self.detail
    }

    /// Selected deformations
    pub const fn pipeline(&self) -> &DeformationPipeline {
        &self.pipeline
    }

    /// Selected coloring
    pub const fn composer(&self) -> &ColorComposer {
        &self.composer
    }

    /// Every resolved decision, whether or not logging was requested
    pub const fn decisions(&self) -> &DecisionLog {
        &self.decisions
    }

    /// The decision log if the request asked for it
    pub const fn reported_decisions(&self) -> Option<&DecisionLog> {
        if self.log_choices {
            Some(&self.decisions)
        } else {
            None
        }
    }

    /// Lazily produce the visible shapes in drawing order
    pub fn shapes(&self) -> Shapes<'_> {
        Shapes {
            wallpaper: self,
            tiles: self
                .pattern
                .generate(self.canvas.bounds(), self.detail, OVERSCAN),
            visible: self.canvas.bounds(),
        }
    }
}

/// Iterator over the visible shapes of a [`Wallpaper`]
#[derive(Clone, Debug)]
pub struct Shapes<'a> {
    wallpaper: &'a Wallpaper,
    tiles: Tiles<'a>,
    visible: Rect,
}

impl Iterator for Shapes<'_> {
    type Item = Shape;

    fn next(&mut self) -> Option<Shape> {
        for tile in self.tiles.by_ref() {
            let polygon = self.wallpaper.pipeline.apply(tile);

            let (Some(bounds), Some(centroid)) = (polygon.bounding_box(), polygon.centroid())
            else {
                continue;
            };
            if !bounds.intersects(&self.visible) {
                continue;
            }

            let color = self.wallpaper.composer.hex_at(centroid, polygon.color_index);
            return Some(Shape {
                points: polygon.points,
                color,
            });
        }
        None
    }
}
