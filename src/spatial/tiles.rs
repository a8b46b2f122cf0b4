//! Periodic polygon tilings
//!
//! Each family is a data record: a stride vector and a list of templates in
//! pattern-local unit coordinates, each tagged with a palette index. The
//! generator repeats every template over a grid of stride offsets covering
//! the requested region plus an overscan margin.

use crate::io::error::Result;
use crate::parameters::{Choice, DecisionLog, ParameterSpace};
use crate::spatial::point::{Point, Rect};
use crate::spatial::polygon::Polygon;

const SQRT3: f64 = 1.732_050_807_568_877_2;
const SIN60: f64 = SQRT3 * 0.5;

/// Range of the split position drawn for [`PatternFamily::BarsSquares`]
const BAR_RATIO_RANGE: (f64, f64) = (0.5, 0.95);

/// The named tiling families
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PatternFamily {
    /// Equilateral triangles
    Triangles,
    /// Plain squares
    Squares,
    /// Squares split into a large square, two bars and a small square
    BarsSquares,
    /// Hexagons
    Beehive,
    /// Isometric cubes built from three rhombi
    Blocks,
    /// Interlocking L-shaped corners
    Corner,
    /// Staggered bricks
    Brick,
    /// Herringbone of horizontal and vertical bricks
    RoadBrick,
    /// Small squares floating on a backdrop
    SparseSquares,
}

impl Choice for PatternFamily {
    const WEIGHTED: &'static [(f64, Self)] = &[
        (20.0, Self::Triangles),
        (10.0, Self::Squares),
        (10.0, Self::BarsSquares),
        (15.0, Self::Beehive),
        (15.0, Self::Blocks),
        (10.0, Self::Corner),
        (10.0, Self::Brick),
        (5.0, Self::RoadBrick),
        (5.0, Self::SparseSquares),
    ];

    fn display_name(self) -> &'static str {
        match self {
            Self::Triangles => "Triangles",
            Self::Squares => "Squares",
            Self::BarsSquares => "BarsSquares",
            Self::Beehive => "Beehive",
            Self::Blocks => "Blocks",
            Self::Corner => "Corner",
            Self::Brick => "Brick",
            Self::RoadBrick => "RoadBrick",
            Self::SparseSquares => "SparseSquares",
        }
    }
}

/// One polygon of a pattern in unit coordinates
#[derive(Clone, Debug, PartialEq)]
pub struct Template {
    /// Vertices in pattern-local units
    pub points: Vec<Point>,
    /// Palette index given to every copy
    pub color_index: usize,
}

/// A repeating arrangement of templates
#[derive(Clone, Debug, PartialEq)]
pub struct TilingPattern {
    family: PatternFamily,
    stride: Point,
    templates: Vec<Template>,
    backdrop: bool,
}

const fn pt(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

fn offset(shape: &[Point], by: Point) -> Vec<Point> {
    shape.iter().map(|&point| point + by).collect()
}

/// Pair templates with a palette cycle (`colors[idx % colors.len()]`)
fn colored(shapes: Vec<Vec<Point>>, colors: &[usize]) -> Vec<Template> {
    shapes
        .into_iter()
        .zip(colors.iter().copied().cycle())
        .map(|(points, color_index)| Template {
            points,
            color_index,
        })
        .collect()
}

impl TilingPattern {
    /// Draw a family from the parameter space and build its pattern
    ///
    /// # Errors
    ///
    /// Returns an error if the `pattern` override names no family
    pub fn draw(params: &ParameterSpace, log: &mut DecisionLog) -> Result<Self> {
        let family: PatternFamily = params.choose("pattern", log)?;
        let bar_ratio = if family == PatternFamily::BarsSquares {
            params.uniform("bar_ratio", BAR_RATIO_RANGE.0, BAR_RATIO_RANGE.1, log)
        } else {
            BAR_RATIO_RANGE.0
        };
        Ok(Self::build(family, bar_ratio))
    }

    /// Build a family's pattern; `bar_ratio` only affects `BarsSquares`
    pub fn build(family: PatternFamily, bar_ratio: f64) -> Self {
        let (stride, templates, backdrop) = match family {
            PatternFamily::Squares => (
                pt(1.0, 1.0),
                colored(vec![vec![pt(0.0, 0.0), pt(0.0, 1.0), pt(1.0, 1.0), pt(1.0, 0.0)]], &[0]),
                false,
            ),
            PatternFamily::SparseSquares => (
                pt(1.0, 1.0),
                colored(
                    vec![vec![pt(0.33, 0.33), pt(0.33, 0.66), pt(0.66, 0.66), pt(0.66, 0.33)]],
                    &[0],
                ),
                true,
            ),
            PatternFamily::BarsSquares => {
                let s = bar_ratio;
                (
                    pt(1.0, 1.0),
                    colored(
                        vec![
                            vec![pt(0.0, 0.0), pt(0.0, s), pt(s, s), pt(s, 0.0)],
                            vec![pt(s, 0.0), pt(s, s), pt(1.0, s), pt(1.0, 0.0)],
                            vec![pt(0.0, s), pt(0.0, 1.0), pt(s, 1.0), pt(s, s)],
                            vec![pt(s, s), pt(s, 1.0), pt(1.0, 1.0), pt(1.0, s)],
                        ],
                        &[0, 2, 2, 1],
                    ),
                    false,
                )
            }
            PatternFamily::Triangles => {
                let h = 0.5 * SQRT3;
                (
                    pt(1.0, SQRT3),
                    colored(
                        vec![
                            vec![pt(0.0, 0.0), pt(1.0, 0.0), pt(0.5, h)],
                            vec![pt(0.5, h), pt(1.0, 0.0), pt(1.5, h)],
                            vec![pt(0.0, SQRT3), pt(1.0, SQRT3), pt(0.5, h)],
                            vec![pt(0.5, h), pt(1.0, SQRT3), pt(1.5, h)],
                        ],
                        &[0],
                    ),
                    false,
                )
            }
            PatternFamily::Corner => {
                let corner = [
                    pt(0.0, 1.0),
                    pt(1.0, 1.0),
                    pt(1.0, 0.0),
                    pt(2.0, 0.0),
                    pt(2.0, 1.0),
                    pt(2.0, 2.0),
                    pt(1.0, 2.0),
                    pt(0.0, 2.0),
                ];
                (
                    pt(3.0, 3.0),
                    colored(
                        vec![
                            offset(&corner, Point::ZERO),
                            offset(&corner, pt(1.0, 1.0)),
                            offset(&corner, pt(2.0, 2.0)),
                        ],
                        &[0],
                    ),
                    false,
                )
            }
            PatternFamily::Beehive => {
                let hexagon = [
                    pt(0.0, 0.0),
                    pt(SIN60, -0.5),
                    pt(2.0 * SIN60, 0.0),
                    pt(2.0 * SIN60, SIN60),
                    pt(SIN60, SIN60 + 0.5),
                    pt(0.0, SIN60),
                ];
                (
                    pt(2.0 * SIN60, 2.0f64.mul_add(SIN60, 1.0)),
                    colored(
                        vec![
                            offset(&hexagon, Point::ZERO),
                            offset(&hexagon, pt(-SIN60, SIN60 + 0.5)),
                        ],
                        &[0],
                    ),
                    false,
                )
            }
            PatternFamily::Blocks => {
                let top = [pt(0.0, -0.5), pt(SIN60, 0.0), pt(0.0, 0.5), pt(-SIN60, 0.0)];
                let left = [
                    pt(-SIN60, 0.0),
                    pt(0.0, 0.5),
                    pt(0.0, SIN60 + 0.5),
                    pt(-SIN60, SIN60),
                ];
                let right = [
                    pt(SIN60, 0.0),
                    pt(0.0, 0.5),
                    pt(0.0, SIN60 + 0.5),
                    pt(SIN60, SIN60),
                ];
                let shift = pt(-SIN60, SIN60 + 0.5);
                (
                    pt(2.0 * SIN60, 2.0f64.mul_add(SIN60, 1.0)),
                    colored(
                        vec![
                            offset(&top, Point::ZERO),
                            offset(&left, Point::ZERO),
                            offset(&right, Point::ZERO),
                            offset(&top, shift),
                            offset(&left, shift),
                            offset(&right, shift),
                        ],
                        &[1, 0, 2],
                    ),
                    false,
                )
            }
            PatternFamily::Brick => {
                let brick = [
                    pt(0.0, 0.0),
                    pt(0.5, 0.0),
                    pt(1.0, 0.0),
                    pt(1.0, 0.5),
                    pt(0.5, 0.5),
                    pt(0.0, 0.5),
                ];
                (
                    pt(1.0, 1.0),
                    colored(
                        vec![offset(&brick, Point::ZERO), offset(&brick, pt(-0.5, 0.5))],
                        &[0],
                    ),
                    false,
                )
            }
            PatternFamily::RoadBrick => {
                let horizontal = [
                    pt(0.0, 0.0),
                    pt(1.0, 0.0),
                    pt(2.0, 0.0),
                    pt(2.0, 1.0),
                    pt(1.0, 1.0),
                    pt(0.0, 1.0),
                ];
                let vertical = [
                    pt(0.0, 0.0),
                    pt(1.0, 0.0),
                    pt(1.0, 1.0),
                    pt(1.0, 2.0),
                    pt(0.0, 2.0),
                    pt(0.0, 1.0),
                ];
                (
                    pt(4.0, 4.0),
                    colored(
                        vec![
                            offset(&horizontal, pt(0.0, 0.0)),
                            offset(&horizontal, pt(1.0, 1.0)),
                            offset(&horizontal, pt(2.0, 2.0)),
                            offset(&horizontal, pt(-1.0, -1.0)),
                            offset(&vertical, pt(0.0, 1.0)),
                            offset(&vertical, pt(1.0, -2.0)),
                            offset(&vertical, pt(2.0, -1.0)),
                            offset(&vertical, pt(-1.0, 0.0)),
                        ],
                        &[0],
                    ),
                    false,
                )
            }
        };

        Self {
            family,
            stride,
            templates,
            backdrop,
        }
    }

    /// The family this pattern was built from
    pub const fn family(&self) -> PatternFamily {
        self.family
    }

    /// Repetition period in pattern-local units
    pub const fn stride(&self) -> Point {
        self.stride
    }

    /// Polygon templates in pattern-local units
    pub fn templates(&self) -> &[Template] {
        &self.templates
    }

    /// Extent of all templates in pattern-local units
    pub fn reach(&self) -> Option<Rect> {
        let mut points = self.templates.iter().flat_map(|template| &template.points);
        let first = *points.next()?;
        let (min, max) = points.fold((first, first), |(min, max), point| {
            (
                Point::new(min.x.min(point.x), min.y.min(point.y)),
                Point::new(max.x.max(point.x), max.y.max(point.y)),
            )
        });
        Some(Rect::new(min, max))
    }

    /// Lazily tile `region` grown by `overscan` of its extent on every side
    ///
    /// Copies sit on a grid of stride multiples anchored at the grown
    /// region's minimum corner. The grid is widened on both ends by the
    /// templates' reach, so every copy overlapping the grown region is
    /// produced and the region is covered without gaps. The returned iterator
    /// borrows the pattern; calling this again restarts generation from the
    /// beginning.
    pub fn generate(&self, region: Rect, scale: f64, overscan: f64) -> Tiles<'_> {
        let area = region.expand(overscan);
        let step = self.stride * scale;
        let reach = self.reach().unwrap_or(Rect::new(Point::ZERO, Point::ZERO));
        let (low, high) = (reach.min * scale, reach.max * scale);

        let span = area.extent();

        let (first_column, columns) = grid_span(low.x, high.x, span.x, step.x);
        let (first_row, rows) = grid_span(low.y, high.y, span.y, step.y);

        let backdrop = self.backdrop.then(|| {
            Polygon::new(
                vec![
                    area.min,
                    Point::new(area.max.x, area.min.y),
                    area.max,
                    Point::new(area.min.x, area.max.y),
                ],
                0,
            )
        });

        Tiles {
            pattern: self,
            origin: area.min,
            step,
            scale,
            first_column,
            first_row,
            columns,
            rows,
            backdrop,
            template: 0,
            column: 0,
            row: 0,
        }
    }
}

/// First index and count of the offsets `k·step` whose reach `[low, high]`
/// overlaps the open interval `(0, span)`
fn grid_span(low: f64, high: f64, span: f64, step: f64) -> (i64, u64) {
    if step.is_nan() || step <= 0.0 || span.is_nan() || span < 0.0 {
        return (0, 0);
    }
    let first = (-high / step).floor() + 1.0;
    let last = ((span - low) / step).ceil() - 1.0;
    if !first.is_finite() || !last.is_finite() || last < first {
        return (0, 0);
    }
    (first as i64, (last - first) as u64 + 1)
}

/// Lazy stream of tiles produced by [`TilingPattern::generate`]
#[derive(Clone, Debug)]
pub struct Tiles<'a> {
    pattern: &'a TilingPattern,
    origin: Point,
    step: Point,
    scale: f64,
    first_column: i64,
    first_row: i64,
    columns: u64,
    rows: u64,
    backdrop: Option<Polygon>,
    template: usize,
    column: u64,
    row: u64,
}

impl Iterator for Tiles<'_> {
    type Item = Polygon;

    fn next(&mut self) -> Option<Polygon> {
        if let Some(backdrop) = self.backdrop.take() {
            return Some(backdrop);
        }
        if self.columns == 0 || self.rows == 0 {
            return None;
        }

        let template = self.pattern.templates.get(self.template)?;
        let position = Point::new(
            (self.first_column + self.column as i64) as f64 * self.step.x,
            (self.first_row + self.row as i64) as f64 * self.step.y,
        ) + self.origin;

        // Rows vary fastest, then columns, then templates
        self.row += 1;
        if self.row == self.rows {
            self.row = 0;
            self.column += 1;
            if self.column == self.columns {
                self.column = 0;
                self.template += 1;
            }
        }

        Some(Polygon::new(
            template
                .points
                .iter()
                .map(|&point| position + point * self.scale)
                .collect(),
            template.color_index,
        ))
    }
}
