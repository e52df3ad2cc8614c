use std::fmt;

use crate::coords::Point;
use crate::paint::ColorIndex;
use crate::raster::{self, RasterPoint, Stroke};

/// Primitive kinds the board can draw.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum PrimitiveKind {
    Line,
    Triangle,
    Circle,
}

impl PrimitiveKind {
    /// Control points needed before a primitive of this kind is committed.
    #[inline]
    pub const fn required_clicks(self) -> usize {
        match self {
            PrimitiveKind::Line => 2,
            PrimitiveKind::Triangle => 3,
            PrimitiveKind::Circle => 1,
        }
    }
}

impl fmt::Display for PrimitiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            PrimitiveKind::Line => "line",
            PrimitiveKind::Triangle => "triangle",
            PrimitiveKind::Circle => "circle",
        })
    }
}

/// Control geometry of a committed shape, in raster space.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Geometry {
    Line { start: Point, end: Point },
    Triangle { vertices: [Point; 3] },
    Circle { center: Point, radius: u32 },
}

impl Geometry {
    #[inline]
    pub fn kind(&self) -> PrimitiveKind {
        match self {
            Geometry::Line { .. } => PrimitiveKind::Line,
            Geometry::Triangle { .. } => PrimitiveKind::Triangle,
            Geometry::Circle { .. } => PrimitiveKind::Circle,
        }
    }

    /// Control points in click order (2 for lines, 3 for triangles, the centre for circles).
    pub fn control_points(&self) -> Vec<Point> {
        match *self {
            Geometry::Line { start, end } => vec![start, end],
            Geometry::Triangle { vertices } => vertices.to_vec(),
            Geometry::Circle { center, .. } => vec![center],
        }
    }
}

/// A committed primitive with its cached samples.
///
/// Geometry, stroke and samples are fixed at commit time except for a circle's
/// radius; `set_radius` recomputes `points` so they never go stale.
#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    geometry: Geometry,
    stroke: Stroke,
    pub color: ColorIndex,
    points: Vec<RasterPoint>,
}

impl Shape {
    pub fn line(start: Point, end: Point, stroke: Stroke, color: ColorIndex) -> Self {
        Self::build(Geometry::Line { start, end }, stroke, color)
    }

    pub fn triangle(vertices: [Point; 3], stroke: Stroke, color: ColorIndex) -> Self {
        Self::build(Geometry::Triangle { vertices }, stroke, color)
    }

    /// Circles carry no stroke; the stored stroke is thin and ignored.
    pub fn circle(center: Point, radius: u32, color: ColorIndex) -> Self {
        Self::build(Geometry::Circle { center, radius }, Stroke::thin(), color)
    }

    fn build(geometry: Geometry, stroke: Stroke, color: ColorIndex) -> Self {
        let points = rasterize(&geometry, stroke);
        Self { geometry, stroke, color, points }
    }

    #[inline]
    pub fn kind(&self) -> PrimitiveKind {
        self.geometry.kind()
    }

    #[inline]
    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    #[inline]
    pub fn stroke(&self) -> Stroke {
        self.stroke
    }

    /// Stroke width for lines/triangles; `None` for circles.
    #[inline]
    pub fn thickness(&self) -> Option<u32> {
        match self.geometry {
            Geometry::Circle { .. } => None,
            _ => Some(self.stroke.width()),
        }
    }

    /// Radius for circles; `None` otherwise.
    #[inline]
    pub fn radius(&self) -> Option<u32> {
        match self.geometry {
            Geometry::Circle { radius, .. } => Some(radius),
            _ => None,
        }
    }

    /// Cached rasterized samples.
    #[inline]
    pub fn points(&self) -> &[RasterPoint] {
        &self.points
    }

    /// Re-rasterizes a circle around its original centre. No-op for other kinds.
    ///
    /// Returns `true` if the shape changed.
    pub fn set_radius(&mut self, new_radius: u32) -> bool {
        let Geometry::Circle { center, radius } = self.geometry else {
            return false;
        };
        if radius == new_radius {
            return false;
        }
        self.geometry = Geometry::Circle { center, radius: new_radius };
        self.points = rasterize(&self.geometry, self.stroke);
        true
    }
}

fn rasterize(geometry: &Geometry, stroke: Stroke) -> Vec<RasterPoint> {
    match *geometry {
        Geometry::Line { start, end } => raster::rasterize_line(start, end, stroke),
        Geometry::Triangle { vertices } => raster::rasterize_triangle(vertices, stroke),
        Geometry::Circle { center, radius } => raster::rasterize_circle(center, radius),
    }
}
