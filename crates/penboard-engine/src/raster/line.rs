//! Bresenham line rasterization.

use crate::coords::Point;

use super::{RasterPoint, Stroke};

/// Bresenham walk from `start` to `end`, both inclusive.
///
/// The first point is always `start`, the last is always `end`. Works in every
/// octant with the same error-accumulation rule; no slope special-casing.
#[derive(Debug, Clone)]
pub struct BresenhamLine {
    x: i32,
    y: i32,
    end: Point,
    // Deltas and the error term are widened so endpoints anywhere in the
    // `i32` range cannot overflow.
    dx: i64,
    dy: i64,
    sx: i32,
    sy: i32,
    err: i64,
    done: bool,
    started: bool,
}

impl BresenhamLine {
    pub fn new(start: Point, end: Point) -> Self {
        let dx = (i64::from(end.x) - i64::from(start.x)).abs();
        let dy = (i64::from(end.y) - i64::from(start.y)).abs();
        Self {
            x: start.x,
            y: start.y,
            end,
            dx,
            dy,
            sx: if start.x < end.x { 1 } else { -1 },
            sy: if start.y < end.y { 1 } else { -1 },
            err: dx - dy,
            done: false,
            started: false,
        }
    }
}

impl Iterator for BresenhamLine {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        if self.done {
            return None;
        }

        if !self.started {
            self.started = true;
        } else {
            let e2 = 2 * self.err;
            if e2 > -self.dy {
                self.err -= self.dy;
                self.x += self.sx;
            }
            if e2 < self.dx {
                self.err += self.dx;
                self.y += self.sy;
            }
        }

        let p = Point::new(self.x, self.y);
        if p == self.end {
            self.done = true;
        }
        Some(p)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            return (0, Some(0));
        }
        // Every step advances the major axis by exactly one.
        let span = |a: i32, b: i32| (i64::from(a) - i64::from(b)).abs();
        let remaining = span(self.end.x, self.x).max(span(self.end.y, self.y)) as usize;
        let n = if self.started { remaining } else { remaining + 1 };
        (n, Some(n))
    }
}

/// Pixels walked from `start` to `end` (inclusive), one per step.
pub fn walk(start: Point, end: Point) -> Vec<Point> {
    BresenhamLine::new(start, end).collect()
}

/// Rasterizes a stroked line.
///
/// Each walked pixel expands into the stroke block. Blocks of neighbouring
/// steps overlap; the overlap is kept (renderers treat the result as a point cloud).
pub fn rasterize_line(start: Point, end: Point, stroke: Stroke) -> Vec<RasterPoint> {
    let line = BresenhamLine::new(start, end);
    let mut out = Vec::with_capacity(line.size_hint().0 * stroke.block_len());
    for p in line {
        stroke.expand_into(p, &mut out);
    }
    out
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::raster::EvenStroke;

    fn p(x: i32, y: i32) -> Point {
        Point::new(x, y)
    }

    // ── walk ──────────────────────────────────────────────────────────────

    #[test]
    fn horizontal_line_in_order() {
        assert_eq!(
            walk(p(0, 0), p(5, 0)),
            vec![p(0, 0), p(1, 0), p(2, 0), p(3, 0), p(4, 0), p(5, 0)]
        );
    }

    #[test]
    fn single_point_line() {
        assert_eq!(walk(p(7, -3), p(7, -3)), vec![p(7, -3)]);
    }

    #[test]
    fn vertical_and_diagonal() {
        assert_eq!(walk(p(2, 3), p(2, 0)), vec![p(2, 3), p(2, 2), p(2, 1), p(2, 0)]);
        assert_eq!(walk(p(0, 0), p(-3, 3)), vec![p(0, 0), p(-1, 1), p(-2, 2), p(-3, 3)]);
    }

    #[test]
    fn shallow_slope_steps_major_axis_once_per_point() {
        let pts = walk(p(0, 0), p(10, 3));
        assert_eq!(pts.len(), 11);
        assert_eq!(pts.first(), Some(&p(0, 0)));
        assert_eq!(pts.last(), Some(&p(10, 3)));
        for pair in pts.windows(2) {
            assert_eq!(pair[1].x - pair[0].x, 1);
            assert!((pair[1].y - pair[0].y).abs() <= 1);
        }
    }

    #[test]
    fn reversed_line_covers_same_pixels() {
        let cases = [
            (p(0, 0), p(5, 0)),
            (p(0, 0), p(7, 3)),
            (p(-4, 9), p(6, -2)),
            (p(3, 3), p(-8, 5)),
            (p(1, 1), p(2, 9)),
        ];
        for (a, b) in cases {
            let fwd: HashSet<Point> = walk(a, b).into_iter().collect();
            let back: HashSet<Point> = walk(b, a).into_iter().collect();
            assert_eq!(fwd, back, "{a} -> {b}");
        }
    }

    #[test]
    fn size_hint_is_exact() {
        let line = BresenhamLine::new(p(0, 0), p(-6, 4));
        assert_eq!(line.size_hint(), (7, Some(7)));
        assert_eq!(line.count(), 7);
    }

    #[test]
    fn endpoints_at_i32_extremes() {
        let line = BresenhamLine::new(p(i32::MIN, 0), p(i32::MAX, 0));
        assert_eq!(line.size_hint(), (u32::MAX as usize + 1, Some(u32::MAX as usize + 1)));

        let head: Vec<Point> = line.take(3).collect();
        assert_eq!(head, vec![p(i32::MIN, 0), p(i32::MIN + 1, 0), p(i32::MIN + 2, 0)]);

        let steep = walk(p(i32::MAX, i32::MIN), p(i32::MAX, i32::MIN + 2));
        assert_eq!(steep.len(), 3);
        assert_eq!(steep.last(), Some(&p(i32::MAX, i32::MIN + 2)));
    }

    // ── rasterize_line ────────────────────────────────────────────────────

    #[test]
    fn thin_stroke_matches_walk() {
        let pts = rasterize_line(p(0, 0), p(3, 0), Stroke::thin());
        let expected: Vec<RasterPoint> = walk(p(0, 0), p(3, 0)).into_iter().map(Into::into).collect();
        assert_eq!(pts, expected);
    }

    #[test]
    fn thick_stroke_keeps_overlap() {
        let pts = rasterize_line(p(0, 0), p(1, 0), Stroke::new(3, EvenStroke::HalfPixelShift));
        // Two steps of a 3x3 block, no dedup.
        assert_eq!(pts.len(), 18);
        assert_eq!(pts.iter().filter(|s| **s == RasterPoint::whole(0, 0)).count(), 2);
    }

    #[test]
    fn even_stroke_produces_half_offsets() {
        let pts = rasterize_line(p(0, 0), p(0, 0), Stroke::new(2, EvenStroke::HalfPixelShift));
        assert_eq!(pts.len(), 9);
        assert!(pts.iter().all(|s| s.half_offset));
    }
}
