//! Triangle outlines composed from three stroked edges.

use crate::coords::Point;

use super::{line, PointSet, RasterPoint, Stroke};

/// Outline of the triangle `v0 → v1 → v2 → v0`.
///
/// Samples shared between edges (vertices, overlapping stroke blocks) appear
/// once. The result is a set: its order is first-seen and otherwise unspecified.
pub fn rasterize_triangle(vertices: [Point; 3], stroke: Stroke) -> Vec<RasterPoint> {
    let [v0, v1, v2] = vertices;

    let mut set = PointSet::new();
    for (a, b) in [(v0, v1), (v1, v2), (v2, v0)] {
        set.extend(line::rasterize_line(a, b, stroke));
    }
    set.into_vec()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::raster::EvenStroke;

    fn p(x: i32, y: i32) -> Point {
        Point::new(x, y)
    }

    fn as_set(pts: &[RasterPoint]) -> HashSet<RasterPoint> {
        pts.iter().copied().collect()
    }

    #[test]
    fn edges_union_without_duplicates() {
        let pts = rasterize_triangle([p(0, 0), p(4, 0), p(0, 4)], Stroke::thin());
        assert_eq!(as_set(&pts).len(), pts.len());

        let mut expected = HashSet::new();
        for (a, b) in [(p(0, 0), p(4, 0)), (p(4, 0), p(0, 4)), (p(0, 4), p(0, 0))] {
            expected.extend(line::walk(a, b).into_iter().map(RasterPoint::from));
        }
        assert_eq!(as_set(&pts), expected);
        // 5 + 5 + 5 minus the three shared vertices.
        assert_eq!(pts.len(), 12);
    }

    #[test]
    fn collinear_vertices_degenerate_to_segment() {
        let pts = rasterize_triangle([p(0, 0), p(2, 0), p(4, 0)], Stroke::thin());
        let expected: HashSet<RasterPoint> =
            (0..=4).map(|x| RasterPoint::whole(x, 0)).collect();
        assert_eq!(pts.len(), 5);
        assert_eq!(as_set(&pts), expected);
    }

    #[test]
    fn coincident_vertices_are_one_point() {
        let pts = rasterize_triangle([p(3, 3), p(3, 3), p(3, 3)], Stroke::thin());
        assert_eq!(pts, vec![RasterPoint::whole(3, 3)]);
    }

    #[test]
    fn thick_edges_dedup_overlapping_blocks() {
        let stroke = Stroke::new(3, EvenStroke::HalfPixelShift);
        let pts = rasterize_triangle([p(0, 0), p(10, 0), p(5, 8)], stroke);
        assert_eq!(as_set(&pts).len(), pts.len());
        assert!(pts.contains(&RasterPoint::whole(-1, -1)));
    }

    #[test]
    fn even_offsets_are_kept_apart_from_whole_pixels() {
        let stroke = Stroke::new(2, EvenStroke::HalfPixelShift);
        let pts = rasterize_triangle([p(0, 0), p(6, 0), p(0, 6)], stroke);
        assert!(pts.iter().all(|s| s.half_offset));
        assert!(!pts.contains(&RasterPoint::whole(0, 0)));
        assert!(pts.contains(&RasterPoint::half(0, 0)));
    }
}
