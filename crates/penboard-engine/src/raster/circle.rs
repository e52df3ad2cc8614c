//! Midpoint circle rasterization.

use crate::coords::Point;

use super::{PointSet, RasterPoint};

/// Outline samples of the circle at `center` with `radius`.
///
/// Uses the integer midpoint decision `d = 3 - 2r` and mirrors every step into
/// the eight octants. Mirrored duplicates (axis extrema, the 45° diagonal)
/// are dropped; order is first-seen. `radius == 0` yields only `center`.
///
/// Radii beyond `i32::MAX` are treated as `i32::MAX`. Samples that would fall
/// outside the `i32` grid saturate at its edge.
pub fn rasterize_circle(center: Point, radius: u32) -> Vec<RasterPoint> {
    if radius == 0 {
        return vec![RasterPoint::from(center)];
    }

    let r = i32::try_from(radius).unwrap_or(i32::MAX);
    let mut set = PointSet::with_capacity(capacity_hint(r));

    let mut x: i32 = 0;
    let mut y: i32 = r;
    let mut d: i64 = 3 - 2 * i64::from(r);

    push_octants(&mut set, center, x, y);

    while y >= x {
        x += 1;
        if d > 0 {
            y -= 1;
            d += 4 * (i64::from(x) - i64::from(y)) + 10;
        } else {
            d += 4 * i64::from(x) + 6;
        }
        push_octants(&mut set, center, x, y);
    }

    set.into_vec()
}

/// Upper bound on unique samples, capped so huge radii don't pre-allocate.
fn capacity_hint(r: i32) -> usize {
    const MAX_PRESIZE: usize = 1 << 16;
    (r as usize).saturating_add(1).saturating_mul(8).min(MAX_PRESIZE)
}

fn push_octants(set: &mut PointSet, c: Point, x: i32, y: i32) {
    for (ox, oy) in [
        (x, y),
        (-x, y),
        (x, -y),
        (-x, -y),
        (y, x),
        (-y, x),
        (y, -x),
        (-y, -x),
    ] {
        set.insert(RasterPoint::whole(c.x.saturating_add(ox), c.y.saturating_add(oy)));
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn zero_radius_is_the_center() {
        assert_eq!(rasterize_circle(Point::new(0, 0), 0), vec![RasterPoint::whole(0, 0)]);
        assert_eq!(rasterize_circle(Point::new(4, -2), 0), vec![RasterPoint::whole(4, -2)]);
    }

    #[test]
    fn unit_radius_is_a_plus() {
        let pts: HashSet<RasterPoint> = rasterize_circle(Point::new(0, 0), 1).into_iter().collect();
        let expected: HashSet<RasterPoint> = [(1, 0), (-1, 0), (0, 1), (0, -1)]
            .into_iter()
            .map(|(x, y)| RasterPoint::whole(x, y))
            .collect();
        assert_eq!(pts, expected);
    }

    #[test]
    fn radius_five_stays_within_one_pixel() {
        let c = Point::new(10, 10);
        let pts = rasterize_circle(c, 5);

        for s in &pts {
            let dist = (s.pixel().distance_sq(c) as f64).sqrt();
            assert!((dist - 5.0).abs() <= 1.0, "{:?} at distance {dist}", s);
        }

        // (0,5) and (3,3) each collapse to 4 unique points; (1,5) and (2,4) give 8.
        assert_eq!(pts.len(), 24);
        assert_eq!(pts.len() % 4, 0);
    }

    #[test]
    fn outline_is_symmetric_and_unique() {
        let c = Point::new(-3, 7);
        let pts = rasterize_circle(c, 37);
        let set: HashSet<RasterPoint> = pts.iter().copied().collect();
        assert_eq!(set.len(), pts.len());

        for s in &pts {
            let (dx, dy) = (s.x - c.x, s.y - c.y);
            for (mx, my) in [(-dx, dy), (dx, -dy), (dy, dx)] {
                assert!(set.contains(&RasterPoint::whole(c.x + mx, c.y + my)));
            }
        }
    }

    #[test]
    fn center_at_grid_edge_saturates() {
        let c = Point::new(i32::MAX, i32::MIN);
        let pts = rasterize_circle(c, 3);
        assert!(pts.contains(&RasterPoint::whole(i32::MAX, i32::MIN)));
        assert!(pts.contains(&RasterPoint::whole(i32::MAX - 3, i32::MIN)));
    }

    #[test]
    fn capacity_hint_is_bounded() {
        assert_eq!(capacity_hint(5), 48);
        assert_eq!(capacity_hint(i32::MAX), 1 << 16);
    }

    #[test]
    fn axis_extrema_present() {
        let c = Point::new(100, 100);
        let pts = rasterize_circle(c, 50);
        for (x, y) in [(150, 100), (50, 100), (100, 150), (100, 50)] {
            assert!(pts.contains(&RasterPoint::whole(x, y)));
        }
    }
}
