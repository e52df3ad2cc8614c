use std::collections::HashSet;

use crate::coords::{to_normalized_f64, Point, Surface};

/// One rasterized sample.
///
/// Whole samples sit on the pixel `(x, y)`. Half-offset samples sit at
/// `(x + 0.5, y + 0.5)`; even stroke widths produce them. The two never
/// compare equal, even when `x`/`y` match.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct RasterPoint {
    pub x: i32,
    pub y: i32,
    pub half_offset: bool,
}

impl RasterPoint {
    #[inline]
    pub const fn whole(x: i32, y: i32) -> Self {
        Self { x, y, half_offset: false }
    }

    #[inline]
    pub const fn half(x: i32, y: i32) -> Self {
        Self { x, y, half_offset: true }
    }

    /// Fractional raster position of the sample.
    #[inline]
    pub fn position(self) -> (f64, f64) {
        let off = if self.half_offset { 0.5 } else { 0.0 };
        (self.x as f64 + off, self.y as f64 + off)
    }

    /// Integer pixel this sample belongs to (drops the half offset).
    #[inline]
    pub const fn pixel(self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Sample position in normalized space for `surface`.
    #[inline]
    pub fn to_normalized(self, surface: Surface) -> (f32, f32) {
        let (x, y) = self.position();
        to_normalized_f64(x, y, surface.width, surface.height)
    }
}

impl From<Point> for RasterPoint {
    #[inline]
    fn from(p: Point) -> Self {
        Self::whole(p.x, p.y)
    }
}

/// Insertion-ordered set of samples.
///
/// Iteration order is first-seen. Callers should treat it as
/// implementation-defined and compare contents as sets.
#[derive(Debug, Default, Clone)]
pub struct PointSet {
    seen: HashSet<RasterPoint>,
    order: Vec<RasterPoint>,
}

impl PointSet {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn with_capacity(cap: usize) -> Self {
        Self {
            seen: HashSet::with_capacity(cap),
            order: Vec::with_capacity(cap),
        }
    }

    /// Adds `p`; returns `false` if it was already present.
    #[inline]
    pub fn insert(&mut self, p: RasterPoint) -> bool {
        let inserted = self.seen.insert(p);
        if inserted {
            self.order.push(p);
        }
        inserted
    }

    #[inline]
    pub fn contains(&self, p: &RasterPoint) -> bool {
        self.seen.contains(p)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    #[inline]
    pub fn into_vec(self) -> Vec<RasterPoint> {
        self.order
    }
}

impl Extend<RasterPoint> for PointSet {
    fn extend<I: IntoIterator<Item = RasterPoint>>(&mut self, iter: I) {
        for p in iter {
            self.insert(p);
        }
    }
}

impl FromIterator<RasterPoint> for PointSet {
    fn from_iter<I: IntoIterator<Item = RasterPoint>>(iter: I) -> Self {
        let mut set = PointSet::new();
        set.extend(iter);
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn half_and_whole_samples_are_distinct() {
        assert_ne!(RasterPoint::whole(3, 4), RasterPoint::half(3, 4));
        assert_eq!(RasterPoint::half(3, 4).position(), (3.5, 4.5));
        assert_eq!(RasterPoint::half(3, 4).pixel(), Point::new(3, 4));
    }

    #[test]
    fn point_set_keeps_first_seen_order() {
        let set: PointSet = [
            RasterPoint::whole(2, 0),
            RasterPoint::whole(1, 0),
            RasterPoint::whole(2, 0),
            RasterPoint::half(2, 0),
        ]
        .into_iter()
        .collect();

        assert_eq!(set.len(), 3);
        assert!(set.contains(&RasterPoint::half(2, 0)));
        assert_eq!(
            set.into_vec(),
            vec![RasterPoint::whole(2, 0), RasterPoint::whole(1, 0), RasterPoint::half(2, 0)]
        );
    }
}
