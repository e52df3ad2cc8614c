use super::{PrimitiveKind, Shape};

/// Ordered store of committed shapes.
///
/// Performance characteristics:
/// - `push()` is O(1)
/// - `clear()` keeps allocated capacity for reuse
/// - `recompute_radius()` re-rasterizes circles only; other shapes are left untouched
#[derive(Debug, Default, Clone)]
pub struct ShapeStore {
    items: Vec<Shape>,
}

impl ShapeStore {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes every shape. Keeps allocated capacity for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Returns shapes in insertion (paint) order.
    #[inline]
    pub fn items(&self) -> &[Shape] {
        &self.items
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &Shape> {
        self.items.iter()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Appends a shape. Later shapes paint over earlier ones.
    #[inline]
    pub fn push(&mut self, shape: Shape) {
        self.items.push(shape);
    }

    /// Replaces the whole store with `shape`.
    pub fn replace(&mut self, shape: Shape) {
        self.items.clear();
        self.items.push(shape);
    }

    #[inline]
    pub fn last(&self) -> Option<&Shape> {
        self.items.last()
    }

    /// Mutable access to the newest shape.
    #[inline]
    pub fn last_mut(&mut self) -> Option<&mut Shape> {
        self.items.last_mut()
    }

    /// Re-rasterizes every stored circle at `radius` around its own centre.
    ///
    /// Returns the number of circles that changed.
    pub fn recompute_radius(&mut self, radius: u32) -> usize {
        self.items
            .iter_mut()
            .filter(|s| s.kind() == PrimitiveKind::Circle)
            .map(|s| s.set_radius(radius))
            .filter(|&c| c)
            .count()
    }
}

impl<'a> IntoIterator for &'a ShapeStore {
    type Item = &'a Shape;
    type IntoIter = std::slice::Iter<'a, Shape>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Point;
    use crate::paint::ColorIndex;
    use crate::raster::{rasterize_circle, Stroke};

    fn p(x: i32, y: i32) -> Point {
        Point::new(x, y)
    }

    fn mixed_store() -> ShapeStore {
        let mut store = ShapeStore::new();
        store.push(Shape::line(p(0, 0), p(5, 5), Stroke::thin(), ColorIndex::BLUE));
        store.push(Shape::circle(p(100, 100), 50, ColorIndex::BLUE));
        store.push(Shape::triangle([p(0, 0), p(4, 0), p(0, 4)], Stroke::thin(), ColorIndex::BLACK));
        store.push(Shape::circle(p(-20, 30), 50, ColorIndex::BLACK));
        store
    }

    #[test]
    fn push_keeps_insertion_order() {
        let store = mixed_store();
        let kinds: Vec<_> = store.iter().map(Shape::kind).collect();
        assert_eq!(
            kinds,
            [PrimitiveKind::Line, PrimitiveKind::Circle, PrimitiveKind::Triangle, PrimitiveKind::Circle]
        );
        assert_eq!(store.len(), 4);
    }

    #[test]
    fn recompute_radius_touches_circles_only() {
        let mut store = mixed_store();
        let line_before = store.items()[0].clone();
        let tri_before = store.items()[2].clone();

        assert_eq!(store.recompute_radius(20), 2);

        assert_eq!(store.items()[0], line_before);
        assert_eq!(store.items()[2], tri_before);
        assert_eq!(store.items()[1].radius(), Some(20));
        assert_eq!(store.items()[1].points(), rasterize_circle(p(100, 100), 20).as_slice());
        assert_eq!(store.items()[3].points(), rasterize_circle(p(-20, 30), 20).as_slice());
    }

    #[test]
    fn recompute_same_radius_is_a_no_op() {
        let mut store = mixed_store();
        let before = store.items().to_vec();
        assert_eq!(store.recompute_radius(50), 0);
        assert_eq!(store.items(), before.as_slice());
    }

    #[test]
    fn clear_and_replace() {
        let mut store = mixed_store();
        store.clear();
        assert!(store.is_empty());

        store.push(Shape::circle(p(0, 0), 3, ColorIndex::BLUE));
        store.replace(Shape::line(p(0, 0), p(2, 0), Stroke::thin(), ColorIndex::BLUE));
        assert_eq!(store.len(), 1);
        assert_eq!(store.last().map(Shape::kind), Some(PrimitiveKind::Line));
        assert_eq!(store.last().map(|s| s.points().len()), Some(3));
    }

    #[test]
    fn last_mut_edits_the_newest_shape() {
        let mut store = mixed_store();
        if let Some(s) = store.last_mut() {
            s.color = ColorIndex::BLUE;
        }
        assert_eq!(store.items()[3].color, ColorIndex::BLUE);
        assert_eq!(store.items()[2].color, ColorIndex::BLACK);
    }
}
