use crate::coords::Surface;
use crate::paint::Rgb;
use crate::raster::RasterPoint;

/// One shape's worth of markers, ready for a renderer.
///
/// Positions are in normalized space (centre origin, +Y up). Renderers only
/// borrow a batch for the duration of `draw_points`.
#[derive(Debug, Clone, PartialEq)]
pub struct PointBatch {
    pub points: Vec<[f32; 2]>,
    pub color: Rgb,
    /// Marker edge length in device pixels.
    pub point_size: f32,
}

impl PointBatch {
    /// Maps raster samples onto `surface` and tags them with a color and size.
    pub fn from_samples(samples: &[RasterPoint], surface: Surface, color: Rgb, point_size: f32) -> Self {
        let points = samples
            .iter()
            .map(|s| {
                let (x, y) = s.to_normalized(surface);
                [x, y]
            })
            .collect();
        Self { points, color, point_size }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Output side of the board.
///
/// A redraw is one `clear` followed by one `draw_points` per shape, in commit order.
pub trait Renderer {
    fn clear(&mut self);
    fn draw_points(&mut self, batch: &PointBatch);
}

impl<R: Renderer + ?Sized> Renderer for &mut R {
    #[inline]
    fn clear(&mut self) {
        (**self).clear();
    }

    #[inline]
    fn draw_points(&mut self, batch: &PointBatch) {
        (**self).draw_points(batch);
    }
}
