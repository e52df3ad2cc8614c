use super::Point;

/// Drawing surface size in device pixels.
///
/// Owns the three coordinate spaces used by the board:
/// - device: pointer position, origin top-left, +Y down (fractional)
/// - raster: integer pixel grid aligned with device pixels
/// - normalized: [-1, 1] on both axes, origin at the surface centre, +Y up
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Surface {
    pub width: f32,
    pub height: f32,
}

impl Surface {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn is_valid(self) -> bool {
        self.width > 0.0 && self.height > 0.0 && self.width.is_finite() && self.height.is_finite()
    }

    /// Maps a device pixel position to raster space.
    #[inline]
    pub fn to_raster(self, x: f32, y: f32) -> Point {
        to_raster_space(x, y, self.width, self.height)
    }

    /// Maps a raster point to normalized space.
    #[inline]
    pub fn to_normalized(self, p: Point) -> (f32, f32) {
        to_normalized(p, self.width, self.height)
    }
}

impl Default for Surface {
    fn default() -> Self {
        Self::new(800.0, 600.0)
    }
}

/// Device pixel → raster point.
///
/// Goes through normalized space first so both directions share one convention.
/// Rounding is half-up (ties go toward +inf).
pub fn to_raster_space(x: f32, y: f32, width: f32, height: f32) -> Point {
    let (w, h) = (width as f64, height as f64);

    let nx = 2.0 / w * x as f64 - 1.0;
    let ny = -2.0 / h * y as f64 + 1.0;

    let rx = round_half_up(nx * w / 2.0 + w / 2.0);
    let ry = round_half_up(-ny * h / 2.0 + h / 2.0);

    Point::new(rx as i32, ry as i32)
}

/// Raster point → normalized `(nx, ny)`.
pub fn to_normalized(p: Point, width: f32, height: f32) -> (f32, f32) {
    to_normalized_f64(p.x as f64, p.y as f64, width, height)
}

/// Same as [`to_normalized`] for fractional raster positions (half-offset samples).
pub fn to_normalized_f64(rx: f64, ry: f64, width: f32, height: f32) -> (f32, f32) {
    let (w, h) = (width as f64, height as f64);
    let nx = (rx - w / 2.0) * 2.0 / w;
    let ny = -(ry - h / 2.0) * 2.0 / h;
    (nx as f32, ny as f32)
}

/// Normalized `(nx, ny)` → raster point. Inverse of [`to_normalized`].
pub fn from_normalized(nx: f32, ny: f32, width: f32, height: f32) -> Point {
    let (w, h) = (width as f64, height as f64);
    let rx = round_half_up(nx as f64 * w / 2.0 + w / 2.0);
    let ry = round_half_up(-(ny as f64) * h / 2.0 + h / 2.0);
    Point::new(rx as i32, ry as i32)
}

#[inline]
fn round_half_up(v: f64) -> f64 {
    (v + 0.5).floor()
}
