use crate::coords::Surface;
use crate::paint::ColorIndex;
use crate::raster::EvenStroke;
use crate::scene::PrimitiveKind;

/// What happens to earlier shapes when a new one is committed.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum Retention {
    /// Shapes accumulate. Color and thickness changes apply to future shapes only.
    #[default]
    Accumulate,
    /// The board holds at most one shape. Each commit replaces it, and color
    /// or thickness changes are applied to it immediately.
    SingleShape,
}

/// Inclusive range accepted by `Board::set_global_radius`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct RadiusBounds {
    pub min: u32,
    pub max: u32,
}

impl RadiusBounds {
    #[inline]
    pub const fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    /// Returns the radius as `u32` if it lies inside the bounds.
    #[inline]
    pub fn check(self, radius: i32) -> Option<u32> {
        u32::try_from(radius)
            .ok()
            .filter(|r| (self.min..=self.max).contains(r))
    }

    /// Nearest radius inside the bounds.
    #[inline]
    pub fn clamp(self, radius: u32) -> u32 {
        radius.clamp(self.min, self.max.max(self.min))
    }
}

impl Default for RadiusBounds {
    fn default() -> Self {
        Self::new(10, 200)
    }
}

/// Board configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct BoardConfig {
    pub retention: Retention,
    pub initial_mode: PrimitiveKind,
    pub initial_color: ColorIndex,
    /// Clamped to `1..=9`.
    pub initial_thickness: u32,
    pub initial_radius: u32,
    pub radius_bounds: RadiusBounds,
    pub even_stroke: EvenStroke,
    /// Marker size for line and triangle samples, in device pixels.
    pub outline_point_size: f32,
    /// Marker size for circle samples, in device pixels.
    pub circle_point_size: f32,
    /// Surface size assumed until the first `resize`.
    pub surface: Surface,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            retention: Retention::Accumulate,
            initial_mode: PrimitiveKind::Line,
            initial_color: ColorIndex::BLUE,
            initial_thickness: 1,
            initial_radius: 50,
            radius_bounds: RadiusBounds::default(),
            even_stroke: EvenStroke::HalfPixelShift,
            outline_point_size: 1.0,
            circle_point_size: 5.0,
            surface: Surface::default(),
        }
    }
}

impl BoardConfig {
    /// Radius-based variant: starts in circle mode.
    pub fn circles() -> Self {
        Self {
            initial_mode: PrimitiveKind::Circle,
            ..Self::default()
        }
    }

    /// Same configuration with single-shape retention.
    pub fn single_shape(self) -> Self {
        Self {
            retention: Retention::SingleShape,
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_initial_state() {
        let cfg = BoardConfig::default();
        assert_eq!(cfg.retention, Retention::Accumulate);
        assert_eq!(cfg.initial_mode, PrimitiveKind::Line);
        assert_eq!(cfg.initial_color, ColorIndex::BLUE);
        assert_eq!(cfg.initial_thickness, 1);
        assert_eq!(cfg.initial_radius, 50);
        assert_eq!(cfg.radius_bounds, RadiusBounds::new(10, 200));
        assert_eq!(cfg.even_stroke, EvenStroke::HalfPixelShift);
    }

    #[test]
    fn circles_variant() {
        let cfg = BoardConfig::circles().single_shape();
        assert_eq!(cfg.initial_mode, PrimitiveKind::Circle);
        assert_eq!(cfg.retention, Retention::SingleShape);
        assert_eq!(cfg.initial_radius, 50);
    }

    #[test]
    fn radius_bounds_are_inclusive() {
        let b = RadiusBounds::default();
        assert_eq!(b.check(10), Some(10));
        assert_eq!(b.check(200), Some(200));
        assert_eq!(b.check(9), None);
        assert_eq!(b.check(201), None);
        assert_eq!(b.check(-50), None);
    }

    #[test]
    fn radius_bounds_clamp() {
        let b = RadiusBounds::default();
        assert_eq!(b.clamp(0), 10);
        assert_eq!(b.clamp(50), 50);
        assert_eq!(b.clamp(500), 200);
    }
}
