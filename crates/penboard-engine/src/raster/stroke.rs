use crate::coords::Point;

use super::RasterPoint;

/// How even stroke widths are laid out around a walked pixel.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum EvenStroke {
    /// Offsets `-w/2 ..= w/2` on both axes, every sample shifted by +0.5.
    ///
    /// The block is `(w + 1) × (w + 1)` and made of half-offset samples.
    #[default]
    HalfPixelShift,
    /// Offsets `-w/2 ..= w/2 - 1` on both axes, whole pixels only.
    ///
    /// The block is exactly `w × w`, biased toward the top-left.
    SymmetricBlock,
}

/// Stroke width applied to line and triangle outlines.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Stroke {
    width: u32,
    pub even: EvenStroke,
}

impl Stroke {
    /// Width is clamped to at least 1.
    #[inline]
    pub fn new(width: u32, even: EvenStroke) -> Self {
        Self { width: width.max(1), even }
    }

    #[inline]
    pub fn thin() -> Self {
        Self::new(1, EvenStroke::default())
    }

    #[inline]
    pub const fn width(self) -> u32 {
        self.width
    }

    /// Number of samples emitted per walked pixel.
    #[inline]
    pub fn block_len(self) -> usize {
        let side = self.block_side() as usize;
        side * side
    }

    fn block_side(self) -> u32 {
        match (self.width, self.even) {
            (1, _) => 1,
            (w, EvenStroke::SymmetricBlock) if w % 2 == 0 => w,
            (w, _) => (w / 2) * 2 + 1,
        }
    }

    /// Appends the samples covering `center` at this width.
    pub fn expand_into(self, center: Point, out: &mut Vec<RasterPoint>) {
        let w = self.width as i32;
        if w == 1 {
            out.push(RasterPoint::from(center));
            return;
        }

        let half = w / 2;
        let even = w % 2 == 0;

        let (lo, hi, shifted) = match (even, self.even) {
            (false, _) => (-half, half, false),
            (true, EvenStroke::HalfPixelShift) => (-half, half, true),
            (true, EvenStroke::SymmetricBlock) => (-half, half - 1, false),
        };

        for dx in lo..=hi {
            for dy in lo..=hi {
                let (x, y) = (center.x + dx, center.y + dy);
                out.push(if shifted {
                    RasterPoint::half(x, y)
                } else {
                    RasterPoint::whole(x, y)
                });
            }
        }
    }
}

impl Default for Stroke {
    fn default() -> Self {
        Self::thin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expand(width: u32, even: EvenStroke) -> Vec<RasterPoint> {
        let mut out = Vec::new();
        Stroke::new(width, even).expand_into(Point::new(10, 10), &mut out);
        out
    }

    #[test]
    fn width_one_is_the_pixel_itself() {
        assert_eq!(expand(1, EvenStroke::HalfPixelShift), vec![RasterPoint::whole(10, 10)]);
    }

    #[test]
    fn zero_width_is_clamped() {
        assert_eq!(Stroke::new(0, EvenStroke::default()).width(), 1);
    }

    #[test]
    fn odd_width_is_centered_square() {
        let pts = expand(3, EvenStroke::HalfPixelShift);
        assert_eq!(pts.len(), 9);
        assert!(pts.iter().all(|p| !p.half_offset));
        assert!(pts.contains(&RasterPoint::whole(9, 9)));
        assert!(pts.contains(&RasterPoint::whole(11, 11)));
        assert!(!pts.contains(&RasterPoint::whole(12, 10)));
    }

    #[test]
    fn even_width_shifts_by_half_pixel() {
        let pts = expand(2, EvenStroke::HalfPixelShift);
        // Offsets -1..=1 on both axes.
        assert_eq!(pts.len(), 9);
        assert!(pts.iter().all(|p| p.half_offset));
        assert_eq!(pts[0].position(), (9.5, 9.5));
        assert_eq!(pts[8].position(), (11.5, 11.5));
        assert_eq!(Stroke::new(2, EvenStroke::HalfPixelShift).block_len(), 9);
    }

    #[test]
    fn symmetric_block_is_exact_square() {
        let pts = expand(4, EvenStroke::SymmetricBlock);
        assert_eq!(pts.len(), 16);
        assert!(pts.iter().all(|p| !p.half_offset));
        assert!(pts.contains(&RasterPoint::whole(8, 8)));
        assert!(pts.contains(&RasterPoint::whole(11, 11)));
        assert!(!pts.contains(&RasterPoint::whole(12, 12)));
        assert_eq!(Stroke::new(4, EvenStroke::SymmetricBlock).block_len(), 16);
    }

    #[test]
    fn symmetric_block_leaves_odd_widths_alone() {
        assert_eq!(expand(5, EvenStroke::SymmetricBlock), expand(5, EvenStroke::HalfPixelShift));
    }
}
