use std::fmt;

use super::Rgb;

/// Number of palette entries; valid indices are `0..PALETTE_LEN`.
pub const PALETTE_LEN: usize = 10;

/// Fixed drawing palette, selected with the digit keys.
pub const PALETTE: [Rgb; PALETTE_LEN] = [
    Rgb::new(0.0, 0.0, 0.0), // black
    Rgb::new(0.0, 0.0, 1.0), // blue
    Rgb::new(1.0, 0.0, 0.0), // red
    Rgb::new(0.0, 1.0, 0.0), // green
    Rgb::new(1.0, 1.0, 0.0), // yellow
    Rgb::new(1.0, 0.0, 1.0), // magenta
    Rgb::new(0.0, 1.0, 1.0), // cyan
    Rgb::new(1.0, 0.5, 0.0), // orange
    Rgb::new(0.5, 0.0, 0.5), // purple
    Rgb::new(0.6, 0.3, 0.1), // brown
];

const NAMES: [&str; PALETTE_LEN] = [
    "black", "blue", "red", "green", "yellow", "magenta", "cyan", "orange", "purple", "brown",
];

/// Index into [`PALETTE`]. Always in range by construction.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct ColorIndex(u8);

impl ColorIndex {
    pub const BLACK: ColorIndex = ColorIndex(0);
    pub const BLUE: ColorIndex = ColorIndex(1);

    /// Returns `None` when `index` is outside the palette.
    #[inline]
    pub const fn new(index: u8) -> Option<Self> {
        if (index as usize) < PALETTE_LEN {
            Some(Self(index))
        } else {
            None
        }
    }

    /// Palette entry for an ASCII digit key.
    #[inline]
    pub fn from_digit(c: char) -> Option<Self> {
        c.to_digit(10).and_then(|d| Self::new(d as u8))
    }

    #[inline]
    pub const fn get(self) -> u8 {
        self.0
    }

    #[inline]
    pub const fn rgb(self) -> Rgb {
        PALETTE[self.0 as usize]
    }

    #[inline]
    pub const fn name(self) -> &'static str {
        NAMES[self.0 as usize]
    }
}

impl Default for ColorIndex {
    fn default() -> Self {
        Self::BLUE
    }
}

impl fmt::Display for ColorIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_blue() {
        let c = ColorIndex::default();
        assert_eq!(c.get(), 1);
        assert_eq!(c.name(), "blue");
        assert_eq!(c.rgb(), Rgb::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn rejects_out_of_range() {
        assert!(ColorIndex::new(9).is_some());
        assert!(ColorIndex::new(10).is_none());
        assert!(ColorIndex::from_digit('x').is_none());
    }

    #[test]
    fn digit_keys_cover_palette() {
        for (i, c) in ('0'..='9').enumerate() {
            let idx = ColorIndex::from_digit(c).unwrap();
            assert_eq!(idx.get() as usize, i);
            assert_eq!(idx.rgb(), PALETTE[i]);
        }
        assert_eq!(ColorIndex::from_digit('9').unwrap().name(), "brown");
    }

    #[test]
    fn palette_channels_are_normalized() {
        for c in PALETTE {
            assert_eq!(c, c.clamped());
        }
    }
}
