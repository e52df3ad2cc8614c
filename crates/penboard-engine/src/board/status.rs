use std::fmt;

use crate::paint::ColorIndex;
use crate::scene::PrimitiveKind;

use super::Function;

/// Snapshot of the board state for UI text (window title, status line).
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Indicator {
    pub mode: PrimitiveKind,
    pub function: Function,
    pub color: ColorIndex,
    pub thickness: u32,
    pub radius: u32,
    pub shapes: usize,
    pub pending: usize,
}

impl fmt::Display for Indicator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "mode: {} | function: {} | color: {} | ",
            self.mode, self.function, self.color
        )?;
        match self.mode {
            PrimitiveKind::Circle => write!(f, "radius: {}", self.radius)?,
            _ => write!(f, "thickness: {}", self.thickness)?,
        }
        write!(f, " | shapes: {}", self.shapes)?;
        if self.pending > 0 {
            write!(f, " | clicks: {}/{}", self.pending, self.mode.required_clicks())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn indicator(mode: PrimitiveKind, pending: usize) -> Indicator {
        Indicator {
            mode,
            function: Function::Draw,
            color: ColorIndex::BLUE,
            thickness: 3,
            radius: 50,
            shapes: 2,
            pending,
        }
    }

    #[test]
    fn outline_modes_show_thickness() {
        assert_eq!(
            indicator(PrimitiveKind::Triangle, 2).to_string(),
            "mode: triangle | function: draw | color: blue | thickness: 3 | shapes: 2 | clicks: 2/3"
        );
    }

    #[test]
    fn circle_mode_shows_radius() {
        assert_eq!(
            indicator(PrimitiveKind::Circle, 0).to_string(),
            "mode: circle | function: draw | color: blue | radius: 50 | shapes: 2"
        );
    }
}
