use std::fmt;

use crate::scene::PrimitiveKind;

/// What digit keys and clicks currently do.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum Function {
    /// Clicks place control points.
    #[default]
    Draw,
    /// Digits select a palette entry.
    Color,
    /// Digits select a stroke width.
    Thickness,
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Function::Draw => "draw",
            Function::Color => "color",
            Function::Thickness => "thickness",
        })
    }
}

/// Discrete board command decoded from a key.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Command {
    SelectMode(PrimitiveKind),
    Activate(Function),
    /// `0..=9`, meaning depends on the active function.
    Digit(u8),
    Clear,
}

impl Command {
    /// Decodes a key character. Case-insensitive; unknown keys yield `None`.
    ///
    /// | key | command |
    /// |-----|---------|
    /// | `r` | line mode |
    /// | `t` | triangle mode |
    /// | `k` | color function |
    /// | `e` | thickness function |
    /// | `d` | draw function |
    /// | `c` | clear |
    /// | `0`–`9` | digit |
    pub fn from_key(code: char) -> Option<Self> {
        if let Some(d) = code.to_digit(10) {
            return Some(Command::Digit(d as u8));
        }
        let cmd = match code.to_ascii_lowercase() {
            'r' => Command::SelectMode(PrimitiveKind::Line),
            't' => Command::SelectMode(PrimitiveKind::Triangle),
            'k' => Command::Activate(Function::Color),
            'e' => Command::Activate(Function::Thickness),
            'd' => Command::Activate(Function::Draw),
            'c' => Command::Clear,
            _ => return None,
        };
        Some(cmd)
    }
}

/// Result of feeding one input to the board.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Outcome {
    /// Input had no effect.
    Ignored,
    /// State changed, the picture did not.
    Updated,
    /// The picture changed; the host should repaint.
    Redraw,
}

impl Outcome {
    #[inline]
    pub fn needs_redraw(self) -> bool {
        self == Outcome::Redraw
    }

    /// The stronger of two outcomes.
    #[inline]
    pub fn max(self, other: Outcome) -> Outcome {
        use Outcome::*;
        match (self, other) {
            (Redraw, _) | (_, Redraw) => Redraw,
            (Updated, _) | (_, Updated) => Updated,
            _ => Ignored,
        }
    }
}
