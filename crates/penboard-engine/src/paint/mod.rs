//! Colors shared between the board and renderers.
//!
//! Scope:
//! - opaque RGB color representation
//! - the fixed 10-entry drawing palette
//!
//! Geometry types remain in `coords`.

pub mod color;
pub mod palette;

pub use color::Rgb;
pub use palette::{ColorIndex, PALETTE, PALETTE_LEN};
