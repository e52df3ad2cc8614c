//! penboard engine crate.
//!
//! Pure drawing core (`coords`, `raster`, `scene`, `board`) plus the
//! platform + GPU runtime pieces used by the studio binary.

pub mod coords;
pub mod paint;
pub mod raster;
pub mod scene;
pub mod board;

pub mod logging;
pub mod input;
pub mod render;
pub mod device;
pub mod window;
pub mod core;
