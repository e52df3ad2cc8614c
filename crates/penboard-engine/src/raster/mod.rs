//! Integer rasterization of board primitives.
//!
//! Responsibilities:
//! - Bresenham line walk with stroke expansion
//! - midpoint circle outline
//! - triangle outline composed from three lines
//!
//! All routines are pure: integer raster points in, sample lists out. Mapping
//! to normalized space happens at the render boundary.

mod sample;
mod stroke;

pub mod circle;
pub mod line;
pub mod triangle;

pub use circle::rasterize_circle;
pub use line::{rasterize_line, BresenhamLine};
pub use sample::{PointSet, RasterPoint};
pub use stroke::{EvenStroke, Stroke};
pub use triangle::rasterize_triangle;
