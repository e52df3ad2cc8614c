//! Coordinate types and the device ↔ raster ↔ normalized mapping.
//!
//! Raster space:
//! - integer pixels
//! - origin top-left, aligned with device pixels
//! - +X right, +Y down
//!
//! Renderers receive normalized positions (centre origin, +Y up).

mod point;
mod surface;

pub use point::Point;
pub use surface::{from_normalized, to_normalized, to_normalized_f64, to_raster_space, Surface};
