//! Committed shapes.
//!
//! Responsibilities:
//! - hold each primitive's control geometry, stroke, color and cached samples
//! - keep shapes in commit order (later paints over earlier)
//! - re-rasterize circles in place when the global radius changes

mod shape;
mod store;

pub use shape::{Geometry, PrimitiveKind, Shape};
pub use store::ShapeStore;
