//! Board output.
//!
//! Two layers:
//! - `Renderer`/`PointBatch`: the renderer-agnostic contract the board draws into
//! - `PointList` + `PointRenderer`: a CPU recording of a redraw and the wgpu
//!   instanced-quad renderer that puts it on screen
//!
//! Convention:
//! - batch positions are normalized (centre origin, +Y up)
//! - point sizes are in device pixels; the vertex shader converts them to NDC
//!   using a viewport uniform

mod batch;
mod ctx;
mod list;
mod points;

pub use batch::{PointBatch, Renderer};
pub use ctx::{RenderCtx, RenderTarget};
pub use list::{PointInstance, PointList};
pub use points::PointRenderer;
