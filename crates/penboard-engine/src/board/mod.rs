//! Interactive drawing board.
//!
//! Responsibilities:
//! - decode key presses into commands (`Command::from_key`)
//! - gate clicks and digits by the active function
//! - accumulate control points and commit shapes at the mode's click count
//! - own the shape store and the global circle radius
//! - emit point batches to any `render::Renderer`
//!
//! The board is a plain value. It does no I/O and can be driven entirely
//! from tests.

mod command;
mod config;
mod error;
mod state;
mod status;

pub use command::{Command, Function, Outcome};
pub use config::{BoardConfig, RadiusBounds, Retention};
pub use error::BoardError;
pub use state::Board;
pub use status::Indicator;
