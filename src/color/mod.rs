//! Colors.
//!
//! - [`PALETTE`] - Compiled-in color table
//! - [`ColorRegistry`] - Palette plus per-session overlay

mod palette;
mod registry;

pub use palette::*;
pub use registry::*;
