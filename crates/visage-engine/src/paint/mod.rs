//! Paint model: colors and per-draw paint state.
//!
//! Colors are straight-alpha RGBA. The raster surface composites with a
//! plain src-over loop, so channels are never stored premultiplied.

mod color;
mod state;

pub use color::Color;
pub use state::{PaintState, Shadow};
