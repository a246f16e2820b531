//! CPU raster surface and drawing primitives.
//!
//! One surface is allocated per compose call, mutated in place by the
//! primitives, and handed back to the caller. Coverage is binary (no
//! anti-aliasing); blending is src-over in straight alpha, with an
//! additive mode for beam lines.

mod glyph;
mod primitives;
mod surface;

pub use surface::{RasterSurface, Rgba8};
