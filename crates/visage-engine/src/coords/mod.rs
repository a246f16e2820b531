//! Geometry value types.
//!
//! Pixel-space coordinates with the origin at the top-left corner and
//! `y` growing downward, matching the raster buffer layout.

mod vec2;

pub use vec2::Vec2;
