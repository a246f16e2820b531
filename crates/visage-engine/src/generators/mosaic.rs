//! Pixel-mosaic pattern.
//!
//! A `k × k` grid of small squares. Each tile is drawn only when the
//! covering fingerprint byte has odd bit parity; tile color alternates
//! by row parity; the whole grid can be mirrored on either axis based on
//! two more fingerprint bytes.

use crate::coords::Vec2;
use crate::fingerprint::Fingerprint;
use crate::generators::clamp_count;
use crate::identity::NameDecomposition;
use crate::palette;
use crate::raster::RasterSurface;

/// Grid dimension from one fingerprint byte, clamped to `[15, 25]`.
pub(crate) fn grid_dim(byte: u8) -> u32 {
    clamp_count(15 + (byte % 11) as usize, 15, 25)
}

pub(crate) fn generate(
    surface: &mut RasterSurface,
    fp: &Fingerprint,
    _name: &NameDecomposition,
) {
    let k = grid_dim(fp.byte(0));
    let flip_x = fp.byte(1).count_ones() % 2 == 1;
    let flip_y = fp.byte(2).count_ones() % 2 == 1;
    let color_a = palette::color_for_char(fp.byte(4) as char);
    let color_b = palette::color_for_char(fp.byte(5) as char).darkened(0.8);

    let side = surface.size() as f32;
    let tile = side / k as f32;

    for row in 0..k {
        for col in 0..k {
            let b = fp.byte((row * k + col) as usize);
            if b.count_ones() % 2 == 0 {
                continue;
            }
            let mut x = tile * (col as f32 + 0.5);
            let mut y = tile * (row as f32 + 0.5);
            if flip_x {
                x = side - x;
            }
            if flip_y {
                y = side - y;
            }
            let color = if row % 2 == 0 { color_a } else { color_b };
            surface.fill_rect(Vec2::new(x, y), Vec2::new(tile * 0.46, tile * 0.46), color);
        }
    }
}
