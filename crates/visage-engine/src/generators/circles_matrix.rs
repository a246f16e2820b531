//! Matrix-of-circles pattern.
//!
//! A square grid of filled circles. The grid dimension comes from the
//! first-name length; spacing grows geometrically per row, fanning the
//! lower rows out past the edge. Single-word names get one fixed color
//! for every cell.

use crate::coords::Vec2;
use crate::fingerprint::Fingerprint;
use crate::generators::clamp_count;
use crate::identity::NameDecomposition;
use crate::palette;
use crate::raster::RasterSurface;

/// Per-row spacing multiplier.
const ROW_GROWTH: f32 = 1.1;

pub(crate) fn generate(
    surface: &mut RasterSurface,
    fp: &Fingerprint,
    name: &NameDecomposition,
) {
    let n = clamp_count(name.first_word_len(), 3, 10);
    let side = surface.size() as f32;
    let single = name.is_single_word();
    let fixed = palette::color_for_char(name.initial());

    let mut cur = fp.cursor();
    let mut spacing = side / n as f32;
    let mut y = spacing * 0.5;

    for row in 0..n {
        for col in 0..n {
            let b = cur.next_byte();
            let x = spacing * (col as f32 + 0.5);
            // Cell-parity radius alternation keeps neighbors distinct.
            let radius = if (row + col) % 2 == 0 { spacing * 0.45 } else { spacing * 0.3 };
            let color = if single {
                fixed
            } else {
                let i1 = cur.next_byte() as usize;
                let i2 = cur.next_byte() as usize;
                palette::derived_color(b as char, i1, i2)
            };
            surface.fill_circle(Vec2::new(x, y), radius, color);
        }
        spacing *= ROW_GROWTH;
        y += spacing;
    }
}
