//! Matrix-of-squares pattern.
//!
//! A square grid gated per cell by the bit parity of the covering
//! fingerprint byte (odd parity draws). Every third column gets a
//! narrow accent square in a high-contrast color on top.

use crate::coords::Vec2;
use crate::fingerprint::Fingerprint;
use crate::generators::clamp_count;
use crate::identity::NameDecomposition;
use crate::palette;
use crate::raster::RasterSurface;

pub(crate) fn generate(
    surface: &mut RasterSurface,
    fp: &Fingerprint,
    name: &NameDecomposition,
) {
    let n = clamp_count(name.first_word_len(), 3, 10);
    let side = surface.size() as f32;
    let cell = side / n as f32;
    let accent = palette::harsh_color_for_char(name.initial()).with_alpha(0.8);

    let mut cur = fp.cursor();
    for row in 0..n {
        for col in 0..n {
            let b = cur.next_byte();
            if b.count_ones() % 2 == 0 {
                continue;
            }
            let center = Vec2::new(cell * (col as f32 + 0.5), cell * (row as f32 + 0.5));
            let color = palette::derived_color(b as char, row as usize, col as usize);
            surface.fill_rect(center, Vec2::new(cell * 0.42, cell * 0.42), color);
            if col % 3 == 0 {
                surface.fill_rect(center, Vec2::new(cell * 0.16, cell * 0.42), accent);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fingerprint::Fingerprint;

    #[test]
    fn even_parity_bytes_draw_nothing() {
        // A digest of all '3' (0x33, two set bits → even parity) gates
        // every cell off.
        let fp = Fingerprint::from_digest(&"3".repeat(32), "x");
        let name = NameDecomposition::from_name("Even Gate");
        let mut s = RasterSurface::new(120);
        generate(&mut s, &fp, &name);
        assert!(s.pixels().iter().all(|p| p.a == 0));
    }

    #[test]
    fn odd_parity_bytes_draw() {
        // '1' is 0x31, three set bits → odd parity, every cell drawn.
        let fp = Fingerprint::from_digest(&"1".repeat(32), "x");
        let name = NameDecomposition::from_name("Odd Gate");
        let mut s = RasterSurface::new(120);
        generate(&mut s, &fp, &name);
        assert!(s.pixels().iter().any(|p| p.a != 0));
    }
}
