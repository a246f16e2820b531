//! Concentric-rings ornament.
//!
//! Stroked circles around the center, one pair of rings per word of the
//! name (clamped), colored from consecutive fingerprint bytes.

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
    let rings = clamp_count(name.word_count() * 2, 2, 8);
    let side = surface.size() as f32;
    let center = Vec2::new(side * 0.5, side * 0.5);
    let max_radius = side * 0.42;
    let width = (side / 160.0).max(1.0);

    let mut cur = fp.cursor();
    for i in 1..=rings {
        let b = cur.next_byte();
        let radius = max_radius * i as f32 / rings as f32;
        let color = palette::color_for_char(b as char).with_alpha(0.5);
        surface.stroke_circle(center, radius, width, color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fingerprint::fingerprint;
    use crate::identity::IdentityRecord;
    use crate::raster::Rgba8;

    #[test]
    fn ring_count_is_clamped() {
        assert_eq!(clamp_count(NameDecomposition::from_name("solo").word_count() * 2, 2, 8), 2);
        let many = "a b c d e f";
        assert_eq!(clamp_count(NameDecomposition::from_name(many).word_count() * 2, 2, 8), 8);
    }

    #[test]
    fn rings_leave_the_center_open() {
        let fp = fingerprint(&IdentityRecord::new("Ring Bearer")).unwrap();
        let name = NameDecomposition::from_name("Ring Bearer");
        let mut s = RasterSurface::new(150);
        generate(&mut s, &fp, &name);
        assert_eq!(s.pixel(75, 75), Rgba8::default());
        assert!(s.pixels().iter().any(|p| p.a != 0));
    }
}
