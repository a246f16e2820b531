//! Plates-layering pattern.
//!
//! Concentric material layers: large shapes stacked center-out with a
//! geometric radius falloff, alternating rounded plates and discs, each
//! jittered slightly and dropped with a soft shadow so the stack reads
//! as depth.

use crate::coords::Vec2;
use crate::fingerprint::Fingerprint;
use crate::generators::{clamp_count, shadow_for_mode};
use crate::identity::NameDecomposition;
use crate::palette;
use crate::raster::RasterSurface;

/// Radius falloff between consecutive plates.
const FALLOFF: f32 = 0.78;

pub(crate) fn generate(
    surface: &mut RasterSurface,
    fp: &Fingerprint,
    name: &NameDecomposition,
) {
    let layers = clamp_count(name.word_count() + 2, 3, 6);
    let side = surface.size() as f32;
    let center = Vec2::new(side * 0.5, side * 0.5);

    let mut cur = fp.cursor();
    let mut radius = side * 0.48;

    for i in 0..layers {
        let b = cur.next_byte();
        let b2 = cur.next_byte();
        let jitter = Vec2::new((b % 5) as f32 - 2.0, (b2 % 5) as f32 - 2.0) * (side / 64.0);
        let pos = center + jitter;
        let paint = shadow_for_mode(b % 6, side);
        let color = palette::derived_color(b as char, b2 as usize, i as usize);

        if i % 2 == 0 {
            surface.fill_rect_with(&paint, pos, Vec2::new(radius, radius), color);
            // Rounded inner face, slightly darker, so the plate edge reads.
            surface.fill_rounded_rect(
                pos,
                Vec2::new(radius * 0.9, radius * 0.9),
                radius * 0.25,
                color.darkened(0.88),
            );
        } else {
            surface.fill_circle_with(&paint, pos, radius, color);
        }

        radius *= FALLOFF;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fingerprint::fingerprint;
    use crate::identity::IdentityRecord;

    #[test]
    fn center_is_covered() {
        let fp = fingerprint(&IdentityRecord::new("Stack Of Plates")).unwrap();
        let name = NameDecomposition::from_name("Stack Of Plates");
        let mut s = RasterSurface::new(140);
        generate(&mut s, &fp, &name);
        // The largest plate spans nearly the whole surface, so the center
        // is always painted.
        assert_ne!(s.pixel(70, 70).a, 0);
    }

    #[test]
    fn layer_count_is_clamped() {
        let many = "a b c d e f g h i j";
        assert_eq!(clamp_count(NameDecomposition::from_name(many).word_count() + 2, 3, 6), 6);
        assert_eq!(clamp_count(NameDecomposition::from_name("solo").word_count() + 2, 3, 6), 3);
    }
}
