//! Wandering-shapes pattern.
//!
//! A random walk of shapes starting at the center. Each step reads two
//! fingerprint bytes for the displacement, alternates circle vs regular
//! polygon on byte parity, and shrinks the radius geometrically with an
//! occasional reset. Shadow parameters come from the shared mod-6 table.

use crate::coords::Vec2;
use crate::fingerprint::Fingerprint;
use crate::generators::{clamp_count, shadow_for_mode};
use crate::identity::NameDecomposition;
use crate::palette;
use crate::raster::RasterSurface;

/// Radius shrink per step.
const DECAY: f32 = 0.6;

pub(crate) fn generate(
    surface: &mut RasterSurface,
    fp: &Fingerprint,
    name: &NameDecomposition,
) {
    let steps = clamp_count(name.letter_count(), 3, 10);
    let edges = clamp_count(name.first_word_len(), 3, 10);
    let side = surface.size() as f32;

    let mut cur = fp.cursor();
    let mut pos = Vec2::new(side * 0.5, side * 0.5);
    let mut radius = side / 3.0;

    for step in 0..steps {
        let b = cur.next_byte();
        let b2 = cur.next_byte();
        let dx = (b % 7) as f32 - 3.0;
        let dy = (b2 % 7) as f32 - 3.0;
        pos = pos + Vec2::new(dx, dy) * (side / 24.0);

        let paint = shadow_for_mode(b % 6, side);
        let color = palette::derived_color(b2 as char, b as usize, step as usize);
        let angle = (b2 % 12) as f32 * (core::f32::consts::TAU / 12.0);

        if b % 2 == 0 {
            surface.fill_circle_with(&paint, pos, radius, color);
        } else {
            surface.fill_polygon_with(&paint, pos, radius, edges, angle, color);
        }

        radius *= DECAY;
        if radius < side / 20.0 {
            radius = side / 3.0;
        }
    }
}
