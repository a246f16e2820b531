//! Beam ornament.
//!
//! A fan of line segments growing out of the center. One fingerprint
//! byte picks among four beam modes: chained (each end becomes the next
//! start), recentered, perturbed-center, and chained with additive
//! blending. Length and angle grow by fixed per-step deltas.

use crate::coords::Vec2;
use crate::fingerprint::Fingerprint;
use crate::identity::NameDecomposition;
use crate::palette;
use crate::raster::RasterSurface;

/// Per-step angle increment, radians.
const ANGLE_STEP: f32 = 0.35;

pub(crate) fn generate(
    surface: &mut RasterSurface,
    fp: &Fingerprint,
    _name: &NameDecomposition,
) {
    let side = surface.size() as f32;
    let center = Vec2::new(side * 0.5, side * 0.5);

    let mut cur = fp.cursor();
    let mode = cur.next_byte() % 4;
    let density = 24 + (cur.next_byte() % 24) as u32;
    let mut angle = (cur.next_byte() % 32) as f32 * (core::f32::consts::TAU / 32.0);
    let color_byte = cur.next_byte();
    let color = palette::derived_color(color_byte as char, mode as usize, density as usize)
        .with_alpha(0.6);

    let additive = mode == 3;
    let width = (side / 240.0).max(1.0);
    let mut origin = center;
    let mut from = center;
    let mut length = side / 16.0;

    for _ in 0..density {
        let to = from + Vec2::from_angle(angle) * length;
        surface.draw_line(from, to, width, color, additive);
        angle += ANGLE_STEP;
        length += side / 90.0;
        from = match mode {
            0 | 3 => to,
            1 => center,
            _ => {
                origin = origin + Vec2::from_angle(angle * 2.0) * (side / 120.0);
                origin
            }
        };
    }
}
