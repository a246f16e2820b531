//! Spirograph ornament.
//!
//! Plots three hypotrochoid-like curves around the center, each with a
//! point offset derived from a distinct fingerprint byte, stroked in
//! three different colors. The angular step and revolution count are
//! fixed so the path sampling is identical across image sizes.

use crate::coords::Vec2;
use crate::fingerprint::Fingerprint;
use crate::identity::NameDecomposition;
use crate::palette;
use crate::raster::RasterSurface;

/// Angular step between samples.
const STEP: f32 = core::f32::consts::PI / 50.0;
/// Revolutions traced per curve.
const REVOLUTIONS: f32 = 4.0;
/// Fingerprint indices feeding the three point offsets.
const POINT_BYTES: [usize; 3] = [20, 23, 26];

pub(crate) fn generate(
    surface: &mut RasterSurface,
    fp: &Fingerprint,
    _name: &NameDecomposition,
) {
    let side = surface.size() as f32;
    let center = Vec2::new(side * 0.5, side * 0.5);
    let outer = side * 0.30;
    let radius_sum = outer * 0.55;
    let width = (side / 320.0).max(1.0);

    for (curve, &idx) in POINT_BYTES.iter().enumerate() {
        let b = fp.byte(idx);
        let point = side * 0.04 + (b % 16) as f32 * side / 160.0;
        let color = palette::derived_color(b as char, curve, b as usize).with_alpha(0.75);

        let mut prev: Option<Vec2> = None;
        let mut t = 0.0f32;
        while t < core::f32::consts::TAU * REVOLUTIONS {
            let swirl = radius_sum * t / outer;
            let pos = center
                + Vec2::new(
                    radius_sum * t.cos() + point * swirl.cos(),
                    radius_sum * t.sin() + point * swirl.sin(),
                );
            if let Some(p) = prev {
                surface.draw_line(p, pos, width, color, false);
            }
            prev = Some(pos);
            t += STEP;
        }
    }
}
