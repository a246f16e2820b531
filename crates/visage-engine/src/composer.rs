//! Avatar composition pipeline.
//!
//! One-shot, stateless pipeline per call:
//! validate → fingerprint → background → main pattern → grain →
//! ornament → badge → glyph. Everything after validation is a pure
//! function of the fingerprint and record, so re-invoking with the same
//! inputs produces byte-identical output.

use crate::error::ComposeError;
use crate::fingerprint::fingerprint;
use crate::generators::{GeneratorKind, OrnamentKind};
use crate::identity::{IdentityRecord, NameDecomposition};
use crate::paint::Color;
use crate::palette;
use crate::raster::RasterSurface;
use crate::texture::GrainTexture;

/// Smallest supported image side length, pixels.
pub const MIN_IMAGE_SIZE: u32 = 100;

/// Fingerprint index selecting the main pattern generator.
const MAIN_PATTERN_BYTE: usize = 3;
/// Fingerprint index controlling badge alpha.
const BADGE_ALPHA_BYTE: usize = 7;
/// Fingerprint index gating ornament presence.
const ORNAMENT_GATE_BYTE: usize = 11;
/// Fingerprint index selecting the ornament kind.
const ORNAMENT_KIND_BYTE: usize = 12;

/// Read-only resources loaded once by the host and shared across calls.
#[derive(Debug, Clone, Copy)]
pub struct Resources<'a> {
    pub grain: &'a GrainTexture,
}

/// Synthesizes an avatar for `record` at `image_size` × `image_size`.
///
/// Fails before any allocation on a blank name (`InvalidInput`) or an
/// image side below [`MIN_IMAGE_SIZE`] (`SizeTooSmall`); after that,
/// generation cannot fail.
pub fn compose(
    record: &IdentityRecord,
    image_size: u32,
    resources: &Resources<'_>,
) -> Result<RasterSurface, ComposeError> {
    record.validate()?;
    if image_size < MIN_IMAGE_SIZE {
        return Err(ComposeError::SizeTooSmall { requested: image_size, min: MIN_IMAGE_SIZE });
    }

    let fp = fingerprint(record)?;
    let name = NameDecomposition::from_name(&record.full_name);
    let mut surface = RasterSurface::new(image_size);

    let background = palette::color_for_char(name.initial());
    surface.fill(background);

    GeneratorKind::select(fp.byte(MAIN_PATTERN_BYTE)).generate(&mut surface, &fp, &name);

    surface.overlay_texture(resources.grain);

    let gate = fp.byte(ORNAMENT_GATE_BYTE);
    if gate % 3 != 0 {
        OrnamentKind::select(fp.byte(ORNAMENT_KIND_BYTE)).generate(&mut surface, &fp, &name);
    }

    draw_badge(&mut surface, &fp, &name, background);

    log::debug!(
        "composed {}x{} avatar for {:?}",
        image_size,
        image_size,
        record.full_name
    );
    Ok(surface)
}

/// Centered circular badge in the background color, then the uppercase
/// initial as a white glyph. The badge keeps the glyph legible over busy
/// patterns; its alpha varies per identity.
fn draw_badge(
    surface: &mut RasterSurface,
    fp: &crate::fingerprint::Fingerprint,
    name: &NameDecomposition,
    background: Color,
) {
    let side = surface.size() as f32;
    let center = crate::coords::Vec2::new(side * 0.5, side * 0.5);
    let radius = side * 0.5 * 0.8;
    // 0.55..=0.85 in steps of 0.01.
    let alpha = 0.55 + (fp.byte(BADGE_ALPHA_BYTE) % 31) as f32 / 100.0;
    surface.fill_circle(center, radius, background.with_alpha(alpha));
    surface.draw_centered_glyph(&name.initial().to_string(), Color::WHITE);
}
