//! Procedural shape generators.
//!
//! Each generator consumes the fingerprint plus the name decomposition
//! and issues draw calls against a surface. Generators are purely
//! additive (never clear the surface) and fully deterministic: every
//! decision is some fingerprint byte reduced modulo a small integer, and
//! every derived count is clamped before use so generation cannot fail.
//!
//! Extending the set:
//! - add a module with a `generate` function
//! - add a variant to [`GeneratorKind`] or [`OrnamentKind`]
//! - extend the `ALL` table and the dispatch match

mod beams;
mod circles_matrix;
mod mosaic;
mod plates;
mod rings;
mod spirograph;
mod squares_matrix;
mod wandering;

use crate::coords::Vec2;
use crate::fingerprint::Fingerprint;
use crate::identity::NameDecomposition;
use crate::paint::{Color, PaintState, Shadow};
use crate::raster::RasterSurface;

/// Main pattern generators. Exactly one fills most of the canvas.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum GeneratorKind {
    CirclesMatrix,
    SquaresMatrix,
    Wandering,
    Plates,
    Mosaic,
}

impl GeneratorKind {
    pub const ALL: [GeneratorKind; 5] = [
        GeneratorKind::CirclesMatrix,
        GeneratorKind::SquaresMatrix,
        GeneratorKind::Wandering,
        GeneratorKind::Plates,
        GeneratorKind::Mosaic,
    ];

    /// Selects a generator from one fingerprint byte.
    #[inline]
    pub fn select(byte: u8) -> Self {
        Self::ALL[byte as usize % Self::ALL.len()]
    }

    pub fn generate(
        self,
        surface: &mut RasterSurface,
        fp: &Fingerprint,
        name: &NameDecomposition,
    ) {
        log::debug!("main pattern: {self:?}");
        match self {
            GeneratorKind::CirclesMatrix => circles_matrix::generate(surface, fp, name),
            GeneratorKind::SquaresMatrix => squares_matrix::generate(surface, fp, name),
            GeneratorKind::Wandering => wandering::generate(surface, fp, name),
            GeneratorKind::Plates => plates::generate(surface, fp, name),
            GeneratorKind::Mosaic => mosaic::generate(surface, fp, name),
        }
    }
}

/// Secondary decorative generators layered after the grain overlay.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum OrnamentKind {
    Beams,
    Spirograph,
    ConcentricRings,
}

impl OrnamentKind {
    pub const ALL: [OrnamentKind; 3] = [
        OrnamentKind::Beams,
        OrnamentKind::Spirograph,
        OrnamentKind::ConcentricRings,
    ];

    /// Selects an ornament from one fingerprint byte.
    #[inline]
    pub fn select(byte: u8) -> Self {
        Self::ALL[byte as usize % Self::ALL.len()]
    }

    pub fn generate(
        self,
        surface: &mut RasterSurface,
        fp: &Fingerprint,
        name: &NameDecomposition,
    ) {
        log::debug!("ornament: {self:?}");
        match self {
            OrnamentKind::Beams => beams::generate(surface, fp, name),
            OrnamentKind::Spirograph => spirograph::generate(surface, fp, name),
            OrnamentKind::ConcentricRings => rings::generate(surface, fp, name),
        }
    }
}

/// Clamps a name-derived count into the documented range.
#[inline]
pub(crate) fn clamp_count(value: usize, lo: u32, hi: u32) -> u32 {
    (value as u32).clamp(lo, hi)
}

/// Shadow policy table shared by the layering generators.
///
/// Mode 0 is shadowless; the rest vary offset direction and blur. The
/// mode comes from a fingerprint byte modulo 6.
pub(crate) fn shadow_for_mode(mode: u8, side: f32) -> PaintState {
    let unit = side / 96.0;
    let dark = Color::BLACK.with_alpha(0.45);
    match mode % 6 {
        0 => PaintState::plain(),
        1 => PaintState::shadowed(Shadow::new(Vec2::new(unit, unit), unit, dark)),
        2 => PaintState::shadowed(Shadow::new(Vec2::new(-unit, unit), unit * 2.0, dark)),
        3 => PaintState::shadowed(Shadow::new(Vec2::new(unit * 2.0, unit * 2.0), unit, dark)),
        4 => PaintState::shadowed(Shadow::new(Vec2::new(0.0, unit * 2.0), unit * 3.0, dark)),
        _ => PaintState::shadowed(Shadow::new(Vec2::new(unit, 0.0), unit * 2.0, dark)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fingerprint::fingerprint;
    use crate::identity::IdentityRecord;

    fn fixture(name: &str) -> (Fingerprint, NameDecomposition) {
        let fp = fingerprint(&IdentityRecord::new(name)).unwrap();
        (fp, NameDecomposition::from_name(name))
    }

    // ── selection ─────────────────────────────────────────────────────────

    #[test]
    fn selection_covers_all_generators() {
        let mut seen = Vec::new();
        for b in 0u8..=255 {
            let kind = GeneratorKind::select(b);
            if !seen.contains(&kind) {
                seen.push(kind);
            }
        }
        assert_eq!(seen.len(), GeneratorKind::ALL.len());
    }

    #[test]
    fn selection_is_modular() {
        assert_eq!(GeneratorKind::select(0), GeneratorKind::select(5));
        assert_eq!(OrnamentKind::select(1), OrnamentKind::select(4));
    }

    // ── uniform contract ──────────────────────────────────────────────────

    #[test]
    fn every_generator_is_deterministic() {
        let (fp, name) = fixture("Ada Lovelace");
        for kind in GeneratorKind::ALL {
            let mut a = RasterSurface::new(120);
            let mut b = RasterSurface::new(120);
            kind.generate(&mut a, &fp, &name);
            kind.generate(&mut b, &fp, &name);
            assert_eq!(a.as_bytes(), b.as_bytes(), "{kind:?} not deterministic");
        }
        for kind in OrnamentKind::ALL {
            let mut a = RasterSurface::new(120);
            let mut b = RasterSurface::new(120);
            kind.generate(&mut a, &fp, &name);
            kind.generate(&mut b, &fp, &name);
            assert_eq!(a.as_bytes(), b.as_bytes(), "{kind:?} not deterministic");
        }
    }

    #[test]
    fn every_generator_draws_something() {
        // Long first word so parity-gated grids have dozens of cells.
        let (fp, name) = fixture("Wolfgang Amadeus Mozart");
        for kind in GeneratorKind::ALL {
            let mut s = RasterSurface::new(120);
            kind.generate(&mut s, &fp, &name);
            let drawn = s.pixels().iter().any(|p| p.a != 0);
            assert!(drawn, "{kind:?} drew nothing");
        }
    }

    #[test]
    fn extreme_word_lengths_do_not_panic() {
        // First word of length 1 and of length 50: clamped inputs
        // everywhere counts are derived from the name.
        let names = ["I".to_string(), "x".repeat(50), format!("{} jr", "y".repeat(50))];
        for name in &names {
            let (fp, decomp) = fixture(name);
            for kind in GeneratorKind::ALL {
                let mut s = RasterSurface::new(110);
                kind.generate(&mut s, &fp, &decomp);
            }
            for kind in OrnamentKind::ALL {
                let mut s = RasterSurface::new(110);
                kind.generate(&mut s, &fp, &decomp);
            }
        }
    }

    // ── clamp helper ──────────────────────────────────────────────────────

    #[test]
    fn clamp_count_bounds() {
        assert_eq!(clamp_count(1, 3, 10), 3);
        assert_eq!(clamp_count(7, 3, 10), 7);
        assert_eq!(clamp_count(50, 3, 10), 10);
    }

    // ── shadow table ──────────────────────────────────────────────────────

    #[test]
    fn shadow_mode_zero_is_plain() {
        assert_eq!(shadow_for_mode(0, 480.0), PaintState::plain());
        assert_eq!(shadow_for_mode(6, 480.0), PaintState::plain());
        assert_ne!(shadow_for_mode(1, 480.0), PaintState::plain());
    }
}
