use bytemuck::{Pod, Zeroable};

use crate::paint::Color;
use crate::texture::GrainTexture;

/// One 8-bit straight-alpha RGBA pixel.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Pod, Zeroable)]
pub struct Rgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8 {
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    #[inline]
    pub fn from_color(color: Color) -> Self {
        let [r, g, b, a] = color.to_rgba8();
        Self { r, g, b, a }
    }
}

/// Owned square pixel buffer plus the blending entry points the drawing
/// primitives build on.
///
/// Surfaces are always constructed with a positive side length by the
/// composer; a zero side is a programming error, not a recoverable
/// condition.
pub struct RasterSurface {
    size: u32,
    pixels: Vec<Rgba8>,
}

impl RasterSurface {
    /// Allocates a transparent-black `size` × `size` buffer.
    pub fn new(size: u32) -> Self {
        assert!(size > 0, "raster surface side must be positive");
        Self {
            size,
            pixels: vec![Rgba8::default(); (size as usize) * (size as usize)],
        }
    }

    /// Side length in pixels.
    #[inline]
    pub fn size(&self) -> u32 {
        self.size
    }

    #[inline]
    pub fn pixels(&self) -> &[Rgba8] {
        &self.pixels
    }

    /// Buffer as raw RGBA bytes (row-major), for encoding or hashing.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    /// Pixel at `(x, y)`. Out-of-bounds access is a test/caller bug.
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> Rgba8 {
        debug_assert!(x < self.size && y < self.size);
        self.pixels[(y * self.size + x) as usize]
    }

    /// Floods the whole buffer with `color` (no blending).
    pub fn fill(&mut self, color: Color) {
        let px = Rgba8::from_color(color);
        self.pixels.fill(px);
    }

    /// Src-over blend of `color` onto `(x, y)`; silently clips.
    #[inline]
    pub(crate) fn blend_pixel(&mut self, x: i64, y: i64, color: Color) {
        if x < 0 || y < 0 || x >= self.size as i64 || y >= self.size as i64 {
            return;
        }
        let idx = (y as u32 * self.size + x as u32) as usize;
        self.pixels[idx] = blend_over(self.pixels[idx], color);
    }

    /// Saturating additive blend of `color` onto `(x, y)`; silently clips.
    #[inline]
    pub(crate) fn blend_pixel_additive(&mut self, x: i64, y: i64, color: Color) {
        if x < 0 || y < 0 || x >= self.size as i64 || y >= self.size as i64 {
            return;
        }
        let idx = (y as u32 * self.size + x as u32) as usize;
        let dst = self.pixels[idx];
        let [r, g, b, _] = color.to_rgba8();
        let scale = color.a.clamp(0.0, 1.0);
        self.pixels[idx] = Rgba8::new(
            dst.r.saturating_add((r as f32 * scale) as u8),
            dst.g.saturating_add((g as f32 * scale) as u8),
            dst.b.saturating_add((b as f32 * scale) as u8),
            dst.a,
        );
    }

    /// Alpha-composites the grain pattern over the entire surface,
    /// tiling when the pattern is smaller than the buffer.
    pub fn overlay_texture(&mut self, grain: &GrainTexture) {
        for y in 0..self.size {
            for x in 0..self.size {
                let [r, g, b, a] = grain.sample(x, y);
                if a == 0 {
                    continue;
                }
                let src = Color::new(
                    r as f32 / 255.0,
                    g as f32 / 255.0,
                    b as f32 / 255.0,
                    a as f32 / 255.0,
                );
                self.blend_pixel(x as i64, y as i64, src);
            }
        }
    }
}

/// Straight-alpha src-over on 8-bit channels.
#[inline]
fn blend_over(dst: Rgba8, src: Color) -> Rgba8 {
    let sa = src.a.clamp(0.0, 1.0);
    if sa <= 0.0 {
        return dst;
    }
    if sa >= 1.0 {
        return Rgba8::from_color(src);
    }
    let inv = 1.0 - sa;
    let blend = |s: f32, d: u8| ((s * 255.0) * sa + d as f32 * inv + 0.5) as u8;
    let da = dst.a as f32 / 255.0;
    let out_a = sa + da * inv;
    Rgba8::new(
        blend(src.r.clamp(0.0, 1.0), dst.r),
        blend(src.g.clamp(0.0, 1.0), dst.g),
        blend(src.b.clamp(0.0, 1.0), dst.b),
        (out_a * 255.0 + 0.5) as u8,
    )
}
