//! Grain texture resource.
//!
//! The grain overlay is host-provided and immutable: loaded (or
//! synthesized) once, then passed by reference into every compose call.
//! Nothing here is cached globally.

/// Immutable RGBA grain pattern, tiled over the surface by
/// [`crate::raster::RasterSurface::overlay_texture`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrainTexture {
    width: u32,
    height: u32,
    pixels: Vec<[u8; 4]>,
}

impl GrainTexture {
    /// Wraps raw RGBA bytes (row-major, 4 bytes per pixel).
    ///
    /// Dimension/length mismatch is a programming error in the host.
    pub fn from_rgba(width: u32, height: u32, bytes: &[u8]) -> Self {
        assert!(width > 0 && height > 0, "grain texture must be non-empty");
        assert_eq!(
            bytes.len(),
            (width * height * 4) as usize,
            "grain byte length must match dimensions"
        );
        let pixels = bytes
            .chunks_exact(4)
            .map(|p| [p[0], p[1], p[2], p[3]])
            .collect();
        Self { width, height, pixels }
    }

    /// Synthesizes a per-pixel jitter pattern for hosts without a noise
    /// asset.
    ///
    /// Uses a fixed-seed linear congruential sequence (Knuth's MMIX
    /// multiplier), so the pattern is a pure function of `size` and the
    /// overlay stays byte-deterministic.
    pub fn synthesized(size: u32) -> Self {
        assert!(size > 0, "grain texture must be non-empty");
        let mut state: u64 = 0x9e37_79b9_7f4a_7c15;
        let mut pixels = Vec::with_capacity((size * size) as usize);
        for _ in 0..size * size {
            state = state
                .wrapping_mul(6364136223846793005)
                .wrapping_add(1442695040888963407);
            let v = (state >> 33) as u32;
            let gray = if v & 1 == 0 { 0u8 } else { 255u8 };
            // Low alpha keeps the grain subtle: 0..=23.
            let alpha = ((v >> 1) % 24) as u8;
            pixels.push([gray, gray, gray, alpha]);
        }
        Self { width: size, height: size, pixels }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Pixel at surface coordinates, tiling the pattern.
    #[inline]
    pub fn sample(&self, x: u32, y: u32) -> [u8; 4] {
        let tx = x % self.width;
        let ty = y % self.height;
        self.pixels[(ty * self.width + tx) as usize]
    }
}
