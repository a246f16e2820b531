//! Centered glyph rendering.
//!
//! Glyphs come from an embedded Hershey stroke font: each character is a
//! polyline of pen-up/pen-down points. The point cloud is scaled to a
//! fixed fraction of the surface side and centered on its bounding box
//! (both axes), then stroked with the thick-line primitive.

use vector_text::{HersheyFont, VectorFont, render_text};

use crate::coords::Vec2;
use crate::paint::Color;
use crate::raster::RasterSurface;

/// Target glyph height as a fraction of the side for single-character text.
const SINGLE_CHAR_SCALE: f32 = 0.7;
/// Horizontal head-room so multi-character text never touches the edges.
const MAX_WIDTH_FRACTION: f32 = 0.92;

impl RasterSurface {
    /// Draws up to 4 characters of `text` centered on the surface.
    ///
    /// One character is sized to 70% of the side; `n` characters are
    /// sized to `side / n`. Centering uses the rendered bounding box, so
    /// glyphs with uneven extents (descenders, accents) still land in the
    /// visual middle. Extra characters beyond the fourth are ignored.
    pub fn draw_centered_glyph(&mut self, text: &str, color: Color) {
        let text: String = text.chars().take(4).collect();
        let char_count = text.chars().count();
        if char_count == 0 {
            return;
        }

        let points = render_text(&text, VectorFont::HersheyFont(HersheyFont::Romant));
        if points.is_empty() {
            return;
        }

        let mut min = Vec2::new(f32::INFINITY, f32::INFINITY);
        let mut max = Vec2::new(f32::NEG_INFINITY, f32::NEG_INFINITY);
        for p in &points {
            min.x = min.x.min(p.x as f32);
            min.y = min.y.min(p.y as f32);
            max.x = max.x.max(p.x as f32);
            max.y = max.y.max(p.y as f32);
        }
        let glyph_w = max.x - min.x;
        let glyph_h = max.y - min.y;
        if glyph_h <= 0.0 && glyph_w <= 0.0 {
            return;
        }

        let side = self.size() as f32;
        let target_h = if char_count == 1 {
            side * SINGLE_CHAR_SCALE
        } else {
            side / char_count as f32
        };
        let mut scale = if glyph_h > 0.0 { target_h / glyph_h } else { 1.0 };
        if glyph_w > 0.0 && glyph_w * scale > side * MAX_WIDTH_FRACTION {
            scale = side * MAX_WIDTH_FRACTION / glyph_w;
        }

        let bbox_center = (min + max) * 0.5;
        let offset = Vec2::new(side * 0.5, side * 0.5) - bbox_center * scale;
        let stroke = (target_h / 12.0).max(1.0);

        let mut prev: Option<Vec2> = None;
        for p in &points {
            let pos = offset + Vec2::new(p.x as f32, p.y as f32) * scale;
            if p.pen {
                if let Some(from) = prev {
                    self.draw_line(from, pos, stroke, color, false);
                }
            }
            prev = Some(pos);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raster::Rgba8;

    const INK: Color = Color::rgb(0.0, 0.0, 1.0);

    fn inked(s: &RasterSurface) -> Vec<(u32, u32)> {
        let mut out = Vec::new();
        for y in 0..s.size() {
            for x in 0..s.size() {
                if s.pixel(x, y) == Rgba8::new(0, 0, 255, 255) {
                    out.push((x, y));
                }
            }
        }
        out
    }

    #[test]
    fn single_letter_draws_and_is_centered() {
        let mut s = RasterSurface::new(200);
        s.draw_centered_glyph("A", INK);
        let px = inked(&s);
        assert!(!px.is_empty());

        let (min_x, max_x) = px.iter().fold((u32::MAX, 0), |(lo, hi), &(x, _)| {
            (lo.min(x), hi.max(x))
        });
        let (min_y, max_y) = px.iter().fold((u32::MAX, 0), |(lo, hi), &(_, y)| {
            (lo.min(y), hi.max(y))
        });
        // Bounding box of the ink is centered within a small tolerance.
        let cx = (min_x + max_x) as f32 / 2.0;
        let cy = (min_y + max_y) as f32 / 2.0;
        assert!((cx - 100.0).abs() < 8.0, "ink center x = {cx}");
        assert!((cy - 100.0).abs() < 8.0, "ink center y = {cy}");
        // Tall: roughly 70% of the side.
        let h = (max_y - min_y) as f32;
        assert!(h > 200.0 * 0.55 && h < 200.0 * 0.85, "ink height = {h}");
    }

    #[test]
    fn glyph_rendering_is_deterministic() {
        let mut a = RasterSurface::new(160);
        let mut b = RasterSurface::new(160);
        a.draw_centered_glyph("Q", INK);
        b.draw_centered_glyph("Q", INK);
        assert_eq!(a.as_bytes(), b.as_bytes());
    }

    #[test]
    fn empty_text_draws_nothing() {
        let mut s = RasterSurface::new(120);
        s.draw_centered_glyph("", INK);
        assert!(inked(&s).is_empty());
    }

    #[test]
    fn text_is_truncated_to_four_chars() {
        let mut four = RasterSurface::new(160);
        let mut more = RasterSurface::new(160);
        four.draw_centered_glyph("ABCD", INK);
        more.draw_centered_glyph("ABCDEFG", INK);
        assert_eq!(four.as_bytes(), more.as_bytes());
    }

    #[test]
    fn multi_char_text_is_smaller_than_single() {
        let mut one = RasterSurface::new(200);
        let mut two = RasterSurface::new(200);
        one.draw_centered_glyph("A", INK);
        two.draw_centered_glyph("AB", INK);
        let h = |s: &RasterSurface| {
            let px = inked(s);
            let (lo, hi) = px.iter().fold((u32::MAX, 0), |(lo, hi), &(_, y)| {
                (lo.min(y), hi.max(y))
            });
            hi - lo
        };
        assert!(h(&two) < h(&one));
    }
}
