//! Drawing primitives over [`RasterSurface`].
//!
//! All primitives are deterministic given their arguments, mutate the
//! buffer in place, and clip to the surface bounds. Derived parameters
//! (edge counts, grid sizes) are clamped by the generators, not here.

use crate::coords::Vec2;
use crate::paint::{Color, PaintState};
use crate::raster::RasterSurface;

/// Passes used to approximate a soft shadow: the shape is drawn offset
/// and progressively expanded at reduced alpha.
const SHADOW_PASSES: u32 = 3;

/// Vertex positions of a regular polygon: `center + radius·(cos θ, sin θ)`
/// for `θ = 2π·k/edges + angle_offset`, `k = 1..=edges`.
pub fn polygon_vertices(center: Vec2, radius: f32, edges: u32, angle_offset: f32) -> Vec<Vec2> {
    let mut verts = Vec::with_capacity(edges as usize);
    for k in 1..=edges {
        let theta = core::f32::consts::TAU * k as f32 / edges as f32 + angle_offset;
        verts.push(center + Vec2::from_angle(theta) * radius);
    }
    verts
}

impl RasterSurface {
    // ── circles ───────────────────────────────────────────────────────────

    /// Filled circle.
    pub fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        if radius <= 0.0 {
            return;
        }
        let r2 = radius * radius;
        let (x0, y0, x1, y1) = self.clip_box(
            center.x - radius,
            center.y - radius,
            center.x + radius,
            center.y + radius,
        );
        for y in y0..=y1 {
            for x in x0..=x1 {
                let dx = x as f32 + 0.5 - center.x;
                let dy = y as f32 + 0.5 - center.y;
                if dx * dx + dy * dy <= r2 {
                    self.blend_pixel(x, y, color);
                }
            }
        }
    }

    /// Circle outline of the given stroke width, centered on the radius.
    pub fn stroke_circle(&mut self, center: Vec2, radius: f32, width: f32, color: Color) {
        if radius <= 0.0 || width <= 0.0 {
            return;
        }
        let outer = radius + width * 0.5;
        let inner = (radius - width * 0.5).max(0.0);
        let (o2, i2) = (outer * outer, inner * inner);
        let (x0, y0, x1, y1) = self.clip_box(
            center.x - outer,
            center.y - outer,
            center.x + outer,
            center.y + outer,
        );
        for y in y0..=y1 {
            for x in x0..=x1 {
                let dx = x as f32 + 0.5 - center.x;
                let dy = y as f32 + 0.5 - center.y;
                let d2 = dx * dx + dy * dy;
                if d2 <= o2 && d2 >= i2 {
                    self.blend_pixel(x, y, color);
                }
            }
        }
    }

    // ── polygons ──────────────────────────────────────────────────────────

    /// Filled regular polygon. Callers clamp `edges` to a sane range
    /// before invoking; this only guards against degenerate input.
    pub fn fill_polygon(
        &mut self,
        center: Vec2,
        radius: f32,
        edges: u32,
        angle_offset: f32,
        color: Color,
    ) {
        if radius <= 0.0 || edges < 3 {
            return;
        }
        let verts = polygon_vertices(center, radius, edges, angle_offset);
        self.fill_path_even_odd(&verts, color);
    }

    /// Stroked regular polygon (closed path of thick lines).
    pub fn stroke_polygon(
        &mut self,
        center: Vec2,
        radius: f32,
        edges: u32,
        angle_offset: f32,
        width: f32,
        color: Color,
    ) {
        if radius <= 0.0 || edges < 3 {
            return;
        }
        let verts = polygon_vertices(center, radius, edges, angle_offset);
        for i in 0..verts.len() {
            let next = verts[(i + 1) % verts.len()];
            self.draw_line(verts[i], next, width, color, false);
        }
    }

    /// Scanline even-odd fill of a closed path.
    fn fill_path_even_odd(&mut self, verts: &[Vec2], color: Color) {
        let y_min = verts.iter().map(|v| v.y).fold(f32::INFINITY, f32::min);
        let y_max = verts.iter().map(|v| v.y).fold(f32::NEG_INFINITY, f32::max);
        let row0 = (y_min.floor().max(0.0)) as i64;
        let row1 = (y_max.ceil().min(self.size() as f32 - 1.0)) as i64;

        let mut xs: Vec<f32> = Vec::with_capacity(verts.len());
        for y in row0..=row1 {
            let sample = y as f32 + 0.5;
            xs.clear();
            for i in 0..verts.len() {
                let p = verts[i];
                let q = verts[(i + 1) % verts.len()];
                if (p.y <= sample) != (q.y <= sample) {
                    xs.push(p.x + (sample - p.y) * (q.x - p.x) / (q.y - p.y));
                }
            }
            xs.sort_by(f32::total_cmp);
            for pair in xs.chunks_exact(2) {
                let x0 = pair[0].round().max(0.0) as i64;
                let x1 = pair[1].round().min(self.size() as f32) as i64;
                for x in x0..x1 {
                    self.blend_pixel(x, y, color);
                }
            }
        }
    }

    // ── rectangles ────────────────────────────────────────────────────────

    /// Axis-aligned filled rectangle given by center and half extents.
    pub fn fill_rect(&mut self, center: Vec2, half: Vec2, color: Color) {
        self.fill_rounded_rect(center, half, 0.0, color);
    }

    /// Rounded rectangle; `corner_radius == 0` degenerates to a plain rect.
    pub fn fill_rounded_rect(&mut self, center: Vec2, half: Vec2, corner_radius: f32, color: Color) {
        if half.x <= 0.0 || half.y <= 0.0 {
            return;
        }
        let r = corner_radius.clamp(0.0, half.x.min(half.y));
        let (x0, y0, x1, y1) = self.clip_box(
            center.x - half.x,
            center.y - half.y,
            center.x + half.x,
            center.y + half.y,
        );
        for y in y0..=y1 {
            for x in x0..=x1 {
                let dx = (x as f32 + 0.5 - center.x).abs();
                let dy = (y as f32 + 0.5 - center.y).abs();
                if dx > half.x || dy > half.y {
                    continue;
                }
                if r > 0.0 && dx > half.x - r && dy > half.y - r {
                    let cx = dx - (half.x - r);
                    let cy = dy - (half.y - r);
                    if cx * cx + cy * cy > r * r {
                        continue;
                    }
                }
                self.blend_pixel(x, y, color);
            }
        }
    }

    // ── lines ─────────────────────────────────────────────────────────────

    /// Thick line segment; `additive` switches to saturating additive
    /// blending (used by beam ornaments).
    pub fn draw_line(&mut self, from: Vec2, to: Vec2, width: f32, color: Color, additive: bool) {
        let w = width.max(1.0);
        let half_w = w * 0.5;
        let (x0, y0, x1, y1) = self.clip_box(
            from.x.min(to.x) - half_w,
            from.y.min(to.y) - half_w,
            from.x.max(to.x) + half_w,
            from.y.max(to.y) + half_w,
        );
        let seg = to - from;
        let len2 = seg.x * seg.x + seg.y * seg.y;
        for y in y0..=y1 {
            for x in x0..=x1 {
                let p = Vec2::new(x as f32 + 0.5, y as f32 + 0.5);
                let t = if len2 <= f32::EPSILON {
                    0.0
                } else {
                    ((p - from).x * seg.x + (p - from).y * seg.y) / len2
                };
                let nearest = from + seg * t.clamp(0.0, 1.0);
                if (p - nearest).length() <= half_w {
                    if additive {
                        self.blend_pixel_additive(x, y, color);
                    } else {
                        self.blend_pixel(x, y, color);
                    }
                }
            }
        }
    }

    // ── shadow-aware variants ─────────────────────────────────────────────

    /// Filled circle with an optional soft shadow from `paint`.
    pub fn fill_circle_with(&mut self, paint: &PaintState, center: Vec2, radius: f32, color: Color) {
        if let Some(shadow) = paint.shadow {
            let alpha = shadow.color.a / SHADOW_PASSES as f32;
            for i in 0..SHADOW_PASSES {
                let grow = shadow.blur * i as f32 / SHADOW_PASSES as f32;
                self.fill_circle(
                    center + shadow.offset,
                    radius + grow,
                    shadow.color.with_alpha(alpha),
                );
            }
        }
        self.fill_circle(center, radius, color);
    }

    /// Filled polygon with an optional soft shadow from `paint`.
    pub fn fill_polygon_with(
        &mut self,
        paint: &PaintState,
        center: Vec2,
        radius: f32,
        edges: u32,
        angle_offset: f32,
        color: Color,
    ) {
        if let Some(shadow) = paint.shadow {
            let alpha = shadow.color.a / SHADOW_PASSES as f32;
            for i in 0..SHADOW_PASSES {
                let grow = shadow.blur * i as f32 / SHADOW_PASSES as f32;
                self.fill_polygon(
                    center + shadow.offset,
                    radius + grow,
                    edges,
                    angle_offset,
                    shadow.color.with_alpha(alpha),
                );
            }
        }
        self.fill_polygon(center, radius, edges, angle_offset, color);
    }

    /// Filled rect with an optional soft shadow from `paint`.
    pub fn fill_rect_with(&mut self, paint: &PaintState, center: Vec2, half: Vec2, color: Color) {
        if let Some(shadow) = paint.shadow {
            let alpha = shadow.color.a / SHADOW_PASSES as f32;
            for i in 0..SHADOW_PASSES {
                let grow = shadow.blur * i as f32 / SHADOW_PASSES as f32;
                self.fill_rect(
                    center + shadow.offset,
                    half + Vec2::new(grow, grow),
                    shadow.color.with_alpha(alpha),
                );
            }
        }
        self.fill_rect(center, half, color);
    }

    /// Clips a float bounding box to pixel bounds, inclusive.
    fn clip_box(&self, x_min: f32, y_min: f32, x_max: f32, y_max: f32) -> (i64, i64, i64, i64) {
        let hi = self.size() as f32 - 1.0;
        (
            x_min.floor().clamp(0.0, hi) as i64,
            y_min.floor().clamp(0.0, hi) as i64,
            x_max.ceil().clamp(0.0, hi) as i64,
            y_max.ceil().clamp(0.0, hi) as i64,
        )
    }
}
