//! Fixed color tables and character→color mapping.
//!
//! Two tables: a saturated "candy" set used for most pattern fills, and
//! a small high-contrast "harsh" set for accents. Mapping is total over
//! all characters: case-fold, take the character code modulo one less
//! than the table length.

use crate::paint::Color;

/// Saturated palette, sRGB bytes. Last entry is only reachable through
/// [`derived_color`]'s index shift.
const CANDY: [[u8; 3]; 24] = [
    [0xe5, 0x39, 0x35], // red
    [0xd8, 0x1b, 0x60], // pink
    [0x8e, 0x24, 0xaa], // purple
    [0x5e, 0x35, 0xb1], // deep purple
    [0x39, 0x49, 0xab], // indigo
    [0x1e, 0x88, 0xe5], // blue
    [0x03, 0x9b, 0xe5], // light blue
    [0x00, 0xac, 0xc1], // cyan
    [0x00, 0x89, 0x7b], // teal
    [0x43, 0xa0, 0x47], // green
    [0x7c, 0xb3, 0x42], // light green
    [0xc0, 0xca, 0x33], // lime
    [0xfd, 0xd8, 0x35], // yellow
    [0xff, 0xb3, 0x00], // amber
    [0xfb, 0x8c, 0x00], // orange
    [0xf4, 0x51, 0x1e], // deep orange
    [0x6d, 0x4c, 0x41], // brown
    [0x75, 0x75, 0x75], // grey
    [0x54, 0x6e, 0x7a], // blue grey
    [0xec, 0x40, 0x7a], // rose
    [0x7e, 0x57, 0xc2], // lavender
    [0x26, 0xa6, 0x9a], // sea green
    [0xff, 0x70, 0x43], // coral
    [0x9e, 0x9d, 0x24], // olive
];

/// High-contrast accent palette: white, red, black, teal.
const HARSH: [[u8; 3]; 4] = [
    [0xff, 0xff, 0xff],
    [0xe5, 0x39, 0x35],
    [0x00, 0x00, 0x00],
    [0x00, 0x89, 0x7b],
];

#[inline]
fn fold_case(c: char) -> u32 {
    c.to_ascii_uppercase() as u32
}

/// Candy-table color for a character. Total over all `char` values.
pub fn color_for_char(c: char) -> Color {
    let idx = fold_case(c) as usize % (CANDY.len() - 1);
    let [r, g, b] = CANDY[idx];
    Color::from_srgb_u8(r, g, b)
}

/// Harsh-table color for a character.
pub fn harsh_color_for_char(c: char) -> Color {
    let idx = fold_case(c) as usize % (HARSH.len() - 1);
    let [r, g, b] = HARSH[idx];
    Color::from_srgb_u8(r, g, b)
}

/// Candy color adjusted by two extra fingerprint-derived integers.
///
/// `i1 % 3 == 0` darkens; odd `i2` shifts the index by `i1` to pick a
/// substitute entry. The result is always fully opaque.
pub fn derived_color(c: char, i1: usize, i2: usize) -> Color {
    let span = CANDY.len() - 1;
    let mut idx = fold_case(c) as usize % span;
    if i2 % 2 == 1 {
        idx = (idx + i1) % CANDY.len();
    }
    let [r, g, b] = CANDY[idx];
    let mut color = Color::from_srgb_u8(r, g, b);
    if i1 % 3 == 0 {
        color = color.darkened(0.75);
    }
    color.opaque()
}
