use crate::coords::Vec2;
use crate::paint::Color;

/// Soft drop shadow drawn behind a filled primitive.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Shadow {
    pub offset: Vec2,
    pub blur: f32,
    pub color: Color,
}

impl Shadow {
    #[inline]
    pub const fn new(offset: Vec2, blur: f32, color: Color) -> Self {
        Self { offset, blur, color }
    }
}

/// Paint state threaded explicitly into shadow-aware primitives.
///
/// Generators build one value and reuse it across draws; "sticky until
/// changed" is expressed by passing the same value again, not by hidden
/// surface state.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct PaintState {
    pub shadow: Option<Shadow>,
}

impl PaintState {
    /// No shadow.
    #[inline]
    pub const fn plain() -> Self {
        Self { shadow: None }
    }

    #[inline]
    pub const fn shadowed(shadow: Shadow) -> Self {
        Self { shadow: Some(shadow) }
    }
}
