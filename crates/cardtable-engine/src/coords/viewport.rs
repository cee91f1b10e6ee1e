use super::{Rect, Vec2};

/// Viewport size in logical pixels.
///
/// The fill renderer uploads this as the basis for converting logical px
/// positions to NDC.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn is_valid(self) -> bool {
        self.width > 0.0 && self.height > 0.0 && self.width.is_finite() && self.height.is_finite()
    }

    /// The whole viewport as a rectangle anchored at the origin.
    #[inline]
    pub fn rect(self) -> Rect {
        Rect::from_origin_size(Vec2::zero(), Vec2::new(self.width, self.height))
    }
}
