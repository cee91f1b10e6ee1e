use crate::coords::Vec2;
use crate::paint::Color;
use crate::scene::{Path, Surface};

/// Clamps a corner radius so it never exceeds half of either side.
///
/// Negative radii become zero.
#[inline]
pub fn clamp_corner_radius(w: f32, h: f32, r: f32) -> f32 {
    let mut r = r;
    if w < 2.0 * r {
        r = w / 2.0;
    }
    if h < 2.0 * r {
        r = h / 2.0;
    }
    r.max(0.0)
}

/// Builds the outline of a rounded rectangle.
///
/// The path starts on the top edge at `(x + r, y)` and turns clockwise through
/// the four corners with `arc_to`, then closes.
pub fn rounded_rect_path(x: f32, y: f32, w: f32, h: f32, r: f32) -> Path {
    let r = clamp_corner_radius(w, h, r);

    let mut path = Path::new();
    path.move_to(Vec2::new(x + r, y));
    path.arc_to(Vec2::new(x + w, y), Vec2::new(x + w, y + h), r);
    path.arc_to(Vec2::new(x + w, y + h), Vec2::new(x, y + h), r);
    path.arc_to(Vec2::new(x, y + h), Vec2::new(x, y), r);
    path.arc_to(Vec2::new(x, y), Vec2::new(x + w, y), r);
    path.close();
    path
}

/// Fills a rounded rectangle on any [`Surface`].
pub fn draw_rounded_rect<S>(surface: &mut S, x: f32, y: f32, w: f32, h: f32, r: f32, color: Color)
where
    S: Surface + ?Sized,
{
    surface.fill_path(&rounded_rect_path(x, y, w, h, r), color);
}
