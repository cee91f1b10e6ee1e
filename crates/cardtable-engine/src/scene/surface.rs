use crate::coords::Rect;
use crate::paint::Color;

use super::Path;

/// Minimal 2D drawing contract.
///
/// Anything that can fill an axis-aligned rectangle and an arbitrary path
/// with a solid color can host the table. Rounded rectangles are not a
/// primitive here; [`draw_rounded_rect`](super::draw_rounded_rect) builds
/// them as paths.
pub trait Surface {
    /// Fills `rect` with a solid color.
    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// Fills every subpath of `path` (implicitly closed) with a solid color.
    fn fill_path(&mut self, path: &Path, color: Color);
}
