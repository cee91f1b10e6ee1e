use crate::coords::Rect;
use crate::paint::Color;

use super::{DrawCmd, Path, PathCmd, RectCmd, Surface};

/// Recorded draw stream for a frame.
///
/// Commands are kept in insertion order, which is also paint order: later
/// commands land on top of earlier ones.
///
/// `clear()` keeps the allocation, so a list reused across frames stops
/// allocating once warmed.
#[derive(Debug, Default)]
pub struct DrawList {
    items: Vec<DrawCmd>,
}

impl DrawList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears recorded items. Keeps allocated capacity for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Returns items in paint order.
    #[inline]
    pub fn items(&self) -> &[DrawCmd] {
        &self.items
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[inline]
    pub fn push(&mut self, cmd: DrawCmd) {
        self.items.push(cmd);
    }
}

impl Surface for DrawList {
    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.push(DrawCmd::Rect(RectCmd::new(rect, color)));
    }

    fn fill_path(&mut self, path: &Path, color: Color) {
        if path.is_empty() {
            return;
        }
        self.push(DrawCmd::Path(PathCmd::new(path.clone(), color)));
    }
}
