use crate::paint::Color;
use crate::scene::Path;

/// Solid path fill payload.
#[derive(Debug, Clone, PartialEq)]
pub struct PathCmd {
    pub path: Path,
    pub color: Color,
}

impl PathCmd {
    #[inline]
    pub fn new(path: Path, color: Color) -> Self {
        Self { path, color }
    }
}
