//! Scene (draw stream) types.
//!
//! Responsibilities:
//! - define the [`Surface`] drawing contract the table paints against
//! - model filled geometry as [`Path`]s with canvas-style arcs
//! - record renderer-agnostic draw commands in paint order ([`DrawList`])
//! - keep shape-specific helpers isolated per shape file under `scene::shapes`

mod cmd;
mod list;
mod path;
mod surface;

pub mod shapes;

pub use cmd::DrawCmd;
pub use list::DrawList;
pub use path::{Path, SubPath};
pub use shapes::path::PathCmd;
pub use shapes::rect::RectCmd;
pub use shapes::rounded_rect::{clamp_corner_radius, draw_rounded_rect, rounded_rect_path};
pub use surface::Surface;
