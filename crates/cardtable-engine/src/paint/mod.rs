//! Paint model shared between the table and the renderer.
//!
//! Scope: color representation (linear premultiplied alpha) and the CSS named
//! colors the card palette is written in. Geometry types remain in `coords`.

pub mod color;

pub use color::Color;
