//! Cardtable engine crate.
//!
//! This crate owns the platform + GPU runtime pieces used by the card table:
//! window and event loop, GPU device, input translation, frame timing, and a
//! small 2D drawing model (paths, draw list, fill renderer).

pub mod device;
pub mod window;
pub mod input;
pub mod time;
pub mod core;

pub mod logging;
pub mod coords;
pub mod render;
pub mod paint;
pub mod scene;
