//! Shape renderers.

mod common;

pub mod fill;
