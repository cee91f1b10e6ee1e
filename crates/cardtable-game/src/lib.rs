//! Cardtable game: draggable colored cards on top of `cardtable-engine`.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use cardtable_game::Application;
//!
//! Application::new().title("cardtable").run()?;
//! ```
//!
//! The model is usable without a window: deal a [`Table`], feed it pointer
//! events through [`TableInput`] and paint it onto any
//! [`Surface`](cardtable_engine::scene::Surface) with [`paint_table`].

pub mod app;
pub mod card;
pub mod config;
pub mod error;
pub mod geometry;
pub mod input;
pub mod render;
pub mod table;

pub use app::Application;
pub use cardtable_engine::window::WindowMode;

pub use card::{Card, CardId};
pub use config::TableConfig;
pub use error::TableError;
pub use input::TableInput;
pub use render::paint_table;
pub use table::{DragState, Table};

/// Common imports for driving a table directly.
pub mod prelude {
    pub use crate::card::{Card, CardId};
    pub use crate::config::{TableConfig, DEFAULT_PALETTE};
    pub use crate::error::TableError;
    pub use crate::geometry::{card_contains_point, is_between, topmost_card_at};
    pub use crate::input::TableInput;
    pub use crate::render::paint_table;
    pub use crate::table::{DragState, Table};
    pub use cardtable_engine::coords::{Rect, Vec2, Viewport};
}
