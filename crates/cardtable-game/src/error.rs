use thiserror::Error;

/// Errors raised while validating a [`TableConfig`](crate::config::TableConfig)
/// or dealing a table from it.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TableError {
    #[error("palette is empty; at least one card color is required")]
    EmptyPalette,

    #[error("unknown color name {0:?}")]
    UnknownColor(String),

    #[error("card size must be positive and finite, got {width}x{height}")]
    InvalidCardSize { width: f32, height: f32 },

    #[error("corner radius must be non-negative and finite, got {0}")]
    InvalidCornerRadius(f32),

    #[error("cannot deal onto a {width}x{height} viewport")]
    InvalidViewport { width: f32, height: f32 },
}
