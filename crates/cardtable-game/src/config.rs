use std::time::Duration;

use cardtable_engine::coords::Vec2;
use cardtable_engine::paint::Color;

use crate::error::TableError;

/// Card colors dealt onto the table, left to right.
pub const DEFAULT_PALETTE: [&str; 8] =
    ["red", "green", "yellow", "blue", "orange", "brown", "purple", "lime"];

/// Table configuration.
///
/// Palette entries are CSS color names; [`TableConfig::validate`] resolves
/// them to [`Color`]s.
#[derive(Debug, Clone)]
pub struct TableConfig {
    /// Card width and height in logical pixels.
    pub card_size: Vec2,
    pub palette: Vec<String>,
    pub corner_radius: f32,
    pub background: Color,
    /// Minimum spacing between accepted pointer moves.
    pub move_interval: Duration,
    /// Period of the held-card diagnostics log.
    pub diagnostics_interval: Duration,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            card_size: Vec2::new(240.0, 360.0),
            palette: DEFAULT_PALETTE.iter().map(|s| s.to_string()).collect(),
            corner_radius: 12.0,
            background: Color::black(),
            move_interval: Duration::from_millis(16),
            diagnostics_interval: Duration::from_millis(500),
        }
    }
}

impl TableConfig {
    pub fn card_size(mut self, width: f32, height: f32) -> Self {
        self.card_size = Vec2::new(width, height);
        self
    }

    pub fn palette<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.palette = names.into_iter().map(Into::into).collect();
        self
    }

    pub fn corner_radius(mut self, r: f32) -> Self {
        self.corner_radius = r;
        self
    }

    pub fn background(mut self, color: Color) -> Self {
        self.background = color;
        self
    }

    pub fn move_interval(mut self, interval: Duration) -> Self {
        self.move_interval = interval;
        self
    }

    pub fn diagnostics_interval(mut self, interval: Duration) -> Self {
        self.diagnostics_interval = interval;
        self
    }

    /// Checks the configuration and returns the resolved palette colors.
    pub fn validate(&self) -> Result<Vec<Color>, TableError> {
        let Vec2 { x: width, y: height } = self.card_size;
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            return Err(TableError::InvalidCardSize { width, height });
        }

        if !(self.corner_radius.is_finite() && self.corner_radius >= 0.0) {
            return Err(TableError::InvalidCornerRadius(self.corner_radius));
        }

        if self.palette.is_empty() {
            return Err(TableError::EmptyPalette);
        }

        self.palette
            .iter()
            .map(|name| {
                Color::from_css_name(name).ok_or_else(|| TableError::UnknownColor(name.clone()))
            })
            .collect()
    }
}
