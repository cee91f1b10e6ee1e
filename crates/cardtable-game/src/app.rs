use std::time::{Duration, Instant};

use anyhow::Context;
use winit::dpi::LogicalSize;

use cardtable_engine::coords::Viewport;
use cardtable_engine::core::{App as EngineApp, AppControl, FrameCtx};
use cardtable_engine::device::GpuInit;
use cardtable_engine::input::InputEvent;
use cardtable_engine::render::shapes::fill::FillRenderer;
use cardtable_engine::scene::DrawList;
use cardtable_engine::time::Interval;
use cardtable_engine::window::{Runtime, RuntimeConfig, WindowMode};

use crate::config::TableConfig;
use crate::input::TableInput;
use crate::render::paint_table;
use crate::table::Table;

// ── Application ───────────────────────────────────────────────────────────

/// Card table application builder.
///
/// ```rust,ignore
/// Application::new()
///     .title("cardtable")
///     .mode(WindowMode::Windowed)
///     .size(1600.0, 900.0)
///     .run()?;
/// ```
pub struct Application {
    title: String,
    width: f64,
    height: f64,
    mode: WindowMode,
    config: TableConfig,
}

impl Application {
    pub fn new() -> Self {
        Self {
            title: "cardtable".to_string(),
            width: 1280.0,
            height: 720.0,
            mode: WindowMode::default(),
            config: TableConfig::default(),
        }
    }

    /// Set the window title.
    pub fn title(mut self, t: impl Into<String>) -> Self {
        self.title = t.into();
        self
    }

    /// Set the initial window size in logical pixels.
    ///
    /// Only used in [`WindowMode::Windowed`] and as the restore size.
    pub fn size(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn mode(mut self, mode: WindowMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn config(mut self, config: TableConfig) -> Self {
        self.config = config;
        self
    }

    /// Opens the window and runs until it is closed.
    ///
    /// The configuration is checked before any window is created.
    pub fn run(self) -> anyhow::Result<()> {
        self.config.validate().context("invalid table configuration")?;

        let runtime = RuntimeConfig {
            title: self.title,
            initial_size: LogicalSize::new(self.width, self.height),
            mode: self.mode,
        };

        Runtime::run(runtime, GpuInit::default(), TableApp::new(self.config, self.mode))
    }
}

impl Default for Application {
    fn default() -> Self {
        Self::new()
    }
}

// ── TableApp ──────────────────────────────────────────────────────────────

/// Longest wait for the window manager to apply the requested [`WindowMode`]
/// before the table is dealt against whatever size the window has.
const LAYOUT_SETTLE_TIMEOUT: Duration = Duration::from_millis(500);

/// Whether the one-time layout may be taken from the current window size.
///
/// A zero-sized (minimized) window never qualifies. Otherwise the layout waits
/// until the requested mode has been applied, or until the timeout has passed
/// for window managers that never report it.
fn layout_ready(viewport: Viewport, mode_applied: bool, waited: Duration) -> bool {
    viewport.is_valid() && (mode_applied || waited >= LAYOUT_SETTLE_TIMEOUT)
}

/// Internal state that implements `cardtable_engine::core::App`.
///
/// User code never sees this type.
struct TableApp {
    config: TableConfig,
    mode: WindowMode,

    /// Dealt once, on the first frame where [`layout_ready`] holds.
    table: Option<Table>,
    viewport: Viewport,
    input: TableInput,

    draw_list: DrawList,
    fill_renderer: FillRenderer,

    diagnostics: Interval,
    first_frame: Option<Instant>,
    frames: u64,
}

impl TableApp {
    fn new(config: TableConfig, mode: WindowMode) -> Self {
        Self {
            input: TableInput::new(config.move_interval),
            diagnostics: Interval::new(config.diagnostics_interval),
            config,
            mode,
            table: None,
            viewport: Viewport::default(),
            draw_list: DrawList::new(),
            fill_renderer: FillRenderer::new(),
            first_frame: None,
            frames: 0,
        }
    }

    fn log_diagnostics(&self) {
        match self.table.as_ref().and_then(Table::held) {
            Some(card) => log::info!("held: {card}"),
            None => log::info!("held: none"),
        }
        log::debug!("frames rendered: {}", self.frames);
    }
}

impl EngineApp for TableApp {
    fn on_input(&mut self, event: &InputEvent, now: Instant) -> AppControl {
        if let Some(table) = self.table.as_mut() {
            self.input.handle(table, event, now);
        }
        AppControl::Continue
    }

    fn about_to_wait(&mut self, now: Instant) {
        if self.diagnostics.poll(now) {
            self.log_diagnostics();
        }
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        self.frames = ctx.time.frame_index + 1;

        if self.table.is_none() {
            let viewport = ctx.window.viewport();
            let first = *self.first_frame.get_or_insert(ctx.time.now);
            let waited = ctx.time.now.saturating_duration_since(first);

            if !layout_ready(viewport, ctx.window.mode_applied(self.mode), waited) {
                return ctx.render(self.config.background, |_, _| {});
            }

            match Table::deal(&self.config, viewport) {
                Ok(table) => {
                    self.viewport = viewport;
                    self.table = Some(table);
                }
                Err(e) => {
                    log::error!("cannot deal the table: {e}");
                    return AppControl::Exit;
                }
            }
        }
        let Some(table) = self.table.as_ref() else {
            return AppControl::Continue;
        };

        self.draw_list.clear();
        paint_table(&mut self.draw_list, table, self.viewport, &self.config);

        let dl = &self.draw_list;
        let fill = &mut self.fill_renderer;
        ctx.render(self.config.background, |rctx, target| {
            fill.render(rctx, target, dl);
        })
    }
}
