use std::time::Instant;

use winit::event::WindowEvent;

use super::ctx::FrameCtx;
use crate::input::InputEvent;

/// Control directive returned by app callbacks.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AppControl {
    Continue,
    Exit,
}

/// Application contract implemented by higher layers.
///
/// Callbacks run on the event-loop thread, one at a time, so an app never
/// observes two of them interleaved.
pub trait App {
    /// Called for raw window events, before the runtime handles them.
    fn on_window_event(&mut self, event: &WindowEvent) -> AppControl {
        let _ = event;
        AppControl::Continue
    }

    /// Called for each translated input event, as it arrives.
    ///
    /// The runtime has already folded the event into the window's
    /// [`InputState`](crate::input::InputState). `now` is the time the event
    /// was received.
    fn on_input(&mut self, event: &InputEvent, now: Instant) -> AppControl {
        let _ = (event, now);
        AppControl::Continue
    }

    /// Called when the event loop is about to block waiting for events.
    fn about_to_wait(&mut self, now: Instant) {
        let _ = now;
    }

    /// Called once per rendered frame.
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl;
}
