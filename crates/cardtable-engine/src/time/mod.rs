//! Time subsystem.
//!
//! Frame timing and rate control, decoupled from the runtime. Everything here
//! takes `Instant`s from the caller (or has an `_at` variant that does), so it
//! stays deterministic under test.
//!
//! - `FrameClock`: one per window; `tick()` once per presented frame
//! - `RateGate` / `Throttled`: drop calls that arrive faster than an interval
//! - `Interval`: fire at a fixed period, for diagnostics

mod frame_clock;
mod interval;
mod throttle;

pub use frame_clock::{FrameClock, FrameTime};
pub use interval::Interval;
pub use throttle::{RateGate, Throttled};
