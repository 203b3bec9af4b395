//! Time subsystem.
//!
//! Provides frame timing without coupling to the host:
//! - a [`Clock`] is whatever the host measures time with
//! - one [`FrameTimer`] per viewport turns clock readings into per-frame
//!   elapsed time and a smoothed frame duration

mod clock;
mod frame_timer;

pub use clock::{Clock, ManualClock, SystemClock};
pub use frame_timer::{FrameTime, FrameTimer};
