//! Frame timing.
//!
//! One `FrameClock` per window; call `tick()` once per presented frame to
//! obtain the `FrameTime` that drives animation.

mod frame_clock;

pub use frame_clock::{FrameClock, FrameTime};
