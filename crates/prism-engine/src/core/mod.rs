//! Core engine-facing contracts.
//!
//! This module defines the interface between the runtime (platform loop) and
//! the demos, and the per-frame context they draw through.

mod app;
mod ctx;

pub use app::{App, AppControl};
pub use ctx::{FrameCtx, PassSetup, WindowCtx};
