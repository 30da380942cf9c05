use anyhow::Result;

use crate::render::RenderCtx;

use super::ctx::FrameCtx;

/// Control directive returned by app callbacks.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AppControl {
    Continue,
    Exit,
}

/// Application contract implemented by the demos.
pub trait App {
    /// Called once, after the window and GPU exist and before the first frame.
    ///
    /// Buffers, pipelines and bind groups are built here. An error aborts the
    /// runtime and is returned from [`Runtime::run`](crate::window::Runtime::run).
    fn setup(&mut self, ctx: &RenderCtx<'_>) -> Result<()>;

    /// Called once per redraw.
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl;
}
