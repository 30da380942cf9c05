//! Renderer-facing context and frame attachments.
//!
//! Demos record their draws against a `RenderCtx` (device, queue, surface
//! format, target size) inside a single render pass opened by
//! [`FrameCtx::render`](crate::core::FrameCtx::render).

mod attachment;
mod ctx;
mod depth;

pub use attachment::ResizeSlot;
pub use ctx::RenderCtx;
pub use depth::{DepthTarget, DEPTH_FORMAT};
