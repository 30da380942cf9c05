//! Matrix helpers on top of `glam`.
//!
//! Conventions match WebGPU: right-handed view space, clip-space depth in
//! `[0, 1]`, column-major matrices uploaded as-is.

mod bounce;
mod transform;

pub use bounce::Bounce;
pub use transform::{mvp, normal_matrix, perspective, ViewProjection};
