//! Textures for the filter demo.
//!
//! Images are built on the CPU as `image::RgbaImage` mip chains and uploaded
//! in one call; sampling state lives in [`FilterSettings`].

mod checkerboard;
mod filter;
mod gpu;
mod mip;

pub use checkerboard::checkerboard;
pub use filter::{FilterSettings, MagFilter, MinFilter};
pub use gpu::{GpuTexture, TEXTURE_FORMAT};
pub use mip::{MipChain, MAX_FLAT_LEVELS};
