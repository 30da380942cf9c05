//! Prism engine crate.
//!
//! Owns the platform + GPU runtime used by the tutorial demos, plus the small
//! building blocks they share: meshes, per-object uniforms, textures and math.

pub mod device;
pub mod window;
pub mod input;
pub mod time;
pub mod core;

pub mod logging;
pub mod math;
pub mod paint;
pub mod render;
pub mod geometry;
pub mod scene;
pub mod texture;
