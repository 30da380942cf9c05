//! Tutorial demo scenes on top of `prism-engine`.
//!
//! Each module owns one demo's state and implements `core::App`; the binaries
//! in `src/bin` only configure logging and hand the demo to the runtime.

pub mod simple_scene;
pub mod tex_mipmap;
pub mod triangle;
