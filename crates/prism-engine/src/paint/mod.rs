//! Color values shared by clear colors, materials and generated textures.

pub mod color;

pub use color::Color;
