//! Lit multi-object scenes.
//!
//! Every drawable owns its matrices and material uniform buffers and one bind
//! group that also references the scene's single light buffer. Binding slots
//! and vertex locations come from [`Binding`] and [`Location`], which feed both
//! the generated WGSL and the host-side layouts.

mod binding;
mod drawable;
mod layout;
mod light;
mod lit;
mod uniforms;

pub use binding::{Binding, Location, BIND_GROUP};
pub use drawable::{Drawable, DrawableBuilder, Material};
pub use layout::{sampler_entry, texture_entry, uniform_entry};
pub use light::{Light, SharedLight};
pub use lit::{lit_shader_source, LitPipeline};
pub use uniforms::{LightUniform, MaterialUniform, MatricesUniform};
