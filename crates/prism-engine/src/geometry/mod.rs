//! Fixed meshes used by the demos and their GPU upload.
//!
//! CPU side geometry is plain attribute streams (`MeshData`); `GpuMesh` owns
//! one vertex buffer per stream plus a `u32` index buffer.

mod gpu;
mod mesh;
mod shapes;

pub use gpu::GpuMesh;
pub use mesh::MeshData;
pub use shapes::{cube, plane, textured_quad, triangle_2d};
