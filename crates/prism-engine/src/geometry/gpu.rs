use wgpu::util::DeviceExt;

use crate::scene::Location;

use super::MeshData;

const POSITION_ATTRS: [wgpu::VertexAttribute; 1] = [wgpu::VertexAttribute {
    format: wgpu::VertexFormat::Float32x3,
    offset: 0,
    shader_location: Location::Position.index(),
}];

const NORMAL_ATTRS: [wgpu::VertexAttribute; 1] = [wgpu::VertexAttribute {
    format: wgpu::VertexFormat::Float32x3,
    offset: 0,
    shader_location: Location::Normal.index(),
}];

const UV_ATTRS: [wgpu::VertexAttribute; 1] = [wgpu::VertexAttribute {
    format: wgpu::VertexFormat::Float32x2,
    offset: 0,
    shader_location: Location::TexCoord.index(),
}];

/// Device-resident mesh: one vertex buffer per attribute stream plus indices.
///
/// Vertex slot 0 always holds positions; slot 1 holds normals or, for meshes
/// without normals, texture coordinates.
pub struct GpuMesh {
    position: wgpu::Buffer,
    normal: Option<wgpu::Buffer>,
    uv: Option<wgpu::Buffer>,
    index: wgpu::Buffer,
    index_count: u32,
}

impl GpuMesh {
    pub fn upload(device: &wgpu::Device, mesh: &MeshData, label: &str) -> Self {
        debug_assert!(mesh.is_consistent(), "{label}: inconsistent mesh data");

        let vertex_buffer = |suffix: &str, contents: &[u8]| {
            device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some(&format!("{label} {suffix}")),
                contents,
                usage: wgpu::BufferUsages::VERTEX,
            })
        };

        let position = vertex_buffer("positions", bytemuck::cast_slice(&mesh.positions));
        let normal = (!mesh.normals.is_empty())
            .then(|| vertex_buffer("normals", bytemuck::cast_slice(&mesh.normals)));
        let uv = (!mesh.uvs.is_empty()).then(|| vertex_buffer("uvs", bytemuck::cast_slice(&mesh.uvs)));

        let index = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(&format!("{label} indices")),
            contents: bytemuck::cast_slice(&mesh.indices),
            usage: wgpu::BufferUsages::INDEX,
        });

        Self {
            position,
            normal,
            uv,
            index,
            index_count: mesh.index_count(),
        }
    }

    pub fn index_count(&self) -> u32 {
        self.index_count
    }

    /// Binds vertex streams and indices, then issues one indexed draw.
    pub fn draw(&self, pass: &mut wgpu::RenderPass<'_>) {
        pass.set_vertex_buffer(0, self.position.slice(..));
        if let Some(second) = self.normal.as_ref().or(self.uv.as_ref()) {
            pass.set_vertex_buffer(1, second.slice(..));
        }
        pass.set_index_buffer(self.index.slice(..), wgpu::IndexFormat::Uint32);
        pass.draw_indexed(0..self.index_count, 0, 0..1);
    }

    pub fn position_layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<[f32; 3]>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &POSITION_ATTRS,
        }
    }

    pub fn normal_layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<[f32; 3]>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &NORMAL_ATTRS,
        }
    }

    pub fn uv_layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<[f32; 2]>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &UV_ATTRS,
        }
    }
}
