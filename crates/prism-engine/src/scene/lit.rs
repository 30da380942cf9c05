use crate::geometry::GpuMesh;

use super::{uniform_entry, Binding, LightUniform, Location, MaterialUniform, MatricesUniform};

/// WGSL for the Lambertian lit pipeline.
///
/// Resource and input attributes are spliced in from [`Binding`] and
/// [`Location`] so the host-side layouts and the shader cannot drift apart.
pub fn lit_shader_source() -> String {
    format!(
        r#"
struct Matrices {{
    mvp: mat4x4f,
    normal: mat4x4f,
}};

struct Light {{
    position: vec4f,
    ambient: vec3f,
    diffuse: vec3f,
}};

struct Material {{
    ambient: vec3f,
    diffuse: vec3f,
}};

{matrices} var<uniform> matrices: Matrices;
{light} var<uniform> light: Light;
{material} var<uniform> material: Material;

struct VertexOut {{
    @builtin(position) clip: vec4f,
    @location(0) normal: vec3f,
}};

@vertex
fn main_vert(
    {position} position: vec3f,
    {normal} normal: vec3f,
) -> VertexOut {{
    var out: VertexOut;
    out.clip = matrices.mvp * vec4f(position, 1.0);
    out.normal = (matrices.normal * vec4f(normal, 0.0)).xyz;
    return out;
}}

@fragment
fn main_frag(in: VertexOut) -> @location(0) vec4f {{
    let n = normalize(in.normal);
    let l = normalize(light.position.xyz);
    let lambert = max(dot(l, n), 0.0);
    let color = light.ambient * material.ambient
        + light.diffuse * material.diffuse * lambert;
    return vec4f(color, 1.0);
}}
"#,
        matrices = Binding::Matrices.wgsl(),
        light = Binding::Light.wgsl(),
        material = Binding::Material.wgsl(),
        position = Location::Position.wgsl(),
        normal = Location::Normal.wgsl(),
    )
}

/// Depth-tested pipeline for meshes with position + normal streams.
pub struct LitPipeline {
    pub pipeline: wgpu::RenderPipeline,
    pub bind_group_layout: wgpu::BindGroupLayout,
}

impl LitPipeline {
    pub fn new(
        device: &wgpu::Device,
        surface_format: wgpu::TextureFormat,
        depth_format: wgpu::TextureFormat,
    ) -> Self {
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("prism lit shader"),
            source: wgpu::ShaderSource::Wgsl(lit_shader_source().into()),
        });

        let both = wgpu::ShaderStages::VERTEX_FRAGMENT;
        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("prism lit bgl"),
            entries: &[
                uniform_entry::<MatricesUniform>(Binding::Matrices, wgpu::ShaderStages::VERTEX),
                uniform_entry::<LightUniform>(Binding::Light, both),
                uniform_entry::<MaterialUniform>(Binding::Material, both),
            ],
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("prism lit pipeline layout"),
            bind_group_layouts: &[&bind_group_layout],
            immediate_size: 0,
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("prism lit pipeline"),
            layout: Some(&pipeline_layout),

            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("main_vert"),
                compilation_options: Default::default(),
                buffers: &[GpuMesh::position_layout(), GpuMesh::normal_layout()],
            },

            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("main_frag"),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format: surface_format,
                    blend: None,
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),

            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                cull_mode: None,
                ..Default::default()
            },

            depth_stencil: Some(wgpu::DepthStencilState {
                format: depth_format,
                depth_write_enabled: true,
                depth_compare: wgpu::CompareFunction::Less,
                stencil: wgpu::StencilState::default(),
                bias: wgpu::DepthBiasState::default(),
            }),
            multisample: wgpu::MultisampleState::default(),

            multiview_mask: None,
            cache: None,
        });

        Self {
            pipeline,
            bind_group_layout,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shader_uses_binding_numbers() {
        let src = lit_shader_source();
        assert!(src.contains("@group(0) @binding(4) var<uniform> matrices"));
        assert!(src.contains("@group(0) @binding(3) var<uniform> light"));
        assert!(src.contains("@group(0) @binding(7) var<uniform> material"));
    }

    #[test]
    fn shader_uses_vertex_locations() {
        let src = lit_shader_source();
        assert!(src.contains("@location(1) position: vec3f"));
        assert!(src.contains("@location(3) normal: vec3f"));
    }
}
