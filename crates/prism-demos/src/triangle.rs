//! 2D triangle spun by a per-frame rotation.
//!
//! `Rotating` uploads a single model matrix. `Transformed` uploads scale,
//! rotation and translation separately and lets the vertex shader compose
//! `T · R · S`.

use anyhow::Result;
use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec3};
use wgpu::util::DeviceExt;

use prism_engine::core::{App, AppControl, FrameCtx, PassSetup};
use prism_engine::geometry::triangle_2d;
use prism_engine::input::Key;
use prism_engine::paint::Color;
use prism_engine::render::RenderCtx;
use prism_engine::scene::{uniform_entry, Binding, Location, BIND_GROUP};

pub const CLEAR: Color = Color::rgb(0.0, 0.0, 0.4);

/// Rotation rate in degrees per millisecond.
pub const DEG_PER_MS: f32 = 0.1;

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum TriangleMode {
    Rotating,
    Transformed,
}

/// Separate scale, rotation and translation matrices.
#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
pub struct TrsUniform {
    pub s: [[f32; 4]; 4],
    pub r: [[f32; 4]; 4],
    pub t: [[f32; 4]; 4],
}

impl TrsUniform {
    pub fn new(rotation: Mat4) -> Self {
        Self {
            s: Mat4::from_scale(Vec3::splat(0.5)).to_cols_array_2d(),
            r: rotation.to_cols_array_2d(),
            t: Mat4::from_translation(Vec3::new(0.5, 0.0, 0.0)).to_cols_array_2d(),
        }
    }

    /// `T · R · S`, the product the vertex shader forms.
    pub fn composed(&self) -> Mat4 {
        Mat4::from_cols_array_2d(&self.t) * Mat4::from_cols_array_2d(&self.r) * Mat4::from_cols_array_2d(&self.s)
    }
}

pub fn shader_source(mode: TriangleMode) -> String {
    let (uniform, transform) = match mode {
        TriangleMode::Rotating => ("mat4x4f", "matrices"),
        TriangleMode::Transformed => ("Trs", "matrices.t * matrices.r * matrices.s"),
    };

    format!(
        r#"
struct Trs {{
    s: mat4x4f,
    r: mat4x4f,
    t: mat4x4f,
}};

{binding} var<uniform> matrices: {uniform};

@vertex
fn main_vert({location} position: vec2f) -> @builtin(position) vec4f {{
    return {transform} * vec4f(position, 0.0, 1.0);
}}

@fragment
fn main_frag() -> @location(0) vec4f {{
    return vec4f(1.0, 0.0, 0.0, 1.0);
}}
"#,
        binding = Binding::Matrices.wgsl(),
        location = Location::Position.wgsl(),
    )
}

struct TriangleGpu {
    pipeline: wgpu::RenderPipeline,
    vertices: wgpu::Buffer,
    ubo: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
}

pub struct TriangleDemo {
    mode: TriangleMode,
    rotation: Mat4,
    gpu: Option<TriangleGpu>,
}

impl TriangleDemo {
    pub fn new(mode: TriangleMode) -> Self {
        Self {
            mode,
            rotation: Mat4::IDENTITY,
            gpu: None,
        }
    }

    pub fn rotation(&self) -> Mat4 {
        self.rotation
    }

    /// Post-multiplies the accumulated rotation by `Rz(dt_ms · 0.1°)`.
    pub fn advance(&mut self, dt_ms: f32) {
        self.rotation *= Mat4::from_rotation_z((dt_ms * DEG_PER_MS).to_radians());
    }

    /// Uniform buffer contents for the current rotation.
    pub fn uniform_bytes(&self) -> Vec<u8> {
        match self.mode {
            TriangleMode::Rotating => bytemuck::bytes_of(&self.rotation.to_cols_array_2d()).to_vec(),
            TriangleMode::Transformed => bytemuck::bytes_of(&TrsUniform::new(self.rotation)).to_vec(),
        }
    }
}

impl App for TriangleDemo {
    fn setup(&mut self, ctx: &RenderCtx<'_>) -> Result<()> {
        let device = ctx.device;

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("triangle shader"),
            source: wgpu::ShaderSource::Wgsl(shader_source(self.mode).into()),
        });

        let entry = match self.mode {
            TriangleMode::Rotating => uniform_entry::<[[f32; 4]; 4]>(Binding::Matrices, wgpu::ShaderStages::VERTEX),
            TriangleMode::Transformed => uniform_entry::<TrsUniform>(Binding::Matrices, wgpu::ShaderStages::VERTEX),
        };
        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("triangle bgl"),
            entries: &[entry],
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("triangle pipeline layout"),
            bind_group_layouts: &[&bind_group_layout],
            immediate_size: 0,
        });

        const ATTRS: [wgpu::VertexAttribute; 1] = [wgpu::VertexAttribute {
            format: wgpu::VertexFormat::Float32x2,
            offset: 0,
            shader_location: Location::Position.index(),
        }];

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("triangle pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("main_vert"),
                compilation_options: Default::default(),
                buffers: &[wgpu::VertexBufferLayout {
                    array_stride: std::mem::size_of::<[f32; 2]>() as u64,
                    step_mode: wgpu::VertexStepMode::Vertex,
                    attributes: &ATTRS,
                }],
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("main_frag"),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format: ctx.surface_format,
                    blend: None,
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),
            primitive: wgpu::PrimitiveState::default(),
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview_mask: None,
            cache: None,
        });

        let vertices = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("triangle vertices"),
            contents: bytemuck::cast_slice(&triangle_2d()),
            usage: wgpu::BufferUsages::VERTEX,
        });

        let ubo = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("triangle matrices ubo"),
            contents: &self.uniform_bytes(),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("triangle bind group"),
            layout: &bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: Binding::Matrices.index(),
                resource: ubo.as_entire_binding(),
            }],
        });

        log::info!("triangle demo ready ({:?})", self.mode);

        self.gpu = Some(TriangleGpu {
            pipeline,
            vertices,
            ubo,
            bind_group,
        });
        Ok(())
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        if ctx.input_frame.pressed(Key::Escape) {
            return AppControl::Exit;
        }

        self.advance(ctx.time.dt_ms());
        let bytes = self.uniform_bytes();

        let Some(gpu) = self.gpu.as_ref() else {
            return AppControl::Continue;
        };

        ctx.render(PassSetup::color(CLEAR), |rctx, pass| {
            rctx.queue.write_buffer(&gpu.ubo, 0, &bytes);

            pass.set_pipeline(&gpu.pipeline);
            pass.set_bind_group(BIND_GROUP, &gpu.bind_group, &[]);
            pass.set_vertex_buffer(0, gpu.vertices.slice(..));
            pass.draw(0..3, 0..1);
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec4;

    const EPS: f32 = 1e-5;

    #[test]
    fn trs_uniform_is_three_matrices() {
        assert_eq!(std::mem::size_of::<TrsUniform>(), 192);
        assert_eq!(TriangleDemo::new(TriangleMode::Transformed).uniform_bytes().len(), 192);
        assert_eq!(TriangleDemo::new(TriangleMode::Rotating).uniform_bytes().len(), 64);
    }

    #[test]
    fn rotation_accumulates_per_millisecond() {
        let mut demo = TriangleDemo::new(TriangleMode::Rotating);
        demo.advance(450.0);
        demo.advance(450.0);

        // 900 ms at 0.1°/ms is a quarter turn: +X maps to +Y.
        let x = demo.rotation() * Vec4::X;
        assert!(x.abs_diff_eq(Vec4::Y, EPS), "{x:?}");
    }

    #[test]
    fn transformed_scales_before_translating() {
        let trs = TrsUniform::new(Mat4::IDENTITY);
        let top = trs.composed() * Vec4::new(0.0, 0.8, 0.0, 1.0);
        assert!(top.abs_diff_eq(Vec4::new(0.5, 0.4, 0.0, 1.0), EPS), "{top:?}");
    }

    #[test]
    fn transformed_rotates_about_its_own_origin() {
        let mut demo = TriangleDemo::new(TriangleMode::Transformed);
        demo.advance(1800.0);
        let trs = TrsUniform::new(demo.rotation());

        // Half a turn flips the apex, the translation still applies afterwards.
        let top = trs.composed() * Vec4::new(0.0, 0.8, 0.0, 1.0);
        assert!(top.abs_diff_eq(Vec4::new(0.5, -0.4, 0.0, 1.0), 1e-4), "{top:?}");
    }

    #[test]
    fn shaders_bind_matrices_slot() {
        for mode in [TriangleMode::Rotating, TriangleMode::Transformed] {
            let src = shader_source(mode);
            assert!(src.contains("@group(0) @binding(4) var<uniform> matrices"));
            assert!(src.contains("@location(1) position: vec2f"));
        }
        assert!(shader_source(TriangleMode::Transformed).contains("matrices.t * matrices.r * matrices.s"));
    }
}
