//! Texture filtering on a large tiled quad seen at a grazing angle.
//!
//! Keyboard controls:
//! - `T` next texture
//! - `M` next minification filter
//! - `G` next magnification filter
//! - `Up` / `Down` change the camera speed
//! - `Esc` quit
//!
//! Texture and filter changes mark the material dirty; the sampler and bind
//! group are rebuilt on the next frame.

use anyhow::Result;
use glam::{Mat4, Vec3};

use prism_engine::core::{App, AppControl, FrameCtx, PassSetup};
use prism_engine::geometry::{textured_quad, GpuMesh};
use prism_engine::input::Key;
use prism_engine::math::{perspective, Bounce, ViewProjection};
use prism_engine::paint::Color;
use prism_engine::render::{DepthTarget, RenderCtx, DEPTH_FORMAT};
use prism_engine::scene::{
    sampler_entry, texture_entry, uniform_entry, Binding, Location, MatricesUniform, BIND_GROUP,
};
use prism_engine::texture::{checkerboard, FilterSettings, GpuTexture, MagFilter, MinFilter, MipChain};

pub const CLEAR: Color = Color::BLACK;

pub const CHECKERBOARD_SIZE: u32 = 32;
pub const SEPARATE_COLOR_LEVELS: u32 = 6;
pub const SEPARATE_COLORS: [&str; 6] = ["#ff0000", "#00ff00", "#0000ff", "#ffff00", "#ff00ff", "#00ffff"];

/// Texture coordinates span `0..UV_REPEAT`; the quad is scaled by the same.
pub const UV_REPEAT: f32 = 20.0;

pub const X_MIN: f32 = -2.0;
pub const X_MAX: f32 = 2.0;

pub const SPEED_STEP: f32 = 10.0;
pub const SPEED_MAX: f32 = 100.0;

/// Camera travel per second per unit of speed.
const SPEED_SCALE: f32 = 0.01;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub enum TextureKind {
    #[default]
    Checkerboard,
    SeparateColors,
}

impl TextureKind {
    pub const ALL: [TextureKind; 2] = [TextureKind::Checkerboard, TextureKind::SeparateColors];

    pub fn name(self) -> &'static str {
        match self {
            TextureKind::Checkerboard => "checkerboard",
            TextureKind::SeparateColors => "separate_colors",
        }
    }

    pub fn next(self) -> Self {
        match self {
            TextureKind::Checkerboard => TextureKind::SeparateColors,
            TextureKind::SeparateColors => TextureKind::Checkerboard,
        }
    }

    fn index(self) -> usize {
        self as usize
    }

    /// CPU-side mip chain for this texture.
    pub fn build(self) -> Result<MipChain> {
        match self {
            TextureKind::Checkerboard => Ok(MipChain::generate(checkerboard(CHECKERBOARD_SIZE))),
            TextureKind::SeparateColors => {
                let colors: Vec<Color> = SEPARATE_COLORS.iter().filter_map(|h| Color::from_hex(h)).collect();
                MipChain::flat_colors(SEPARATE_COLOR_LEVELS, &colors)
            }
        }
    }
}

/// Initial selection of the texture demo.
#[derive(Debug, Clone, PartialEq)]
pub struct TexDemoConfig {
    pub texture: TextureKind,
    pub min_filter: MinFilter,
    pub mag_filter: MagFilter,
    /// Camera speed, `0..=SPEED_MAX`.
    pub speed: f32,
}

impl Default for TexDemoConfig {
    fn default() -> Self {
        Self {
            texture: TextureKind::Checkerboard,
            min_filter: MinFilter::LinearMipmapLinear,
            mag_filter: MagFilter::Linear,
            speed: 50.0,
        }
    }
}

/// Texture/filter selection and the bouncing camera.
#[derive(Debug, Clone)]
pub struct TextureDemoState {
    pub config: TexDemoConfig,
    camera_x: Bounce,
    dirty: bool,
}

impl TextureDemoState {
    pub fn new(mut config: TexDemoConfig) -> Self {
        config.speed = config.speed.clamp(0.0, SPEED_MAX);
        Self {
            config,
            camera_x: Bounce::new(0.0, X_MIN, X_MAX),
            dirty: true,
        }
    }

    pub fn filters(&self) -> FilterSettings {
        FilterSettings::new(self.config.min_filter, self.config.mag_filter)
    }

    pub fn camera_x(&self) -> f32 {
        self.camera_x.value
    }

    /// Applies one key press. Texture and filter changes mark the material
    /// dirty.
    pub fn handle_key(&mut self, key: Key) -> AppControl {
        let cfg = &mut self.config;
        match key {
            Key::Escape => return AppControl::Exit,
            Key::T => cfg.texture = cfg.texture.next(),
            Key::M => cfg.min_filter = cfg.min_filter.next(),
            Key::G => cfg.mag_filter = cfg.mag_filter.next(),
            Key::ArrowUp => cfg.speed = (cfg.speed + SPEED_STEP).min(SPEED_MAX),
            Key::ArrowDown => cfg.speed = (cfg.speed - SPEED_STEP).max(0.0),
            _ => return AppControl::Continue,
        }

        if matches!(key, Key::T | Key::M | Key::G) {
            self.dirty = true;
        } else {
            log::info!("speed: {}", self.config.speed);
        }
        AppControl::Continue
    }

    /// Returns and clears the dirty flag.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    /// Moves the camera for a frame of `dt` seconds and returns its x.
    pub fn advance(&mut self, dt: f32) -> f32 {
        self.camera_x.advance(self.config.speed * SPEED_SCALE, dt)
    }

    pub fn title(&self) -> String {
        let cfg = &self.config;
        format!(
            "tex_mipmap: {} | min {} | mag {}",
            cfg.texture.name(),
            cfg.min_filter.name(),
            cfg.mag_filter.name()
        )
    }
}

/// View at the starting pose: eye (0, -10, 1) looking at the origin.
pub fn base_view() -> Mat4 {
    Mat4::look_at_rh(Vec3::new(0.0, -10.0, 1.0), Vec3::ZERO, Vec3::Y)
}

/// Orientation stays fixed while the camera slides along x.
pub fn camera(x: f32, aspect: f32) -> ViewProjection {
    let view = base_view() * Mat4::from_translation(Vec3::new(-x, 0.0, 0.0));
    ViewProjection::new(view, perspective(60.0, aspect, 1.0, 100.0))
}

pub fn quad_model() -> Mat4 {
    Mat4::from_scale(Vec3::splat(UV_REPEAT))
}

pub fn shader_source() -> String {
    format!(
        r#"
struct Matrices {{
    mvp: mat4x4f,
    normal: mat4x4f,
}};

{matrices} var<uniform> matrices: Matrices;
{texture} var tex: texture_2d<f32>;
{sampler} var tex_sampler: sampler;

struct VertexOut {{
    @builtin(position) clip: vec4f,
    @location(0) uv: vec2f,
}};

@vertex
fn main_vert({position} position: vec3f, {uv} uv: vec2f) -> VertexOut {{
    var out: VertexOut;
    out.clip = matrices.mvp * vec4f(position, 1.0);
    out.uv = uv;
    return out;
}}

@fragment
fn main_frag(in: VertexOut) -> @location(0) vec4f {{
    return textureSample(tex, tex_sampler, in.uv);
}}
"#,
        matrices = Binding::Matrices.wgsl(),
        texture = Binding::Texture.wgsl(),
        sampler = Binding::Sampler.wgsl(),
        position = Location::Position.wgsl(),
        uv = Location::TexCoord.wgsl(),
    )
}

struct TexGpu {
    pipeline: wgpu::RenderPipeline,
    bind_group_layout: wgpu::BindGroupLayout,
    quad: GpuMesh,
    matrices_ubo: wgpu::Buffer,
    /// Indexed by `TextureKind`.
    textures: Vec<GpuTexture>,
    bind_group: Option<wgpu::BindGroup>,
}

impl TexGpu {
    fn rebind(&mut self, device: &wgpu::Device, state: &TextureDemoState) {
        let sampler = device.create_sampler(&state.filters().sampler_descriptor());
        let texture = &self.textures[state.config.texture.index()];

        self.bind_group = Some(device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("tex_mipmap bind group"),
            layout: &self.bind_group_layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: Binding::Matrices.index(),
                    resource: self.matrices_ubo.as_entire_binding(),
                },
                wgpu::BindGroupEntry {
                    binding: Binding::Texture.index(),
                    resource: wgpu::BindingResource::TextureView(&texture.view),
                },
                wgpu::BindGroupEntry {
                    binding: Binding::Sampler.index(),
                    resource: wgpu::BindingResource::Sampler(&sampler),
                },
            ],
        }));
    }
}

pub struct TexMipmapDemo {
    state: TextureDemoState,
    depth: DepthTarget,
    gpu: Option<TexGpu>,
}

impl TexMipmapDemo {
    pub fn new(config: TexDemoConfig) -> Self {
        Self {
            state: TextureDemoState::new(config),
            depth: DepthTarget::default(),
            gpu: None,
        }
    }
}

impl App for TexMipmapDemo {
    fn setup(&mut self, ctx: &RenderCtx<'_>) -> Result<()> {
        let device = ctx.device;

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("tex_mipmap shader"),
            source: wgpu::ShaderSource::Wgsl(shader_source().into()),
        });

        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("tex_mipmap bgl"),
            entries: &[
                uniform_entry::<MatricesUniform>(Binding::Matrices, wgpu::ShaderStages::VERTEX),
                texture_entry(Binding::Texture),
                sampler_entry(Binding::Sampler),
            ],
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("tex_mipmap pipeline layout"),
            bind_group_layouts: &[&bind_group_layout],
            immediate_size: 0,
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("tex_mipmap pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("main_vert"),
                compilation_options: Default::default(),
                buffers: &[GpuMesh::position_layout(), GpuMesh::uv_layout()],
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
            depth_stencil: Some(wgpu::DepthStencilState {
                format: DEPTH_FORMAT,
                depth_write_enabled: true,
                depth_compare: wgpu::CompareFunction::Less,
                stencil: wgpu::StencilState::default(),
                bias: wgpu::DepthBiasState::default(),
            }),
            multisample: wgpu::MultisampleState::default(),
            multiview_mask: None,
            cache: None,
        });

        let textures = TextureKind::ALL
            .iter()
            .map(|kind| -> Result<GpuTexture> {
                let chain = kind.build()?;
                GpuTexture::upload(device, ctx.queue, &chain, kind.name())
            })
            .collect::<Result<Vec<_>>>()?;

        let matrices_ubo = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("tex_mipmap matrices ubo"),
            size: std::mem::size_of::<MatricesUniform>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let quad = GpuMesh::upload(device, &textured_quad(UV_REPEAT), "tex_mipmap quad");

        self.gpu = Some(TexGpu {
            pipeline,
            bind_group_layout,
            quad,
            matrices_ubo,
            textures,
            bind_group: None,
        });
        Ok(())
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        for key in [Key::Escape, Key::T, Key::M, Key::G, Key::ArrowUp, Key::ArrowDown] {
            if ctx.input_frame.pressed(key) && self.state.handle_key(key) == AppControl::Exit {
                return AppControl::Exit;
            }
        }

        let Some(gpu) = self.gpu.as_mut() else {
            return AppControl::Continue;
        };

        if self.state.take_dirty() || gpu.bind_group.is_none() {
            gpu.rebind(ctx.gpu.device(), &self.state);
            let title = self.state.title();
            log::info!("{title}");
            ctx.runtime.set_title(title);
        }

        let x = self.state.advance(ctx.time.dt);

        let gpu = &*gpu;
        let Some(bind_group) = gpu.bind_group.as_ref() else {
            return AppControl::Continue;
        };

        ctx.render(PassSetup::with_depth(CLEAR, &mut self.depth), |rctx, pass| {
            let cam = camera(x, rctx.aspect());
            let model = quad_model();
            let u = MatricesUniform::new(cam.mvp(model), cam.normal(model));
            rctx.queue.write_buffer(&gpu.matrices_ubo, 0, bytemuck::bytes_of(&u));

            pass.set_pipeline(&gpu.pipeline);
            pass.set_bind_group(BIND_GROUP, bind_group, &[]);
            gpu.quad.draw(pass);
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec4;

    const EPS: f32 = 1e-4;

    #[test]
    fn starts_dirty_then_clean() {
        let mut s = TextureDemoState::new(TexDemoConfig::default());
        assert!(s.take_dirty());
        assert!(!s.take_dirty());
    }

    #[test]
    fn filter_keys_mark_dirty() {
        let mut s = TextureDemoState::new(TexDemoConfig::default());
        s.take_dirty();

        s.handle_key(Key::M);
        assert_eq!(s.config.min_filter, MinFilter::Linear);
        assert!(s.take_dirty());

        s.handle_key(Key::G);
        assert_eq!(s.config.mag_filter, MagFilter::Nearest);
        assert!(s.take_dirty());

        s.handle_key(Key::T);
        assert_eq!(s.config.texture, TextureKind::SeparateColors);
        assert!(s.take_dirty());
        assert_eq!(s.filters(), FilterSettings::new(MinFilter::Linear, MagFilter::Nearest));
    }

    #[test]
    fn speed_keys_clamp_without_dirtying() {
        let mut s = TextureDemoState::new(TexDemoConfig {
            speed: 95.0,
            ..TexDemoConfig::default()
        });
        s.take_dirty();

        s.handle_key(Key::ArrowUp);
        assert_eq!(s.config.speed, SPEED_MAX);
        for _ in 0..20 {
            s.handle_key(Key::ArrowDown);
        }
        assert_eq!(s.config.speed, 0.0);
        assert!(!s.take_dirty());
    }

    #[test]
    fn escape_exits() {
        let mut s = TextureDemoState::new(TexDemoConfig::default());
        assert_eq!(s.handle_key(Key::Escape), AppControl::Exit);
        assert_eq!(s.handle_key(Key::Q), AppControl::Continue);
    }

    #[test]
    fn camera_bounces_between_limits() {
        let mut s = TextureDemoState::new(TexDemoConfig {
            speed: 100.0,
            ..TexDemoConfig::default()
        });

        // 1 unit/s: reaches X_MAX after 2 s, then turns around.
        assert!((s.advance(1.5) - 1.5).abs() < EPS);
        assert_eq!(s.advance(1.0), X_MAX);
        assert!((s.advance(0.5) - 1.5).abs() < EPS);
        assert_eq!(s.advance(10.0), X_MIN);
        assert!(s.advance(0.25) > X_MIN);
    }

    #[test]
    fn camera_keeps_orientation_while_sliding() {
        let a = camera(0.0, 1.0).view;
        let b = camera(1.5, 1.0).view;

        // Same rotation, eye shifted along world x.
        let dir = Vec4::new(0.0, 1.0, 0.0, 0.0);
        assert!((a * dir).abs_diff_eq(b * dir, EPS));

        let eye = b.inverse() * Vec4::new(0.0, 0.0, 0.0, 1.0);
        assert!(eye.abs_diff_eq(Vec4::new(1.5, -10.0, 1.0, 1.0), EPS), "{eye:?}");
    }

    #[test]
    fn origin_is_centered_at_start() {
        let vp = camera(0.0, 1.0);
        let clip = vp.view_proj() * Vec4::new(0.0, 0.0, 0.0, 1.0);
        let ndc = clip.truncate() / clip.w;
        assert!(ndc.x.abs() < EPS && ndc.y.abs() < EPS);
    }

    #[test]
    fn both_textures_build() {
        let checker = TextureKind::Checkerboard.build().unwrap();
        assert_eq!(checker.base_size(), (32, 32));
        assert_eq!(checker.level_count(), 6);

        let colors = TextureKind::SeparateColors.build().unwrap();
        assert_eq!(colors.level_count(), SEPARATE_COLOR_LEVELS);
        assert_eq!(colors.level(2).unwrap().get_pixel(0, 0).0, [0, 0, 255, 255]);
    }

    #[test]
    fn shader_binds_texture_slots() {
        let src = shader_source();
        assert!(src.contains("@group(0) @binding(4) var<uniform> matrices"));
        assert!(src.contains("@group(0) @binding(1) var tex: texture_2d<f32>"));
        assert!(src.contains("@group(0) @binding(2) var tex_sampler: sampler"));
        assert!(src.contains("@location(2) uv: vec2f"));
    }

    #[test]
    fn title_names_selection() {
        let s = TextureDemoState::new(TexDemoConfig::default());
        assert_eq!(s.title(), "tex_mipmap: checkerboard | min LINEAR_MIPMAP_LINEAR | mag LINEAR");
    }
}
