//! Lit cube standing on a plane.
//!
//! Both objects share one light and one pipeline; each owns its matrices and
//! material buffers. The scene is drawn plane first, then cube, into a
//! depth-tested pass.

use anyhow::Result;
use glam::{Mat4, Vec3, Vec4};

use prism_engine::core::{App, AppControl, FrameCtx, PassSetup};
use prism_engine::geometry::{cube, plane};
use prism_engine::input::Key;
use prism_engine::math::{perspective, ViewProjection};
use prism_engine::paint::Color;
use prism_engine::render::{DepthTarget, RenderCtx, DEPTH_FORMAT};
use prism_engine::scene::{Drawable, DrawableBuilder, Light, LitPipeline, Material, SharedLight};

pub const CLEAR: Color = Color::rgb(0.5, 0.5, 0.5);

pub const FOVY_DEG: f32 = 50.0;
pub const NEAR: f32 = 1.0;
pub const FAR: f32 = 100.0;

pub fn scene_light() -> Light {
    Light {
        position: Vec4::new(4.0, 4.0, 1.0, 1.0),
        ambient: Color::rgb(0.3, 0.3, 0.3),
        diffuse: Color::WHITE,
    }
}

/// `Rx(10°) · Ry(-40°) · T(-3, -1.5, -4)`.
pub fn camera_view() -> Mat4 {
    Mat4::from_rotation_x(10f32.to_radians())
        * Mat4::from_rotation_y((-40f32).to_radians())
        * Mat4::from_translation(Vec3::new(-3.0, -1.5, -4.0))
}

pub fn camera(aspect: f32) -> ViewProjection {
    ViewProjection::new(camera_view(), perspective(FOVY_DEG, aspect, NEAR, FAR))
}

/// Floor: unit plane scaled 5× and laid flat (facing +Y).
pub fn plane_model() -> Mat4 {
    Mat4::from_scale(Vec3::splat(5.0)) * Mat4::from_rotation_x((-90f32).to_radians())
}

/// Cube lifted so it rests on the floor.
pub fn cube_model() -> Mat4 {
    Mat4::from_translation(Vec3::new(0.0, 0.5, 0.0))
}

pub const PLANE_MATERIAL: Material = Material::uniform(Color::rgb(0.5, 1.0, 1.0));
pub const CUBE_MATERIAL: Material = Material::uniform(Color::rgb(1.0, 0.5, 0.5));

struct SceneGpu {
    pipeline: LitPipeline,
    light: SharedLight,
    /// Draw order.
    drawables: Vec<Drawable>,
}

#[derive(Default)]
pub struct SimpleScene {
    depth: DepthTarget,
    gpu: Option<SceneGpu>,
}

impl SimpleScene {
    pub fn new() -> Self {
        Self::default()
    }
}

impl App for SimpleScene {
    fn setup(&mut self, ctx: &RenderCtx<'_>) -> Result<()> {
        let pipeline = LitPipeline::new(ctx.device, ctx.surface_format, DEPTH_FORMAT);
        let light = SharedLight::new(ctx.device, scene_light());

        let drawables = vec![
            DrawableBuilder::new("plane", plane())
                .material(PLANE_MATERIAL)
                .transform(plane_model())
                .build(ctx.device, &pipeline, &light),
            DrawableBuilder::new("cube", cube())
                .material(CUBE_MATERIAL)
                .transform(cube_model())
                .build(ctx.device, &pipeline, &light),
        ];

        let labels: Vec<&str> = drawables.iter().map(Drawable::label).collect();
        log::info!("simple scene ready: {}", labels.join(", "));

        self.gpu = Some(SceneGpu {
            pipeline,
            light,
            drawables,
        });
        Ok(())
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        if ctx.input_frame.pressed(Key::Escape) {
            return AppControl::Exit;
        }

        let Some(gpu) = self.gpu.as_ref() else {
            return AppControl::Continue;
        };

        ctx.render(PassSetup::with_depth(CLEAR, &mut self.depth), |rctx, pass| {
            let camera = camera(rctx.aspect());
            gpu.light.write(rctx.queue);

            pass.set_pipeline(&gpu.pipeline.pipeline);
            for drawable in &gpu.drawables {
                drawable.write_uniforms(rctx.queue, &camera);
                drawable.draw(pass);
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prism_engine::scene::MatricesUniform;

    const EPS: f32 = 1e-4;

    #[test]
    fn plane_faces_up_after_model_transform() {
        let n = plane_model() * Vec4::new(0.0, 0.0, 1.0, 0.0);
        let n = n.truncate().normalize();
        assert!(n.abs_diff_eq(Vec3::Y, EPS), "{n:?}");
    }

    #[test]
    fn plane_spans_five_units() {
        let corner = plane_model() * Vec4::new(0.5, 0.5, 0.0, 1.0);
        assert!(corner.abs_diff_eq(Vec4::new(2.5, 0.0, -2.5, 1.0), EPS), "{corner:?}");
    }

    #[test]
    fn cube_rests_on_floor() {
        let bottom = cube_model() * Vec4::new(0.0, -0.5, 0.0, 1.0);
        assert!(bottom.y.abs() < EPS);
    }

    #[test]
    fn cube_is_in_front_of_camera() {
        let clip = camera(1.0).mvp(cube_model()) * Vec4::new(0.0, 0.0, 0.0, 1.0);
        let ndc = clip.truncate() / clip.w;
        assert!(clip.w > 0.0);
        assert!(ndc.x.abs() < 1.0 && ndc.y.abs() < 1.0, "{ndc:?}");
        assert!((0.0..1.0).contains(&ndc.z));
    }

    #[test]
    fn matrices_uniform_packs_mvp_and_normal() {
        let cam = camera(1.0);
        let u = MatricesUniform::new(cam.mvp(cube_model()), cam.normal(cube_model()));
        let expected = cam.proj * cam.view * cube_model();
        assert!(Mat4::from_cols_array_2d(&u.mvp).abs_diff_eq(expected, EPS));

        let n = Mat4::from_cols_array_2d(&u.normal);
        let vm = cam.view * cube_model();
        assert!((n.transpose() * vm).abs_diff_eq(Mat4::IDENTITY, EPS));
    }

    #[test]
    fn lit_face_is_brighter_than_ambient() {
        // Top face of the cube: normal +Y against light direction (4,4,1).
        let light = scene_light();
        let l = light.position.truncate().normalize();
        let lambert = l.dot(Vec3::Y).max(0.0);
        let r = light.ambient.r * CUBE_MATERIAL.ambient.r + light.diffuse.r * CUBE_MATERIAL.diffuse.r * lambert;
        assert!(r > light.ambient.r * CUBE_MATERIAL.ambient.r);
        assert!(lambert > 0.6 && lambert < 0.7, "{lambert}");
    }
}
