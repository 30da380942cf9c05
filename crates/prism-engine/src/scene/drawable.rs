use glam::Mat4;
use wgpu::util::DeviceExt;

use crate::geometry::{GpuMesh, MeshData};
use crate::math::ViewProjection;
use crate::paint::Color;

use super::{Binding, LitPipeline, MaterialUniform, MatricesUniform, SharedLight, BIND_GROUP};

/// Lambertian surface terms.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Material {
    pub ambient: Color,
    pub diffuse: Color,
}

impl Material {
    /// Same color for ambient and diffuse response.
    pub const fn uniform(color: Color) -> Self {
        Self {
            ambient: color,
            diffuse: color,
        }
    }

    pub fn to_uniform(&self) -> MaterialUniform {
        MaterialUniform {
            ambient: self.ambient.to_padded_rgb(),
            diffuse: self.diffuse.to_padded_rgb(),
        }
    }
}

impl Default for Material {
    fn default() -> Self {
        Self::uniform(Color::WHITE)
    }
}

/// Collects geometry, material and transform for one scene object.
pub struct DrawableBuilder {
    label: String,
    mesh: MeshData,
    material: Material,
    model: Mat4,
}

impl DrawableBuilder {
    pub fn new(label: impl Into<String>, mesh: MeshData) -> Self {
        Self {
            label: label.into(),
            mesh,
            material: Material::default(),
            model: Mat4::IDENTITY,
        }
    }

    pub fn material(mut self, material: Material) -> Self {
        self.material = material;
        self
    }

    pub fn transform(mut self, model: Mat4) -> Self {
        self.model = model;
        self
    }

    /// Uploads the mesh, allocates both uniform buffers and wires the bind
    /// group against `pipeline`'s layout and the scene light.
    pub fn build(self, device: &wgpu::Device, pipeline: &LitPipeline, light: &SharedLight) -> Drawable {
        let Self {
            label,
            mesh,
            material,
            model,
        } = self;

        let mesh = GpuMesh::upload(device, &mesh, &label);

        let matrices_ubo = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some(&format!("{label} matrices ubo")),
            size: std::mem::size_of::<MatricesUniform>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let material_ubo = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(&format!("{label} material ubo")),
            contents: bytemuck::bytes_of(&material.to_uniform()),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some(&format!("{label} bind group")),
            layout: &pipeline.bind_group_layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: Binding::Matrices.index(),
                    resource: matrices_ubo.as_entire_binding(),
                },
                wgpu::BindGroupEntry {
                    binding: Binding::Light.index(),
                    resource: light.buffer().as_entire_binding(),
                },
                wgpu::BindGroupEntry {
                    binding: Binding::Material.index(),
                    resource: material_ubo.as_entire_binding(),
                },
            ],
        });

        log::debug!("drawable '{label}': {} indices", mesh.index_count());

        Drawable {
            label,
            mesh,
            model,
            material,
            matrices_ubo,
            material_ubo,
            bind_group,
        }
    }
}

/// One lit scene object with its own uniform buffers and bind group.
pub struct Drawable {
    label: String,
    mesh: GpuMesh,
    pub model: Mat4,
    pub material: Material,
    matrices_ubo: wgpu::Buffer,
    material_ubo: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
}

impl Drawable {
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Matrices for the current model transform seen through `camera`.
    pub fn uniforms(&self, camera: &ViewProjection) -> MatricesUniform {
        MatricesUniform::new(camera.mvp(self.model), camera.normal(self.model))
    }

    /// Re-uploads matrices and material.
    pub fn write_uniforms(&self, queue: &wgpu::Queue, camera: &ViewProjection) {
        queue.write_buffer(&self.matrices_ubo, 0, bytemuck::bytes_of(&self.uniforms(camera)));
        queue.write_buffer(&self.material_ubo, 0, bytemuck::bytes_of(&self.material.to_uniform()));
    }

    /// Records this object's draw. The lit pipeline must already be set.
    pub fn draw(&self, pass: &mut wgpu::RenderPass<'_>) {
        pass.set_bind_group(BIND_GROUP, &self.bind_group, &[]);
        self.mesh.draw(pass);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn material_uniform_pads_each_term() {
        let m = Material::uniform(Color::rgb(1.0, 0.5, 0.5));
        let u = m.to_uniform();
        assert_eq!(u.ambient, [1.0, 0.5, 0.5, 0.0]);
        assert_eq!(u.diffuse, u.ambient);
    }

    #[test]
    fn builder_defaults() {
        let b = DrawableBuilder::new("cube", crate::geometry::cube());
        assert_eq!(b.model, Mat4::IDENTITY);
        assert_eq!(b.material, Material::default());

        let b = b.transform(Mat4::from_translation(glam::Vec3::Y));
        assert_eq!(b.model.w_axis.y, 1.0);
    }
}
