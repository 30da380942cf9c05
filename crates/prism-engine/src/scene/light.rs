use glam::Vec4;
use wgpu::util::DeviceExt;

use crate::paint::Color;

use super::LightUniform;

/// Point/directional light in the Lambertian model.
///
/// The fragment shader uses `normalize(position.xyz)` as the light direction.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Light {
    pub position: Vec4,
    pub ambient: Color,
    pub diffuse: Color,
}

impl Light {
    pub fn to_uniform(&self) -> LightUniform {
        LightUniform {
            position: self.position.to_array(),
            ambient: self.ambient.to_padded_rgb(),
            diffuse: self.diffuse.to_padded_rgb(),
        }
    }
}

/// The scene's single light and the uniform buffer every drawable binds.
pub struct SharedLight {
    pub light: Light,
    buffer: wgpu::Buffer,
}

impl SharedLight {
    pub fn new(device: &wgpu::Device, light: Light) -> Self {
        let buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("prism light ubo"),
            contents: bytemuck::bytes_of(&light.to_uniform()),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });
        Self { light, buffer }
    }

    pub fn buffer(&self) -> &wgpu::Buffer {
        &self.buffer
    }

    pub fn write(&self, queue: &wgpu::Queue) {
        queue.write_buffer(&self.buffer, 0, bytemuck::bytes_of(&self.light.to_uniform()));
    }
}
