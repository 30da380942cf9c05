use super::ResizeSlot;

/// Depth format used by every depth-tested pipeline in the demos.
pub const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth24Plus;

/// Depth buffer that tracks the size of the surface image it is paired with.
///
/// The texture is allocated on first use and re-allocated (old texture
/// destroyed first) whenever the requested size differs from the current one.
pub struct DepthTarget {
    format: wgpu::TextureFormat,
    slot: ResizeSlot<(wgpu::Texture, wgpu::TextureView)>,
}

impl Default for DepthTarget {
    fn default() -> Self {
        Self::new(DEPTH_FORMAT)
    }
}

impl DepthTarget {
    pub fn new(format: wgpu::TextureFormat) -> Self {
        Self {
            format,
            slot: ResizeSlot::new(),
        }
    }

    pub fn format(&self) -> wgpu::TextureFormat {
        self.format
    }

    /// Returns a view of a depth texture matching `size`.
    pub fn view_for(&mut self, device: &wgpu::Device, size: (u32, u32)) -> &wgpu::TextureView {
        let format = self.format;
        let ((_, view), fresh) = self.slot.ensure(
            size,
            |(width, height)| {
                let texture = device.create_texture(&wgpu::TextureDescriptor {
                    label: Some("prism depth texture"),
                    size: wgpu::Extent3d {
                        width: width.max(1),
                        height: height.max(1),
                        depth_or_array_layers: 1,
                    },
                    mip_level_count: 1,
                    sample_count: 1,
                    dimension: wgpu::TextureDimension::D2,
                    format,
                    usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
                    view_formats: &[],
                });
                let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
                (texture, view)
            },
            |(texture, _)| texture.destroy(),
        );

        if fresh {
            log::debug!("depth buffer allocated: {}x{}", size.0, size.1);
        }
        view
    }
}
