use anyhow::{ensure, Result};
use wgpu::util::DeviceExt;

use super::MipChain;

/// Texel format of every uploaded demo texture.
pub const TEXTURE_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Rgba8UnormSrgb;

/// Sampled 2D texture with its full mip chain resident.
pub struct GpuTexture {
    pub texture: wgpu::Texture,
    pub view: wgpu::TextureView,
}

impl GpuTexture {
    /// Uploads every level of `chain`.
    ///
    /// Fails instead of tripping wgpu validation when the base level exceeds
    /// the device's 2D texture limit.
    pub fn upload(device: &wgpu::Device, queue: &wgpu::Queue, chain: &MipChain, label: &str) -> Result<Self> {
        check_fits(chain, &device.limits(), label)?;
        let (width, height) = chain.base_size();

        let texture = device.create_texture_with_data(
            queue,
            &wgpu::TextureDescriptor {
                label: Some(label),
                size: wgpu::Extent3d {
                    width,
                    height,
                    depth_or_array_layers: 1,
                },
                mip_level_count: chain.level_count(),
                sample_count: 1,
                dimension: wgpu::TextureDimension::D2,
                format: TEXTURE_FORMAT,
                usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
                view_formats: &[],
            },
            wgpu::util::TextureDataOrder::LayerMajor,
            &chain.to_bytes(),
        );

        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
        log::debug!("texture '{label}': {width}x{height}, {} levels", chain.level_count());

        Ok(Self { texture, view })
    }
}

fn check_fits(chain: &MipChain, limits: &wgpu::Limits, label: &str) -> Result<()> {
    let (width, height) = chain.base_size();
    let max = limits.max_texture_dimension_2d;
    ensure!(
        width <= max && height <= max,
        "texture '{label}' is {width}x{height}, device limit is {max}"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::RgbaImage;

    #[test]
    fn oversized_base_level_is_rejected() {
        let limits = wgpu::Limits {
            max_texture_dimension_2d: 16,
            ..wgpu::Limits::default()
        };

        let fits = MipChain::generate(RgbaImage::new(16, 16));
        assert!(check_fits(&fits, &limits, "fits").is_ok());

        let wide = MipChain::generate(RgbaImage::new(32, 8));
        let err = check_fits(&wide, &limits, "wide").unwrap_err();
        assert!(err.to_string().contains("32x8"), "{err}");
    }
}
