use anyhow::{ensure, Result};
use image::imageops::{self, FilterType};
use image::{Rgba, RgbaImage};

use crate::paint::Color;

/// Most levels a hand-authored chain may have: a `1 << 13` = 8192 texel base,
/// the default `max_texture_dimension_2d`.
pub const MAX_FLAT_LEVELS: u32 = 14;

/// Full or partial mip chain, base level first.
///
/// Each level is half the previous one in both dimensions (never below 1).
#[derive(Debug, Clone)]
pub struct MipChain {
    levels: Vec<RgbaImage>,
}

impl MipChain {
    /// Downsamples `base` repeatedly until a 1×1 level is produced.
    pub fn generate(base: RgbaImage) -> Self {
        let mut levels = Vec::new();
        let mut current = base;
        loop {
            let (w, h) = current.dimensions();
            if w <= 1 && h <= 1 {
                levels.push(current);
                break;
            }
            let next = imageops::resize(&current, (w / 2).max(1), (h / 2).max(1), FilterType::Triangle);
            levels.push(std::mem::replace(&mut current, next));
        }
        Self { levels }
    }

    /// Hand-authored chain of `levels` flat squares: level `l` is
    /// `2^(levels-l-1)` texels wide and filled with `colors[l]`.
    ///
    /// Sampling such a texture shows directly which level the GPU picked.
    pub fn flat_colors(count: u32, colors: &[Color]) -> Result<Self> {
        ensure!(
            (1..=MAX_FLAT_LEVELS).contains(&count),
            "mip level count {count} out of range 1..={MAX_FLAT_LEVELS}"
        );
        ensure!(
            colors.len() >= count as usize,
            "{count} mip levels need as many colors, got {}",
            colors.len()
        );

        let levels = colors
            .iter()
            .take(count as usize)
            .enumerate()
            .map(|(l, color)| {
                let n = 1u32 << (count - l as u32 - 1);
                RgbaImage::from_pixel(n, n, Rgba(color.to_rgba8()))
            })
            .collect();

        Ok(Self { levels })
    }

    pub fn level_count(&self) -> u32 {
        self.levels.len() as u32
    }

    pub fn base_size(&self) -> (u32, u32) {
        self.levels[0].dimensions()
    }

    pub fn level(&self, index: usize) -> Option<&RgbaImage> {
        self.levels.get(index)
    }

    /// All levels' texels back to back, base level first.
    pub fn to_bytes(&self) -> Vec<u8> {
        self.levels.iter().flat_map(|l| l.as_raw().iter().copied()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::texture::checkerboard;

    fn separate_colors() -> Vec<Color> {
        ["#ff0000", "#00ff00", "#0000ff", "#ffff00", "#ff00ff", "#00ffff"]
            .iter()
            .filter_map(|h| Color::from_hex(h))
            .collect()
    }

    #[test]
    fn generated_chain_reaches_one_texel() {
        let chain = MipChain::generate(checkerboard(32));
        assert_eq!(chain.level_count(), 6);
        assert_eq!(chain.base_size(), (32, 32));

        let sizes: Vec<u32> = (0..6).filter_map(|l| chain.level(l)).map(|i| i.width()).collect();
        assert_eq!(sizes, vec![32, 16, 8, 4, 2, 1]);
    }

    #[test]
    fn generated_chain_averages_down() {
        // The four quadrants average out to mid gray at the last level.
        let chain = MipChain::generate(checkerboard(32));
        let last = chain.level(5).unwrap().get_pixel(0, 0).0;
        assert!((100..=155).contains(&last[0]), "{last:?}");
        assert_eq!(last[3], 255);
    }

    #[test]
    fn non_square_base_halves_each_axis() {
        let chain = MipChain::generate(RgbaImage::new(8, 2));
        let dims: Vec<(u32, u32)> = (0..4).filter_map(|l| chain.level(l)).map(|i| i.dimensions()).collect();
        assert_eq!(dims, vec![(8, 2), (4, 1), (2, 1), (1, 1)]);
    }

    #[test]
    fn flat_color_levels() {
        let chain = MipChain::flat_colors(6, &separate_colors()).unwrap();
        assert_eq!(chain.level_count(), 6);
        assert_eq!(chain.base_size(), (32, 32));

        let red = chain.level(0).unwrap();
        assert!(red.pixels().all(|p| p.0 == [255, 0, 0, 255]));

        let cyan = chain.level(5).unwrap();
        assert_eq!(cyan.dimensions(), (1, 1));
        assert_eq!(cyan.get_pixel(0, 0).0, [0, 255, 255, 255]);
    }

    #[test]
    fn flat_colors_needs_enough_colors() {
        assert!(MipChain::flat_colors(7, &separate_colors()).is_err());
        assert!(MipChain::flat_colors(0, &separate_colors()).is_err());
    }

    #[test]
    fn flat_colors_base_fits_default_limits() {
        let limit = wgpu::Limits::default().max_texture_dimension_2d;

        assert_eq!(1u32 << (MAX_FLAT_LEVELS - 1), limit);

        assert!(MipChain::flat_colors(15, &[Color::WHITE; 15]).is_err());
        assert!(MipChain::flat_colors(16, &[Color::WHITE; 16]).is_err());
    }

    #[test]
    fn bytes_cover_every_level() {
        let chain = MipChain::flat_colors(3, &separate_colors()).unwrap();
        // 4x4 + 2x2 + 1x1 texels
        assert_eq!(chain.to_bytes().len(), (16 + 4 + 1) * 4);
    }
}
