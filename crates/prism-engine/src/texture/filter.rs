/// Magnification filter.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub enum MagFilter {
    #[default]
    Linear,
    Nearest,
}

impl MagFilter {
    pub const ALL: [MagFilter; 2] = [MagFilter::Linear, MagFilter::Nearest];

    pub fn name(self) -> &'static str {
        match self {
            MagFilter::Linear => "LINEAR",
            MagFilter::Nearest => "NEAREST",
        }
    }

    /// Next mode in [`Self::ALL`], wrapping around.
    pub fn next(self) -> Self {
        let i = Self::ALL.iter().position(|m| *m == self).unwrap_or(0);
        Self::ALL[(i + 1) % Self::ALL.len()]
    }

    fn filter_mode(self) -> wgpu::FilterMode {
        match self {
            MagFilter::Linear => wgpu::FilterMode::Linear,
            MagFilter::Nearest => wgpu::FilterMode::Nearest,
        }
    }
}

/// Minification filter, named `<texel>_MIPMAP_<level>`.
///
/// The first word selects filtering inside a level, the second how
/// neighbouring levels are combined. The two plain modes ignore mip levels.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub enum MinFilter {
    Linear,
    Nearest,
    NearestMipmapNearest,
    LinearMipmapNearest,
    NearestMipmapLinear,
    #[default]
    LinearMipmapLinear,
}

impl MinFilter {
    pub const ALL: [MinFilter; 6] = [
        MinFilter::Linear,
        MinFilter::Nearest,
        MinFilter::NearestMipmapNearest,
        MinFilter::LinearMipmapNearest,
        MinFilter::NearestMipmapLinear,
        MinFilter::LinearMipmapLinear,
    ];

    pub fn name(self) -> &'static str {
        match self {
            MinFilter::Linear => "LINEAR",
            MinFilter::Nearest => "NEAREST",
            MinFilter::NearestMipmapNearest => "NEAREST_MIPMAP_NEAREST",
            MinFilter::LinearMipmapNearest => "LINEAR_MIPMAP_NEAREST",
            MinFilter::NearestMipmapLinear => "NEAREST_MIPMAP_LINEAR",
            MinFilter::LinearMipmapLinear => "LINEAR_MIPMAP_LINEAR",
        }
    }

    pub fn next(self) -> Self {
        let i = Self::ALL.iter().position(|m| *m == self).unwrap_or(0);
        Self::ALL[(i + 1) % Self::ALL.len()]
    }

    pub fn uses_mipmaps(self) -> bool {
        !matches!(self, MinFilter::Linear | MinFilter::Nearest)
    }

    fn texel_mode(self) -> wgpu::FilterMode {
        match self {
            MinFilter::Linear | MinFilter::LinearMipmapNearest | MinFilter::LinearMipmapLinear => {
                wgpu::FilterMode::Linear
            }
            MinFilter::Nearest | MinFilter::NearestMipmapNearest | MinFilter::NearestMipmapLinear => {
                wgpu::FilterMode::Nearest
            }
        }
    }

    fn mipmap_mode(self) -> wgpu::MipmapFilterMode {
        match self {
            MinFilter::NearestMipmapLinear | MinFilter::LinearMipmapLinear => wgpu::MipmapFilterMode::Linear,
            _ => wgpu::MipmapFilterMode::Nearest,
        }
    }
}

/// Sampler state selected in the texture demo.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub struct FilterSettings {
    pub min: MinFilter,
    pub mag: MagFilter,
}

impl FilterSettings {
    pub fn new(min: MinFilter, mag: MagFilter) -> Self {
        Self { min, mag }
    }

    /// Repeat-wrapped sampler for these filters.
    ///
    /// Non-mipmap minification clamps the LOD to the base level.
    pub fn sampler_descriptor(&self) -> wgpu::SamplerDescriptor<'static> {
        let lod_max_clamp = if self.min.uses_mipmaps() { 32.0 } else { 0.0 };

        wgpu::SamplerDescriptor {
            label: Some("prism texture sampler"),
            address_mode_u: wgpu::AddressMode::Repeat,
            address_mode_v: wgpu::AddressMode::Repeat,
            address_mode_w: wgpu::AddressMode::Repeat,
            mag_filter: self.mag.filter_mode(),
            min_filter: self.min.texel_mode(),
            mipmap_filter: self.min.mipmap_mode(),
            lod_min_clamp: 0.0,
            lod_max_clamp,
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn min_filter_cycles_through_all() {
        let mut f = MinFilter::default();
        let mut seen = Vec::new();
        for _ in 0..MinFilter::ALL.len() {
            f = f.next();
            seen.push(f);
        }
        assert_eq!(f, MinFilter::default());
        for m in MinFilter::ALL {
            assert!(seen.contains(&m));
        }
    }

    #[test]
    fn mag_filter_toggles() {
        assert_eq!(MagFilter::Linear.next(), MagFilter::Nearest);
        assert_eq!(MagFilter::Nearest.next(), MagFilter::Linear);
    }

    #[test]
    fn plain_min_filters_sample_base_level_only() {
        for min in [MinFilter::Linear, MinFilter::Nearest] {
            let d = FilterSettings::new(min, MagFilter::Linear).sampler_descriptor();
            assert_eq!(d.lod_max_clamp, 0.0, "{}", min.name());
        }
        let d = FilterSettings::new(MinFilter::NearestMipmapNearest, MagFilter::Linear).sampler_descriptor();
        assert!(d.lod_max_clamp > 0.0);
    }

    #[test]
    fn mipmap_modes_map_to_sampler_filters() {
        let d = FilterSettings::new(MinFilter::LinearMipmapNearest, MagFilter::Nearest).sampler_descriptor();
        assert_eq!(d.min_filter, wgpu::FilterMode::Linear);
        assert_eq!(d.mipmap_filter, wgpu::MipmapFilterMode::Nearest);
        assert_eq!(d.mag_filter, wgpu::FilterMode::Nearest);

        let d = FilterSettings::new(MinFilter::NearestMipmapLinear, MagFilter::Linear).sampler_descriptor();
        assert_eq!(d.min_filter, wgpu::FilterMode::Nearest);
        assert_eq!(d.mipmap_filter, wgpu::MipmapFilterMode::Linear);
    }

    #[test]
    fn sampler_repeats() {
        let d = FilterSettings::default().sampler_descriptor();
        assert_eq!(d.address_mode_u, wgpu::AddressMode::Repeat);
        assert_eq!(d.address_mode_v, wgpu::AddressMode::Repeat);
    }
}
