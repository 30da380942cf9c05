use bytemuck::{Pod, Zeroable};
use glam::Mat4;

/// Per-object transforms: clip transform first, normal transform second.
#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
pub struct MatricesUniform {
    pub mvp: [[f32; 4]; 4],
    pub normal: [[f32; 4]; 4],
}

impl MatricesUniform {
    pub fn new(mvp: Mat4, normal: Mat4) -> Self {
        Self {
            mvp: mvp.to_cols_array_2d(),
            normal: normal.to_cols_array_2d(),
        }
    }
}

/// Scene light. WGSL `vec3f` members are padded to 16 bytes.
#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
pub struct LightUniform {
    pub position: [f32; 4],
    pub ambient: [f32; 4],
    pub diffuse: [f32; 4],
}

/// Per-object material. WGSL `vec3f` members are padded to 16 bytes.
#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
pub struct MaterialUniform {
    pub ambient: [f32; 4],
    pub diffuse: [f32; 4],
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::mem::size_of;

    #[test]
    fn sizes_match_wgsl_layout() {
        assert_eq!(size_of::<MatricesUniform>(), 4 * 16 * 2);
        assert_eq!(size_of::<LightUniform>(), 4 * 4 * 3);
        assert_eq!(size_of::<MaterialUniform>(), 4 * 4 * 2);
    }

    #[test]
    fn matrices_pack_mvp_then_normal() {
        let mvp = Mat4::from_scale(glam::Vec3::splat(2.0));
        let u = MatricesUniform::new(mvp, Mat4::IDENTITY);
        let floats: [f32; 32] = bytemuck::cast(u);
        assert_eq!(floats[0], 2.0);
        assert_eq!(floats[16], 1.0);
        assert_eq!(floats[15], 1.0);
    }
}
