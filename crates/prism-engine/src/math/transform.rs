use glam::Mat4;

/// Perspective projection with a vertical field of view in degrees.
#[inline]
pub fn perspective(fovy_deg: f32, aspect: f32, near: f32, far: f32) -> Mat4 {
    Mat4::perspective_rh(fovy_deg.to_radians(), aspect, near, far)
}

/// Combined clip transform `proj · view · model`.
#[inline]
pub fn mvp(proj: Mat4, view: Mat4, model: Mat4) -> Mat4 {
    proj * view * model
}

/// Normal transform into view space: `((view · model)⁻¹)ᵀ`.
///
/// Keeps normals perpendicular to surfaces under non-uniform scale.
#[inline]
pub fn normal_matrix(view: Mat4, model: Mat4) -> Mat4 {
    (view * model).inverse().transpose()
}

/// Camera pair shared by every object in a scene.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ViewProjection {
    pub view: Mat4,
    pub proj: Mat4,
}

impl ViewProjection {
    pub fn new(view: Mat4, proj: Mat4) -> Self {
        Self { view, proj }
    }

    pub fn view_proj(&self) -> Mat4 {
        self.proj * self.view
    }

    pub fn mvp(&self, model: Mat4) -> Mat4 {
        mvp(self.proj, self.view, model)
    }

    pub fn normal(&self, model: Mat4) -> Mat4 {
        normal_matrix(self.view, model)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::{Vec3, Vec4};

    const EPS: f32 = 1e-5;

    fn scene_view() -> Mat4 {
        Mat4::from_rotation_x(10f32.to_radians())
            * Mat4::from_rotation_y((-40f32).to_radians())
            * Mat4::from_translation(Vec3::new(-3.0, -1.5, -4.0))
    }

    /// Textbook row-by-column product, independent of glam's operator.
    fn mul(a: Mat4, b: Mat4) -> Mat4 {
        let (a, b) = (a.to_cols_array_2d(), b.to_cols_array_2d());
        let mut out = [[0.0f32; 4]; 4];
        for c in 0..4 {
            for r in 0..4 {
                out[c][r] = (0..4).map(|k| a[k][r] * b[c][k]).sum();
            }
        }
        Mat4::from_cols_array_2d(&out)
    }

    #[test]
    fn mvp_is_literal_product() {
        let p = perspective(50.0, 1.0, 1.0, 100.0);
        let v = scene_view();
        let m = Mat4::from_translation(Vec3::new(0.0, 0.5, 0.0));

        let expected = mul(mul(p, v), m);
        assert!(mvp(p, v, m).abs_diff_eq(expected, EPS));
        assert!(ViewProjection::new(v, p).mvp(m).abs_diff_eq(expected, EPS));
    }

    #[test]
    fn normal_matrix_is_inverse_transpose() {
        let v = scene_view();
        let m = Mat4::from_translation(Vec3::new(1.0, 2.0, -3.0))
            * Mat4::from_rotation_z(0.7)
            * Mat4::from_scale(Vec3::new(2.0, 1.0, 0.5));

        let n = normal_matrix(v, m);
        // Nᵀ · (V·M) == I  ⇔  N == ((V·M)⁻¹)ᵀ
        assert!(mul(n.transpose(), v * m).abs_diff_eq(Mat4::IDENTITY, 1e-4));
    }

    #[test]
    fn normal_stays_perpendicular_under_scale() {
        let v = Mat4::IDENTITY;
        let m = Mat4::from_scale(Vec3::new(5.0, 1.0, 1.0));
        // Plane x + y = 0: normal (1,1,0), tangent (1,-1,0).
        let tangent = m * Vec4::new(1.0, -1.0, 0.0, 0.0);
        let normal = normal_matrix(v, m) * Vec4::new(1.0, 1.0, 0.0, 0.0);
        assert!(tangent.dot(normal).abs() < EPS);
    }

    #[test]
    fn rigid_transform_normal_matrix_keeps_rotation() {
        let v = Mat4::IDENTITY;
        let m = Mat4::from_rotation_y(0.3) * Mat4::from_translation(Vec3::new(0.0, 0.5, 0.0));
        let n = normal_matrix(v, m);
        let dir = Vec4::new(0.0, 0.0, 1.0, 0.0);
        assert!((n * dir).abs_diff_eq(m * dir, EPS));
    }

    #[test]
    fn perspective_maps_near_far_to_unit_depth() {
        let p = perspective(60.0, 1.0, 1.0, 100.0);
        let near = p * Vec4::new(0.0, 0.0, -1.0, 1.0);
        let far = p * Vec4::new(0.0, 0.0, -100.0, 1.0);
        assert!((near.z / near.w).abs() < EPS);
        assert!((far.z / far.w - 1.0).abs() < EPS);
    }
}
