use super::MeshData;

/// Unit cube centered at the origin with per-face normals.
///
/// ```text
///    v6----- v5
///   /|      /|
///  v1------v0|
///  | |     | |
///  | |v7---|-|v4
///  |/      |/
///  v2------v3
/// ```
///
/// Each face has its own four vertices so normals stay flat: 24 vertices,
/// 36 indices.
pub fn cube() -> MeshData {
    const H: f32 = 0.5;

    #[rustfmt::skip]
    let positions = vec![
        [ H,  H,  H], [-H,  H,  H], [-H, -H,  H], [ H, -H,  H], // v0-v1-v2-v3 front
        [ H,  H,  H], [ H, -H,  H], [ H, -H, -H], [ H,  H, -H], // v0-v3-v4-v5 right
        [ H,  H,  H], [ H,  H, -H], [-H,  H, -H], [-H,  H,  H], // v0-v5-v6-v1 up
        [-H,  H,  H], [-H,  H, -H], [-H, -H, -H], [-H, -H,  H], // v1-v6-v7-v2 left
        [-H, -H, -H], [ H, -H, -H], [ H, -H,  H], [-H, -H,  H], // v7-v4-v3-v2 down
        [ H, -H, -H], [-H, -H, -H], [-H,  H, -H], [ H,  H, -H], // v4-v7-v6-v5 back
    ];

    let face_normals: [[f32; 3]; 6] = [
        [0.0, 0.0, 1.0],
        [1.0, 0.0, 0.0],
        [0.0, 1.0, 0.0],
        [-1.0, 0.0, 0.0],
        [0.0, -1.0, 0.0],
        [0.0, 0.0, -1.0],
    ];
    let normals = face_normals
        .iter()
        .flat_map(|n| std::iter::repeat_n(*n, 4))
        .collect();

    MeshData {
        positions,
        normals,
        uvs: Vec::new(),
        indices: quad_indices(6),
    }
}

/// Unit square in the XY plane facing +Z.
pub fn plane() -> MeshData {
    const H: f32 = 0.5;
    MeshData {
        positions: vec![[H, H, 0.0], [-H, H, 0.0], [-H, -H, 0.0], [H, -H, 0.0]],
        normals: vec![[0.0, 0.0, 1.0]; 4],
        uvs: Vec::new(),
        indices: quad_indices(1),
    }
}

/// Unit square in the XY plane with texture coordinates spanning
/// `0..uv_repeat`, so a repeat-wrapped texture tiles `uv_repeat` times.
pub fn textured_quad(uv_repeat: f32) -> MeshData {
    const H: f32 = 0.5;
    let r = uv_repeat;
    MeshData {
        positions: vec![[-H, -H, 0.0], [H, -H, 0.0], [H, H, 0.0], [-H, H, 0.0]],
        normals: Vec::new(),
        uvs: vec![[0.0, 0.0], [r, 0.0], [r, r], [0.0, r]],
        indices: vec![0, 1, 2, 2, 3, 0],
    }
}

/// The 2D tutorial triangle in normalized device coordinates.
pub fn triangle_2d() -> [[f32; 2]; 3] {
    [[0.0, 0.8], [-0.8, -0.8], [0.8, -0.8]]
}

/// Two triangles (0,1,2) and (0,2,3) per 4-vertex face.
fn quad_indices(faces: u32) -> Vec<u32> {
    (0..faces)
        .flat_map(|f| {
            let b = f * 4;
            [b, b + 1, b + 2, b, b + 2, b + 3]
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cube_shape() {
        let c = cube();
        assert_eq!(c.vertex_count(), 24);
        assert_eq!(c.indices.len(), 36);
        assert_eq!(c.triangle_count(), 12);
        assert!(c.indices.iter().all(|&i| i < 24));
        assert!(c.is_consistent());
    }

    #[test]
    fn cube_normals_point_out_of_their_face() {
        let c = cube();
        for (p, n) in c.positions.iter().zip(&c.normals) {
            let d: f32 = (0..3).map(|k| p[k] * n[k]).sum();
            assert!((d - 0.5).abs() < 1e-6, "{p:?} · {n:?}");
        }
    }

    #[test]
    fn cube_face_indices_match_literal_table() {
        let c = cube();
        assert_eq!(&c.indices[..6], &[0, 1, 2, 0, 2, 3]);
        assert_eq!(&c.indices[30..], &[20, 21, 22, 20, 22, 23]);
    }

    #[test]
    fn plane_shape() {
        let p = plane();
        assert_eq!(p.vertex_count(), 4);
        assert_eq!(p.indices, vec![0, 1, 2, 0, 2, 3]);
        assert!(p.indices.iter().all(|&i| i < 4));
        assert!(p.normals.iter().all(|n| *n == [0.0, 0.0, 1.0]));
    }

    #[test]
    fn textured_quad_repeats_uvs() {
        let q = textured_quad(20.0);
        assert!(q.is_consistent());
        assert_eq!(q.uvs[2], [20.0, 20.0]);
        assert!(q.normals.is_empty());
    }

    #[test]
    fn inconsistent_mesh_is_detected() {
        let mut p = plane();
        p.indices.push(9);
        p.indices.extend([0, 1]);
        assert!(!p.is_consistent());
    }
}
