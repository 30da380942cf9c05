use image::{Rgba, RgbaImage};

/// `n`×`n` black/white checkerboard made of four quadrants.
///
/// A texel is white when it lies in the top-left or bottom-right quadrant,
/// i.e. when `(row < n/2) + (col < n/2)` is even.
pub fn checkerboard(n: u32) -> RgbaImage {
    let half = n / 2;
    RgbaImage::from_fn(n, n, |col, row| {
        let quadrant = u32::from(row < half) + u32::from(col < half);
        let v = if quadrant % 2 == 0 { 255 } else { 0 };
        Rgba([v, v, v, 255])
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quadrants() {
        let img = checkerboard(32);
        assert_eq!(img.dimensions(), (32, 32));

        assert_eq!(img.get_pixel(0, 0).0, [255, 255, 255, 255]);
        assert_eq!(img.get_pixel(31, 31).0, [255, 255, 255, 255]);
        assert_eq!(img.get_pixel(16, 0).0, [0, 0, 0, 255]);
        assert_eq!(img.get_pixel(0, 16).0, [0, 0, 0, 255]);
        assert_eq!(img.get_pixel(15, 15).0, [255, 255, 255, 255]);
        assert_eq!(img.get_pixel(16, 15).0, [0, 0, 0, 255]);
    }

    #[test]
    fn every_texel_follows_quadrant_parity() {
        const N: u32 = 32;
        let img = checkerboard(N);
        for i in 0..N {
            for j in 0..N {
                let parity = (u32::from(i < N / 2) + u32::from(j < N / 2)) % 2;
                let v = if parity == 0 { 255 } else { 0 };
                assert_eq!(img.get_pixel(j, i).0, [v, v, v, 255], "row {i} col {j}");
            }
        }
    }

    #[test]
    fn always_opaque() {
        assert!(checkerboard(8).pixels().all(|p| p.0[3] == 255));
    }
}
